use log::Level;
use rootsweep_core::Observer;

use crate::traits::{HasIterate, HasIteration, HasResidual};

/// Writes one `log` record per solver iteration.
///
/// Never requests an action, so the solver runs exactly as it would
/// unobserved. Records go to the `rootsweep_observers` target at the
/// configured level; the application chooses the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
}

impl LogObserver {
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl<E, A> Observer<E, A> for LogObserver
where
    E: HasIteration + HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        log::log!(
            self.level,
            "iter {}: x = {}, residual = {:e}",
            event.iteration(),
            event.iterate(),
            event.residual(),
        );
        None
    }
}
