use std::time::{Duration, Instant};

use rootsweep_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solver at the first iteration after a wall-clock deadline.
///
/// The check runs once per iteration, so a single slow function evaluation
/// can overrun the deadline by one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Instant,
}

impl Deadline {
    /// Creates a deadline `timeout` from now.
    #[must_use]
    pub fn after(timeout: Duration) -> Self {
        Self::at(Instant::now() + timeout)
    }

    #[must_use]
    pub fn at(at: Instant) -> Self {
        Self { at }
    }

    /// Returns true once the deadline has passed.
    #[must_use]
    pub fn expired(&self) -> bool {
        Instant::now() >= self.at
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.expired().then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rootsweep_core::{FiniteDifference, Interval};
    use rootsweep_solvers::{Status, fixed_point, newton};

    #[test]
    fn expired_deadline_stops_after_one_iteration() {
        let f = |x: f64| x - x.cos();

        let config = fixed_point::Config::default();
        let deadline = Deadline::after(Duration::ZERO);

        let result = fixed_point::solve(&f, 0.5, &config, deadline).expect("should stop cleanly");

        assert_eq!(result.status, Status::StoppedByObserver);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.trace.len(), 1);
    }

    #[test]
    fn distant_deadline_lets_the_solver_finish() {
        let f = FiniteDifference::new(|x: f64| x * x - 2.0);
        let start = newton::Start::Bracket(Interval::new(0.0, 2.0).expect("finite endpoints"));
        let deadline = Deadline::after(Duration::from_secs(3600));

        let result = newton::solve(&f, start, &newton::Config::default(), deadline)
            .expect("should solve");

        assert_eq!(result.status, Status::Converged);
        assert!(!deadline.expired());
    }
}
