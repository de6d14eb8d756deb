use rootsweep_core::{Interval, Observer};

use crate::{Action, Event, IterationRecord, Method, RootResult, Status, Step};

/// Trace and observer bookkeeping shared by all solvers.
pub(crate) struct Run<Obs> {
    method: Method,
    interval: Interval,
    trace: Vec<IterationRecord>,
    observer: Obs,
}

impl<Obs> Run<Obs>
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    pub(crate) fn new(method: Method, interval: Interval, observer: Obs) -> Self {
        Self {
            method,
            interval,
            trace: Vec::new(),
            observer,
        }
    }

    /// Appends the next record, emits it, and returns the observer's action.
    pub(crate) fn push(&mut self, step: Step, error: f64) -> Option<Action> {
        let record = IterationRecord {
            iter: self.trace.len() + 1,
            step,
            error,
        };
        let event = Event {
            method: self.method,
            record: &record,
        };
        let action = self.observer.observe(&event);
        self.trace.push(record);
        action
    }

    pub(crate) fn finish(self, root: f64, status: Status) -> RootResult {
        RootResult {
            root,
            iterations: self.trace.len(),
            interval: self.interval,
            status,
            method: self.method,
            trace: self.trace,
        }
    }
}
