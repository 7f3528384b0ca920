/// Watches a solver step by step.
///
/// Every solver in this workspace takes an observer. Integrators call it once
/// per step and the root finder once per iteration. Returning `Some(action)`
/// asks the solver for something, typically to stop with the results so far.
/// Returning `None` lets it carry on.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. So is `()`, which
/// never acts and is what the `solve_unobserved` wrappers pass.
pub trait Observer<E, A> {
    /// Handles one event, optionally returning an action for the solver.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn drive<O: Observer<usize, Stop>>(mut observer: O, events: usize) -> Option<usize> {
        (0..events).find(|event| observer.observe(event).is_some())
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 10), None);
    }

    #[test]
    fn closure_observer_can_act() {
        let observer = |event: &usize| (*event == 3).then_some(Stop::Now);
        assert_eq!(drive(observer, 10), Some(3));
    }

    #[test]
    fn closure_observer_can_capture_state() {
        let mut seen = Vec::new();
        let observer = |event: &usize| {
            seen.push(*event);
            None
        };
        assert_eq!(drive(observer, 4), None);
        assert_eq!(seen, vec![0, 1, 2, 3]);
    }
}
