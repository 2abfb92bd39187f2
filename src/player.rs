use crate::color::{uncolored, ColorId, Coloring};
use crate::trace::{apply_step, Step, Trace, TraceOutcome};

/**
Replays a trace one step at a time on its own coloring.
The caller decides when to advance: the player holds no timing policy.
Going backwards replays the trace from the start, the search is never re-run.
*/
#[derive(Debug, Clone)]
pub struct TracePlayer<'a> {
    /// trace being replayed
    trace: &'a Trace,
    /// number of vertices of the colored graph
    n: usize,
    /// coloring after `position` steps
    coloring: Coloring,
    /// number of steps applied
    position: usize,
}

impl<'a> TracePlayer<'a> {
    /** creates a player at offset 0 (nothing colored) */
    pub fn new(trace:&'a Trace, n:usize) -> Self {
        Self { trace, n, coloring: uncolored(n), position: 0 }
    }

    /// number of steps applied so far
    pub fn position(&self) -> usize { self.position }

    /// coloring at the current position
    pub fn coloring(&self) -> &[Option<ColorId>] { &self.coloring }

    /// state of the replayed search at the current position
    pub fn status(&self) -> TraceOutcome { self.trace.outcome_at(self.n, self.position) }

    /// true iff no step can be applied anymore
    pub fn is_finished(&self) -> bool {
        self.position == self.trace.len() || self.status() != TraceOutcome::Incomplete
    }

    /** applies the next step and returns it.
    returns None once the trace is over (success, failure, or truncated trace). */
    pub fn step_forward(&mut self) -> Option<Step> {
        if self.is_finished() { return None; }
        let step = self.trace.steps()[self.position];
        apply_step(&mut self.coloring, &step);
        self.position += 1;
        Some(step)
    }

    /** moves to the given offset (clamped to the trace length).
    stops early at the end of the search, like `step_forward`. */
    pub fn seek(&mut self, offset:usize) {
        if offset < self.position {
            self.reset();
        }
        while self.position < offset && self.step_forward().is_some() {}
    }

    /// goes back to offset 0
    pub fn reset(&mut self) {
        self.coloring = uncolored(self.n);
        self.position = 0;
    }
}

impl<'a> Iterator for TracePlayer<'a> {
    type Item = Step;
    fn next(&mut self) -> Option<Step> { self.step_forward() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use crate::graph::Graph;
    use crate::search::backtracking::backtracking_coloring;
    use crate::trace::FailureReason;

    fn triangle_trace() -> Trace {
        backtracking_coloring(Rc::new(Graph::complete(3)), 2)
    }

    #[test]
    fn test_play_until_exhausted() {
        let trace = triangle_trace();
        let mut player = TracePlayer::new(&trace, 3);
        assert_eq!(player.status(), TraceOutcome::Incomplete);
        let mut nb_played = 0;
        while let Some(step) = player.step_forward() {
            nb_played += 1;
            assert_eq!(player.coloring(), trace.coloring_at(3, nb_played).as_slice());
            if step.is_exhausted() {
                assert!(player.is_finished());
            }
        }
        assert_eq!(nb_played, trace.len());
        assert_eq!(player.status(), TraceOutcome::Exhausted(FailureReason::Uncolorable));
        assert_eq!(player.coloring()[0], None);
        assert_eq!(player.step_forward(), None);
    }

    #[test]
    fn test_seek_forward_and_backward() {
        let trace = triangle_trace();
        let mut player = TracePlayer::new(&trace, 3);
        player.seek(2);
        assert_eq!(player.position(), 2);
        assert_eq!(player.coloring(), &[Some(0), Some(1), None]);
        player.seek(5);
        assert_eq!(player.coloring(), trace.coloring_at(3, 5).as_slice());
        player.seek(1);
        assert_eq!(player.coloring(), &[Some(0), None, None]);
        player.seek(1000);
        assert_eq!(player.position(), trace.len());
        player.reset();
        assert_eq!(player.position(), 0);
        assert_eq!(player.coloring(), &[None, None, None]);
    }

    #[test]
    fn test_resume_after_seek() {
        let trace = backtracking_coloring(Rc::new(Graph::new(3, &[(0,1), (1,2)]).unwrap()), 2);
        let mut player = TracePlayer::new(&trace, 3);
        player.seek(1);
        let rest:Vec<Step> = player.by_ref().collect();
        assert_eq!(rest, trace.steps()[1..].to_vec());
        assert_eq!(player.status(), TraceOutcome::Colored);
        assert_eq!(player.coloring(), &[Some(0), Some(1), Some(0)]);
    }

    #[test]
    fn test_seek_stops_at_failure() {
        let exhausted = Step::Exhausted { reason: FailureReason::Uncolorable };
        let trace = Trace::from(vec![exhausted, Step::Assign { vertex: 0, color: 0 }]);
        let mut player = TracePlayer::new(&trace, 2);
        player.seek(2);
        assert_eq!(player.position(), 1);
        assert_eq!(player.coloring(), &[None, None]);
        assert_eq!(player.status(), TraceOutcome::Exhausted(FailureReason::Uncolorable));
    }

    #[test]
    fn test_empty_trace() {
        let trace = Trace::default();
        let mut player = TracePlayer::new(&trace, 0);
        assert!(player.is_finished());
        assert_eq!(player.status(), TraceOutcome::Colored);
        assert_eq!(player.step_forward(), None);
    }
}
