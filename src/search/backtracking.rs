use std::rc::Rc;

use log::{debug, trace};

use crate::color::{uncolored, ColorId, Coloring, ColoringInstance, VertexId};
use crate::search::safety::safe_colors;
use crate::trace::{FailureReason, Step, Trace};

/** represents a decision (assigning color c to vertex v) */
#[derive(Debug, Clone, Copy)]
struct Decision {
    v: VertexId,
    c: ColorId,
}

/// either a decision to apply, either a decision to undo
#[derive(Debug)]
enum BacktrackEvent {
    Commit(Decision), // decision to commit
    Restore(Decision) // decision taken
}

/// state of the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// steps remain to be produced
    Running,
    /// every vertex is colored
    Colored,
    /// no coloring exists
    Exhausted(FailureReason),
}

/**
Exact backtracking search for a coloring with at most `nb_colors` colors.
Vertices are colored in index order, colors are tried in ascending order.

The search is an iterator over the steps it performs: each call to `next`
runs the search until the next assignment or retraction. Collecting it gives
the whole trace. Dropping it stops the search.
*/
#[derive(Debug)]
pub struct BacktrackingSearch {
    /// instance
    inst: Rc<dyn ColoringInstance>,
    /// color budget
    nb_colors: usize,
    /// colors[i]: color assigned to vertex i
    colors: Coloring,
    /// decisions to take (top of the stack is the next one)
    decisions: Vec<BacktrackEvent>,
    /// current status
    status: SearchStatus,
    /// number of steps produced so far
    nb_steps: usize,
}

impl BacktrackingSearch {
    /** creates a new backtracking search */
    pub fn new(inst:Rc<dyn ColoringInstance>, nb_colors:usize) -> Self {
        let n = inst.nb_vertices();
        let mut res = Self {
            inst,
            nb_colors,
            colors: uncolored(n),
            decisions: Vec::with_capacity(n * 2),
            status: SearchStatus::Running,
            nb_steps: 0,
        };
        if n == 0 {
            res.status = SearchStatus::Colored;
        } else {
            res.push_next_decisions(0);
        }
        res
    }

    /// current status of the search
    pub fn status(&self) -> SearchStatus { self.status }

    /// current (partial) coloring
    pub fn coloring(&self) -> &[Option<ColorId>] { &self.colors }

    /// number of steps produced so far
    pub fn nb_steps(&self) -> usize { self.nb_steps }

    /// pushes the candidate colors of v, smallest color on top of the stack
    fn push_next_decisions(&mut self, v:VertexId) {
        let candidates = safe_colors(self.inst.as_ref(), &self.colors, v, self.nb_colors);
        for c in candidates.into_iter().rev() {
            let decision = Decision { v, c };
            self.decisions.push(BacktrackEvent::Restore(decision)); // prepare to backtrack
            self.decisions.push(BacktrackEvent::Commit(decision)); // decision to apply
        }
    }

    /// applies a decision, returns the corresponding step
    fn commit(&mut self, decision:Decision) -> Step {
        debug_assert!(self.colors[decision.v].is_none());
        self.colors[decision.v] = Some(decision.c);
        if decision.v + 1 == self.inst.nb_vertices() {
            self.status = SearchStatus::Colored;
            self.decisions.clear();
        } else {
            self.push_next_decisions(decision.v + 1);
        }
        Step::Assign { vertex: decision.v, color: decision.c }
    }

    /// undoes a decision, returns the corresponding step
    fn restore(&mut self, decision:Decision) -> Step {
        debug_assert_eq!(self.colors[decision.v], Some(decision.c));
        self.colors[decision.v] = None;
        Step::Unassign { vertex: decision.v }
    }

    /// called when no decision remain and no coloring was found
    fn exhaust(&mut self) -> Step {
        let reason = if self.nb_colors == 0 {
            FailureReason::ZeroBudget
        } else {
            FailureReason::Uncolorable
        };
        self.status = SearchStatus::Exhausted(reason);
        debug!("search exhausted after {} steps ({})", self.nb_steps, reason);
        Step::Exhausted { reason }
    }
}

impl Iterator for BacktrackingSearch {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.status != SearchStatus::Running { return None; }
        let step = match self.decisions.pop() {
            Some(BacktrackEvent::Commit(decision)) => self.commit(decision),
            Some(BacktrackEvent::Restore(decision)) => self.restore(decision),
            None => self.exhaust(),
        };
        self.nb_steps += 1;
        trace!("step {}: {:?}", self.nb_steps, step);
        if self.status == SearchStatus::Colored {
            debug!("coloring found after {} steps", self.nb_steps);
        }
        Some(step)
    }
}

/** runs the backtracking search to completion and returns its trace */
pub fn backtracking_coloring(inst:Rc<dyn ColoringInstance>, nb_colors:usize) -> Trace {
    debug!(
        "backtracking search: {} vertices, {} edges, {} colors",
        inst.nb_vertices(), inst.nb_edges(), nb_colors
    );
    BacktrackingSearch::new(inst, nb_colors).collect()
}
