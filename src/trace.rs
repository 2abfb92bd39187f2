use std::fmt;
use std::fs;
use std::iter::FromIterator;

use serde::{Serialize, Deserialize};

use crate::color::{uncolored, ColorId, Coloring, VertexId};
use crate::error::InputError;

/** why the search could not find a coloring */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all="snake_case")]
pub enum FailureReason {
    /// the color budget is 0 and there is at least one vertex to color
    ZeroBudget,
    /// no coloring exists with the given budget
    Uncolorable,
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::ZeroBudget => write!(f, "no color available"),
            FailureReason::Uncolorable => write!(f, "the graph is not colorable with this budget"),
        }
    }
}

/** one mutation of the coloring performed by the backtracking search */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag="kind", rename_all="snake_case")]
pub enum Step {
    /// color is assigned to vertex
    Assign { vertex: VertexId, color: ColorId },
    /// vertex goes back to uncolored (the search backtracks)
    Unassign { vertex: VertexId },
    /// terminal step: no coloring exists
    Exhausted { reason: FailureReason },
}

impl Step {
    /// vertex modified by the step (None for Exhausted)
    pub fn vertex(&self) -> Option<VertexId> {
        match self {
            Step::Assign { vertex, .. } | Step::Unassign { vertex } => Some(*vertex),
            Step::Exhausted { .. } => None,
        }
    }

    /// color assigned by the step (only for Assign)
    pub fn color(&self) -> Option<ColorId> {
        match self {
            Step::Assign { color, .. } => Some(*color),
            _ => None,
        }
    }

    /// true iff the step is the failure sentinel
    pub fn is_exhausted(&self) -> bool { matches!(self, Step::Exhausted { .. }) }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // colors are displayed starting from 1
            Step::Assign { vertex, color } => write!(f, "assigning color {} to node {}", color.saturating_add(1), vertex),
            Step::Unassign { vertex } => write!(f, "backtracking from node {}", vertex),
            Step::Exhausted { reason } => write!(f, "no valid coloring found ({})", reason),
        }
    }
}

/**
applies a step to a coloring.
 - Assign: coloring[v] = c
 - Unassign: coloring[v] = None
 - Exhausted: no-op (the consumer should stop and report the failure)
*/
pub fn apply_step(coloring:&mut [Option<ColorId>], step:&Step) {
    match step {
        Step::Assign { vertex, color } => { coloring[*vertex] = Some(*color); },
        Step::Unassign { vertex } => { coloring[*vertex] = None; },
        Step::Exhausted { .. } => {},
    }
}

/// state reached after replaying (a prefix of) a trace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceOutcome {
    /// the replayed steps do not end the search yet
    Incomplete,
    /// the search colored every vertex
    Colored,
    /// the search failed
    Exhausted(FailureReason),
}

/// summary of a trace (exported along with the run statistics)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStats {
    /// number of steps
    pub nb_steps: usize,
    /// number of Assign steps
    pub nb_assign: usize,
    /// number of Unassign steps
    pub nb_unassign: usize,
    /// largest vertex index ever assigned (None if nothing was assigned)
    pub deepest_vertex: Option<VertexId>,
    /// true iff the search found a coloring
    pub colorable: bool,
}

/** ordered log of the steps performed by a search.
Replaying it from an uncolored array reproduces the coloring at any point in time. */
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trace {
    /// steps in chronological order
    steps: Vec<Step>,
}

impl Trace {
    /// steps in chronological order
    pub fn steps(&self) -> &[Step] { &self.steps }

    /// number of steps
    pub fn len(&self) -> usize { self.steps.len() }

    /// true iff there is no step
    pub fn is_empty(&self) -> bool { self.steps.is_empty() }

    /// iterates over the steps
    pub fn iter(&self) -> std::slice::Iter<'_, Step> { self.steps.iter() }

    /** outcome of a complete trace of a search on n vertices */
    pub fn outcome(&self, n:usize) -> TraceOutcome {
        self.outcome_at(n, self.len())
    }

    /** outcome after the first `offset` steps (clamped to the trace length) */
    pub fn outcome_at(&self, n:usize, offset:usize) -> TraceOutcome {
        let prefix = &self.steps[..offset.min(self.len())];
        match prefix.last() {
            Some(Step::Exhausted { reason }) => TraceOutcome::Exhausted(*reason),
            Some(Step::Assign { vertex, .. }) if *vertex+1 == n => TraceOutcome::Colored,
            None if n == 0 => TraceOutcome::Colored,
            _ => TraceOutcome::Incomplete,
        }
    }

    /** coloring of n vertices after replaying the first `offset` steps
    (clamped to the trace length) from an uncolored state */
    pub fn coloring_at(&self, n:usize, offset:usize) -> Coloring {
        let mut res = uncolored(n);
        for step in self.steps.iter().take(offset) {
            apply_step(&mut res, step);
        }
        res
    }

    /// coloring of n vertices after replaying the whole trace
    pub fn final_coloring(&self, n:usize) -> Coloring {
        self.coloring_at(n, self.len())
    }

    /// computes statistics over the trace
    pub fn stats(&self) -> TraceStats {
        let mut res = TraceStats {
            nb_steps: self.len(),
            nb_assign: 0,
            nb_unassign: 0,
            deepest_vertex: None,
            colorable: !self.steps.last().map_or(false, Step::is_exhausted),
        };
        for step in &self.steps {
            match step {
                Step::Assign { vertex, .. } => {
                    res.nb_assign += 1;
                    res.deepest_vertex = res.deepest_vertex.max(Some(*vertex));
                },
                Step::Unassign { .. } => { res.nb_unassign += 1; },
                Step::Exhausted { .. } => {},
            }
        }
        res
    }

    /** checks that the trace is a sequence of steps a search on n vertices with nb_colors
    colors could have produced (use before replaying a trace read from a file on a given graph):
     - every step refers to a vertex in 0..n and a color in 0..nb_colors
     - Assign only targets an uncolored vertex, Unassign only a colored one
     - nothing follows the end of the search (see `outcome_at`) */
    pub fn validate(&self, n:usize, nb_colors:usize) -> Result<(), InputError> {
        let mut coloring = uncolored(n);
        let invalid = |step:usize, reason:String| InputError::InvalidTrace { step, reason };
        for (i,step) in self.steps.iter().enumerate() {
            if let Some(vertex) = step.vertex() {
                if vertex >= n {
                    return Err(InputError::TraceMismatch { step: i, vertex, n });
                }
            }
            if self.outcome_at(n, i) != TraceOutcome::Incomplete {
                return Err(invalid(i, "step after the end of the search".to_string()));
            }
            match step {
                Step::Assign { vertex, color } => {
                    if *color >= nb_colors {
                        return Err(invalid(i, format!("color {} exceeds the budget of {} colors", color, nb_colors)));
                    }
                    if coloring[*vertex].is_some() {
                        return Err(invalid(i, format!("node {} is already colored", vertex)));
                    }
                },
                Step::Unassign { vertex } => {
                    if coloring[*vertex].is_none() {
                        return Err(invalid(i, format!("node {} is not colored", vertex)));
                    }
                },
                Step::Exhausted { .. } => {},
            }
            apply_step(&mut coloring, step);
        }
        Ok(())
    }

    /// exports the trace as JSON
    pub fn to_file(&self, filename:&str) -> Result<(), InputError> {
        fs::write(filename, serde_json::to_string(self)?)?;
        Ok(())
    }

    /// reads a trace exported with `to_file`
    pub fn from_file(filename:&str) -> Result<Self, InputError> {
        let content = fs::read_to_string(filename)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl From<Vec<Step>> for Trace {
    fn from(steps:Vec<Step>) -> Self { Self { steps } }
}

impl FromIterator<Step> for Trace {
    fn from_iter<I: IntoIterator<Item=Step>>(iter:I) -> Self {
        Self { steps: iter.into_iter().collect() }
    }
}

impl IntoIterator for Trace {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;
    fn into_iter(self) -> Self::IntoIter { self.steps.into_iter() }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;
    fn into_iter(self) -> Self::IntoIter { self.steps.iter() }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn assign(vertex:VertexId, color:ColorId) -> Step { Step::Assign { vertex, color } }

    #[test]
    fn test_apply_step() {
        let mut coloring = uncolored(2);
        apply_step(&mut coloring, &assign(1, 3));
        assert_eq!(coloring, vec![None, Some(3)]);
        apply_step(&mut coloring, &Step::Exhausted { reason: FailureReason::Uncolorable });
        assert_eq!(coloring, vec![None, Some(3)]);
        apply_step(&mut coloring, &Step::Unassign { vertex: 1 });
        assert_eq!(coloring, vec![None, None]);
    }

    #[test]
    fn test_coloring_at() {
        let trace = Trace::from(vec![assign(0, 0), assign(1, 0), Step::Unassign { vertex: 1 }, assign(1, 1)]);
        assert_eq!(trace.coloring_at(2, 0), vec![None, None]);
        assert_eq!(trace.coloring_at(2, 2), vec![Some(0), Some(0)]);
        assert_eq!(trace.coloring_at(2, 3), vec![Some(0), None]);
        assert_eq!(trace.final_coloring(2), vec![Some(0), Some(1)]);
        assert_eq!(trace.coloring_at(2, 100), trace.final_coloring(2));
    }

    #[test]
    fn test_outcome() {
        let trace = Trace::from(vec![assign(0, 0), assign(1, 1)]);
        assert_eq!(trace.outcome(2), TraceOutcome::Colored);
        assert_eq!(trace.outcome_at(2, 1), TraceOutcome::Incomplete);
        assert_eq!(Trace::default().outcome(0), TraceOutcome::Colored);
        assert_eq!(Trace::default().outcome(1), TraceOutcome::Incomplete);
        let failed = Trace::from(vec![Step::Exhausted { reason: FailureReason::ZeroBudget }]);
        assert_eq!(failed.outcome(2), TraceOutcome::Exhausted(FailureReason::ZeroBudget));
    }

    #[test]
    fn test_stats() {
        let trace = Trace::from(vec![
            assign(0, 0), assign(1, 0), Step::Unassign { vertex: 1 },
            Step::Unassign { vertex: 0 }, Step::Exhausted { reason: FailureReason::Uncolorable }
        ]);
        let stats = trace.stats();
        assert_eq!(stats.nb_steps, 5);
        assert_eq!(stats.nb_assign, 2);
        assert_eq!(stats.nb_unassign, 2);
        assert_eq!(stats.deepest_vertex, Some(1));
        assert!(!stats.colorable);
        assert!(Trace::default().stats().colorable);
    }

    #[test]
    fn test_validate() {
        let trace = Trace::from(vec![
            assign(0, 0), assign(1, 0), Step::Unassign { vertex: 1 }, assign(1, 1), assign(2, 0)
        ]);
        assert!(trace.validate(3, 2).is_ok());
        assert!(Trace::default().validate(0, 0).is_ok());
        assert!(matches!(
            Trace::from(vec![assign(0, 0), assign(2, 1)]).validate(2, 2),
            Err(InputError::TraceMismatch { step:1, vertex:2, n:2 })
        ));
        assert!(matches!(trace.validate(3, 1), Err(InputError::InvalidTrace { step:3, .. })));
    }

    #[test]
    fn test_validate_rejects_huge_color() {
        let step = assign(0, usize::MAX);
        assert_eq!(step.to_string(), format!("assigning color {} to node 0", usize::MAX));
        assert!(matches!(
            Trace::from(vec![step]).validate(1, 3),
            Err(InputError::InvalidTrace { step:0, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_impossible_sequences() {
        let exhausted = Step::Exhausted { reason: FailureReason::Uncolorable };
        // failure sentinel in the middle
        let trace = Trace::from(vec![exhausted, assign(0, 0)]);
        assert!(matches!(trace.validate(2, 2), Err(InputError::InvalidTrace { step:1, .. })));
        // retracting an uncolored vertex
        let trace = Trace::from(vec![assign(0, 0), Step::Unassign { vertex: 1 }]);
        assert!(matches!(trace.validate(2, 2), Err(InputError::InvalidTrace { step:1, .. })));
        // coloring a vertex twice
        let trace = Trace::from(vec![assign(0, 0), assign(0, 1)]);
        assert!(matches!(trace.validate(2, 2), Err(InputError::InvalidTrace { step:1, .. })));
        // going on once the last vertex is colored
        let trace = Trace::from(vec![assign(0, 0), Step::Unassign { vertex: 0 }]);
        assert!(matches!(trace.validate(1, 2), Err(InputError::InvalidTrace { step:1, .. })));
        // a failed search ends with the sentinel
        let trace = Trace::from(vec![assign(0, 0), Step::Unassign { vertex: 0 }, exhausted]);
        assert!(trace.validate(2, 1).is_ok());
    }

    #[test]
    fn test_json_format() {
        let trace = Trace::from(vec![
            assign(0, 2), Step::Unassign { vertex: 0 },
            Step::Exhausted { reason: FailureReason::Uncolorable }
        ]);
        let json = serde_json::to_string(&trace).unwrap();
        assert_eq!(
            json,
            r#"{"steps":[{"kind":"assign","vertex":0,"color":2},{"kind":"unassign","vertex":0},{"kind":"exhausted","reason":"uncolorable"}]}"#
        );
        let back:Trace = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trace);
    }

    #[test]
    fn test_display() {
        assert_eq!(assign(3, 0).to_string(), "assigning color 1 to node 3");
        assert_eq!(Step::Unassign { vertex: 2 }.to_string(), "backtracking from node 2");
        assert_eq!(
            Step::Exhausted { reason: FailureReason::ZeroBudget }.to_string(),
            "no valid coloring found (no color available)"
        );
    }
}
