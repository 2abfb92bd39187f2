//! Search procedures for the graph coloring problem.

use std::convert::TryFrom;
use std::rc::Rc;

use crate::color::VertexId;
use crate::error::InputError;
use crate::graph::Graph;
use crate::trace::Trace;

/// safety predicate (can a vertex take a color given its neighbors)
pub mod safety;

/// exact backtracking search producing a step trace
pub mod backtracking;

/** validates a raw color budget */
pub fn color_budget(k:i64) -> Result<usize, InputError> {
    usize::try_from(k).map_err(|_| InputError::NegativeColorBudget(k))
}

/** validates the input, then runs the backtracking search with k colors
on the graph with n vertices and the given edges. */
pub fn search(n:usize, edges:&[(VertexId,VertexId)], k:usize) -> Result<Trace, InputError> {
    let inst = Graph::new(n, edges)?;
    Ok(backtracking::backtracking_coloring(Rc::new(inst), k))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{Step, FailureReason};

    #[test]
    fn test_color_budget() {
        assert_eq!(color_budget(4).unwrap(), 4);
        assert_eq!(color_budget(0).unwrap(), 0);
        assert!(matches!(color_budget(-2), Err(InputError::NegativeColorBudget(-2))));
    }

    #[test]
    fn test_search_validates_before_running() {
        assert!(matches!(search(2, &[(0,3)], 2), Err(InputError::VertexOutOfRange { .. })));
        assert!(matches!(search(2, &[(0,0)], 2), Err(InputError::SelfLoop(0))));
    }

    #[test]
    fn test_search_scenarios() {
        assert_eq!(
            search(3, &[(0,1), (1,2)], 2).unwrap().steps(),
            &[Step::Assign { vertex:0, color:0 }, Step::Assign { vertex:1, color:1 }, Step::Assign { vertex:2, color:0 }]
        );
        assert!(search(0, &[], 2).unwrap().is_empty());
        assert_eq!(
            search(2, &[(0,1)], 0).unwrap().steps(),
            &[Step::Exhausted { reason: FailureReason::ZeroBudget }]
        );
        let triangle = search(3, &[(0,1), (1,2), (2,0)], 2).unwrap();
        assert!(triangle.steps().last().unwrap().is_exhausted());
        assert!(triangle.iter().any(|s| matches!(s, Step::Unassign { .. })));
    }

    #[test]
    fn test_duplicate_edges_do_not_change_the_trace() {
        let a = search(4, &[(0,1), (1,2), (2,3), (3,0)], 2).unwrap();
        let b = search(4, &[(0,1), (1,0), (1,2), (2,1), (2,3), (0,3), (3,0)], 2).unwrap();
        assert_eq!(a, b);
    }
}
