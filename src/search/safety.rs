use crate::color::{ColorId, ColoringInstance, VertexId};

/** returns false iff some neighbor of v is currently colored with c.
Runs in O(d(v)). */
pub fn is_safe(inst:&dyn ColoringInstance, coloring:&[Option<ColorId>], v:VertexId, c:ColorId) -> bool {
    inst.neighbors(v).iter().all(|u| coloring[*u] != Some(c))
}

/** colors of 0..nb_colors that can be given to v, in ascending order */
pub fn safe_colors(inst:&dyn ColoringInstance, coloring:&[Option<ColorId>], v:VertexId, nb_colors:usize) -> Vec<ColorId> {
    (0..nb_colors).filter(|c| is_safe(inst, coloring, v, *c)).collect()
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn test_is_safe_both_orientations() {
        // edge given as (1,0): vertex 0 must still see vertex 1
        let inst = Graph::new(3, &[(1,0), (2,1)]).unwrap();
        let coloring = vec![None, Some(0), None];
        assert!(!is_safe(&inst, &coloring, 0, 0));
        assert!(is_safe(&inst, &coloring, 0, 1));
        assert!(!is_safe(&inst, &coloring, 2, 0));
    }

    #[test]
    fn test_is_safe_ignores_non_neighbors() {
        let inst = Graph::new(3, &[(0,1)]).unwrap();
        let coloring = vec![None, None, Some(0)];
        assert!(is_safe(&inst, &coloring, 0, 0));
    }

    #[test]
    fn test_is_safe_ignores_own_color() {
        let inst = Graph::new(2, &[(0,1)]).unwrap();
        let coloring = vec![Some(0), None];
        assert!(is_safe(&inst, &coloring, 0, 0));
    }

    #[test]
    fn test_safe_colors() {
        let inst = Graph::complete(3);
        let coloring = vec![Some(0), Some(2), None];
        assert_eq!(safe_colors(&inst, &coloring, 2, 4), vec![1, 3]);
        assert_eq!(safe_colors(&inst, &coloring, 2, 0), Vec::<ColorId>::new());
    }
}
