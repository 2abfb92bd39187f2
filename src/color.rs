use std::fmt::Debug;
use std::ops::Range;

use bit_set::BitSet;

/** Vertex Id */
pub type VertexId = usize;

/** Color Id (colors of a budget K are 0..K) */
pub type ColorId = usize;

/** Coloring of a graph: coloring[v] is the color of vertex v (None if uncolored). */
pub type Coloring = Vec<Option<ColorId>>;

/** returns a coloring of n vertices where no vertex is colored */
pub fn uncolored(n:usize) -> Coloring { vec![None ; n] }

/** models a Graph Coloring instance */
pub trait ColoringInstance: Debug {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// number of (distinct) edges
    fn nb_edges(&self) -> usize;

    /// vertices adjacent to u (no duplicates)
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// degree of vertex u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// true iff u and v are adjacent
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// edge list, each edge (u,v) given once with u < v
    fn edges(&self) -> &[(VertexId, VertexId)];

    /// vertices of the graph
    fn vertices(&self) -> Range<VertexId> { 0..self.nb_vertices() }

    /// prints some statistics about the instance
    fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.vertices().map(|i| self.degree(i)).collect();
        if let (Some(min), Some(max)) = (degrees.iter().min(), degrees.iter().max()) {
            println!("\t{} \t min degree", min);
            println!("\t{} \t max degree", max);
        }
    }

    /** writes a string encoding the solution. each line corresponds to a color. */
    fn solution_to_string(&self, coloring:&[Option<ColorId>]) -> String {
        let mut res = String::default();
        for class in color_classes(coloring) {
            for v in class {
                res += format!("{} ", v).as_str();
            }
            res += "\n";
        }
        res
    }

    /** writes a solution into a file. each line corresponds to a color. */
    fn write_solution(&self, filename:&str, coloring:&[Option<ColorId>]) -> std::io::Result<()> {
        std::fs::write(filename, self.solution_to_string(coloring))
    }
}

/** groups vertices by color (res[c]: vertices colored with c). Uncolored vertices are skipped. */
pub fn color_classes(coloring:&[Option<ColorId>]) -> Vec<Vec<VertexId>> {
    let nb_classes = coloring.iter().flatten().max().map_or(0, |c| c+1);
    let mut res = vec![vec![] ; nb_classes];
    for (v,c) in coloring.iter().enumerate() {
        if let Some(c) = c { res[*c].push(v); }
    }
    res
}

/// result of the checker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// feasible solution, returns the number of colors used
    Ok(usize),
    /// the coloring does not have one entry per vertex
    WrongLength { expected: usize, found: usize },
    /// some vertex is not colored
    Uncolored(VertexId),
    /// both endpoints of an edge share the same color
    Conflict(VertexId, VertexId),
}

/**
returns the first edge (u,v) whose endpoints are both colored with the same color.
uncolored vertices never conflict, so this also validates partial colorings.
*/
pub fn first_conflict(inst:&dyn ColoringInstance, coloring:&[Option<ColorId>]) -> Option<(VertexId, VertexId)> {
    inst.edges().iter()
        .find(|(u,v)| coloring[*u].is_some() && coloring[*u] == coloring[*v])
        .copied()
}

/**
checks that a coloring is complete and proper.
returns the number of distinct colors used if it is feasible
*/
pub fn checker(inst:&dyn ColoringInstance, coloring:&[Option<ColorId>]) -> CheckerResult {
    if coloring.len() != inst.nb_vertices() {
        return CheckerResult::WrongLength { expected: inst.nb_vertices(), found: coloring.len() };
    }
    let mut used:BitSet = BitSet::default();
    for (v,c) in coloring.iter().enumerate() {
        match c {
            None => return CheckerResult::Uncolored(v),
            Some(c) => { used.insert(*c); }
        }
    }
    match first_conflict(inst, coloring) {
        Some((u,v)) => CheckerResult::Conflict(u, v),
        None => CheckerResult::Ok(used.len()),
    }
}
