use std::convert::TryFrom;

use bit_set::BitSet;

use crate::color::{ColoringInstance, VertexId};
use crate::error::InputError;

/// largest number of vertices accepted from an untrusted source (files, command line)
pub const MAX_NB_VERTICES:usize = 1 << 24;

/** rejects vertex counts read from an untrusted source that are too large to be allocated */
pub fn check_nb_vertices(n:usize) -> Result<(), InputError> {
    if n > MAX_NB_VERTICES {
        return Err(InputError::TooManyVertices { n, max: MAX_NB_VERTICES });
    }
    Ok(())
}

/** models a Graph Coloring instance.
Vertices are 0..n, edges are unordered, duplicates are merged. */
#[derive(Debug, Clone)]
pub struct Graph {
    /// nb vertices
    n: usize,
    /// edges of the graph (u < v, without duplicates, in order of first appearance)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i] represents a bitset of its neighbors
    adj_matrix: Vec<BitSet>,
}

impl ColoringInstance for Graph {
    fn nb_vertices(&self) -> usize { self.n }

    fn nb_edges(&self) -> usize { self.edges.len() }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool { self.adj_matrix[u].contains(v) }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }
}

impl Graph {

    /** builds a graph with n vertices from an edge list.
    Fails if an endpoint is not in 0..n or if an edge is a self-loop. */
    pub fn new(n:usize, edges:&[(VertexId,VertexId)]) -> Result<Self, InputError> {
        let mut res = Self {
            n,
            edges: Vec::with_capacity(edges.len()),
            adj_list: vec![Vec::new() ; n],
            adj_matrix: vec![BitSet::default() ; n],
        };
        for (u,v) in edges {
            res.insert_edge(*u, *v)?;
        }
        Ok(res)
    }

    /** builds a graph from raw (possibly negative) integers, as read from an untyped source */
    pub fn from_signed(n:i64, edges:&[(i64,i64)]) -> Result<Self, InputError> {
        let nb_vertices = usize::try_from(n).map_err(|_| InputError::NegativeVertexCount(n))?;
        check_nb_vertices(nb_vertices)?;
        let mut converted = Vec::with_capacity(edges.len());
        for (u,v) in edges {
            match (usize::try_from(*u), usize::try_from(*v)) {
                (Ok(a), Ok(b)) => converted.push((a,b)),
                _ => return Err(InputError::VertexOutOfRange { u:*u, v:*v, n:nb_vertices }),
            }
        }
        Self::new(nb_vertices, &converted)
    }

    /// graph without any edge
    pub fn edgeless(n:usize) -> Self {
        Self {
            n,
            edges: Vec::new(),
            adj_list: vec![Vec::new() ; n],
            adj_matrix: vec![BitSet::default() ; n],
        }
    }

    /// complete graph on n vertices
    pub fn complete(n:usize) -> Self {
        let mut res = Self::edgeless(n);
        for u in 0..n {
            for v in u+1..n {
                res.link(u, v);
            }
        }
        res
    }

    /// adds the edge {u,v}, ignored if already present
    fn insert_edge(&mut self, u:VertexId, v:VertexId) -> Result<(), InputError> {
        if u >= self.n || v >= self.n {
            return Err(InputError::VertexOutOfRange { u:u as i64, v:v as i64, n:self.n });
        }
        if u == v { return Err(InputError::SelfLoop(u)); }
        if !self.adj_matrix[u].contains(v) {
            self.link(u, v);
        }
        Ok(())
    }

    /// registers a new edge (endpoints are assumed valid and not yet adjacent)
    pub(crate) fn link(&mut self, u:VertexId, v:VertexId) {
        self.edges.push((u.min(v), u.max(v)));
        self.adj_list[u].push(v);
        self.adj_list[v].push(u);
        self.adj_matrix[u].insert(v);
        self.adj_matrix[v].insert(u);
    }
}


/** incremental graph construction: add or remove vertices and edges, then build.
Removing a vertex shifts the index of every later vertex down by one so indices
stay dense. */
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    /// nb vertices
    n: usize,
    /// edges (u < v, without duplicates)
    edges: Vec<(VertexId,VertexId)>,
}

impl GraphBuilder {
    /// empty builder
    pub fn new() -> Self { Self::default() }

    /// builder initialized with the vertices and edges of a graph
    pub fn from_graph(graph:&Graph) -> Self {
        Self { n: graph.nb_vertices(), edges: graph.edges().to_vec() }
    }

    /// number of vertices added so far
    pub fn nb_vertices(&self) -> usize { self.n }

    /// adds a vertex and returns its index
    pub fn add_vertex(&mut self) -> VertexId {
        self.n += 1;
        self.n - 1
    }

    /** adds the edge {u,v}. returns false if it already existed (in any orientation).
    Endpoints are validated when the graph is built. */
    pub fn add_edge(&mut self, u:VertexId, v:VertexId) -> bool {
        let e = (u.min(v), u.max(v));
        if self.edges.contains(&e) { return false; }
        self.edges.push(e);
        true
    }

    /** removes vertex v and its incident edges. returns false if v does not exist. */
    pub fn remove_vertex(&mut self, v:VertexId) -> bool {
        if v >= self.n { return false; }
        self.edges.retain(|(a,b)| *a != v && *b != v);
        let shift = |x:VertexId| if x > v { x-1 } else { x };
        for e in self.edges.iter_mut() {
            *e = (shift(e.0), shift(e.1));
        }
        self.n -= 1;
        true
    }

    /// builds the graph (validates the edges)
    pub fn build(&self) -> Result<Graph, InputError> {
        Graph::new(self.n, &self.edges)
    }
}
