//! Symmetric adjacency storage for graph-state vertices.

use smallvec::SmallVec;

use crate::circuit::QubitId;

/// Inline capacity of a neighbor set before it spills to the heap. Sparse
/// stabilizer circuits keep most degrees below this.
const INLINE_NEIGHBORS: usize = 8;

/// One vertex's unordered neighbor set.
///
/// Backed by a small vector: membership tests are linear in the degree,
/// which beats hashing at the degrees these graphs actually reach, and the
/// stable iteration order makes partner selection deterministic.
pub type NeighborSet = SmallVec<[QubitId; INLINE_NEIGHBORS]>;

/// Undirected graph on a fixed vertex set, no self-loops, no multi-edges.
#[derive(Clone, Debug, Default)]
#[must_use]
pub struct VertexGraph {
    neighbors: Vec<NeighborSet>,
}

impl VertexGraph {
    /// Create an edgeless graph on `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        VertexGraph {
            neighbors: vec![NeighborSet::new(); vertex_count],
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    #[must_use]
    pub fn neighbors(&self, vertex: QubitId) -> &[QubitId] {
        &self.neighbors[vertex]
    }

    #[must_use]
    pub fn degree(&self, vertex: QubitId) -> usize {
        self.neighbors[vertex].len()
    }

    #[must_use]
    pub fn has_edge(&self, first: QubitId, second: QubitId) -> bool {
        self.neighbors[first].contains(&second)
    }

    /// True iff `vertex` has no neighbors, or its sole neighbor is `other`.
    #[must_use]
    pub fn almost_isolated(&self, vertex: QubitId, other: QubitId) -> bool {
        match self.neighbors[vertex].as_slice() {
            [] => true,
            [sole] => *sole == other,
            _ => false,
        }
    }

    pub fn add_edge(&mut self, first: QubitId, second: QubitId) {
        debug_assert_ne!(first, second);
        if !self.has_edge(first, second) {
            self.neighbors[first].push(second);
            self.neighbors[second].push(first);
        }
    }

    pub fn remove_edge(&mut self, first: QubitId, second: QubitId) {
        if let Some(position) = self.neighbors[first].iter().position(|&v| v == second) {
            self.neighbors[first].remove(position);
            let mirror = self.neighbors[second]
                .iter()
                .position(|&v| v == first)
                .expect("edge stored asymmetrically");
            self.neighbors[second].remove(mirror);
        }
    }

    pub fn toggle_edge(&mut self, first: QubitId, second: QubitId) {
        if self.has_edge(first, second) {
            self.remove_edge(first, second);
        } else {
            self.add_edge(first, second);
        }
    }

    /// Force the presence of an edge to `present`.
    pub fn set_edge(&mut self, first: QubitId, second: QubitId, present: bool) {
        if present {
            self.add_edge(first, second);
        } else {
            self.remove_edge(first, second);
        }
    }

    /// Consume the graph, yielding the per-vertex neighbor sets.
    #[must_use]
    pub fn into_neighbor_sets(self) -> Vec<NeighborSet> {
        self.neighbors
    }
}
