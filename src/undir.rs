//! Operations specific to undirected graphs.
//!
//! Undirected graphs share the adjacency-list storage of directed ones
//! under the reciprocal-arc discipline: every non-loop edge `u-v` is two
//! arcs `u→v` and `v→u` with matching labels, and a self-loop is a single
//! arc. [`AdjacencyList::add_edge`] maintains the invariant;
//! [`AdjacencyList::unpaired_arc`](crate::adj::AdjacencyList::unpaired_arc)
//! validates it.

use crate::adj::{AdjacencyList, ArcEnd};
use crate::{Half, Undirected, LI, NI};

impl AdjacencyList<NI, Undirected> {
    /// Add the edge `n1-n2`: the arc `n1→n2` and, when `n1 != n2`, the
    /// reciprocal `n2→n1`. A self-loop is stored once.
    pub fn add_edge(&mut self, n1: NI, n2: NI) {
        self.push_arc(n1, n2);
        if n1 != n2 {
            self.push_arc(n2, n1);
        }
    }
}

impl AdjacencyList<Half, Undirected> {
    /// Add the edge `n1-n2` with `label` on both arc-halves.
    pub fn add_edge(&mut self, n1: NI, n2: NI, label: LI) {
        self.push_arc(n1, Half { to: n2, label });
        if n1 != n2 {
            self.push_arc(n2, Half { to: n1, label });
        }
    }
}

impl<T: ArcEnd> AdjacencyList<T, Undirected> {
    /// The number of edges: reciprocal pairs count once, loops once.
    pub fn edge_size(&self) -> usize {
        let loops = self
            .iter()
            .map(|(n, l)| l.iter().filter(|a| a.to() == n).count())
            .sum::<usize>();
        (self.arc_size() + loops) / 2
    }

    /// Degree of `n` in the undirected sense: a self-loop contributes 2.
    pub fn degree(&self, n: NI) -> usize {
        self.out_degree(n) + self.to_list(n).iter().filter(|a| a.to() == n).count()
    }

    /// Iterate over each edge once as `(from, arc-end)` with
    /// `to >= from`: the upper representative of each reciprocal pair,
    /// and loops once.
    pub fn edges(&self) -> impl Iterator<Item = (NI, T)> + '_ {
        self.iter()
            .flat_map(|(n, l)| l.iter().filter(move |a| a.to() >= n).map(move |a| (n, *a)))
    }
}
