//! [`WeightedEdgeList`], an edge list for weight-ordered consumers.

use core::cmp::Ordering;

use crate::adj::{AdjacencyList, ArcEnd};
use crate::{Undirected, Half, LI, NI};

/// One undirected edge with its label.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WeightedEdge {
    pub n1: NI,
    pub n2: NI,
    pub label: LI,
}

/// An edge list with a weight function over labels.
///
/// This is the input shape Kruskal-style algorithms consume: edges sorted
/// by weight on demand with [`sort`](WeightedEdgeList::sort). The weight
/// function is borrowed so one list can be re-sorted under different
/// weightings.
pub struct WeightedEdgeList<'a, W = f64> {
    pub order: usize,
    pub weight: &'a dyn Fn(LI) -> W,
    pub edges: Vec<WeightedEdge>,
}

impl<'a, W: PartialOrd> WeightedEdgeList<'a, W> {
    pub fn new(order: usize, weight: &'a dyn Fn(LI) -> W) -> Self {
        WeightedEdgeList {
            order,
            weight,
            edges: Vec::new(),
        }
    }

    /// Collect each edge of a labeled undirected graph once.
    pub fn from_graph(g: &AdjacencyList<Half, Undirected>, weight: &'a dyn Fn(LI) -> W) -> Self {
        WeightedEdgeList {
            order: g.order(),
            weight,
            edges: g
                .edges()
                .map(|(n1, h)| WeightedEdge {
                    n1,
                    n2: h.to(),
                    label: h.label,
                })
                .collect(),
        }
    }

    pub fn add_edge(&mut self, n1: NI, n2: NI, label: LI) {
        self.order = self.order.max(n1.max(n2) as usize + 1);
        self.edges.push(WeightedEdge { n1, n2, label });
    }

    /// Sort edges by ascending weight. The sort is stable, so equal-weight
    /// edges keep their insertion order.
    pub fn sort(&mut self) {
        let w = self.weight;
        self.edges.sort_by(|a, b| {
            w(a.label)
                .partial_cmp(&w(b.label))
                .unwrap_or(Ordering::Equal)
        });
    }
}
