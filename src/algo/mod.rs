//! Graph algorithms.
//!
//! Algorithms that enumerate collections (strongly connected components,
//! elementary cycles, biconnected components) share one callback
//! convention: the caller passes `emit`, which receives each item as a
//! borrowed slice and returns `false` to stop the enumeration. **The
//! backing storage of the slice is reused across emissions**; a caller
//! that wants to keep an item must copy it. The `*_collect` wrappers do
//! the copying.
//!
//! Weighted algorithms take a caller-supplied function mapping an arc
//! label to a numeric weight, so one labeled graph can be searched under
//! any number of weightings.

pub mod astar;
pub mod bcc;
pub mod bellman_ford;
pub mod bfs2;
pub mod cycles;
pub mod dag;
pub mod dijkstra;
pub mod euler;
pub mod floyd_warshall;
pub mod scc;

pub use astar::{a_star_a, a_star_m};
pub use bcc::{articulation_points, biconnected_components};
pub use bellman_ford::{bellman_ford, negative_cycle, WeightedFromTree};
pub use bfs2::breadth_first2;
pub use cycles::{johnson_cycles, tarjan_cycles};
pub use dag::{dag_longest_path, dag_optimal_paths};
pub use dijkstra::{dijkstra, dijkstra_path};
pub use euler::{
    eulerian_cycle, eulerian_cycle_d, eulerian_cycle_undir, eulerian_cycle_undir_d,
    eulerian_cycle_undir_map, EulerError,
};
pub use floyd_warshall::{floyd_warshall, FloydWarshall};
pub use scc::{condensation, kosaraju_scc, path_scc, pearce_scc, scc_collect, tarjan_scc};

use core::fmt;
use core::ops::Add;

/// A cost that shortest-path algorithms can accumulate and compare.
pub trait Measure: Copy + PartialOrd + Add<Self, Output = Self> {}

impl<M> Measure for M where M: Copy + PartialOrd + Add<M, Output = M> {}

/// A [`Measure`] with a zero and an infinity, for algorithms that need
/// "unreached" distances.
pub trait FloatMeasure: Measure {
    fn zero() -> Self;
    fn infinite() -> Self;
}

impl FloatMeasure for f32 {
    fn zero() -> Self {
        0.0
    }

    fn infinite() -> Self {
        f32::INFINITY
    }
}

impl FloatMeasure for f64 {
    fn zero() -> Self {
        0.0
    }

    fn infinite() -> Self {
        f64::INFINITY
    }
}

/// An algorithm error: a cycle of negative weights was found in the graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NegativeCycle(pub(crate) ());

impl fmt::Display for NegativeCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("negative cycle")
    }
}

impl std::error::Error for NegativeCycle {}
