//! Single pass dynamic programming over directed acyclic graphs.

use crate::adj::AdjacencyList;
use crate::algo::{Measure, WeightedFromTree};
use crate::fromlist::PathEnd;
use crate::{Directed, Half, LI, NI, NO_NODE};

/// Optimal path forest of a DAG in `O(arc_size)`.
///
/// `topo` must be a topological ordering of the graph, for instance from
/// [`ordering`](AdjacencyList::ordering); it is not validated. Every node
/// starts as a root with distance `zero`; each arc relaxes its target
/// toward longer total weight when `longest`, shorter otherwise. The
/// resulting tree records, per node, the optimal path ending there.
pub fn dag_optimal_paths<W, F>(
    g: &AdjacencyList<Half, Directed>,
    topo: &[NI],
    mut weight: F,
    longest: bool,
    zero: W,
) -> WeightedFromTree<W>
where
    W: Measure,
    F: FnMut(LI) -> W,
{
    let order = g.order();
    let mut t = WeightedFromTree {
        paths: vec![
            PathEnd {
                from: NO_NODE,
                len: 1,
            };
            order
        ],
        dist: vec![zero; order],
        reached: order,
    };
    for &u in topo {
        let ux = u as usize;
        let du = t.dist[ux];
        let lu = t.paths[ux].len;
        for h in g.to_list(u) {
            let vx = h.to as usize;
            let nd = du + weight(h.label);
            let better = if longest {
                nd > t.dist[vx]
            } else {
                nd < t.dist[vx]
            };
            if better {
                t.dist[vx] = nd;
                t.paths[vx] = PathEnd {
                    from: u,
                    len: lu + 1,
                };
            }
        }
    }
    t
}

/// The maximum-weight path in a DAG, with its total weight.
///
/// `topo` as in [`dag_optimal_paths`]. Non-negative weights assumed; with
/// all weights equal this is the longest path by arc count.
pub fn dag_longest_path<W, F>(
    g: &AdjacencyList<Half, Directed>,
    topo: &[NI],
    weight: F,
    zero: W,
) -> (Vec<NI>, W)
where
    W: Measure,
    F: FnMut(LI) -> W,
{
    let t = dag_optimal_paths(g, topo, weight, true, zero);
    let mut best = NO_NODE;
    for n in 0..g.order() as NI {
        if best == NO_NODE || t.dist[n as usize] > t.dist[best as usize] {
            best = n;
        }
    }
    if best == NO_NODE {
        return (Vec::new(), zero);
    }
    (t.path_to(best), t.dist[best as usize])
}
