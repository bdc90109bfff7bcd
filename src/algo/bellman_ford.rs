//! Bellman-Ford shortest paths and negative cycle extraction.

use crate::adj::AdjacencyList;
use crate::algo::{FloatMeasure, NegativeCycle};
use crate::fromlist::PathEnd;
use crate::{Directed, Half, LI, NI, NO_NODE};

/// A shortest-path tree with weighted distances: predecessor entries as
/// in [`FromList`](crate::FromList) plus a distance per node.
///
/// Unreached nodes keep `len == 0` and an infinite distance.
#[derive(Clone, Debug)]
pub struct WeightedFromTree<W> {
    pub paths: Vec<PathEnd>,
    pub dist: Vec<W>,
    /// Number of nodes reached.
    pub reached: usize,
}

impl<W: FloatMeasure> WeightedFromTree<W> {
    pub fn new(order: usize) -> Self {
        WeightedFromTree {
            paths: vec![PathEnd::UNVISITED; order],
            dist: vec![W::infinite(); order],
            reached: 0,
        }
    }
}

impl<W> WeightedFromTree<W> {
    /// The path from the tree root to `n`, or empty if `n` is unreached.
    pub fn path_to(&self, n: NI) -> Vec<NI> {
        let len = self.paths[n as usize].len;
        let mut p = vec![NO_NODE; len];
        let mut at = n;
        for x in (0..len).rev() {
            p[x] = at;
            at = self.paths[at as usize].from;
        }
        p
    }
}

/// Single-source shortest paths tolerating negative arc weights.
///
/// Runs up to `order − 1` relaxation passes over all arcs, stopping early
/// when a pass changes nothing, then validates with one more pass: any
/// remaining improvement means a negative cycle is reachable from
/// `start`, reported as `Err`.
pub fn bellman_ford<W, F>(
    g: &AdjacencyList<Half, Directed>,
    mut weight: F,
    start: NI,
) -> Result<WeightedFromTree<W>, NegativeCycle>
where
    W: FloatMeasure,
    F: FnMut(LI) -> W,
{
    let order = g.order();
    let mut t = WeightedFromTree::new(order);
    if order == 0 {
        return Ok(t);
    }
    t.dist[start as usize] = W::zero();
    t.paths[start as usize] = PathEnd {
        from: NO_NODE,
        len: 1,
    };

    for _ in 1..order {
        let mut did_update = false;
        for (u, list) in g.iter() {
            let du = t.dist[u as usize];
            if !(du < W::infinite()) {
                continue;
            }
            let lu = t.paths[u as usize].len;
            for h in list {
                let nd = du + weight(h.label);
                let vx = h.to as usize;
                if nd < t.dist[vx] {
                    t.dist[vx] = nd;
                    t.paths[vx] = PathEnd {
                        from: u,
                        len: lu + 1,
                    };
                    did_update = true;
                }
            }
        }
        if !did_update {
            break;
        }
    }

    for (u, list) in g.iter() {
        let du = t.dist[u as usize];
        if !(du < W::infinite()) {
            continue;
        }
        for h in list {
            if du + weight(h.label) < t.dist[h.to as usize] {
                return Err(NegativeCycle(()));
            }
        }
    }

    t.reached = t.paths.iter().filter(|p| p.len > 0).count();
    Ok(t)
}

/// Find one cycle of negative total weight anywhere in the graph, as its
/// vertex sequence (closing arc implicit), or `None`.
///
/// Works like running [`bellman_ford`] from a virtual source with a
/// zero-weight arc to every node: all distances start at zero. If the
/// `order`-th pass still relaxes some node, walking `order` predecessor
/// steps from it lands inside a negative cycle, which is then collected.
pub fn negative_cycle<W, F>(g: &AdjacencyList<Half, Directed>, mut weight: F) -> Option<Vec<NI>>
where
    W: FloatMeasure,
    F: FnMut(LI) -> W,
{
    let order = g.order();
    let mut dist = vec![W::zero(); order];
    let mut pred = vec![NO_NODE; order];
    let mut last_updated = NO_NODE;
    for _ in 0..order {
        last_updated = NO_NODE;
        for (u, list) in g.iter() {
            for h in list {
                let nd = dist[u as usize] + weight(h.label);
                if nd < dist[h.to as usize] {
                    dist[h.to as usize] = nd;
                    pred[h.to as usize] = u;
                    last_updated = h.to;
                }
            }
        }
        if last_updated == NO_NODE {
            return None;
        }
    }

    let mut at = last_updated;
    for _ in 0..order {
        at = pred[at as usize];
    }
    let mut cycle = vec![at];
    let mut cur = pred[at as usize];
    while cur != at {
        cycle.push(cur);
        cur = pred[cur as usize];
    }
    cycle.reverse();
    Some(cycle)
}
