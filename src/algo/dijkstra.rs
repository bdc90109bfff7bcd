//! Dijkstra shortest paths.

use std::collections::BinaryHeap;

use crate::adj::AdjacencyList;
use crate::algo::{FloatMeasure, WeightedFromTree};
use crate::fromlist::PathEnd;
use crate::scored::MinScored;
use crate::{Bits, EdgeType, Half, LI, NI, NO_NODE};

/// Single-source shortest paths with a binary heap.
///
/// Arc weights come from `weight` applied to arc labels and must be
/// non-negative; this is not checked. Passing `end` stops the search as
/// soon as that node's distance is final. Ties in distance are broken
/// toward fewer arcs.
///
/// Returns a [`WeightedFromTree`]; unreached nodes keep `len == 0` and an
/// infinite distance.
pub fn dijkstra<Ty, W, F>(
    g: &AdjacencyList<Half, Ty>,
    mut weight: F,
    start: NI,
    end: Option<NI>,
) -> WeightedFromTree<W>
where
    Ty: EdgeType,
    W: FloatMeasure,
    F: FnMut(LI) -> W,
{
    let order = g.order();
    let mut t = WeightedFromTree::new(order);
    if order == 0 {
        return t;
    }
    let mut done = Bits::new(order);
    let mut heap = BinaryHeap::new();
    t.dist[start as usize] = W::zero();
    t.paths[start as usize] = PathEnd {
        from: NO_NODE,
        len: 1,
    };
    heap.push(MinScored(W::zero(), 1, start));
    while let Some(MinScored(d, hops, n)) = heap.pop() {
        if done.bit(n) {
            continue;
        }
        done.set_bit(n, true);
        t.reached += 1;
        if Some(n) == end {
            break;
        }
        for h in g.to_list(n) {
            let w = h.to;
            let wx = w as usize;
            if done.bit(w) {
                continue;
            }
            let nd = d + weight(h.label);
            let better = nd < t.dist[wx]
                || (nd == t.dist[wx] && hops + 1 < t.paths[wx].len);
            if better {
                t.dist[wx] = nd;
                t.paths[wx] = PathEnd {
                    from: n,
                    len: hops + 1,
                };
                heap.push(MinScored(nd, hops + 1, w));
            }
        }
    }
    t
}

/// The shortest path from `start` to `end` and its distance, or `None`
/// if `end` is unreachable.
pub fn dijkstra_path<Ty, W, F>(
    g: &AdjacencyList<Half, Ty>,
    weight: F,
    start: NI,
    end: NI,
) -> Option<(Vec<NI>, W)>
where
    Ty: EdgeType,
    W: FloatMeasure,
    F: FnMut(LI) -> W,
{
    let t = dijkstra(g, weight, start, Some(end));
    if t.paths[end as usize].len == 0 {
        return None;
    }
    Some((t.path_to(end), t.dist[end as usize]))
}
