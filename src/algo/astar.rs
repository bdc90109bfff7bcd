//! A* shortest path.
//!
//! Two variants cover the two heuristic contracts. [`a_star_a`] requires
//! only an admissible heuristic (never overestimates) and re-expands
//! nodes whose distance later improves. [`a_star_m`] assumes a monotone
//! (consistent) heuristic, under which a popped node's distance is final,
//! so every node is expanded at most once; the cheaper variant when the
//! heuristic qualifies.

use std::collections::BinaryHeap;

use crate::adj::AdjacencyList;
use crate::algo::FloatMeasure;
use crate::fromlist::PathEnd;
use crate::scored::MinScored;
use crate::{Bits, EdgeType, Half, LI, NI, NO_NODE};

fn reconstruct(paths: &[PathEnd], end: NI) -> Vec<NI> {
    let mut p = vec![NO_NODE; paths[end as usize].len];
    let mut at = end;
    for x in (0..p.len()).rev() {
        p[x] = at;
        at = paths[at as usize].from;
    }
    p
}

/// A* with an admissible heuristic.
///
/// `heuristic(n)` must not overestimate the remaining distance from `n`
/// to `end`. Heuristic values are cached, one call per node. Returns the
/// path and its distance, or `None` if `end` is unreachable.
pub fn a_star_a<Ty, W, F, H>(
    g: &AdjacencyList<Half, Ty>,
    mut weight: F,
    start: NI,
    end: NI,
    mut heuristic: H,
) -> Option<(Vec<NI>, W)>
where
    Ty: EdgeType,
    W: FloatMeasure,
    F: FnMut(LI) -> W,
    H: FnMut(NI) -> W,
{
    let order = g.order();
    let mut dist = vec![W::infinite(); order];
    let mut paths = vec![PathEnd::UNVISITED; order];
    let mut hcache: Vec<Option<W>> = vec![None; order];
    let mut hv = |n: NI, hcache: &mut Vec<Option<W>>| match hcache[n as usize] {
        Some(v) => v,
        None => {
            let v = heuristic(n);
            hcache[n as usize] = Some(v);
            v
        }
    };

    let mut heap = BinaryHeap::new();
    dist[start as usize] = W::zero();
    paths[start as usize] = PathEnd {
        from: NO_NODE,
        len: 1,
    };
    heap.push(MinScored(hv(start, &mut hcache), 1, start));
    while let Some(MinScored(f, hops, n)) = heap.pop() {
        let nx = n as usize;
        // A stale entry: the node has been re-queued with a better path
        // since this one was pushed.
        if f > dist[nx] + hv(n, &mut hcache) {
            continue;
        }
        if n == end {
            return Some((reconstruct(&paths, end), dist[nx]));
        }
        let d = dist[nx];
        for h in g.to_list(n) {
            let w = h.to;
            let wx = w as usize;
            let nd = d + weight(h.label);
            let better = nd < dist[wx]
                || (nd == dist[wx] && hops + 1 < paths[wx].len);
            if better {
                dist[wx] = nd;
                paths[wx] = PathEnd {
                    from: n,
                    len: hops + 1,
                };
                heap.push(MinScored(nd + hv(w, &mut hcache), hops + 1, w));
            }
        }
    }
    None
}

/// A* with a monotone (consistent) heuristic:
/// `heuristic(u) ≤ weight(u→v) + heuristic(v)` for every arc.
///
/// Under that assumption no node needs re-expansion, so a closed set
/// makes each node's first pop final.
pub fn a_star_m<Ty, W, F, H>(
    g: &AdjacencyList<Half, Ty>,
    mut weight: F,
    start: NI,
    end: NI,
    mut heuristic: H,
) -> Option<(Vec<NI>, W)>
where
    Ty: EdgeType,
    W: FloatMeasure,
    F: FnMut(LI) -> W,
    H: FnMut(NI) -> W,
{
    let order = g.order();
    let mut dist = vec![W::infinite(); order];
    let mut paths = vec![PathEnd::UNVISITED; order];
    let mut closed = Bits::new(order);

    let mut heap = BinaryHeap::new();
    dist[start as usize] = W::zero();
    paths[start as usize] = PathEnd {
        from: NO_NODE,
        len: 1,
    };
    heap.push(MinScored(heuristic(start), 1, start));
    while let Some(MinScored(_, hops, n)) = heap.pop() {
        let nx = n as usize;
        if closed.bit(n) {
            continue;
        }
        closed.set_bit(n, true);
        if n == end {
            return Some((reconstruct(&paths, end), dist[nx]));
        }
        let d = dist[nx];
        for h in g.to_list(n) {
            let w = h.to;
            let wx = w as usize;
            if closed.bit(w) {
                continue;
            }
            let nd = d + weight(h.label);
            let better = nd < dist[wx]
                || (nd == dist[wx] && hops + 1 < paths[wx].len);
            if better {
                dist[wx] = nd;
                paths[wx] = PathEnd {
                    from: n,
                    len: hops + 1,
                };
                heap.push(MinScored(nd + heuristic(w), hops + 1, w));
            }
        }
    }
    None
}
