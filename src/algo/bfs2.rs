//! Direction-optimizing breadth-first search, after Beamer.
//!
//! The search starts top-down like an ordinary frontier BFS. At the
//! start of a level, if the frontier's total out-degree `mf` exceeds
//! `arc_size / ALPHA`, the level runs bottom-up instead: every unvisited
//! node scans its in-arcs (through the supplied transpose) and claims
//! itself when an in-neighbor sits in the frontier. The search drops
//! back to top-down when the frontier shrinks below
//! `order / (BETA · arc_size / order)`.
//!
//! `ALPHA` and `BETA` are tunables taken from the reference
//! implementation, not derived.

use crate::adj::{AdjacencyList, ArcEnd};
use crate::fromlist::{FromList, PathEnd};
use crate::{Bits, EdgeType, NI, NO_NODE};

const ALPHA: usize = 10;
const BETA: usize = 14;

/// Breadth-first search from `start`, switching between top-down and
/// bottom-up levels.
///
/// `tr` must be the transpose of `g` (for an undirected graph, `g`
/// itself). Returns the traversal tree and the number of nodes visited.
/// Visit order within a level differs from
/// [`Search::breadth_first`](crate::Search::breadth_first) during
/// bottom-up levels, but the level structure, each node's
/// `paths[n].len`, is identical.
pub fn breadth_first2<T, Ty>(
    g: &AdjacencyList<T, Ty>,
    tr: &AdjacencyList<T, Ty>,
    start: NI,
) -> (FromList, usize)
where
    T: ArcEnd,
    Ty: EdgeType,
{
    let order = g.order();
    let mut f = FromList::new(order);
    if order == 0 {
        return (f, 0);
    }
    let ma = g.arc_size();
    f.paths[start as usize] = PathEnd {
        from: NO_NODE,
        len: 1,
    };
    f.max_len = 1;
    let mut visited = Bits::new(order);
    visited.set_bit(start, true);
    let mut count = 1;
    let mut level = 1;
    let mut top_down = true;
    let mut frontier = vec![start];
    let mut mf = g.out_degree(start);
    let mut frontier_bits = Bits::new(order);
    let mut next_bits = Bits::new(order);

    loop {
        if top_down {
            if frontier.is_empty() {
                break;
            }
            if mf > ma / ALPHA {
                frontier_bits.clear_all();
                for &n in &frontier {
                    frontier_bits.set_bit(n, true);
                }
                top_down = false;
                continue;
            }
            let mut next = Vec::new();
            let mut next_mf = 0;
            for &n in &frontier {
                for a in g.to_list(n) {
                    let w = a.to();
                    if !visited.bit(w) {
                        visited.set_bit(w, true);
                        f.paths[w as usize] = PathEnd {
                            from: n,
                            len: level + 1,
                        };
                        next.push(w);
                        next_mf += g.out_degree(w);
                    }
                }
            }
            count += next.len();
            frontier = next;
            mf = next_mf;
            level += 1;
            if !frontier.is_empty() {
                f.max_len = level;
            }
        } else {
            let mut nf = 0;
            next_bits.clear_all();
            let mut v = visited.zero_from(0);
            while v != NO_NODE {
                for a in tr.to_list(v) {
                    if frontier_bits.bit(a.to()) {
                        visited.set_bit(v, true);
                        f.paths[v as usize] = PathEnd {
                            from: a.to(),
                            len: level + 1,
                        };
                        next_bits.set_bit(v, true);
                        nf += 1;
                        break;
                    }
                }
                v = visited.zero_from(v + 1);
            }
            if nf == 0 {
                break;
            }
            count += nf;
            level += 1;
            f.max_len = level;
            core::mem::swap(&mut frontier_bits, &mut next_bits);
            let threshold = order / (BETA * ma / order).max(1);
            if nf < threshold {
                frontier.clear();
                mf = 0;
                for n in frontier_bits.ones() {
                    frontier.push(n);
                    mf += g.out_degree(n);
                }
                top_down = true;
            }
        }
    }
    (f, count)
}
