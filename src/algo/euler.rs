//! Eulerian cycles by Hierholzer's algorithm.
//!
//! The walk keeps a stack of unfinished nodes and an output path.
//! Starting from node 0, it pushes while the top node still has an
//! outgoing arc, consuming the arc (and, undirected, its reciprocal); a
//! node with no arcs left moves from the stack to the finished path.
//! The finished path comes out reversed and is flipped before returning.
//!
//! The `_d` variants are destructive: they consume the input graph's
//! to-lists in place, `O(arc_size)` with no copy. The plain variants
//! copy first. [`eulerian_cycle_undir_map`] is a map-based alternative
//! kept for comparison; see its note.

use core::fmt;

use hashbrown::HashMap;

use crate::adj::AdjacencyList;
use crate::{Directed, Undirected, NI};

/// Why no Eulerian cycle was returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EulerError {
    /// The walk could not return to its start: some node's in- and
    /// out-degrees differ (directed) or some degree is odd (undirected).
    NotBalanced,
    /// The walk closed but arcs remain: the arcs do not form a single
    /// connected component.
    NotStronglyConnected,
}

impl fmt::Display for EulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EulerError::NotBalanced => f.write_str("not balanced"),
            EulerError::NotStronglyConnected => f.write_str("not strongly connected"),
        }
    }
}

impl std::error::Error for EulerError {}

fn finish(path: Vec<NI>, expected: usize) -> Result<Vec<NI>, EulerError> {
    if path.first() != path.last() {
        return Err(EulerError::NotBalanced);
    }
    if path.len() != expected + 1 {
        return Err(EulerError::NotStronglyConnected);
    }
    let mut path = path;
    path.reverse();
    Ok(path)
}

/// Eulerian cycle of a directed graph, consuming the graph's arcs.
///
/// On success the returned sequence starts and ends at node 0 and uses
/// every arc exactly once; the graph is left with empty to-lists. On
/// error the graph is left partially consumed.
pub fn eulerian_cycle_d(g: &mut AdjacencyList<NI, Directed>) -> Result<Vec<NI>, EulerError> {
    if g.order() == 0 {
        return Ok(Vec::new());
    }
    let ma = g.arc_size();
    let mut path = Vec::with_capacity(ma + 1);
    let mut stack = vec![0];
    let lists = g.lists_mut();
    while let Some(&v) = stack.last() {
        match lists[v as usize].pop() {
            Some(w) => stack.push(w),
            None => {
                path.push(v);
                stack.pop();
            }
        }
    }
    finish(path, ma)
}

/// Eulerian cycle of a directed graph; copies, leaving the input intact.
pub fn eulerian_cycle(g: &AdjacencyList<NI, Directed>) -> Result<Vec<NI>, EulerError> {
    eulerian_cycle_d(&mut g.clone())
}

/// Eulerian cycle of an undirected graph, consuming the graph's arcs.
///
/// Consuming an edge removes both its arc-halves; a loop is one arc.
/// Requires the reciprocal-arc invariant: a missing reciprocal surfaces
/// as [`EulerError::NotBalanced`].
pub fn eulerian_cycle_undir_d(
    g: &mut AdjacencyList<NI, Undirected>,
) -> Result<Vec<NI>, EulerError> {
    if g.order() == 0 {
        return Ok(Vec::new());
    }
    let ne = g.edge_size();
    let mut path = Vec::with_capacity(ne + 1);
    let mut stack = vec![0];
    let lists = g.lists_mut();
    while let Some(&v) = stack.last() {
        match lists[v as usize].pop() {
            Some(w) => {
                if w != v {
                    match lists[w as usize].iter().position(|&x| x == v) {
                        Some(x) => {
                            lists[w as usize].swap_remove(x);
                        }
                        None => return Err(EulerError::NotBalanced),
                    }
                }
                stack.push(w);
            }
            None => {
                path.push(v);
                stack.pop();
            }
        }
    }
    finish(path, ne)
}

/// Eulerian cycle of an undirected graph; copies, leaving the input
/// intact.
pub fn eulerian_cycle_undir(g: &AdjacencyList<NI, Undirected>) -> Result<Vec<NI>, EulerError> {
    eulerian_cycle_undir_d(&mut g.clone())
}

/// Map-based undirected Eulerian cycle.
///
/// Stores each node's neighborhood as a `to → count` multiset so the
/// reciprocal of a consumed edge goes away in O(1) instead of a linear
/// scan. Measured against [`eulerian_cycle_undir_d`] this is
/// significantly slower on typical graphs anyway (the maps cost more
/// than the scans save), so it is not the default; it stays as the
/// comparison point and does not consume its input.
pub fn eulerian_cycle_undir_map(
    g: &AdjacencyList<NI, Undirected>,
) -> Result<Vec<NI>, EulerError> {
    if g.order() == 0 {
        return Ok(Vec::new());
    }
    let ne = g.edge_size();
    let mut nbr: Vec<HashMap<NI, usize>> = vec![HashMap::new(); g.order()];
    for (n, list) in g.iter() {
        for &w in list {
            *nbr[n as usize].entry(w).or_insert(0) += 1;
        }
    }
    let mut path = Vec::with_capacity(ne + 1);
    let mut stack = vec![0];
    while let Some(&v) = stack.last() {
        let vx = v as usize;
        match nbr[vx].keys().next().copied() {
            Some(w) => {
                take_one(&mut nbr[vx], w);
                if w != v {
                    if !take_one(&mut nbr[w as usize], v) {
                        return Err(EulerError::NotBalanced);
                    }
                }
                stack.push(w);
            }
            None => {
                path.push(v);
                stack.pop();
            }
        }
    }
    finish(path, ne)
}

fn take_one(m: &mut HashMap<NI, usize>, k: NI) -> bool {
    match m.get_mut(&k) {
        Some(c) if *c > 1 => {
            *c -= 1;
            true
        }
        Some(_) => {
            m.remove(&k);
            true
        }
        None => false,
    }
}
