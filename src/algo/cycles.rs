//! Elementary cycle enumeration.
//!
//! Both enumerators emit each cycle as the vertex sequence in traversal
//! order; the closing arc from the last vertex back to the first is
//! implicit. Each cycle starts at its lowest-numbered vertex. The slice
//! passed to `emit` reuses the enumerator's path stack; copy to retain.
//! `emit` returning `false` stops the enumeration.

use hashbrown::HashSet;

use crate::adj::{AdjacencyList, ArcEnd};
use crate::algo::scc::tarjan_scc;
use crate::{Bits, Directed, NI};

/// Johnson's algorithm.
///
/// For each start vertex `s` in ascending order, cycles through `s` are
/// enumerated within the strongly connected component containing `s` of
/// the subgraph induced on vertices `≥ s`. A vertex blocks on entry and
/// unblocks through the `B` sets when a cycle through it is found.
pub fn johnson_cycles<T, F>(g: &AdjacencyList<T, Directed>, emit: F)
where
    T: ArcEnd,
    F: FnMut(&[NI]) -> bool,
{
    struct St<F> {
        fg: AdjacencyList<NI, Directed>,
        s: NI,
        in_comp: Bits,
        blocked: Bits,
        b: Vec<HashSet<NI>>,
        path: Vec<NI>,
        emit: F,
        stopped: bool,
    }

    fn unblock<F>(st: &mut St<F>, v: NI) {
        st.blocked.set_bit(v, false);
        let ws: Vec<NI> = st.b[v as usize].drain().collect();
        for w in ws {
            if st.blocked.bit(w) {
                unblock(st, w);
            }
        }
    }

    fn circuit<F: FnMut(&[NI]) -> bool>(st: &mut St<F>, v: NI) -> bool {
        let mut found = false;
        st.path.push(v);
        st.blocked.set_bit(v, true);
        for x in 0..st.fg.out_degree(v) {
            let w = st.fg.to_list(v)[x];
            if !st.in_comp.bit(w) {
                continue;
            }
            if w == st.s {
                if !(st.emit)(&st.path) {
                    st.stopped = true;
                    return found;
                }
                found = true;
            } else if !st.blocked.bit(w) {
                if circuit(st, w) {
                    found = true;
                }
                if st.stopped {
                    return found;
                }
            }
        }
        if found {
            unblock(st, v);
        } else {
            for x in 0..st.fg.out_degree(v) {
                let w = st.fg.to_list(v)[x];
                if st.in_comp.bit(w) {
                    st.b[w as usize].insert(v);
                }
            }
        }
        st.path.pop();
        found
    }

    let order = g.order();
    let mut st = St {
        fg: AdjacencyList::new(),
        s: 0,
        in_comp: Bits::new(order),
        blocked: Bits::new(order),
        b: vec![HashSet::new(); order],
        path: Vec::new(),
        emit,
        stopped: false,
    };
    for s in 0..order as NI {
        // Subgraph induced on vertices ≥ s, keeping original numbering.
        let filtered: Vec<Vec<NI>> = g
            .iter()
            .map(|(u, l)| {
                if u < s {
                    Vec::new()
                } else {
                    l.iter().map(ArcEnd::to).filter(|&w| w >= s).collect()
                }
            })
            .collect();
        st.fg = AdjacencyList::from(filtered);
        let mut comp: Vec<NI> = Vec::new();
        tarjan_scc(&st.fg, |c| {
            if c.contains(&s) {
                comp = c.to_vec();
                false
            } else {
                true
            }
        });
        let has_loop = st.fg.to_list(s).contains(&s);
        if comp.len() < 2 && !has_loop {
            continue;
        }
        st.s = s;
        st.in_comp.clear_all();
        for &n in &comp {
            st.in_comp.set_bit(n, true);
            st.blocked.set_bit(n, false);
            st.b[n as usize].clear();
        }
        circuit(&mut st, s);
        if st.stopped {
            return;
        }
    }
}

/// Tarjan's 1972 enumeration.
///
/// Keeps an explicit point stack and a marked stack over a working copy
/// of the adjacency lists; arcs to vertices below the current start are
/// physically removed from the copy so no cycle is rediscovered. When a
/// cycle through `v` was found, every vertex from the top of the marked
/// stack down to and including `v` is unmarked while backtracking.
pub fn tarjan_cycles<T, F>(g: &AdjacencyList<T, Directed>, emit: F)
where
    T: ArcEnd,
    F: FnMut(&[NI]) -> bool,
{
    struct St<F> {
        adj: Vec<Vec<NI>>,
        mark: Bits,
        marked: Vec<NI>,
        point: Vec<NI>,
        s: NI,
        emit: F,
        stopped: bool,
    }

    fn backtrack<F: FnMut(&[NI]) -> bool>(st: &mut St<F>, v: NI) -> bool {
        let mut f = false;
        st.point.push(v);
        st.mark.set_bit(v, true);
        st.marked.push(v);
        let s = st.s;
        st.adj[v as usize].retain(|&w| w >= s);
        for x in 0..st.adj[v as usize].len() {
            let w = st.adj[v as usize][x];
            if w == s {
                if !(st.emit)(&st.point) {
                    st.stopped = true;
                    return f;
                }
                f = true;
            } else if !st.mark.bit(w) {
                if backtrack(st, w) {
                    f = true;
                }
                if st.stopped {
                    return f;
                }
            }
        }
        if f {
            loop {
                let u = st.marked.pop().unwrap();
                st.mark.set_bit(u, false);
                if u == v {
                    break;
                }
            }
        }
        st.point.pop();
        f
    }

    let order = g.order();
    let mut st = St {
        adj: g
            .iter()
            .map(|(_, l)| l.iter().map(ArcEnd::to).collect())
            .collect(),
        mark: Bits::new(order),
        marked: Vec::new(),
        point: Vec::new(),
        s: 0,
        emit,
        stopped: false,
    };
    for s in 0..order as NI {
        st.s = s;
        backtrack(&mut st, s);
        if st.stopped {
            return;
        }
        st.point.clear();
        while let Some(u) = st.marked.pop() {
            st.mark.set_bit(u, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<E>(enumerate: E) -> Vec<Vec<NI>>
    where
        E: FnOnce(&mut dyn FnMut(&[NI]) -> bool),
    {
        let mut out = Vec::new();
        enumerate(&mut |c: &[NI]| {
            out.push(c.to_vec());
            true
        });
        out.sort();
        out
    }

    #[test]
    fn both_enumerators_agree() {
        // Two triangles sharing vertex 2, plus a self-loop at 1.
        let g: AdjacencyList = AdjacencyList::from(vec![
            vec![1],
            vec![2, 1],
            vec![0, 3],
            vec![4],
            vec![2],
        ]);
        let j = collect(|f| johnson_cycles(&g, f));
        let t = collect(|f| tarjan_cycles(&g, f));
        assert_eq!(j, t);
        assert_eq!(j, vec![vec![0, 1, 2], vec![1], vec![2, 3, 4]]);
    }

    #[test]
    fn emit_false_stops() {
        let g: AdjacencyList = AdjacencyList::from(vec![vec![1], vec![0, 2], vec![1]]);
        let mut n = 0;
        johnson_cycles(&g, |_| {
            n += 1;
            false
        });
        assert_eq!(n, 1);
        n = 0;
        tarjan_cycles(&g, |_| {
            n += 1;
            false
        });
        assert_eq!(n, 1);
    }
}
