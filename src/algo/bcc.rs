//! Biconnected components and articulation points of undirected graphs.

use crate::adj::{AdjacencyList, ArcEnd};
use crate::{Bits, Undirected, NI, NO_NODE};

/// Tarjan's biconnected components.
///
/// Emits each component as a slice of edges in DFS orientation. The
/// slice's backing storage is reused across emissions; copy to retain.
/// `emit` returning `false` stops the enumeration. Self-loops belong to
/// no component and are skipped; an isolated node emits nothing.
pub fn biconnected_components<T, F>(g: &AdjacencyList<T, Undirected>, emit: F)
where
    T: ArcEnd,
    F: FnMut(&[(NI, NI)]) -> bool,
{
    struct St<F> {
        num: Vec<usize>,
        low: Vec<usize>,
        c: usize,
        estack: Vec<(NI, NI)>,
        comp: Vec<(NI, NI)>,
        emit: F,
        stopped: bool,
    }

    fn visit<T: ArcEnd, F: FnMut(&[(NI, NI)]) -> bool>(
        g: &AdjacencyList<T, Undirected>,
        v: NI,
        parent: NI,
        st: &mut St<F>,
    ) {
        let vx = v as usize;
        st.c += 1;
        st.num[vx] = st.c;
        st.low[vx] = st.c;
        let mut parent_skipped = false;
        for a in g.to_list(v) {
            let w = a.to();
            if w == v {
                continue;
            }
            let wx = w as usize;
            if st.num[wx] == 0 {
                st.estack.push((v, w));
                visit(g, w, v, st);
                if st.stopped {
                    return;
                }
                if st.low[wx] < st.low[vx] {
                    st.low[vx] = st.low[wx];
                }
                if st.low[wx] >= st.num[vx] {
                    st.comp.clear();
                    loop {
                        let e = st.estack.pop().unwrap();
                        st.comp.push(e);
                        if e == (v, w) {
                            break;
                        }
                    }
                    if !(st.emit)(&st.comp) {
                        st.stopped = true;
                        return;
                    }
                }
            } else if w == parent && !parent_skipped {
                // One to-list entry is the tree arc's reciprocal; any
                // further parallel edge to the parent is a back edge.
                parent_skipped = true;
            } else if st.num[wx] < st.num[vx] {
                st.estack.push((v, w));
                if st.num[wx] < st.low[vx] {
                    st.low[vx] = st.num[wx];
                }
            }
        }
    }

    let order = g.order();
    let mut st = St {
        num: vec![0; order],
        low: vec![0; order],
        c: 0,
        estack: Vec::new(),
        comp: Vec::new(),
        emit,
        stopped: false,
    };
    for n in 0..order as NI {
        if st.num[n as usize] == 0 {
            visit(g, n, NO_NODE, &mut st);
            if st.stopped {
                return;
            }
        }
    }
}

/// The articulation points: nodes whose removal disconnects their
/// component. Ascending order.
pub fn articulation_points<T: ArcEnd>(g: &AdjacencyList<T, Undirected>) -> Vec<NI> {
    struct St {
        num: Vec<usize>,
        low: Vec<usize>,
        c: usize,
        cut: Bits,
    }

    fn visit<T: ArcEnd>(g: &AdjacencyList<T, Undirected>, v: NI, parent: NI, st: &mut St) {
        let vx = v as usize;
        st.c += 1;
        st.num[vx] = st.c;
        st.low[vx] = st.c;
        let mut children = 0;
        let mut parent_skipped = false;
        for a in g.to_list(v) {
            let w = a.to();
            if w == v {
                continue;
            }
            let wx = w as usize;
            if st.num[wx] == 0 {
                children += 1;
                visit(g, w, v, st);
                if st.low[wx] < st.low[vx] {
                    st.low[vx] = st.low[wx];
                }
                if parent >= 0 && st.low[wx] >= st.num[vx] {
                    st.cut.set_bit(v, true);
                }
            } else if w == parent && !parent_skipped {
                parent_skipped = true;
            } else if st.num[wx] < st.low[vx] {
                st.low[vx] = st.num[wx];
            }
        }
        if parent < 0 && children > 1 {
            st.cut.set_bit(v, true);
        }
    }

    let order = g.order();
    let mut st = St {
        num: vec![0; order],
        low: vec![0; order],
        c: 0,
        cut: Bits::new(order),
    };
    for n in 0..order as NI {
        if st.num[n as usize] == 0 {
            visit(g, n, NO_NODE, &mut st);
        }
    }
    st.cut.ones().collect()
}
