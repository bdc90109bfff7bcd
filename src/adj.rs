//! Adjacency-list storage and structural queries.
//!
//! [`AdjacencyList`] is the one storage representation behind all graph
//! variants: a vector of to-lists indexed by node. The arc-end type
//! parameter selects unlabeled ([`NI`]) or labeled ([`Half`]) arcs, and the
//! edge-type parameter records the direction discipline. Undirected graphs
//! use the same storage with the reciprocal-arc invariant; see
//! [`crate::undir`].

use core::fmt;
use core::marker::PhantomData;
use core::ops::Index;

use hashbrown::{HashMap, HashSet};

use crate::{Bits, Directed, EdgeType, Half, LI, NI, NO_NODE};

/// An entry in a to-list: either a bare node number or a labeled
/// [`Half`]. Sources are implicit, so this is all an arc-end is.
pub trait ArcEnd: Copy + PartialEq + fmt::Debug {
    fn to(&self) -> NI;
    /// The same arc-end aimed at a different node, label preserved.
    fn with_to(&self, to: NI) -> Self;
    fn label(&self) -> Option<LI>;
}

impl ArcEnd for NI {
    #[inline]
    fn to(&self) -> NI {
        *self
    }

    #[inline]
    fn with_to(&self, to: NI) -> NI {
        to
    }

    #[inline]
    fn label(&self) -> Option<LI> {
        None
    }
}

impl ArcEnd for Half {
    #[inline]
    fn to(&self) -> NI {
        self.to
    }

    #[inline]
    fn with_to(&self, to: NI) -> Half {
        Half {
            to,
            label: self.label,
        }
    }

    #[inline]
    fn label(&self) -> Option<LI> {
        Some(self.label)
    }
}

/// An adjacency list: a to-list per node.
///
/// `T` is the arc-end type, [`NI`] or [`Half`]; `Ty` is [`Directed`] or
/// [`Undirected`](crate::Undirected). Node numbers index the outer vector,
/// so the set of nodes is always `0..order`. Order within a to-list is
/// significant: visitors observe it and several algorithms depend on stable
/// iteration.
pub struct AdjacencyList<T = NI, Ty = Directed> {
    lists: Vec<Vec<T>>,
    ty: PhantomData<Ty>,
}

impl<T: Clone, Ty> Clone for AdjacencyList<T, Ty> {
    fn clone(&self) -> Self {
        AdjacencyList {
            lists: self.lists.clone(),
            ty: PhantomData,
        }
    }
}

impl<T: fmt::Debug, Ty> fmt::Debug for AdjacencyList<T, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.lists).finish()
    }
}

impl<T: PartialEq, Ty> PartialEq for AdjacencyList<T, Ty> {
    fn eq(&self, other: &Self) -> bool {
        self.lists == other.lists
    }
}

impl<T: Eq, Ty> Eq for AdjacencyList<T, Ty> {}

impl<T, Ty> Default for AdjacencyList<T, Ty> {
    fn default() -> Self {
        AdjacencyList {
            lists: Vec::new(),
            ty: PhantomData,
        }
    }
}

impl<T, Ty> From<Vec<Vec<T>>> for AdjacencyList<T, Ty> {
    /// Adopt raw to-lists. The caller is responsible for the invariants of
    /// the chosen variant (destination bounds, reciprocal arcs).
    fn from(lists: Vec<Vec<T>>) -> Self {
        AdjacencyList {
            lists,
            ty: PhantomData,
        }
    }
}

impl<T, Ty> Index<NI> for AdjacencyList<T, Ty> {
    type Output = [T];

    #[inline]
    fn index(&self, n: NI) -> &[T] {
        &self.lists[n as usize]
    }
}

impl<T: ArcEnd, Ty: EdgeType> AdjacencyList<T, Ty> {
    /// An empty graph of order 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph of the given order with no arcs.
    pub fn with_order(order: usize) -> Self {
        let mut lists = Vec::new();
        lists.resize_with(order, Vec::new);
        AdjacencyList {
            lists,
            ty: PhantomData,
        }
    }

    /// The number of nodes.
    #[inline]
    pub fn order(&self) -> usize {
        self.lists.len()
    }

    /// The total length of all to-lists.
    pub fn arc_size(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Arc density relative to a complete simple directed graph:
    /// `arc_size / (order² − order)`. NaN for graphs of order < 2.
    pub fn arc_density(&self) -> f64 {
        let n = self.order() as f64;
        self.arc_size() as f64 / (n * n - n)
    }

    /// The to-list of node `n`.
    #[inline]
    pub fn to_list(&self, n: NI) -> &[T] {
        &self.lists[n as usize]
    }

    #[inline]
    pub fn out_degree(&self, n: NI) -> usize {
        self.lists[n as usize].len()
    }

    /// In-degree of every node, computed in one pass.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut d = vec![0; self.order()];
        for list in &self.lists {
            for a in list {
                d[a.to() as usize] += 1;
            }
        }
        d
    }

    /// Iterate over `(node, to-list)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (NI, &[T])> {
        self.lists
            .iter()
            .enumerate()
            .map(|(n, l)| (n as NI, l.as_slice()))
    }

    pub(crate) fn lists(&self) -> &[Vec<T>] {
        &self.lists
    }

    pub(crate) fn lists_mut(&mut self) -> &mut Vec<Vec<T>> {
        &mut self.lists
    }

    /// Grow storage so nodes `0..order` exist.
    pub(crate) fn grow(&mut self, order: usize) {
        if order > self.lists.len() {
            self.lists.resize_with(order, Vec::new);
        }
    }

    pub(crate) fn push_arc(&mut self, fr: NI, end: T) {
        assert!(fr >= 0 && end.to() >= 0, "negative node number");
        let min = (fr.max(end.to()) + 1) as usize;
        self.grow(min);
        self.lists[fr as usize].push(end);
    }

    /// Whether every destination is a node of the graph.
    pub fn bounds_ok(&self) -> bool {
        let order = self.order() as NI;
        self.lists
            .iter()
            .all(|l| l.iter().all(|a| (0..order).contains(&a.to())))
    }

    /// The first node with a self-loop, in node order.
    pub fn any_loop(&self) -> Option<NI> {
        self.iter()
            .find(|(n, l)| l.iter().any(|a| a.to() == *n))
            .map(|(n, _)| n)
    }

    /// The first parallel arc, found by sorting a copy of each to-list.
    ///
    /// `O(arc_size · log)` time, no extra memory beyond the copy. The
    /// returned `(from, to)` is the first duplicate in source order within
    /// the offending to-list, not the first in sorted order.
    pub fn any_parallel_sort(&self) -> Option<(NI, NI)> {
        let mut sorted = Vec::new();
        for (fr, list) in self.iter() {
            if list.len() < 2 {
                continue;
            }
            sorted.clear();
            sorted.extend(list.iter().map(ArcEnd::to));
            sorted.sort_unstable();
            if sorted.windows(2).all(|w| w[0] != w[1]) {
                continue;
            }
            // Duplicates exist here; report the earliest second occurrence.
            for (x, a) in list.iter().enumerate() {
                if list[..x].iter().any(|b| b.to() == a.to()) {
                    return Some((fr, a.to()));
                }
            }
        }
        None
    }

    /// The first parallel arc, found with a hash set per source.
    ///
    /// `O(arc_size)` expected time, more memory than
    /// [`any_parallel_sort`](Self::any_parallel_sort).
    pub fn any_parallel_map(&self) -> Option<(NI, NI)> {
        let mut seen = HashSet::new();
        for (fr, list) in self.iter() {
            seen.clear();
            for a in list {
                if !seen.insert(a.to()) {
                    return Some((fr, a.to()));
                }
            }
        }
        None
    }

    /// Whether the graph has no self-loop and no parallel arc.
    pub fn is_simple(&self) -> bool {
        self.any_loop().is_none() && self.any_parallel_sort().is_none()
    }

    /// Index into `fr`'s to-list of the first arc to `to`.
    pub fn has_arc(&self, fr: NI, to: NI) -> Option<usize> {
        self.lists[fr as usize].iter().position(|a| a.to() == to)
    }

    /// Indices into `fr`'s to-list of every arc to `to`.
    pub fn parallel_arcs(&self, fr: NI, to: NI) -> Vec<usize> {
        self.lists[fr as usize]
            .iter()
            .enumerate()
            .filter(|(_, a)| a.to() == to)
            .map(|(x, _)| x)
            .collect()
    }

    /// The graph with every arc reversed, and the number of arcs.
    pub fn transpose(&self) -> (AdjacencyList<T, Ty>, usize) {
        let mut t: Vec<Vec<T>> = Vec::new();
        t.resize_with(self.order(), Vec::new);
        let mut ma = 0;
        for (fr, list) in self.iter() {
            for a in list {
                t[a.to() as usize].push(a.with_to(fr));
                ma += 1;
            }
        }
        (AdjacencyList::from(t), ma)
    }

    /// The first arc with no reciprocal, or `None` if the reciprocal-arc
    /// invariant holds (labels matching pairwise).
    pub fn unpaired_arc(&self) -> Option<(NI, NI)> {
        // Arcs w→u with w > u, grouped at u, so each unordered pair is
        // examined once at its smaller endpoint even when only the back
        // direction exists.
        let mut rev: Vec<Vec<NI>> = vec![Vec::new(); self.order()];
        for (u, list) in self.iter() {
            for a in list {
                if a.to() < u {
                    rev[a.to() as usize].push(u);
                }
            }
        }
        let mut cands: Vec<NI> = Vec::new();
        for (u, list) in self.iter() {
            cands.clear();
            cands.extend(list.iter().map(ArcEnd::to).filter(|&v| v > u));
            cands.extend(&rev[u as usize]);
            cands.sort_unstable();
            cands.dedup();
            for &v in &cands {
                let mut there: Vec<LI> = list
                    .iter()
                    .filter(|a| a.to() == v)
                    .map(|a| a.label().unwrap_or(0))
                    .collect();
                let mut back: Vec<LI> = self.lists[v as usize]
                    .iter()
                    .filter(|a| a.to() == u)
                    .map(|a| a.label().unwrap_or(0))
                    .collect();
                there.sort_unstable();
                back.sort_unstable();
                if there != back {
                    return if back.len() < there.len() {
                        Some((u, v))
                    } else {
                        Some((v, u))
                    };
                }
            }
        }
        None
    }

    /// Whether every non-loop arc has a reciprocal with matching label.
    pub fn is_undirected(&self) -> bool {
        self.unpaired_arc().is_none()
    }

    /// Shuffle every to-list in place.
    pub fn shuffle_arc_lists<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        use rand::seq::SliceRandom;
        for l in &mut self.lists {
            l.shuffle(rng);
        }
    }

    /// Renumber nodes in place: node `n` becomes `perm[n]`, and every
    /// destination is rewritten accordingly. `perm` must be a permutation
    /// of `0..order`.
    pub fn permute(&mut self, perm: &[NI]) {
        assert_eq!(perm.len(), self.order(), "permutation length mismatch");
        let mut new_lists: Vec<Vec<T>> = vec![Vec::new(); self.order()];
        for (n, list) in self.lists.drain(..).enumerate() {
            new_lists[perm[n] as usize] = list
                .into_iter()
                .map(|a| a.with_to(perm[a.to() as usize]))
                .collect();
        }
        self.lists = new_lists;
    }

    /// The subgraph induced by `nodes`, with sub-node numbers assigned in
    /// the order given. Duplicate entries are ignored after the first.
    pub fn induce_list(&self, nodes: &[NI]) -> Subgraph<'_, T, Ty> {
        Subgraph::induce(self, nodes.iter().copied())
    }

    /// The subgraph induced by the set bits of `keep`.
    pub fn induce_bits(&self, keep: &Bits) -> Subgraph<'_, T, Ty> {
        Subgraph::induce(self, keep.ones())
    }
}

impl<Ty: EdgeType> AdjacencyList<Half, Ty> {
    /// Strip labels, keeping all arcs in order.
    pub fn unlabeled(&self) -> AdjacencyList<NI, Ty> {
        AdjacencyList::from(
            self.lists
                .iter()
                .map(|l| l.iter().map(|h| h.to).collect())
                .collect::<Vec<Vec<NI>>>(),
        )
    }
}

/// An induced subgraph with its node mapping.
///
/// `super_ni` maps sub-node numbers to nodes of the supergraph, and
/// [`sub_ni`](Subgraph::sub_ni) maps the other way; the two form an
/// injection: `sub_ni(super_ni[i]) == i` for every sub-node `i`.
pub struct Subgraph<'a, T = NI, Ty = Directed> {
    pub super_graph: &'a AdjacencyList<T, Ty>,
    pub sub: AdjacencyList<T, Ty>,
    /// Sub-node → super-node.
    pub super_ni: Vec<NI>,
    sub_map: HashMap<NI, NI>,
}

impl<'a, T: ArcEnd, Ty: EdgeType> Subgraph<'a, T, Ty> {
    fn induce<I>(g: &'a AdjacencyList<T, Ty>, nodes: I) -> Self
    where
        I: IntoIterator<Item = NI>,
    {
        let mut s = Subgraph {
            super_graph: g,
            sub: AdjacencyList::default(),
            super_ni: Vec::new(),
            sub_map: HashMap::new(),
        };
        for n in nodes {
            s.add_node(n);
        }
        for (sx, &sup) in s.super_ni.iter().enumerate() {
            let list = g.to_list(sup)
                .iter()
                .filter_map(|a| s.sub_map.get(&a.to()).map(|&t| a.with_to(t)))
                .collect();
            s.sub.lists_mut()[sx] = list;
        }
        s
    }

    /// The sub-node number of supergraph node `n`, or [`NO_NODE`].
    pub fn sub_ni(&self, n: NI) -> NI {
        self.sub_map.get(&n).copied().unwrap_or(NO_NODE)
    }

    /// Add supergraph node `n` to the subgraph, returning its sub-node
    /// number. Returns the existing number if already present.
    ///
    /// Panics if `n` is not a node of the supergraph.
    pub fn add_node(&mut self, n: NI) -> NI {
        assert!(
            n >= 0 && (n as usize) < self.super_graph.order(),
            "node {} not in supergraph",
            n
        );
        if let Some(&sx) = self.sub_map.get(&n) {
            return sx;
        }
        let sx = self.super_ni.len() as NI;
        self.super_ni.push(n);
        self.sub_map.insert(n, sx);
        self.sub.grow(sx as usize + 1);
        sx
    }

    /// Add one arc `fr→to` (supergraph node numbers) to the subgraph.
    ///
    /// Returns `false` when the supergraph has no further parallel copy of
    /// the arc available. Panics if either node is not in the supergraph.
    pub fn add_arc(&mut self, fr: NI, to: NI) -> bool {
        assert!(
            fr >= 0 && (fr as usize) < self.super_graph.order(),
            "node {} not in supergraph",
            fr
        );
        assert!(
            to >= 0 && (to as usize) < self.super_graph.order(),
            "node {} not in supergraph",
            to
        );
        let avail = self.super_graph.parallel_arcs(fr, to);
        if avail.is_empty() {
            return false;
        }
        let fx = self.add_node(fr);
        let tx = self.add_node(to);
        let have = self.sub.parallel_arcs(fx, tx).len();
        match avail.get(have) {
            Some(&x) => {
                let end = self.super_graph.to_list(fr)[x].with_to(tx);
                self.sub.lists_mut()[fx as usize].push(end);
                true
            }
            None => false,
        }
    }
}
