use quickcheck::{quickcheck, Arbitrary, Gen};

use algraph::algo::{
    bellman_ford, biconnected_components, dijkstra, eulerian_cycle, eulerian_cycle_undir,
    floyd_warshall, johnson_cycles, kosaraju_scc, path_scc, pearce_scc, tarjan_cycles, tarjan_scc,
};
use algraph::{AdjacencyList, Bits, Directed, FromList, Half, Search, Undirected, LI, NI, NO_NODE};

const MAX_ORDER: usize = 10;
const MAX_DEG: usize = 4;

fn small(g: &mut Gen, bound: usize) -> usize {
    usize::arbitrary(g) % bound
}

#[derive(Clone, Debug)]
struct ArbDigraph(AdjacencyList<NI, Directed>);

impl Arbitrary for ArbDigraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let order = small(g, MAX_ORDER + 1);
        let mut lists = Vec::with_capacity(order);
        for _ in 0..order {
            let deg = small(g, MAX_DEG + 1);
            lists.push((0..deg).map(|_| small(g, order) as NI).collect());
        }
        ArbDigraph(AdjacencyList::from(lists))
    }
}

#[derive(Clone, Debug)]
struct ArbLabeledDigraph(AdjacencyList<Half, Directed>);

impl Arbitrary for ArbLabeledDigraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let order = small(g, MAX_ORDER + 1);
        let mut lists = Vec::with_capacity(order);
        for _ in 0..order {
            let deg = small(g, MAX_DEG + 1);
            lists.push(
                (0..deg)
                    .map(|_| Half::new(small(g, order) as NI, small(g, 9) as LI))
                    .collect(),
            );
        }
        ArbLabeledDigraph(AdjacencyList::from(lists))
    }
}

#[derive(Clone, Debug)]
struct ArbUndirected(AdjacencyList<Half, Undirected>);

impl Arbitrary for ArbUndirected {
    fn arbitrary(g: &mut Gen) -> Self {
        let order = 1 + small(g, MAX_ORDER);
        let edges = small(g, 2 * MAX_ORDER);
        let mut u: AdjacencyList<Half, Undirected> = AdjacencyList::with_order(order);
        for _ in 0..edges {
            u.add_edge(
                small(g, order) as NI,
                small(g, order) as NI,
                small(g, 9) as LI,
            );
        }
        ArbUndirected(u)
    }
}

// A graph guaranteed Eulerian: edges laid along a random closed walk.
#[derive(Clone, Debug)]
struct ArbEulerWalk(Vec<NI>);

impl Arbitrary for ArbEulerWalk {
    fn arbitrary(g: &mut Gen) -> Self {
        let order = 1 + small(g, 6);
        let len = small(g, 12);
        let mut walk = vec![0];
        for _ in 0..len {
            walk.push(small(g, order) as NI);
        }
        walk.push(0);
        ArbEulerWalk(walk)
    }
}

fn sorted_lists<Ty: algraph::EdgeType>(g: &AdjacencyList<NI, Ty>) -> Vec<Vec<NI>> {
    g.iter()
        .map(|(_, l)| {
            let mut l = l.to_vec();
            l.sort_unstable();
            l
        })
        .collect()
}

fn partition<E>(run: E) -> Vec<Vec<NI>>
where
    E: FnOnce(&mut dyn FnMut(&[NI]) -> bool),
{
    let mut comps = Vec::new();
    run(&mut |c: &[NI]| {
        comps.push({
            let mut c = c.to_vec();
            c.sort_unstable();
            c
        });
        true
    });
    comps
}

quickcheck! {
    // transpose(transpose(g)) == g up to to-list ordering
    fn prop_transpose_involution(g: ArbDigraph) -> bool {
        let (t, ma) = g.0.transpose();
        let (tt, ma2) = t.transpose();
        ma == ma2 && sorted_lists(&tt) == sorted_lists(&g.0)
    }

    // undirected_copy leaves every non-loop arc reciprocated
    fn prop_undirected_copy_reciprocal(g: ArbDigraph) -> bool {
        g.0.undirected_copy().is_undirected()
    }

    // the four SCC algorithms agree on the partition, and the claimed
    // emission orders hold for every crossing arc
    fn prop_scc_partition_and_order(g: ArbDigraph) -> bool {
        let t = partition(|f| tarjan_scc(&g.0, f));
        let p = partition(|f| path_scc(&g.0, f));
        let e = partition(|f| pearce_scc(&g.0, f));
        let k = partition(|f| kosaraju_scc(&g.0, f));
        let as_set = |v: &[Vec<NI>]| {
            let mut v = v.to_vec();
            v.sort();
            v
        };
        if as_set(&t) != as_set(&p) || as_set(&t) != as_set(&e) || as_set(&t) != as_set(&k) {
            return false;
        }
        let index_of = |comps: &[Vec<NI>]| {
            let mut ix = vec![0usize; g.0.order()];
            for (i, c) in comps.iter().enumerate() {
                for &n in c {
                    ix[n as usize] = i;
                }
            }
            ix
        };
        let (ti, pi, ei, ki) = (index_of(&t), index_of(&p), index_of(&e), index_of(&k));
        for (u, list) in g.0.iter() {
            for &v in list {
                let (ux, vx) = (u as usize, v as usize);
                if ti[ux] != ti[vx] {
                    // reverse topological: target component emitted first
                    if ti[vx] > ti[ux] || pi[vx] > pi[ux] || ei[vx] > ei[ux] {
                        return false;
                    }
                    // topological: source component emitted first
                    if ki[vx] < ki[ux] {
                        return false;
                    }
                }
            }
        }
        true
    }

    // breadth-first path length matches Dijkstra under unit weights
    fn prop_bfs_matches_unit_dijkstra(g: ArbLabeledDigraph) -> bool {
        if g.0.order() == 0 {
            return true;
        }
        let mut f = FromList::new(0);
        Search::new().from_list(&mut f).breadth_first(&g.0, 0);
        let d = dijkstra(&g.0, |_| 1.0, 0, None);
        (0..g.0.order()).all(|n| {
            if f.paths[n].len > 0 {
                d.dist[n] == (f.paths[n].len - 1) as f64
            } else {
                d.dist[n] == f64::INFINITY
            }
        })
    }

    // Dijkstra and Bellman-Ford agree on non-negative weights
    fn prop_dijkstra_matches_bellman_ford(g: ArbLabeledDigraph) -> bool {
        if g.0.order() == 0 {
            return true;
        }
        let w = |l: LI| f64::from(l);
        let d = dijkstra(&g.0, w, 0, None);
        let b = match bellman_ford(&g.0, w, 0) {
            Ok(b) => b,
            Err(_) => return false, // no negative weights here
        };
        (0..g.0.order()).all(|n| d.dist[n] == b.dist[n])
    }

    // Floyd-Warshall distance matrix is symmetric for undirected graphs
    fn prop_floyd_warshall_symmetric(g: ArbUndirected) -> bool {
        let fw = floyd_warshall(&g.0, |l| f64::from(l));
        let n = g.0.order();
        (0..n).all(|i| (0..n).all(|j| fw.d[i][j] == fw.d[j][i]))
    }

    // a graph built from a closed walk has an Eulerian cycle that uses
    // every edge exactly once
    fn prop_euler_round_trip(walk: ArbEulerWalk) -> bool {
        let mut g: AdjacencyList<NI, Undirected> = AdjacencyList::with_order(1);
        for w in walk.0.windows(2) {
            g.add_edge(w[0], w[1]);
        }
        let ne = g.edge_size();
        let c = match eulerian_cycle_undir(&g) {
            Ok(c) => c,
            Err(_) => return false,
        };
        if c.len() != ne + 1 || c.first() != c.last() {
            return false;
        }
        let mut r: AdjacencyList<NI, Undirected> = AdjacencyList::with_order(g.order());
        for w in c.windows(2) {
            r.add_edge(w[0], w[1]);
        }
        sorted_lists(&g) == sorted_lists(&r)
    }

    // same for a directed closed walk
    fn prop_euler_round_trip_directed(walk: ArbEulerWalk) -> bool {
        let mut g: AdjacencyList<NI, Directed> = AdjacencyList::with_order(1);
        for w in walk.0.windows(2) {
            g.add_arc(w[0], w[1]);
        }
        let ma = g.arc_size();
        let c = match eulerian_cycle(&g) {
            Ok(c) => c,
            Err(_) => return false,
        };
        if c.len() != ma + 1 {
            return false;
        }
        let mut r: AdjacencyList<NI, Directed> = AdjacencyList::with_order(g.order());
        for w in c.windows(2) {
            r.add_arc(w[0], w[1]);
        }
        sorted_lists(&g) == sorted_lists(&r)
    }

    // Johnson and Tarjan enumerate the same simple cycles
    fn prop_cycle_enumerators_agree(g: ArbDigraph) -> bool {
        // drop parallel arcs; both algorithms then emit identical sets
        let lists: Vec<Vec<NI>> = g.0.iter().map(|(_, l)| {
            let mut l = l.to_vec();
            l.sort_unstable();
            l.dedup();
            l
        }).collect();
        let g: AdjacencyList<NI, Directed> = AdjacencyList::from(lists);
        let mut j = Vec::new();
        johnson_cycles(&g, |c| {
            j.push(c.to_vec());
            true
        });
        let mut t = Vec::new();
        tarjan_cycles(&g, |c| {
            t.push(c.to_vec());
            true
        });
        for c in j.iter().chain(t.iter()) {
            let mut s = c.clone();
            s.sort_unstable();
            s.dedup();
            if s.len() != c.len() {
                return false; // not a simple cycle
            }
        }
        j.sort();
        t.sort();
        j == t
    }

    // FromList invariant after an arbitrary breadth-first run
    fn prop_from_list_consistent(g: ArbDigraph, start: usize) -> bool {
        if g.0.order() == 0 {
            return true;
        }
        let start = (start % g.0.order()) as NI;
        let mut f = FromList::new(0);
        Search::new().from_list(&mut f).breadth_first(&g.0, start);
        if f.paths[start as usize].from != NO_NODE {
            return false;
        }
        (0..g.0.order()).all(|n| {
            let p = f.paths[n];
            p.from < 0 || f.paths[p.from as usize].len == p.len - 1
        })
    }

    // bitset scans agree with a naive bit-by-bit scan
    fn prop_bits_scans(onbits: Vec<usize>, len: usize) -> bool {
        let len = len % 200;
        let ones: Vec<NI> = onbits.iter().map(|&b| (b % len.max(1)) as NI).collect();
        if len == 0 {
            return true;
        }
        let b = Bits::from_ones(len, ones.iter().copied());
        (0..len as NI).all(|i| {
            let naive_one = (i..len as NI).find(|&j| b.bit(j)).unwrap_or(NO_NODE);
            let naive_zero = (i..len as NI).find(|&j| !b.bit(j)).unwrap_or(NO_NODE);
            b.one_from(i) == naive_one && b.zero_from(i) == naive_zero
        })
    }

    // every edge lands in exactly one biconnected component
    fn prop_bcc_covers_non_loop_edges(g: ArbUndirected) -> bool {
        let u = g.0.unlabeled();
        let mut emitted = 0;
        biconnected_components(&u, |c| {
            emitted += c.len();
            true
        });
        let non_loop_edges = u
            .iter()
            .map(|(n, l)| l.iter().filter(|&&t| t != n).count())
            .sum::<usize>()
            / 2;
        emitted == non_loop_edges
    }
}
