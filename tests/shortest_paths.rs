use algraph::algo::{
    a_star_a, a_star_m, bellman_ford, dag_longest_path, dijkstra, dijkstra_path, floyd_warshall,
};
use algraph::{AdjacencyList, Directed, FromList, Half, Search, LI, NI};

fn wf(l: LI) -> f64 {
    f64::from(l)
}

#[test]
fn dag_longest_labeled_path() {
    // labels
    const Q: LI = 10;
    const W: LI = 11;
    const M: LI = 12;
    const S: LI = 13;
    const P: LI = 14;
    let mut g: AdjacencyList<Half, Directed> = AdjacencyList::new();
    g.add_arc(3, 0, Q);
    g.add_arc(3, 4, W);
    g.add_arc(4, 0, M);
    g.add_arc(1, 0, S);
    g.add_arc(0, 2, P);
    let topo = g.ordering().unwrap();
    assert_eq!(topo.len(), 5);
    let (path, len) = dag_longest_path(&g, &topo, |_| 1, 0);
    assert_eq!(len, 3);
    assert_eq!(path[0], 3);
    let labels: Vec<LI> = path
        .windows(2)
        .map(|p| {
            let x = g.has_arc(p[0], p[1]).unwrap();
            g.to_list(p[0])[x].label
        })
        .collect();
    assert_eq!(labels, vec![W, M, P]);
}

#[test]
fn floyd_warshall_negative_arcs() {
    let mut g: AdjacencyList<Half, Directed> = AdjacencyList::new();
    g.add_arc(0, 2, -1);
    g.add_arc(1, 3, -2);
    g.add_arc(2, 1, 4);
    g.add_arc(2, 3, 3);
    g.add_arc(3, 0, 2);
    let fw = floyd_warshall(&g, wf);
    assert_eq!(fw.d[0], vec![0.0, 3.0, -1.0, 1.0]);
    assert_eq!(fw.negative_cycle_node(), None);
}

#[test]
fn dijkstra_agrees_with_bellman_ford() {
    let mut g: AdjacencyList<Half, Directed> = AdjacencyList::new();
    for &(fr, to, l) in &[
        (0, 1, 7),
        (0, 2, 9),
        (0, 5, 14),
        (1, 2, 10),
        (1, 3, 15),
        (2, 3, 11),
        (2, 5, 2),
        (3, 4, 6),
        (4, 5, 9),
    ] {
        g.add_arc(fr, to, l);
    }
    let d = dijkstra(&g, wf, 0, None);
    let b = bellman_ford(&g, wf, 0).unwrap();
    for n in 0..g.order() {
        assert_eq!(d.dist[n], b.dist[n], "node {}", n);
    }
    assert_eq!(d.dist[4], 26.0);
    assert_eq!(d.path_to(4), vec![0, 2, 3, 4]);
}

#[test]
fn bfs_length_matches_unit_dijkstra() {
    let mut g: AdjacencyList<Half, Directed> = AdjacencyList::new();
    for &(fr, to) in &[(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (1, 4), (4, 0)] {
        g.add_arc(fr, to, 1);
    }
    let mut f = FromList::new(0);
    Search::new().from_list(&mut f).breadth_first(&g, 0);
    let d = dijkstra(&g, wf, 0, None);
    for n in 0..g.order() {
        if f.paths[n].len > 0 {
            assert_eq!((f.paths[n].len - 1) as f64, d.dist[n], "node {}", n);
        } else {
            assert_eq!(d.dist[n], f64::INFINITY);
        }
    }
}

#[test]
fn a_star_matches_dijkstra_with_zero_heuristic() {
    let mut g: AdjacencyList<Half, Directed> = AdjacencyList::new();
    for &(fr, to, l) in &[(0, 1, 4), (0, 2, 1), (2, 1, 2), (1, 3, 1), (2, 3, 5)] {
        g.add_arc(fr, to, l);
    }
    let (pd, dd) = dijkstra_path(&g, wf, 0, 3).unwrap();
    let (pa, da) = a_star_a(&g, wf, 0, 3, |_| 0.0).unwrap();
    let (pm, dm) = a_star_m(&g, wf, 0, 3, |_| 0.0).unwrap();
    assert_eq!(dd, 4.0);
    assert_eq!(da, dd);
    assert_eq!(dm, dd);
    assert_eq!(pd, vec![0, 2, 1, 3]);
    assert_eq!(pa, pd);
    assert_eq!(pm, pd);
}

#[test]
fn single_pair_terminates_at_target() {
    let mut g: AdjacencyList<Half, Directed> = AdjacencyList::new();
    g.add_arc(0, 1, 1);
    g.add_arc(1, 2, 1);
    g.add_arc(2, 3, 1);
    let t = dijkstra(&g, wf, 0, Some(1));
    // 2 and 3 were never finalized
    assert_eq!(t.reached, 2);
    assert_eq!(t.dist[1], 1.0);
}

#[test]
fn dijkstra_prefers_fewer_hops_on_ties() {
    let mut g: AdjacencyList<Half, Directed> = AdjacencyList::new();
    g.add_arc(0, 1, 1);
    g.add_arc(1, 2, 1);
    g.add_arc(0, 2, 2);
    let (path, d) = dijkstra_path(&g, wf, 0, 2).unwrap();
    assert_eq!(d, 2.0);
    assert_eq!(path, vec![0, 2]);
}

#[test]
fn dense_cross_check_dijkstra_floyd_warshall() {
    let mut g: AdjacencyList<Half, Directed> = AdjacencyList::new();
    for &(fr, to, l) in &[
        (0, 1, 3),
        (1, 2, 1),
        (2, 0, 2),
        (0, 3, 9),
        (2, 3, 4),
        (3, 1, 1),
    ] {
        g.add_arc(fr, to, l);
    }
    let fw = floyd_warshall(&g, wf);
    for s in 0..g.order() as NI {
        let t = dijkstra(&g, wf, s, None);
        for n in 0..g.order() {
            assert_eq!(t.dist[n], fw.d[s as usize][n], "{} -> {}", s, n);
        }
    }
}
