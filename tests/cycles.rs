use algraph::algo::{johnson_cycles, tarjan_cycles};
use algraph::{AdjacencyList, NI};

fn collect<E>(run: E) -> Vec<Vec<NI>>
where
    E: FnOnce(&mut dyn FnMut(&[NI]) -> bool),
{
    let mut out = Vec::new();
    run(&mut |c: &[NI]| {
        out.push(c.to_vec());
        true
    });
    out.sort();
    out
}

// The K4-ish worked example: complete digraph on {0,1,2} plus a tail.
fn k3_with_tail() -> AdjacencyList {
    AdjacencyList::from(vec![
        vec![1, 2],
        vec![0, 2],
        vec![0, 1, 3],
        vec![],
    ])
}

#[test]
fn complete_digraph_cycles() {
    let g = k3_with_tail();
    let expected: Vec<Vec<NI>> = vec![
        vec![0, 1],
        vec![0, 1, 2],
        vec![0, 2],
        vec![0, 2, 1],
        vec![1, 2],
    ];
    assert_eq!(collect(|f| johnson_cycles(&g, f)), expected);
    assert_eq!(collect(|f| tarjan_cycles(&g, f)), expected);
}

#[test]
fn self_loops_are_unit_cycles() {
    let g: AdjacencyList = AdjacencyList::from(vec![vec![0, 1], vec![1]]);
    let expected: Vec<Vec<NI>> = vec![vec![0], vec![1]];
    assert_eq!(collect(|f| johnson_cycles(&g, f)), expected);
    assert_eq!(collect(|f| tarjan_cycles(&g, f)), expected);
}

#[test]
fn dag_has_no_cycles() {
    let g: AdjacencyList = AdjacencyList::from(vec![vec![1, 2], vec![2], vec![]]);
    assert!(collect(|f| johnson_cycles(&g, f)).is_empty());
    assert!(collect(|f| tarjan_cycles(&g, f)).is_empty());
}

#[test]
fn cycles_are_simple() {
    let g = k3_with_tail();
    johnson_cycles(&g, |c| {
        let mut seen = c.to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), c.len(), "repeated vertex in {:?}", c);
        true
    });
}

#[test]
fn figure_eight() {
    // Two cycles sharing vertex 0.
    let g: AdjacencyList = AdjacencyList::from(vec![vec![1, 3], vec![2], vec![0], vec![4], vec![0]]);
    let expected: Vec<Vec<NI>> = vec![vec![0, 1, 2], vec![0, 3, 4]];
    assert_eq!(collect(|f| johnson_cycles(&g, f)), expected);
    assert_eq!(collect(|f| tarjan_cycles(&g, f)), expected);
}
