//! Operations specific to directed graphs.

use crate::adj::{AdjacencyList, ArcEnd};
use crate::{Bits, Directed, Half, Undirected, LI, NI};

impl AdjacencyList<NI, Directed> {
    /// Add the arc `fr→to`, growing the graph to cover both nodes.
    pub fn add_arc(&mut self, fr: NI, to: NI) {
        self.push_arc(fr, to);
    }
}

impl AdjacencyList<Half, Directed> {
    /// Add the arc `fr→to` with `label`, growing the graph to cover both
    /// nodes.
    pub fn add_arc(&mut self, fr: NI, to: NI, label: LI) {
        self.push_arc(fr, Half { to, label });
    }
}

impl<T: ArcEnd> AdjacencyList<T, Directed> {
    /// A topological ordering by Kahn's algorithm, or `None` if the graph
    /// has a cycle.
    pub fn ordering(&self) -> Option<Vec<NI>> {
        let order = self.order();
        let mut indeg = self.in_degrees();
        let mut ready: Vec<NI> = (0..order as NI)
            .filter(|&n| indeg[n as usize] == 0)
            .collect();
        ready.reverse(); // pop from the end, lowest node first
        let mut result = Vec::with_capacity(order);
        while let Some(n) = ready.pop() {
            result.push(n);
            for a in self.to_list(n) {
                let w = a.to() as usize;
                indeg[w] -= 1;
                if indeg[w] == 0 {
                    ready.push(w as NI);
                }
            }
        }
        if result.len() == order {
            Some(result)
        } else {
            None
        }
    }

    /// Whether the graph has a directed cycle, with the back arc that
    /// closes the first cycle found in DFS order.
    pub fn cyclic(&self) -> Option<(NI, NI)> {
        fn dfs<T: ArcEnd>(
            g: &AdjacencyList<T, Directed>,
            n: NI,
            visited: &mut Bits,
            on_path: &mut Bits,
        ) -> Option<(NI, NI)> {
            visited.set_bit(n, true);
            on_path.set_bit(n, true);
            for a in g.to_list(n) {
                let w = a.to();
                if on_path.bit(w) {
                    return Some((n, w));
                }
                if !visited.bit(w) {
                    if let Some(c) = dfs(g, w, visited, on_path) {
                        return Some(c);
                    }
                }
            }
            on_path.set_bit(n, false);
            None
        }

        let mut visited = Bits::new(self.order());
        let mut on_path = Bits::new(self.order());
        for n in 0..self.order() as NI {
            if !visited.bit(n) {
                if let Some(c) = dfs(self, n, &mut visited, &mut on_path) {
                    return Some(c);
                }
            }
        }
        None
    }

    /// Whether every node has in-degree equal to out-degree.
    pub fn balanced(&self) -> bool {
        self.in_degrees()
            .iter()
            .enumerate()
            .all(|(n, &d)| d == self.out_degree(n as NI))
    }

    /// A copy with reciprocals added for every arc that lacks one,
    /// labels preserved.
    pub fn undirected_copy(&self) -> AdjacencyList<T, Undirected> {
        let mut lists = self.lists().to_vec();
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
                let mut there: Vec<T> =
                    list.iter().filter(|a| a.to() == v).copied().collect();
                let mut back: Vec<T> = self.to_list(v)
                    .iter()
                    .filter(|a| a.to() == u)
                    .copied()
                    .collect();
                there.sort_unstable_by_key(|a| a.label().unwrap_or(0));
                back.sort_unstable_by_key(|a| a.label().unwrap_or(0));
                // Merge by label; a surplus on either side gets its
                // reciprocal added to the other.
                let (mut i, mut j) = (0, 0);
                while i < there.len() || j < back.len() {
                    let lt = there.get(i).map(|a| a.label().unwrap_or(0));
                    let lb = back.get(j).map(|a| a.label().unwrap_or(0));
                    match (lt, lb) {
                        (Some(a), Some(b)) if a == b => {
                            i += 1;
                            j += 1;
                        }
                        (Some(a), Some(b)) if a < b => {
                            lists[v as usize].push(there[i].with_to(u));
                            i += 1;
                        }
                        (Some(_), None) => {
                            lists[v as usize].push(there[i].with_to(u));
                            i += 1;
                        }
                        _ => {
                            lists[u as usize].push(back[j].with_to(v));
                            j += 1;
                        }
                    }
                }
            }
        }
        AdjacencyList::from(lists)
    }
}
