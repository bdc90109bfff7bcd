use core::cmp::Ordering;

use crate::NI;

/// `MinScored<K>` holds a score, a hop count, and a node for use with a
/// `BinaryHeap`.
///
/// `MinScored` compares in reverse order by the score, so that the heap
/// pops the least-score entry first; equal scores compare by hop count,
/// fewer hops first. It implements a total order so float scores work;
/// NaN sorts last.
#[derive(Copy, Clone, Debug)]
pub(crate) struct MinScored<K>(pub K, pub usize, pub NI);

impl<K: PartialOrd> PartialEq for MinScored<K> {
    #[inline]
    fn eq(&self, other: &MinScored<K>) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: PartialOrd> Eq for MinScored<K> {}

impl<K: PartialOrd> PartialOrd for MinScored<K> {
    #[inline]
    fn partial_cmp(&self, other: &MinScored<K>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: PartialOrd> Ord for MinScored<K> {
    fn cmp(&self, other: &MinScored<K>) -> Ordering {
        let a = &self.0;
        let b = &other.0;
        if a == b {
            other.1.cmp(&self.1)
        } else if a < b {
            Ordering::Greater
        } else if a > b {
            Ordering::Less
        } else if a != a && b != b {
            Ordering::Equal
        } else if a != a {
            // order NaN less, so that it is last in the MinScored order
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn pops_least_score_then_fewest_hops() {
        let mut heap = BinaryHeap::new();
        heap.push(MinScored(2.0, 1, 0));
        heap.push(MinScored(1.0, 5, 1));
        heap.push(MinScored(1.0, 2, 2));
        heap.push(MinScored(f64::NAN, 0, 3));
        assert_eq!(heap.pop().unwrap().2, 2);
        assert_eq!(heap.pop().unwrap().2, 1);
        assert_eq!(heap.pop().unwrap().2, 0);
        assert_eq!(heap.pop().unwrap().2, 3);
    }
}
