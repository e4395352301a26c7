//! Lazy enumeration of perfect matchings.
//!
//! An even-length list of `n` labels has `(n − 1)!!` perfect matchings: the
//! first label is paired with every other label in turn and the remainder is
//! matched the same way. An odd-length list leaves exactly one label
//! unpaired, so each choice of left-out label is followed by all matchings
//! of the rest.
//!
//! The enumeration is iterative (an explicit stack of choice frames), so it
//! does not recurse however long the list grows.

/// One way of pairing up labels; order follows the enumeration.
pub type Matching<T> = Vec<(T, T)>;

/// Returns an iterator over every matching of `labels`.
///
/// ```rust
/// # use fatgraph::algs::matching::all_perfect_matchings;
/// let all: Vec<_> = all_perfect_matchings(vec![1, 2, 3, 4]).collect();
/// assert_eq!(all, vec![
///     vec![(1, 2), (3, 4)],
///     vec![(1, 3), (2, 4)],
///     vec![(1, 4), (2, 3)],
/// ]);
/// ```
pub fn all_perfect_matchings<T: Copy>(labels: Vec<T>) -> PerfectMatchings<T> {
    PerfectMatchings::new(labels)
}

/// Iterator over perfect matchings. A clone continues independently from
/// the same position; [`PerfectMatchings::new`] starts again from the first.
#[derive(Clone, Debug)]
pub struct PerfectMatchings<T> {
    labels: Vec<T>,
    /// Left-out index for odd-length input.
    skip: Option<usize>,
    inner: EvenMatchings<T>,
}

impl<T: Copy> PerfectMatchings<T> {
    pub fn new(labels: Vec<T>) -> Self {
        if labels.len() % 2 == 0 {
            let inner = EvenMatchings::new(labels.clone());
            Self {
                labels,
                skip: None,
                inner,
            }
        } else {
            let inner = EvenMatchings::new(without(&labels, &[0]));
            Self {
                labels,
                skip: Some(0),
                inner,
            }
        }
    }

    /// Number of matchings the iterator yields in total.
    pub fn total(&self) -> u128 {
        let n = self.labels.len();
        if n % 2 == 0 {
            double_factorial(n.saturating_sub(1))
        } else {
            n as u128 * double_factorial(n.saturating_sub(2))
        }
    }
}

impl<T: Copy> Iterator for PerfectMatchings<T> {
    type Item = Matching<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(m) = self.inner.next() {
                return Some(m);
            }
            let skip = self.skip? + 1;
            if skip >= self.labels.len() {
                self.skip = None;
                return None;
            }
            self.skip = Some(skip);
            self.inner = EvenMatchings::new(without(&self.labels, &[skip]));
        }
    }
}

/// `(n)!! = n · (n − 2) · …`, with `0!! = 1!! = 1`.
pub fn double_factorial(n: usize) -> u128 {
    (1..=n as u128).rev().step_by(2).product()
}

/// Choice point: `pool[0]` is currently paired with `pool[partner]`.
#[derive(Clone, Debug)]
struct Frame<T> {
    pool: Vec<T>,
    partner: usize,
}

/// Backtracking enumerator over an even-length list.
#[derive(Clone, Debug)]
struct EvenMatchings<T> {
    stack: Vec<Frame<T>>,
    pairs: Matching<T>,
    /// Pool handed to the first descent; `None` once started.
    pending: Option<Vec<T>>,
}

impl<T: Copy> EvenMatchings<T> {
    fn new(pool: Vec<T>) -> Self {
        Self {
            stack: Vec::new(),
            pairs: Vec::new(),
            pending: Some(pool),
        }
    }

    /// Pairs the head of each successive pool with its first partner.
    fn descend(&mut self, mut pool: Vec<T>) {
        while pool.len() >= 2 {
            self.pairs.push((pool[0], pool[1]));
            let rest = without(&pool, &[0, 1]);
            self.stack.push(Frame { pool, partner: 1 });
            pool = rest;
        }
    }
}

impl<T: Copy> Iterator for EvenMatchings<T> {
    type Item = Matching<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(pool) = self.pending.take() {
            self.descend(pool);
            return Some(self.pairs.clone());
        }
        while let Some(frame) = self.stack.last_mut() {
            self.pairs.pop();
            frame.partner += 1;
            if frame.partner < frame.pool.len() {
                let pair = (frame.pool[0], frame.pool[frame.partner]);
                let rest = without(&frame.pool, &[0, frame.partner]);
                self.pairs.push(pair);
                self.descend(rest);
                return Some(self.pairs.clone());
            }
            self.stack.pop();
        }
        None
    }
}

/// Copy of `items` without the given (ascending) positions.
fn without<T: Copy>(items: &[T], positions: &[usize]) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| !positions.contains(i))
        .map(|(_, &x)| x)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn normalized(m: &Matching<u32>) -> BTreeSet<(u32, u32)> {
        m.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect()
    }

    #[test]
    fn empty_list_has_one_empty_matching() {
        let all: Vec<_> = all_perfect_matchings(Vec::<u32>::new()).collect();
        assert_eq!(all, vec![Vec::new()]);
    }

    #[test]
    fn single_label_is_left_out() {
        let all: Vec<_> = all_perfect_matchings(vec![9u32]).collect();
        assert_eq!(all, vec![Vec::new()]);
    }

    #[test]
    fn odd_list_leaves_each_label_out_once() {
        let all: Vec<_> = all_perfect_matchings(vec![1u32, 2, 3]).collect();
        assert_eq!(all, vec![vec![(2, 3)], vec![(1, 3)], vec![(1, 2)]]);
    }

    #[test]
    fn counts_match_double_factorial() {
        for n in 0..=9usize {
            let labels: Vec<u32> = (1..=n as u32).collect();
            let it = all_perfect_matchings(labels);
            let expected = it.total();
            let all: Vec<_> = it.collect();
            assert_eq!(all.len() as u128, expected, "n = {n}");
            let distinct: BTreeSet<_> = all.iter().map(normalized).collect();
            assert_eq!(distinct.len(), all.len(), "duplicates for n = {n}");
        }
        assert_eq!(double_factorial(7), 105);
        assert_eq!(double_factorial(0), 1);
    }

    #[test]
    fn restart_by_clone() {
        let mut it = all_perfect_matchings(vec![1u32, 2, 3, 4, 5, 6]);
        it.next();
        let rest: Vec<_> = it.clone().collect();
        let again: Vec<_> = it.collect();
        assert_eq!(rest, again);
        assert_eq!(rest.len(), 14);
    }
}
