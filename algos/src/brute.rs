//! Exhaustive enumerators for stress-testing solutions on small inputs.

use std::iter::successors;
use std::ops::Deref;

use num_traits::ops::overflowing::OverflowingAdd;
use num_traits::PrimInt;

/// Every vector of a fixed length with entries in `[min, max]`, in lexicographic order.
///
/// Starts at all-`min`. [`BruteVector::advance`] steps like an odometer and
/// returns `false` once it wraps around to all-`min` again.
///
/// ```
/// use algos::brute::BruteVector;
///
/// let mut v = BruteVector::new(2, 0u8, 1);
/// let mut seen = vec![v.to_vec()];
/// while v.advance() {
///     seen.push(v.to_vec());
/// }
/// assert_eq!(seen, [[0, 0], [0, 1], [1, 0], [1, 1]]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BruteVector<T> {
    data: Vec<T>,
    min: T,
    max: T,
}

impl<T: PrimInt> BruteVector<T> {
    /// Creates the first vector, `len` copies of `min`.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn new(len: usize, min: T, max: T) -> Self {
        assert!(min <= max, "empty value range");
        Self {
            data: vec![min; len],
            min,
            max,
        }
    }

    /// Moves to the next vector, returns `false` after the last one.
    pub fn advance(&mut self) -> bool {
        for x in self.data.iter_mut().rev() {
            if *x == self.max {
                *x = self.min;
            } else {
                *x = *x + T::one();
                return true;
            }
        }
        false
    }
}

impl<T> Deref for BruteVector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Every vector of a fixed length with entries in `[min, max]` summing to `sum`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BruteFixedSum<T> {
    len: usize,
    min: T,
    max: T,
    sum: T,
}

impl<T: PrimInt + OverflowingAdd> BruteFixedSum<T> {
    /// Creates the enumerator.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn new(len: usize, min: T, max: T, sum: T) -> Self {
        assert!(min <= max, "empty value range");
        Self { len, min, max, sum }
    }

    /// Calls `f` on every matching vector, in lexicographic order.
    ///
    /// Prefix sums may leave the range of `T` as long as the full sum is
    /// back inside it, e.g. `[100, 100, -100]` over `i8`.
    pub fn for_each<F: FnMut(&[T])>(&self, mut f: F) {
        let mut data = vec![self.min; self.len];
        self.fill(&mut data, 0, T::zero(), 0, &mut f);
    }

    /// The exact prefix sum is `partial + wraps · 2^bits`.
    fn fill<F: FnMut(&[T])>(
        &self,
        data: &mut [T],
        pos: usize,
        partial: T,
        wraps: i64,
        f: &mut F,
    ) {
        if pos == data.len() {
            if wraps == 0 && partial == self.sum {
                f(data);
            }
            return;
        }
        let mut x = self.min;
        loop {
            let (next, overflowed) = partial.overflowing_add(&x);
            let wraps = match (overflowed, x > T::zero()) {
                (false, _) => wraps,
                (true, true) => wraps + 1,
                (true, false) => wraps - 1,
            };
            data[pos] = x;
            self.fill(data, pos + 1, next, wraps, f);
            if x >= self.max {
                break;
            }
            x = x + T::one();
        }
    }
}

/// Every vector of a fixed length with pairwise distinct entries in `[min, max]`,
/// in lexicographic order.
///
/// Starts at `min, min+1, ...`. [`BruteDistinct::advance`] returns `false`
/// after the last arrangement and resets to the first one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BruteDistinct<T> {
    data: Vec<T>,
    offsets: Vec<usize>,
    used: Vec<bool>,
    values: Vec<T>,
}

impl<T: PrimInt> BruteDistinct<T> {
    /// Creates the first arrangement, or `None` if `[min, max]` has fewer than `len` values.
    ///
    /// Also `None` when the number of values in the range does not fit in `usize`.
    pub fn new(len: usize, min: T, max: T) -> Option<Self> {
        if min > max {
            return None;
        }
        let span = match max.checked_sub(&min) {
            Some(span) => span.to_usize(),
            // signed range wider than T::MAX
            None => max
                .to_i128()
                .zip(min.to_i128())
                .and_then(|(hi, lo)| hi.checked_sub(lo))
                .and_then(|span| usize::try_from(span).ok()),
        }?;
        let width = span.checked_add(1)?;
        if len > width {
            return None;
        }
        let values: Vec<T> =
            successors(Some(min), |&x| (x < max).then(|| x + T::one())).collect();

        let mut brute = Self {
            data: Vec::with_capacity(len),
            offsets: (0..len).collect(),
            used: vec![false; width],
            values,
        };
        brute.used[..len].fill(true);
        brute.sync();
        Some(brute)
    }

    /// Moves to the next arrangement, returns `false` after the last one.
    pub fn advance(&mut self) -> bool {
        let len = self.offsets.len();
        for i in (0..len).rev() {
            let current = self.offsets[i];
            self.used[current] = false;

            let Some(next) = (current + 1..self.used.len()).find(|&j| !self.used[j]) else {
                continue;
            };
            self.offsets[i] = next;
            self.used[next] = true;

            let tail: Vec<usize> = (0..self.used.len())
                .filter(|&j| !self.used[j])
                .take(len - i - 1)
                .collect();
            for (offset, j) in self.offsets[i + 1..].iter_mut().zip(tail) {
                *offset = j;
                self.used[j] = true;
            }

            self.sync();
            return true;
        }

        for (i, offset) in self.offsets.iter_mut().enumerate() {
            *offset = i;
            self.used[i] = true;
        }
        self.sync();
        false
    }

    fn sync(&mut self) {
        self.data.clear();
        self.data
            .extend(self.offsets.iter().map(|&offset| self.values[offset]));
    }
}

impl<T> Deref for BruteDistinct<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

/// Every rooted tree on vertices `1..=n` with `parent[i] < i` for `i >= 2`.
///
/// There are `(n-1)!` of them, vertex `1` is always the root. Parent arrays
/// are indexed by vertex, entries `0` and `1` are unused and hold `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BruteTree {
    vertices: usize,
}

impl BruteTree {
    /// Creates the enumerator for trees with `vertices` vertices.
    pub fn new(vertices: usize) -> Self {
        Self { vertices }
    }

    /// Calls `f` with the parent array of every tree.
    pub fn for_each<F: FnMut(&[usize])>(&self, mut f: F) {
        let mut parent = vec![0; self.vertices + 1];
        self.assign(&mut parent, 2, &mut f);
    }

    /// Calls `f` with the parent array and the adjacency lists of every tree.
    pub fn for_each_adjacency<F: FnMut(&[usize], &[Vec<usize>])>(&self, mut f: F) {
        let n = self.vertices;
        self.for_each(|parent| {
            let mut adj = vec![Vec::new(); n + 1];
            for v in 2..=n {
                adj[v].push(parent[v]);
                adj[parent[v]].push(v);
            }
            f(parent, &adj);
        });
    }

    fn assign<F: FnMut(&[usize])>(&self, parent: &mut [usize], vertex: usize, f: &mut F) {
        if vertex > self.vertices {
            f(parent);
            return;
        }
        for p in 1..vertex {
            parent[vertex] = p;
            self.assign(parent, vertex + 1, f);
        }
    }
}
