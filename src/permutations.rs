//! Lazy permutation enumeration (iterative Heap's algorithm).
//!
//! Only the current arrangement and one counter per position are kept, so
//! memory stays O(N) no matter how many permutations are visited.

#[derive(Debug, Clone)]
pub struct HeapPermutations<T> {
    items: Vec<T>,
    counters: Vec<usize>,
    position: usize,
    started: bool,
}

impl<T> HeapPermutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let counters = vec![0; items.len()];
        Self {
            items,
            counters,
            position: 1,
            started: false,
        }
    }

    /// Advance to the next arrangement and borrow it.
    ///
    /// The first call yields the input order unchanged. An empty input
    /// yields a single empty arrangement.
    pub fn next_permutation(&mut self) -> Option<&[T]> {
        if !self.started {
            self.started = true;
            return Some(self.items.as_slice());
        }

        let n = self.items.len();
        while self.position < n {
            let i = self.position;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.position = 1;
                return Some(self.items.as_slice());
            }
            self.counters[i] = 0;
            self.position += 1;
        }

        None
    }
}

impl<T: Clone> Iterator for HeapPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_permutation().map(<[T]>::to_vec)
    }
}
