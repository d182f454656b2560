//! A collection that keeps integers sorted using only stack operations.
//!
//! Values live on a `main` stack, smallest at the bottom. Inserting pops
//! every larger value onto an `aux` stack, pushes the new value, then moves
//! the displaced values back. Nothing here indexes into the stacks or calls
//! a sort routine.

#[derive(Debug, Clone, Default)]
pub struct SortedStack {
    main: Vec<i32>,
    aux: Vec<i32>,
}

impl SortedStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value`, keeping the main stack ascending from bottom to top.
    ///
    /// Costs O(k) where k is the number of stored values greater than
    /// `value`.
    pub fn insert(&mut self, value: i32) {
        while let Some(top) = self.main.pop() {
            if top <= value {
                self.main.push(top);
                break;
            }
            self.aux.push(top);
        }

        self.main.push(value);

        while let Some(larger) = self.aux.pop() {
            self.main.push(larger);
        }

        debug_assert!(self.aux.is_empty());
    }

    /// Every inserted value, smallest first.
    ///
    /// Bottom-to-top order is already ascending, so this is a plain copy of
    /// the main stack and leaves the collection untouched.
    pub fn snapshot(&self) -> Vec<i32> {
        self.main.clone()
    }

    /// The largest value stored, if any.
    pub fn peek(&self) -> Option<i32> {
        self.main.last().copied()
    }

    pub fn len(&self) -> usize {
        self.main.len()
    }

    pub fn is_empty(&self) -> bool {
        self.main.is_empty()
    }
}

impl Extend<i32> for SortedStack {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for SortedStack {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut stack = SortedStack::new();
        stack.extend(iter);
        stack
    }
}
