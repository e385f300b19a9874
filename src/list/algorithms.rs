use std::cmp::Ordering;

use crate::list::List;
use crate::Value;

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl PartialOrd for List {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

/// A clone is a deep copy with its own identity: positions taken from the
/// source are foreign to the clone.
impl Clone for List {
    fn clone(&self) -> Self {
        self.iter().copied().collect()
    }

    /// Elements are copied one by one. Positions taken from `self` before
    /// the call no longer resolve to an element.
    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.extend(other);
    }
}

impl List {
    /// Returns `true` if the `List` contains an element equal to the given value.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0u8.into());
    /// list.push_back(1u8.into());
    /// list.push_back(2u8.into());
    ///
    /// assert_eq!(list.contains(&0u8.into()), true);
    /// assert_eq!(list.contains(&10u8.into()), false);
    /// ```
    pub fn contains(&self, x: &Value) -> bool {
        self.iter().any(|e| e == x)
    }
}
