use std::cmp::Ordering;

use crate::vector::Vector;
use crate::Value;

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl PartialOrd for Vector {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

/// A clone is a deep copy with its own identity, sized to exactly the source
/// length.
impl Clone for Vector {
    fn clone(&self) -> Self {
        let mut vector = Vector::with_capacity(self.len());
        vector.extend(self);
        vector
    }

    /// Existing capacity is kept if it is large enough.
    fn clone_from(&mut self, other: &Self) {
        self.clear();
        self.reserve(other.len());
        self.extend(other);
    }
}

impl Vector {
    /// Returns `true` if the `Vector` contains an element equal to the given
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use polyseq::{Value, Vector};
    ///
    /// let vector: Vector = (0u8..3).map(Value::from).collect();
    /// assert!(vector.contains(&2u8.into()));
    /// assert!(!vector.contains(&10u8.into()));
    /// ```
    pub fn contains(&self, x: &Value) -> bool {
        self.as_slice().contains(x)
    }
}
