/// The mutable ordered set of candidate values for a single variable.
///
/// Values are kept sorted ascending with no duplicates. During search a
/// domain only ever shrinks; values come back solely through trail rollback,
/// which replaces the whole domain with an earlier snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    values: Vec<i32>,
}

impl Domain {
    /// The full domain `1..=side` for a blank cell on a grid of the given side.
    pub fn full(side: usize) -> Self {
        Self {
            values: (1..=side as i32).collect(),
        }
    }

    /// A domain collapsed to a single value, as used for givens and assignments.
    pub fn singleton(value: i32) -> Self {
        Self {
            values: vec![value],
        }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.values.binary_search(&value).is_ok()
    }

    /// Removes `value` if present. Returns whether the domain changed.
    pub fn remove(&mut self, value: i32) -> bool {
        match self.values.binary_search(&value) {
            Ok(index) => {
                self.values.remove(index);
                true
            }
            Err(_) => false,
        }
    }

    /// The candidate values in ascending order.
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
