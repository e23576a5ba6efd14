use serde::{Deserialize, Serialize};

use crate::model::common::ElectionId;

/// A counter object used to implement auto-increment IDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counter {
    next: ElectionId,
}

impl Counter {
    /// Create a new `Counter` starting at the given value.
    pub fn new(start: ElectionId) -> Self {
        Self { next: start }
    }

    /// Retrieve the next value of the counter, advancing it.
    pub fn next(&mut self) -> ElectionId {
        let value = self.next;
        self.next += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_increment() {
        const START: ElectionId = 5;

        let mut counter = Counter::new(START);
        assert_eq!(counter.next(), START);
        assert_eq!(counter.next(), START + 1);
        assert_eq!(counter.next(), START + 2);
    }
}
