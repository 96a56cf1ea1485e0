//! Deterministic ID source for tests.

use crate::ticket::IdGenerator;

/// Hands out a fixed list of IDs in order, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedIdGenerator {
    ids: Vec<String>,
    next: usize,
    drawn: usize,
}

impl ScriptedIdGenerator {
    /// Creates a generator cycling through `ids`.
    ///
    /// # Panics
    ///
    /// Panics if `ids` is empty.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids: Vec<String> = ids.into_iter().map(Into::into).collect();
        assert!(!ids.is_empty(), "ScriptedIdGenerator needs at least one ID");
        Self {
            ids,
            next: 0,
            drawn: 0,
        }
    }

    /// How many IDs have been handed out so far.
    pub fn drawn(&self) -> usize {
        self.drawn
    }
}

impl IdGenerator for ScriptedIdGenerator {
    fn next_id(&mut self) -> String {
        let id = self.ids[self.next].clone();
        self.next = (self.next + 1) % self.ids.len();
        self.drawn += 1;
        id
    }
}
