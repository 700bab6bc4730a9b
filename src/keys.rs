use crate::types::NodeKey;
use uuid::Uuid;

/// Source of per-render node keys.
pub trait KeyGen {
    fn next_key(&mut self) -> NodeKey;
}

/// Random v4 UUIDs. Default for interactive rendering.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidKeys;

impl KeyGen for UuidKeys {
    fn next_key(&mut self) -> NodeKey {
        NodeKey(Uuid::new_v4().to_string())
    }
}

/// Incrementing counter with a prefix. Deterministic, used for JSON output and tests.
#[derive(Debug, Clone)]
pub struct SequentialKeys {
    prefix: String,
    next: u64,
}

impl SequentialKeys {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl Default for SequentialKeys {
    fn default() -> Self {
        Self::new("node")
    }
}

impl KeyGen for SequentialKeys {
    fn next_key(&mut self) -> NodeKey {
        let key = NodeKey(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        key
    }
}
