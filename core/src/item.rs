//! Domain type for the to-do service.
//!
//! # Design
//! `Item` is the single row shape: store-assigned integer id, free-text
//! description, completion flag. Field declaration order is the wire order —
//! serde's derived projection emits `id`, `description`, `done` — so the
//! struct itself is the JSON contract.

use serde::{Deserialize, Serialize};

/// A single to-do entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub description: String,
    pub done: bool,
}
