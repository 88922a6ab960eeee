//! SQLite-backed core for the to-do service.
//!
//! # Overview
//! One domain type, one store, one error. The HTTP layer lives in the
//! server crate; this crate never touches the network.
//!
//! # Design
//! - `ItemStore` owns its connection and is passed in explicitly — opened at
//!   startup, dropped at shutdown — rather than resolved through any global
//!   lookup.
//! - Every statement binds caller-supplied values as parameters.
//! - Failures propagate as `StoreError`; only `get` treats absence as a
//!   normal outcome (`Option`).

pub mod error;
pub mod item;
pub mod store;

pub use error::StoreError;
pub use item::Item;
pub use store::{ItemStore, SEED_TASKS};
