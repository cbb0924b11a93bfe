//! Per-session state: immutable snapshots and an injectable store.

pub mod state;
pub mod store;

pub use state::SketchState;
pub use store::{EvictionPolicy, InMemorySessionStore, SessionStore};
