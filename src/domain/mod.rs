//! Domain model: task bodies and the entity store.

pub mod store;
pub mod task;
