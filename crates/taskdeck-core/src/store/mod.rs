//! Store module: in-memory implementation of the TaskStore port.

mod memory;

pub use memory::InMemoryStore;
