//! Editor adapters.
mod memory;

pub use memory::InMemoryEditor;
