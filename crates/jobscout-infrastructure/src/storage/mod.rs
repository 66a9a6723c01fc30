//! Storage layer: atomic files and the durable key/value store built on them.

mod atomic_file;
mod durable;
mod memory;

pub use atomic_file::{AtomicFile, AtomicFileError};
pub use durable::{DurableStorage, FileDurableStorage};
pub use memory::InMemoryStorage;
