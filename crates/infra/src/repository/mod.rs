//! Product storage adapters.

pub mod in_memory;

pub use in_memory::InMemoryProductRepository;
