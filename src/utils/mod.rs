pub mod loader;
pub mod serialization;
