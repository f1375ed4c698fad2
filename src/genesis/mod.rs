pub mod document;
pub mod source;

pub use document::{flatten, Flatten, GenesisDocument};
pub use source::{GenesisLoader, GenesisSource};
