pub mod pet;

pub use pet::*;
