pub mod catalog;
pub mod hero;

pub use catalog::*;
pub use hero::*;
