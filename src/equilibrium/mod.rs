pub mod equilibrium;
pub mod payoff;
pub mod program;
pub mod simplex;

pub use equilibrium::*;
pub use payoff::*;
pub use program::*;
