//! Library functionals built on the dispatch framework: initialisers,
//! a velocity boundary, field extraction and reductions.

mod boundary;
mod extract;
mod initializers;
mod reductions;

pub use boundary::*;
pub use extract::*;
pub use initializers::*;
pub use reductions::*;
