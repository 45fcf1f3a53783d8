pub use nalgebra::{matrix, vector};
pub use num_traits::{One, Zero};

mod aabb;
mod dot_list;
pub mod indexing;

pub use aabb::*;
pub use dot_list::*;

/// Integer grid coordinate.
pub type Coord<const DIMENSION: usize> =
    nalgebra::SVector<i32, { DIMENSION }>;

/// Per axis inclusive `[min, max]` pairs, one row per dimension.
pub type Bounds<const DIMENSION: usize> =
    nalgebra::SMatrix<i32, { DIMENSION }, 2>;

/// Macroscopic fluid velocity.
pub type Velocity<const DIMENSION: usize> =
    nalgebra::SVector<f64, { DIMENSION }>;
