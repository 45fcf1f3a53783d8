//! Field Initilization
//!
//! Utilities for common scalar field initilization.
//! Use `ScalarField::par_set_values` for custom needs.

use crate::block::*;
use crate::util::*;
use rand::prelude::*;
use rayon::prelude::*;

/// Uniform random values in `[0, max_val)` on every cell.
pub fn rand<const D: usize>(
    field: &mut ScalarField<D>,
    max_val: f64,
    chunk_size: usize,
) {
    field.par_modify_access(chunk_size).for_each(
        |mut chunk: FieldChunk<'_, D>| {
            let mut rng = rand::thread_rng();
            chunk.cell_iter_mut().for_each(|(_, cell)| {
                cell[0] = rng.gen::<f64>() * max_val;
            })
        },
    );
}

/// Gaussian bump centered in the field, all values are in [0, 1].
pub fn normal_ic<const D: usize>(field: &mut ScalarField<D>, chunk_size: usize) {
    let extent = field.bounding_box().exclusive_bounds();
    let width_f = extent[0] as f64;
    let sigma_sq: f64 = (width_f / 25.0) * (width_f / 25.0);
    let ic_gen = |coord: Coord<D>| {
        let mut r_sq = 0.0;
        for d in 0..D {
            let x = coord[d] as f64 - extent[d] as f64 / 2.0;
            r_sq += x * x;
        }
        (-r_sq / (2.0 * sigma_sq)).exp()
    };
    field.par_set_values(ic_gen, chunk_size);
}
