use super::{bounded_generators, check_domain, restrict_to_blocks};
use crate::block::*;
use crate::functional::*;
use crate::processor::*;
use crate::util::*;
use tracing::debug;

/// Register `functional` with `block`, to run each time the block
/// executes its internal processors. Nothing runs now.
///
/// Reductive functionals cannot be integrated: their statistics would
/// only ever describe the last step.
#[track_caller]
pub fn integrate_processing_functional<const D: usize>(
    functional: Box<dyn BoxProcessingFunctional<D>>,
    domain: AABB<D>,
    block: &mut dyn Block<D>,
    level: i32,
) {
    check_domain(&domain);
    let generator = BoxProcessorGenerator::new(functional, domain);
    register(Box::new(generator), block, level);
}

pub fn integrate_dot_processing_functional<const D: usize>(
    functional: Box<dyn DotProcessingFunctional<D>>,
    dots: &DotList<D>,
    block: &mut dyn Block<D>,
    level: i32,
) {
    let generator = DotProcessorGenerator::new(functional, dots.clone());
    register(Box::new(generator), block, level);
}

/// Register one processor per region of `domain`.
#[track_caller]
pub fn integrate_bounded_processing_functional<const D: usize>(
    functional: Box<dyn BoundedBoxProcessingFunctional<D>>,
    domain: AABB<D>,
    block: &mut dyn Block<D>,
    boundary_width: i32,
    level: i32,
) {
    check_domain(&domain);
    for generator in bounded_generators(functional.as_ref(), domain, boundary_width) {
        register(Box::new(generator), block, level);
    }
}

fn register<const D: usize>(
    mut generator: Box<dyn DataProcessorGenerator<D>>,
    block: &mut dyn Block<D>,
    level: i32,
) {
    if !restrict_to_blocks(generator.as_mut(), &[block.block_ref()]) {
        return;
    }
    debug!(
        kind = %block.kind(),
        level,
        domain = ?generator.processing_domain(),
        "integrate processor"
    );
    block.add_internal_processor(generator, level);
}

pub fn integrate_processing_functional_l<const D: usize, F: BoxProcessingFunctionalL<D>>(
    functional: F,
    domain: AABB<D>,
    lattice: &mut BlockLattice<D>,
    level: i32,
) {
    integrate_processing_functional(Box::new(TypedBoxL(functional)), domain, lattice, level);
}

pub fn integrate_processing_functional_s<const D: usize, F: BoxProcessingFunctionalS<D>>(
    functional: F,
    domain: AABB<D>,
    field: &mut ScalarField<D>,
    level: i32,
) {
    integrate_processing_functional(Box::new(TypedBoxS(functional)), domain, field, level);
}

pub fn integrate_processing_functional_t<const D: usize, F: BoxProcessingFunctionalT<D>>(
    functional: F,
    domain: AABB<D>,
    field: &mut TensorField<D>,
    level: i32,
) {
    integrate_processing_functional(Box::new(TypedBoxT(functional)), domain, field, level);
}

pub fn integrate_dot_processing_functional_l<
    const D: usize,
    F: DotProcessingFunctionalL<D>,
>(
    functional: F,
    dots: &DotList<D>,
    lattice: &mut BlockLattice<D>,
    level: i32,
) {
    integrate_dot_processing_functional(Box::new(TypedDotL(functional)), dots, lattice, level);
}

pub fn integrate_dot_processing_functional_s<
    const D: usize,
    F: DotProcessingFunctionalS<D>,
>(
    functional: F,
    dots: &DotList<D>,
    field: &mut ScalarField<D>,
    level: i32,
) {
    integrate_dot_processing_functional(Box::new(TypedDotS(functional)), dots, field, level);
}

pub fn integrate_bounded_processing_functional_l<
    const D: usize,
    F: BoundedBoxProcessingFunctionalL<D>,
>(
    functional: F,
    domain: AABB<D>,
    lattice: &mut BlockLattice<D>,
    boundary_width: i32,
    level: i32,
) {
    integrate_bounded_processing_functional(
        Box::new(TypedBoundedL(functional)),
        domain,
        lattice,
        boundary_width,
        level,
    );
}

pub fn integrate_bounded_processing_functional_s<
    const D: usize,
    F: BoundedBoxProcessingFunctionalS<D>,
>(
    functional: F,
    domain: AABB<D>,
    field: &mut ScalarField<D>,
    boundary_width: i32,
    level: i32,
) {
    integrate_bounded_processing_functional(
        Box::new(TypedBoundedS(functional)),
        domain,
        field,
        boundary_width,
        level,
    );
}

/// Bounded lattice functional with the boundary width of the lattice's
/// velocity set.
#[track_caller]
pub fn apply_bounded_lattice_functional<
    const D: usize,
    F: BoundedBoxProcessingFunctionalL<D>,
>(
    functional: F,
    domain: AABB<D>,
    lattice: &mut BlockLattice<D>,
) {
    let boundary_width = lattice.boundary_width();
    apply_bounded_processing_functional_l(functional, domain, lattice, boundary_width);
}

pub fn integrate_bounded_lattice_functional<
    const D: usize,
    F: BoundedBoxProcessingFunctionalL<D>,
>(
    functional: F,
    domain: AABB<D>,
    lattice: &mut BlockLattice<D>,
    level: i32,
) {
    let boundary_width = lattice.boundary_width();
    integrate_bounded_processing_functional_l(functional, domain, lattice, boundary_width, level);
}
