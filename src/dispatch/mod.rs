//! Entry points: run a functional now (`apply_*`) or register it with a
//! block to run after every time step (`integrate_*`).
//!
//! Before anything runs, the domain is restricted to the region of every
//! block the functional applies to. When nothing is left, the call does
//! nothing, except that reductive statistics are evaluated empty. A box
//! with inverted bounds is rejected before that.

mod integrate;

pub use integrate::*;

use crate::block::*;
use crate::error::DispatchViolation;
use crate::functional::*;
use crate::processor::*;
use crate::statistics::BlockStatistics;
use crate::surface::BlockSurface;
use crate::util::*;
use tracing::debug;

/// Restrict `generator` to every block's domain.
/// Returns false when the restriction is empty.
pub(crate) fn restrict_to_blocks<const D: usize>(
    generator: &mut dyn DataProcessorGenerator<D>,
    blocks: &[BlockRef<'_, D>],
) -> bool {
    let applies_to = generator.applies_to();
    for block in blocks {
        let block_domain = block.atomic().domain_for(applies_to);
        if !generator.extract(&block_domain) {
            debug!(
                "{} {} leaves nothing to process",
                block.kind(),
                block_domain
            );
            return false;
        }
    }
    true
}

/// Inverted bounds are a caller bug, not an empty domain.
#[track_caller]
pub(crate) fn check_domain<const D: usize>(domain: &AABB<D>) {
    assert!(domain.check_validity(), "inverted box bounds: {:?}", domain);
}

#[track_caller]
fn check_blocks<const D: usize>(blocks: &[BlockRef<'_, D>]) {
    if blocks.is_empty() {
        DispatchViolation::EmptyBlockList.raise();
    }
}

#[track_caller]
pub fn apply_processing_functional<const D: usize>(
    functional: Box<dyn BoxProcessingFunctional<D>>,
    domain: AABB<D>,
    blocks: Vec<BlockRef<'_, D>>,
) {
    check_blocks(&blocks);
    check_domain(&domain);
    debug!(%domain, n_blocks = blocks.len(), "apply box functional");
    let mut generator = BoxProcessorGenerator::new(functional, domain);
    if restrict_to_blocks(&mut generator, &blocks) {
        execute_data_processor(&generator, blocks);
    }
}

#[track_caller]
pub fn apply_dot_processing_functional<const D: usize>(
    functional: Box<dyn DotProcessingFunctional<D>>,
    dots: &DotList<D>,
    blocks: Vec<BlockRef<'_, D>>,
) {
    check_blocks(&blocks);
    debug!(n_dots = dots.n(), n_blocks = blocks.len(), "apply dot functional");
    let mut generator = DotProcessorGenerator::new(functional, dots.clone());
    if restrict_to_blocks(&mut generator, &blocks) {
        execute_data_processor(&generator, blocks);
    }
}

/// Runs a copy of `functional`, then stores the copy's statistics
/// in `functional`.
#[track_caller]
pub fn apply_reductive_processing_functional<const D: usize>(
    functional: &mut dyn ReductiveBoxProcessingFunctional<D>,
    domain: AABB<D>,
    blocks: Vec<BlockRef<'_, D>>,
) {
    check_blocks(&blocks);
    check_domain(&domain);
    debug!(%domain, n_blocks = blocks.len(), "apply reductive box functional");
    let mut generator =
        ReductiveBoxProcessorGenerator::new(functional.clone_functional(), domain);
    if restrict_to_blocks(&mut generator, &blocks) {
        execute_data_processor(&generator, blocks);
    } else {
        generator.shared_functional().borrow_mut().statistics_mut().evaluate();
    }
    *functional.statistics_mut() = generator.statistics();
}

#[track_caller]
pub fn apply_reductive_dot_processing_functional<const D: usize>(
    functional: &mut dyn ReductiveDotProcessingFunctional<D>,
    dots: &DotList<D>,
    blocks: Vec<BlockRef<'_, D>>,
) {
    check_blocks(&blocks);
    debug!(n_dots = dots.n(), n_blocks = blocks.len(), "apply reductive dot functional");
    let mut generator =
        ReductiveDotProcessorGenerator::new(functional.clone_functional(), dots.clone());
    if restrict_to_blocks(&mut generator, &blocks) {
        execute_data_processor(&generator, blocks);
    } else {
        generator.shared_functional().borrow_mut().statistics_mut().evaluate();
    }
    *functional.statistics_mut() = generator.statistics();
}

/// Generators for every non-empty region of `domain`, in decomposition
/// order.
fn bounded_generators<const D: usize>(
    functional: &dyn BoundedBoxProcessingFunctional<D>,
    domain: AABB<D>,
    boundary_width: i32,
) -> Vec<BoxProcessorGenerator<D>> {
    BlockSurface::new(domain, boundary_width)
        .decompose()
        .into_iter()
        .map(|(region, sub_domain)| {
            BoxProcessorGenerator::new(functional.region_processor(region), sub_domain)
        })
        .collect()
}

/// Decompose `domain` into bulk, faces, edges and corners and run each
/// sub-box through the matching region behaviour.
#[track_caller]
pub fn apply_bounded_processing_functional<const D: usize>(
    functional: Box<dyn BoundedBoxProcessingFunctional<D>>,
    domain: AABB<D>,
    mut blocks: Vec<BlockRef<'_, D>>,
    boundary_width: i32,
) {
    check_blocks(&blocks);
    check_domain(&domain);
    debug!(%domain, boundary_width, n_blocks = blocks.len(), "apply bounded functional");
    for mut generator in bounded_generators(functional.as_ref(), domain, boundary_width) {
        if restrict_to_blocks(&mut generator, &blocks) {
            execute_data_processor(
                &generator,
                blocks.iter_mut().map(|block| block.reborrow()).collect(),
            );
        }
    }
}

/// Like [`apply_bounded_processing_functional`], then combine the
/// statistics of every region into `functional`.
#[track_caller]
pub fn apply_bounded_reductive_processing_functional<const D: usize>(
    functional: &mut dyn BoundedReductiveBoxProcessingFunctional<D>,
    domain: AABB<D>,
    mut blocks: Vec<BlockRef<'_, D>>,
    boundary_width: i32,
) {
    check_blocks(&blocks);
    check_domain(&domain);
    debug!(
        %domain,
        boundary_width,
        n_blocks = blocks.len(),
        "apply bounded reductive functional"
    );
    let surface = BlockSurface::new(domain, boundary_width);
    let mut parts: Vec<BlockStatistics> = Vec::new();
    for (region, sub_domain) in surface.decompose() {
        let mut generator = ReductiveBoxProcessorGenerator::new(
            functional.region_processor(region),
            sub_domain,
        );
        if restrict_to_blocks(&mut generator, &blocks) {
            execute_data_processor(
                &generator,
                blocks.iter_mut().map(|block| block.reborrow()).collect(),
            );
        } else {
            generator.shared_functional().borrow_mut().statistics_mut().evaluate();
        }
        parts.push(generator.statistics());
    }
    functional.statistics_mut().combine(&parts);
}
