//! Generators and the processors they produce.
//!
//! A generator pairs a functional with a domain and knows nothing about
//! blocks. Once the concrete block list is known, `generate` binds the
//! three together into a processor that runs exactly once.

mod box_generator;
mod dot_generator;
mod reductive;

pub use box_generator::*;
pub use dot_generator::*;
pub use reductive::*;

use crate::block::*;
use crate::error::DispatchViolation;
use crate::util::*;
use tracing::trace;

/// A functional bound to its domain and blocks.
pub trait DataProcessor {
    fn process(&mut self);
}

/// Where a generator operates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ProcessingDomain<'a, const D: usize> {
    Box(AABB<D>),
    Dots(&'a DotList<D>),
}

pub trait DataProcessorGenerator<const D: usize> {
    /// Bind to the given blocks. The list length must match what the
    /// wrapped functional expects, which the functional checks itself.
    fn generate<'a>(
        &self,
        blocks: Vec<BlockRef<'a, D>>,
    ) -> Box<dyn DataProcessor + 'a>;

    fn clone_generator(&self) -> Box<dyn DataProcessorGenerator<D>>;

    fn processing_domain(&self) -> ProcessingDomain<'_, D>;

    /// Restrict the domain to `sub_domain`.
    /// Returns false when nothing is left to process.
    fn extract(&mut self, sub_domain: &AABB<D>) -> bool;

    fn shift(&mut self, delta: &Coord<D>);

    fn applies_to(&self) -> BlockDomain;

    fn rescale(&mut self, dx_scale: f64, dt_scale: f64);

    /// One flag per block argument, true when that block is written.
    fn modification_pattern(&self, is_written: &mut [bool]);
}

impl<const D: usize> Clone for Box<dyn DataProcessorGenerator<D>> {
    fn clone(&self) -> Self {
        self.clone_generator()
    }
}

/// Build a processor from `generator` and run it against `blocks`.
///
/// Blocks reported as written by the modification pattern have their
/// revision bumped before the processor runs.
#[track_caller]
pub fn execute_data_processor<const D: usize>(
    generator: &dyn DataProcessorGenerator<D>,
    mut blocks: Vec<BlockRef<'_, D>>,
) {
    if blocks.is_empty() {
        DispatchViolation::EmptyBlockList.raise();
    }
    let mut is_written = vec![false; blocks.len()];
    generator.modification_pattern(&mut is_written);
    for (block, written) in blocks.iter_mut().zip(&is_written) {
        if *written {
            block.atomic_mut().mark_written();
        }
    }
    trace!(
        n_blocks = blocks.len(),
        domain = ?generator.processing_domain(),
        "executing data processor"
    );
    generator.generate(blocks).process();
}
