//! Processing functionals: the operators the dispatcher applies.
//!
//! The generic traits in this module see blocks as a list of
//! [`BlockRef`] handles. User code normally implements one of the typed
//! traits instead (`BoxProcessingFunctionalLS` and friends), whose adapters
//! check the list length and cast each handle to the expected kind before
//! calling the typed `process`.
//!
//! Suffix letters name the block arguments in order: `L` lattice,
//! `S` scalar field, `T` tensor field, `N` any number of the preceding kind.

#[macro_use]
mod macros;
mod bounded;
mod typed_bounded;
mod typed_box;
mod typed_dot;
mod typed_reductive;

pub use bounded::*;
pub use typed_bounded::*;
pub use typed_box::*;
pub use typed_dot::*;
pub use typed_reductive::*;

use crate::block::*;
use crate::statistics::BlockStatistics;
use crate::util::*;

/// Operator over a box of one or more blocks.
pub trait BoxProcessingFunctional<const D: usize> {
    fn process_generic_blocks(
        &mut self,
        domain: AABB<D>,
        blocks: &mut [BlockRef<'_, D>],
    );

    fn clone_functional(&self) -> Box<dyn BoxProcessingFunctional<D>>;

    fn applies_to(&self) -> BlockDomain {
        BlockDomain::Bulk
    }

    fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

    /// Assumes every block is written unless overridden.
    fn modification_pattern(&self, is_written: &mut [bool]) {
        is_written.fill(true);
    }
}

/// Operator over a list of dots.
pub trait DotProcessingFunctional<const D: usize> {
    fn process_generic_blocks(
        &mut self,
        dots: &DotList<D>,
        blocks: &mut [BlockRef<'_, D>],
    );

    fn clone_functional(&self) -> Box<dyn DotProcessingFunctional<D>>;

    fn applies_to(&self) -> BlockDomain {
        BlockDomain::Bulk
    }

    fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

    fn modification_pattern(&self, is_written: &mut [bool]) {
        is_written.fill(true);
    }
}

/// Box operator owning a statistics accumulator.
///
/// The processor evaluates the statistics after each run, so
/// `process_generic_blocks` only gathers.
pub trait ReductiveBoxProcessingFunctional<const D: usize> {
    fn process_generic_blocks(
        &mut self,
        domain: AABB<D>,
        blocks: &mut [BlockRef<'_, D>],
    );

    fn clone_functional(&self) -> Box<dyn ReductiveBoxProcessingFunctional<D>>;

    fn statistics(&self) -> &BlockStatistics;

    fn statistics_mut(&mut self) -> &mut BlockStatistics;

    fn applies_to(&self) -> BlockDomain {
        BlockDomain::Bulk
    }

    fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

    /// Reductions only read unless overridden.
    fn modification_pattern(&self, is_written: &mut [bool]) {
        is_written.fill(false);
    }
}

pub trait ReductiveDotProcessingFunctional<const D: usize> {
    fn process_generic_blocks(
        &mut self,
        dots: &DotList<D>,
        blocks: &mut [BlockRef<'_, D>],
    );

    fn clone_functional(&self) -> Box<dyn ReductiveDotProcessingFunctional<D>>;

    fn statistics(&self) -> &BlockStatistics;

    fn statistics_mut(&mut self) -> &mut BlockStatistics;

    fn applies_to(&self) -> BlockDomain {
        BlockDomain::Bulk
    }

    fn rescale(&mut self, _dx_scale: f64, _dt_scale: f64) {}

    fn modification_pattern(&self, is_written: &mut [bool]) {
        is_written.fill(false);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[derive(Clone)]
    struct Touch;

    impl BoxProcessingFunctional<2> for Touch {
        fn process_generic_blocks(&mut self, _: AABB<2>, _: &mut [BlockRef<'_, 2>]) {}

        fn clone_functional(&self) -> Box<dyn BoxProcessingFunctional<2>> {
            Box::new(self.clone())
        }
    }

    #[derive(Clone)]
    struct Look(BlockStatistics);

    impl ReductiveBoxProcessingFunctional<2> for Look {
        fn process_generic_blocks(&mut self, _: AABB<2>, _: &mut [BlockRef<'_, 2>]) {}

        fn clone_functional(&self) -> Box<dyn ReductiveBoxProcessingFunctional<2>> {
            Box::new(self.clone())
        }

        fn statistics(&self) -> &BlockStatistics {
            &self.0
        }

        fn statistics_mut(&mut self) -> &mut BlockStatistics {
            &mut self.0
        }
    }

    #[test]
    fn default_modification_pattern_test() {
        let mut is_written = [false; 3];
        Touch.modification_pattern(&mut is_written);
        assert_eq!(is_written, [true; 3]);

        let mut is_written = [true; 3];
        Look(BlockStatistics::new()).modification_pattern(&mut is_written);
        assert_eq!(is_written, [false; 3]);

        assert_eq!(Touch.applies_to(), BlockDomain::Bulk);
    }
}
