use crate::block::*;
use crate::functional::{ReductiveBoxProcessingFunctional, ReductiveDotProcessingFunctional};
use crate::processor::*;
use crate::statistics::BlockStatistics;
use crate::util::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Functional held by a reductive generator and every processor it
/// produced. Gathering through a processor is visible through the
/// generator afterwards.
pub type SharedReductiveBox<const D: usize> =
    Rc<RefCell<Box<dyn ReductiveBoxProcessingFunctional<D>>>>;

pub type SharedReductiveDot<const D: usize> =
    Rc<RefCell<Box<dyn ReductiveDotProcessingFunctional<D>>>>;

/// Reductive generator over a box.
///
/// `generate` shares the functional instead of cloning it. Cloning the
/// generator itself is still a deep copy with its own statistics.
pub struct ReductiveBoxProcessorGenerator<const D: usize> {
    functional: SharedReductiveBox<D>,
    domain: AABB<D>,
}

impl<const D: usize> ReductiveBoxProcessorGenerator<D> {
    pub fn new(
        functional: Box<dyn ReductiveBoxProcessingFunctional<D>>,
        domain: AABB<D>,
    ) -> Self {
        ReductiveBoxProcessorGenerator {
            functional: Rc::new(RefCell::new(functional)),
            domain,
        }
    }

    pub fn domain(&self) -> AABB<D> {
        self.domain
    }

    pub fn shared_functional(&self) -> &SharedReductiveBox<D> {
        &self.functional
    }

    /// Copy of the statistics as last evaluated.
    pub fn statistics(&self) -> BlockStatistics {
        self.functional.borrow().statistics().clone()
    }

    /// Concrete form of `generate`, for callers that keep the processor.
    pub fn generate_reductive<'a>(
        &self,
        blocks: Vec<BlockRef<'a, D>>,
    ) -> ReductiveBoxProcessor<'a, D> {
        ReductiveBoxProcessor {
            functional: Rc::clone(&self.functional),
            domain: self.domain,
            blocks,
        }
    }
}

impl<const D: usize> Clone for ReductiveBoxProcessorGenerator<D> {
    fn clone(&self) -> Self {
        ReductiveBoxProcessorGenerator {
            functional: Rc::new(RefCell::new(
                self.functional.borrow().clone_functional(),
            )),
            domain: self.domain,
        }
    }
}

impl<const D: usize> DataProcessorGenerator<D>
    for ReductiveBoxProcessorGenerator<D>
{
    fn generate<'a>(
        &self,
        blocks: Vec<BlockRef<'a, D>>,
    ) -> Box<dyn DataProcessor + 'a> {
        Box::new(self.generate_reductive(blocks))
    }

    fn clone_generator(&self) -> Box<dyn DataProcessorGenerator<D>> {
        Box::new(self.clone())
    }

    fn processing_domain(&self) -> ProcessingDomain<'_, D> {
        ProcessingDomain::Box(self.domain)
    }

    fn extract(&mut self, sub_domain: &AABB<D>) -> bool {
        match self.domain.intersection(sub_domain) {
            Some(domain) => {
                self.domain = domain;
                true
            }
            None => false,
        }
    }

    fn shift(&mut self, delta: &Coord<D>) {
        self.domain = self.domain.shift(delta);
    }

    fn applies_to(&self) -> BlockDomain {
        self.functional.borrow().applies_to()
    }

    fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
        self.functional.borrow_mut().rescale(dx_scale, dt_scale);
    }

    fn modification_pattern(&self, is_written: &mut [bool]) {
        self.functional.borrow().modification_pattern(is_written);
    }
}

pub struct ReductiveBoxProcessor<'a, const D: usize> {
    functional: SharedReductiveBox<D>,
    domain: AABB<D>,
    blocks: Vec<BlockRef<'a, D>>,
}

impl<const D: usize> ReductiveBoxProcessor<'_, D> {
    pub fn shared_functional(&self) -> &SharedReductiveBox<D> {
        &self.functional
    }
}

impl<const D: usize> DataProcessor for ReductiveBoxProcessor<'_, D> {
    fn process(&mut self) {
        profiling::scope!("ReductiveBoxProcessor::process");
        let mut functional = self.functional.borrow_mut();
        functional.process_generic_blocks(self.domain, &mut self.blocks);
        functional.statistics_mut().evaluate();
    }
}

/// Reductive generator over a list of dots, sharing like
/// [`ReductiveBoxProcessorGenerator`].
pub struct ReductiveDotProcessorGenerator<const D: usize> {
    functional: SharedReductiveDot<D>,
    dots: DotList<D>,
}

impl<const D: usize> ReductiveDotProcessorGenerator<D> {
    pub fn new(
        functional: Box<dyn ReductiveDotProcessingFunctional<D>>,
        dots: DotList<D>,
    ) -> Self {
        ReductiveDotProcessorGenerator {
            functional: Rc::new(RefCell::new(functional)),
            dots,
        }
    }

    pub fn dots(&self) -> &DotList<D> {
        &self.dots
    }

    pub fn shared_functional(&self) -> &SharedReductiveDot<D> {
        &self.functional
    }

    pub fn statistics(&self) -> BlockStatistics {
        self.functional.borrow().statistics().clone()
    }

    pub fn generate_reductive<'a>(
        &self,
        blocks: Vec<BlockRef<'a, D>>,
    ) -> ReductiveDotProcessor<'a, D> {
        ReductiveDotProcessor {
            functional: Rc::clone(&self.functional),
            dots: self.dots.clone(),
            blocks,
        }
    }
}

impl<const D: usize> Clone for ReductiveDotProcessorGenerator<D> {
    fn clone(&self) -> Self {
        ReductiveDotProcessorGenerator {
            functional: Rc::new(RefCell::new(
                self.functional.borrow().clone_functional(),
            )),
            dots: self.dots.clone(),
        }
    }
}

impl<const D: usize> DataProcessorGenerator<D>
    for ReductiveDotProcessorGenerator<D>
{
    fn generate<'a>(
        &self,
        blocks: Vec<BlockRef<'a, D>>,
    ) -> Box<dyn DataProcessor + 'a> {
        Box::new(self.generate_reductive(blocks))
    }

    fn clone_generator(&self) -> Box<dyn DataProcessorGenerator<D>> {
        Box::new(self.clone())
    }

    fn processing_domain(&self) -> ProcessingDomain<'_, D> {
        ProcessingDomain::Dots(&self.dots)
    }

    fn extract(&mut self, sub_domain: &AABB<D>) -> bool {
        self.dots = self.dots.restricted_to(sub_domain);
        !self.dots.is_empty()
    }

    fn shift(&mut self, delta: &Coord<D>) {
        self.dots = self.dots.shift(delta);
    }

    fn applies_to(&self) -> BlockDomain {
        self.functional.borrow().applies_to()
    }

    fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
        self.functional.borrow_mut().rescale(dx_scale, dt_scale);
    }

    fn modification_pattern(&self, is_written: &mut [bool]) {
        self.functional.borrow().modification_pattern(is_written);
    }
}

pub struct ReductiveDotProcessor<'a, const D: usize> {
    functional: SharedReductiveDot<D>,
    dots: DotList<D>,
    blocks: Vec<BlockRef<'a, D>>,
}

impl<const D: usize> ReductiveDotProcessor<'_, D> {
    pub fn shared_functional(&self) -> &SharedReductiveDot<D> {
        &self.functional
    }
}

impl<const D: usize> DataProcessor for ReductiveDotProcessor<'_, D> {
    fn process(&mut self) {
        profiling::scope!("ReductiveDotProcessor::process");
        let mut functional = self.functional.borrow_mut();
        functional.process_generic_blocks(&self.dots, &mut self.blocks);
        functional.statistics_mut().evaluate();
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Counts visited cells and sums the field over them.
    #[derive(Clone)]
    struct CellCount {
        statistics: BlockStatistics,
        count: usize,
        sum: usize,
    }

    impl CellCount {
        fn new() -> Self {
            let mut statistics = BlockStatistics::new();
            let count = statistics.subscribe_int_sum();
            let sum = statistics.subscribe_sum();
            CellCount {
                statistics,
                count,
                sum,
            }
        }
    }

    impl ReductiveBoxProcessingFunctional<2> for CellCount {
        fn process_generic_blocks(
            &mut self,
            domain: AABB<2>,
            blocks: &mut [BlockRef<'_, 2>],
        ) {
            let field = blocks[0].scalar_field();
            for c in domain.coord_iter() {
                self.statistics.gather_int_sum(self.count, 1);
                self.statistics.gather_sum(self.sum, field.get(&c));
            }
        }

        fn clone_functional(&self) -> Box<dyn ReductiveBoxProcessingFunctional<2>> {
            Box::new(self.clone())
        }

        fn statistics(&self) -> &BlockStatistics {
            &self.statistics
        }

        fn statistics_mut(&mut self) -> &mut BlockStatistics {
            &mut self.statistics
        }
    }

    #[test]
    fn shared_functional_test() {
        let mut field = ScalarField::new(vector![4, 4]);
        field.fill(2.0);
        let generator = ReductiveBoxProcessorGenerator::new(
            Box::new(CellCount::new()),
            AABB::new(matrix![0, 1; 0, 2]),
        );
        let mut processor = generator.generate_reductive(vec![field.block_ref()]);
        assert!(Rc::ptr_eq(
            generator.shared_functional(),
            processor.shared_functional()
        ));
        processor.process();
        drop(processor);

        let statistics = generator.statistics();
        assert_eq!(statistics.int_sum(0), 6);
        assert_eq!(statistics.sum(0), 12.0);
    }

    #[test]
    fn deep_clone_test() {
        let mut field = ScalarField::new(vector![4, 4]);
        let generator = ReductiveBoxProcessorGenerator::new(
            Box::new(CellCount::new()),
            AABB::new(matrix![0, 3; 0, 3]),
        );
        let copy = generator.clone();
        assert!(!Rc::ptr_eq(
            generator.shared_functional(),
            copy.shared_functional()
        ));
        execute_data_processor(&copy, vec![field.block_ref()]);
        assert_eq!(copy.statistics().int_sum(0), 16);
        assert_eq!(generator.statistics().int_sum(0), 0);
        // Reductions do not write.
        assert_eq!(field.atomic().revision(), 0);
    }
}
