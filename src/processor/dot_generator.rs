use crate::block::*;
use crate::functional::DotProcessingFunctional;
use crate::processor::*;
use crate::util::*;

/// Plain generator over a list of dots.
pub struct DotProcessorGenerator<const D: usize> {
    functional: Box<dyn DotProcessingFunctional<D>>,
    dots: DotList<D>,
}

impl<const D: usize> DotProcessorGenerator<D> {
    pub fn new(
        functional: Box<dyn DotProcessingFunctional<D>>,
        dots: DotList<D>,
    ) -> Self {
        DotProcessorGenerator { functional, dots }
    }

    pub fn dots(&self) -> &DotList<D> {
        &self.dots
    }

    pub fn functional(&self) -> &dyn DotProcessingFunctional<D> {
        self.functional.as_ref()
    }

    pub fn functional_mut(&mut self) -> &mut dyn DotProcessingFunctional<D> {
        self.functional.as_mut()
    }
}

impl<const D: usize> Clone for DotProcessorGenerator<D> {
    fn clone(&self) -> Self {
        DotProcessorGenerator {
            functional: self.functional.clone_functional(),
            dots: self.dots.clone(),
        }
    }
}

impl<const D: usize> DataProcessorGenerator<D> for DotProcessorGenerator<D> {
    fn generate<'a>(
        &self,
        blocks: Vec<BlockRef<'a, D>>,
    ) -> Box<dyn DataProcessor + 'a> {
        Box::new(DotProcessor {
            functional: self.functional.clone_functional(),
            dots: self.dots.clone(),
            blocks,
        })
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
        self.functional.applies_to()
    }

    fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
        self.functional.rescale(dx_scale, dt_scale);
    }

    fn modification_pattern(&self, is_written: &mut [bool]) {
        self.functional.modification_pattern(is_written);
    }
}

pub struct DotProcessor<'a, const D: usize> {
    functional: Box<dyn DotProcessingFunctional<D>>,
    dots: DotList<D>,
    blocks: Vec<BlockRef<'a, D>>,
}

impl<const D: usize> DataProcessor for DotProcessor<'_, D> {
    fn process(&mut self) {
        profiling::scope!("DotProcessor::process");
        self.functional
            .process_generic_blocks(&self.dots, &mut self.blocks);
    }
}
