use crate::block::*;
use crate::functional::BoxProcessingFunctional;
use crate::processor::*;
use crate::util::*;

/// Plain generator over a box. Every processor gets its own copy of the
/// functional, so generators and processors never share state.
pub struct BoxProcessorGenerator<const D: usize> {
    functional: Box<dyn BoxProcessingFunctional<D>>,
    domain: AABB<D>,
}

impl<const D: usize> BoxProcessorGenerator<D> {
    pub fn new(
        functional: Box<dyn BoxProcessingFunctional<D>>,
        domain: AABB<D>,
    ) -> Self {
        BoxProcessorGenerator { functional, domain }
    }

    pub fn domain(&self) -> AABB<D> {
        self.domain
    }

    pub fn functional(&self) -> &dyn BoxProcessingFunctional<D> {
        self.functional.as_ref()
    }

    pub fn functional_mut(&mut self) -> &mut dyn BoxProcessingFunctional<D> {
        self.functional.as_mut()
    }

    /// Hand the functional back, dropping the generator.
    pub fn release(self) -> Box<dyn BoxProcessingFunctional<D>> {
        self.functional
    }
}

impl<const D: usize> Clone for BoxProcessorGenerator<D> {
    fn clone(&self) -> Self {
        BoxProcessorGenerator {
            functional: self.functional.clone_functional(),
            domain: self.domain,
        }
    }
}

impl<const D: usize> DataProcessorGenerator<D> for BoxProcessorGenerator<D> {
    fn generate<'a>(
        &self,
        blocks: Vec<BlockRef<'a, D>>,
    ) -> Box<dyn DataProcessor + 'a> {
        Box::new(BoxProcessor {
            functional: self.functional.clone_functional(),
            domain: self.domain,
            blocks,
        })
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
        self.functional.applies_to()
    }

    fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
        self.functional.rescale(dx_scale, dt_scale);
    }

    fn modification_pattern(&self, is_written: &mut [bool]) {
        self.functional.modification_pattern(is_written);
    }
}

pub struct BoxProcessor<'a, const D: usize> {
    functional: Box<dyn BoxProcessingFunctional<D>>,
    domain: AABB<D>,
    blocks: Vec<BlockRef<'a, D>>,
}

impl<const D: usize> DataProcessor for BoxProcessor<'_, D> {
    fn process(&mut self) {
        profiling::scope!("BoxProcessor::process");
        self.functional
            .process_generic_blocks(self.domain, &mut self.blocks);
    }
}
