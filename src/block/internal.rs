use crate::processor::DataProcessorGenerator;
use std::collections::BTreeMap;

/// Generators a block runs on itself after each time step,
/// grouped by level and executed lowest level first.
/// Within a level, registration order is kept.
#[derive(Clone, Default)]
pub struct InternalProcessors<const D: usize> {
    levels: BTreeMap<i32, Vec<Box<dyn DataProcessorGenerator<D>>>>,
}

impl<const D: usize> InternalProcessors<D> {
    pub fn add(&mut self, generator: Box<dyn DataProcessorGenerator<D>>, level: i32) {
        self.levels.entry(level).or_default().push(generator);
    }

    pub fn len(&self) -> usize {
        self.levels.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every generator in execution order.
    pub fn generators(&self) -> impl Iterator<Item = &dyn DataProcessorGenerator<D>> + '_ {
        self.iter().map(|(_, generator)| generator)
    }

    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (i32, &dyn DataProcessorGenerator<D>)> + '_ {
        self.levels.iter().flat_map(|(level, generators)| {
            generators.iter().map(move |g| (*level, g.as_ref()))
        })
    }

    /// Forward a unit change to every generator.
    pub fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
        for generator in self.levels.values_mut().flatten() {
            generator.rescale(dx_scale, dt_scale);
        }
    }

    /// Move every generator of `other` after the ones already held.
    pub fn append(&mut self, other: InternalProcessors<D>) {
        for (level, mut generators) in other.levels {
            self.levels.entry(level).or_default().append(&mut generators);
        }
    }

    pub fn clear(&mut self) {
        self.levels.clear();
    }
}
