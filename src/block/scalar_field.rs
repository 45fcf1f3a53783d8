use crate::block::*;
use crate::util::*;
use rayon::prelude::*;

/// One `f64` per cell.
pub struct ScalarField<const D: usize> {
    atomic: AtomicBlock<D>,
    buffer: Vec<f64>,
}

impl<const D: usize> ScalarField<D> {
    /// Zero filled field of the given shape.
    #[track_caller]
    pub fn new(shape: Coord<D>) -> Self {
        let atomic = AtomicBlock::new(shape);
        let buffer = vec![0.0; atomic.bounding_box().n_cells()];
        ScalarField { atomic, buffer }
    }

    pub fn with_envelope(mut self, envelope_width: i32) -> Self {
        self.atomic.set_envelope_width(envelope_width);
        self
    }

    pub fn with_location(mut self, location: Coord<D>) -> Self {
        self.atomic.set_location(location);
        self
    }

    #[track_caller]
    pub fn get(&self, coord: &Coord<D>) -> f64 {
        self.buffer[self.index(coord)]
    }

    #[track_caller]
    pub fn get_mut(&mut self, coord: &Coord<D>) -> &mut f64 {
        let index = self.index(coord);
        &mut self.buffer[index]
    }

    #[track_caller]
    pub fn set(&mut self, coord: &Coord<D>, value: f64) {
        *self.get_mut(coord) = value;
    }

    pub fn data(&self) -> &[f64] {
        &self.buffer
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    pub fn fill(&mut self, value: f64) {
        self.buffer.fill(value);
    }

    pub fn par_modify_access(
        &mut self,
        chunk_size: usize,
    ) -> impl ParallelIterator<Item = FieldChunk<'_, D>> {
        par_cell_chunks(
            &mut self.buffer,
            self.atomic.bounding_box_ref(),
            1,
            chunk_size,
        )
    }

    /// Set every cell, bulk and envelope, to `f(coord)`.
    pub fn par_set_values<F: Fn(Coord<D>) -> f64 + Send + Sync>(
        &mut self,
        f: F,
        chunk_size: usize,
    ) {
        self.par_modify_access(chunk_size).for_each(
            |mut chunk: FieldChunk<'_, D>| {
                chunk.cell_iter_mut().for_each(|(coord, cell)| {
                    cell[0] = f(coord);
                })
            },
        );
    }

    #[track_caller]
    fn index(&self, coord: &Coord<D>) -> usize {
        let aabb = self.atomic.bounding_box();
        debug_assert!(
            aabb.contains(coord),
            "{} does not contain {:?}",
            aabb,
            coord.as_slice()
        );
        aabb.coord_to_linear(coord)
    }
}

impl<const D: usize> Block<D> for ScalarField<D> {
    fn atomic(&self) -> &AtomicBlock<D> {
        &self.atomic
    }

    fn atomic_mut(&mut self) -> &mut AtomicBlock<D> {
        &mut self.atomic
    }

    fn kind(&self) -> BlockKind {
        BlockKind::ScalarField
    }

    fn block_ref(&mut self) -> BlockRef<'_, D> {
        BlockRef::ScalarField(self)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn get_set_test() {
        let mut field = ScalarField::new(vector![4, 3]);
        assert_eq!(field.data().len(), 12);
        field.set(&vector![3, 2], 5.0);
        *field.get_mut(&vector![0, 1]) += 2.0;
        assert_eq!(field.get(&vector![3, 2]), 5.0);
        assert_eq!(field.get(&vector![0, 1]), 2.0);
        assert_eq!(field.data()[11], 5.0);
    }

    #[test]
    fn par_set_values_test() {
        let mut field = ScalarField::new(vector![7, 5]);
        field.par_set_values(|c| (c[0] * 10 + c[1]) as f64, 3);
        for c in field.bounding_box().coord_iter() {
            assert_eq!(field.get(&c), (c[0] * 10 + c[1]) as f64);
        }
        assert_eq!(field.kind(), BlockKind::ScalarField);
    }
}
