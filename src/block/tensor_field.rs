use crate::block::*;
use crate::util::*;
use rayon::prelude::*;

/// `n_components` values per cell, stored contiguously.
pub struct TensorField<const D: usize> {
    atomic: AtomicBlock<D>,
    n_components: usize,
    buffer: Vec<f64>,
}

impl<const D: usize> TensorField<D> {
    #[track_caller]
    pub fn new(shape: Coord<D>, n_components: usize) -> Self {
        assert!(n_components > 0, "tensor field needs components");
        let atomic = AtomicBlock::new(shape);
        let buffer = vec![0.0; atomic.bounding_box().n_cells() * n_components];
        TensorField {
            atomic,
            n_components,
            buffer,
        }
    }

    /// One component per axis, what velocity fields use.
    pub fn vector(shape: Coord<D>) -> Self {
        Self::new(shape, D)
    }

    pub fn with_envelope(mut self, envelope_width: i32) -> Self {
        self.atomic.set_envelope_width(envelope_width);
        self
    }

    pub fn n_components(&self) -> usize {
        self.n_components
    }

    #[track_caller]
    pub fn get(&self, coord: &Coord<D>) -> &[f64] {
        let start = self.index(coord);
        &self.buffer[start..start + self.n_components]
    }

    #[track_caller]
    pub fn get_mut(&mut self, coord: &Coord<D>) -> &mut [f64] {
        let start = self.index(coord);
        &mut self.buffer[start..start + self.n_components]
    }

    #[track_caller]
    pub fn set(&mut self, coord: &Coord<D>, value: &[f64]) {
        self.get_mut(coord).copy_from_slice(value);
    }

    /// First `D` components of a cell as a velocity.
    #[track_caller]
    pub fn velocity(&self, coord: &Coord<D>) -> Velocity<D> {
        Velocity::from_column_slice(&self.get(coord)[0..D])
    }

    pub fn data(&self) -> &[f64] {
        &self.buffer
    }

    pub fn par_modify_access(
        &mut self,
        chunk_size: usize,
    ) -> impl ParallelIterator<Item = FieldChunk<'_, D>> {
        par_cell_chunks(
            &mut self.buffer,
            self.atomic.bounding_box_ref(),
            self.n_components,
            chunk_size,
        )
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
        aabb.coord_to_linear(coord) * self.n_components
    }
}

impl<const D: usize> Block<D> for TensorField<D> {
    fn atomic(&self) -> &AtomicBlock<D> {
        &self.atomic
    }

    fn atomic_mut(&mut self) -> &mut AtomicBlock<D> {
        &mut self.atomic
    }

    fn kind(&self) -> BlockKind {
        BlockKind::TensorField
    }

    fn block_ref(&mut self) -> BlockRef<'_, D> {
        BlockRef::TensorField(self)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn components_test() {
        let mut field = TensorField::new(vector![3, 3, 2], 3);
        assert_eq!(field.data().len(), 3 * 3 * 2 * 3);
        field.set(&vector![1, 2, 1], &[1.0, 2.0, 3.0]);
        field.get_mut(&vector![0, 0, 0])[2] = -1.0;
        assert_eq!(field.get(&vector![1, 2, 1]), &[1.0, 2.0, 3.0]);
        assert_eq!(field.velocity(&vector![1, 2, 1]), vector![1.0, 2.0, 3.0]);
        assert_eq!(field.data()[2], -1.0);
    }

    #[test]
    fn par_modify_access_test() {
        let mut field = TensorField::vector(vector![5, 4]);
        field.par_modify_access(3).for_each(|mut chunk| {
            chunk.cell_iter_mut().for_each(|(coord, cell)| {
                cell[0] = coord[0] as f64;
                cell[1] = coord[1] as f64;
            })
        });
        assert_eq!(field.velocity(&vector![4, 2]), vector![4.0, 2.0]);
    }
}
