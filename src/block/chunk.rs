use crate::util::*;
use rayon::prelude::*;

/// A run of consecutive cells of a block buffer, handed to one rayon task.
/// Each cell stores `stride` values: one for a scalar field, `q` for a
/// lattice.
pub struct FieldChunk<'a, const D: usize> {
    offset: usize,
    stride: usize,
    aabb: &'a AABB<D>,
    buffer: &'a mut [f64],
}

impl<'a, const D: usize> FieldChunk<'a, D> {
    pub fn new(
        offset: usize,
        stride: usize,
        aabb: &'a AABB<D>,
        buffer: &'a mut [f64],
    ) -> Self {
        debug_assert_eq!(buffer.len() % stride, 0);
        FieldChunk {
            offset,
            stride,
            aabb,
            buffer,
        }
    }

    /// Linear index of the first cell.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn cell_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (Coord<D>, &mut [f64])> {
        let offset = self.offset;
        let aabb = self.aabb;
        self.buffer
            .chunks_exact_mut(self.stride)
            .enumerate()
            .map(move |(i, cell): (usize, &mut [f64])| {
                (aabb.linear_to_coord(offset + i), cell)
            })
    }
}

/// Split `buffer` into parallel chunks of `chunk_size` cells.
/// Taking the box and buffer as separate borrows keeps the caller free
/// to hold both of its own fields at once.
pub fn par_cell_chunks<'a, const D: usize>(
    buffer: &'a mut [f64],
    aabb: &'a AABB<D>,
    stride: usize,
    chunk_size: usize,
) -> impl IndexedParallelIterator<Item = FieldChunk<'a, D>> + 'a {
    debug_assert_eq!(buffer.len(), aabb.n_cells() * stride);
    let chunk_size = chunk_size.max(1);
    buffer
        .par_chunks_mut(chunk_size * stride)
        .enumerate()
        .map(move |(i, buffer_chunk): (usize, &mut [f64])| {
            FieldChunk::new(i * chunk_size, stride, aabb, buffer_chunk)
        })
}
