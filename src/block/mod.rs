//! Grid-like containers that data processors run against.
//!
//! Every block owns its storage and an [`AtomicBlock`] holding what the
//! dispatcher needs: bounding box, envelope, location and the list of
//! internal processors. Functionals never see a block directly, they get
//! a list of [`BlockRef`] handles and downcast them in argument order.

mod atomic;
mod block_ref;
mod chunk;
mod descriptor;
mod internal;
mod lattice;
mod scalar_field;
mod tensor_field;

pub use atomic::*;
pub use block_ref::*;
pub use chunk::*;
pub use descriptor::*;
pub use internal::*;
pub use lattice::*;
pub use scalar_field::*;
pub use tensor_field::*;

use crate::processor::{execute_data_processor, DataProcessorGenerator};
use crate::util::*;

/// The closed set of concrete block kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Lattice,
    ScalarField,
    TensorField,
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BlockKind::Lattice => "lattice",
            BlockKind::ScalarField => "scalar field",
            BlockKind::TensorField => "tensor field",
        };
        write!(f, "{}", name)
    }
}

/// Which cells of a block a processor is allowed to touch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockDomain {
    /// Only the bulk, envelope cells are left alone.
    #[default]
    Bulk,
    /// Bulk and envelope, what initialisers want.
    BulkAndEnvelope,
}

/// Capability shared by lattices, scalar fields and tensor fields.
pub trait Block<const D: usize> {
    fn atomic(&self) -> &AtomicBlock<D>;

    fn atomic_mut(&mut self) -> &mut AtomicBlock<D>;

    fn kind(&self) -> BlockKind;

    /// Handle for use in a block list.
    fn block_ref(&mut self) -> BlockRef<'_, D>;

    fn bounding_box(&self) -> AABB<D> {
        self.atomic().bounding_box()
    }

    fn location(&self) -> Coord<D> {
        self.atomic().location()
    }

    /// Run a processor produced by `generator` against this block, now.
    fn execute_data_processor(
        &mut self,
        generator: &dyn DataProcessorGenerator<D>,
    ) {
        execute_data_processor(generator, vec![self.block_ref()]);
    }

    /// Keep `generator` to be run by `execute_internal_processors`.
    fn add_internal_processor(
        &mut self,
        generator: Box<dyn DataProcessorGenerator<D>>,
        level: i32,
    ) {
        self.atomic_mut()
            .internal_processors_mut()
            .add(generator, level);
    }

    /// Run every registered processor, lowest level first.
    fn execute_internal_processors(&mut self) {
        profiling::scope!("Block::execute_internal_processors");
        let processors =
            std::mem::take(self.atomic_mut().internal_processors_mut());
        for generator in processors.generators() {
            self.execute_data_processor(generator);
        }
        // Anything registered while running goes after the existing ones.
        let registered = std::mem::replace(
            self.atomic_mut().internal_processors_mut(),
            processors,
        );
        self.atomic_mut()
            .internal_processors_mut()
            .append(registered);
    }
}
