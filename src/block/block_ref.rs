use crate::block::*;
use crate::error::DispatchViolation;

/// Mutable handle to one block of a processor's argument list.
///
/// The variant records the concrete kind so typed functionals can cast
/// back. A failed cast is a contract violation, see [`DispatchViolation`].
pub enum BlockRef<'a, const D: usize> {
    Lattice(&'a mut BlockLattice<D>),
    ScalarField(&'a mut ScalarField<D>),
    TensorField(&'a mut TensorField<D>),
}

impl<'a, const D: usize> BlockRef<'a, D> {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockRef::Lattice(_) => BlockKind::Lattice,
            BlockRef::ScalarField(_) => BlockKind::ScalarField,
            BlockRef::TensorField(_) => BlockKind::TensorField,
        }
    }

    pub fn atomic(&self) -> &AtomicBlock<D> {
        match self {
            BlockRef::Lattice(b) => b.atomic(),
            BlockRef::ScalarField(b) => b.atomic(),
            BlockRef::TensorField(b) => b.atomic(),
        }
    }

    pub fn atomic_mut(&mut self) -> &mut AtomicBlock<D> {
        match self {
            BlockRef::Lattice(b) => b.atomic_mut(),
            BlockRef::ScalarField(b) => b.atomic_mut(),
            BlockRef::TensorField(b) => b.atomic_mut(),
        }
    }

    /// Shorter lived handle to the same block.
    pub fn reborrow(&mut self) -> BlockRef<'_, D> {
        match self {
            BlockRef::Lattice(b) => BlockRef::Lattice(&mut **b),
            BlockRef::ScalarField(b) => BlockRef::ScalarField(&mut **b),
            BlockRef::TensorField(b) => BlockRef::TensorField(&mut **b),
        }
    }

    pub fn try_lattice(&mut self) -> Result<&mut BlockLattice<D>, DispatchViolation> {
        match self {
            BlockRef::Lattice(b) => Ok(&mut **b),
            other => Err(DispatchViolation::KindMismatch {
                expected: BlockKind::Lattice,
                found: other.kind(),
            }),
        }
    }

    pub fn try_scalar_field(
        &mut self,
    ) -> Result<&mut ScalarField<D>, DispatchViolation> {
        match self {
            BlockRef::ScalarField(b) => Ok(&mut **b),
            other => Err(DispatchViolation::KindMismatch {
                expected: BlockKind::ScalarField,
                found: other.kind(),
            }),
        }
    }

    pub fn try_tensor_field(
        &mut self,
    ) -> Result<&mut TensorField<D>, DispatchViolation> {
        match self {
            BlockRef::TensorField(b) => Ok(&mut **b),
            other => Err(DispatchViolation::KindMismatch {
                expected: BlockKind::TensorField,
                found: other.kind(),
            }),
        }
    }

    #[track_caller]
    pub fn lattice(&mut self) -> &mut BlockLattice<D> {
        self.try_lattice().unwrap_or_else(|e| e.raise())
    }

    #[track_caller]
    pub fn scalar_field(&mut self) -> &mut ScalarField<D> {
        self.try_scalar_field().unwrap_or_else(|e| e.raise())
    }

    #[track_caller]
    pub fn tensor_field(&mut self) -> &mut TensorField<D> {
        self.try_tensor_field().unwrap_or_else(|e| e.raise())
    }
}

impl<'a, const D: usize> From<&'a mut BlockLattice<D>> for BlockRef<'a, D> {
    fn from(block: &'a mut BlockLattice<D>) -> Self {
        BlockRef::Lattice(block)
    }
}

impl<'a, const D: usize> From<&'a mut ScalarField<D>> for BlockRef<'a, D> {
    fn from(block: &'a mut ScalarField<D>) -> Self {
        BlockRef::ScalarField(block)
    }
}

impl<'a, const D: usize> From<&'a mut TensorField<D>> for BlockRef<'a, D> {
    fn from(block: &'a mut TensorField<D>) -> Self {
        BlockRef::TensorField(block)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::util::*;

    #[test]
    fn cast_test() {
        let mut field = ScalarField::new(vector![3, 3]);
        let mut handle = BlockRef::from(&mut field);
        assert_eq!(handle.kind(), BlockKind::ScalarField);
        handle.scalar_field().set(&vector![1, 1], 4.0);
        assert_eq!(
            handle.try_lattice().err(),
            Some(DispatchViolation::KindMismatch {
                expected: BlockKind::Lattice,
                found: BlockKind::ScalarField
            })
        );
        assert_eq!(field.get(&vector![1, 1]), 4.0);
    }

    #[test]
    #[should_panic(expected = "expected a tensor field block, found a lattice block")]
    fn fatal_cast_test() {
        let mut lattice = BlockLattice::new(vector![3, 3], Descriptor::d2q9(), 1.0);
        let mut handle = lattice.block_ref();
        let _ = handle.tensor_field();
    }
}
