use crate::block::*;
use crate::functional::*;
use crate::util::*;

/// Writes the density of each lattice cell into a scalar field.
#[derive(Clone, Debug, Default)]
pub struct ExtractDensity;

impl<const D: usize> BoxProcessingFunctionalLS<D> for ExtractDensity {
    fn process(
        &mut self,
        domain: AABB<D>,
        lattice: &mut BlockLattice<D>,
        field: &mut ScalarField<D>,
    ) {
        for c in domain.coord_iter() {
            field.set(&c, lattice.density(&c));
        }
    }

    fn modification_pattern(&self, is_written: &mut [bool]) {
        is_written.copy_from_slice(&[false, true]);
    }
}

/// Writes the velocity of each lattice cell into a tensor field with at
/// least `D` components.
#[derive(Clone, Debug, Default)]
pub struct ExtractVelocity;

impl<const D: usize> BoxProcessingFunctionalLT<D> for ExtractVelocity {
    fn process(
        &mut self,
        domain: AABB<D>,
        lattice: &mut BlockLattice<D>,
        field: &mut TensorField<D>,
    ) {
        for c in domain.coord_iter() {
            let u = lattice.velocity(&c);
            field.get_mut(&c)[0..D].copy_from_slice(u.as_slice());
        }
    }

    fn modification_pattern(&self, is_written: &mut [bool]) {
        is_written.copy_from_slice(&[false, true]);
    }
}

/// Copies the first field into the second.
#[derive(Clone, Debug, Default)]
pub struct CopyScalar;

impl<const D: usize> BoxProcessingFunctionalSS<D> for CopyScalar {
    fn process(
        &mut self,
        domain: AABB<D>,
        source: &mut ScalarField<D>,
        target: &mut ScalarField<D>,
    ) {
        for c in domain.coord_iter() {
            target.set(&c, source.get(&c));
        }
    }

    fn modification_pattern(&self, is_written: &mut [bool]) {
        is_written.copy_from_slice(&[false, true]);
    }
}
