use crate::block::*;
use crate::functional::*;
use crate::util::*;

/// Every cell at the equilibrium of one density and velocity.
#[derive(Clone, Debug)]
pub struct UniformEquilibrium<const D: usize> {
    pub rho: f64,
    pub u: Velocity<D>,
}

impl<const D: usize> BoxProcessingFunctionalL<D> for UniformEquilibrium<D> {
    fn process(&mut self, domain: AABB<D>, lattice: &mut BlockLattice<D>) {
        for c in domain.coord_iter() {
            lattice.ini_equilibrium(&c, self.rho, &self.u);
        }
    }

    fn applies_to(&self) -> BlockDomain {
        BlockDomain::BulkAndEnvelope
    }
}

/// Equilibrium at a fixed density, velocity read from a tensor field.
#[derive(Clone, Debug)]
pub struct EquilibriumFromVelocity {
    pub rho: f64,
}

impl<const D: usize> BoxProcessingFunctionalLT<D> for EquilibriumFromVelocity {
    fn process(
        &mut self,
        domain: AABB<D>,
        lattice: &mut BlockLattice<D>,
        field: &mut TensorField<D>,
    ) {
        for c in domain.coord_iter() {
            let u = field.velocity(&c);
            lattice.ini_equilibrium(&c, self.rho, &u);
        }
    }

    fn applies_to(&self) -> BlockDomain {
        BlockDomain::BulkAndEnvelope
    }

    fn modification_pattern(&self, is_written: &mut [bool]) {
        is_written.copy_from_slice(&[true, false]);
    }
}

#[derive(Clone, Debug)]
pub struct SetScalar {
    pub value: f64,
}

impl<const D: usize> BoxProcessingFunctionalS<D> for SetScalar {
    fn process(&mut self, domain: AABB<D>, field: &mut ScalarField<D>) {
        for c in domain.coord_iter() {
            field.set(&c, self.value);
        }
    }

    fn applies_to(&self) -> BlockDomain {
        BlockDomain::BulkAndEnvelope
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn uniform_equilibrium_covers_envelope_test() {
        let mut lattice =
            BlockLattice::new(vector![6, 5], Descriptor::d2q9(), 1.0).with_envelope(1);
        let u = vector![0.04, 0.0];
        apply_processing_functional_l(
            UniformEquilibrium { rho: 1.2, u },
            lattice.bounding_box(),
            &mut lattice,
        );
        for c in lattice.bounding_box().coord_iter() {
            assert_approx_eq!(f64, lattice.density(&c), 1.2, epsilon = 1e-12);
            assert_approx_eq!(f64, lattice.velocity(&c)[0], 0.04, epsilon = 1e-12);
        }
    }

    #[test]
    fn equilibrium_from_velocity_test() {
        let mut lattice = BlockLattice::new(vector![4, 4], Descriptor::d2q9(), 1.0);
        let mut velocity = TensorField::vector(vector![4, 4]);
        velocity.set(&vector![2, 1], &[0.0, -0.05]);
        apply_processing_functional_lt(
            EquilibriumFromVelocity { rho: 1.0 },
            lattice.bounding_box(),
            &mut lattice,
            &mut velocity,
        );
        assert_approx_eq!(f64, lattice.velocity(&vector![2, 1])[1], -0.05, epsilon = 1e-12);
        assert_eq!(lattice.atomic().revision(), 1);
        assert_eq!(velocity.atomic().revision(), 0);
    }
}
