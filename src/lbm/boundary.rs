use crate::block::*;
use crate::functional::*;
use crate::util::*;

/// Imposes a velocity by resetting cells to equilibrium at their current
/// density. Typically integrated over a wall so it runs after streaming.
#[derive(Clone, Debug)]
pub struct VelocityBoundary<const D: usize> {
    u: Velocity<D>,
}

impl<const D: usize> VelocityBoundary<D> {
    /// `u` in lattice units.
    pub fn new(u: Velocity<D>) -> Self {
        VelocityBoundary { u }
    }

    pub fn velocity(&self) -> Velocity<D> {
        self.u
    }
}

impl<const D: usize> BoxProcessingFunctionalL<D> for VelocityBoundary<D> {
    fn process(&mut self, domain: AABB<D>, lattice: &mut BlockLattice<D>) {
        for c in domain.coord_iter() {
            let rho = lattice.density(&c);
            lattice.ini_equilibrium(&c, rho, &self.u);
        }
    }

    /// Lattice velocities scale with `dt / dx`.
    fn rescale(&mut self, dx_scale: f64, dt_scale: f64) {
        self.u *= dt_scale / dx_scale;
    }
}
