use crate::util::*;

/// Discrete velocity set of a lattice.
#[derive(Clone, Debug, PartialEq)]
pub struct Descriptor<const D: usize> {
    name: &'static str,
    velocities: Vec<Coord<D>>,
    weights: Vec<f64>,
}

impl<const D: usize> Descriptor<D> {
    #[track_caller]
    pub fn new(
        name: &'static str,
        velocities: Vec<Coord<D>>,
        weights: Vec<f64>,
    ) -> Self {
        assert_eq!(velocities.len(), weights.len());
        debug_assert!(
            (weights.iter().sum::<f64>() - 1.0).abs() < 1e-12,
            "weights of {} do not sum to one",
            name
        );
        Descriptor {
            name,
            velocities,
            weights,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of populations per cell.
    pub fn q(&self) -> usize {
        self.velocities.len()
    }

    pub fn velocities(&self) -> &[Coord<D>] {
        &self.velocities
    }

    pub fn velocity(&self, i: usize) -> &Coord<D> {
        &self.velocities[i]
    }

    pub fn weight(&self, i: usize) -> f64 {
        self.weights[i]
    }

    /// Squared lattice speed of sound.
    pub fn cs2(&self) -> f64 {
        1.0 / 3.0
    }

    /// How far a population travels in one step.
    pub fn boundary_width(&self) -> i32 {
        self.velocities
            .iter()
            .map(|c| c.abs().max())
            .max()
            .unwrap_or(0)
    }

    /// Index of the velocity pointing the other way.
    pub fn opposite(&self, i: usize) -> usize {
        let target = -self.velocities[i];
        self.velocities
            .iter()
            .position(|c| *c == target)
            .unwrap_or(i)
    }

    /// Second order equilibrium population.
    pub fn equilibrium(&self, i: usize, rho: f64, u: &Velocity<D>) -> f64 {
        let c = self.velocities[i].cast::<f64>();
        let cu = c.dot(u);
        let u_sq = u.norm_squared();
        self.weights[i] * rho * (1.0 + 3.0 * cu + 4.5 * cu * cu - 1.5 * u_sq)
    }
}

impl Descriptor<2> {
    pub fn d2q9() -> Self {
        let velocities = vec![
            vector![0, 0],
            vector![1, 0],
            vector![0, 1],
            vector![-1, 0],
            vector![0, -1],
            vector![1, 1],
            vector![-1, 1],
            vector![-1, -1],
            vector![1, -1],
        ];
        let mut weights = vec![4.0 / 9.0];
        weights.extend([1.0 / 9.0; 4]);
        weights.extend([1.0 / 36.0; 4]);
        Descriptor::new("D2Q9", velocities, weights)
    }
}

impl Descriptor<3> {
    pub fn d3q19() -> Self {
        let mut velocities = vec![vector![0, 0, 0]];
        let mut weights = vec![1.0 / 3.0];
        for d in 0..3 {
            for s in [-1, 1] {
                let mut c = Coord::zero();
                c[d] = s;
                velocities.push(c);
                weights.push(1.0 / 18.0);
            }
        }
        for (a, b) in [(0, 1), (0, 2), (1, 2)] {
            for sa in [-1, 1] {
                for sb in [-1, 1] {
                    let mut c = Coord::zero();
                    c[a] = sa;
                    c[b] = sb;
                    velocities.push(c);
                    weights.push(1.0 / 36.0);
                }
            }
        }
        Descriptor::new("D3Q19", velocities, weights)
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn check_moments<const D: usize>(descriptor: &Descriptor<D>, u: Velocity<D>) {
        let rho = 1.3;
        let mut density = 0.0;
        let mut momentum = Velocity::<D>::zero();
        for i in 0..descriptor.q() {
            let f = descriptor.equilibrium(i, rho, &u);
            density += f;
            momentum += descriptor.velocity(i).cast::<f64>() * f;
        }
        assert_approx_eq!(f64, density, rho, epsilon = 1e-12);
        for d in 0..D {
            assert_approx_eq!(f64, momentum[d], rho * u[d], epsilon = 1e-12);
        }
    }

    #[test]
    fn d2q9_test() {
        let descriptor = Descriptor::d2q9();
        assert_eq!(descriptor.q(), 9);
        assert_eq!(descriptor.boundary_width(), 1);
        for i in 0..9 {
            let o = descriptor.opposite(i);
            assert_eq!(descriptor.velocity(o), &-descriptor.velocity(i));
            assert_eq!(descriptor.weight(o), descriptor.weight(i));
        }
        check_moments(&descriptor, vector![0.05, -0.02]);
    }

    #[test]
    fn d3q19_test() {
        let descriptor = Descriptor::d3q19();
        assert_eq!(descriptor.q(), 19);
        assert_eq!(descriptor.opposite(0), 0);
        check_moments(&descriptor, vector![0.01, 0.03, -0.02]);
    }
}
