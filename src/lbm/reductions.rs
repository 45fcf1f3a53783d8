use crate::block::*;
use crate::functional::*;
use crate::statistics::BlockStatistics;
use crate::util::*;

/// Average density, average kinetic energy and largest velocity norm of a
/// lattice region.
#[derive(Clone, Debug)]
pub struct LatticeStatistics {
    statistics: BlockStatistics,
    average_rho: usize,
    average_energy: usize,
    max_u: usize,
}

impl LatticeStatistics {
    pub fn new() -> Self {
        let mut statistics = BlockStatistics::new();
        let average_rho = statistics.subscribe_average();
        let average_energy = statistics.subscribe_average();
        let max_u = statistics.subscribe_max();
        LatticeStatistics {
            statistics,
            average_rho,
            average_energy,
            max_u,
        }
    }

    pub fn average_density(&self) -> f64 {
        self.statistics.average(self.average_rho)
    }

    pub fn average_energy(&self) -> f64 {
        self.statistics.average(self.average_energy)
    }

    pub fn max_velocity(&self) -> f64 {
        self.statistics.max(self.max_u)
    }
}

impl Default for LatticeStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> ReductiveBoxProcessingFunctionalL<D> for LatticeStatistics {
    fn process(&mut self, domain: AABB<D>, lattice: &mut BlockLattice<D>) {
        for c in domain.coord_iter() {
            let rho = lattice.density(&c);
            let u_sq = lattice.velocity(&c).norm_squared();
            self.statistics.gather_average(self.average_rho, rho);
            self.statistics.gather_average(self.average_energy, 0.5 * u_sq);
            self.statistics.gather_max(self.max_u, u_sq.sqrt());
            self.statistics.increment_stats();
        }
    }

    fn statistics(&self) -> &BlockStatistics {
        &self.statistics
    }

    fn statistics_mut(&mut self) -> &mut BlockStatistics {
        &mut self.statistics
    }
}

/// Plain sum of a scalar field.
#[derive(Clone, Debug)]
pub struct ScalarSum {
    statistics: BlockStatistics,
    sum: usize,
}

impl ScalarSum {
    pub fn new() -> Self {
        let mut statistics = BlockStatistics::new();
        let sum = statistics.subscribe_sum();
        ScalarSum { statistics, sum }
    }

    pub fn sum(&self) -> f64 {
        self.statistics.sum(self.sum)
    }
}

impl Default for ScalarSum {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> ReductiveBoxProcessingFunctionalS<D> for ScalarSum {
    fn process(&mut self, domain: AABB<D>, field: &mut ScalarField<D>) {
        for c in domain.coord_iter() {
            self.statistics.gather_sum(self.sum, field.get(&c));
        }
    }

    fn statistics(&self) -> &BlockStatistics {
        &self.statistics
    }

    fn statistics_mut(&mut self) -> &mut BlockStatistics {
        &mut self.statistics
    }
}

/// Trapezoidal rule on a unit grid: a node on `k` faces of the domain
/// counts with weight `1 / 2^k`. Apply with a boundary width of 1 so that
/// every boundary region is exactly one node thick.
#[derive(Clone, Debug)]
pub struct TrapezoidalIntegral {
    statistics: BlockStatistics,
    integral: usize,
}

impl TrapezoidalIntegral {
    pub fn new() -> Self {
        let mut statistics = BlockStatistics::new();
        let integral = statistics.subscribe_sum();
        TrapezoidalIntegral {
            statistics,
            integral,
        }
    }

    pub fn integral(&self) -> f64 {
        self.statistics.sum(self.integral)
    }

    fn gather<const D: usize>(&mut self, domain: AABB<D>, field: &ScalarField<D>, weight: f64) {
        for c in domain.coord_iter() {
            self.statistics.gather_sum(self.integral, weight * field.get(&c));
        }
    }
}

impl Default for TrapezoidalIntegral {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize> BoundedReductiveBoxProcessingFunctionalS<D> for TrapezoidalIntegral {
    fn process_bulk(&mut self, domain: AABB<D>, field: &mut ScalarField<D>) {
        self.gather(domain, field, 1.0);
    }

    fn process_face(
        &mut self,
        _direction: usize,
        _orientation: i32,
        domain: AABB<D>,
        field: &mut ScalarField<D>,
    ) {
        self.gather(domain, field, 0.5);
    }

    fn process_edge(
        &mut self,
        _plane: usize,
        _normal1: i32,
        _normal2: i32,
        domain: AABB<D>,
        field: &mut ScalarField<D>,
    ) {
        self.gather(domain, field, 0.25);
    }

    fn process_corner(
        &mut self,
        _normal: &Coord<D>,
        domain: AABB<D>,
        field: &mut ScalarField<D>,
    ) {
        self.gather(domain, field, 0.5f64.powi(D as i32));
    }

    fn statistics(&self) -> &BlockStatistics {
        &self.statistics
    }

    fn statistics_mut(&mut self) -> &mut BlockStatistics {
        &mut self.statistics
    }
}
