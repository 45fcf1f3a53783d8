use crate::block::*;
use crate::util::*;
use rayon::prelude::*;

/// Lattice Boltzmann populations with BGK dynamics on every cell.
pub struct BlockLattice<const D: usize> {
    atomic: AtomicBlock<D>,
    descriptor: Descriptor<D>,
    omega: f64,
    populations: Vec<f64>,
    scratch: Vec<f64>,
}

impl<const D: usize> BlockLattice<D> {
    /// Lattice at rest with unit density.
    #[track_caller]
    pub fn new(shape: Coord<D>, descriptor: Descriptor<D>, omega: f64) -> Self {
        assert!(
            omega > 0.0 && omega < 2.0,
            "relaxation frequency {} outside (0, 2)",
            omega
        );
        let atomic = AtomicBlock::new(shape);
        let q = descriptor.q();
        let rest: Vec<f64> = (0..q)
            .map(|i| descriptor.equilibrium(i, 1.0, &Velocity::zero()))
            .collect();
        let n_cells = atomic.bounding_box().n_cells();
        let mut populations = Vec::with_capacity(n_cells * q);
        for _ in 0..n_cells {
            populations.extend_from_slice(&rest);
        }
        let scratch = populations.clone();
        BlockLattice {
            atomic,
            descriptor,
            omega,
            populations,
            scratch,
        }
    }

    pub fn with_envelope(mut self, envelope_width: i32) -> Self {
        self.atomic.set_envelope_width(envelope_width);
        self
    }

    pub fn descriptor(&self) -> &Descriptor<D> {
        &self.descriptor
    }

    pub fn omega(&self) -> f64 {
        self.omega
    }

    pub fn set_omega(&mut self, omega: f64) {
        self.omega = omega;
    }

    /// Envelope a population can cross in one streaming step.
    pub fn boundary_width(&self) -> i32 {
        self.descriptor.boundary_width()
    }

    #[track_caller]
    pub fn populations(&self, coord: &Coord<D>) -> &[f64] {
        let start = self.index(coord);
        &self.populations[start..start + self.descriptor.q()]
    }

    #[track_caller]
    pub fn populations_mut(&mut self, coord: &Coord<D>) -> &mut [f64] {
        let start = self.index(coord);
        let q = self.descriptor.q();
        &mut self.populations[start..start + q]
    }

    #[track_caller]
    pub fn density(&self, coord: &Coord<D>) -> f64 {
        self.populations(coord).iter().sum()
    }

    #[track_caller]
    pub fn velocity(&self, coord: &Coord<D>) -> Velocity<D> {
        moments(&self.descriptor, self.populations(coord)).1
    }

    /// Overwrite a cell with the equilibrium of `rho` and `u`.
    #[track_caller]
    pub fn ini_equilibrium(&mut self, coord: &Coord<D>, rho: f64, u: &Velocity<D>) {
        let start = self.index(coord);
        let q = self.descriptor.q();
        for (i, f) in self.populations[start..start + q].iter_mut().enumerate() {
            *f = self.descriptor.equilibrium(i, rho, u);
        }
    }

    /// BGK relaxation of every cell towards its local equilibrium.
    pub fn collide(&mut self, chunk_size: usize) {
        profiling::scope!("BlockLattice::collide");
        let descriptor = &self.descriptor;
        let omega = self.omega;
        par_cell_chunks(
            &mut self.populations,
            self.atomic.bounding_box_ref(),
            descriptor.q(),
            chunk_size,
        )
        .for_each(|mut chunk: FieldChunk<'_, D>| {
            chunk.cell_iter_mut().for_each(|(_, cell)| {
                let (rho, u) = moments(descriptor, cell);
                for (i, f) in cell.iter_mut().enumerate() {
                    *f += omega * (descriptor.equilibrium(i, rho, &u) - *f);
                }
            })
        });
    }

    /// Pull streaming with periodic wrap around the bounding box.
    pub fn stream(&mut self, chunk_size: usize) {
        profiling::scope!("BlockLattice::stream");
        let descriptor = &self.descriptor;
        let populations = &self.populations;
        let aabb = self.atomic.bounding_box_ref();
        let q = descriptor.q();
        par_cell_chunks(&mut self.scratch, aabb, q, chunk_size).for_each(
            |mut chunk: FieldChunk<'_, D>| {
                chunk.cell_iter_mut().for_each(|(coord, cell)| {
                    for (i, f) in cell.iter_mut().enumerate() {
                        let source =
                            aabb.periodic_coord(&(coord - descriptor.velocity(i)));
                        *f = populations[aabb.coord_to_linear(&source) * q + i];
                    }
                })
            },
        );
        std::mem::swap(&mut self.populations, &mut self.scratch);
    }

    /// One time step, then the registered internal processors.
    pub fn collide_and_stream(&mut self, chunk_size: usize) {
        self.collide(chunk_size);
        self.stream(chunk_size);
        self.atomic.mark_written();
        self.execute_internal_processors();
    }

    #[track_caller]
    fn index(&self, coord: &Coord<D>) -> usize {
        let aabb = self.atomic.bounding_box_ref();
        debug_assert!(
            aabb.contains(coord),
            "{} does not contain {:?}",
            aabb,
            coord.as_slice()
        );
        aabb.coord_to_linear(coord) * self.descriptor.q()
    }
}

/// Density and velocity of one cell.
fn moments<const D: usize>(
    descriptor: &Descriptor<D>,
    cell: &[f64],
) -> (f64, Velocity<D>) {
    let mut rho = 0.0;
    let mut j = Velocity::<D>::zero();
    for (i, f) in cell.iter().enumerate() {
        rho += f;
        j += descriptor.velocity(i).cast::<f64>() * *f;
    }
    // An empty cell has no velocity.
    if rho == 0.0 {
        return (rho, Velocity::zero());
    }
    (rho, j / rho)
}

impl<const D: usize> Block<D> for BlockLattice<D> {
    fn atomic(&self) -> &AtomicBlock<D> {
        &self.atomic
    }

    fn atomic_mut(&mut self) -> &mut AtomicBlock<D> {
        &mut self.atomic
    }

    fn kind(&self) -> BlockKind {
        BlockKind::Lattice
    }

    fn block_ref(&mut self) -> BlockRef<'_, D> {
        BlockRef::Lattice(self)
    }
}
