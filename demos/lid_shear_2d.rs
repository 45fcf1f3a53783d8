use lbpf::block::*;
use lbpf::cli::Args;
use lbpf::dispatch::*;
use lbpf::functional::*;
use lbpf::lbm::*;
use lbpf::util::*;
use tracing::info;

fn main() {
    let args = Args::cli_setup("lid_shear_2d");
    let domain = args.grid_bounds();

    let mut lattice = BlockLattice::new(
        domain.exclusive_bounds(),
        Descriptor::d2q9(),
        args.omega,
    );
    apply_processing_functional_l(
        UniformEquilibrium {
            rho: 1.0,
            u: vector![0.0, 0.0],
        },
        domain,
        &mut lattice,
    );
    integrate_processing_functional_l(
        VelocityBoundary::new(args.lid_velocity()),
        args.lid(),
        &mut lattice,
        0,
    );

    let mut density = ScalarField::new(domain.exclusive_bounds());
    for step in 1..=args.steps {
        lattice.collide_and_stream(args.chunk_size);
        profiling::finish_frame!();

        if args.should_report(step) || step == args.steps {
            let mut stats = LatticeStatistics::new();
            apply_reductive_processing_functional_l(&mut stats, domain, &mut lattice);

            apply_processing_functional_ls(ExtractDensity, domain, &mut lattice, &mut density);
            let mut mass = TrapezoidalIntegral::new();
            apply_bounded_reductive_processing_functional_s(&mut mass, domain, &mut density, 1);

            info!(
                step,
                rho = stats.average_density(),
                energy = stats.average_energy(),
                u_max = stats.max_velocity(),
                mass = mass.integral(),
                "report"
            );
        }
    }
}
