use crate::build_info;
use crate::util::*;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[cfg(feature = "profile-with-puffin")]
static PUFFIN_SERVER: std::sync::OnceLock<puffin_http::Server> =
    std::sync::OnceLock::new();

/// lbpf 2D lattice run
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Lattice width.
    #[arg(long, default_value = "128")]
    pub nx: i32,

    /// Lattice height.
    #[arg(long, default_value = "64")]
    pub ny: i32,

    /// Number of collide and stream steps.
    #[arg(short, long, default_value = "1000")]
    pub steps: usize,

    /// BGK relaxation frequency, in (0, 2).
    #[arg(short, long, default_value = "1.2")]
    pub omega: f64,

    /// Imposed lid velocity in lattice units.
    #[arg(short, long, default_value = "0.05")]
    pub lid_velocity: f64,

    /// Chunk size to use for parallelism.
    #[arg(short, long, default_value = "1000")]
    pub chunk_size: usize,

    /// Log statistics every this many steps.
    #[arg(short, long, default_value = "100")]
    pub report_every: usize,

    /// The number of threads to use.
    #[arg(short, long, default_value = "8")]
    pub threads: usize,

    /// Print build information and quit
    #[arg(long)]
    pub build_info: bool,
}

impl Args {
    /// Parse arguments and bring up logging, profiling and the thread pool.
    pub fn cli_setup(name: &str) -> Self {
        let args = Args::parse();

        if args.build_info {
            build_info::print_report(name);
            std::process::exit(0);
        }

        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .try_init();

        #[cfg(feature = "profile-with-puffin")]
        {
            let server_addr =
                format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
            match puffin_http::Server::new(&server_addr) {
                Ok(server) => {
                    info!("run this to view profiling data: puffin_viewer {server_addr}");
                    let _ = PUFFIN_SERVER.set(server);
                    profiling::puffin::set_scopes_on(true);
                }
                Err(e) => warn!("profiling server not started: {e}"),
            }
        }

        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .thread_name(|i| format!("rayon_thread_{}", i))
            .build_global()
        {
            warn!("keeping existing thread pool: {e}");
        }

        info!(
            nx = args.nx,
            ny = args.ny,
            steps = args.steps,
            omega = args.omega,
            threads = args.threads,
            "{name} setup"
        );
        args
    }

    /// Whole lattice including the wall rows.
    pub fn grid_bounds(&self) -> AABB<2> {
        AABB::new(matrix![0, self.nx - 1; 0, self.ny - 1])
    }

    /// The top row, where the moving lid is imposed.
    pub fn lid(&self) -> AABB<2> {
        AABB::new(matrix![0, self.nx - 1; self.ny - 1, self.ny - 1])
    }

    pub fn lid_velocity(&self) -> Velocity<2> {
        vector![self.lid_velocity, 0.0]
    }

    pub fn should_report(&self, step: usize) -> bool {
        self.report_every != 0 && step % self.report_every == 0
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn geometry_test() {
        let args = Args::parse_from(["lid_shear_2d", "--nx", "10", "--ny", "6", "-r", "5"]);
        assert_eq!(args.grid_bounds(), AABB::new(matrix![0, 9; 0, 5]));
        assert_eq!(args.lid(), AABB::new(matrix![0, 9; 5, 5]));
        assert_eq!(args.lid_velocity(), vector![0.05, 0.0]);
        assert!(args.should_report(10));
        assert!(!args.should_report(7));
    }
}
