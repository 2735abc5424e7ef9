use signalcycle::simulation::{Simulation, SimulationError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SimulationError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    Simulation::standard().run(&mut out)?;
    Ok(())
}
