pub mod analysis;
pub mod care;
pub mod config;
pub mod models;

use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

use analysis::{
    AssessmentEngine, AssessmentRequest, DefaultAssessmentEngine, EngineError, ReferenceData,
};

/// Read an `AssessmentRequest` from stdin, write the `AssessmentReport` to stdout.
pub fn run() -> Result<(), EngineError> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let request: AssessmentRequest = serde_json::from_reader(std::io::stdin().lock())?;

    let reference = ReferenceData::load_or_bundled(config::reference_dir().as_deref())?;
    let engine = DefaultAssessmentEngine::new(reference)?;

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let observation = match request.observation {
        Some(observation) => observation,
        None => analysis::generate_scan_observation(&mut rng),
    };

    let report = engine.report(&request.profile, &observation, &mut rng)?;

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;

    Ok(())
}
