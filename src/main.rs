//! Reseeding Random Source CLI
//!
//! Command-line interface for generating random bytes through the
//! reseeding source.

use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;
use reseeding_random::{
    ChaChaGenerator, FileConfig, MixAlgorithm, OsSeeder, ReseedingRandomSource,
};
use tracing::{info, warn};

/// Generates random bytes through a periodically reseeded CSPRNG.
#[derive(Debug, Parser)]
#[command(name = "reseeding-random", version)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of bytes to generate.
    #[arg(short = 'n', long)]
    bytes: Option<usize>,

    /// Maximum bytes serviced per seed epoch.
    #[arg(long)]
    threshold: Option<u64>,

    /// Bytes requested from the seeder per reseed.
    #[arg(long)]
    seed_length: Option<usize>,

    /// Use SHA-256 for seed mixing instead of BLAKE3.
    #[arg(long)]
    sha256: bool,

    /// Stream bytes to stdout until interrupted.
    #[arg(long)]
    continuous: bool,

    /// Write raw bytes to stdout instead of hex.
    #[arg(long)]
    raw: bool,
}

fn main() {
    // Logs go to stderr; stdout carries the generated bytes.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };

    if let Some(threshold) = cli.threshold {
        config.policy.reseed_threshold = threshold;
    }
    if let Some(seed_length) = cli.seed_length {
        config.policy.seed_length = seed_length;
    }
    if let Some(bytes) = cli.bytes {
        config.output.byte_count = bytes;
    }
    if cli.sha256 {
        config.generator.mix = MixAlgorithm::Sha256;
    }
    config.output.continuous |= cli.continuous;
    config.output.raw |= cli.raw;

    info!("Reseeding Random Source v{}", reseeding_random::VERSION);

    let generator = ChaChaGenerator::with_mixer(config.generator.mix);
    let source = match ReseedingRandomSource::new(OsSeeder::new(), generator, config.policy) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to initialize random source: {}", e);
            std::process::exit(1);
        }
    };

    if config.output.continuous {
        stream(&source);
    } else if let Err(e) = emit(&source, &config) {
        eprintln!("Generation failed: {}", e);
        std::process::exit(1);
    }

    info!("Done. Reseed count: {}", source.reseed_count());
}

/// Emits a fixed number of bytes to stdout, hex-encoded unless raw output
/// was requested.
fn emit(
    source: &ReseedingRandomSource<OsSeeder, ChaChaGenerator>,
    config: &FileConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut output = vec![0u8; config.output.byte_count];
    source.next_bytes(&mut output)?;

    let mut stdout = std::io::stdout().lock();
    if config.output.raw {
        stdout.write_all(&output)?;
    } else {
        let hex = output
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect::<String>();
        writeln!(stdout, "{}", hex)?;
    }
    Ok(())
}

/// Streams raw bytes to stdout until Ctrl-C or the pipe closes.
fn stream(source: &ReseedingRandomSource<OsSeeder, ChaChaGenerator>) {
    let running = Arc::new(AtomicBool::new(true));
    let flag = Arc::clone(&running);
    if let Err(e) = ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst)) {
        warn!("Failed to install Ctrl-C handler: {}", e);
    }

    let mut stdout = std::io::stdout().lock();
    let mut chunk = [0u8; 4096];
    while running.load(Ordering::SeqCst) {
        if let Err(e) = source.next_bytes(&mut chunk) {
            eprintln!("Generation failed: {}", e);
            std::process::exit(1);
        }
        if stdout.write_all(&chunk).is_err() {
            break; // downstream closed the pipe
        }
    }
}
