use anyhow::{Context, Result};
use bchviz::config::{DEFAULT_GENERATOR, DEFAULT_RECEIVED};
use bchviz::ecc::{inject_errors, survey_error_patterns, ErrorCorrection, SyndromeDecoder};
use bchviz::{BitVector, DemoConfig, DemoReport};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(name = "bchviz")]
#[command(about = "Binary BCH-style syndrome decoding with a qubit mapping of the codeword")]
struct Cli {
    /// Logging level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the syndrome, decode, and map the received bits onto qubits
    Demo {
        /// Generator polynomial (binary)
        #[arg(short, long, default_value = DEFAULT_GENERATOR)]
        generator: String,
        /// Received codeword (binary)
        #[arg(short, long, default_value = DEFAULT_RECEIVED)]
        received: String,
        /// Flip this many random bits of the received codeword first
        #[arg(long, default_value_t = 0)]
        inject: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Append check bits to a message so its syndrome is zero
    Encode {
        #[arg(short, long, default_value = DEFAULT_GENERATOR)]
        generator: String,
        #[arg(short, long)]
        message: String,
    },
    /// Decode every error pattern up to a given weight
    Survey {
        #[arg(short, long, default_value = DEFAULT_GENERATOR)]
        generator: String,
        /// Clean codeword to corrupt
        #[arg(short, long, default_value = DEFAULT_RECEIVED)]
        codeword: String,
        #[arg(long, default_value_t = 2)]
        max_weight: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        None => run_demo(DemoConfig::default(), 0, 0)?,
        Some(Commands::Demo {
            generator,
            received,
            inject,
            seed,
        }) => run_demo(DemoConfig::new(generator, received), inject, seed)?,
        Some(Commands::Encode { generator, message }) => run_encode(&generator, &message)?,
        Some(Commands::Survey {
            generator,
            codeword,
            max_weight,
        }) => run_survey(&generator, &codeword, max_weight)?,
    }
    Ok(())
}

fn run_demo(config: DemoConfig, inject: usize, seed: u64) -> Result<()> {
    let (generator, received) = config.parse().context("Failed to read demo input")?;

    let (received, injected) = if inject > 0 {
        info!("Injecting {} error(s) with seed {}", inject, seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        inject_errors(&received, inject, &mut rng).context("Failed to inject errors")?
    } else {
        (received, Vec::new())
    };

    let report = DemoReport::build(&generator, &received)?.with_injected(injected);
    println!("{}", report);
    Ok(())
}

fn run_encode(generator: &str, message: &str) -> Result<()> {
    let generator: BitVector = generator.parse().context("Invalid generator")?;
    let message: BitVector = message.parse().context("Invalid message")?;

    let code = SyndromeDecoder::new(generator)?;
    let codeword = code.encode(&message)?;
    println!("Generator: {}", code.generator());
    println!("Message:   {}", message);
    println!("Codeword:  {}", codeword);
    Ok(())
}

fn run_survey(generator: &str, codeword: &str, max_weight: usize) -> Result<()> {
    let generator: BitVector = generator.parse().context("Invalid generator")?;
    let codeword: BitVector = codeword.parse().context("Invalid codeword")?;

    info!(
        "Surveying {} against {} up to weight {}",
        codeword.to_bit_string(),
        generator.to_bit_string(),
        max_weight
    );
    let summaries = survey_error_patterns(&codeword, &generator, max_weight)?;

    println!(
        "{:>6} {:>8} {:>9} {:>13} {:>9} {:>11}",
        "weight", "patterns", "restored", "miscorrected", "detected", "undetected"
    );
    for s in summaries {
        println!(
            "{:>6} {:>8} {:>9} {:>13} {:>9} {:>11}",
            s.weight, s.total, s.restored, s.miscorrected, s.detected, s.undetected
        );
    }
    Ok(())
}
