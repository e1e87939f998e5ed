use std::time::Instant;

use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::{error, info};
use pretty_env_logger::env_logger;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use silent_encoder::{Block, CodeConfig, EncoderError, ExConvCode, GF2};

/// Compresses a random block vector and a random choice-bit vector with one
/// Expand-Convolve code, the way a silent OT receiver does.
#[derive(Parser, Debug)]
#[clap(name = "ExConv dual encode")]
#[clap(version, author, long_about = None)]
struct CliArgs {
    /// Message size k.
    #[clap(short = 'k', long, default_value_t = 1 << 16)]
    message_size: u64,
    /// Code size n. Defaults to 2k.
    #[clap(short = 'n', long)]
    code_size: Option<u64>,
    #[clap(short = 'w', long, default_value_t = silent_encoder::codes::DEFAULT_EXPANDER_WEIGHT)]
    expander_weight: u64,
    #[clap(short = 'a', long, default_value_t = silent_encoder::codes::DEFAULT_ACCUMULATOR_SIZE)]
    accumulator_size: u64,
    /// Code seed as a hex u128. Both parties must use the same one.
    #[clap(long)]
    seed: Option<Block>,
    /// Seed of the random input vectors.
    #[clap(long, default_value_t = 0)]
    input_seed: u64,
    #[clap(flatten)]
    verbose: Verbosity,
}

pub fn main() {
    let args = CliArgs::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    if let Err(e) = run(&args) {
        error!("Encoding failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), EncoderError> {
    let code_size = args.code_size.unwrap_or(args.message_size.saturating_mul(2));
    let mut config = CodeConfig::new(
        args.message_size,
        code_size,
        args.expander_weight,
        args.accumulator_size,
    )?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    info!("Code: {:?}", config);

    let time = Instant::now();
    let code = ExConvCode::with_config(config)?;
    info!("Schedule derivation took: {}ms", time.elapsed().as_millis());

    let mut rng = ChaCha8Rng::seed_from_u64(args.input_seed);
    let mut blocks: Vec<Block> = (0..config.code_size())
        .map(|_| Block::random(&mut rng))
        .collect();
    let mut choice: Vec<GF2> = (0..config.code_size())
        .map(|_| GF2::random(&mut rng))
        .collect();

    let time = Instant::now();
    code.encode_dual_block_bit(&mut blocks, &mut choice)?;
    info!("Dual encode took: {}ms", time.elapsed().as_millis());

    blocks.truncate(config.message_size());
    choice.truncate(config.message_size());
    let ones = choice.iter().filter(|b| b.is_one()).count();
    info!("Choice bits set: {}/{}", ones, choice.len());
    for (i, (block, bit)) in blocks.iter().zip(&choice).take(4).enumerate() {
        info!("[{}] {} {}", i, block, u8::from(*bit));
    }
    Ok(())
}
