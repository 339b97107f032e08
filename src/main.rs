use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;

use ms_lut_cube::logger;
use ms_lut_cube::lut_pipeline::{
    batch, BatchConfig, BatchSummary, BinToCubePipeline, ConversionConfig, PayloadEncoding,
};

use tracing::info;

#[derive(Parser)]
#[command(name = "ms-lut-cube")]
#[command(version, about = "Convert .MS-LUT binary LUTs to .cube and sort them by genre", long_about = None)]
struct Cli {
    /// Directory searched recursively for .bin and extensionless LUTs
    #[arg(value_name = "INPUT", default_value = "OPPO")]
    input: PathBuf,

    /// Directory receiving the converted .cube files
    #[arg(short, long, value_name = "DIR", default_value = "converted_oppo_cubes")]
    out: PathBuf,

    /// Root of the per-genre folders (default: organized_luts next to the output)
    #[arg(long, value_name = "DIR")]
    organized: Option<PathBuf>,

    /// Payload stores three little-endian f32 per entry instead of bytes
    #[arg(long)]
    float_payload: bool,

    /// Skip copying results into genre folders
    #[arg(long)]
    no_organize: bool,

    /// Ignore files of this many bytes or fewer
    #[arg(long, value_name = "BYTES", default_value_t = 1000)]
    min_size: u64,

    /// Number of parallel threads
    #[arg(short = 'j', long, value_name = "N")]
    threads: Option<usize>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    if !cli.input.is_dir() {
        bail!("Input directory not found: {}", cli.input.display());
    }

    let encoding = if cli.float_payload {
        PayloadEncoding::Float32
    } else {
        PayloadEncoding::Byte
    };
    let config = ConversionConfig::builder()
        .payload_encoding(encoding)
        .build();
    let pipeline = BinToCubePipeline::new(config);

    let batch_config = BatchConfig::builder()
        .input_dir(&cli.input)
        .output_dir(&cli.out)
        .organized_dir(cli.organized.clone())
        .min_file_size(cli.min_size)
        .organize(!cli.no_organize)
        .threads(cli.threads)
        .build();

    info!("Input:  {}", batch_config.input_dir.display());
    info!("Output: {}", batch_config.output_dir.display());
    info!("Payload encoding: {:?}", pipeline.config().payload_encoding);

    let report = batch::run(&pipeline, &batch_config)
        .with_context(|| format!("batch conversion of {} failed", cli.input.display()))?;

    print!("{}", BatchSummary::from_report(&report));

    Ok(())
}
