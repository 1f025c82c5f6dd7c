use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

use stitch_engine::{pattern, Engine, Palette};
use stitchwork::models::{AppConfig, DEFAULT_LOG_FILTER};
use stitchwork::services::{load_palette, read_png, ScriptRunner};

#[derive(Parser)]
#[command(name = "stitchwork")]
#[command(about = "Turn images into cross-stitch patterns")]
struct Cli {
    /// Configuration file (defaults to $STITCHWORK_CONFIG, then ./stitchwork.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a command script and print the per-command report
    Run {
        /// Script file (reads stdin when omitted)
        script: Option<PathBuf>,

        /// Floss palette CSV (overrides the config)
        #[arg(short, long)]
        palette: Option<PathBuf>,
    },
    /// Generate a pattern from a PNG in one step
    Pattern {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output pattern text file
        #[arg(short, long)]
        output: PathBuf,

        /// Floss palette CSV (overrides the config)
        #[arg(short, long)]
        palette: Option<PathBuf>,
    },
    /// List the floss palette
    Palette {
        /// Floss palette CSV (overrides the config)
        #[arg(short, long)]
        palette: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise the config may replace the default filter
    let env_filter = EnvFilter::try_from_default_env();
    let from_env = env_filter.is_ok();
    let (filter, filter_handle) =
        reload::Layer::new(env_filter.unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config = AppConfig::load(AppConfig::resolve_path(cli.config).as_deref());
    if !from_env {
        let directives = config.log_filter();
        match EnvFilter::try_new(directives) {
            Ok(configured) => {
                if let Err(e) = filter_handle.reload(configured) {
                    tracing::warn!(%e, "Failed to apply configured log filter");
                }
            }
            Err(e) => tracing::warn!(%e, directives, "Invalid log_filter in config"),
        }
    }

    match cli.command {
        Commands::Run { script, palette } => run_script(&config, script, palette),
        Commands::Pattern {
            input,
            output,
            palette,
        } => run_pattern(&config, &input, &output, palette),
        Commands::Palette { palette } => run_palette(&config, palette),
    }
}

fn session_palette(config: &AppConfig, overridden: Option<PathBuf>) -> anyhow::Result<Palette> {
    let path = overridden.unwrap_or_else(|| config.palette.clone());
    Ok(load_palette(&path)?)
}

fn session_engine(config: &AppConfig) -> Engine {
    match config.mosaic_seed {
        Some(seed) => Engine::with_seed(seed),
        None => Engine::new(),
    }
}

/// Run a command script against a fresh session
fn run_script(
    config: &AppConfig,
    script: Option<PathBuf>,
    palette: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut runner = ScriptRunner::new(session_engine(config), session_palette(config, palette)?);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match script {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            runner.run_reader(BufReader::new(file), &mut out)?;
        }
        None => runner.run_reader(std::io::stdin().lock(), &mut out)?,
    }
    Ok(())
}

/// Load, match against the palette and write the pattern text
fn run_pattern(
    config: &AppConfig,
    input: &Path,
    output: &Path,
    palette: Option<PathBuf>,
) -> anyhow::Result<()> {
    let palette = session_palette(config, palette)?;
    let image = read_png(input)?;
    let text = pattern::generate(&image, &palette).serialize();
    std::fs::write(output, text)?;

    println!("Pattern written to {}", output.display());
    Ok(())
}

/// Print every floss as code, symbol and color
fn run_palette(config: &AppConfig, palette: Option<PathBuf>) -> anyhow::Result<()> {
    let palette = session_palette(config, palette)?;

    println!("{:>6}  {:^6}  RGB", "CODE", "SYMBOL");
    for floss in palette.iter() {
        println!("{:>6}  {:^6}  {}", floss.code, floss.symbol, floss.color);
    }
    println!("\n{} entries", palette.len());
    Ok(())
}
