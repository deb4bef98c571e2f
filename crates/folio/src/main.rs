use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use folio::preview::write_preview;
use folio::{Renderer, WallClock};
use quotes::{QuoteIndex, TimeKey};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Literary quote clock for a 7.5\" e-paper panel", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the clock against the attached panel
    Run {
        /// CSV quote table (time, emphasis, quote, title, author)
        #[arg(long)]
        quotes: PathBuf,
        /// Seconds between clock polls
        #[arg(long, default_value_t = 30)]
        interval_secs: u64,
        /// Panel width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,
        /// Panel height in pixels
        #[arg(long, default_value_t = 480)]
        height: u32,
        /// SPI device node
        #[arg(long, default_value = "/dev/spidev0.0")]
        spi: String,
        /// GPIO character device for the busy/dc/rst pins
        #[arg(long, default_value = "/dev/gpiochip0")]
        gpio: String,
    },
    /// Render one time key to a PNG without any hardware
    Preview {
        /// CSV quote table (time, emphasis, quote, title, author)
        #[arg(long)]
        quotes: PathBuf,
        /// Key to render, e.g. "9:05"; defaults to the current minute
        #[arg(long)]
        time: Option<String>,
        /// Output image path
        #[arg(long, default_value = "preview.png")]
        out: PathBuf,
        /// Canvas width in pixels
        #[arg(long, default_value_t = 800)]
        width: u32,
        /// Canvas height in pixels
        #[arg(long, default_value_t = 480)]
        height: u32,
    },
}

fn load_index(path: &std::path::Path) -> Result<QuoteIndex> {
    let index = QuoteIndex::from_path(path)
        .with_context(|| format!("loading quote table from {}", path.display()))?;
    tracing::info!(entries = index.len(), "quote table loaded");
    Ok(index)
}

#[cfg(feature = "hardware")]
async fn run_clock(
    quotes: PathBuf,
    interval_secs: u64,
    width: u32,
    height: u32,
    spi: String,
    gpio: String,
) -> Result<()> {
    use std::sync::Arc;
    use std::time::Duration;

    use folio::clock::ClockSource;
    use folio::RefreshLoop;
    use platform::DisplayDriver;
    use tokio::sync::Notify;

    let index = load_index(&quotes)?;
    let mut driver = platform::epd7in5::Epd7in5Driver::connect(&spi, &gpio)?;
    driver.init().context("waking the panel")?;

    let shutdown = Arc::new(Notify::new());
    let notifier = Arc::clone(&shutdown);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            notifier.notify_one();
        }
    });

    let clock = WallClock;
    tracing::info!(key = %clock.current_key(), "starting refresh loop");
    let looper = RefreshLoop::new(
        &index,
        Renderer::new(width, height),
        &mut driver,
        clock,
        Duration::from_secs(interval_secs),
    );
    looper.run(&shutdown).await?;
    Ok(())
}

#[cfg(not(feature = "hardware"))]
async fn run_clock(
    _quotes: PathBuf,
    _interval_secs: u64,
    _width: u32,
    _height: u32,
    _spi: String,
    _gpio: String,
) -> Result<()> {
    anyhow::bail!(
        "built without the `hardware` feature; rebuild with --features hardware, \
         or use `folio preview` to render to a PNG"
    )
}

fn preview(quotes: PathBuf, time: Option<String>, out: PathBuf, width: u32, height: u32) -> Result<()> {
    use folio::clock::ClockSource;

    let index = load_index(&quotes)?;
    let key = match time {
        Some(t) => TimeKey::new(t),
        None => WallClock.current_key(),
    };
    write_preview(&index, &key, &Renderer::new(width, height), &out)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            quotes,
            interval_secs,
            width,
            height,
            spi,
            gpio,
        } => run_clock(quotes, interval_secs, width, height, spi, gpio).await,
        Commands::Preview {
            quotes,
            time,
            out,
            width,
            height,
        } => preview(quotes, time, out, width, height),
    }
}
