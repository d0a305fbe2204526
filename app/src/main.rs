use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use parkview::app::settings::{self, Settings};
use parkview::runner::{self, logging};
use parkview::ui::{colors, Theme};

/// Live terminal view of a parking lot's occupancy.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Status endpoint URL (overrides the settings file)
    #[arg(long)]
    endpoint: Option<String>,

    /// Poll interval in milliseconds
    #[arg(long = "interval-ms")]
    interval_ms: Option<u64>,

    /// Built-in theme: dark or light
    #[arg(long)]
    theme: Option<String>,

    /// Settings file to use instead of the per-user one
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for log files
    #[arg(long = "log-dir")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    fn apply(self, s: &mut Settings) {
        if let Some(e) = self.endpoint {
            s.endpoint = e;
        }
        if let Some(ms) = self.interval_ms {
            s.poll_interval_ms = ms;
        }
        if let Some(t) = self.theme {
            s.theme = t;
        }
        if let Some(d) = self.log_dir {
            s.log_dir = Some(d);
        }
    }
}

fn apply_theme(s: &Settings) -> anyhow::Result<()> {
    match &s.theme_file {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading theme file {}", path.display()))?;
            let theme = Theme::from_toml(&text)
                .with_context(|| format!("parsing theme file {}", path.display()))?;
            colors::set_from_theme(&theme);
        }
        None => colors::set_theme(&s.theme),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => settings::load_settings_from(path)?,
        None => settings::load_settings()?,
    };
    cli.apply(&mut settings);
    settings.validate()?;

    let log_dir = settings
        .log_dir
        .clone()
        .or_else(settings::user_cache_dir)
        .unwrap_or_else(std::env::temp_dir);
    let _guard = logging::init_logging(&log_dir)?;
    info!(?settings, "starting parkview");

    apply_theme(&settings)?;

    // Single-threaded runtime: cycle bodies never run concurrently.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(runner::run_app(settings))
}
