//! heronav - Responsive site header toolkit

mod cli;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use heronav_core::HeaderConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "heronav",
    version,
    about = "Responsive site header: layout preview, scroll simulation, preview server",
    long_about = "Inspect and preview a responsive navigation header.\n\
                  \n\
                  The header shows a horizontal menu on wide viewports and a toggle with a\n\
                  vertical panel below the breakpoint. Scrolling past the elevation threshold\n\
                  switches the header to its elevated (blurred) style.\n\
                  \n\
                  Examples:\n\
                    heronav menu                             # Print the menu tree\n\
                    heronav render --width 480 --open        # Narrow layout with the panel open\n\
                    heronav render --scroll 0.2 --html       # Elevated wide header as HTML\n\
                    heronav simulate --scroll 0,0.03,0.06    # Elevation per scroll sample\n\
                    heronav serve --port 3333                # Preview server\n\
                  \n\
                  Environment Variables:\n\
                    HERONAV_CONFIG                           # Header config file (.yaml/.json)\n\
                    HERONAV_LOG                              # Log filter (e.g. debug)\n\
                    HERONAV_NO_COLOR                         # Disable ANSI colors"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Header config file (default: <config_dir>/heronav/header.yaml)
    #[arg(long, env = "HERONAV_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "HERONAV_NO_COLOR", global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Print the menu entries and their children (default)
    Menu {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the header layout for a viewport, scroll position and panel state
    Render {
        /// Viewport width in pixels
        #[arg(long, default_value = "1280")]
        width: u32,
        /// Scroll fraction in [0, 1]
        #[arg(long, default_value = "0")]
        scroll: f64,
        /// Render with the mobile panel open
        #[arg(long)]
        open: bool,
        /// Output static HTML
        #[arg(long, conflicts_with = "json")]
        html: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Feed scroll samples through a mounted header and report elevation
    Simulate {
        /// Comma-separated scroll fractions
        #[arg(long, value_delimiter = ',', required = true)]
        scroll: Vec<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run the preview server
    Serve {
        /// Port for the preview server
        #[arg(long, default_value = "3333")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.no_color);

    let config = HeaderConfig::load_or_default(cli.config.as_deref())
        .context("Failed to load header config")?;

    let no_color = cli.no_color;

    match cli.mode.unwrap_or(Mode::Menu { json: false }) {
        Mode::Menu { json } => {
            cli::run_menu(&config, json, no_color)?;
        }
        Mode::Render {
            width,
            scroll,
            open,
            html,
            json,
        } => {
            let format = if html {
                cli::RenderFormat::Html
            } else if json {
                cli::RenderFormat::Json
            } else {
                cli::RenderFormat::Text
            };
            cli::run_render(&config, width, scroll, open, format)?;
        }
        Mode::Simulate { scroll, json } => {
            cli::run_simulate(&config, &scroll, json, no_color)?;
        }
        Mode::Serve { port } => {
            let state = heronav_web::PreviewState::from_config(&config)
                .context("Invalid header config")?;
            heronav_web::run(state, port).await?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, no_color: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("HERONAV_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}
