use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hscroll_core::{AppConfig, Platform, SizeType, ViewHeight, ViewWidth};

mod commands;

#[derive(Parser)]
#[command(name = "hscroll")]
#[command(author, version, about = "Animated horizontal scrolling and adaptivity toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the demo TUI
    Run {
        /// Show navigation arrows regardless of the config file
        #[arg(long)]
        arrows: bool,
        /// Platform flavour used for styling
        #[arg(short, long)]
        platform: Option<Platform>,
    },
    /// Print the adaptivity classification of a viewport as JSON
    Classify(ClassifyArgs),
    /// Run queued right-arrow scrolls headless and print every frame
    Simulate {
        /// Total scrollable width
        #[arg(long)]
        content_width: i32,
        /// Width of the visible window
        #[arg(long)]
        visible_width: i32,
        /// Distance moved per click
        #[arg(long)]
        step: i32,
        /// Number of queued clicks
        #[arg(long, default_value_t = 1)]
        clicks: u32,
        /// Duration of one animation, defaults to the configured one
        #[arg(long)]
        duration_ms: Option<u64>,
    },
}

#[derive(Args)]
struct ClassifyArgs {
    /// Viewport width in pixels
    #[arg(long)]
    width: u32,
    /// Viewport height in pixels
    #[arg(long)]
    height: u32,
    /// Screen is in landscape orientation
    #[arg(long)]
    landscape: bool,
    /// Pointer is mouse-capable
    #[arg(long, conflicts_with = "no_mouse")]
    mouse: bool,
    /// Pointer is touch-only, even if the config says otherwise
    #[arg(long)]
    no_mouse: bool,
    #[arg(long)]
    view_width: Option<ViewWidth>,
    #[arg(long)]
    view_height: Option<ViewHeight>,
    #[arg(long)]
    size_x: Option<SizeType>,
    #[arg(long)]
    size_y: Option<SizeType>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // The TUI owns the terminal, so only warnings reach stderr there
    let default_level = match cli.command {
        Some(Commands::Run { .. }) | None => "warn".to_string(),
        _ => config.general.log_level.clone(),
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or(default_level),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Some(Commands::Run { arrows, platform }) => {
            commands::run::run(config, arrows, platform).await
        }
        None => commands::run::run(config, false, None).await,
        Some(Commands::Classify(args)) => commands::classify::run(&config, args.into()),
        Some(Commands::Simulate {
            content_width,
            visible_width,
            step,
            clicks,
            duration_ms,
        }) => {
            commands::simulate::run(
                &config,
                commands::simulate::SimulateOptions {
                    content_width,
                    visible_width,
                    step,
                    clicks,
                    duration_ms,
                },
            )
            .await
        }
    }
}

impl From<ClassifyArgs> for commands::classify::ClassifyOptions {
    fn from(args: ClassifyArgs) -> Self {
        Self {
            width: args.width,
            height: args.height,
            is_landscape: args.landscape,
            has_mouse: match (args.mouse, args.no_mouse) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            overrides: hscroll_core::AdaptivityOverrides {
                view_width: args.view_width,
                view_height: args.view_height,
                size_x: args.size_x,
                size_y: args.size_y,
            },
        }
    }
}
