use std::io;

use anyhow::Context;
use clap::Parser;
use sound_alchemy::app_input::{execute, run_interactive, Output};
use sound_alchemy::cli::Args;
use sound_alchemy::config::{get_config, Format};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging(level: &str) {
    let default_level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::WARN);

    // stdout carries results, logs go to stderr
    _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = get_config(&args.config).context("Failed to read settings")?;

    init_logging(settings.log_level());

    let output = Output {
        format: if args.json { Format::Json } else { settings.output_format() },
        direction: settings.gradient_direction_or_default(),
    };

    match args.to_command()? {
        Some(command) => println!("{}", execute(&command, &output)?),
        None => {
            info!("No command given, reading sounds from stdin");
            run_interactive(io::stdin().lock(), io::stdout(), &output)?;
        }
    }

    Ok(())
}
