//! Command-line argument parsing.

use clap::{Parser, Subcommand};

use crate::app_input::Command;
use crate::colors::SoundColor;
use crate::error::Result;
use crate::gradient::Direction;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "sound-alchemy")]
#[command(about = "Maps speech sounds to colors of the visible spectrum", long_about = None)]
pub struct Args {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Path of the settings file, without extension
    #[arg(long, value_name = "PATH", default_value = "./config")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Action>,
}

#[derive(Subcommand, Debug)]
pub enum Action {
    /// Color of one or more phonemes
    Color {
        #[arg(required = true)]
        symbols: Vec<String>,
    },
    /// CSS gradient between two phonemes
    Gradient {
        from: String,
        to: String,
        /// to right (default), to left, to top, to bottom
        #[arg(long, value_name = "DIRECTION")]
        direction: Option<String>,
    },
    /// Frequency ratio of two phonemes
    Harmony { first: String, second: String },
    /// Phoneme whose color is closest to a hex color
    Nearest { color: String },
    /// Every phoneme with its profile and color
    Table,
}

impl Args {
    /// Command to run once, or `None` for interactive mode.
    pub fn to_command(&self) -> Result<Option<Command>> {
        let Some(action) = &self.command else {
            return Ok(None);
        };

        let command = match action {
            Action::Color { symbols } => Command::Color(symbols.clone()),
            Action::Gradient { from, to, direction } => Command::Gradient {
                from: from.clone(),
                to: to.clone(),
                direction: direction.as_deref().map(str::parse::<Direction>).transpose()?,
            },
            Action::Harmony { first, second } => Command::Harmony(first.clone(), second.clone()),
            Action::Nearest { color } => Command::Nearest(color.parse::<SoundColor>()?),
            Action::Table => Command::Table,
        };

        Ok(Some(command))
    }
}
