use std::io::{BufRead, Write};

use serde_derive::Serialize;
use tracing::{debug, warn};

use crate::colors::{color_of, nearest_phoneme, SoundColor};
use crate::config::Format;
use crate::error::Result;
use crate::gradient::{gradient_with, Direction, Gradient};
use crate::harmony::harmony_of;
use crate::phonemes::{lookup_profile, profiles, AcousticProfile};
use crate::spectrum::frequency_to_wavelength;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Color(Vec<String>),
    Gradient {
        from: String,
        to: String,
        direction: Option<Direction>,
    },
    Harmony(String, String),
    // Gradient and harmony of the same two sounds
    Pair(String, String),
    Nearest(SoundColor),
    Table,
    Quit,
}

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct Output {
    pub format: Format,
    pub direction: Direction,
}

/// Parses one line of interactive input. Blank lines yield `None`.
///
/// `a` asks for a color, `a u` for the gradient and harmony of a pair,
/// three or more sounds list their colors, `#rrggbb` finds the nearest sound.
pub fn parse_line(line: &str) -> Result<Option<Command>> {
    let input = line.trim();

    let command = match input {
        "" => return Ok(None),
        "quit" | "exit" => Command::Quit,
        "table" => Command::Table,
        hex if hex.starts_with('#') => Command::Nearest(hex.parse()?),
        symbols => {
            let mut symbols: Vec<String> = symbols.split_whitespace().map(str::to_string).collect();

            if symbols.len() == 2 {
                let second = symbols.remove(1);
                let first = symbols.remove(0);
                Command::Pair(first, second)
            } else {
                Command::Color(symbols)
            }
        }
    };

    Ok(Some(command))
}

#[derive(Debug, Serialize)]
struct ColorReport<'a> {
    symbol: &'a str,
    known: bool,
    color: SoundColor,
    highlight: SoundColor,
    #[serde(skip_serializing_if = "Option::is_none")]
    wavelength: Option<f64>,
}

impl<'a> ColorReport<'a> {
    fn new(symbol: &'a str) -> ColorReport<'a> {
        let profile = lookup_profile(symbol);
        let color = color_of(symbol);

        ColorReport {
            symbol,
            known: profile.is_some(),
            color,
            highlight: color.highlight(),
            wavelength: profile.map(|profile| frequency_to_wavelength(profile.frequency)),
        }
    }

    fn text(&self) -> String {
        match self.wavelength {
            Some(wavelength) => format!(
                "{}\t{}\t{}\t{:.1} nm",
                self.symbol, self.color, self.highlight, wavelength
            ),
            None => format!("{}\t{}\tunknown phoneme", self.symbol, self.color),
        }
    }
}

#[derive(Debug, Serialize)]
struct GradientReport {
    #[serde(flatten)]
    gradient: Gradient,
    css: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    harmony: Option<f64>,
}

#[derive(Debug, Serialize)]
struct HarmonyReport<'a> {
    first: &'a str,
    second: &'a str,
    harmony: f64,
}

#[derive(Debug, Serialize)]
struct NearestReport {
    color: SoundColor,
    symbol: &'static str,
    phoneme_color: SoundColor,
}

#[derive(Debug, Serialize)]
struct TableRow {
    #[serde(flatten)]
    profile: &'static AcousticProfile,
    wavelength: f64,
    color: SoundColor,
    highlight: SoundColor,
}

fn render<T: serde::Serialize>(format: Format, value: &T, text: impl FnOnce(&T) -> String) -> Result<String> {
    match format {
        Format::Json => Ok(serde_json::to_string(value)?),
        Format::Text => Ok(text(value)),
    }
}

/// Runs `command` and returns what should be printed for it.
pub fn execute(command: &Command, output: &Output) -> Result<String> {
    match command {
        Command::Color(symbols) => {
            let reports: Vec<ColorReport> = symbols.iter().map(|symbol| ColorReport::new(symbol)).collect();
            render(output.format, &reports, |reports| {
                reports.iter().map(ColorReport::text).collect::<Vec<_>>().join("\n")
            })
        }
        Command::Gradient { from, to, direction } => {
            let gradient = gradient_with(from, to, direction.unwrap_or(output.direction));
            let report = GradientReport {
                gradient,
                css: gradient.css(),
                harmony: None,
            };
            render(output.format, &report, |report| report.css.clone())
        }
        Command::Harmony(first, second) => {
            let report = HarmonyReport {
                first,
                second,
                harmony: harmony_of(first, second),
            };
            render(output.format, &report, |report| format!("{:.4}", report.harmony))
        }
        Command::Pair(first, second) => {
            let gradient = gradient_with(first, second, output.direction);
            let report = GradientReport {
                gradient,
                css: gradient.css(),
                harmony: Some(harmony_of(first, second)),
            };
            render(output.format, &report, |report| {
                format!("{}\nharmony {:.4}", report.css, report.harmony.unwrap_or_default())
            })
        }
        Command::Nearest(color) => {
            let Some(profile) = nearest_phoneme(*color) else {
                return Ok(String::new());
            };
            let report = NearestReport {
                color: *color,
                symbol: profile.symbol,
                phoneme_color: color_of(profile.symbol),
            };
            render(output.format, &report, |report| {
                format!("{}\t{} ({})", report.color, report.symbol, report.phoneme_color)
            })
        }
        Command::Table => {
            let rows: Vec<TableRow> = profiles()
                .map(|profile| {
                    let color = color_of(profile.symbol);
                    TableRow {
                        profile,
                        wavelength: frequency_to_wavelength(profile.frequency),
                        color,
                        highlight: color.highlight(),
                    }
                })
                .collect();
            render(output.format, &rows, |rows| {
                rows.iter()
                    .map(|row| {
                        format!(
                            "{}\t{:?}\t{} Hz\t{:.1} nm\t{}\t{}",
                            row.profile.symbol,
                            row.profile.class,
                            row.profile.frequency,
                            row.wavelength,
                            row.color,
                            row.highlight
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        }
        Command::Quit => Ok(String::new()),
    }
}

/// Reads commands line by line until end of input or `quit`.
/// Bad lines are reported and skipped.
pub fn run_interactive<R: BufRead, W: Write>(input: R, mut out: W, output: &Output) -> Result<()> {
    for line in input.lines() {
        let line = line?;

        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                warn!(%error, "ignoring input");
                writeln!(out, "{error}")?;
                continue;
            }
        };

        debug!(?command, "executing");

        if command == Command::Quit {
            break;
        }

        writeln!(out, "{}", execute(&command, output)?)?;
    }

    Ok(())
}
