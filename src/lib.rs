//! Sound Alchemy - maps speech sounds to colors of the visible spectrum

pub mod app_input;
pub mod cli;
pub mod colors;
pub mod config;
pub mod error;
pub mod gradient;
pub mod harmony;
pub mod math;
pub mod phonemes;
pub mod spectrum;

pub use colors::{color_of, SoundColor};
pub use error::{Error, Result};
pub use gradient::{gradient_of, Direction, Gradient};
pub use harmony::harmony_of;
pub use phonemes::{lookup_profile, AcousticProfile};
