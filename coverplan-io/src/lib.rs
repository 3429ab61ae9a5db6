//! Readers that turn instance files into [`coverplan_core::Graph`] values.
//!
//! Responsibilities:
//! - Parse colour-class settings files.
//! - Parse plain-text adjacency lists.
//! - Parse ASCII PPM (`P3`) images into four-connected pixel grids.
//!
//! Boundaries:
//! - Readers accept any [`std::io::Read`]; opening paths is left to callers.
//! - No solving happens here.

#![forbid(unsafe_code)]

mod adjacency;
mod lines;
mod ppm;
mod settings;

pub use adjacency::{AdjacencyError, parse_adjacency, read_adjacency};
pub use ppm::{PpmError, parse_ppm_grid, read_ppm_grid};
pub use settings::{Rgb, Settings, SettingsError};
