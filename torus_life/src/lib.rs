//! Conway's Game of Life on a toroidal (edge-wrapping) grid.
//!
//! [`Grid`] is the engine: two equally sized cell buffers, every coordinate
//! wrapped on both axes. [`Simulation`] drives it the way the viewer does,
//! reseeding when the board dies out or falls into a recently seen state.

pub mod config;
pub mod error;
pub mod grid;
pub mod history;
pub mod patterns;
pub mod simulation;

pub use config::LifeConfig;
pub use error::{LifeError, Result};
pub use grid::{wrap, Grid};
pub use history::HashHistory;
pub use patterns::{Pattern, PATTERNS};
pub use simulation::{Simulation, TickOutcome};
