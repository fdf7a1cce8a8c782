//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Fixed timestep only
//! - No wall-clock time
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Ball, SimState, Spring};
pub use tick::{TickInput, spring_force, step_spring, tick};
