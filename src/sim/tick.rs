//! Fixed timestep simulation tick
//!
//! Advances the spring-damper with semi-implicit Euler at a constant `dt`.

use super::state::{Ball, SimState, Spring};
use crate::math::{Vector3, length, normalize};

/// One-shot triggers for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Start the simulation
    pub start: bool,
    /// Restore the ball and stop the simulation
    pub reset: bool,
}

/// Spring force plus linear damping acting on the ball.
///
/// A ball exactly on the anchor has no direction; the result is NaN and is
/// propagated to the caller.
pub fn spring_force(spring: &Spring, ball: &Ball) -> Vector3 {
    let delta = ball.position - spring.anchor;
    let len = length(delta);
    let dir = normalize(delta);
    let stretch = len - spring.natural_length;

    let spring_force = -spring.stiffness * stretch * dir;
    let damping_force = -spring.damping_coefficient * ball.velocity;
    spring_force + damping_force
}

/// Advance one ball by `dt`. Velocity is updated first and the new velocity
/// moves the position.
pub fn step_spring(spring: &Spring, ball: &mut Ball, dt: f32) {
    let acceleration = spring_force(spring, ball) / ball.mass;
    ball.velocity += acceleration * dt;
    ball.position += ball.velocity * dt;
}

/// Advance the simulation state by one fixed timestep
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    // Reset wins over a start pressed in the same frame
    if input.reset {
        state.reset();
        return;
    }
    if input.start {
        state.start();
    }
    if !state.is_moving {
        return;
    }

    let was_finite = state.ball.position.is_finite() && state.ball.velocity.is_finite();
    step_spring(&state.spring, &mut state.ball, dt);
    state.time_ticks += 1;

    if was_finite && !(state.ball.position.is_finite() && state.ball.velocity.is_finite()) {
        log::warn!(
            "Ball state became non-finite at tick {} (extension {:?})",
            state.time_ticks,
            state.extension()
        );
    }
    log::debug!(
        "tick {}: pos={:?} vel={:?}",
        state.time_ticks,
        state.ball.position,
        state.ball.velocity
    );
}
