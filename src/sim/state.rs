//! Simulation state: the spring, the ball, and the run flag

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::math::Vector3;

/// A damped spring fixed at one end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Spring {
    /// Fixed end of the spring
    pub anchor: Vector3,
    /// Rest length
    pub natural_length: f32,
    /// Force per unit stretch
    pub stiffness: f32,
    /// Force per unit velocity
    pub damping_coefficient: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            anchor: Vector3::ZERO,
            natural_length: SPRING_NATURAL_LENGTH,
            stiffness: SPRING_STIFFNESS,
            damping_coefficient: SPRING_DAMPING,
        }
    }
}

/// The point mass hanging off the spring
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ball {
    pub position: Vector3,
    pub velocity: Vector3,
    pub mass: f32,
    /// World radius (display only)
    pub radius: f32,
    /// RGBA
    pub color: u32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            position: Vector3::new(BALL_START_X, 0.0, 0.0),
            velocity: Vector3::ZERO,
            mass: BALL_MASS,
            radius: BALL_RADIUS,
            color: crate::renderer::colors::BALL_BLUE,
        }
    }
}

/// Spring, ball and the simulation-active flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    pub spring: Spring,
    pub ball: Ball,
    /// Integrator runs each tick while set
    pub is_moving: bool,
    /// Steps integrated since the last reset
    pub time_ticks: u64,
    initial_position: Vector3,
    initial_velocity: Vector3,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(Spring::default(), Ball::default())
    }
}

impl SimState {
    /// The ball's current position and velocity become the reset point
    pub fn new(spring: Spring, ball: Ball) -> Self {
        Self {
            spring,
            ball,
            is_moving: false,
            time_ticks: 0,
            initial_position: ball.position,
            initial_velocity: ball.velocity,
        }
    }

    pub fn initial_position(&self) -> Vector3 {
        self.initial_position
    }

    pub fn initial_velocity(&self) -> Vector3 {
        self.initial_velocity
    }

    /// Start integrating from the current state
    pub fn start(&mut self) {
        if !self.is_moving {
            log::info!("Spring simulation started");
        }
        self.is_moving = true;
    }

    /// Put the ball back where it started and stop the simulation
    pub fn reset(&mut self) {
        self.ball.position = self.initial_position;
        self.ball.velocity = self.initial_velocity;
        self.is_moving = false;
        self.time_ticks = 0;
        log::info!("Spring simulation reset");
    }

    /// Current spring extension vector (ball minus anchor)
    pub fn extension(&self) -> Vector3 {
        self.ball.position - self.spring.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let state = SimState::default();
        assert_eq!(state.ball.position, Vector3::new(1.2, 0.0, 0.0));
        assert_eq!(state.ball.velocity, Vector3::ZERO);
        assert_eq!(state.ball.mass, 2.0);
        assert_eq!(state.spring.natural_length, 1.0);
        assert_eq!(state.spring.stiffness, 100.0);
        assert_eq!(state.spring.damping_coefficient, 2.0);
        assert!(!state.is_moving);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = SimState::default();
        state.start();
        state.ball.position = Vector3::new(-3.0, 1.0, 2.0);
        state.ball.velocity = Vector3::new(5.0, 0.0, -1.0);
        state.time_ticks = 42;

        state.reset();
        assert_eq!(state.ball.position, Vector3::new(1.2, 0.0, 0.0));
        assert_eq!(state.ball.velocity, Vector3::ZERO);
        assert!(!state.is_moving);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_reset_point_comes_from_construction() {
        let ball = Ball {
            position: Vector3::new(0.0, -1.5, 0.0),
            ..Ball::default()
        };
        let mut state = SimState::new(Spring::default(), ball);
        assert_eq!(state.initial_position(), Vector3::new(0.0, -1.5, 0.0));
        assert_eq!(state.initial_velocity(), Vector3::ZERO);
        state.ball.position = Vector3::ZERO;
        state.reset();
        assert_eq!(state.ball.position, Vector3::new(0.0, -1.5, 0.0));
    }
}
