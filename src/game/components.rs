//! ECS components for the snake game.

use bevy::prelude::*;

use super::{
    FOOD_COLOR, FOOD_RADIUS, OBSTACLE_COLOR, OBSTACLE_SIZE, OBSTACLE_SPIKES, SEGMENT_WIDTH,
};

/// Position in viewport pixels: origin at the top-left corner, y pointing down.
#[derive(Component, Clone, Copy, PartialEq, Debug, Default)]
pub struct Position(pub Vec2);

impl Position {
    /// Check if a snake head at `head` touches a circle of `radius` around this position.
    pub fn touched_by_head(&self, head: Vec2, radius: f32) -> bool {
        head.distance(self.0) < radius + SEGMENT_WIDTH / 2.0
    }
}

/// Component for food items.
#[derive(Component, Clone, Copy, Debug)]
pub struct Food {
    pub radius: f32,
    pub color: Color,
    /// Phase of the bobbing animation, in radians.
    pub phase_offset: f32,
}

impl Food {
    pub fn new(phase_offset: f32) -> Self {
        Food {
            radius: FOOD_RADIUS,
            color: FOOD_COLOR,
            phase_offset,
        }
    }
}

/// Component for rotating spiked obstacles.
#[derive(Component, Clone, Copy, Debug)]
pub struct Obstacle {
    /// Outer radius of the star.
    pub size: f32,
    /// Current rotation, in degrees.
    pub rotation: f32,
    /// Degrees added to `rotation` every frame.
    pub rotation_speed: f32,
    pub spikes: u32,
    pub color: Color,
}

impl Obstacle {
    pub fn new(rotation: f32, rotation_speed: f32) -> Self {
        Obstacle {
            size: OBSTACLE_SIZE,
            rotation,
            rotation_speed,
            spikes: OBSTACLE_SPIKES,
            color: OBSTACLE_COLOR,
        }
    }
}

/// Component to mark the score display UI element.
#[derive(Component)]
pub struct ScoreText;

/// Component to mark the game over overlay UI.
#[derive(Component)]
pub struct GameOverUI;
