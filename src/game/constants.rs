//! Game constants for sizes, speeds, colors, counts and rendering layers.

use bevy::prelude::*;

// Window defaults
pub const WINDOW_TITLE: &str = "Dragon Snake";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

// Snake
pub const SEGMENT_LENGTH: f32 = 20.0;
pub const SEGMENT_WIDTH: f32 = 15.0;
/// Viewport pixels (width + height) per initial segment.
pub const PIXELS_PER_SEGMENT: f32 = 50.0;
pub const INITIAL_SPEED: f32 = 0.1;
pub const SPEED_INCREMENT: f32 = 0.005;
pub const SPIKE_LENGTH_FACTOR: f32 = 1.5;
pub const SPIKE_THICKNESS: f32 = 2.0;

// Food
pub const FOOD_COUNT: usize = 5;
pub const FOOD_RADIUS: f32 = 10.0;
pub const FOOD_BOB_AMPLITUDE: f32 = 0.5;
/// Milliseconds per radian of bob phase.
pub const FOOD_BOB_PERIOD_MS: f64 = 500.0;

// Obstacles
pub const OBSTACLE_COUNT: usize = 3;
pub const OBSTACLE_SIZE: f32 = 30.0;
pub const OBSTACLE_SPIKES: u32 = 6;
pub const OBSTACLE_MIN_ROTATION_SPEED: f32 = 1.0;
pub const OBSTACLE_MAX_ROTATION_SPEED: f32 = 3.0;

// Colors
pub const BACKGROUND_COLOR: Color = Color::srgba(0.04, 0.04, 0.04, 1.0);
pub const FOOD_COLOR: Color = Color::srgb(1.0, 0.412, 0.706);
pub const OBSTACLE_COLOR: Color = Color::srgb(0.545, 0.0, 0.0);
pub const SPIKE_COLOR: Color = Color::WHITE;
pub const OVERLAY_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.8);
/// Gradient stops along the viewport diagonal, top-left to bottom-right.
pub const GRADIENT_STOPS: [Srgba; 3] = [
    Srgba::rgb(1.0, 0.0, 0.0),
    Srgba::rgb(1.0, 1.0, 0.0),
    Srgba::rgb(0.0, 1.0, 0.0),
];

// Text
pub const SCORE_FONT_SIZE: f32 = 20.0;
pub const OVERLAY_FONT_SIZE: f32 = 30.0;

// Z-index constants for rendering layers
pub const Z_FOOD: f32 = 1.0;
pub const Z_OBSTACLE: f32 = 2.0;
pub const Z_SNAKE: f32 = 3.0;
/// Depth step between consecutive snake segments so the tail paints over the head.
pub const Z_SEGMENT_STEP: f32 = 0.0001;
