//! Game resources (singleton state).

use bevy::prelude::*;

use super::{INITIAL_SPEED, PIXELS_PER_SEGMENT, SPEED_INCREMENT, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Game phase enum to track which state the game is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Running,
    Over,
}

/// Main game state resource.
#[derive(Resource, Debug)]
pub struct GameState {
    pub score: usize,
    /// Fraction of the remaining distance the head covers each frame.
    pub speed: f32,
    pub phase: GamePhase,
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            score: 0,
            speed: INITIAL_SPEED,
            phase: GamePhase::Running,
        }
    }
}

impl GameState {
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Over
    }

    /// Apply the score and speed reward for one eaten food item.
    pub fn record_meal(&mut self) {
        self.score += 1;
        self.speed += SPEED_INCREMENT;
    }

    /// Latch the game into the over phase. Returns true only on the first call.
    pub fn end(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.phase = GamePhase::Over;
        true
    }
}

/// Run condition: true while the session has not reached game over.
pub fn game_running(game_state: Res<GameState>) -> bool {
    !game_state.is_over()
}

/// Latest pointer position in viewport pixels; the head chases it.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTarget(pub Vec2);

/// Size of the drawing surface in logical pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32)
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Viewport { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Number of segments a fresh snake gets for this viewport (at least one).
    pub fn segment_count(&self) -> usize {
        (((self.width + self.height) / PIXELS_PER_SEGMENT).floor() as usize).max(1)
    }

    /// Convert a viewport position (top-left origin, y down) to 2D world space
    /// (centered origin, y up).
    pub fn to_world(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            position.x - self.width / 2.0,
            self.height / 2.0 - position.y,
        )
    }
}

/// The snake body. Index 0 is the head.
#[derive(Resource, Debug, Default)]
pub struct Snake {
    pub segments: Vec<Vec2>,
    grown: usize,
}

impl Snake {
    /// A fresh snake with every segment stacked on `anchor`.
    pub fn new(count: usize, anchor: Vec2) -> Self {
        Snake {
            segments: vec![anchor; count],
            grown: 0,
        }
    }

    pub fn head(&self) -> Option<Vec2> {
        self.segments.first().copied()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn has_grown(&self) -> bool {
        self.grown > 0
    }

    /// Append a segment on top of the current tail.
    pub fn grow(&mut self) {
        if let Some(&tail) = self.segments.last() {
            self.segments.push(tail);
            self.grown += 1;
        }
    }

    /// Rebuild the chain with `count` segments at `anchor`, unless it has already grown.
    /// Returns whether the chain was rebuilt.
    pub fn reanchor(&mut self, count: usize, anchor: Vec2) -> bool {
        if self.has_grown() {
            return false;
        }
        *self = Snake::new(count, anchor);
        true
    }
}
