//! System sets that fix the per-frame order across plugins.

use bevy::prelude::*;

/// Frame stages, configured to run in declaration order.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Retry click on the game over screen, judged against the state left by earlier frames.
    Retry,
    /// Pointer and viewport updates.
    Input,
    /// Food bobbing, food collisions and the spawner's reaction.
    Food,
    /// Snake growth requested by eaten food.
    Growth,
    /// Obstacle spinning and the terminal collision check.
    Obstacles,
    /// Chain solver.
    Snake,
    /// Shape drawing.
    Draw,
    /// HUD and game over overlay.
    Ui,
}
