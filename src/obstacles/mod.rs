//! Obstacle plugin - handles spiked obstacle spawning, spinning and the fatal collision check.

use bevy::prelude::*;
use rand::prelude::*;

use crate::food::random_position;
use crate::game::{
    GameSet, GameState, OBSTACLE_MAX_ROTATION_SPEED, OBSTACLE_MIN_ROTATION_SPEED, Obstacle,
    Position, Snake, Viewport,
};

/// Plugin for obstacle-related systems.
pub struct ObstaclePlugin;

impl Plugin for ObstaclePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (obstacle_spin, obstacle_collision)
                .chain()
                .in_set(GameSet::Obstacles),
        );
    }
}

/// Rolls an obstacle with random position, rotation and spin.
pub fn random_obstacle(rng: &mut impl Rng, viewport: &Viewport) -> (Obstacle, Position) {
    let position = random_position(rng, viewport);
    let rotation = rng.random::<f32>() * 360.0;
    let rotation_speed = rng.random::<f32>()
        * (OBSTACLE_MAX_ROTATION_SPEED - OBSTACLE_MIN_ROTATION_SPEED)
        + OBSTACLE_MIN_ROTATION_SPEED;
    (Obstacle::new(rotation, rotation_speed), position)
}

/// Spawns an obstacle anywhere on the viewport.
pub fn spawn_obstacle(commands: &mut Commands, rng: &mut impl Rng, viewport: &Viewport) {
    commands.spawn(random_obstacle(rng, viewport));
}

/// System to advance every obstacle's rotation by its own speed.
fn obstacle_spin(mut obstacles: Query<&mut Obstacle>) {
    for mut obstacle in obstacles.iter_mut() {
        obstacle.rotation += obstacle.rotation_speed;
    }
}

/// System to end the game when the head touches any obstacle.
pub(crate) fn obstacle_collision(
    mut game_state: ResMut<GameState>,
    snake: Res<Snake>,
    obstacles: Query<(&Obstacle, &Position)>,
) {
    let Some(head) = snake.head() else {
        return;
    };

    let hit = obstacles
        .iter()
        .any(|(obstacle, position)| position.touched_by_head(head, obstacle.size));
    if hit && game_state.end() {
        info!("Game over! Final score: {}", game_state.score);
    }
}
