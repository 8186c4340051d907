//! Snake plugin - handles the chain solver and growth.

use bevy::prelude::*;

use crate::game::{GameSet, GameState, GrowthEvent, PointerTarget, SEGMENT_LENGTH, Snake};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, snake_growth.in_set(GameSet::Growth))
            .add_systems(Update, snake_movement.in_set(GameSet::Snake));
    }
}

/// Move the head a `speed` fraction of the way toward `target`, then drag every
/// following segment to sit exactly `SEGMENT_LENGTH` behind its predecessor.
pub fn advance_chain(segments: &mut [Vec2], target: Vec2, speed: f32) {
    let Some(head) = segments.first_mut() else {
        return;
    };
    *head += (target - *head) * speed;

    for i in 1..segments.len() {
        let prev = segments[i - 1];
        let delta = prev - segments[i];
        // atan2(0, 0) is 0, so a stacked segment lands straight behind on the x axis
        let angle = delta.y.atan2(delta.x);
        segments[i] = prev - Vec2::new(angle.cos(), angle.sin()) * SEGMENT_LENGTH;
    }
}

/// System to pull the snake toward the pointer once per frame.
fn snake_movement(
    game_state: Res<GameState>,
    pointer: Res<PointerTarget>,
    mut snake: ResMut<Snake>,
) {
    if game_state.is_over() {
        return;
    }
    advance_chain(&mut snake.segments, pointer.0, game_state.speed);
}

/// System to handle snake growth when GrowthEvent is received.
pub(crate) fn snake_growth(
    mut snake: ResMut<Snake>,
    mut growth_reader: MessageReader<GrowthEvent>,
) {
    for _ in growth_reader.read() {
        snake.grow();
    }
}
