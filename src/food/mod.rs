//! Food plugin - handles food spawning, bobbing, collision detection and the spawner's reaction.

use bevy::prelude::*;
use rand::prelude::*;
use std::f32::consts::TAU;

use crate::game::{
    FOOD_BOB_AMPLITUDE, FOOD_BOB_PERIOD_MS, Food, GameSet, GameState, GrowthEvent, Position,
    Snake, Viewport,
};
use crate::obstacles::spawn_obstacle;

/// Plugin for food-related systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (food_bob_animation, food_collision)
                .chain()
                .in_set(GameSet::Food),
        );
    }
}

/// Uniform random position over the viewport.
pub fn random_position(rng: &mut impl Rng, viewport: &Viewport) -> Position {
    Position(Vec2::new(
        rng.random::<f32>() * viewport.width,
        rng.random::<f32>() * viewport.height,
    ))
}

/// Rolls a food item at a random position with a random bob phase.
pub fn random_food(rng: &mut impl Rng, viewport: &Viewport) -> (Food, Position) {
    let position = random_position(rng, viewport);
    (Food::new(rng.random::<f32>() * TAU), position)
}

/// Spawns a food item anywhere on the viewport.
pub fn spawn_food(commands: &mut Commands, rng: &mut impl Rng, viewport: &Viewport) {
    commands.spawn(random_food(rng, viewport));
}

/// Vertical drift applied to a food item on a frame at `elapsed_ms`.
pub fn bob_offset(elapsed_ms: f64, phase_offset: f32) -> f32 {
    ((elapsed_ms / FOOD_BOB_PERIOD_MS) as f32 + phase_offset).sin() * FOOD_BOB_AMPLITUDE
}

/// System to drift food up and down. The offset accumulates frame over frame.
fn food_bob_animation(time: Res<Time>, mut foods: Query<(&Food, &mut Position)>) {
    let elapsed_ms = time.elapsed_secs_f64() * 1000.0;
    for (food, mut position) in foods.iter_mut() {
        position.0.y += bob_offset(elapsed_ms, food.phase_offset);
    }
}

/// System to eat food under the head, then replace it and add an obstacle.
pub(crate) fn food_collision(
    mut commands: Commands,
    mut growth_writer: MessageWriter<GrowthEvent>,
    mut game_state: ResMut<GameState>,
    snake: Res<Snake>,
    viewport: Res<Viewport>,
    foods: Query<(Entity, &Food, &Position)>,
) {
    let Some(head) = snake.head() else {
        return;
    };
    let mut rng = rand::rng();

    for (food_entity, food, position) in foods.iter() {
        if position.touched_by_head(head, food.radius) {
            commands.entity(food_entity).despawn();
            growth_writer.write(GrowthEvent);
            game_state.record_meal();
            spawn_obstacle(&mut commands, &mut rng, &viewport);
            spawn_food(&mut commands, &mut rng, &viewport);
            debug!(
                "Ate food at {:?}, score {}, speed {:.3}",
                position.0, game_state.score, game_state.speed
            );
        }
    }
}
