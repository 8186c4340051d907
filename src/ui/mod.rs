//! UI plugin - handles session setup, the score display, the game over screen and retry.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::food::spawn_food;
use crate::game::{
    FOOD_COUNT, Food, GameOverUI, GameSet, GameState, OBSTACLE_COUNT, OVERLAY_COLOR,
    OVERLAY_FONT_SIZE, Obstacle, PointerTarget, SCORE_FONT_SIZE, ScoreText, Snake, Viewport,
};
use crate::obstacles::spawn_obstacle;

/// Plugin for UI and game flow systems.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system)
            .add_systems(Update, restart_game.in_set(GameSet::Retry))
            .add_systems(
                Update,
                (update_score_text, spawn_game_over_screen_system)
                    .chain()
                    .in_set(GameSet::Ui),
            );
    }
}

// Type alias for querying everything a session spawns
type SessionEntityQuery<'w, 's> =
    Query<'w, 's, Entity, Or<(With<Food>, With<Obstacle>, With<GameOverUI>)>>;

/// Reset every piece of session state for the given viewport and spawn the starting food and
/// obstacles.
fn begin_session(
    commands: &mut Commands,
    viewport: Viewport,
    game_state: &mut GameState,
    pointer: &mut PointerTarget,
    snake: &mut Snake,
) {
    *game_state = GameState::default();
    *pointer = PointerTarget(viewport.center());
    *snake = Snake::new(viewport.segment_count(), pointer.0);

    let mut rng = rand::rng();
    for _ in 0..FOOD_COUNT {
        spawn_food(commands, &mut rng, &viewport);
    }
    for _ in 0..OBSTACLE_COUNT {
        spawn_obstacle(commands, &mut rng, &viewport);
    }

    info!(
        "Session started on a {}x{} viewport with {} segments",
        viewport.width,
        viewport.height,
        snake.len()
    );
}

/// Initial setup system - viewport, first session, score text.
fn setup_system(
    mut commands: Commands,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
    mut game_state: ResMut<GameState>,
    mut pointer: ResMut<PointerTarget>,
    mut snake: ResMut<Snake>,
) {
    if let Ok(window) = windows.single() {
        *viewport = Viewport::new(window.width(), window.height());
    } else {
        warn!("No primary window found, using the default viewport size");
    }

    begin_session(
        &mut commands,
        *viewport,
        &mut game_state,
        &mut pointer,
        &mut snake,
    );

    commands.spawn((
        Text::new("Score: 0"),
        TextFont {
            font_size: SCORE_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            ..default()
        },
        ScoreText,
    ));
}

/// Spawns the game over screen UI.
fn spawn_game_over_screen(commands: &mut Commands, score: usize) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(OVERLAY_COLOR),
            GlobalZIndex(1),
            GameOverUI,
        ))
        .with_children(|parent| {
            for line in [
                "Game Over".to_string(),
                format!("Score: {}", score),
                "Click to Retry".to_string(),
            ] {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: OVERLAY_FONT_SIZE,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                ));
            }
        });
}

/// System to spawn game over screen when game ends.
pub(crate) fn spawn_game_over_screen_system(
    mut commands: Commands,
    game_state: Res<GameState>,
    game_over_ui: Query<Entity, With<GameOverUI>>,
) {
    // Only spawn if game just ended and no UI exists yet
    if game_state.is_changed() && game_state.is_over() && game_over_ui.is_empty() {
        spawn_game_over_screen(&mut commands, game_state.score);
    }
}

/// System to start a fresh session when the game over screen is clicked. Runs ahead of the
/// simulation, so a press landing on the fatal frame never skips the overlay.
pub(crate) fn restart_game(
    mut commands: Commands,
    mouse_input: Res<ButtonInput<MouseButton>>,
    viewport: Res<Viewport>,
    mut game_state: ResMut<GameState>,
    mut pointer: ResMut<PointerTarget>,
    mut snake: ResMut<Snake>,
    session_entities: SessionEntityQuery,
) {
    if !game_state.is_over() || !mouse_input.just_pressed(MouseButton::Left) {
        return;
    }

    info!("Retrying after a final score of {}", game_state.score);
    for entity in session_entities.iter() {
        commands.entity(entity).despawn();
    }
    begin_session(
        &mut commands,
        *viewport,
        &mut game_state,
        &mut pointer,
        &mut snake,
    );
}

/// System to update the score display.
fn update_score_text(game_state: Res<GameState>, mut query: Query<&mut Text, With<ScoreText>>) {
    if let Ok(mut text) = query.single_mut() {
        *text = Text::new(format!("Score: {}", game_state.score));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count<T: Component>(app: &mut App) -> usize {
        let mut query = app.world_mut().query_filtered::<Entity, With<T>>();
        query.iter(app.world()).count()
    }

    fn over_app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(Viewport::new(800.0, 600.0))
            .init_resource::<GameState>()
            .init_resource::<PointerTarget>()
            .init_resource::<Snake>()
            .add_systems(Update, (spawn_game_over_screen_system, restart_game).chain());

        {
            let world = app.world_mut();
            let viewport = *world.resource::<Viewport>();
            let mut rng = rand::rng();
            for _ in 0..FOOD_COUNT {
                world.spawn(crate::food::random_food(&mut rng, &viewport));
            }
            for _ in 0..OBSTACLE_COUNT + 4 {
                world.spawn(crate::obstacles::random_obstacle(&mut rng, &viewport));
            }
            let mut state = world.resource_mut::<GameState>();
            state.score = 4;
            state.end();
        }
        app
    }

    #[test]
    fn game_over_shows_a_single_overlay() {
        let mut app = over_app();
        app.update();
        app.update();
        assert_eq!(count::<GameOverUI>(&mut app), 1);
        assert!(app.world().resource::<GameState>().is_over());
    }

    #[test]
    fn click_on_game_over_starts_a_fresh_session() {
        let mut app = over_app();
        app.update();

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        let state = app.world().resource::<GameState>();
        assert!(!state.is_over());
        assert_eq!(state.score, 0);
        assert_eq!(
            app.world().resource::<PointerTarget>().0,
            Vec2::new(400.0, 300.0)
        );
        assert_eq!(app.world().resource::<Snake>().len(), 28);
        assert_eq!(count::<GameOverUI>(&mut app), 0);
        assert_eq!(count::<Food>(&mut app), FOOD_COUNT);
        assert_eq!(count::<Obstacle>(&mut app), OBSTACLE_COUNT);
    }

    #[test]
    fn clicks_while_running_are_ignored() {
        let mut app = App::new();
        app.init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(Viewport::new(800.0, 600.0))
            .init_resource::<GameState>()
            .init_resource::<PointerTarget>()
            .insert_resource(Snake::new(3, Vec2::new(1.0, 1.0)))
            .add_systems(Update, restart_game);
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(MouseButton::Left);
        app.update();

        assert_eq!(app.world().resource::<Snake>().len(), 3);
        assert_eq!(count::<Food>(&mut app), 0);
    }
}
