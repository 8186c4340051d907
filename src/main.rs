use bevy::{prelude::*, window::WindowResolution};
use bevy_vector_shapes::prelude::*;

mod food;
mod game;
mod input;
mod obstacles;
mod rendering;
mod snake;
mod ui;

use food::FoodPlugin;
use game::{
    BACKGROUND_COLOR, GameSet, GameState, GrowthEvent, PointerTarget, Snake, Viewport,
    WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH, game_running,
};
use input::ViewportInputPlugin;
use obstacles::ObstaclePlugin;
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

/// Registers the shared state and fixes the frame order of every stage.
fn configure_game(app: &mut App) {
    app.init_resource::<GameState>()
        .init_resource::<Viewport>()
        .init_resource::<PointerTarget>()
        .init_resource::<Snake>()
        .add_message::<GrowthEvent>()
        // Simulation sets stop for good once the session is over; drawing keeps showing the
        // final frame under the overlay
        .configure_sets(
            Update,
            (
                GameSet::Retry,
                GameSet::Input,
                GameSet::Food.run_if(game_running),
                GameSet::Growth.run_if(game_running),
                GameSet::Obstacles.run_if(game_running),
                GameSet::Snake.run_if(game_running),
                GameSet::Draw,
                GameSet::Ui,
            )
                .chain(),
        );
}

fn main() {
    let mut app = App::new();
    app.add_plugins((
        DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                title: WINDOW_TITLE.to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }),
        Shape2dPlugin::default(),
    ))
    .insert_resource(ClearColor(BACKGROUND_COLOR));
    configure_game(&mut app);
    app.add_plugins((
        ViewportInputPlugin,
        FoodPlugin,
        ObstaclePlugin,
        SnakePlugin,
        RenderingPlugin,
        UiPlugin,
    ))
    .run();
}
