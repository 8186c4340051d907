//! Input plugin - tracks the pointer and keeps the viewport in sync with the window.

use bevy::prelude::*;
use bevy::window::{CursorMoved, WindowResized};

use crate::game::{GameSet, GameState, PointerTarget, Snake, Viewport, game_running};

/// Plugin for pointer and resize handling.
pub struct ViewportInputPlugin;

impl Plugin for ViewportInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (track_pointer.run_if(game_running), handle_resize)
                .chain()
                .in_set(GameSet::Input),
        );
    }
}

/// System to follow the latest cursor position. Cursor positions are already in viewport
/// pixels with a top-left origin.
fn track_pointer(
    mut cursor_reader: MessageReader<CursorMoved>,
    mut pointer: ResMut<PointerTarget>,
) {
    if let Some(moved) = cursor_reader.read().last() {
        pointer.0 = moved.position;
    }
}

/// Apply a new viewport size. A snake that has not grown yet is rebuilt to the size-derived
/// length at the pointer; a grown snake keeps its body.
pub fn apply_resize(
    viewport: &mut Viewport,
    snake: &mut Snake,
    pointer: Vec2,
    width: f32,
    height: f32,
) {
    *viewport = Viewport::new(width, height);
    if snake.reanchor(viewport.segment_count(), pointer) {
        debug!(
            "Viewport resized to {}x{}, chain reset to {} segments",
            width,
            height,
            snake.len()
        );
    } else {
        debug!("Viewport resized to {}x{}, chain kept", width, height);
    }
}

/// System to react to window resizes. Once the session is over only the viewport follows the
/// window; the final chain stays as it was.
fn handle_resize(
    mut resize_reader: MessageReader<WindowResized>,
    game_state: Res<GameState>,
    mut viewport: ResMut<Viewport>,
    mut snake: ResMut<Snake>,
    pointer: Res<PointerTarget>,
) {
    let Some(resized) = resize_reader.read().last() else {
        return;
    };
    if game_state.is_over() {
        *viewport = Viewport::new(resized.width, resized.height);
        debug!("Viewport resized to {}x{} after game over", resized.width, resized.height);
    } else {
        apply_resize(
            &mut viewport,
            &mut snake,
            pointer.0,
            resized.width,
            resized.height,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_before_growth_rebuilds_the_chain() {
        let mut viewport = Viewport::new(800.0, 600.0);
        let mut snake = Snake::new(viewport.segment_count(), viewport.center());
        snake.segments[0] = Vec2::new(1.0, 2.0);

        apply_resize(
            &mut viewport,
            &mut snake,
            Vec2::new(50.0, 60.0),
            1000.0,
            500.0,
        );

        assert_eq!(viewport, Viewport::new(1000.0, 500.0));
        assert_eq!(snake.segments, vec![Vec2::new(50.0, 60.0); 30]);
    }

    #[test]
    fn resize_after_growth_keeps_the_chain() {
        let mut viewport = Viewport::new(800.0, 600.0);
        let mut snake = Snake::new(viewport.segment_count(), Vec2::new(10.0, 10.0));
        snake.grow();
        let before = snake.segments.clone();

        apply_resize(&mut viewport, &mut snake, Vec2::ZERO, 300.0, 200.0);

        assert_eq!(viewport.segment_count(), 10);
        assert_eq!(snake.segments, before);
    }

    #[test]
    fn pointer_follows_the_last_cursor_message() {
        let mut app = App::new();
        app.add_message::<CursorMoved>()
            .init_resource::<PointerTarget>()
            .add_systems(Update, track_pointer);

        for position in [Vec2::new(5.0, 6.0), Vec2::new(70.0, 80.0)] {
            app.world_mut().write_message(CursorMoved {
                window: Entity::PLACEHOLDER,
                position,
                delta: None,
            });
        }
        app.update();

        assert_eq!(
            app.world().resource::<PointerTarget>().0,
            Vec2::new(70.0, 80.0)
        );
    }
}
