//! Rendering plugin - draws the snake, food and obstacles with an immediate-mode shape painter.
//!
//! Gameplay state lives in viewport pixels (top-left origin, y down). Everything is converted to
//! world space here, so a 2D camera centered on the origin shows the viewport one to one.

use bevy::color::Mix;
use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;
use std::f32::consts::{PI, TAU};

use crate::game::{
    Food, GRADIENT_STOPS, GameSet, Obstacle, PointerTarget, Position, SEGMENT_WIDTH,
    SPIKE_COLOR, SPIKE_LENGTH_FACTOR, SPIKE_THICKNESS, Snake, Viewport, Z_FOOD, Z_OBSTACLE,
    Z_SEGMENT_STEP, Z_SNAKE,
};

/// Plugin for drawing the playfield.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            Update,
            (draw_food, draw_obstacles, draw_snake)
                .chain()
                .in_set(GameSet::Draw),
        );
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Color of the snake gradient at `position`. The gradient runs red, yellow, green along the
/// viewport diagonal and is clamped beyond its ends.
pub fn gradient_color(position: Vec2, viewport: &Viewport) -> Color {
    let diagonal = Vec2::new(viewport.width, viewport.height);
    let length_squared = diagonal.length_squared();
    let t = if length_squared > 0.0 {
        (position.dot(diagonal) / length_squared).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let (from, to, local) = if t < 0.5 {
        (GRADIENT_STOPS[0], GRADIENT_STOPS[1], t * 2.0)
    } else {
        (GRADIENT_STOPS[1], GRADIENT_STOPS[2], (t - 0.5) * 2.0)
    };
    Color::from(from.mix(&to, local))
}

/// Radius of segment `index` in a snake of `len` segments: full width at the head, shrinking
/// linearly toward zero at the tail.
pub fn segment_radius(index: usize, len: usize) -> f32 {
    SEGMENT_WIDTH - index as f32 * SEGMENT_WIDTH / len as f32
}

/// End point of the spike drawn on a segment, pointing from `segment` toward `ahead`.
pub fn spike_tip(segment: Vec2, ahead: Vec2, radius: f32) -> Vec2 {
    let delta = ahead - segment;
    let angle = delta.y.atan2(delta.x);
    segment + Vec2::new(angle.cos(), angle.sin()) * radius * SPIKE_LENGTH_FACTOR
}

/// Outline of an unrotated star around the origin in viewport orientation: outer points at
/// `size`, inner points at `size / 2` half a spike further around.
pub fn star_points(spikes: u32, size: f32) -> Vec<Vec2> {
    let mut points = Vec::with_capacity(spikes as usize * 2);
    for i in 0..spikes {
        let angle = i as f32 * TAU / spikes as f32;
        let inner_angle = angle + PI / spikes as f32;
        points.push(Vec2::new(angle.cos(), angle.sin()) * size);
        points.push(Vec2::new(inner_angle.cos(), inner_angle.sin()) * (size / 2.0));
    }
    points
}

/// System to draw every food item as a filled circle.
fn draw_food(
    mut painter: ShapePainter,
    viewport: Res<Viewport>,
    foods: Query<(&Food, &Position)>,
) {
    painter.hollow = false;
    for (food, position) in foods.iter() {
        painter.color = food.color;
        painter.set_translation(viewport.to_world(position.0).extend(Z_FOOD));
        painter.circle(food.radius);
    }
}

/// System to draw obstacles as rotated spiked stars.
fn draw_obstacles(
    mut painter: ShapePainter,
    viewport: Res<Viewport>,
    obstacles: Query<(&Obstacle, &Position)>,
) {
    painter.hollow = false;
    for (obstacle, position) in obstacles.iter() {
        painter.color = obstacle.color;
        painter.set_translation(viewport.to_world(position.0).extend(Z_OBSTACLE));
        painter.set_rotation(Quat::IDENTITY);
        // Positive degrees turn clockwise on screen, which is negative about +z in world space
        painter.rotate_z(-obstacle.rotation.to_radians());

        // y flips into world orientation; the star is star-shaped around its center, so a
        // triangle fan fills it
        let points: Vec<Vec2> = star_points(obstacle.spikes, obstacle.size)
            .into_iter()
            .map(|p| Vec2::new(p.x, -p.y))
            .collect();
        for (i, &point) in points.iter().enumerate() {
            let next = points[(i + 1) % points.len()];
            painter.triangle(Vec2::ZERO, point, next);
        }
    }
}

/// System to draw the snake as gradient circles with spikes on every other segment.
fn draw_snake(
    mut painter: ShapePainter,
    viewport: Res<Viewport>,
    pointer: Res<PointerTarget>,
    snake: Res<Snake>,
) {
    if snake.is_empty() {
        return;
    }
    let len = snake.len();
    painter.hollow = false;
    painter.thickness = SPIKE_THICKNESS;

    for (i, &segment) in snake.segments.iter().enumerate() {
        let radius = segment_radius(i, len);
        let z = Z_SNAKE + i as f32 * Z_SEGMENT_STEP;

        painter.set_rotation(Quat::IDENTITY);
        painter.set_translation(viewport.to_world(segment).extend(z));
        painter.color = gradient_color(segment, &viewport);
        painter.circle(radius);

        if i % 2 == 0 {
            let ahead = if i == 0 {
                pointer.0
            } else {
                snake.segments[i - 1]
            };
            let tip = spike_tip(segment, ahead, radius);
            painter.set_translation(Vec3::ZERO);
            painter.color = SPIKE_COLOR;
            painter.line(
                viewport.to_world(segment).extend(z + Z_SEGMENT_STEP / 2.0),
                viewport.to_world(tip).extend(z + Z_SEGMENT_STEP / 2.0),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn srgb(color: Color) -> (f32, f32, f32) {
        let c = color.to_srgba();
        (c.red, c.green, c.blue)
    }

    #[test]
    fn gradient_runs_red_yellow_green_along_the_diagonal() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(srgb(gradient_color(Vec2::ZERO, &viewport)), (1.0, 0.0, 0.0));
        assert_eq!(
            srgb(gradient_color(viewport.center(), &viewport)),
            (1.0, 1.0, 0.0)
        );
        assert_eq!(
            srgb(gradient_color(Vec2::new(800.0, 600.0), &viewport)),
            (0.0, 1.0, 0.0)
        );
        let (r, g, b) = srgb(gradient_color(Vec2::new(200.0, 150.0), &viewport));
        assert!((r - 1.0).abs() < EPSILON && (g - 0.5).abs() < EPSILON && b.abs() < EPSILON);
    }

    #[test]
    fn gradient_clamps_outside_the_viewport() {
        let viewport = Viewport::new(800.0, 600.0);
        assert_eq!(
            srgb(gradient_color(Vec2::new(-100.0, -100.0), &viewport)),
            (1.0, 0.0, 0.0)
        );
        assert_eq!(
            srgb(gradient_color(Vec2::new(2_000.0, 2_000.0), &viewport)),
            (0.0, 1.0, 0.0)
        );
    }

    #[test]
    fn segments_taper_toward_the_tail() {
        assert_eq!(segment_radius(0, 10), 15.0);
        assert!((segment_radius(5, 10) - 7.5).abs() < EPSILON);
        assert!((segment_radius(9, 10) - 1.5).abs() < EPSILON);
    }

    #[test]
    fn spike_points_forward_at_one_and_a_half_radius() {
        let tip = spike_tip(Vec2::new(10.0, 10.0), Vec2::new(10.0, 50.0), 10.0);
        assert!(tip.distance(Vec2::new(10.0, 25.0)) < EPSILON);
    }

    #[test]
    fn star_alternates_outer_and_inner_points() {
        let points = star_points(6, 30.0);
        assert_eq!(points.len(), 12);
        assert!(points[0].distance(Vec2::new(30.0, 0.0)) < EPSILON);
        for (i, point) in points.iter().enumerate() {
            let expected = if i % 2 == 0 { 30.0 } else { 15.0 };
            assert!((point.length() - expected).abs() < EPSILON);
        }
        let inner_angle = points[1].y.atan2(points[1].x);
        assert!((inner_angle - PI / 6.0).abs() < EPSILON);
    }
}
