//! Snake effect: wandering stroked polylines with a moving visible segment
//!
//! Each trigger throws out seven snakes. A snake's body is a biased random
//! walk from the view center to the edge; its animation reveals the stroke
//! from the head, then trims the tail so only a bounded length is visible,
//! then fades out. Stroke boundaries are expressed as arc-length fractions
//! sampled from keyframe tracks, so the renderer just slices the polyline.

use std::f64::consts::TAU;

use crate::animation::keyframes::KeyframeTrack;
use crate::core::settings::{LumenSettings, SnakeSettings};
use crate::effects::{EffectRng, EffectSet, LightState, LightToggled, ViewBounds};
use crate::geometry::Polyline;
use crate::ui::theme::CurrentTheme;
use bevy::prelude::*;
use kurbo::Point;
use rand::Rng;

/// Generate one wandering path from the origin out to `max_radius`.
///
/// The heading starts at a uniform random angle and drifts by up to
/// `max_turn` radians after every sample, while a sinusoidal offset
/// perpendicular to the current heading makes the body wave. Yields exactly
/// `floor(max_radius / segment_length) + 1` points.
pub fn generate_path(rng: &mut impl Rng, settings: &SnakeSettings, max_radius: f64) -> Polyline {
    let mut angle: f64 = rng.gen_range(0.0..TAU);
    let steps = (max_radius / settings.segment_length).floor() as usize;
    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let distance = i as f64 * settings.segment_length;
        let oscillation =
            settings.oscillation_amplitude * (settings.oscillation_frequency * distance).sin();
        points.push(Point::new(
            distance * angle.cos() + oscillation * angle.sin(),
            distance * angle.sin() - oscillation * angle.cos(),
        ));
        angle += rng.gen_range(-settings.max_turn..=settings.max_turn);
    }
    Polyline::new(points)
}

/// The three tracks driving the moving-segment illusion.
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeTracks {
    pub stroke_end: KeyframeTrack,
    pub stroke_start: KeyframeTrack,
    pub opacity: KeyframeTrack,
}

/// Build the animation tracks for a path of the given total length.
///
/// The head grows to the visible length by the middle key, reaches the path
/// end at the last key; the tail starts trimming after the middle key; the
/// whole stroke fades out over the final stretch. Ratios are clamped to
/// [0, 1], so a path shorter than the visible length degrades to a fully
/// revealed stroke that fades, and every track stays non-decreasing.
pub fn build_tracks(total_length: f64, settings: &SnakeSettings) -> SnakeTracks {
    let visible_frac = if total_length > 0.0 {
        (settings.visible_length / total_length).min(1.0) as f32
    } else {
        1.0
    };
    let leftover_frac = (1.0 - visible_frac).max(0.0);
    let times = &settings.key_times;
    SnakeTracks {
        stroke_end: KeyframeTrack::new(times, &[0.0, visible_frac, 1.0]),
        stroke_start: KeyframeTrack::new(times, &[0.0, 0.0, leftover_frac]),
        opacity: KeyframeTrack::new(times, &[1.0, 1.0, 0.0]),
    }
}

/// One live snake: path geometry plus its animation state.
#[derive(Component, Debug, Clone)]
pub struct SnakeFx {
    pub color: Color,
    path: Polyline,
    tracks: SnakeTracks,
    elapsed: f32,
    duration: f32,
}

impl SnakeFx {
    pub fn new(color: Color, path: Polyline, tracks: SnakeTracks, duration: f32) -> Self {
        Self {
            color,
            path,
            tracks,
            elapsed: 0.0,
            duration,
        }
    }

    pub fn path(&self) -> &Polyline {
        &self.path
    }

    pub fn tracks(&self) -> &SnakeTracks {
        &self.tracks
    }

    /// Normalized progress, clamped to [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    /// The currently visible stretch of the path and its opacity.
    pub fn visible_segment(&self) -> (Polyline, f32) {
        let t = self.progress();
        let start = self.tracks.stroke_start.sample(t);
        let end = self.tracks.stroke_end.sample(t);
        (
            self.path.slice(start as f64, end as f64),
            self.tracks.opacity.sample(t),
        )
    }

    pub fn advance(&mut self, delta: f32) {
        self.elapsed += delta;
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                spawn_snakes.in_set(EffectSet::Spawn),
                advance_snakes.in_set(EffectSet::Advance),
            ),
        );
    }
}

/// Discards all previous snakes and spawns a fresh batch on every toggle.
fn spawn_snakes(
    mut commands: Commands,
    mut toggles: EventReader<LightToggled>,
    existing: Query<Entity, With<SnakeFx>>,
    light: Res<LightState>,
    theme: Res<CurrentTheme>,
    settings: Res<LumenSettings>,
    bounds: Res<ViewBounds>,
    mut rng: ResMut<EffectRng>,
) {
    if toggles.is_empty() {
        return;
    }
    toggles.clear();

    for entity in existing.iter() {
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.despawn();
        }
    }

    let color = theme.ink(light.on);
    let max_radius = bounds.max_radius() as f64;
    for _ in 0..settings.snake.count {
        let path = generate_path(&mut rng.0, &settings.snake, max_radius);
        let tracks = build_tracks(path.arc_length(), &settings.snake);
        commands.spawn(SnakeFx::new(color, path, tracks, settings.snake.duration));
    }
    debug!("spawned {} snakes", settings.snake.count);
}

/// Advances snake clocks and removes finished ones.
fn advance_snakes(
    mut commands: Commands,
    time: Res<Time>,
    mut snakes: Query<(Entity, &mut SnakeFx)>,
) {
    for (entity, mut snake) in &mut snakes {
        snake.advance(time.delta_secs());
        if snake.finished() {
            if let Ok(mut entity_commands) = commands.get_entity(entity) {
                entity_commands.despawn();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn settings() -> SnakeSettings {
        SnakeSettings::default()
    }

    #[test]
    fn path_has_expected_point_count() {
        let mut rng = StdRng::seed_from_u64(1);
        // 300x600 view: max radius 300, segment length 5 -> 61 points
        let path = generate_path(&mut rng, &settings(), 300.0);
        assert_eq!(path.len(), 61);
    }

    #[test]
    fn path_reaches_out_and_has_positive_length() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let path = generate_path(&mut rng, &settings(), 300.0);
            let total = path.arc_length();
            assert!(total > 0.0);
            // The last sample sits 300 units from the center (give or take
            // the oscillation), so the arc is at least that long.
            assert!(total >= 300.0 - settings().oscillation_amplitude);
        }
    }

    #[test]
    fn path_starts_at_center() {
        let mut rng = StdRng::seed_from_u64(5);
        let path = generate_path(&mut rng, &settings(), 300.0);
        let first = path.points()[0];
        assert_eq!((first.x, first.y), (0.0, 0.0));
    }

    #[test]
    fn same_seed_reproduces_geometry() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        assert_eq!(
            generate_path(&mut a, &settings(), 300.0),
            generate_path(&mut b, &settings(), 300.0)
        );
    }

    #[test]
    fn consecutive_draws_differ() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = generate_path(&mut rng, &settings(), 300.0);
        let second = generate_path(&mut rng, &settings(), 300.0);
        assert_ne!(first, second);
    }

    #[test]
    fn tracks_are_non_decreasing_in_unit_range() {
        let tracks = build_tracks(650.0, &settings());
        for track in [&tracks.stroke_end, &tracks.stroke_start] {
            let mut previous = 0.0f32;
            for step in 0..=100 {
                let value = track.sample(step as f32 / 100.0);
                assert!(value >= previous);
                assert!((0.0..=1.0).contains(&value));
                previous = value;
            }
        }
    }

    #[test]
    fn long_path_tracks_match_length_ratios() {
        let tracks = build_tracks(650.0, &settings());
        let visible = (200.0 / 650.0) as f32;
        assert!((tracks.stroke_end.sample(0.8) - visible).abs() < 1e-6);
        assert!((tracks.stroke_start.sample(1.0) - (1.0 - visible)).abs() < 1e-6);
        assert_eq!(tracks.opacity.sample(1.0), 0.0);
    }

    #[test]
    fn short_path_tracks_are_clamped() {
        // Shorter than the visible length: reveal everything, trim nothing
        let tracks = build_tracks(120.0, &settings());
        assert_eq!(tracks.stroke_end.sample(0.8), 1.0);
        assert_eq!(tracks.stroke_start.sample(1.0), 0.0);
    }

    #[test]
    fn zero_length_path_tracks_are_sane() {
        let tracks = build_tracks(0.0, &settings());
        assert_eq!(tracks.stroke_end.sample(0.8), 1.0);
        assert_eq!(tracks.stroke_start.sample(1.0), 0.0);
    }

    #[test]
    fn visible_segment_is_bounded_by_visible_length() {
        let mut rng = StdRng::seed_from_u64(11);
        let path = generate_path(&mut rng, &settings(), 300.0);
        let total = path.arc_length();
        let tracks = build_tracks(total, &settings());
        let mut snake = SnakeFx::new(Color::BLACK, path, tracks, settings().duration);

        // At the middle key the head has grown to the visible length
        snake.advance(0.8 * settings().duration);
        let (segment, alpha) = snake.visible_segment();
        let expected = settings().visible_length.min(total);
        assert!((segment.arc_length() - expected).abs() < 1e-3);
        assert!((alpha - 1.0).abs() < 1e-5);
    }

    #[test]
    fn snake_fades_and_finishes() {
        let mut rng = StdRng::seed_from_u64(12);
        let path = generate_path(&mut rng, &settings(), 300.0);
        let tracks = build_tracks(path.arc_length(), &settings());
        let mut snake = SnakeFx::new(Color::BLACK, path, tracks, settings().duration);

        snake.advance(settings().duration);
        assert!(snake.finished());
        let (_, alpha) = snake.visible_segment();
        assert_eq!(alpha, 0.0);
    }
}
