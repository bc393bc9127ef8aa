#[cfg(test)]
mod toggle_tests {
    use crate::effects::LightState;
    use crate::ui::theme::CurrentTheme;

    #[test]
    fn double_toggle_restores_the_color_pair() {
        let theme = CurrentTheme::default();
        let mut light = LightState::default();
        let original = (theme.background(light.on), theme.ink(light.on));

        light.toggle();
        assert_ne!(
            original,
            (theme.background(light.on), theme.ink(light.on))
        );

        light.toggle();
        assert_eq!(
            original,
            (theme.background(light.on), theme.ink(light.on))
        );
    }
}

#[cfg(test)]
mod scenario_tests {
    use crate::core::settings::LumenSettings;
    use crate::effects::{
        EffectRng, FlareFx, FlarePlugin, LightPlugin, LightToggled, SnakeFx, SnakePlugin,
        ViewBounds,
    };
    use crate::geometry::Polyline;
    use crate::ui::theme::CurrentTheme;
    use bevy::prelude::*;

    /// A headless app with the effect logic but no rendering.
    fn effects_app(width: f32, height: f32, seed: u64) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .insert_resource(CurrentTheme::default())
            .insert_resource(LumenSettings::default())
            .insert_resource(ViewBounds { width, height })
            .insert_resource(EffectRng::seeded(seed))
            .add_plugins((LightPlugin, FlarePlugin, SnakePlugin));
        app
    }

    fn trigger(app: &mut App) {
        app.world_mut().send_event(LightToggled);
        app.update();
    }

    fn count<C: Component>(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<C>>()
            .iter(app.world())
            .count()
    }

    fn snake_paths(app: &mut App) -> Vec<Polyline> {
        app.world_mut()
            .query::<&SnakeFx>()
            .iter(app.world())
            .map(|snake| snake.path().clone())
            .collect()
    }

    #[test]
    fn one_trigger_spawns_one_flare_and_seven_snakes() {
        let mut app = effects_app(300.0, 600.0, 1);
        trigger(&mut app);
        assert_eq!(count::<FlareFx>(&mut app), 1);
        assert_eq!(count::<SnakeFx>(&mut app), 7);
    }

    #[test]
    fn repeated_triggers_never_accumulate_entities() {
        let mut app = effects_app(300.0, 600.0, 2);
        for _ in 0..5 {
            trigger(&mut app);
            assert_eq!(count::<FlareFx>(&mut app), 1);
            assert_eq!(count::<SnakeFx>(&mut app), 7);
        }
    }

    #[test]
    fn scenario_300_by_600() {
        let mut app = effects_app(300.0, 600.0, 3);
        trigger(&mut app);

        // Flare covers the full view: end radius max(300, 600)
        let flare = app
            .world_mut()
            .query::<&FlareFx>()
            .iter(app.world())
            .next()
            .cloned()
            .expect("one flare after trigger");
        assert_eq!(flare.end_radius(), 600.0);

        // Seven snakes, each 300/5 + 1 points, sharing the timing keys
        let mut seen = 0;
        for snake in app.world_mut().query::<&SnakeFx>().iter(app.world()) {
            seen += 1;
            assert_eq!(snake.path().len(), 61);
            let times: Vec<f32> = snake
                .tracks()
                .opacity
                .keys()
                .iter()
                .map(|(time, _)| *time)
                .collect();
            assert_eq!(times, vec![0.0, 0.8, 1.0]);
        }
        assert_eq!(seen, 7);
    }

    #[test]
    fn snakes_have_distinct_geometry() {
        let mut app = effects_app(300.0, 600.0, 4);
        trigger(&mut app);
        let paths = snake_paths(&mut app);
        for (i, a) in paths.iter().enumerate() {
            for b in paths.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn same_seed_replays_the_same_snakes() {
        let mut first = effects_app(300.0, 600.0, 42);
        let mut second = effects_app(300.0, 600.0, 42);
        trigger(&mut first);
        trigger(&mut second);
        assert_eq!(snake_paths(&mut first), snake_paths(&mut second));
    }

    #[test]
    fn finished_effects_are_despawned() {
        let mut app = effects_app(300.0, 600.0, 5);
        // Zero-length animations finish on their first advance
        app.world_mut().resource_mut::<LumenSettings>().flare.duration = 0.0;
        app.world_mut().resource_mut::<LumenSettings>().snake.duration = 0.0;

        trigger(&mut app);
        app.update();
        assert_eq!(count::<FlareFx>(&mut app), 0);
        assert_eq!(count::<SnakeFx>(&mut app), 0);
    }
}
