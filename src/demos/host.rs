// Owns every demo and routes lifecycle calls to the active one

use log::info;

use super::{Animation, CircleDemo, DemoKind, MorphDemo, PhysicsDemo, TheoremDemo, TrajectoryDemo};
use crate::config::AppConfig;
use crate::core::math::Bounds;
use crate::engine::input::Control;
use crate::engine::renderer::ShapeBatch;

/// One instance of each demo with exactly one active
pub struct AnimationHost {
    demos: Vec<Box<dyn Animation>>,
    active: DemoKind,
    bounds: Bounds,
}

impl AnimationHost {
    /// Build every demo for `bounds` and start the configured one.
    ///
    /// A configured seed makes the random parts (circle hues, ball
    /// populations) reproducible.
    pub fn new(bounds: Bounds, config: &AppConfig) -> Self {
        let circle_seed = config.seed.unwrap_or_else(rand::random);
        let physics = PhysicsDemo::new(bounds, config.seed)
            .with_parameters(config.gravity, config.bounce);

        // Boxed in DemoKind::ALL order so a kind's index is its slot
        let demos: Vec<Box<dyn Animation>> = vec![
            Box::new(CircleDemo::new(bounds, circle_seed)),
            Box::new(TrajectoryDemo::new(bounds)),
            Box::new(physics),
            Box::new(TheoremDemo::new(bounds)),
            Box::new(MorphDemo::new(bounds)),
        ];

        let mut host = Self {
            demos,
            active: config.initial_tab,
            bounds,
        };
        host.activate(config.initial_tab);
        host
    }

    pub fn active(&self) -> DemoKind {
        self.active
    }

    pub fn demo(&self, kind: DemoKind) -> &dyn Animation {
        self.demos[kind.index()].as_ref()
    }

    pub fn demo_mut(&mut self, kind: DemoKind) -> &mut dyn Animation {
        self.demos[kind.index()].as_mut()
    }

    fn active_demo(&self) -> &dyn Animation {
        self.demo(self.active)
    }

    fn active_demo_mut(&mut self) -> &mut dyn Animation {
        self.demo_mut(self.active)
    }

    /// Stop everything, then resize and start `kind`
    fn activate(&mut self, kind: DemoKind) {
        for demo in &mut self.demos {
            demo.stop();
        }
        self.active = kind;
        let bounds = self.bounds;
        let demo = self.active_demo_mut();
        demo.resize(bounds);
        demo.start();
    }

    /// Make `kind` the active demo; no-op if it already is
    pub fn switch_to(&mut self, kind: DemoKind) {
        if kind == self.active {
            return;
        }
        info!("Switching to {} demo", kind.label());
        self.activate(kind);
    }

    pub fn next(&mut self) {
        self.switch_to(self.active.next());
    }

    pub fn previous(&mut self) {
        self.switch_to(self.active.previous());
    }

    /// Adopt new bounds; inactive demos pick them up on activation
    pub fn resize(&mut self, bounds: Bounds) {
        if !bounds.is_valid() {
            return;
        }
        self.bounds = bounds;
        self.active_demo_mut().resize(bounds);
    }

    /// Advance the active demo by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        self.active_demo_mut().update(dt);
    }

    pub fn draw(&self, batch: &mut ShapeBatch) {
        self.active_demo().draw(batch);
    }

    pub fn reset(&mut self) {
        info!("Resetting {} demo", self.active.label());
        self.active_demo_mut().reset();
    }

    pub fn adjust(&mut self, control: Control, steps: i32) {
        self.active_demo_mut().adjust(control, steps);
    }

    /// Pause or resume the active demo
    pub fn toggle_pause(&mut self) {
        let demo = self.active_demo_mut();
        if demo.is_running() {
            demo.stop();
        } else {
            demo.start();
        }
    }

    pub fn is_running(&self) -> bool {
        self.active_demo().is_running()
    }

    pub fn describe(&self) -> String {
        let status = self.active_demo().describe();
        if self.is_running() {
            status
        } else {
            format!("{} | paused", status)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn config(initial: DemoKind) -> AppConfig {
        AppConfig {
            initial_tab: initial,
            window_width: 800,
            window_height: 600,
            seed: Some(5),
            gravity: None,
            bounce: None,
        }
    }

    fn host(initial: DemoKind) -> AnimationHost {
        AnimationHost::new(Bounds::new(800.0, 600.0), &config(initial))
    }

    fn running_kinds(host: &AnimationHost) -> Vec<DemoKind> {
        DemoKind::ALL
            .into_iter()
            .filter(|kind| host.demo(*kind).is_running())
            .collect()
    }

    #[test]
    fn test_demo_slots_match_kinds() {
        let host = host(DemoKind::Physics);
        for kind in DemoKind::ALL {
            assert_eq!(host.demo(kind).kind(), kind);
        }
    }

    #[test]
    fn test_only_active_demo_runs() {
        let mut host = host(DemoKind::Physics);
        assert_eq!(running_kinds(&host), vec![DemoKind::Physics]);

        host.switch_to(DemoKind::Theorem);
        assert_eq!(host.active(), DemoKind::Theorem);
        assert_eq!(running_kinds(&host), vec![DemoKind::Theorem]);
    }

    #[test]
    fn test_switch_to_active_kind_is_noop() {
        let mut host = host(DemoKind::Circle);
        host.toggle_pause();
        assert!(!host.is_running());

        // Not restarted, because nothing happened
        host.switch_to(DemoKind::Circle);
        assert!(!host.is_running());
    }

    #[test]
    fn test_next_and_previous_wrap() {
        let mut host = host(DemoKind::Transform);
        host.next();
        assert_eq!(host.active(), DemoKind::Circle);
        host.previous();
        assert_eq!(host.active(), DemoKind::Transform);
    }

    #[test]
    fn test_switch_resizes_new_demo() {
        let mut host = host(DemoKind::Circle);
        host.resize(Bounds::new(400.0, 300.0));
        host.switch_to(DemoKind::Physics);

        let physics = host.demo(DemoKind::Physics).describe();
        assert!(physics.starts_with("Physics"));
        // The physics world only learns the bounds on activation
        host.tick(FRAME);
        let mut batch = ShapeBatch::new();
        host.draw(&mut batch);
        for vertex in batch.vertices() {
            assert!(vertex.position[0] <= 400.0 + 1.0);
        }
    }

    #[test]
    fn test_invalid_resize_is_ignored() {
        let mut host = host(DemoKind::Trajectory);
        host.resize(Bounds::new(0.0, 0.0));
        host.switch_to(DemoKind::Circle);
        let mut batch = ShapeBatch::new();
        host.draw(&mut batch);
        assert!(!batch.is_empty());
    }

    #[test]
    fn test_physics_overrides_apply() {
        let mut config = config(DemoKind::Physics);
        config.gravity = Some(4.0);
        config.bounce = Some(0.5);
        let host = AnimationHost::new(Bounds::new(800.0, 600.0), &config);
        let status = host.describe();
        assert!(status.contains("gravity 4.0"));
        assert!(status.contains("bounce 0.50"));
    }

    #[test]
    fn test_paused_describe() {
        let mut host = host(DemoKind::Theorem);
        host.toggle_pause();
        assert!(host.describe().ends_with("paused"));
        host.toggle_pause();
        assert!(!host.describe().ends_with("paused"));
    }

    #[test]
    fn test_draw_only_active() {
        let host = host(DemoKind::Circle);
        let mut only_circle = ShapeBatch::new();
        host.demo(DemoKind::Circle).draw(&mut only_circle);
        let mut batch = ShapeBatch::new();
        host.draw(&mut batch);
        assert_eq!(batch.vertices().len(), only_circle.vertices().len());
    }
}
