//! Game controller: single authority over session state and the frame cycle
//!
//! One tick runs the fixed pipeline: input -> spawn -> advance/despawn ->
//! collide -> score/difficulty -> render, then re-arms the scheduler. The
//! controller is generic over the engine, display, and scheduler
//! capabilities, so the whole state machine runs headless under test.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::{check_collision, random_color, random_range};
use super::state::{Asteroid, GamePhase, GameSession, Spaceship};
use crate::consts::*;
use crate::engine::{Engine, EngineError, MeshDesc};
use crate::hud::ScoreDisplay;
use crate::input::{Key, KeysHeld};
use crate::schedule::FrameScheduler;
use crate::tuning::Tuning;

pub struct GameController<E: Engine, D: ScoreDisplay, S: FrameScheduler> {
    engine: E,
    display: D,
    scheduler: S,
    tuning: Tuning,
    rng: Pcg32,
    session: GameSession,
    ship: Spaceship,
    /// Spawn order; iteration-stable so removal is safe mid-tick
    asteroids: Vec<Asteroid>,
    starfield: crate::engine::MeshHandle,
    keys: KeysHeld,
    destroyed: bool,
}

impl<E: Engine, D: ScoreDisplay, S: FrameScheduler> GameController<E, D, S> {
    /// Build the scene (ship, starfield), start a Playing session, and arm
    /// the first frame.
    pub fn new(mut engine: E, mut display: D, mut scheduler: S, tuning: Tuning, seed: u64) -> Self {
        let ship_handle = engine.create_mesh(&MeshDesc::Cone {
            radius: 0.6,
            height: 1.6,
            color: [0.2, 0.8, 1.0],
        });
        engine.add_to_scene(ship_handle);
        let ship = Spaceship::new(ship_handle);
        engine.set_transform(ship_handle, ship.position, Vec3::ZERO);

        let starfield = engine.create_mesh(&MeshDesc::Points {
            count: STARFIELD_COUNT,
            spread: STARFIELD_SPREAD,
        });
        engine.add_to_scene(starfield);

        display.set_score(0);
        display.hide_game_over();
        scheduler.schedule();
        log::info!("session started, seed {seed}");

        let session = GameSession::new(&tuning);
        Self {
            engine,
            display,
            scheduler,
            tuning,
            rng: Pcg32::seed_from_u64(seed),
            session,
            ship,
            asteroids: Vec::new(),
            starfield,
            keys: KeysHeld::new(),
            destroyed: false,
        }
    }

    /// Host keydown handler
    pub fn key_down(&mut self, key: Key) {
        self.keys.key_down(key);
    }

    /// Host keyup handler
    pub fn key_up(&mut self, key: Key) {
        self.keys.key_up(key);
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn ship(&self) -> &Spaceship {
        &self.ship
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// One frame of the update/collision/render cycle. Runs only while
    /// Playing; a no-op after GameOver or destroy.
    pub fn tick(&mut self) -> Result<(), EngineError> {
        if self.destroyed || self.session.is_game_over() {
            return Ok(());
        }

        self.session.elapsed_ticks += 1;
        let now = self.session.elapsed_secs();

        // 1. Input -> ship motion and lean
        let snapshot = self.keys.snapshot();
        self.ship.update(&snapshot);
        self.engine.set_transform(
            self.ship.handle,
            self.ship.position,
            Vec3::new(0.0, 0.0, self.ship.lean),
        );

        // 2. Spawn on the decaying schedule (polled threshold, not a timer)
        if now - self.session.last_spawn_secs > self.session.spawn_interval {
            self.spawn_asteroid();
            self.session.last_spawn_secs = now;
        }

        // 3. Advance and despawn. Scene removal strictly precedes disposal.
        let multiplier = self.session.combined_speed();
        let mut i = 0;
        while i < self.asteroids.len() {
            self.asteroids[i].update(multiplier);
            if self.asteroids[i].is_out_of_play() {
                let gone = self.asteroids.remove(i);
                gone.destroy(&mut self.engine);
            } else {
                let a = &self.asteroids[i];
                self.engine.set_transform(a.handle, a.position, a.rotation);
                i += 1;
            }
        }

        // 4. Collision: first hit ends the run, rest of the frame is skipped
        let ship_box = self.ship.bounding_box();
        for asteroid in &self.asteroids {
            if check_collision(&ship_box, &asteroid.bounding_box()) {
                let score = self.session.score;
                log::info!("collision at t={now:.2}s, final score {score}");
                self.session.phase = GamePhase::GameOver;
                self.scheduler.cancel();
                self.display.show_game_over(score);
                return Ok(());
            }
        }

        // 5-6. Score and difficulty, all derived from elapsed time
        self.session.recompute_derived(&self.tuning);
        self.display.set_score(self.session.score);

        // 7. Render and re-arm
        self.engine.render()?;
        self.scheduler.schedule();
        Ok(())
    }

    fn spawn_asteroid(&mut self) {
        let radius = random_range(&mut self.rng, ASTEROID_MIN_RADIUS, ASTEROID_MAX_RADIUS);
        let color = random_color(&mut self.rng);
        let deform_seed = self.rng.random();
        let handle = self.engine.create_mesh(&MeshDesc::Polyhedron {
            radius,
            detail: 1,
            color,
            deform_seed,
        });
        let asteroid = Asteroid::spawn(&mut self.rng, handle, radius);
        self.engine.add_to_scene(handle);
        self.engine
            .set_transform(handle, asteroid.position, asteroid.rotation);
        log::trace!(
            "spawned asteroid {} at x={:.2} fall={:.3}",
            handle.0,
            asteroid.position.x,
            asteroid.fall_speed
        );
        self.asteroids.push(asteroid);
    }

    /// Full restart: baseline session, cleared field, ship at rest pose,
    /// panel hidden, loop re-armed.
    pub fn reset_game(&mut self) {
        if self.destroyed {
            return;
        }
        for asteroid in self.asteroids.drain(..) {
            asteroid.destroy(&mut self.engine);
        }
        self.session = GameSession::new(&self.tuning);
        self.ship.reset();
        self.engine
            .set_transform(self.ship.handle, self.ship.position, Vec3::ZERO);
        self.keys.clear();
        self.display.hide_game_over();
        self.display.set_score(0);
        self.scheduler.schedule();
        log::info!("session reset");
    }

    /// Tear down the session: cancel the pending frame, detach and dispose
    /// every mesh, release the output surface. Idempotent.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.destroyed = true;
        self.scheduler.cancel();
        for asteroid in self.asteroids.drain(..) {
            asteroid.destroy(&mut self.engine);
        }
        self.engine.remove_from_scene(self.ship.handle);
        self.engine.dispose_mesh(self.ship.handle);
        self.engine.remove_from_scene(self.starfield);
        self.engine.dispose_mesh(self.starfield);
        self.engine.release_surface();
        log::info!("controller destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::HeadlessEngine;
    use crate::schedule::ManualScheduler;

    /// Display stub that records what the controller pushed to it
    #[derive(Debug, Default)]
    struct RecordingDisplay {
        score: u64,
        game_over_shown: bool,
    }

    impl ScoreDisplay for RecordingDisplay {
        fn set_score(&mut self, score: u64) {
            self.score = score;
        }
        fn show_game_over(&mut self, final_score: u64) {
            self.score = final_score;
            self.game_over_shown = true;
        }
        fn hide_game_over(&mut self) {
            self.game_over_shown = false;
        }
    }

    type TestController = GameController<HeadlessEngine, RecordingDisplay, ManualScheduler>;

    fn controller_with(tuning: Tuning) -> TestController {
        GameController::new(
            HeadlessEngine::new(),
            RecordingDisplay::default(),
            ManualScheduler::new(),
            tuning,
            1234,
        )
    }

    /// Tuning that never spawns, for survival scenarios
    fn quiet_tuning() -> Tuning {
        Tuning {
            base_spawn_interval: 1e6,
            ..Tuning::default()
        }
    }

    /// Drop an asteroid right on top of the ship
    fn plant_asteroid_on_ship(c: &mut TestController) {
        let handle = c.engine.create_mesh(&MeshDesc::Polyhedron {
            radius: 0.8,
            detail: 1,
            color: [0.5, 0.5, 0.5],
            deform_seed: 0,
        });
        c.engine.add_to_scene(handle);
        let mut asteroid = Asteroid::spawn(&mut c.rng, handle, 0.8);
        asteroid.position = c.ship.position;
        c.asteroids.push(asteroid);
    }

    #[test]
    fn test_basic_survival_scenario() {
        // 5 simulated seconds, no keys held, nothing spawned in the path
        let mut c = controller_with(quiet_tuning());
        let mut last_score = 0;
        for _ in 0..300 {
            assert!(c.scheduler_mut().take());
            c.tick().unwrap();
            assert!(c.session().score >= last_score, "score must be monotonic");
            last_score = c.session().score;
        }
        assert!(!c.session().is_game_over());
        assert!(c.session().score > 0);
        assert_eq!(c.display.score, c.session().score);
    }

    #[test]
    fn test_forced_collision_scenario() {
        let mut c = controller_with(quiet_tuning());
        plant_asteroid_on_ship(&mut c);

        c.tick().unwrap();
        assert!(c.session().is_game_over());
        assert!(c.display.game_over_shown);
        assert!(!c.scheduler().is_scheduled());

        // Score is frozen on subsequent ticks
        let frozen = c.session().score;
        c.tick().unwrap();
        c.tick().unwrap();
        assert_eq!(c.session().score, frozen);
    }

    #[test]
    fn test_collision_skips_render_that_frame() {
        let mut c = controller_with(quiet_tuning());
        c.tick().unwrap();
        let renders = c.engine.render_count;

        plant_asteroid_on_ship(&mut c);
        c.tick().unwrap();
        assert_eq!(c.engine.render_count, renders);
    }

    #[test]
    fn test_boundary_clamp_scenario() {
        let mut c = controller_with(quiet_tuning());
        c.ship.position.x = c.ship.bounds - 0.01;
        c.key_down(Key::Right);
        for _ in 0..10 {
            c.tick().unwrap();
        }
        assert_eq!(c.ship().position.x, c.ship().bounds);
    }

    #[test]
    fn test_spawn_gating_follows_interval() {
        let mut c = controller_with(Tuning::default());
        // Just before the base interval nothing has spawned
        for _ in 0..89 {
            c.tick().unwrap();
        }
        assert!(c.asteroids().is_empty());
        // Crossing the threshold spawns exactly one
        for _ in 0..5 {
            c.tick().unwrap();
        }
        assert_eq!(c.asteroids().len(), 1);
    }

    #[test]
    fn test_despawn_cleanup() {
        // Long run: everything spawned must either still be above the
        // threshold or be fully detached and disposed
        let mut c = controller_with(Tuning::default());
        for _ in 0..(60 * 60) {
            c.tick().unwrap();
            if c.session().is_game_over() {
                break;
            }
            for asteroid in c.asteroids() {
                assert!(asteroid.position.y >= ASTEROID_DESPAWN_Y);
            }
        }
        // Engine bookkeeping stays consistent: every live mesh is in the
        // scene, nothing disposed is still attached
        assert_eq!(c.engine.live.len(), c.engine.in_scene.len());
    }

    #[test]
    fn test_restart_resets_state() {
        let mut c = controller_with(quiet_tuning());
        for _ in 0..60 {
            c.tick().unwrap();
        }
        plant_asteroid_on_ship(&mut c);
        c.tick().unwrap();
        assert!(c.session().is_game_over());

        c.reset_game();
        assert_eq!(c.session().score, 0);
        assert!(!c.session().is_game_over());
        assert!(c.asteroids().is_empty());
        assert_eq!(c.ship().position, SHIP_START);
        assert_eq!(c.session().elapsed_ticks, 0);
        assert!(!c.display.game_over_shown);
        assert!(c.scheduler().is_scheduled());
    }

    #[test]
    fn test_difficulty_ramps_over_time() {
        let mut c = controller_with(quiet_tuning());
        for _ in 0..(60 * 30) {
            c.tick().unwrap();
        }
        assert!(c.session().game_speed > 1.0);
        assert!(c.session().speed_multiplier > 1.0);
        assert!(c.session().spawn_interval < Tuning::default().base_spawn_interval);
    }

    #[test]
    fn test_destroy_is_idempotent_and_releases_everything() {
        let mut c = controller_with(Tuning::default());
        for _ in 0..200 {
            c.tick().unwrap();
        }
        c.destroy();
        c.destroy();

        assert!(c.engine.in_scene.is_empty());
        assert!(c.engine.live.is_empty());
        assert!(c.engine.surface_released);
        assert!(!c.scheduler().is_scheduled());

        // Terminated: further ticks and resets are no-ops
        c.tick().unwrap();
        c.reset_game();
        assert!(c.asteroids().is_empty());
    }

    #[test]
    fn test_render_failure_propagates() {
        let mut c = controller_with(quiet_tuning());
        c.engine.release_surface();
        assert!(c.tick().is_err());
    }
}
