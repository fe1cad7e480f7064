use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use super::presenter::Presenter;
use crate::core::registry::SceneRegistry;
use crate::core::time::FrameTimer;
use crate::error::EngineError;
use crate::input::queue::{self, InputEvent, InputQueue};
use crate::input::state::InputState;
use crate::renderer::camera::ScreenSize;
use crate::renderer::raster::Renderer;

/// Engine configuration, provided by the game before setup.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Title shown by the presentation layer.
    pub title: String,
    /// Horizontal pixels of the render buffer.
    pub resolution_x: u32,
    /// Vertical pixels of the render buffer.
    pub resolution_y: u32,
    /// Size of each rendered pixel on screen.
    pub scale: f32,
    /// Target update+render passes per second.
    pub target_fps: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            title: "ember".to_owned(),
            resolution_x: 320,
            resolution_y: 240,
            scale: 2.0,
            target_fps: 60,
        }
    }
}

impl GameConfig {
    /// Screen dimensions in window pixels (resolution × scale), the size
    /// cameras center their focus in.
    pub fn screen_size(&self) -> ScreenSize {
        ScreenSize {
            width: (self.resolution_x as f32 * self.scale) as i32,
            height: (self.resolution_y as f32 * self.scale) as i32,
        }
    }
}

/// The contract every game fulfills.
pub trait Game: Send {
    /// Engine configuration. Called once, before `init`.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Registers scenes with the registry and selects the active one.
    /// Engine construction fails when no active scene is selected
    /// afterwards, or when this returns an error.
    fn init(&mut self, ctx: &mut EngineContext) -> Result<(), EngineError>;
}

/// Mutable engine state handed to [`Game::init`].
pub struct EngineContext {
    pub scenes: SceneRegistry,
    /// Screen dimensions derived from the game config; scenes built
    /// during setup use this for their cameras.
    pub screen: ScreenSize,
}

/// Owns all per-game state (scene registry, renderer, input, timer and
/// presenter) and runs the update/render pipeline one tick at a time.
///
/// Everything here is mutated from a single logical thread: either the
/// caller's (driving [`tick`](Engine::tick) directly) or the loop thread
/// spawned by [`GameLoop`].
pub struct Engine {
    title: String,
    scenes: SceneRegistry,
    renderer: Renderer,
    timer: FrameTimer,
    input: InputState,
    events: Receiver<InputEvent>,
    input_queue: InputQueue,
    presenter: Box<dyn Presenter>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine").field("title", &self.title).finish_non_exhaustive()
    }
}

impl Engine {
    /// Runs game setup and verifies that an active scene was selected.
    pub fn new(game: &mut dyn Game, presenter: Box<dyn Presenter>) -> Result<Self, EngineError> {
        let config = game.config();

        let mut ctx = EngineContext {
            scenes: SceneRegistry::new(),
            screen: config.screen_size(),
        };
        game.init(&mut ctx)?;
        if ctx.scenes.active().is_none() {
            return Err(EngineError::NoActiveScene);
        }

        let (input_queue, events) = queue::channel();
        Ok(Self {
            title: config.title,
            scenes: ctx.scenes,
            renderer: Renderer::new(config.resolution_x, config.resolution_y),
            timer: FrameTimer::new(config.target_fps),
            input: InputState::new(config.scale),
            events,
            input_queue,
            presenter,
        })
    }

    /// Handle the windowing layer pushes input events through. Clone it
    /// before starting the loop.
    pub fn input_queue(&self) -> InputQueue {
        self.input_queue.clone()
    }

    pub fn scenes(&self) -> &SceneRegistry {
        &self.scenes
    }

    pub fn scenes_mut(&mut self) -> &mut SceneRegistry {
        &mut self.scenes
    }

    /// Runs every pass due at the given monotonic timestamp
    /// (nanoseconds) and reports the pass rate once per second. Returns
    /// the number of passes run.
    pub fn tick(&mut self, now: u64) -> u32 {
        self.timer.advance(now);

        for event in self.events.try_iter() {
            self.input.apply(event);
        }

        let mut passes = 0;
        while let Some(dt) = self.timer.try_pass() {
            self.update(dt);
            self.render();
            passes += 1;
        }

        if let Some(fps) = self.timer.end_second(now) {
            self.presenter.set_title(&format!("{} | {}", self.title, fps));
        }

        passes
    }

    fn update(&mut self, dt: f32) {
        if let Some(scene) = self.scenes.active_mut() {
            scene.update(dt, &self.input);
        }
        self.input.advance();
    }

    fn render(&mut self) {
        self.renderer.clear();
        if let Some(scene) = self.scenes.active() {
            scene.render(&mut self.renderer);
        }
        self.presenter.present(self.renderer.frame());
    }
}

/// Drives an engine on a dedicated thread.
///
/// The loop cycles stopped → running → stopped: `start` spawns the
/// thread and fails when already running; `stop` signals the thread
/// (observed at the top of its next iteration; in-flight passes finish)
/// and joins it, parking the engine for a later restart. A panic inside
/// a pass is caught at the top of the loop, logged, and stops the loop
/// cleanly instead of crashing mid-frame.
pub struct GameLoop {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<Engine>>,
    idle: Option<Engine>,
}

impl GameLoop {
    pub fn new(engine: Engine) -> Self {
        Self {
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
            idle: Some(engine),
        }
    }

    /// True while the loop thread is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// The engine, available while the loop is stopped.
    pub fn engine(&self) -> Option<&Engine> {
        self.idle.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut Engine> {
        self.idle.as_mut()
    }

    /// Spawns the loop thread. Fails when the loop is already running.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.is_running() {
            return Err(EngineError::AlreadyRunning);
        }
        // Reap a thread that stopped on its own (panicked pass).
        if let Some(handle) = self.handle.take() {
            self.idle = handle.join().ok();
        }
        let mut engine = self.idle.take().ok_or(EngineError::AlreadyRunning)?;

        self.running.store(true, Ordering::Release);
        let running = Arc::clone(&self.running);

        self.handle = Some(thread::spawn(move || {
            log::info!("game loop started");
            let start = Instant::now();

            while running.load(Ordering::Acquire) {
                let now = start.elapsed().as_nanos() as u64;
                let tick = panic::catch_unwind(AssertUnwindSafe(|| engine.tick(now)));
                if tick.is_err() {
                    log::error!("update/render pass panicked; stopping game loop");
                    running.store(false, Ordering::Release);
                    break;
                }
                thread::yield_now();
            }

            log::info!("game loop stopped");
            engine
        }));

        Ok(())
    }

    /// Signals the loop thread to exit and blocks until it has. The
    /// engine is parked for inspection or a restart. No-op when already
    /// stopped.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            self.idle = handle.join().ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::presenter::NullPresenter;
    use crate::core::scene::Scene;
    use crate::renderer::queue::SortPolicy;
    use crate::renderer::raster::FrameImage;
    use std::sync::Mutex;

    struct TestGame;

    impl Game for TestGame {
        fn config(&self) -> GameConfig {
            GameConfig {
                title: "test".to_owned(),
                resolution_x: 8,
                resolution_y: 8,
                scale: 1.0,
                target_fps: 60,
            }
        }

        fn init(&mut self, ctx: &mut EngineContext) -> Result<(), EngineError> {
            ctx.scenes
                .add(Scene::new("main", SortPolicy::Default, ctx.screen));
            ctx.scenes.set_active("main");
            Ok(())
        }
    }

    /// Records presented frames and title updates.
    #[derive(Clone, Default)]
    struct RecordingPresenter {
        frames: Arc<Mutex<u32>>,
        titles: Arc<Mutex<Vec<String>>>,
    }

    impl Presenter for RecordingPresenter {
        fn present(&mut self, _frame: &FrameImage) {
            *self.frames.lock().unwrap() += 1;
        }
        fn set_title(&mut self, title: &str) {
            self.titles.lock().unwrap().push(title.to_owned());
        }
    }

    fn engine_with(presenter: &RecordingPresenter) -> Engine {
        Engine::new(&mut TestGame, Box::new(presenter.clone())).unwrap()
    }

    #[test]
    fn construction_requires_an_active_scene() {
        struct NoScene;
        impl Game for NoScene {
            fn init(&mut self, _ctx: &mut EngineContext) -> Result<(), EngineError> {
                Ok(())
            }
        }

        let err = Engine::new(&mut NoScene, Box::new(NullPresenter)).unwrap_err();
        assert!(matches!(err, EngineError::NoActiveScene));
    }

    #[test]
    fn one_pass_per_increment_reports_sixty() {
        let presenter = RecordingPresenter::default();
        let mut engine = engine_with(&presenter);

        engine.tick(0);
        for i in 1..=60u64 {
            let passes = engine.tick(i * 1_000_000_000 / 60);
            assert_eq!(passes, 1, "tick {i}");
        }

        assert_eq!(*presenter.frames.lock().unwrap(), 60);
        assert_eq!(
            presenter.titles.lock().unwrap().as_slice(),
            ["test | 60".to_owned()]
        );
    }

    #[test]
    fn input_events_reach_the_active_scene() {
        let presenter = RecordingPresenter::default();
        let mut engine = engine_with(&presenter);
        let queue = engine.input_queue();

        queue.push(InputEvent::KeyDown { code: 65 });
        engine.tick(0);
        engine.tick(engine_frame_budget());
        // The event was folded in; after the pass the key is still down.
        assert!(engine.input.key(65));
    }

    fn engine_frame_budget() -> u64 {
        FrameTimer::new(60).frame_budget()
    }

    #[test]
    fn loop_start_twice_is_rejected() {
        let presenter = RecordingPresenter::default();
        let mut game_loop = GameLoop::new(engine_with(&presenter));

        game_loop.start().unwrap();
        assert!(game_loop.is_running());
        assert!(matches!(
            game_loop.start(),
            Err(EngineError::AlreadyRunning)
        ));

        game_loop.stop();
        assert!(!game_loop.is_running());
        assert!(game_loop.engine().is_some());
    }

    #[test]
    fn loop_restarts_after_stop() {
        let presenter = RecordingPresenter::default();
        let mut game_loop = GameLoop::new(engine_with(&presenter));

        game_loop.start().unwrap();
        game_loop.stop();
        game_loop.start().unwrap();
        game_loop.stop();
        assert!(game_loop.engine().is_some());
    }
}
