//! Desktop game loop on top of winit

use std::sync::Arc;
use std::thread;

use game_core::{
    render_frame, step, Config, Events, LoopAction, LoopFsm, LoopState, Session,
};
use gilrs::Gilrs;
use snafu::ResultExt;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Fullscreen, Window, WindowId};

use crate::controllers::Controllers;
use crate::cue;
use crate::error::{EventLoopSnafu, StartupError, WindowSnafu};
use crate::input::{keyboard_input, KeyboardState, Keymap};
use crate::mappings::MappingDb;
use crate::renderer::{Renderer, Screen};
use crate::settings::Settings;
use crate::text::TextFont;

/// Resources acquired before the event loop starts running
struct Preloaded {
    gilrs: Gilrs,
    font: TextFont,
}

/// Everything acquired for the session, in the order font, controller
/// subsystem, window, renderer. Fields are declared the other way round
/// so they drop in reverse. Opened pads are ids inside the controller
/// subsystem and hold no handle of their own.
struct Platform {
    renderer: Renderer,
    window: Arc<Window>,
    controllers: Controllers,
    font: TextFont,
}

pub struct App {
    settings: Settings,
    config: Config,
    keymap: Keymap,
    fsm: LoopFsm,
    preloaded: Option<Preloaded>,
    platform: Option<Platform>,
    session: Session,
    events: Events,
    keyboard: KeyboardState,
    quit_requested: bool,
}

impl App {
    pub fn new(settings: Settings, config: Config) -> Self {
        let session = Session::new(&config);
        Self {
            settings,
            config,
            keymap: Keymap::default(),
            fsm: LoopFsm::new(),
            preloaded: None,
            platform: None,
            session,
            events: Events::new(),
            keyboard: KeyboardState::new(),
            quit_requested: false,
        }
    }

    /// Load the font and controller mappings, then start the controller subsystem
    fn preload(&mut self) -> Result<(), StartupError> {
        let font = TextFont::load(&self.settings.font_path, self.settings.font_size)?;
        let mappings = MappingDb::load(&self.settings.mapping_path)?;
        let gilrs = Controllers::init(&mappings)?;
        self.preloaded = Some(Preloaded { gilrs, font });
        Ok(())
    }

    /// Create the window and renderer, then open the controllers
    fn acquire(
        &self,
        event_loop: &ActiveEventLoop,
        preloaded: Preloaded,
    ) -> Result<Platform, StartupError> {
        let Preloaded { gilrs, font } = preloaded;

        let width = self.config.field_width as u32;
        let height = self.config.field_height as u32;
        let mut attributes = Window::default_attributes()
            .with_title(self.settings.window_title.clone())
            .with_inner_size(PhysicalSize::new(width, height));
        if self.settings.fullscreen {
            attributes = attributes.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        let window = Arc::new(event_loop.create_window(attributes).context(WindowSnafu)?);

        let renderer = Renderer::new(window.clone(), width, height)?;
        let controllers = Controllers::open(gilrs, self.settings.required_controllers)?;

        Ok(Platform {
            renderer,
            window,
            controllers,
            font,
        })
    }

    /// Record a startup failure and stop the loop
    fn fail(&mut self, err: StartupError) {
        log::error!("{}", err);
        self.fsm.transition(LoopAction::AcquireFailed);
    }

    /// Input, simulation, cues and drawing for one frame
    fn run_frame(&mut self) {
        let Some(platform) = self.platform.as_mut() else {
            return;
        };

        let mut input = keyboard_input(&self.keyboard, &self.keymap);
        platform.controllers.fill_input(&mut input);

        step(&mut self.session, &input, &self.config, &mut self.events);

        cue::ring_stdout(self.events.cue_count());
        if self.events.scored() {
            log::info!(
                "Score {} - {}",
                self.session.score.left,
                self.session.score.right
            );
            thread::sleep(self.config.score_pause);
        }

        let mut screen = Screen {
            renderer: &mut platform.renderer,
            font: &platform.font,
        };
        render_frame(&mut screen, &self.session, &self.config);
        thread::sleep(self.config.frame_delay);
    }

    /// Release everything in reverse order of acquisition
    fn release(&mut self) {
        if let Some(platform) = self.platform.take() {
            log::debug!("Closing window {:?}", platform.window.id());
        }
        self.preloaded = None;
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.fsm.state() != LoopState::Initializing {
            return;
        }
        let Some(preloaded) = self.preloaded.take() else {
            return;
        };

        match self.acquire(event_loop, preloaded) {
            Ok(platform) => {
                self.platform = Some(platform);
                self.fsm.transition(LoopAction::Acquired);
                log::info!("Game started");
            }
            Err(err) => {
                self.fail(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.quit_requested = true;
            }
            WindowEvent::KeyboardInput { event, .. } => {
                self.keyboard.handle_key(event.physical_key, event.state);
            }
            WindowEvent::Focused(false) => {
                self.keyboard.release_all();
            }
            WindowEvent::Resized(size) => {
                if let Some(platform) = self.platform.as_mut() {
                    platform.renderer.resize(size.width, size.height);
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.fsm.is_finished() {
            event_loop.exit();
            return;
        }
        if !self.fsm.is_running() {
            return;
        }

        // Every pending event has been delivered by now
        if self.quit_requested {
            self.fsm.transition(LoopAction::Quit);
            log::info!("Quit requested, shutting down");
            event_loop.exit();
            return;
        }

        self.run_frame();
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.release();
    }
}

/// Acquire everything, run the loop until quit and return the process exit status
pub fn run(settings: Settings, config: Config) -> u8 {
    let event_loop = match EventLoop::new().context(EventLoopSnafu) {
        Ok(event_loop) => event_loop,
        Err(err) => {
            log::error!("{}", err);
            return 1;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(settings, config);
    if let Err(err) = app.preload() {
        app.fail(err);
        return app.fsm.exit_code().unwrap_or(1);
    }

    if let Err(err) = event_loop.run_app(&mut app) {
        log::error!("Event loop failed: {}", err);
        return 1;
    }
    app.release();

    app.fsm.exit_code().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn app_with_font(path: &str) -> App {
        let settings = Settings {
            font_path: PathBuf::from(path),
            ..Settings::default()
        };
        App::new(settings, Config::new())
    }

    #[test]
    fn test_new_app_starts_initializing() {
        let app = app_with_font("Cantarell-Bold.ttf");
        assert_eq!(app.fsm.state(), LoopState::Initializing);
        assert!(app.platform.is_none());
        assert_eq!(app.session.score.left, 0);
    }

    #[test]
    fn test_missing_font_fails_startup() {
        let mut app = app_with_font("definitely/not/here.ttf");
        let err = app.preload().err().expect("preload must fail");
        assert!(matches!(err, StartupError::FontRead { .. }));

        app.fail(err);
        assert_eq!(app.fsm.state(), LoopState::Failed);
        assert_eq!(app.fsm.exit_code(), Some(1));
        assert!(app.preloaded.is_none());
    }

    #[test]
    fn test_frame_without_platform_is_a_no_op() {
        let mut app = app_with_font("Cantarell-Bold.ttf");
        let before = app.session.ball.rect;
        app.run_frame();
        assert_eq!(app.session.ball.rect, before);
    }
}
