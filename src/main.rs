//! Vector Rocks entry point
//!
//! Opens the window, runs the event loop, and drives one simulation step
//! plus one render per frame.

use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use vector_rocks::Settings;
use vector_rocks::consts::{SCREEN_H, SCREEN_W};
use vector_rocks::input::InputState;
use vector_rocks::renderer::{OverlayTextBuilder, RenderState, colors, shapes};
use vector_rocks::sim::{GamePhase, GameState};

/// Clamp for the frame delta so a dragged window or debugger pause does
/// not teleport everything across the screen
const MAX_FRAME_DT: f32 = 0.1;

struct Game {
    window: Arc<Window>,
    render_state: RenderState,
    state: GameState,
    input: InputState,
    settings: Settings,
    last_frame: Instant,
    /// Exponentially smoothed frames per second
    fps: f32,
}

impl Game {
    fn new(window: Arc<Window>, settings: Settings) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .context("no suitable GPU adapter")?;
        log::info!("using adapter: {:?}", adapter.get_info().name);

        let render_state = pollster::block_on(RenderState::new(
            surface,
            &adapter,
            size.width.max(1),
            size.height.max(1),
            settings.vsync,
        ))?;

        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        log::info!("game initialized with seed {seed}");

        Ok(Self {
            window,
            render_state,
            state: GameState::new(seed),
            input: InputState::new(),
            settings,
            last_frame: Instant::now(),
            fps: 0.0,
        })
    }

    /// One simulation step plus one render
    fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame = now;
        if dt > 0.0 {
            let inst = 1.0 / dt;
            self.fps = if self.fps == 0.0 {
                inst
            } else {
                self.fps * 0.95 + inst * 0.05
            };
        }

        let frame_input = self.input.frame_input();
        self.state.step(&frame_input, dt);
        self.input.end_frame();

        let mut lines = Vec::new();
        for entity in &self.state.entities {
            shapes::entity_lines(entity, &mut lines);
        }

        let overlay = self.build_hud();

        match self
            .render_state
            .render(&lines, &overlay.vertices, &overlay.indices)
        {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = self.render_state.size;
                self.render_state.resize(w, h);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory");
            }
            Err(e) => log::warn!("surface error: {e:?}"),
        }

        self.window.request_redraw();
    }

    fn build_hud(&self) -> OverlayTextBuilder {
        let mut hud = OverlayTextBuilder::new(SCREEN_W, SCREEN_H);
        hud.add_text(
            10.0,
            10.0,
            &format!("LIVES {}", self.state.lives),
            2.0,
            colors::HUD,
        );
        hud.add_text(
            10.0,
            30.0,
            &format!("ROUND {}", self.state.round),
            2.0,
            colors::HUD,
        );
        if self.settings.show_fps {
            hud.add_text(
                SCREEN_W - 70.0,
                10.0,
                &format!("{:3.0} FPS", self.fps),
                1.0,
                colors::HUD,
            );
        }
        if self.state.phase == GamePhase::GameOver {
            hud.add_text_centered(
                SCREEN_W / 2.0,
                SCREEN_H / 2.0 - 16.0,
                "GAME OVER",
                4.0,
                colors::BANNER,
            );
        }
        hud
    }
}

#[derive(Default)]
struct App {
    game: Option<Game>,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.game.is_some() {
            return;
        }
        let attrs = Window::default_attributes()
            .with_title("Vector Rocks")
            .with_inner_size(LogicalSize::new(SCREEN_W as f64, SCREEN_H as f64))
            .with_resizable(false);

        let window = match event_loop.create_window(attrs) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        match Game::new(window, Settings::load()) {
            Ok(game) => self.game = Some(game),
            Err(err) => {
                log::error!("failed to initialize renderer: {err:#}");
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let Some(game) = &mut self.game else {
            return;
        };
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    if code == KeyCode::Escape {
                        event_loop.exit();
                        return;
                    }
                    game.input.process_keyboard(code, event.state, event.repeat);
                }
            }
            WindowEvent::Resized(size) => {
                game.render_state.resize(size.width, size.height);
            }
            WindowEvent::RedrawRequested => game.frame(),
            _ => {}
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::default();
    event_loop.run_app(&mut app)?;
    Ok(())
}
