//! Windowed frame loop.
//!
//! Each redraw runs one gravity step against the current cursor position,
//! uploads the particles and draws them. Escape closes the window and Space
//! pauses the simulation.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::SimConfig;
use crate::error::ViewerError;
use crate::gpu::GpuState;
use crate::gravity::GravityStep;
use crate::input::Input;
use crate::particle::Particle;
use crate::time::FrameClock;

const STATS_INTERVAL: Duration = Duration::from_secs(1);

/// Open a window and run the simulation until it is closed.
pub fn run(config: SimConfig) -> Result<(), ViewerError> {
    config.validate()?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

pub struct App {
    config: SimConfig,
    window: Option<Arc<Window>>,
    gpu_state: Option<GpuState>,
    particles: Vec<Particle>,
    step: GravityStep,
    rng: StdRng,
    clock: FrameClock,
    input: Input,
    respawned_since_log: usize,
    last_log: Instant,
    error: Option<ViewerError>,
}

impl App {
    pub fn new(config: SimConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let particles = config.spawner().spawn(config.particle_count, &mut rng);

        let mut clock = FrameClock::new();
        clock.set_fixed_delta(config.fixed_delta);
        clock.set_max_delta(config.max_delta);

        log::info!(
            "Spawned {} particles (gravity {}, size scale {})",
            particles.len(),
            config.gravity,
            config.size_scale
        );

        Self {
            step: config.gravity_step(),
            input: Input::new(config.window.width, config.window.height),
            config,
            window: None,
            gpu_state: None,
            particles,
            rng,
            clock,
            respawned_since_log: 0,
            last_log: Instant::now(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: ViewerError) {
        log::error!("{}", error);
        self.error = Some(error);
        event_loop.exit();
    }

    fn create_window(&self, event_loop: &ActiveEventLoop) -> Result<(Arc<Window>, GpuState), ViewerError> {
        let window_attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu_state = pollster::block_on(GpuState::new(
            window.clone(),
            self.particles.len(),
            self.config.clear_color,
        ))?;
        Ok((window, gpu_state))
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let Some(gpu_state) = &mut self.gpu_state else {
            return;
        };

        let dt = self.clock.tick();
        let stats = self.step.apply(
            &mut self.particles,
            dt,
            self.input.cursor(),
            gpu_state.viewport(),
            &mut self.rng,
        );
        self.respawned_since_log += stats.respawned;

        gpu_state.upload(&self.particles);
        match gpu_state.render() {
            Ok(_) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu_state.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {:?}", e),
        }

        if self.last_log.elapsed() >= STATS_INTERVAL {
            log::debug!(
                "{:.1} fps, {} respawns in the last second",
                self.clock.fps(),
                self.respawned_since_log
            );
            self.respawned_since_log = 0;
            self.last_log = Instant::now();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match self.create_window(event_loop) {
            Ok((window, gpu_state)) => {
                let size = window.inner_size();
                self.input.resized(size.width, size.height);
                self.window = Some(window);
                self.gpu_state = Some(gpu_state);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::KeyboardInput { .. } => {
                if self.input.escape_pressed() {
                    event_loop.exit();
                } else if self.input.space_pressed() {
                    self.clock.toggle_pause();
                    log::info!("{}", if self.clock.is_paused() { "Paused" } else { "Resumed" });
                }
                self.input.clear_pressed();
            }
            WindowEvent::Resized(physical_size) => {
                log::info!("Resized to {}x{}", physical_size.width, physical_size.height);
                if let Some(gpu_state) = &mut self.gpu_state {
                    gpu_state.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
