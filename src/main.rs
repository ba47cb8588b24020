use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use ocean_viewer::camera::{CameraController, CameraSettings};
use ocean_viewer::cli::{Cli, OceanConfig};
use ocean_viewer::core::{FpsCounter, InputAdapter, InputOutcome};
use ocean_viewer::frame::FramePacer;
use ocean_viewer::traits::Viewpoint;

const REPORT_INTERVAL: f32 = 1.0;

struct App {
    config: OceanConfig,
    window: Option<Window>,
    camera: CameraController,
    input: InputAdapter,
    pacer: FramePacer,
    fps: FpsCounter,
}

impl App {
    fn new(config: OceanConfig) -> Self {
        let start = Instant::now();
        let camera = CameraController::new(
            CameraSettings {
                layout: config.keyboard,
                mode: config.translation_mode,
                mouse: (
                    config.window.width as f32 / 2.0,
                    config.window.height as f32 / 2.0,
                ),
                ..CameraSettings::default()
            },
            start,
        );

        Self {
            config,
            window: None,
            camera,
            input: InputAdapter::new(),
            pacer: FramePacer::new(config.frame_interval(), start),
            fps: FpsCounter::new(REPORT_INTERVAL),
        }
    }

    fn redraw(&mut self) {
        let frame = self.pacer.begin(Instant::now());
        self.camera.integrate(frame.now);

        log::trace!("frame {} view {:?}", frame.number, self.camera.view_matrix());

        if let Some(fps) = self.fps.frame(frame.delta) {
            log::debug!(
                "{:.1} fps, eye {:?}, target {:?}",
                fps,
                self.camera.position(),
                self.camera.sight_target()
            );
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let size = PhysicalSize::new(self.config.window.width, self.config.window.height);
        match event_loop.create_window(
            Window::default_attributes()
                .with_title("Ocean")
                .with_inner_size(size),
        ) {
            Ok(window) => {
                self.window = Some(window);
                self.pacer.cancel_request();
            }
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::RedrawRequested => {
                self.redraw();
                return;
            }
            WindowEvent::Occluded(false) => self.pacer.cancel_request(),
            _ => {}
        }

        if self.input.process_event(&mut self.camera, &event) == InputOutcome::Exit {
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            if self.pacer.should_request(Instant::now()) {
                window.request_redraw();
            }
        }

        // an unserved redraw (occluded or minimized window) waits for events
        match self.pacer.wake_at() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Wait),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = OceanConfig::from(Cli::parse());
    log::info!(
        "{}x{} window at {} fps, {:?} keyboard",
        config.window.width,
        config.window.height,
        config.fps,
        config.keyboard
    );
    log::info!("simulation: {:?}", config.simulation);

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let mut app = App::new(config);

    log::info!("{:?} movement", app.camera.mode());
    let [forward, backward, left, right] = app.camera.layout().keys();
    log::info!(
        "Controls: {forward}/{backward}/{left}/{right} to move, drag with left mouse to look, Escape to quit"
    );
    event_loop.run_app(&mut app).context("event loop terminated abnormally")?;

    Ok(())
}
