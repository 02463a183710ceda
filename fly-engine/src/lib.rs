#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod control;
pub mod frame;
pub mod render;

use control::camera::Camera;
use control::controller::Controller;
use frame::FrameClock;
use render::window::{Window, WindowDescriptor};
use render::RenderFrame;

/// Owns the window, the camera, and the input controllers, and drives them
/// through the event loop.
///
/// Each frame runs in program order: tick the clock, fetch the inputs every
/// controller accumulated, apply them to the camera, then hand the resulting
/// [`RenderFrame`] to the frame callback.
pub struct FlyApp {
    window: Window,
    camera: Box<dyn Camera>,
    controllers: Vec<Box<dyn Controller>>,
    event_loop: winit::event_loop::EventLoop<()>,
}

impl FlyApp {
    #[must_use]
    pub fn new(config: FlyAppConfig) -> Self {
        let event_loop = winit::event_loop::EventLoop::new();
        let window = Window::new(&event_loop, &config.window);

        tracing::debug!("Successfully initialized");

        Self {
            window,
            camera: config.camera,
            controllers: config.controllers,
            event_loop,
        }
    }

    /// Runs the event loop until the window closes or Escape is pressed.
    ///
    /// `on_frame` is invoked once per frame with the camera's current view
    /// transform and projection parameters.
    pub fn run<F>(self, mut on_frame: F)
    where
        F: FnMut(&RenderFrame) + 'static,
    {
        let Self {
            window,
            mut camera,
            mut controllers,
            event_loop,
        } = self;

        let mut clock = FrameClock::new();

        event_loop.run(move |event, _, control_flow| {
            for controller in &mut controllers {
                controller.handle_event(&event);
            }

            match event {
                winit::event::Event::WindowEvent {
                    event: winit::event::WindowEvent::CloseRequested,
                    ..
                } => {
                    *control_flow = winit::event_loop::ControlFlow::Exit;
                }
                winit::event::Event::WindowEvent {
                    event:
                        winit::event::WindowEvent::KeyboardInput {
                            input:
                                winit::event::KeyboardInput {
                                    state: winit::event::ElementState::Pressed,
                                    virtual_keycode: Some(winit::event::VirtualKeyCode::Escape),
                                    ..
                                },
                            ..
                        },
                    ..
                } => {
                    *control_flow = winit::event_loop::ControlFlow::Exit;
                }
                winit::event::Event::MainEventsCleared => {
                    let delta_seconds = clock.tick();

                    let inputs = controllers
                        .iter_mut()
                        .flat_map(|controller| controller.fetch_input())
                        .collect::<Vec<_>>();
                    camera.process_inputs(&inputs, delta_seconds);

                    let render_frame = RenderFrame {
                        view: camera.view_matrix(),
                        eye: camera.position(),
                        fov_y: camera.fov_y(),
                        aspect: window.aspect(),
                    };
                    on_frame(&render_frame);

                    window.request_redraw();
                }
                _ => {}
            }
        });
    }
}

/// Represents the configuration of a [`FlyApp`].
pub struct FlyAppConfig {
    pub window: WindowDescriptor,
    pub camera: Box<dyn Camera>,
    pub controllers: Vec<Box<dyn Controller>>,
}
