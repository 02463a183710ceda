//! Free-fly camera viewer.

// Hide console window on Windows in release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use fly_engine::FlyApp;
use glam::Mat4;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(if cfg!(debug_assertions) {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        })
        .init();

    let camera = fly_engine::control::camera::free_fly::FreeFly::with_position(glam::Vec3::new(
        0.0, 0.0, 3.0,
    ));
    let keyboard = fly_engine::control::controller::keyboard::Keyboard::default();
    let mouse = fly_engine::control::controller::mouse::Mouse::default();
    let scroll = fly_engine::control::controller::scroll::Scroll::default();

    let config = fly_engine::FlyAppConfig {
        window: fly_engine::render::window::WindowDescriptor {
            width: 1024,
            height: 720,
            title: "Free Fly".to_string(),
            cursor_visible: false,
            cursor_locked: true,
            position: None,
            resizable: false,
            mode: fly_engine::render::window::Mode::Windowed,
            resize_constraints: fly_engine::render::window::ResizeConstraints::default(),
        },
        camera: Box::new(camera),
        controllers: vec![Box::new(keyboard), Box::new(mouse), Box::new(scroll)],
    };

    let app = FlyApp::new(config);

    app.run(|frame| {
        // The render layer owns the projection: zoom and aspect in, matrix out.
        let projection = Mat4::perspective_rh(frame.fov_y.to_radians(), frame.aspect, 0.1, 100.0);
        let view_projection = projection * frame.view;

        tracing::trace!(
            "eye: {:?}, view-projection x-row: {:?}",
            frame.eye,
            view_projection.row(0)
        );
    });
}
