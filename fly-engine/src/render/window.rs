use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::EventLoop;
use winit::monitor::{MonitorHandle, VideoMode};
use winit::window::{CursorGrabMode, Fullscreen, WindowBuilder};

#[derive(Debug)]
/// Represents a window.
pub struct Window {
    /// Inner `winit` window.
    window: winit::window::Window,
}

impl Window {
    #[must_use]
    /// Opens a window matching `descriptor` on the given event loop.
    ///
    /// ## Panics
    ///
    /// Creation fails only for environment reasons (no display server, a
    /// monitor without video modes), which are treated as fatal.
    pub fn new(event_loop: &EventLoop<()>, descriptor: &WindowDescriptor) -> Self {
        let mut builder = WindowBuilder::new()
            .with_title(&descriptor.title)
            .with_resizable(descriptor.resizable);

        builder = match descriptor.mode.fullscreen(event_loop.primary_monitor()) {
            Some(fullscreen) => builder.with_fullscreen(Some(fullscreen)),
            None => {
                let positioned = match descriptor.position {
                    Some([x, y]) => {
                        builder.with_position(LogicalPosition::new(f64::from(x), f64::from(y)))
                    }
                    None => builder,
                };
                positioned.with_inner_size(LogicalSize::new(descriptor.width, descriptor.height))
            }
        };

        let limits = descriptor.resize_constraints.sanitized();
        builder =
            builder.with_min_inner_size(LogicalSize::new(limits.min_width, limits.min_height));
        if limits.has_maximum() {
            builder =
                builder.with_max_inner_size(LogicalSize::new(limits.max_width, limits.max_height));
        }

        let window = builder
            .build(event_loop)
            .expect("failed to open the window");

        if let Some(name) = window.current_monitor().and_then(|monitor| monitor.name()) {
            tracing::info!("Opened window on monitor {name}");
        }

        if descriptor.cursor_locked {
            grab_cursor(&window);
        }
        window.set_cursor_visible(descriptor.cursor_visible);

        Self { window }
    }

    #[must_use]
    #[inline]
    /// Returns the inner size of the window in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    #[must_use]
    /// Returns the aspect ratio of the window surface.
    pub fn aspect(&self) -> f32 {
        let (width, height) = self.size();
        if height == 0 {
            return 1.0;
        }

        #[allow(clippy::cast_precision_loss)]
        let aspect = width as f32 / height as f32;
        aspect
    }

    /// Requests a redraw of the window.
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Confines the cursor to the window, or locks it in place on platforms that
/// only support locking.
fn grab_cursor(window: &winit::window::Window) {
    let mode = if cfg!(target_os = "macos") {
        CursorGrabMode::Locked
    } else {
        CursorGrabMode::Confined
    };

    match window.set_cursor_grab(mode) {
        Ok(()) => {}
        Err(winit::error::ExternalError::NotSupported(_)) => {
            tracing::warn!("Cursor grabbing is unsupported here; mouse look may leave the window");
        }
        Err(error) => tracing::error!("Could not grab the cursor: {error:?}"),
    }
}

/// Picks the monitor's highest-pixel-count video mode, breaking ties on
/// refresh rate.
fn sharpest_video_mode(monitor: &MonitorHandle) -> VideoMode {
    let mode = monitor
        .video_modes()
        .max_by_key(|mode| {
            (
                mode.size().width * mode.size().height,
                mode.refresh_rate_millihertz(),
            )
        })
        .expect("monitor reports no video modes");

    tracing::debug!(
        "Exclusive fullscreen at {}x{}, {} mHz",
        mode.size().width,
        mode.size().height,
        mode.refresh_rate_millihertz()
    );

    mode
}

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents how the window occupies the screen.
pub enum Mode {
    Windowed,
    BorderlessFullscreen,
    Fullscreen,
}

impl Mode {
    /// Resolves the mode into a `winit` fullscreen setting, `None` meaning
    /// windowed.
    fn fullscreen(self, monitor: Option<MonitorHandle>) -> Option<Fullscreen> {
        match self {
            Self::Windowed => None,
            Self::BorderlessFullscreen => Some(Fullscreen::Borderless(monitor)),
            // Exclusive mode does not exist on macOS; borderless is the
            // closest the platform offers.
            Self::Fullscreen if cfg!(target_os = "macos") => Some(Fullscreen::Borderless(monitor)),
            Self::Fullscreen => {
                let monitor = monitor.expect("no primary monitor to go fullscreen on");
                Some(Fullscreen::Exclusive(sharpest_video_mode(&monitor)))
            }
        }
    }
}

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone)]
/// Represents a window descriptor.
pub struct WindowDescriptor {
    pub width: u32,
    pub height: u32,
    pub position: Option<[f32; 2]>,
    pub resize_constraints: ResizeConstraints,
    pub title: String,
    pub resizable: bool,
    pub cursor_visible: bool,
    pub cursor_locked: bool,
    pub mode: Mode,
}

impl Default for WindowDescriptor {
    fn default() -> Self {
        Self {
            title: "freefly".to_string(),
            width: 1280,
            height: 720,
            position: None,
            resize_constraints: ResizeConstraints::default(),
            resizable: true,
            cursor_locked: false,
            cursor_visible: true,
            mode: Mode::Windowed,
        }
    }
}

#[allow(clippy::module_name_repetitions)]
#[derive(Debug, Clone, Copy)]
/// Represents the size limits a resizable window is kept within.
pub struct ResizeConstraints {
    pub min_width: u32,
    pub min_height: u32,
    pub max_width: u32,
    pub max_height: u32,
}

impl Default for ResizeConstraints {
    fn default() -> Self {
        Self {
            min_width: 180,
            min_height: 120,
            max_width: u32::MAX,
            max_height: u32::MAX,
        }
    }
}

impl ResizeConstraints {
    #[must_use]
    /// Returns the constraints with zero minima raised to one pixel and the
    /// maxima raised to at least the minima.
    pub fn sanitized(self) -> Self {
        let min_width = self.min_width.max(1);
        let min_height = self.min_height.max(1);

        if self.max_width < min_width || self.max_height < min_height {
            tracing::warn!(
                "Resize maximum {}x{} cannot hold the minimum {}x{}; raising it",
                self.max_width,
                self.max_height,
                min_width,
                min_height
            );
        }

        Self {
            min_width,
            min_height,
            max_width: self.max_width.max(min_width),
            max_height: self.max_height.max(min_height),
        }
    }

    /// Whether a maximum size is actually in effect.
    fn has_maximum(self) -> bool {
        self.max_width < u32::MAX && self.max_height < u32::MAX
    }
}
