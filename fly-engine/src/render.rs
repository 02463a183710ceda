pub mod window;

#[derive(Copy, Clone, Debug)]
/// Represents what the render layer consumes once per frame.
///
/// The projection matrix is deliberately absent: it is a pure function of
/// `fov_y`, `aspect`, and the near/far planes the render layer owns.
pub struct RenderFrame {
    /// World-to-eye transform for the current camera state.
    pub view: glam::Mat4,
    /// Eye position in world space.
    pub eye: glam::Vec3,
    /// Vertical field of view, in degrees.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
}
