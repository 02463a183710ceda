pub mod free_fly;

use glam::{Mat4, Vec3};

/// Represents a camera.
///
/// It is expected that all basis vectors are normalized and mutually
/// orthogonal whenever they are read.
pub trait Camera {
    /// Returns the position of the camera.
    fn position(&self) -> Vec3;
    /// Returns the direction the camera is facing.
    fn forward(&self) -> Vec3;
    /// Returns the right vector of the camera.
    fn right(&self) -> Vec3;
    /// Returns the up vector of the camera.
    fn up(&self) -> Vec3;

    /// Returns the vertical field of view in degrees.
    ///
    /// This is a projection parameter only; it never influences the basis.
    fn fov_y(&self) -> f32;

    /// Returns the transform mapping world coordinates into eye space.
    fn view_matrix(&self) -> Mat4;

    /// Processes the inputs and updates the camera.
    fn process_inputs(&mut self, inputs: &[super::Input], delta_seconds: f32);
}
