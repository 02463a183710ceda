use glam::{Mat4, Vec3};

use super::super::{Input, MoveDirection};
use super::Camera;

/// Keeps `forward` away from the world-up pole, where the
/// `forward x world_up` cross product degenerates to zero.
const PITCH_LIMIT: f32 = 89.0;

const MIN_FOV_Y: f32 = 1.0;
const MAX_FOV_Y: f32 = 45.0;

#[derive(Copy, Clone, Debug)]
/// Represents a free-fly camera.
///
/// Orientation is a pair of Euler angles in degrees: yaw about the world-up
/// axis, pitch above the horizontal plane. The orthonormal basis is derived
/// from them and recomputed by every mutation that touches the angles, so
/// readers always observe a basis consistent with the stored angles.
pub struct FreeFly {
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    speed: f32,
    sensitivity: f32,
    fov_y: f32,
}

impl FreeFly {
    const DEFAULT_YAW: f32 = -90.0;
    const DEFAULT_PITCH: f32 = 0.0;
    const DEFAULT_SPEED: f32 = 5.0;
    const DEFAULT_SENSITIVITY: f32 = 0.1;

    #[must_use]
    /// Creates a camera at `position` with the given orientation.
    ///
    /// The basis is computed before the value is returned, so the camera is
    /// valid from its first read.
    pub fn new(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            forward: Vec3::NEG_Z,
            right: Vec3::X,
            up: world_up,
            world_up,
            yaw,
            pitch,
            speed: Self::DEFAULT_SPEED,
            sensitivity: Self::DEFAULT_SENSITIVITY,
            fov_y: MAX_FOV_Y,
        };
        camera.update_basis();
        camera
    }

    #[must_use]
    /// Creates a camera at `position` with the default orientation: world up
    /// is +Y and yaw is -90 degrees, so the camera faces -Z.
    pub fn with_position(position: Vec3) -> Self {
        Self::new(position, Vec3::Y, Self::DEFAULT_YAW, Self::DEFAULT_PITCH)
    }

    #[must_use]
    pub const fn yaw(&self) -> f32 {
        self.yaw
    }

    #[must_use]
    pub const fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Translates the position along the basis for `delta_seconds` of travel
    /// at the configured speed. Orientation is untouched, so the basis needs
    /// no recomputation; a zero time delta moves nothing.
    pub fn translate(&mut self, direction: MoveDirection, delta_seconds: f32) {
        let step = self.speed * delta_seconds;

        match direction {
            MoveDirection::Forward => self.position += self.forward * step,
            MoveDirection::Backward => self.position -= self.forward * step,
            MoveDirection::Left => self.position -= self.right * step,
            MoveDirection::Right => self.position += self.right * step,
        }
    }

    /// Applies pointer deltas to yaw and pitch, scaled by the sensitivity.
    ///
    /// With `constrain_pitch` the pitch is clamped to 89 degrees either side
    /// of the horizon. The basis is recomputed before returning, so it is
    /// orthonormal by the time any caller can read it.
    pub fn look(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.sensitivity;
        self.pitch += dy * self.sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }

        self.update_basis();
    }

    /// Narrows the field of view by `scroll` degrees, keeping it within
    /// [1, 45]. A projection parameter only; the basis is untouched.
    pub fn zoom_by(&mut self, scroll: f32) {
        self.fov_y = (self.fov_y - scroll).clamp(MIN_FOV_Y, MAX_FOV_Y);
    }

    fn update_basis(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.forward = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        // The ordering matters: `right` comes from forward x world_up, and
        // `up` is re-derived from right x forward rather than reused from
        // world_up, so it stays orthogonal to forward as pitch changes.
        self.right = self.forward.cross(self.world_up).normalize();
        self.up = self.right.cross(self.forward).normalize();
    }
}

impl Default for FreeFly {
    fn default() -> Self {
        Self::with_position(Vec3::ZERO)
    }
}

impl Camera for FreeFly {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }

    fn right(&self) -> Vec3 {
        self.right
    }

    fn up(&self) -> Vec3 {
        self.up
    }

    fn fov_y(&self) -> f32 {
        self.fov_y
    }

    fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward, self.up)
    }

    fn process_inputs(&mut self, inputs: &[Input], delta_seconds: f32) {
        for input in inputs {
            match *input {
                Input::Move(direction) => self.translate(direction, delta_seconds),
                Input::Look { dx, dy } => self.look(dx, dy, true),
                Input::Zoom(amount) => self.zoom_by(amount),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOLERANCE: f32 = 1e-5;

    #[test]
    fn basis_stays_orthonormal_across_orientations() {
        for yaw in (-360..=360).step_by(24) {
            for pitch in (-88..=88).step_by(8) {
                #[allow(clippy::cast_precision_loss)]
                let camera = FreeFly::new(Vec3::ZERO, Vec3::Y, yaw as f32, pitch as f32);

                assert_abs_diff_eq!(camera.forward().length(), 1.0, epsilon = TOLERANCE);
                assert_abs_diff_eq!(camera.right().length(), 1.0, epsilon = TOLERANCE);
                assert_abs_diff_eq!(camera.up().length(), 1.0, epsilon = TOLERANCE);

                assert_abs_diff_eq!(
                    camera.forward().dot(camera.right()),
                    0.0,
                    epsilon = TOLERANCE
                );
                assert_abs_diff_eq!(camera.forward().dot(camera.up()), 0.0, epsilon = TOLERANCE);
                assert_abs_diff_eq!(camera.right().dot(camera.up()), 0.0, epsilon = TOLERANCE);
            }
        }
    }

    #[test]
    fn default_orientation_faces_negative_z() {
        let camera = FreeFly::with_position(Vec3::new(0.0, 0.0, 3.0));

        assert_abs_diff_eq!(camera.forward().x, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(camera.forward().y, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(camera.forward().z, -1.0, epsilon = TOLERANCE);

        assert_abs_diff_eq!(camera.right().x, 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(camera.right().y, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(camera.right().z, 0.0, epsilon = TOLERANCE);

        assert_abs_diff_eq!(camera.up().x, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(camera.up().y, 1.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(camera.up().z, 0.0, epsilon = TOLERANCE);
    }

    #[test]
    fn look_rotates_the_basis() {
        let mut camera = FreeFly::with_position(Vec3::new(0.0, 0.0, 3.0));

        camera.look(90.0, 0.0, true);

        // 90 units of pointer travel at the default 0.1 sensitivity.
        assert_abs_diff_eq!(camera.yaw(), -81.0, epsilon = TOLERANCE);
        assert!(camera.forward().x > 0.0);
        assert_abs_diff_eq!(
            camera.forward().x,
            (-81.0_f32).to_radians().cos(),
            epsilon = TOLERANCE
        );
    }

    #[test]
    fn pitch_clamp_is_a_hard_boundary() {
        let mut camera = FreeFly::default();

        camera.look(0.0, 10_000.0, true);
        assert_eq!(camera.pitch(), 89.0);

        camera.look(0.0, -100_000.0, true);
        assert_eq!(camera.pitch(), -89.0);
    }

    #[test]
    fn unconstrained_look_skips_the_clamp() {
        let mut camera = FreeFly::default();

        camera.look(0.0, 1_000.0, false);

        assert_abs_diff_eq!(camera.pitch(), 100.0, epsilon = TOLERANCE);
    }

    #[test]
    fn fov_stays_within_bounds() {
        let mut camera = FreeFly::default();

        camera.zoom_by(50.0);
        assert_eq!(camera.fov_y(), 1.0);

        camera.zoom_by(-100.0);
        assert_eq!(camera.fov_y(), 45.0);

        camera.zoom_by(3.5);
        assert_abs_diff_eq!(camera.fov_y(), 41.5, epsilon = TOLERANCE);
    }

    #[test]
    fn zoom_leaves_the_basis_untouched() {
        let mut camera = FreeFly::default();
        let forward = camera.forward();

        camera.zoom_by(20.0);

        assert_eq!(camera.forward(), forward);
    }

    #[test]
    fn opposite_moves_round_trip_the_position() {
        let mut camera = FreeFly::with_position(Vec3::new(1.0, 2.0, 3.0));
        camera.look(37.0, 11.0, true);
        let start = camera.position();

        camera.translate(MoveDirection::Forward, 0.25);
        camera.translate(MoveDirection::Backward, 0.25);
        camera.translate(MoveDirection::Left, 0.125);
        camera.translate(MoveDirection::Right, 0.125);

        assert_abs_diff_eq!(camera.position().x, start.x, epsilon = TOLERANCE);
        assert_abs_diff_eq!(camera.position().y, start.y, epsilon = TOLERANCE);
        assert_abs_diff_eq!(camera.position().z, start.z, epsilon = TOLERANCE);
    }

    #[test]
    fn zero_delta_moves_are_no_ops() {
        let mut camera = FreeFly::with_position(Vec3::new(4.0, 5.0, 6.0));
        let start = camera.position();

        camera.translate(MoveDirection::Forward, 0.0);
        camera.translate(MoveDirection::Left, 0.0);

        assert_eq!(camera.position(), start);
    }

    #[test]
    fn movement_leaves_orientation_untouched() {
        let mut camera = FreeFly::default();
        let forward = camera.forward();

        camera.translate(MoveDirection::Forward, 1.0);
        camera.translate(MoveDirection::Right, 1.0);

        assert_eq!(camera.yaw(), FreeFly::DEFAULT_YAW);
        assert_eq!(camera.pitch(), FreeFly::DEFAULT_PITCH);
        assert_eq!(camera.forward(), forward);
    }

    #[test]
    fn view_matrix_maps_eye_to_origin() {
        let camera = FreeFly::new(Vec3::new(2.0, -1.0, 5.0), Vec3::Y, 33.0, -12.0);
        let view = camera.view_matrix();

        let eye = view.transform_point3(camera.position());
        assert_abs_diff_eq!(eye.x, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(eye.y, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(eye.z, 0.0, epsilon = TOLERANCE);

        // One unit ahead of the eye lands one unit down -Z in eye space.
        let ahead = view.transform_point3(camera.position() + camera.forward());
        assert_abs_diff_eq!(ahead.x, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(ahead.y, 0.0, epsilon = TOLERANCE);
        assert_abs_diff_eq!(ahead.z, -1.0, epsilon = TOLERANCE);
    }

    #[test]
    fn process_inputs_dispatches_every_input() {
        let mut camera = FreeFly::default();
        let start = camera.position();

        camera.process_inputs(
            &[
                Input::Move(MoveDirection::Forward),
                Input::Look { dx: 10.0, dy: 0.0 },
                Input::Zoom(5.0),
            ],
            0.5,
        );

        assert!(camera.position() != start);
        assert_abs_diff_eq!(camera.yaw(), -89.0, epsilon = TOLERANCE);
        assert_eq!(camera.fov_y(), 40.0);
    }
}
