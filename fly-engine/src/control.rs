pub mod camera;
pub mod controller;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents a movement direction on the horizontal movement plane.
///
/// The set is closed: every direction a camera can be asked to move in is
/// listed here, and movement along the vertical axis is intentionally not.
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Represents a single camera input produced by a controller.
pub enum Input {
    /// Translate along the camera basis for the elapsed frame time.
    Move(MoveDirection),
    /// Rotate by raw pointer deltas. Positive `dy` looks up.
    Look { dx: f32, dy: f32 },
    /// Narrow (positive) or widen (negative) the field of view.
    Zoom(f32),
}

/// The batch of inputs a controller yields for one frame.
pub type Inputs = Vec<Input>;
