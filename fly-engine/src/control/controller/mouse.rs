use super::super::{Input, Inputs};

#[derive(Copy, Clone, Debug, Default)]
/// Represents the accumulated motion of a pointing device.
///
/// Movements are stacked into an inner accumulator and drained once per
/// frame by `fetch_input`.
pub struct Mouse {
    delta: (f32, f32),
}

impl Mouse {
    /// Screen deltas grow downwards while pitch grows upwards, so the
    /// vertical axis flips here rather than in the camera.
    fn accumulate(&mut self, dx: f32, dy: f32) {
        self.delta.0 += dx;
        self.delta.1 -= dy;
    }
}

impl super::Controller for Mouse {
    fn handle_event(&mut self, event: &winit::event::Event<'_, ()>) {
        if let winit::event::Event::DeviceEvent {
            event:
                winit::event::DeviceEvent::MouseMotion {
                    delta: (delta_x, delta_y),
                },
            ..
        } = event
        {
            #[allow(clippy::cast_possible_truncation)]
            {
                self.accumulate(*delta_x as f32, *delta_y as f32);
            }
        }
    }

    #[must_use]
    fn fetch_input(&mut self) -> Inputs {
        let (dx, dy) = core::mem::take(&mut self.delta);

        let mut inputs = Vec::with_capacity(1);
        if dx != 0.0 || dy != 0.0 {
            inputs.push(Input::Look { dx, dy });
        }

        inputs
    }
}
