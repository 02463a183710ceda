use super::super::{Input, Inputs};

#[derive(Copy, Clone, Debug, Default)]
/// Represents accumulated scroll-wheel motion.
pub struct Scroll(f32);

impl Scroll {
    /// Pixel deltas are much finer grained than line deltas; scale them so
    /// both wheel kinds zoom at a comparable rate.
    const PIXELS_PER_LINE: f32 = 20.0;

    fn accumulate(&mut self, amount: f32) {
        self.0 += amount;
    }
}

impl super::Controller for Scroll {
    fn handle_event(&mut self, event: &winit::event::Event<'_, ()>) {
        if let winit::event::Event::WindowEvent {
            event: winit::event::WindowEvent::MouseWheel { delta, .. },
            ..
        } = event
        {
            match delta {
                winit::event::MouseScrollDelta::LineDelta(_, lines) => self.accumulate(*lines),
                winit::event::MouseScrollDelta::PixelDelta(position) => {
                    #[allow(clippy::cast_possible_truncation)]
                    {
                        self.accumulate(position.y as f32 / Self::PIXELS_PER_LINE);
                    }
                }
            }
        }
    }

    #[must_use]
    fn fetch_input(&mut self) -> Inputs {
        let amount = core::mem::take(&mut self.0);

        let mut inputs = Vec::with_capacity(1);
        if amount != 0.0 {
            inputs.push(Input::Zoom(amount));
        }

        inputs
    }
}
