use super::super::{Input, Inputs, MoveDirection};

#[derive(Copy, Clone, Debug, Default)]
/// Represents the state of a keyboard.
///
/// Held keys are polled rather than edge-triggered: a key reported as pressed
/// keeps yielding its movement every frame until its release arrives.
pub struct Keyboard(u8);

impl Keyboard {
    const FORWARD: u8 = 1 << 0;
    const BACKWARD: u8 = 1 << 1;
    const LEFT: u8 = 1 << 2;
    const RIGHT: u8 = 1 << 3;

    fn press(&mut self, mask: u8) {
        self.0 |= mask;
    }

    fn release(&mut self, mask: u8) {
        self.0 &= !mask;
    }
}

impl super::Controller for Keyboard {
    fn handle_event(&mut self, event: &winit::event::Event<'_, ()>) {
        if let winit::event::Event::WindowEvent {
            event:
                winit::event::WindowEvent::KeyboardInput {
                    input:
                        winit::event::KeyboardInput {
                            state,
                            virtual_keycode: Some(key),
                            ..
                        },
                    ..
                },
            ..
        } = event
        {
            // TODO: Personalize key bindings.
            let mask = match key {
                winit::event::VirtualKeyCode::W => Self::FORWARD,
                winit::event::VirtualKeyCode::S => Self::BACKWARD,
                winit::event::VirtualKeyCode::A => Self::LEFT,
                winit::event::VirtualKeyCode::D => Self::RIGHT,
                _ => return,
            };

            match state {
                winit::event::ElementState::Pressed => self.press(mask),
                winit::event::ElementState::Released => self.release(mask),
            }
        }
    }

    #[must_use]
    fn fetch_input(&mut self) -> Inputs {
        let mut inputs = Vec::with_capacity(4);

        if self.0 & Self::FORWARD != 0 {
            inputs.push(Input::Move(MoveDirection::Forward));
        }
        if self.0 & Self::BACKWARD != 0 {
            inputs.push(Input::Move(MoveDirection::Backward));
        }
        if self.0 & Self::LEFT != 0 {
            inputs.push(Input::Move(MoveDirection::Left));
        }
        if self.0 & Self::RIGHT != 0 {
            inputs.push(Input::Move(MoveDirection::Right));
        }

        inputs
    }
}
