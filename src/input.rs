use egui::{Context, Event, Key, PointerButton, Pos2, Rect};

use crate::tool::{ColorPreset, WidthPreset};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in screen coordinates
    pub position: Pos2,
    /// False when the position is over the toolbar
    pub is_in_canvas: bool,
}

/// Pointer and keyboard input, in the order it happened within a frame
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Pointer moved while the primary button is held
    PointerDrag { location: InputLocation },
    /// Primary button was released, or the pointer was lost while pressed
    PointerUp { location: InputLocation },
    /// Pointer moved with no button held
    PointerMove { location: InputLocation },
    /// Key was pressed (repeats are dropped)
    KeyPressed { key: Key },
}

/// What a keyboard shortcut asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SetColor(ColorPreset),
    SetWidth(WidthPreset),
    ToggleDim,
    Clear,
    Quit,
}

/// Maps a pressed key to its shortcut, if it has one.
pub fn key_action(key: Key) -> Option<KeyAction> {
    let action = match key {
        Key::R => KeyAction::SetColor(ColorPreset::Red),
        Key::G => KeyAction::SetColor(ColorPreset::Green),
        Key::B => KeyAction::SetColor(ColorPreset::Blue),
        Key::Y => KeyAction::SetColor(ColorPreset::Yellow),
        Key::O => KeyAction::SetColor(ColorPreset::Orange),
        Key::P => KeyAction::SetColor(ColorPreset::Pink),
        Key::X => KeyAction::SetColor(ColorPreset::Blur),
        Key::Num1 => KeyAction::SetWidth(WidthPreset::Thin),
        Key::Num2 => KeyAction::SetWidth(WidthPreset::Medium),
        Key::Num3 => KeyAction::SetWidth(WidthPreset::Thick),
        Key::A => KeyAction::ToggleDim,
        Key::C => KeyAction::Clear,
        Key::Escape => KeyAction::Quit,
        _ => return None,
    };
    Some(action)
}

/// Handles converting raw egui input into our domain-specific InputEvents
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    primary_down: bool,
    toolbar_rect: Option<Rect>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Area covered by the toolbar; presses there don't draw.
    pub fn set_toolbar_rect(&mut self, rect: Option<Rect>) {
        self.toolbar_rect = rect;
    }

    pub fn is_primary_down(&self) -> bool {
        self.primary_down
    }

    fn make_location(&self, pos: Pos2) -> InputLocation {
        InputLocation {
            position: pos,
            is_in_canvas: !self.toolbar_rect.is_some_and(|rect| rect.contains(pos)),
        }
    }

    /// Collects this frame's events from egui.
    ///
    /// Keys are skipped while a text field has keyboard focus.
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let keys_enabled = !ctx.wants_keyboard_input();
        ctx.input(|input| self.process_events(&input.events, keys_enabled))
    }

    /// Translates raw egui events, keeping track of the primary button between frames.
    pub fn process_events(&mut self, raw: &[Event], keys_enabled: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in raw {
            match event {
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    self.last_pointer_pos = Some(*pos);
                    let location = self.make_location(*pos);
                    if *pressed && !self.primary_down {
                        self.primary_down = true;
                        events.push(InputEvent::PointerDown { location });
                    } else if !*pressed && self.primary_down {
                        self.primary_down = false;
                        events.push(InputEvent::PointerUp { location });
                    }
                }
                Event::PointerMoved(pos) => {
                    if self.last_pointer_pos == Some(*pos) {
                        continue;
                    }
                    self.last_pointer_pos = Some(*pos);
                    let location = self.make_location(*pos);
                    events.push(if self.primary_down {
                        InputEvent::PointerDrag { location }
                    } else {
                        InputEvent::PointerMove { location }
                    });
                }
                Event::PointerGone => {
                    if self.primary_down {
                        self.primary_down = false;
                        let pos = self.last_pointer_pos.unwrap_or(Pos2::ZERO);
                        events.push(InputEvent::PointerUp {
                            location: self.make_location(pos),
                        });
                    }
                    self.last_pointer_pos = None;
                }
                Event::Key {
                    key,
                    pressed: true,
                    repeat: false,
                    ..
                } if keys_enabled => {
                    events.push(InputEvent::KeyPressed { key: *key });
                }
                _ => {}
            }
        }

        events
    }
}
