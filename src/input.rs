use egui::{Context, Pos2, Rect};

/// Pointer events delivered to the drawing core, in canvas-local coordinates
/// (origin top-left, x right, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { position: Pos2 },
    PointerMove { position: Pos2 },
    PointerUp,
}

/// Handles converting raw egui pointer input into `InputEvent`s
#[derive(Debug, Clone)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    gesture_active: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            gesture_active: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Read this frame's primary-button state from egui
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let (pressed, released, pos) = ctx.input(|input| {
            (
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
                input.pointer.interact_pos(),
            )
        });
        self.process_pointer(pressed, released, pos)
    }

    /// Turn one frame of pointer state into events.
    ///
    /// A gesture only starts on a press inside the canvas. Once started, moves
    /// and the release are forwarded even if the pointer leaves the canvas.
    pub fn process_pointer(
        &mut self,
        pressed: bool,
        released: bool,
        pos: Option<Pos2>,
    ) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if pressed {
            if let Some(pos) = pos.filter(|p| self.canvas_rect.contains(*p)) {
                events.push(InputEvent::PointerDown {
                    position: self.to_local(pos),
                });
                self.gesture_active = true;
                self.last_pointer_pos = Some(pos);
            }
        } else if self.gesture_active {
            if let Some(pos) = pos {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        position: self.to_local(pos),
                    });
                    self.last_pointer_pos = Some(pos);
                }
            }
        }

        if released && self.gesture_active {
            events.push(InputEvent::PointerUp);
            self.gesture_active = false;
            self.last_pointer_pos = None;
        }

        events
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture_active
    }
}
