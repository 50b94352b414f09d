use crate::shape::{point::Point, rectangle::Rectangle};

pub mod select;

/// One step of a continuous pointer drag, in local coordinates of the display surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GestureEvent {
    Start(Point),
    Move(Point),
    End,
}

#[derive(Debug, PartialEq)]
pub enum ToolCommand {
    Noop,
    Emit(Rectangle),
}

pub trait Tool {
    fn handle_gesture_start(&mut self, position: Point) -> ToolCommand;
    fn handle_gesture_move(&mut self, position: Point) -> ToolCommand;
    fn handle_gesture_end(&mut self) -> ToolCommand;

    fn handle_gesture_event(&mut self, event: GestureEvent) -> ToolCommand {
        match event {
            GestureEvent::Start(position) => self.handle_gesture_start(position),
            GestureEvent::Move(position) => self.handle_gesture_move(position),
            GestureEvent::End => self.handle_gesture_end(),
        }
    }
}
