use tracing::{debug, trace};

use crate::shape::{point::Point, rectangle::Rectangle};

use super::{Tool, ToolCommand};

/// State of one drag-to-select interaction.
///
/// The points of the last gesture are kept after it ended, so the display surface can keep
/// showing the selected region until the next gesture starts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    start: Option<Point>,
    current: Option<Point>,
    active: bool,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn current(&self) -> Option<Point> {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The rectangle spanned by the stored points, if a gesture was started at least once.
    pub fn rectangle(&self) -> Option<Rectangle> {
        match (self.start, self.current) {
            (Some(start), Some(current)) => Some(Rectangle::from_points(start, current)),
            _ => None,
        }
    }
}

impl Tool for DragSession {
    fn handle_gesture_start(&mut self, position: Point) -> ToolCommand {
        debug!("Gesture started at {}", position);

        self.start = Some(position);
        self.current = Some(position);
        self.active = true;

        ToolCommand::Noop
    }

    fn handle_gesture_move(&mut self, position: Point) -> ToolCommand {
        if self.active {
            trace!("Gesture moved to {}", position);
            self.current = Some(position);
        }

        ToolCommand::Noop
    }

    fn handle_gesture_end(&mut self) -> ToolCommand {
        let was_active = self.active;
        self.active = false;

        if !was_active {
            return ToolCommand::Noop;
        }

        match self.rectangle() {
            Some(rectangle) => ToolCommand::Emit(rectangle),
            None => ToolCommand::Noop,
        }
    }
}
