//! The embeddable image viewer which turns drag gestures into selected regions.
use std::{fmt::Display, path::PathBuf};

use tracing::info;

use crate::{
    config::OverlayStyle,
    overlay::Overlay,
    shape::rectangle::Rectangle,
    tool::{select::DragSession, GestureEvent, Tool, ToolCommand},
};

/// Where the displayed image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Uri(String),
}

impl ImageSource {
    /// A selected image always wins over the default one.
    pub fn resolve(default: ImageSource, selected: Option<&str>) -> ImageSource {
        match selected {
            Some(uri) => ImageSource::Uri(uri.to_owned()),
            None => default,
        }
    }
}

impl Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Path(path) => write!(f, "{}", path.display()),
            ImageSource::Uri(uri) => write!(f, "{}", uri),
        }
    }
}

/// Gets called once for every completed gesture.
pub type RectangleCallback = Box<dyn FnMut(Rectangle)>;

pub struct Viewer {
    image: ImageSource,
    session: DragSession,
    style: OverlayStyle,
    on_rectangle_drawn: Option<RectangleCallback>,
}

impl Viewer {
    pub fn new(
        default_image: ImageSource,
        selected_image: Option<&str>,
        style: OverlayStyle,
    ) -> Self {
        Self {
            image: ImageSource::resolve(default_image, selected_image),
            session: DragSession::new(),
            style,
            on_rectangle_drawn: None,
        }
    }

    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Rectangle) + 'static,
    {
        self.on_rectangle_drawn = Some(Box::new(callback));
        self
    }

    pub fn image(&self) -> &ImageSource {
        &self.image
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// Feeds one gesture event into the viewer.
    ///
    /// Returns the rectangle if this event completed a gesture. In that case the callback (if
    /// any) has already been invoked with it.
    pub fn handle_event(&mut self, event: GestureEvent) -> Option<Rectangle> {
        match self.session.handle_gesture_event(event) {
            ToolCommand::Noop => None,
            ToolCommand::Emit(rectangle) => {
                info!("Rectangle drawn: {}", rectangle);

                if let Some(callback) = self.on_rectangle_drawn.as_mut() {
                    callback(rectangle);
                }

                Some(rectangle)
            }
        }
    }

    /// The box to paint over the image, `None` as long as nothing has been drawn yet.
    pub fn overlay(&self) -> Option<Overlay> {
        self.session
            .rectangle()
            .map(|rectangle| Overlay::new(&rectangle, self.style))
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use crate::shape::point::Point;

    use super::*;

    fn placeholder() -> ImageSource {
        ImageSource::Path(PathBuf::from("assets/placeholder.png"))
    }

    fn recording_viewer() -> (Viewer, Rc<RefCell<Vec<Rectangle>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);

        let viewer = Viewer::new(placeholder(), None, OverlayStyle::default())
            .with_callback(move |rectangle| sink.borrow_mut().push(rectangle));

        (viewer, received)
    }

    #[test]
    fn test_selected_image_wins() {
        let viewer = Viewer::new(
            placeholder(),
            Some("file:///tmp/picked.jpg"),
            OverlayStyle::default(),
        );

        assert_eq!(
            viewer.image(),
            &ImageSource::Uri("file:///tmp/picked.jpg".into())
        );
    }

    #[test]
    fn test_default_image_without_selection() {
        let viewer = Viewer::new(placeholder(), None, OverlayStyle::default());

        assert_eq!(viewer.image(), &placeholder());
    }

    #[test]
    fn test_callback_gets_invoked_once_per_gesture() {
        let (mut viewer, received) = recording_viewer();

        viewer.handle_event(GestureEvent::Start(Point::new(5.0, 5.0)));
        viewer.handle_event(GestureEvent::Move(Point::new(15.0, 25.0)));
        let emitted = viewer.handle_event(GestureEvent::End);

        let expected = Rectangle::from_points(Point::new(5.0, 5.0), Point::new(15.0, 25.0));
        assert_eq!(emitted, Some(expected));
        assert_eq!(*received.borrow(), vec![expected]);

        // ending again mustn't report the same rectangle twice
        assert_eq!(viewer.handle_event(GestureEvent::End), None);
        assert_eq!(received.borrow().len(), 1);

        let session = viewer.session();
        assert_eq!(session.start(), Some(Point::new(5.0, 5.0)));
        assert_eq!(session.current(), Some(Point::new(15.0, 25.0)));
        assert!(!session.is_active());
    }

    #[test]
    fn test_without_callback() {
        let mut viewer = Viewer::new(placeholder(), None, OverlayStyle::default());

        viewer.handle_event(GestureEvent::Start(Point::new(1.0, 2.0)));

        assert!(viewer.handle_event(GestureEvent::End).is_some());
    }

    #[test]
    fn test_overlay_lifecycle() {
        let (mut viewer, _) = recording_viewer();
        assert_eq!(viewer.overlay(), None);

        viewer.handle_event(GestureEvent::Start(Point::new(40.0, 10.0)));
        viewer.handle_event(GestureEvent::Move(Point::new(20.0, 30.0)));

        let while_dragging = viewer.overlay().unwrap();
        assert_eq!(
            (
                while_dragging.left,
                while_dragging.top,
                while_dragging.width,
                while_dragging.height
            ),
            (20.0, 10.0, 20.0, 20.0)
        );

        viewer.handle_event(GestureEvent::End);
        assert_eq!(viewer.overlay(), Some(while_dragging));
    }
}
