use serde::Serialize;

use crate::{config::OverlayStyle, shape::rectangle::Rectangle};

/// The highlight box the display surface paints on top of the image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlay {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub style: OverlayStyle,
}

impl Overlay {
    pub fn new(rectangle: &Rectangle, style: OverlayStyle) -> Self {
        let top_left = rectangle.top_left();

        Self {
            left: top_left.x,
            top: top_left.y,
            width: rectangle.width(),
            height: rectangle.height(),
            style,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::shape::point::Point;

    use super::*;

    #[test]
    fn test_overlay_from_reversed_drag() {
        let rectangle = Rectangle::from_points(Point::new(50.0, 80.0), Point::new(10.0, 20.0));
        let overlay = Overlay::new(&rectangle, OverlayStyle::default());

        assert_eq!(overlay.left, 10.0);
        assert_eq!(overlay.top, 20.0);
        assert_eq!(overlay.width, 40.0);
        assert_eq!(overlay.height, 60.0);
        assert_eq!(overlay.style, OverlayStyle::default());
    }
}
