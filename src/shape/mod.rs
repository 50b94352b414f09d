pub mod point;
pub mod rectangle;
