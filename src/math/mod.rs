mod color;

pub use color::{rgb, rgba};
