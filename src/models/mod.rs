mod image;
mod product;

pub use image::*;
pub use product::*;
