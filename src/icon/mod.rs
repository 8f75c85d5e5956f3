mod generate;
mod render;
mod source;
mod svg;

pub use generate::{generate, Rendition};
pub use source::{load_image, normalize, validate};
