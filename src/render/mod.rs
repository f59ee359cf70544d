pub mod bars;

pub use bars::{Renderer, sci_label};
