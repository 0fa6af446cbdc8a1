//! Width of text-only inline boxes.
//!
//! There is no box tree: a text box is an element whose text content is one
//! run, so its width follows from its computed style and a [`TextMeasurer`].

pub mod run;
mod text;
pub mod width;

pub use run::{collapse_white_space, prepare_text_run, text_run_width, transform_text};
pub use text::TextMeasurer;
pub use width::{client_width, offset_width};
