//! Auto-width for single-line text inputs.
//!
//! An [`AutoWidth`] controller keeps an input's `width` fitted to its value.
//! Text is measured in one hidden element per [`Page`], styled with the
//! input's font. On key-down the value is stale, so the controller measures a
//! predicted value instead.
//!
//! Everything runs on one thread: pages and surfaces are `!Send`.

pub mod cache;
pub mod controller;
pub mod measure;
pub mod options;
pub mod page;
pub mod surface;

pub use cache::MeasureCache;
pub use controller::{AutoWidth, SkipReason, TriggerOutcome, WIDTH_BUFFER};
pub use measure::{FONT_PROPERTIES, measure_width};
pub use options::{AutoWidthOptions, OptionsError};
pub use page::{ControllerId, Page, PageCtx};
pub use surface::MeasureSurface;
