pub mod syntax;
pub mod cascade;
pub mod values;
pub mod computed;
pub mod transfer;

// Re-exports so other crates can just use `css::...` nicely.
pub use syntax::{Declaration, Rule, Selector, Stylesheet, parse_declarations, parse_stylesheet};
pub use cascade::{cascaded_declarations, document_stylesheet, set_inline_style};
pub use values::{Display, Position, StyleValue, TextTransform, WhiteSpace, parse_color, parse_px};
pub use computed::{ComputedStyle, compute_style, computed_style};
pub use transfer::{TransferOutcome, set_css, transfer_styles};
