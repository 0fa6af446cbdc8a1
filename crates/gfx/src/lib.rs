pub mod text_measurer;
pub use text_measurer::EguiTextMeasurer;
