use css::ComputedStyle;

/// Layout can depend on this without knowing about egui.
pub trait TextMeasurer {
    /// Return the advance width of `text` in CSS px when rendered with the
    /// font of `style` (size, family, weight). `text` is already transformed
    /// and whitespace-processed; letter-spacing is added by the caller.
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32 {
        (**self).measure(text, style)
    }
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for Box<T> {
    fn measure(&self, text: &str, style: &ComputedStyle) -> f32 {
        (**self).measure(text, style)
    }
}
