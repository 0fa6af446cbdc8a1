use std::rc::Rc;

use css::{StyleValue, set_css};
use dom::{ElementId, InputEvent, ListenerId, SignalKind};
use input_core::{KeystrokePredictor, UsKeymap, ValuePredictor};

use crate::cache::MeasureCache;
use crate::measure::measure_width;
use crate::options::AutoWidthOptions;
use crate::page::PageCtx;
use crate::surface::MeasureSurface;

/// Added to every measured width so the caret has room.
pub const WIDTH_BUFFER: f32 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Meta or alt was held: a shortcut, not typing.
    ModifierHeld,
    /// The controller has been destroyed.
    Destroyed,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerOutcome {
    Skipped(SkipReason),
    /// Width computed, equal to the one already applied; nothing written.
    Unchanged { width: f32 },
    /// New width written to the input's style.
    Resized { width: f32 },
}

impl TriggerOutcome {
    pub fn width(&self) -> Option<f32> {
        match self {
            TriggerOutcome::Unchanged { width } | TriggerOutcome::Resized { width } => Some(*width),
            TriggerOutcome::Skipped(_) => None,
        }
    }
}

/// Keeps one input's width fitted to its value.
///
/// Every signal (blur, input, key-up, key-down) runs [`AutoWidth::trigger`].
/// On key-down the value has not changed yet, so the controller measures the
/// predicted value instead.
pub struct AutoWidth {
    input: Option<ElementId>,
    options: AutoWidthOptions,
    cache: Option<MeasureCache>,
    current_width: Option<f32>,
    subscriptions: Vec<ListenerId>,
    predictor: Box<dyn ValuePredictor>,
    surface: Rc<MeasureSurface>,
}

impl AutoWidth {
    pub fn new(ctx: &mut PageCtx<'_>, input: ElementId, options: AutoWidthOptions) -> Self {
        Self::with_predictor(ctx, input, options, Box::new(KeystrokePredictor::<UsKeymap>::default()))
    }

    /// Sizes the input once, then subscribes to its four signals.
    pub fn with_predictor(
        ctx: &mut PageCtx<'_>,
        input: ElementId,
        options: AutoWidthOptions,
        predictor: Box<dyn ValuePredictor>,
    ) -> Self {
        let cache = options
            .cache
            .then(|| MeasureCache::with_capacity(options.cache_capacity));
        let mut this = Self {
            input: Some(input),
            options,
            cache,
            current_width: None,
            subscriptions: Vec::new(),
            predictor,
            surface: Rc::clone(ctx.surface),
        };

        this.trigger(ctx, None);
        this.subscriptions = SignalKind::ALL
            .iter()
            .map(|kind| ctx.doc.subscribe(input, *kind))
            .collect();

        log::debug!(target: "autowidth.controller", "attached to {input:?}");
        this
    }

    /// Width of `text` in the input's font, without the buffer.
    pub fn measure_string(&self, ctx: &mut PageCtx<'_>, text: &str) -> f32 {
        debug_assert!(
            Rc::ptr_eq(&self.surface, ctx.surface),
            "controller used with another page"
        );
        measure_width(
            ctx.doc,
            ctx.measurer,
            &self.surface,
            self.input,
            text,
            self.cache.as_ref(),
        )
    }

    pub fn trigger(&mut self, ctx: &mut PageCtx<'_>, event: Option<&InputEvent>) -> TriggerOutcome {
        let Some(input) = self.input else {
            return TriggerOutcome::Skipped(SkipReason::Destroyed);
        };
        if let Some(ev) = event {
            if ev.modifiers.meta || ev.modifiers.alt {
                log::trace!(target: "autowidth.controller", "skip {} with modifier", ev.kind.as_str());
                return TriggerOutcome::Skipped(SkipReason::ModifierHeld);
            }
        }

        let mut value = ctx.doc.value(input).to_string();

        let key_down = event.filter(|ev| ev.kind == SignalKind::KeyDown);
        if let Some((key, modifiers)) = key_down.and_then(|ev| ev.key.map(|k| (k, ev.modifiers))) {
            let doc = &mut *ctx.doc;
            let prediction =
                self.predictor
                    .predict(&value, key, modifiers, &mut || doc.input_selection(input));
            log::trace!(target: "autowidth.controller", "key {} on {value:?}: {prediction:?}", key.code);
            value = prediction.into_value(value);
        }

        if value.is_empty() {
            if let Some(placeholder) = ctx.doc.attribute(input, "placeholder") {
                value = placeholder.to_string();
            }
        }

        let text_width = self.measure_string(ctx, &value);
        // Raw text width, so hits and misses feed the same arithmetic below.
        if let Some(cache) = self.cache.as_mut() {
            if !value.is_empty() {
                cache.insert(&value, text_width);
            }
        }

        let width = self.options.clamp(text_width + WIDTH_BUFFER);
        if self.current_width == Some(width) {
            return TriggerOutcome::Unchanged { width };
        }

        self.current_width = Some(width);
        set_css(ctx.doc, input, &[("width", StyleValue::Number(width))]);
        log::debug!(target: "autowidth.controller", "{input:?} width -> {width}px for {value:?}");
        TriggerOutcome::Resized { width }
    }

    /// Unsubscribe from the input and drop it and the cache. Calling it
    /// again does nothing.
    pub fn destroy(&mut self, ctx: &mut PageCtx<'_>) {
        for id in self.subscriptions.drain(..) {
            ctx.doc.unsubscribe(id);
        }
        self.cache = None;
        if let Some(input) = self.input.take() {
            log::debug!(target: "autowidth.controller", "detached from {input:?}");
        }
    }

    pub fn input(&self) -> Option<ElementId> {
        self.input
    }

    pub fn options(&self) -> &AutoWidthOptions {
        &self.options
    }

    pub fn cache(&self) -> Option<&MeasureCache> {
        self.cache.as_ref()
    }

    /// Last width written to the input.
    pub fn current_width(&self) -> Option<f32> {
        self.current_width
    }

    pub fn is_destroyed(&self) -> bool {
        self.input.is_none()
    }

    /// `true` when one of `listeners` is this controller's subscription.
    pub fn listens_to(&self, listeners: &[ListenerId]) -> bool {
        listeners.iter().any(|id| self.subscriptions.contains(id))
    }
}
