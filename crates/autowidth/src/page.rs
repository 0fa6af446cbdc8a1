//! Host for controllers: owns the document, the text measurer and the
//! shared surface, and routes events to subscribers.

use std::rc::Rc;

use dom::{Document, ElementId, InputEvent, SignalKind};
use input_core::{KeyDescriptor, Keymap, Modifiers, UsKeymap, ValuePredictor};
use layout::TextMeasurer;

use crate::controller::{AutoWidth, TriggerOutcome};
use crate::options::AutoWidthOptions;
use crate::surface::MeasureSurface;

/// What a controller needs from its page for one call.
pub struct PageCtx<'a> {
    pub doc: &'a mut Document,
    pub measurer: &'a dyn TextMeasurer,
    pub surface: &'a Rc<MeasureSurface>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerId(pub usize);

pub struct Page {
    doc: Document,
    measurer: Box<dyn TextMeasurer>,
    keymap: Box<dyn Keymap>,
    surface: Rc<MeasureSurface>,
    controllers: Vec<(ControllerId, AutoWidth)>,
    next_controller: usize,
}

impl Page {
    pub fn new(doc: Document, measurer: Box<dyn TextMeasurer>) -> Self {
        Self {
            doc,
            measurer,
            keymap: Box::new(UsKeymap),
            surface: Rc::new(MeasureSurface::new()),
            controllers: Vec::new(),
            next_controller: 0,
        }
    }

    /// Keymap used when applying key presses to input values.
    pub fn with_keymap(mut self, keymap: Box<dyn Keymap>) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.doc
    }

    pub fn surface(&self) -> &Rc<MeasureSurface> {
        &self.surface
    }

    pub fn ctx(&mut self) -> PageCtx<'_> {
        PageCtx {
            doc: &mut self.doc,
            measurer: self.measurer.as_ref(),
            surface: &self.surface,
        }
    }

    pub fn attach(&mut self, input: ElementId, options: AutoWidthOptions) -> ControllerId {
        let controller = AutoWidth::new(&mut self.ctx(), input, options);
        self.push(controller)
    }

    pub fn attach_with_predictor(
        &mut self,
        input: ElementId,
        options: AutoWidthOptions,
        predictor: Box<dyn ValuePredictor>,
    ) -> ControllerId {
        let controller = AutoWidth::with_predictor(&mut self.ctx(), input, options, predictor);
        self.push(controller)
    }

    fn push(&mut self, controller: AutoWidth) -> ControllerId {
        let id = ControllerId(self.next_controller);
        self.next_controller += 1;
        self.controllers.push((id, controller));
        id
    }

    pub fn controller(&self, id: ControllerId) -> Option<&AutoWidth> {
        self.controllers
            .iter()
            .find(|(cid, _)| *cid == id)
            .map(|(_, c)| c)
    }

    /// Run `f` with one controller and a context, e.g. to call
    /// [`AutoWidth::measure_string`] or [`AutoWidth::trigger`] directly.
    pub fn with_controller<R>(
        &mut self,
        id: ControllerId,
        f: impl FnOnce(&mut AutoWidth, &mut PageCtx<'_>) -> R,
    ) -> Option<R> {
        let (_, controller) = self.controllers.iter_mut().find(|(cid, _)| *cid == id)?;
        let mut ctx = PageCtx {
            doc: &mut self.doc,
            measurer: self.measurer.as_ref(),
            surface: &self.surface,
        };
        Some(f(controller, &mut ctx))
    }

    /// Destroy and remove a controller. `false` if it was not attached.
    pub fn detach(&mut self, id: ControllerId) -> bool {
        let Some(pos) = self.controllers.iter().position(|(cid, _)| *cid == id) else {
            return false;
        };
        let (_, mut controller) = self.controllers.remove(pos);
        controller.destroy(&mut self.ctx());
        log::debug!(target: "autowidth.page", "detached controller {}", id.0);
        true
    }

    /// Deliver `event` to its subscribers, then run the platform's default
    /// action: a key-down edits the value (firing `input` if it changed), a
    /// blur drops focus.
    pub fn dispatch(&mut self, event: &InputEvent) -> Vec<(ControllerId, TriggerOutcome)> {
        let mut outcomes = self.notify(event);

        match event.kind {
            SignalKind::KeyDown => {
                if let Some(key) = event.key {
                    let changed = self.doc.apply_key(
                        event.target,
                        key,
                        event.modifiers,
                        self.keymap.as_ref(),
                    );
                    if changed {
                        outcomes.extend(self.notify(&InputEvent::input(event.target)));
                    }
                }
            }
            SignalKind::Blur => {
                if self.doc.focused() == Some(event.target) {
                    self.doc.blur();
                }
            }
            SignalKind::Input | SignalKind::KeyUp => {}
        }
        outcomes
    }

    fn notify(&mut self, event: &InputEvent) -> Vec<(ControllerId, TriggerOutcome)> {
        let listeners = self.doc.listeners(event.target, event.kind);
        if listeners.is_empty() {
            return Vec::new();
        }
        log::trace!(
            target: "autowidth.page",
            "{} on {:?} to {} listener(s)",
            event.kind.as_str(),
            event.target,
            listeners.len()
        );

        let mut ctx = PageCtx {
            doc: &mut self.doc,
            measurer: self.measurer.as_ref(),
            surface: &self.surface,
        };
        self.controllers
            .iter_mut()
            .filter(|(_, c)| c.listens_to(&listeners))
            .map(|(id, c)| (*id, c.trigger(&mut ctx, Some(event))))
            .collect()
    }

    /// Key-down followed by key-up, as a user pressing one key.
    pub fn press_key(
        &mut self,
        target: ElementId,
        key: KeyDescriptor,
        modifiers: Modifiers,
    ) -> Vec<(ControllerId, TriggerOutcome)> {
        let mut outcomes = self.dispatch(&InputEvent::key_down(target, key, modifiers));
        outcomes.extend(self.dispatch(&InputEvent::key_up(target, key, modifiers)));
        outcomes
    }

    /// Focus `target` and press the key for each character of `text`.
    /// Characters without a US key are skipped.
    pub fn type_text(&mut self, target: ElementId, text: &str) -> Vec<(ControllerId, TriggerOutcome)> {
        self.doc.focus(target);
        let mut outcomes = Vec::new();
        for ch in text.chars() {
            let Some(key) = KeyDescriptor::for_char(ch) else {
                log::debug!(target: "autowidth.page", "no key types {ch:?}");
                continue;
            };
            let modifiers = if ch.is_ascii_uppercase() {
                Modifiers::SHIFT
            } else {
                Modifiers::NONE
            };
            outcomes.extend(self.press_key(target, key, modifiers));
        }
        outcomes
    }
}
