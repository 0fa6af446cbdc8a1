mod common;

use autowidth::{AutoWidthOptions, Page, TriggerOutcome};
use common::{FixedAdvance, Fixture, add_input, expected_width};
use dom::{Document, InputEvent, SelectionSupport};
use input_core::{
    KeyDescriptor, Keymap, Modifiers, Prediction, PredictionKind, SelectionProbe, ValuePredictor,
    key_codes,
};

#[test]
fn typing_resizes_on_every_signal() {
    let mut fx = Fixture::build(SelectionSupport::Native, "", Some("Search"));
    fx.attach(AutoWidthOptions::default());
    assert_eq!(fx.style_width().as_deref(), Some("52px"));

    let input = fx.input;
    let outcomes = fx.page.type_text(input, "Hi");

    assert_eq!(fx.page.document().value(input), "Hi");
    assert_eq!(fx.style_width().as_deref(), Some("20px"));
    // key-down, input, key-up per character
    assert_eq!(outcomes.len(), 6);
    assert_eq!(
        outcomes[0].1,
        TriggerOutcome::Resized {
            width: expected_width("H")
        }
    );
    assert!(
        outcomes[1..3]
            .iter()
            .all(|(_, o)| matches!(o, TriggerOutcome::Unchanged { .. }))
    );
}

#[test]
fn backspace_through_the_page() {
    let mut fx = Fixture::new("hello");
    fx.attach(AutoWidthOptions::default());
    let input = fx.input;

    let outcomes = fx.page.press_key(
        input,
        KeyDescriptor::new(key_codes::BACKSPACE),
        Modifiers::NONE,
    );
    assert_eq!(fx.page.document().value(input), "hell");
    assert_eq!(
        outcomes[0].1,
        TriggerOutcome::Resized {
            width: expected_width("hell")
        }
    );
    assert_eq!(fx.style_width().as_deref(), Some("36px"));
}

#[test]
fn surface_is_created_once_and_shared() {
    let mut doc = Document::new();
    let a = add_input(&mut doc, "first");
    let b = add_input(&mut doc, "second one");
    let mut page = Page::new(doc, Box::new(FixedAdvance));

    page.attach(a, AutoWidthOptions::default());
    let surface = page.surface().element().unwrap();
    page.attach(b, AutoWidthOptions::default());

    assert_eq!(page.surface().element(), Some(surface));
    assert_eq!(page.surface().measurements(), 2);

    let doc = page.document();
    let body = doc.element(doc.body()).unwrap();
    let spans = body
        .children()
        .iter()
        .filter(|id| doc.element(**id).is_some_and(|el| el.is("span")))
        .count();
    assert_eq!(spans, 1);
    assert_eq!(doc.element(a).unwrap().style_property("width"), Some("44px"));
    assert_eq!(doc.element(b).unwrap().style_property("width"), Some("84px"));
}

#[test]
fn each_input_is_measured_in_its_own_font() {
    let mut doc = Document::new();
    doc.add_style_sheet("#big { font-size: 32px } #small { font-size: 8px }");
    let big = add_input(&mut doc, "abc");
    doc.set_attribute(big, "id", "big");
    let small = add_input(&mut doc, "abc");
    doc.set_attribute(small, "id", "small");
    let mut page = Page::new(doc, Box::new(FixedAdvance));

    page.attach(big, AutoWidthOptions::default());
    page.attach(small, AutoWidthOptions::default());

    let doc = page.document();
    assert_eq!(doc.element(big).unwrap().style_property("width"), Some("52px"));
    assert_eq!(doc.element(small).unwrap().style_property("width"), Some("16px"));
}

#[test]
fn events_reach_only_the_target_controller() {
    let mut doc = Document::new();
    let a = add_input(&mut doc, "a");
    let b = add_input(&mut doc, "b");
    let mut page = Page::new(doc, Box::new(FixedAdvance));
    let ca = page.attach(a, AutoWidthOptions::default());
    page.attach(b, AutoWidthOptions::default());

    let outcomes = page.dispatch(&InputEvent::blur(a));
    assert_eq!(outcomes.len(), 1);
    assert_eq!(outcomes[0].0, ca);
}

#[test]
fn legacy_selection_query_focuses_the_input() {
    let mut fx = Fixture::build(SelectionSupport::LegacyTextRange, "hello", None);
    fx.attach(AutoWidthOptions::default());
    let input = fx.input;
    fx.page.document_mut().set_selection_range(input, 5, 5);
    assert_eq!(fx.page.document().focused(), None);

    let outcomes = fx.page.dispatch(&InputEvent::key_down(
        input,
        KeyDescriptor::new(key_codes::BACKSPACE),
        Modifiers::NONE,
    ));

    assert_eq!(fx.page.document().focused(), Some(input));
    assert_eq!(
        outcomes[0].1,
        TriggerOutcome::Resized {
            width: expected_width("hell")
        }
    );
}

#[test]
fn no_selection_api_leaves_value_unchanged() {
    let mut fx = Fixture::build(SelectionSupport::Unsupported, "hello", None);
    let id = fx.attach(AutoWidthOptions::default());
    let event = InputEvent::key_down(
        fx.input,
        KeyDescriptor::new(key_codes::DELETE),
        Modifiers::NONE,
    );

    let outcome = fx
        .page
        .with_controller(id, |c, ctx| c.trigger(ctx, Some(&event)))
        .unwrap();
    assert_eq!(
        outcome,
        TriggerOutcome::Unchanged {
            width: expected_width("hello")
        }
    );
}

#[test]
fn blur_drops_focus_after_resizing() {
    let mut fx = Fixture::new("abc");
    fx.attach(AutoWidthOptions::default());
    let input = fx.input;
    fx.page.document_mut().focus(input);

    let outcomes = fx.page.dispatch(&InputEvent::blur(input));
    assert_eq!(outcomes.len(), 1);
    assert_eq!(fx.page.document().focused(), None);
}

#[test]
fn detach_destroys_the_controller() {
    let mut fx = Fixture::new("abc");
    let id = fx.attach(AutoWidthOptions::default());
    let input = fx.input;

    assert!(fx.page.detach(id));
    assert!(!fx.page.detach(id));
    assert!(fx.page.controller(id).is_none());
    assert_eq!(fx.page.document().listener_count(input), 0);

    let outcomes = fx.page.type_text(input, "more");
    assert!(outcomes.is_empty());
    assert_eq!(fx.page.document().value(input), "abcmore");
    assert_eq!(fx.style_width().as_deref(), Some("28px"));
}

#[test]
fn cache_capacity_bounds_growth() {
    let mut fx = Fixture::new("");
    let id = fx.attach(AutoWidthOptions::default().with_cache_capacity(3));
    let input = fx.input;

    fx.page.type_text(input, "abcdefgh");

    let cache = fx.page.controller(id).unwrap().cache().unwrap();
    assert_eq!(cache.len(), 3);
    assert!(cache.contains("abcdefgh"));
    assert!(!cache.contains("a"));
}

#[test]
fn shortcut_chords_do_not_resize() {
    let mut fx = Fixture::new("abc");
    fx.attach(AutoWidthOptions::default());
    let input = fx.input;

    let outcomes = fx
        .page
        .press_key(input, KeyDescriptor::for_char('v').unwrap(), Modifiers::META);
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|(_, o)| o.width().is_none()));
    assert_eq!(fx.page.document().value(input), "abc");
}

/// Predicts that every keystroke doubles the value.
struct Doubling;

impl ValuePredictor for Doubling {
    fn predict(
        &self,
        value: &str,
        _key: KeyDescriptor,
        _modifiers: Modifiers,
        _probe_selection: &mut dyn FnMut() -> SelectionProbe,
    ) -> Prediction {
        Prediction::Predicted {
            value: value.repeat(2),
            kind: PredictionKind::Appended('a'),
        }
    }
}

#[test]
fn custom_predictor_drives_key_down_width() {
    let mut fx = Fixture::new("ab");
    let input = fx.input;
    fx.page
        .attach_with_predictor(input, AutoWidthOptions::default(), Box::new(Doubling));
    assert_eq!(fx.style_width().as_deref(), Some("20px"));

    let outcomes = fx.page.press_key(input, KeyDescriptor::for_char('c').unwrap(), Modifiers::NONE);

    assert_eq!(
        outcomes[0].1,
        TriggerOutcome::Resized {
            width: expected_width("abab")
        }
    );
    // the input event carries the real value
    assert_eq!(fx.page.document().value(input), "abc");
    assert_eq!(
        outcomes[1].1,
        TriggerOutcome::Resized {
            width: expected_width("abc")
        }
    );
    assert_eq!(fx.style_width().as_deref(), Some("28px"));
}

struct DigitsOnly;

impl Keymap for DigitsOnly {
    fn printable_char(&self, code: u32) -> Option<char> {
        char::from_u32(code).filter(char::is_ascii_digit)
    }
}

#[test]
fn page_keymap_decides_what_gets_typed() {
    let mut doc = Document::new();
    let input = add_input(&mut doc, "");
    let mut page = Page::new(doc, Box::new(FixedAdvance)).with_keymap(Box::new(DigitsOnly));
    page.attach(input, AutoWidthOptions::default());

    page.type_text(input, "a1b2");

    assert_eq!(page.document().value(input), "12");
    assert_eq!(
        page.document().element(input).unwrap().style_property("width"),
        Some("20px")
    );
}
