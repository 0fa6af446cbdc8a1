use crate::computed::{ComputedStyle, computed_style};
use crate::values::StyleValue;
use dom::{Document, ElementId};

/// What `transfer_styles` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    /// Number of properties written to the destination.
    Copied(usize),
    /// Source or destination is not in the document.
    MissingElement,
}

/// Write `properties` to the element's inline style. Numbers are written as
/// pixel lengths. Returns false if the element does not exist.
pub fn set_css(doc: &mut Document, id: ElementId, properties: &[(&str, StyleValue)]) -> bool {
    let Some(el) = doc.element_mut(id) else {
        return false;
    };
    for (name, value) in properties {
        el.set_style_property(name, &value.to_css_string());
    }
    true
}

/// Copy the computed value of each property in `properties` from `from` onto
/// `to`'s inline style. An empty list copies every property
/// [`ComputedStyle`] knows.
pub fn transfer_styles(
    doc: &mut Document,
    from: ElementId,
    to: ElementId,
    properties: &[&str],
) -> TransferOutcome {
    if !doc.contains(to) {
        return TransferOutcome::MissingElement;
    }
    let Some(source) = computed_style(doc, from) else {
        return TransferOutcome::MissingElement;
    };

    let names = if properties.is_empty() {
        ComputedStyle::PROPERTIES
    } else {
        properties
    };

    // Unknown properties resolve to "", like a computed-style getter.
    let resolved: Vec<(&str, String)> = names
        .iter()
        .map(|name| match source.get(name) {
            Some(value) => (*name, value),
            None => {
                log::debug!(target: "css.transfer", "unknown property {name}, copying as empty");
                (*name, String::new())
            }
        })
        .collect();

    let Some(dest) = doc.element_mut(to) else {
        return TransferOutcome::MissingElement;
    };
    for (name, value) in &resolved {
        dest.set_style_property(name, value);
    }

    log::trace!(
        target: "css.transfer",
        "copied {} properties from {:?} to {:?}",
        resolved.len(),
        from,
        to
    );
    TransferOutcome::Copied(resolved.len())
}
