use crate::syntax::{Selector, Stylesheet, parse_declarations, parse_stylesheet};
use dom::{Document, Element, ElementId};
use std::cmp::Ordering::Equal;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd)]
struct Specificity(u16, u16, u16); // (id, class, type)

// Inline declarations beat every selector.
const INLINE: Specificity = Specificity(u16::MAX, 0, 0);

struct Candidate<'a> {
    property: &'a str,
    value: &'a str,
    specificity: Specificity,
    order: u32,
}

fn specificity_of(selector: &Selector) -> Specificity {
    match selector {
        Selector::Universal => Specificity(0, 0, 0),
        Selector::Type(_) => Specificity(0, 0, 1),
        Selector::Class(_) => Specificity(0, 1, 0),
        Selector::Id(_) => Specificity(1, 0, 0),
    }
}

/// Parse every `<style>` element of the document into one sheet.
pub fn document_stylesheet(doc: &Document) -> Stylesheet {
    let mut source = String::new();
    doc.collect_style_texts(&mut source);
    parse_stylesheet(&source)
}

/// Specified declarations for one element: matching rules of `sheet` plus
/// the element's inline style, resolved per property by specificity and then
/// source order.
pub fn cascaded_declarations(element: &Element, sheet: &Stylesheet) -> Vec<(String, String)> {
    let mut candidates: Vec<Candidate<'_>> = Vec::new();

    for (order, rule) in sheet.rules.iter().enumerate() {
        let matched = rule
            .selectors
            .iter()
            .filter(|s| s.matches(element))
            .map(specificity_of)
            .max();
        if let Some(specificity) = matched {
            candidates.extend(rule.declarations.iter().map(|d| Candidate {
                property: &d.name,
                value: &d.value,
                specificity,
                order: order as u32,
            }));
        }
    }

    candidates.extend(element.inline_style.iter().map(|(name, value)| Candidate {
        property: name,
        value,
        specificity: INLINE,
        order: u32::MAX,
    }));

    // Stable sort: equal keys keep insertion order, so the last one wins.
    candidates.sort_by(|a, b| match a.property.cmp(b.property) {
        Equal => match a.specificity.cmp(&b.specificity) {
            Equal => a.order.cmp(&b.order),
            other => other,
        },
        other => other,
    });

    let mut out: Vec<(String, String)> = Vec::new();
    for c in candidates {
        match out.last_mut() {
            Some((name, value)) if name == c.property => *value = c.value.to_string(),
            _ => out.push((c.property.to_string(), c.value.to_string())),
        }
    }
    out
}

/// Write a `style="..."` attribute's worth of declarations to the element's
/// inline style, one property at a time.
pub fn set_inline_style(doc: &mut Document, id: ElementId, style: &str) {
    let Some(el) = doc.element_mut(id) else {
        return;
    };
    for d in parse_declarations(style) {
        el.set_style_property(&d.name, &d.value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(decls: &'a [(String, String)], name: &str) -> Option<&'a str> {
        decls
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn specificity_then_order_decides() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_attribute(input, "id", "q");
        doc.set_attribute(input, "class", "big");

        let sheet = parse_stylesheet(
            "#q { font-size: 30px } .big { font-size: 20px; font-weight: bold } \
             input { font-weight: 300 } .big { font-family: serif } .big { font-family: mono }",
        );
        let decls = cascaded_declarations(doc.element(input).unwrap(), &sheet);

        assert_eq!(value(&decls, "font-size"), Some("30px"));
        assert_eq!(value(&decls, "font-weight"), Some("bold"));
        assert_eq!(value(&decls, "font-family"), Some("mono"));
    }

    #[test]
    fn inline_style_wins() {
        let mut doc = Document::new();
        let input = doc.create_element("input");
        doc.set_attribute(input, "id", "q");
        set_inline_style(&mut doc, input, "font-size: 11px; width: 50px");

        let sheet = parse_stylesheet("#q { font-size: 30px }");
        let decls = cascaded_declarations(doc.element(input).unwrap(), &sheet);
        assert_eq!(value(&decls, "font-size"), Some("11px"));
        assert_eq!(value(&decls, "width"), Some("50px"));
    }

    #[test]
    fn document_stylesheet_reads_style_elements() {
        let mut doc = Document::new();
        doc.add_style_sheet("input { font-size: 18px }");
        let sheet = document_stylesheet(&doc);
        assert_eq!(sheet.rules.len(), 1);
    }
}
