use dom::Element;

/// `name: value`, name lowercased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

/// Simple selectors only: no combinators, no pseudo-classes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    Universal,
    Type(String),
    Id(String),
    Class(String),
}

impl Selector {
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Universal => true,
            Selector::Type(t) => element.is(t),
            Selector::Id(want) => element.attr("id") == Some(want.as_str()),
            Selector::Class(want) => element
                .attr("class")
                .is_some_and(|list| list.split_whitespace().any(|c| c == want)),
        }
    }
}

/// Rules in source order.
#[derive(Clone, Debug, Default)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

/// `input, #q { font-size: 20px } .wide { letter-spacing: 2px }`
///
/// Rules whose selectors are all unsupported, or that declare nothing, are
/// dropped.
pub fn parse_stylesheet(input: &str) -> Stylesheet {
    let source = strip_comments(input);
    let rules = source
        .split('}')
        .filter_map(|block| {
            let (head, body) = block.split_once('{')?;
            let selectors: Vec<Selector> = head.split(',').filter_map(parse_selector).collect();
            let declarations = parse_declarations(body);
            (!selectors.is_empty() && !declarations.is_empty()).then_some(Rule {
                selectors,
                declarations,
            })
        })
        .collect();
    Stylesheet { rules }
}

/// `font-size: 12px; font-family: serif`, as found in a rule body or a
/// `style` attribute.
pub fn parse_declarations(input: &str) -> Vec<Declaration> {
    input
        .split(';')
        .filter_map(|decl| {
            let (name, value) = decl.split_once(':')?;
            let name = name.trim();
            (!name.is_empty()).then(|| Declaration {
                name: name.to_ascii_lowercase(),
                value: value.trim().to_string(),
            })
        })
        .collect()
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find("/*") {
        out.push_str(&rest[..open]);
        match rest[open + 2..].find("*/") {
            Some(close) => rest = &rest[open + 2 + close + 2..],
            // unterminated: the comment runs to the end
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn parse_selector(s: &str) -> Option<Selector> {
    let s = s.trim();
    if s == "*" {
        return Some(Selector::Universal);
    }
    if let Some(id) = s.strip_prefix('#') {
        return is_ident(id).then(|| Selector::Id(id.to_string()));
    }
    if let Some(class) = s.strip_prefix('.') {
        return is_ident(class).then(|| Selector::Class(class.to_string()));
    }
    is_ident(s).then(|| Selector::Type(s.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rules_and_skips_unsupported_selectors() {
        let sheet = parse_stylesheet(
            "input, #q { font-size: 20px; } div > p { color: red } .wide { letter-spacing: 2px }",
        );
        assert_eq!(sheet.rules.len(), 2);
        assert_eq!(
            sheet.rules[0].selectors,
            vec![Selector::Type("input".into()), Selector::Id("q".into())]
        );
        assert_eq!(
            sheet.rules[1].declarations,
            vec![Declaration {
                name: "letter-spacing".into(),
                value: "2px".into()
            }]
        );
    }

    #[test]
    fn declarations_lowercase_names_and_ignore_junk() {
        let decls = parse_declarations("Font-Size: 12px;; nonsense ; font-family :  serif ");
        assert_eq!(
            decls,
            vec![
                Declaration {
                    name: "font-size".into(),
                    value: "12px".into()
                },
                Declaration {
                    name: "font-family".into(),
                    value: "serif".into()
                },
            ]
        );
    }

    #[test]
    fn comments_are_ignored() {
        let sheet = parse_stylesheet("/* a } b { */ input { /* x */ font-size: 9px } /* open");
        assert_eq!(sheet.rules.len(), 1);
        assert_eq!(sheet.rules[0].declarations[0].value, "9px");
    }

    #[test]
    fn selectors_match_elements() {
        let mut doc = dom::Document::new();
        let input = doc.create_element("input");
        doc.set_attribute(input, "id", "q");
        doc.set_attribute(input, "class", "search wide");
        let el = doc.element(input).unwrap();

        assert!(Selector::Universal.matches(el));
        assert!(Selector::Type("INPUT".into()).matches(el));
        assert!(Selector::Id("q".into()).matches(el));
        assert!(Selector::Class("wide".into()).matches(el));
        assert!(!Selector::Class("narrow".into()).matches(el));
    }
}
