/// One element in the arena.
///
/// Text content is stored on the element itself; the arena has no separate
/// text nodes.
#[derive(Clone, Debug)]
pub struct Element {
    pub tag: String,
    pub attributes: Vec<(String, Option<String>)>,
    /// Inline style declarations in write order, property names lowercase.
    pub inline_style: Vec<(String, String)>,
    pub text: String,
    pub(crate) parent: Option<crate::ElementId>,
    pub(crate) children: Vec<crate::ElementId>,
}

impl Element {
    pub(crate) fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            inline_style: Vec::new(),
            text: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    pub fn parent(&self) -> Option<crate::ElementId> {
        self.parent
    }

    pub fn children(&self) -> &[crate::ElementId] {
        &self.children
    }

    /// Attribute value; valueless attributes (`<input disabled>`) yield `Some("")`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    pub fn set_attr(&mut self, name: &str, value: Option<String>) {
        match self
            .attributes
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => *v = value,
            None => self.attributes.push((name.to_ascii_lowercase(), value)),
        }
    }

    pub fn style_property(&self, name: &str) -> Option<&str> {
        self.inline_style
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Write an inline declaration, replacing an existing one in place.
    pub fn set_style_property(&mut self, name: &str, value: &str) {
        match self
            .inline_style
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
        {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => self
                .inline_style
                .push((name.to_ascii_lowercase(), value.to_string())),
        }
    }
}
