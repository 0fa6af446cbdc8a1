/// A value written through `set_css`: numbers are pixel lengths.
#[derive(Clone, Debug, PartialEq)]
pub enum StyleValue {
    Number(f32),
    Text(String),
}

impl StyleValue {
    /// Serialize for an inline style: `Number(4.0)` → `"4px"`.
    pub fn to_css_string(&self) -> String {
        match self {
            StyleValue::Number(n) => format!("{n}px"),
            StyleValue::Text(s) => s.clone(),
        }
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Text(s)
    }
}

/// CSS `display` value. Only what inline text boxes need.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Display {
    Block,
    Inline,
    InlineBlock,
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Static,
    Relative,
    Absolute,
    Fixed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextTransform {
    None,
    Uppercase,
    Lowercase,
    Capitalize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WhiteSpace {
    Normal,
    /// Spaces are kept verbatim.
    Pre,
    Nowrap,
}

impl Display {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "block" => Some(Display::Block),
            "inline" => Some(Display::Inline),
            "inline-block" => Some(Display::InlineBlock),
            "none" => Some(Display::None),
            _ => None, // unknown / unsupported → ignored
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Inline => "inline",
            Display::InlineBlock => "inline-block",
            Display::None => "none",
        }
    }
}

impl Position {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "static" => Some(Position::Static),
            "relative" => Some(Position::Relative),
            "absolute" => Some(Position::Absolute),
            "fixed" => Some(Position::Fixed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Static => "static",
            Position::Relative => "relative",
            Position::Absolute => "absolute",
            Position::Fixed => "fixed",
        }
    }
}

impl TextTransform {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "none" => Some(TextTransform::None),
            "uppercase" => Some(TextTransform::Uppercase),
            "lowercase" => Some(TextTransform::Lowercase),
            "capitalize" => Some(TextTransform::Capitalize),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TextTransform::None => "none",
            TextTransform::Uppercase => "uppercase",
            TextTransform::Lowercase => "lowercase",
            TextTransform::Capitalize => "capitalize",
        }
    }
}

impl WhiteSpace {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "normal" => Some(WhiteSpace::Normal),
            "pre" => Some(WhiteSpace::Pre),
            "nowrap" => Some(WhiteSpace::Nowrap),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WhiteSpace::Normal => "normal",
            WhiteSpace::Pre => "pre",
            WhiteSpace::Nowrap => "nowrap",
        }
    }
}

/// `#rgb`, `#rrggbb` or a basic color keyword, as RGBA.
pub fn parse_color(value: &str) -> Option<(u8, u8, u8, u8)> {
    let v = value.trim();
    if let Some(hex) = v.strip_prefix('#') {
        return parse_hex_color(hex);
    }
    let [r, g, b] = match v.to_ascii_lowercase().as_str() {
        "transparent" => return Some((0, 0, 0, 0)),
        "black" => [0, 0, 0],
        "white" => [255, 255, 255],
        "red" => [255, 0, 0],
        "green" => [0, 128, 0],
        "blue" => [0, 0, 255],
        "gray" | "grey" => [128, 128, 128],
        "silver" => [192, 192, 192],
        _ => return None,
    };
    Some((r, g, b, 255))
}

fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8, u8)> {
    let digits = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;
    let channel = |hi: u8, lo: u8| hi * 16 + lo;
    match digits.as_slice() {
        [r, g, b] => Some((channel(*r, *r), channel(*g, *g), channel(*b, *b), 255)),
        [r1, r2, g1, g2, b1, b2] => Some((channel(*r1, *r2), channel(*g1, *g2), channel(*b1, *b2), 255)),
        _ => None,
    }
}

/// Parse `NNpx` (e.g. "16px", "-99999px", "12.5px").
pub fn parse_px(value: &str) -> Option<f32> {
    let v = value.trim();
    let num = v.strip_suffix("px")?.trim().parse::<f32>().ok()?;
    num.is_finite().then_some(num)
}
