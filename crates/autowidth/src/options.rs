use serde::Deserialize;

/// Per-controller configuration, snapshotted when the controller is built.
///
/// Loaded from TOML with kebab-case keys:
///
/// ```
/// use autowidth::AutoWidthOptions;
///
/// let opts = AutoWidthOptions::from_toml_str(
///     "min-width = 40\nmax-width = 200\ncache = true\ncache-capacity = 64",
/// )
/// .unwrap();
/// assert_eq!(opts.min_width, Some(40.0));
/// assert_eq!(opts.cache_capacity, Some(64));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct AutoWidthOptions {
    /// Floor, applied after measuring.
    pub min_width: Option<f32>,
    /// Ceiling, applied after the floor.
    pub max_width: Option<f32>,
    /// Remember measured widths per exact string.
    pub cache: bool,
    /// Evict the oldest entry past this many. `None` is unbounded.
    pub cache_capacity: Option<usize>,
}

#[derive(Debug)]
pub enum OptionsError {
    Parse(toml::de::Error),
    NonFiniteBound { field: &'static str, value: f32 },
    ZeroCapacity,
}

impl std::fmt::Display for OptionsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionsError::Parse(err) => write!(f, "invalid options: {err}"),
            OptionsError::NonFiniteBound { field, value } => {
                write!(f, "{field} must be a finite number of px, got {value}")
            }
            OptionsError::ZeroCapacity => write!(f, "cache-capacity must be at least 1"),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for OptionsError {
    fn from(err: toml::de::Error) -> Self {
        OptionsError::Parse(err)
    }
}

impl AutoWidthOptions {
    pub fn from_toml_str(source: &str) -> Result<Self, OptionsError> {
        let options: AutoWidthOptions = toml::from_str(source)?;
        options.validate()?;
        Ok(options)
    }

    /// `min-width > max-width` is allowed: the maximum wins when clamping.
    pub fn validate(&self) -> Result<(), OptionsError> {
        for (field, bound) in [("min-width", self.min_width), ("max-width", self.max_width)] {
            if let Some(value) = bound.filter(|v| !v.is_finite()) {
                return Err(OptionsError::NonFiniteBound { field, value });
            }
        }
        if self.cache_capacity == Some(0) {
            return Err(OptionsError::ZeroCapacity);
        }
        Ok(())
    }

    pub fn with_min_width(mut self, px: f32) -> Self {
        self.min_width = Some(px);
        self
    }

    pub fn with_max_width(mut self, px: f32) -> Self {
        self.max_width = Some(px);
        self
    }

    pub fn with_cache(mut self) -> Self {
        self.cache = true;
        self
    }

    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache = true;
        self.cache_capacity = Some(capacity);
        self
    }

    /// Floor first, then ceiling.
    pub fn clamp(&self, width: f32) -> f32 {
        let mut width = width;
        if let Some(min) = self.min_width.filter(|min| width < *min) {
            width = min;
        }
        if let Some(max) = self.max_width.filter(|max| width > *max) {
            width = max;
        }
        width
    }
}
