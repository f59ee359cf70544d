//! Run-time configuration object + fluent builder.

use crate::core::{
    color::AnsiCode,
    constants::{BAR_WIDTH, DEFAULT_BINS, DEFAULT_HIGH, DEFAULT_LOW, DEFAULT_TITLE},
    error::ConfigError,
    histogram::validate_geometry,
};

/// Immutable parameters handed to the histogram and the renderer.
#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    pub bins: usize,
    pub low: f64,
    pub high: f64,
    pub bar_width: usize,
    /// `None` prints bars without escape sequences.
    pub color: Option<AnsiCode>,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

impl Default for Config {
    /// `"Title"`, 10 bins over `[0.5, 10.5)`, 40-cell bold red bars.
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            bins: DEFAULT_BINS,
            low: DEFAULT_LOW,
            high: DEFAULT_HIGH,
            bar_width: BAR_WIDTH,
            color: Some(AnsiCode::red()),
        }
    }
}

/// Fluent builder; unset fields fall back to [`Config::default`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    title: Option<String>,
    bins: Option<usize>,
    low: Option<f64>,
    high: Option<f64>,
    bar_width: Option<usize>,
    color: Option<Option<AnsiCode>>,
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = Some(t.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn bins(mut self, n: usize) -> Self {
        self.bins = Some(n);
        self
    }
    #[inline]
    #[must_use]
    pub fn range(mut self, r: std::ops::Range<f64>) -> Self {
        self.low = Some(r.start);
        self.high = Some(r.end);
        self
    }
    #[inline]
    #[must_use]
    pub fn low(mut self, v: f64) -> Self {
        self.low = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn high(mut self, v: f64) -> Self {
        self.high = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn bar_width(mut self, w: usize) -> Self {
        self.bar_width = Some(w);
        self
    }
    #[inline]
    #[must_use]
    pub fn color(mut self, c: AnsiCode) -> Self {
        self.color = Some(Some(c));
        self
    }
    #[inline]
    #[must_use]
    pub fn no_color(mut self) -> Self {
        self.color = Some(None);
        self
    }

    /// # Errors
    /// Zero bins, an empty/inverted/non-finite range or a zero bar width.
    pub fn build(self) -> Result<Config, ConfigError> {
        let d = Config::default();
        let bins = self.bins.unwrap_or(d.bins);
        let low = self.low.unwrap_or(d.low);
        let high = self.high.unwrap_or(d.high);
        validate_geometry(bins, low, high)?;

        let bar_width = self.bar_width.unwrap_or(d.bar_width);
        if bar_width == 0 {
            return Err(ConfigError::InvalidBarWidth(bar_width));
        }
        Ok(Config {
            title: self.title.unwrap_or(d.title),
            bins,
            low,
            high,
            bar_width,
            color: self.color.unwrap_or(d.color),
        })
    }
}

/// Ergonomic `?` on a builder chain.
impl From<ConfigBuilder> for Result<Config, ConfigError> {
    fn from(b: ConfigBuilder) -> Self {
        b.build()
    }
}
