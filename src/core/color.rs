//! ANSI escape wrapper for bar cells and title emphasis.  No external deps.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

// --- AnsiCode ---
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    /// Built at run time, e.g. true-colour `#rrggbb`.
    Owned(String),
}

impl AnsiCode {
    pub const fn bold() -> Self {
        Self::Static("\x1b[1m")
    }
    pub const fn black() -> Self {
        Self::Static("\x1b[30;1m")
    }
    /// Default bar colour.
    pub const fn red() -> Self {
        Self::Static("\x1b[31;1m")
    }
    pub const fn green() -> Self {
        Self::Static("\x1b[32;1m")
    }
    pub const fn yellow() -> Self {
        Self::Static("\x1b[33;1m")
    }
    pub const fn blue() -> Self {
        Self::Static("\x1b[34;1m")
    }
    pub const fn magenta() -> Self {
        Self::Static("\x1b[35;1m")
    }
    pub const fn cyan() -> Self {
        Self::Static("\x1b[36;1m")
    }
    pub const fn white() -> Self {
        Self::Static("\x1b[37;1m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self::Static("\x1b[0m")
    }

    /// True-colour escape `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Owned(format!("\x1b[38;2;{r};{g};{b}m"))
    }

    /// Parse colour names or `#rrggbb`.  Falls back to hex parser on miss.
    ///
    /// # Errors
    /// Anything that is neither a known name nor six hex digits.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::black()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "white" => Ok(Self::white()),
            _ => Self::from_hex(s),
        }
    }

    /// # Errors
    /// Wrong length or a non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            Self::Owned(s) => s,
        }
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => {
                f.write_str("colour must be a known name or exactly 6 hex digits")
            }
        }
    }
}
impl std::error::Error for ColorError {}
