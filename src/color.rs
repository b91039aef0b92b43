//! RGB triple type and hex codec.
//!
//! Decoding is best-effort and never fails: malformed or short hex input
//! yields zeroed channels. Encoding always produces exactly 6 uppercase hex
//! digits, clamping and rounding arbitrary numeric input (non-finite → 0).

use rand::Rng;

/// A single gradient color stop: one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create from raw channel bytes.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode a `"#RRGGBB"` or `"RRGGBB"` string.
    ///
    /// Best-effort: each malformed or missing 2-digit pair decodes to 0.
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        Self {
            r: parse_pair(hex, 0),
            g: parse_pair(hex, 2),
            b: parse_pair(hex, 4),
        }
    }

    /// Build from fractional channel values.
    ///
    /// NaN maps to 0; everything else is rounded to the nearest integer and
    /// clamped into [0, 255].
    pub fn from_channels(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Encode as exactly 6 uppercase hex digits, without a `#`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Draw a pseudo-random color, uniform over all 24-bit values.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            r: rng.gen(),
            g: rng.gen(),
            b: rng.gen(),
        }
    }
}

/// Parse one 2-digit hex pair starting at `offset`; malformed input yields 0.
fn parse_pair(hex: &str, offset: usize) -> u8 {
    hex.get(offset..offset + 2)
        .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        .unwrap_or(0)
}

/// Round and clamp one fractional channel into a byte. NaN decodes to 0.
fn clamp_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Check whether a string is a well-formed `#RRGGBB` color.
///
/// The codec itself never rejects input; this is for callers that want to
/// warn about typos before decoding.
pub fn is_valid_hex(s: &str) -> bool {
    let s = s.strip_prefix('#').unwrap_or(s);
    s.len() == 6 && s.chars().all(|c| c.is_ascii_hexdigit())
}
