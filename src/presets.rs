//! Built-in output formats and named color presets.
//!
//! Presets are an ordered list of `(name, stops)` records rather than a keyed
//! map, so listing order is stable and every entry can be validated.

/// The built-in output format templates, in menu order.
///
/// The first entry is the default (`&`-style hex codes).
pub const FORMATS: &[&str] = &[
    "&#$1$2$3$4$5$6$f$c",
    "<#$1$2$3$4$5$6>$f$c",
    "&x&$1&$2&$3&$4&$5&$6$f$c",
    "§x§$1§$2§$3§$4§$5§$6$f$c",
    "[COLOR=#$1$2$3$4$5$6]$c[/COLOR]",
];

/// A named, ordered set of gradient stop colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: &'static str,
    pub stops: &'static [&'static str],
}

/// The built-in color presets, in menu order.
///
/// The first entry is the default stop pair.
pub const PRESETS: &[ColorPreset] = &[
    ColorPreset {
        name: "Hexgrad",
        stops: &["#00FFE0", "#EB00FF"],
    },
    ColorPreset {
        name: "Rainbow",
        stops: &[
            "#FF0000", "#FF7F00", "#FFFF00", "#00FF00", "#0000FF", "#4B0082", "#9400D3",
        ],
    },
    ColorPreset {
        name: "Skyline",
        stops: &["#1488CC", "#2B32B2"],
    },
    ColorPreset {
        name: "Mango",
        stops: &["#FFE259", "#FFA751"],
    },
    ColorPreset {
        name: "Vice City",
        stops: &["#3494E6", "#EC6EAD"],
    },
    ColorPreset {
        name: "Dawn",
        stops: &["#F3904F", "#3B4371"],
    },
    ColorPreset {
        name: "Rose",
        stops: &["#F4C4F3", "#FC67FA"],
    },
    ColorPreset {
        name: "Firewatch",
        stops: &["#CB2D3E", "#EF473A"],
    },
];

/// Look up a preset by name, case-insensitively.
pub fn find(name: &str) -> Option<&'static ColorPreset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
