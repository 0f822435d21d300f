//! Color names understood by Graphviz

use std::fmt;

/// X11 color names accepted by Graphviz
const X11_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrod", "lightgoldenrodyellow", "lightgray",
    "lightgreen", "lightgrey", "lightpink", "lightsalmon", "lightseagreen", "lightskyblue",
    "lightslateblue", "lightslategray", "lightslategrey", "lightsteelblue", "lightyellow",
    "lime", "limegreen", "linen", "magenta", "maroon", "mediumaquamarine", "mediumblue",
    "mediumorchid", "mediumpurple", "mediumseagreen", "mediumslateblue", "mediumspringgreen",
    "mediumturquoise", "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin",
    "navajowhite", "navy", "navyblue", "none", "oldlace", "olive", "olivedrab", "orange",
    "orangered", "orchid", "palegoldenrod", "palegreen", "paleturquoise", "palevioletred",
    "papayawhip", "peachpuff", "peru", "pink", "plum", "powderblue", "purple", "rebeccapurple",
    "red", "rosybrown", "royalblue", "saddlebrown", "salmon", "sandybrown", "seagreen",
    "seashell", "sienna", "silver", "skyblue", "slateblue", "slategray", "slategrey", "snow",
    "springgreen", "steelblue", "tan", "teal", "thistle", "tomato", "transparent", "turquoise",
    "violet", "violetred", "webgray", "webgreen", "webmaroon", "webpurple", "wheat", "white",
    "whitesmoke", "x11gray", "x11green", "x11maroon", "x11purple", "yellow", "yellowgreen",
];

/// X11 colors that also come in the `name1` .. `name4` shades
const X11_SHADED: &[&str] = &[
    "antiquewhite", "aquamarine", "azure", "bisque", "blue", "brown", "burlywood", "cadetblue",
    "chartreuse", "chocolate", "coral", "cornsilk", "cyan", "darkgoldenrod", "darkolivegreen",
    "darkorange", "darkorchid", "darkseagreen", "darkslategray", "deeppink", "deepskyblue",
    "dodgerblue", "firebrick", "gold", "goldenrod", "green", "honeydew", "hotpink", "indianred",
    "ivory", "khaki", "lavenderblush", "lemonchiffon", "lightblue", "lightcyan",
    "lightgoldenrod", "lightpink", "lightsalmon", "lightskyblue", "lightsteelblue",
    "lightyellow", "magenta", "maroon", "mediumorchid", "mediumpurple", "mistyrose",
    "navajowhite", "olivedrab", "orange", "orangered", "orchid", "palegreen", "paleturquoise",
    "palevioletred", "peachpuff", "pink", "plum", "purple", "red", "rosybrown", "royalblue",
    "salmon", "seagreen", "seashell", "sienna", "skyblue", "slateblue", "slategray", "snow",
    "springgreen", "steelblue", "tan", "thistle", "tomato", "turquoise", "violetred", "wheat",
    "yellow",
];

/// A color name the renderer is known to accept.
///
/// Names are case-insensitive and stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Validate a color name. Returns `None` for unsupported names.
    pub fn parse(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        is_supported(&lower).then_some(Self(lower))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether `name` is a color Graphviz understands
pub fn is_supported(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    if let Some(hex) = name.strip_prefix('#') {
        return is_hex_color(hex);
    }
    if X11_COLORS.contains(&name.as_str()) {
        return true;
    }
    is_gray_level(&name) || is_shade(&name)
}

/// `rrggbb` or `rrggbbaa`
fn is_hex_color(hex: &str) -> bool {
    matches!(hex.len(), 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// `gray0` .. `gray100` and the `grey` spelling
fn is_gray_level(name: &str) -> bool {
    let Some(level) = name
        .strip_prefix("gray")
        .or_else(|| name.strip_prefix("grey"))
    else {
        return false;
    };
    !level.is_empty()
        && level.chars().all(|c| c.is_ascii_digit())
        && level.parse::<u32>().is_ok_and(|n| n <= 100)
}

fn is_shade(name: &str) -> bool {
    let Some(base) = name.strip_suffix(['1', '2', '3', '4']) else {
        return false;
    };
    X11_SHADED.contains(&base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert!(is_supported("firebrick"));
        assert!(is_supported("black"));
        assert!(is_supported("Blue"));
        for name in ["webgray", "webgreen", "webmaroon", "webpurple"] {
            assert!(is_supported(name), "{name}");
        }
        for name in ["x11gray", "x11green", "x11maroon", "x11purple"] {
            assert!(is_supported(name), "{name}");
        }
        assert!(!is_supported("webblue"));
        assert!(!is_supported("notacolor"));
        assert!(!is_supported(""));
    }

    #[test]
    fn test_shades_and_gray_levels() {
        assert!(is_supported("firebrick3"));
        assert!(is_supported("gray0"));
        assert!(is_supported("grey100"));
        assert!(!is_supported("gray101"));
        assert!(!is_supported("firebrick5"));
        assert!(!is_supported("black1"));
    }

    #[test]
    fn test_hex_colors() {
        assert!(is_supported("#ff0000"));
        assert!(is_supported("#FF000080"));
        assert!(!is_supported("#fff"));
        assert!(!is_supported("#gg0000"));
    }

    #[test]
    fn test_parse_normalizes_case() {
        let color = Color::parse("FireBrick").unwrap();
        assert_eq!(color.as_str(), "firebrick");
        assert_eq!(color.to_string(), "firebrick");
        assert!(Color::parse("nope").is_none());
    }
}
