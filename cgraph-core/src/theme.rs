//! Theme definitions for rendered graphs

/// Vertex shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeShape {
    /// Rectangle with square corners
    #[default]
    Box,
    /// Rectangle with rounded corners
    RoundedBox,
    /// Ellipse
    Ellipse,
    /// Text only
    Plaintext,
}

impl NodeShape {
    /// Graphviz `shape` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeShape::Box | NodeShape::RoundedBox => "box",
            NodeShape::Ellipse => "ellipse",
            NodeShape::Plaintext => "plaintext",
        }
    }

    /// Graphviz `style` attribute, if the shape needs one
    pub fn style(&self) -> Option<&'static str> {
        match self {
            NodeShape::RoundedBox => Some("rounded"),
            _ => None,
        }
    }
}

/// Layout direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    /// Roots at the top
    #[default]
    TopBottom,
    /// Roots on the left
    LeftRight,
}

impl RankDir {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankDir::TopBottom => "TB",
            RankDir::LeftRight => "LR",
        }
    }
}

/// Theme colors and styles
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme name
    pub name: String,
    /// Vertex shape
    pub node_shape: NodeShape,
    /// Layout direction
    pub rank_dir: RankDir,
    /// Font family
    pub font_family: String,
    /// Graph background, `None` leaves the Graphviz default
    pub background: Option<String>,
    /// Color for nodes, edges and clusters without an explicit color
    pub default_color: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// Default theme (black boxes, top to bottom)
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            node_shape: NodeShape::Box,
            rank_dir: RankDir::TopBottom,
            font_family: "Helvetica".to_string(),
            background: None,
            default_color: "black".to_string(),
        }
    }

    /// Rounded boxes laid out left to right
    pub fn rounded() -> Self {
        Self {
            name: "rounded".to_string(),
            node_shape: NodeShape::RoundedBox,
            rank_dir: RankDir::LeftRight,
            font_family: "Helvetica".to_string(),
            background: None,
            default_color: "gray30".to_string(),
        }
    }

    /// Light text on a dark background
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),
            node_shape: NodeShape::Box,
            rank_dir: RankDir::TopBottom,
            font_family: "Helvetica".to_string(),
            background: Some("#1e1e1e".to_string()),
            default_color: "white".to_string(),
        }
    }

    /// Get theme by name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "rounded" => Some(Self::rounded()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    /// Get all available theme names
    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "rounded", "dark"]
    }
}
