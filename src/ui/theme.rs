use crossterm::style::Color;

/// Design tokens for the navweave CLI.
///
/// Design constraints:
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and tree connectors must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "→";
    pub const BULLET: &str = "·";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "->";
    pub const BULLET: &str = "-";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";
}

pub mod tree {
    pub const BRANCH: &str = "├─ ";
    pub const LAST: &str = "└─ ";
    pub const PIPE: &str = "│  ";
    pub const SPACE: &str = "   ";
}

pub mod tree_ascii {
    pub const BRANCH: &str = "|- ";
    pub const LAST: &str = "`- ";
    pub const PIPE: &str = "|  ";
    pub const SPACE: &str = "   ";
}

/// Tree connectors for the requested charset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeGlyphs {
    pub branch: &'static str,
    pub last: &'static str,
    pub pipe: &'static str,
    pub space: &'static str,
}

impl TreeGlyphs {
    pub fn new(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                branch: tree::BRANCH,
                last: tree::LAST,
                pipe: tree::PIPE,
                space: tree::SPACE,
            }
        } else {
            Self {
                branch: tree_ascii::BRANCH,
                last: tree_ascii::LAST,
                pipe: tree_ascii::PIPE,
                space: tree_ascii::SPACE,
            }
        }
    }

    /// Connector for an item and the prefix its children continue with
    pub fn connector(&self, is_last: bool) -> (&'static str, &'static str) {
        if is_last {
            (self.last, self.space)
        } else {
            (self.branch, self.pipe)
        }
    }
}
