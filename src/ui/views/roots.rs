use navweave::application::RootSummary;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

use super::{display_label, href_suffix};

pub struct RootsView<'a> {
    roots: &'a [RootSummary],
}

impl<'a> RootsView<'a> {
    pub fn new(roots: &'a [RootSummary]) -> Self {
        Self { roots }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = format!(
            "{} {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::plain("Navbar roots:").bold().render(supports_color),
            self.roots.len()
        );

        for (i, root) in self.roots.iter().enumerate() {
            let panel = if root.has_children {
                format!(" {}", Icon::Collapse.colored(supports_color, supports_unicode))
            } else {
                String::new()
            };
            out.push_str(&format!(
                "  {}. {}{}{}\n",
                i + 1,
                display_label(&root.title, supports_color),
                href_suffix(&root.href, supports_color, supports_unicode),
                panel
            ));
        }

        out
    }
}
