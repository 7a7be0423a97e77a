use navweave::application::MegaMenuResult;
use navweave::ColumnEntry;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

use super::{display_label, href_suffix, plural};

pub struct MegaMenuView<'a> {
    result: &'a MegaMenuResult,
}

impl<'a> MegaMenuView<'a> {
    pub fn new(result: &'a MegaMenuResult) -> Self {
        Self { result }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        if self.result.roots.is_empty() {
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning("Menu is empty.").render(supports_color)
            ));
            return out;
        }

        out.push_str(&format!(
            "{} {} {}, {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::plain("Mega menu:").bold().render(supports_color),
            plural(self.result.roots.len(), "root", "roots"),
            plural(self.result.panel_count(), "panel", "panels")
        ));

        for root in &self.result.roots {
            let marker = if root.has_panel() {
                format!("{} ", Icon::Expand.colored(supports_color, supports_unicode))
            } else {
                String::new()
            };
            out.push_str(&format!(
                "{}{}{}\n",
                marker,
                ColoredText::plain(display_label(&root.title, supports_color))
                    .bold()
                    .render(supports_color),
                href_suffix(&root.href, supports_color, supports_unicode)
            ));

            for (n, column) in root.columns.iter().enumerate() {
                out.push_str(&format!(
                    "  {}\n",
                    ColoredText::dim(format!("column {}", n + 1)).render(supports_color)
                ));
                for entry in &column.entries {
                    render_entry(&mut out, entry, supports_color, supports_unicode);
                }
            }
        }

        out
    }
}

fn render_entry(out: &mut String, entry: &ColumnEntry, supports_color: bool, supports_unicode: bool) {
    out.push_str(&format!(
        "    {}{}\n",
        display_label(&entry.title, supports_color),
        href_suffix(&entry.href, supports_color, supports_unicode)
    ));
    for link in entry.displayed_links() {
        out.push_str(&format!(
            "      {} {}{}\n",
            Icon::Bullet.colored(supports_color, supports_unicode),
            display_label(&link.title, supports_color),
            href_suffix(&link.href, supports_color, supports_unicode)
        ));
    }
}
