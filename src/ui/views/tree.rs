use navweave::application::TreeResult;
use navweave::NavigationTreeNode;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::TreeGlyphs;

use super::{display_label, href_suffix, plural};

pub struct TreeView<'a> {
    result: &'a TreeResult,
}

impl<'a> TreeView<'a> {
    pub fn new(result: &'a TreeResult) -> Self {
        Self { result }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let mut out = String::new();

        if self.result.tree.is_empty() {
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
            ColoredText::plain("Navigation tree:").bold().render(supports_color),
            plural(self.result.tree.len(), "top-level item", "top-level items"),
            plural(self.result.output_nodes(), "node", "nodes")
        ));

        let glyphs = TreeGlyphs::new(supports_unicode);
        render_nodes(
            &mut out,
            &self.result.tree,
            glyphs,
            supports_color,
            supports_unicode,
        );

        if !self.result.orphans.is_empty() {
            let ids: Vec<String> = self.result.orphans.iter().map(i64::to_string).collect();
            out.push_str(&format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning(format!(
                    "{} moved to the top level: {}",
                    plural(ids.len(), "node", "nodes"),
                    ids.join(", ")
                ))
                .render(supports_color)
            ));
        }

        out
    }
}

/// Depth-first rendering with an explicit stack of open levels
fn render_nodes(
    out: &mut String,
    roots: &[NavigationTreeNode],
    glyphs: TreeGlyphs,
    supports_color: bool,
    supports_unicode: bool,
) {
    let mut levels = vec![(roots.iter(), String::new())];

    while let Some((level, prefix)) = levels.last_mut() {
        let Some(node) = level.next() else {
            levels.pop();
            continue;
        };
        let (connector, continuation) = glyphs.connector(level.len() == 0);
        let label = display_label(node.label(), supports_color);
        let suffix = node
            .href()
            .map(|href| href_suffix(href, supports_color, supports_unicode))
            .unwrap_or_default();

        if node.is_expandable() {
            out.push_str(&format!(
                "{}{}{} {}{}\n",
                prefix,
                connector,
                Icon::Expand.colored(supports_color, supports_unicode),
                label,
                suffix
            ));
            let nested = format!("{}{}", prefix, continuation);
            levels.push((node.children().iter(), nested));
        } else {
            out.push_str(&format!("{}{}{}{}\n", prefix, connector, label, suffix));
        }
    }
}
