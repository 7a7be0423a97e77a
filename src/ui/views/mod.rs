pub mod categories;
pub mod config_warnings;
pub mod hover;
pub mod mega;
pub mod roots;
pub mod tree;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Label text, with a marker for nodes that have none
pub(crate) fn display_label(label: &str, supports_color: bool) -> String {
    if label.is_empty() {
        ColoredText::dim("(untitled)").render(supports_color)
    } else {
        label.to_string()
    }
}

/// `-> /href` suffix
pub(crate) fn href_suffix(href: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        " {} {}",
        Icon::Arrow.colored(supports_color, supports_unicode),
        ColoredText::info(href).render(supports_color)
    )
}

/// `word` or `words` depending on count
pub(crate) fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}
