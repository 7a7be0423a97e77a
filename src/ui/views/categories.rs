use navweave::CategoryUrlMap;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub struct CategoriesView<'a> {
    map: &'a CategoryUrlMap,
}

impl<'a> CategoriesView<'a> {
    pub fn new(map: &'a CategoryUrlMap) -> Self {
        Self { map }
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        if self.map.is_empty() {
            return format!(
                "{} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                ColoredText::warning("No categories with a url path.").render(supports_color)
            );
        }

        let entries = self.map.sorted_entries();
        let width = entries.iter().map(|(id, _)| id.len()).max().unwrap_or(0);

        let mut out = format!(
            "{} {} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::plain("Category urls:").bold().render(supports_color),
            entries.len()
        );
        for (id, path) in entries {
            out.push_str(&format!(
                "  {:<width$}  {}\n",
                id,
                ColoredText::info(format!("/{}", path)).render(supports_color),
                width = width
            ));
        }
        out
    }
}
