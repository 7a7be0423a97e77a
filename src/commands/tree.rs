//! Tree command handler

use std::path::Path;

use anyhow::Result;

use navweave::application::NavigationOptions;
use navweave::presentation::create_navigation_use_case;

use super::Session;
use crate::ui::views::tree::TreeView;

pub fn cmd_tree(
    session: &Session,
    menu: &Path,
    categories: Option<&Path>,
    no_root: bool,
    home: Option<String>,
) -> Result<()> {
    let mut options = NavigationOptions::from_config(&session.config);
    if no_root {
        options = options.with_include_root(false);
    }
    if home.is_some() {
        options = options.with_home_label(home);
    }

    let result = create_navigation_use_case().build_tree(menu, categories, &options)?;
    result.ensure_printable()?;
    session.finish(&result, |ui| TreeView::new(&result).render(ui.color, ui.unicode))
}
