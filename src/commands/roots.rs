//! Roots command handler

use std::path::Path;

use anyhow::Result;

use navweave::presentation::create_navigation_use_case;

use super::Session;
use crate::ui::views::roots::RootsView;

pub fn cmd_roots(
    session: &Session,
    menu: &Path,
    categories: Option<&Path>,
    count: Option<usize>,
) -> Result<()> {
    let count = count.unwrap_or(session.config.mega_menu.navbar_root_count);
    let roots = create_navigation_use_case().navbar_roots(menu, categories, count)?;

    session.finish(serde_json::json!({ "roots": roots }), |ui| {
        RootsView::new(&roots).render(ui.color, ui.unicode)
    })
}
