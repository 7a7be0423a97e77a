//! Categories command handler

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use navweave::presentation::create_navigation_use_case;

use super::Session;
use crate::ui::views::categories::CategoriesView;

#[derive(Serialize)]
struct CategoryUrl<'a> {
    id: &'a str,
    url_path: &'a str,
}

pub fn cmd_categories(session: &Session, categories: &Path) -> Result<()> {
    let map = create_navigation_use_case().category_urls(Some(categories))?;
    let entries: Vec<CategoryUrl<'_>> = map
        .sorted_entries()
        .into_iter()
        .map(|(id, url_path)| CategoryUrl { id, url_path })
        .collect();

    session.finish(serde_json::json!({ "categories": entries }), |ui| {
        CategoriesView::new(&map).render(ui.color, ui.unicode)
    })
}
