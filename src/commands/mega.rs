//! Mega command handler

use std::path::Path;

use anyhow::Result;

use navweave::application::NavigationOptions;
use navweave::presentation::create_navigation_use_case;

use super::Session;
use crate::ui::views::mega::MegaMenuView;

pub fn cmd_mega(session: &Session, menu: &Path, categories: Option<&Path>) -> Result<()> {
    let options = NavigationOptions::from_config(&session.config);
    let result = create_navigation_use_case().build_mega_menu(menu, categories, &options)?;
    session.finish(&result, |ui| {
        MegaMenuView::new(&result).render(ui.color, ui.unicode)
    })
}
