//! Navigation Use Case
//!
//! Loads inputs through the ports and runs the domain builders.

use std::path::Path;

use crate::domain::entities::{MenuNode, NavigationTreeNode};
use crate::domain::policies::resolve_href;
use crate::domain::ports::{CategorySource, MenuSource};
use crate::domain::services::{
    build_category_url_map, group_from_index, CategoryUrlMap, MenuIndex, NavigationBuilder,
};
use crate::error::NavResult;

use super::options::NavigationOptions;
use super::result::{MegaMenuResult, RootSummary, TreeResult};

/// Id of the prepended home link
pub const HOME_ID: &str = "home";
const HOME_HREF: &str = "/";

/// Navigation use case - builds every navigation shape from the exports
pub struct NavigationUseCase<MS, CS>
where
    MS: MenuSource,
    CS: CategorySource,
{
    menu_source: MS,
    category_source: CS,
}

impl<MS, CS> NavigationUseCase<MS, CS>
where
    MS: MenuSource,
    CS: CategorySource,
{
    /// Create a new navigation use case
    pub fn new(menu_source: MS, category_source: CS) -> Self {
        Self {
            menu_source,
            category_source,
        }
    }

    /// Build the category url map; no category file means an empty map
    pub fn category_urls(&self, path: Option<&Path>) -> NavResult<CategoryUrlMap> {
        let Some(path) = path else {
            return Ok(CategoryUrlMap::new());
        };
        let roots = self.category_source.load_categories(path)?;
        let map = build_category_url_map(&roots);
        tracing::debug!(entries = map.len(), "built category url map");
        Ok(map)
    }

    /// Build the nested navigation tree
    pub fn build_tree(
        &self,
        menu: &Path,
        categories: Option<&Path>,
        options: &NavigationOptions,
    ) -> NavResult<TreeResult> {
        let _span = tracing::info_span!("build_tree", menu = %menu.display()).entered();

        let nodes = self.menu_source.load_menu(menu)?;
        let urls = self.category_urls(categories)?;
        let index = MenuIndex::new(&nodes);

        let mut tree = NavigationBuilder::new(&urls)
            .with_include_root(options.include_root)
            .with_id_prefix(options.id_prefix.clone())
            .build_from_index(&index);
        if let Some(label) = &options.home_label {
            tree.insert(0, NavigationTreeNode::link(HOME_ID, label.clone(), HOME_HREF));
        }

        let result = TreeResult {
            tree,
            input_nodes: nodes.len(),
            orphans: index.orphans().map(MenuNode::id).collect(),
        };
        tracing::info!(
            input = result.input_nodes,
            output = result.output_nodes(),
            orphans = result.orphans.len(),
            "built navigation tree"
        );
        Ok(result)
    }

    /// Group the mega menu
    pub fn build_mega_menu(
        &self,
        menu: &Path,
        categories: Option<&Path>,
        options: &NavigationOptions,
    ) -> NavResult<MegaMenuResult> {
        let _span = tracing::info_span!("build_mega_menu", menu = %menu.display()).entered();

        let nodes = self.menu_source.load_menu(menu)?;
        let urls = self.category_urls(categories)?;
        let index = MenuIndex::new(&nodes);

        let result = MegaMenuResult {
            roots: group_from_index(&index, &urls, &options.layout),
            orphans: index.orphans().map(MenuNode::id).collect(),
        };
        tracing::info!(
            roots = result.roots.len(),
            panels = result.panel_count(),
            "built mega menu"
        );
        Ok(result)
    }

    /// First `count` roots, as shown in the compact desktop bar
    pub fn navbar_roots(
        &self,
        menu: &Path,
        categories: Option<&Path>,
        count: usize,
    ) -> NavResult<Vec<RootSummary>> {
        let nodes = self.menu_source.load_menu(menu)?;
        let urls = self.category_urls(categories)?;
        let index = MenuIndex::new(&nodes);

        Ok(index
            .leading_roots(count)
            .into_iter()
            .map(|root| RootSummary {
                id: root.id(),
                title: root.label().to_string(),
                href: resolve_href(root, &urls),
                has_children: index.has_children(root.id()),
            })
            .collect())
    }
}
