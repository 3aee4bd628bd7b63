//! Folder → item navigation
//!
//! Two views over the catalog: the folder grid (filtered by category) and
//! the contents of one open folder. All state lives in [`NavigatorState`];
//! [`Navigator::render`] is a pure function of that state and the catalog.

use crate::catalog::{Catalog, CatalogItem, Filter, Folder};
use std::sync::Arc;

/// Which of the two views is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Folders,
    Contents,
}

/// Where the user is. The open folder only exists inside `Contents`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Location {
    #[default]
    Folders,
    Contents {
        folder_id: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavigatorState {
    pub location: Location,
    pub filter: Filter,
}

impl NavigatorState {
    pub fn with_filter(filter: Filter) -> Self {
        Self {
            location: Location::Folders,
            filter,
        }
    }

    pub fn view(&self) -> View {
        match self.location {
            Location::Folders => View::Folders,
            Location::Contents { .. } => View::Contents,
        }
    }

    pub fn open_folder_id(&self) -> Option<&str> {
        match &self.location {
            Location::Folders => None,
            Location::Contents { folder_id } => Some(folder_id),
        }
    }
}

/// What the presentation layer should draw
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewDescription<'a> {
    Folders {
        filter: Filter,
        folders: Vec<&'a Folder>,
    },
    Contents {
        folder: &'a Folder,
        items: &'a [CatalogItem],
    },
}

impl ViewDescription<'_> {
    /// Number of selectable entries
    pub fn len(&self) -> usize {
        match self {
            ViewDescription::Folders { folders, .. } => folders.len(),
            ViewDescription::Contents { items, .. } => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Folders visible under `filter`, in catalog order
pub fn visible_folders(catalog: &Catalog, filter: Filter) -> Vec<&Folder> {
    catalog.iter().filter(|f| filter.admits(f.category)).collect()
}

pub struct Navigator {
    catalog: Arc<Catalog>,
    state: NavigatorState,
}

impl Navigator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_state(catalog, NavigatorState::default())
    }

    pub fn with_state(catalog: Arc<Catalog>, state: NavigatorState) -> Self {
        Self { catalog, state }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn view(&self) -> View {
        self.state.view()
    }

    pub fn filter(&self) -> Filter {
        self.state.filter
    }

    pub fn open_folder_id(&self) -> Option<&str> {
        self.state.open_folder_id()
    }

    pub fn current_folder(&self) -> Option<&Folder> {
        self.open_folder_id().and_then(|id| self.catalog.get(id))
    }

    /// Enter a folder. Only valid from the folder view; an unknown id is
    /// ignored. Returns whether the view changed.
    pub fn open_folder(&mut self, id: &str) -> bool {
        if self.state.view() != View::Folders || !self.catalog.contains(id) {
            tracing::debug!(folder = id, "open ignored");
            return false;
        }
        self.state.location = Location::Contents {
            folder_id: id.to_string(),
        };
        tracing::debug!(folder = id, "folder opened");
        true
    }

    /// Leave the open folder. Returns whether the view changed.
    pub fn go_back(&mut self) -> bool {
        if self.state.view() != View::Contents {
            return false;
        }
        self.state.location = Location::Folders;
        tracing::debug!(filter = %self.state.filter, "back to folders");
        true
    }

    /// Change the category filter. Always lands on the folder view, even
    /// when a folder is open.
    pub fn set_filter(&mut self, filter: Filter) {
        self.go_back();
        self.state.filter = filter;
        tracing::debug!(filter = %filter, "filter applied");
    }

    pub fn render(&self) -> ViewDescription<'_> {
        render(&self.catalog, &self.state)
    }
}

/// Pure view computation
pub fn render<'a>(catalog: &'a Catalog, state: &NavigatorState) -> ViewDescription<'a> {
    match &state.location {
        Location::Contents { folder_id } => match catalog.get(folder_id) {
            Some(folder) => ViewDescription::Contents {
                folder,
                items: &folder.items,
            },
            // Unreachable through Navigator, which only stores known ids
            None => ViewDescription::Folders {
                filter: state.filter,
                folders: visible_folders(catalog, state.filter),
            },
        },
        Location::Folders => ViewDescription::Folders {
            filter: state.filter,
            folders: visible_folders(catalog, state.filter),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, CatalogItem, Folder};

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_folders(vec![
                Folder::new(
                    "baumit",
                    "Baumit",
                    Category::Industrial,
                    vec![
                        CatalogItem::image("Baumit/overview.jpg", "Overview", ""),
                        CatalogItem::pdf("Baumit/Group FD/a.pdf", "A", ""),
                        CatalogItem::pdf("Baumit/Group FD/b.pdf", "B", ""),
                    ],
                ),
                Folder::new("stretford", "Stretford", Category::Canopy, vec![]),
                Folder::new("lavington", "Lavington", Category::Schools, vec![]),
                Folder::new(
                    "cv",
                    "CV",
                    Category::Docs,
                    vec![CatalogItem::pdf("cv.pdf", "CV", "")],
                ),
                Folder::new("cimcoop", "CimCoop", Category::Industrial, vec![]),
            ])
            .unwrap(),
        )
    }

    fn visible_ids(nav: &Navigator) -> Vec<String> {
        match nav.render() {
            ViewDescription::Folders { folders, .. } => {
                folders.iter().map(|f| f.id.clone()).collect()
            }
            other => panic!("expected folder view, got {:?}", other),
        }
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new(catalog());
        assert_eq!(nav.view(), View::Folders);
        assert_eq!(nav.open_folder_id(), None);
        assert_eq!(nav.filter(), Filter::All);
    }

    #[test]
    fn test_open_unknown_folder_is_noop() {
        let mut nav = Navigator::new(catalog());
        nav.set_filter(Filter::Only(Category::Schools));
        let before = nav.state().clone();
        for id in ["", "nope", "BAUMIT", "baumit "] {
            assert!(!nav.open_folder(id));
            assert_eq!(nav.state(), &before);
        }
    }

    #[test]
    fn test_open_then_back_restores_state() {
        let catalog = catalog();
        for filter in Filter::CYCLE {
            for folder in catalog.iter() {
                let mut nav = Navigator::new(catalog.clone());
                nav.set_filter(filter);
                assert!(nav.open_folder(&folder.id));
                assert_eq!(nav.view(), View::Contents);
                assert_eq!(nav.open_folder_id(), Some(folder.id.as_str()));
                assert!(nav.go_back());
                assert_eq!(nav.state(), &NavigatorState::with_filter(filter));
            }
        }
    }

    #[test]
    fn test_open_only_from_folder_view() {
        let mut nav = Navigator::new(catalog());
        assert!(nav.open_folder("baumit"));
        assert!(!nav.open_folder("cv"));
        assert_eq!(nav.open_folder_id(), Some("baumit"));
    }

    #[test]
    fn test_go_back_from_folders_is_noop() {
        let mut nav = Navigator::new(catalog());
        assert!(!nav.go_back());
        assert_eq!(nav.state(), &NavigatorState::default());
    }

    #[test]
    fn test_set_filter_from_contents_lands_on_folders() {
        for filter in Filter::CYCLE {
            let mut nav = Navigator::new(catalog());
            nav.open_folder("baumit");
            nav.set_filter(filter);
            assert_eq!(nav.view(), View::Folders);
            assert_eq!(nav.open_folder_id(), None);
            assert_eq!(nav.filter(), filter);
        }
    }

    #[test]
    fn test_all_excludes_docs() {
        let nav = Navigator::new(catalog());
        assert_eq!(
            visible_ids(&nav),
            vec!["baumit", "stretford", "lavington", "cimcoop"]
        );
    }

    #[test]
    fn test_docs_filter_only_docs() {
        let mut nav = Navigator::new(catalog());
        nav.set_filter(Filter::Only(Category::Docs));
        assert_eq!(visible_ids(&nav), vec!["cv"]);
    }

    #[test]
    fn test_concrete_filter_matches_category_exactly() {
        let catalog = catalog();
        for category in Category::ALL {
            let visible = visible_folders(&catalog, Filter::Only(category));
            let expected: Vec<&Folder> =
                catalog.iter().filter(|f| f.category == category).collect();
            assert_eq!(visible, expected);
        }
    }

    #[test]
    fn test_contents_render_in_catalog_order() {
        let mut nav = Navigator::new(catalog());
        nav.open_folder("baumit");
        match nav.render() {
            ViewDescription::Contents { folder, items } => {
                assert_eq!(folder.id, "baumit");
                let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
                assert_eq!(titles, vec!["Overview", "A", "B"]);
            }
            other => panic!("expected contents, got {:?}", other),
        }
    }

    #[test]
    fn test_render_is_pure() {
        let catalog = catalog();
        let state = NavigatorState {
            location: Location::Contents {
                folder_id: "cv".to_string(),
            },
            filter: Filter::Only(Category::Canopy),
        };
        assert_eq!(render(&catalog, &state), render(&catalog, &state));
        assert_eq!(render(&catalog, &state).len(), 1);
    }
}
