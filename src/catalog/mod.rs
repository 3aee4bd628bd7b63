//! Portfolio catalog
//!
//! Folders of drawings and documents, keyed by folder id. The catalog is
//! parsed and validated once at startup and then shared read-only; nothing
//! in the browser mutates it.
//!
//! Source format (TOML):
//!
//! ```toml
//! [[folder]]
//! id = "baumit"
//! name = "Baumit"
//! category = "industrial"
//!
//! [[folder.item]]
//! kind = "pdf"
//! source = "Baumit/Group FD/BFY-FD-A1B119-0.pdf"
//! title = "BFY-FD-A1B119"
//! description = "Fabrication drawing, beam A1B119."
//! ```

pub mod thumbnail;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Catalog shipped with the binary
const EMBEDDED_CATALOG: &str = include_str!("../../assets/catalog.toml");

// ═══════════════════════════════════════════════════════════════════════════
//  CATEGORIES & FILTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Classification tag on a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Industrial,
    Canopy,
    Schools,
    Docs,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Industrial,
        Category::Canopy,
        Category::Schools,
        Category::Docs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Industrial => "industrial",
            Category::Canopy => "canopy",
            Category::Schools => "schools",
            Category::Docs => "docs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Industrial => "Industrial",
            Category::Canopy => "Canopies",
            Category::Schools => "Schools",
            Category::Docs => "CV & Portfolio",
        }
    }
}

/// Category filter applied to the folder view.
///
/// `All` is not literally everything: `docs` folders only show up under
/// their own filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Order of the filter bar, also used for Tab cycling
    pub const CYCLE: [Filter; 5] = [
        Filter::All,
        Filter::Only(Category::Industrial),
        Filter::Only(Category::Canopy),
        Filter::Only(Category::Schools),
        Filter::Only(Category::Docs),
    ];

    /// Whether a folder in `category` is visible under this filter
    pub fn admits(&self, category: Category) -> bool {
        match self {
            Filter::All => category != Category::Docs,
            Filter::Only(wanted) => *wanted == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All Projects",
            Filter::Only(category) => category.label(),
        }
    }

    fn position(&self) -> usize {
        Self::CYCLE.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::CYCLE[(self.position() + 1) % Self::CYCLE.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::CYCLE.len();
        Self::CYCLE[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::CYCLE
            .into_iter()
            .find(|f| f.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown filter '{}' (expected all, industrial, canopy, schools or docs)",
                    s
                )
            })
    }
}

impl TryFrom<String> for Filter {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.as_str().to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  ITEMS & FOLDERS
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Image,
    Pdf,
}

impl ItemKind {
    pub fn label(&self) -> &'static str {
        match self {
            ItemKind::Image => "image",
            ItemKind::Pdf => "pdf",
        }
    }
}

/// A single displayable artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    pub kind: ItemKind,
    /// Path relative to the media root
    pub source_path: PathBuf,
    /// Preview image, PDFs only
    pub thumbnail_path: Option<PathBuf>,
    pub title: String,
    pub description: String,
}

impl CatalogItem {
    pub fn image(source: impl Into<PathBuf>, title: &str, description: &str) -> Self {
        Self {
            kind: ItemKind::Image,
            source_path: source.into(),
            thumbnail_path: None,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// PDF item with the conventional thumbnail location
    pub fn pdf(source: impl Into<PathBuf>, title: &str, description: &str) -> Self {
        let source_path = source.into();
        let thumbnail_path = Some(thumbnail::thumbnail_path_for(&source_path));
        Self {
            kind: ItemKind::Pdf,
            source_path,
            thumbnail_path,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn is_pdf(&self) -> bool {
        self.kind == ItemKind::Pdf
    }

    /// Whether the item points at anything at all
    pub fn has_source(&self) -> bool {
        !self.source_path.as_os_str().is_empty()
    }
}

/// A named, categorized group of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub id: String,
    pub display_name: String,
    pub category: Category,
    pub items: Vec<CatalogItem>,
}

impl Folder {
    pub fn new(id: &str, display_name: &str, category: Category, items: Vec<CatalogItem>) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            category,
            items,
        }
    }

    pub fn pdf_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_pdf()).count()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  CATALOG
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("catalog is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("folder #{index} has no id")]
    MissingFolderId { index: usize },
    #[error("folder '{folder}' is missing `{field}`")]
    MissingFolderField { folder: String, field: &'static str },
    #[error("duplicate folder id '{0}'")]
    DuplicateFolder(String),
    #[error("folder '{folder}' item #{index} is missing `{field}`")]
    MissingItemField {
        folder: String,
        index: usize,
        field: &'static str,
    },
    #[error("folder '{folder}' item #{index} is an image but declares a thumbnail")]
    ImageThumbnail { folder: String, index: usize },
}

/// Folder id → folder, in declaration order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    folders: Vec<Folder>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from typed folders, rejecting duplicate or empty ids
    /// and items without a source.
    pub fn from_folders(folders: Vec<Folder>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(folders.len());
        for (index, folder) in folders.iter().enumerate() {
            if folder.id.trim().is_empty() {
                return Err(CatalogError::MissingFolderId { index: index + 1 });
            }
            if by_id.insert(folder.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateFolder(folder.id.clone()));
            }
            for (item_index, item) in folder.items.iter().enumerate() {
                if !item.has_source() {
                    return Err(CatalogError::MissingItemField {
                        folder: folder.id.clone(),
                        index: item_index + 1,
                        field: "source",
                    });
                }
                if item.kind == ItemKind::Image && item.thumbnail_path.is_some() {
                    return Err(CatalogError::ImageThumbnail {
                        folder: folder.id.clone(),
                        index: item_index + 1,
                    });
                }
            }
        }
        Ok(Self { folders, by_id })
    }

    /// The catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_toml_str(EMBEDDED_CATALOG)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(content)?;
        let folders = raw
            .folders
            .into_iter()
            .enumerate()
            .map(|(index, folder)| folder.into_folder(index + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_folders(folders)
    }

    pub fn get(&self, id: &str) -> Option<&Folder> {
        self.by_id.get(id).map(|&index| &self.folders[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Folder> {
        self.folders.iter()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.folders.iter().map(|f| f.items.len()).sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────
// On-disk shape. Every field is optional here so that a missing one is
// reported with its folder and item position instead of a bare serde error.
// ─────────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default, rename = "folder")]
    folders: Vec<RawFolder>,
}

#[derive(Deserialize)]
struct RawFolder {
    id: Option<String>,
    name: Option<String>,
    category: Option<Category>,
    #[serde(default, rename = "item")]
    items: Vec<RawItem>,
}

#[derive(Deserialize)]
struct RawItem {
    kind: Option<ItemKind>,
    source: Option<String>,
    thumbnail: Option<String>,
    title: Option<String>,
    #[serde(default)]
    description: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl RawFolder {
    fn into_folder(self, index: usize) -> Result<Folder, CatalogError> {
        let id = non_empty(self.id).ok_or(CatalogError::MissingFolderId { index })?;
        let display_name =
            non_empty(self.name).ok_or_else(|| CatalogError::MissingFolderField {
                folder: id.clone(),
                field: "name",
            })?;
        let category = self.category.ok_or_else(|| CatalogError::MissingFolderField {
            folder: id.clone(),
            field: "category",
        })?;
        let items = self
            .items
            .into_iter()
            .enumerate()
            .map(|(i, item)| item.into_item(&id, i + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Folder {
            id,
            display_name,
            category,
            items,
        })
    }
}

impl RawItem {
    fn into_item(self, folder: &str, index: usize) -> Result<CatalogItem, CatalogError> {
        let missing = |field| CatalogError::MissingItemField {
            folder: folder.to_string(),
            index,
            field,
        };
        let kind = self.kind.ok_or_else(|| missing("kind"))?;
        let source_path = PathBuf::from(non_empty(self.source).ok_or_else(|| missing("source"))?);
        let title = non_empty(self.title).ok_or_else(|| missing("title"))?;

        let thumbnail_path = match (kind, non_empty(self.thumbnail)) {
            (ItemKind::Image, Some(_)) => {
                return Err(CatalogError::ImageThumbnail {
                    folder: folder.to_string(),
                    index,
                })
            }
            (ItemKind::Image, None) => None,
            (ItemKind::Pdf, Some(explicit)) => Some(PathBuf::from(explicit)),
            (ItemKind::Pdf, None) => Some(thumbnail::thumbnail_path_for(&source_path)),
        };

        Ok(CatalogItem {
            kind,
            source_path,
            thumbnail_path,
            title,
            description: self.description,
        })
    }
}
