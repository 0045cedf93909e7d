//! Menu tree loading from files.
//!
//! A host can replace the built-in catalog with a tree described in a RON
//! file:
//!
//! ```ron
//! [
//!     (label: "Bileşenler", target: "/kategori/Bile%C5%9Fenler", children: [
//!         (label: "İşlemci", target: "/ara?q=i%C5%9Flemci"),
//!     ]),
//!     (label: "Kampanyalar", target: "/ara?q=kampanya"),
//! ]
//! ```
//!
//! Loaded trees are validated before they are returned.

use super::{MenuTree, TreeError};

use std::path::Path;

/// Error type for menu tree loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// File not found.
    #[error("menu file not found: {0}")]
    NotFound(String),
    /// Failed to read file.
    #[error("failed to read menu: {0}")]
    Read(#[from] std::io::Error),
    /// Failed to parse menu file.
    #[error("failed to parse menu: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// Unsupported format.
    #[error("unsupported menu format: {0:?}")]
    UnsupportedFormat(String),
    /// The tree was parsed but breaks an invariant.
    #[error("invalid menu tree: {0}")]
    Invalid(#[from] TreeError),
}

/// Load a menu tree from a file path.
///
/// Supports RON format (.ron extension).
///
/// # Example
///
/// ```no_run
/// use vitrine_core::menu::loader::load_tree_from_file;
///
/// let tree = load_tree_from_file("menu.ron")?;
/// # Ok::<(), vitrine_core::menu::loader::LoadError>(())
/// ```
pub fn load_tree_from_file(path: impl AsRef<Path>) -> Result<MenuTree, LoadError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    match extension {
        "ron" => {
            let content = std::fs::read_to_string(path)?;

            load_tree_from_str(&content)
        }
        _ => Err(LoadError::UnsupportedFormat(extension.to_string())),
    }
}

/// Parse and validate a menu tree written in RON.
pub fn load_tree_from_str(content: &str) -> Result<MenuTree, LoadError> {
    let tree: MenuTree = ron::from_str(content)?;

    if let Err(error) = tree.validate() {
        log::warn!("Rejecting menu tree: {error}");
        return Err(error.into());
    }

    log::debug!(
        "Loaded menu tree with {} roots and depth {}",
        tree.roots.len(),
        tree.depth()
    );

    Ok(tree)
}
