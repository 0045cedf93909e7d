//! Catalog menu model.
//!
//! This module defines the tree of categories shown by the navigation menus.
//! The same [`MenuTree`] is walked by the desktop flyouts and by the mobile
//! accordion; neither of them ever mutates it.
//!
//! # Macros
//!
//! The [`leaf!`] and [`branch!`] macros keep static trees readable:
//!
//! ```
//! use vitrine_core::menu::{self, MenuTree};
//!
//! let tree = MenuTree::new(vec![
//!     menu::branch!("Bileşenler", "/kategori/Bilesenler", [
//!         menu::leaf!("İşlemci", "/ara?q=islemci"),
//!         menu::leaf!("Bellek", "/ara?q=bellek"),
//!     ]),
//!     menu::leaf!("Kampanyalar", "/ara?q=kampanya"),
//! ]);
//!
//! assert!(tree.validate().is_ok());
//! assert_eq!(tree.roots[0].children[1].label, "Bellek");
//! ```
#[cfg(feature = "serde")]
pub mod loader;

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use std::fmt;

/// The full tree of a navigation menu.
///
/// The order of [`roots`](Self::roots) is the order of the top-level bar.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MenuTree {
    /// Top-level menu nodes.
    pub roots: Vec<MenuNode>,
}

impl MenuTree {
    /// Creates a new [`MenuTree`].
    #[must_use]
    pub fn new(roots: Vec<MenuNode>) -> Self {
        Self { roots }
    }

    /// Returns the node at the given [`Path`], if any.
    pub fn get(&self, path: &Path) -> Option<&MenuNode> {
        let (first, rest) = path.as_slice().split_first()?;

        rest.iter()
            .try_fold(self.roots.get(*first)?, |node, index| {
                node.children.get(*index)
            })
    }

    /// Returns the children shown when the node at the given [`Path`] is
    /// expanded, or the top-level nodes for the root path.
    pub fn children(&self, path: &Path) -> &[MenuNode] {
        if path.is_root() {
            return &self.roots;
        }

        self.get(path).map_or(&[], |node| node.children.as_slice())
    }

    /// Returns every leaf of the tree, depth-first, in declared order.
    pub fn leaves(&self) -> Vec<(Path, &MenuNode)> {
        let mut leaves = Vec::new();

        for (index, root) in self.roots.iter().enumerate() {
            root.collect_leaves(Path::root().child(index), &mut leaves);
        }

        leaves
    }

    /// Returns the maximum depth of the tree.
    ///
    /// A tree made only of top-level leaves has depth 0.
    pub fn depth(&self) -> usize {
        self.roots.iter().map(MenuNode::depth).max().unwrap_or(0)
    }

    /// Checks the invariants a menu tree must satisfy to be rendered.
    ///
    /// A statically built tree satisfies them by construction; trees coming
    /// from configuration files must be validated before use.
    pub fn validate(&self) -> Result<(), TreeError> {
        validate_siblings(&self.roots, &Path::root())
    }
}

fn validate_siblings(nodes: &[MenuNode], parent: &Path) -> Result<(), TreeError> {
    let mut labels = FxHashSet::default();

    for (index, node) in nodes.iter().enumerate() {
        let path = parent.child(index);

        if node.label.trim().is_empty() {
            return Err(TreeError::EmptyLabel { path });
        }

        if !labels.insert(node.label.clone()) {
            return Err(TreeError::DuplicateLabel {
                path,
                label: node.label.clone(),
            });
        }

        if !node.is_branch() && node.target.trim().is_empty() {
            return Err(TreeError::MissingTarget {
                path,
                label: node.label.clone(),
            });
        }

        validate_siblings(&node.children, &path)?;
    }

    Ok(())
}

/// A menu node.
///
/// A node with children is a branch; a node without children is a leaf and
/// navigates to its [`target`](Self::target) when selected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MenuNode {
    /// Display text. Also used as the rendering key among siblings.
    pub label: SmolStr,
    /// The path, optionally with a query, to navigate to.
    ///
    /// On a branch this is a catch-all destination, only reachable from the
    /// mobile accordion. It may be empty.
    #[cfg_attr(feature = "serde", serde(default))]
    pub target: SmolStr,
    /// Child nodes, in display order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Creates a leaf [`MenuNode`].
    pub fn leaf(label: impl Into<SmolStr>, target: impl Into<SmolStr>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            children: Vec::new(),
        }
    }

    /// Creates a branch [`MenuNode`] with the given children.
    ///
    /// An empty list of children produces a node that behaves like a leaf.
    pub fn branch(
        label: impl Into<SmolStr>,
        target: impl Into<SmolStr>,
        children: Vec<MenuNode>,
    ) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            children,
        }
    }

    /// Returns `true` if this node has children.
    pub fn is_branch(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns `true` if selecting this node on the accordion navigates.
    pub fn is_navigable(&self) -> bool {
        !self.target.is_empty()
    }

    fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    fn collect_leaves<'a>(&'a self, path: Path, leaves: &mut Vec<(Path, &'a MenuNode)>) {
        if !self.is_branch() {
            leaves.push((path, self));
            return;
        }

        for (index, child) in self.children.iter().enumerate() {
            child.collect_leaves(path.child(index), leaves);
        }
    }
}

/// The position of a node in a [`MenuTree`]: the index of its root followed
/// by the index of each child on the way down.
///
/// The empty path designates the tree itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Path(Vec<usize>);

impl Path {
    /// Returns the path of the tree itself.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Returns the path of the child at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);

        Self(indices)
    }

    /// Returns the path of the parent node, or `None` for the root path.
    pub fn parent(&self) -> Option<Self> {
        let (_, parent) = self.0.split_last()?;

        Some(Self(parent.to_vec()))
    }

    /// Returns `true` if this is the path of the tree itself.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the depth of the designated node; top-level nodes have depth 1.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns the index of the designated node among its siblings.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Returns `true` if `self` designates `ancestor` or one of its descendants.
    pub fn starts_with(&self, ancestor: &Path) -> bool {
        self.0.starts_with(&ancestor.0)
    }

    /// Returns the indices of this path.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Path {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl From<&[usize]> for Path {
    fn from(indices: &[usize]) -> Self {
        Self(indices.to_vec())
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("/");
        }

        for index in &self.0 {
            write!(f, "/{index}")?;
        }

        Ok(())
    }
}

/// An invariant violated by a [`MenuTree`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    /// A node has an empty label.
    #[error("menu node at {path} has an empty label")]
    EmptyLabel {
        /// The path of the offending node.
        path: Path,
    },

    /// Two siblings share the same label.
    #[error("menu node at {path} repeats the label {label:?} of a sibling")]
    DuplicateLabel {
        /// The path of the second node with the label.
        path: Path,
        /// The repeated label.
        label: SmolStr,
    },

    /// A leaf has nowhere to navigate to.
    #[error("leaf {label:?} at {path} has no target")]
    MissingTarget {
        /// The path of the offending leaf.
        path: Path,
        /// The label of the offending leaf.
        label: SmolStr,
    },
}

/// Creates a leaf [`MenuNode`].
///
/// # Example
/// ```
/// use vitrine_core::menu;
///
/// let node = menu::leaf!("SSD", "/ara?q=ssd");
/// assert!(!node.is_branch());
/// ```
#[macro_export]
macro_rules! menu_leaf {
    ($label:expr, $target:expr $(,)?) => {
        $crate::menu::MenuNode::leaf($label, $target)
    };
}

/// Creates a branch [`MenuNode`] with the given children.
///
/// # Example
/// ```
/// use vitrine_core::menu;
///
/// let node = menu::branch!("Bellek", "/kategori/Bellek", [
///     menu::leaf!("DDR4", "/ara?q=ddr4"),
///     menu::leaf!("DDR5", "/ara?q=ddr5"),
/// ]);
/// assert!(node.is_branch());
/// ```
#[macro_export]
macro_rules! menu_branch {
    ($label:expr, $target:expr, [$($child:expr),* $(,)?] $(,)?) => {
        $crate::menu::MenuNode::branch($label, $target, vec![$($child),*])
    };
}

// Re-export macros under the menu module: menu::leaf!(), menu::branch!()
#[doc(inline)]
pub use crate::menu_branch as branch;
#[doc(inline)]
pub use crate::menu_leaf as leaf;
