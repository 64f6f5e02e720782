use super::handle::Handle;
use super::size::Size;

/// Color of the link from a node's parent to the node itself.
///
/// Conceptually the color belongs to the incoming edge; it is stored on the
/// node because every node has exactly one incoming link (the root's is
/// forced [`Color::Black`] after each mutation). Absent children count as
/// black links.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    Red,
    Black,
}

impl Color {
    pub(crate) const fn flip(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A single tree node: key, value, child links, link color, subtree size.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<Handle>,
    pub(crate) right: Option<Handle>,
    pub(crate) color: Color,
    pub(crate) size: Size,
}

impl<K, V> Node<K, V> {
    /// Creates a fresh leaf. New nodes always hang off a red link: attaching
    /// via a red link leaves the black height of every path unchanged, so
    /// insertion can only ever violate the red rules, never black balance.
    pub(crate) const fn new_leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            color: Color::Red,
            size: Size::ONE,
        }
    }

    pub(crate) const fn is_red(&self) -> bool {
        matches!(self.color, Color::Red)
    }
}
