use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::vec::Vec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Color, Node};
use super::size::Size;

/// The left-leaning red-black tree backing `LlrbMap`.
///
/// All mutation happens by recursive descent: rotations and color flips are
/// decided from the handle a recursive call returns, and `balance` repairs
/// the red-black invariants on the way back up. The tree upholds, after
/// every public mutating call:
///
/// 1. BST order,
/// 2. no right-leaning red link,
/// 3. no two consecutive red links on any path,
/// 4. equal black-link count on every root-to-empty-link path,
/// 5. exact `size` fields on every node.
pub(crate) struct RawLlrbMap<K, V> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty. The root's
    /// incoming link is forced black after every mutation.
    root: Option<Handle>,
    /// Total number of key-value pairs in the tree.
    len: usize,
}

impl<K, V> RawLlrbMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
        }
    }

    /// Creates a new tree with the specified capacity.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
        }
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no elements.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the capacity of the tree.
    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Clears all elements from the tree.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    /// Returns the root handle, if the tree is non-empty.
    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    /// Returns a reference to a node by handle.
    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    /// Returns a mutable reference to a node by handle.
    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Returns a mutable node reference with an unconstrained lifetime,
    /// reading through a raw tree pointer.
    ///
    /// # Safety
    ///
    /// `tree` must point to a live tree, `handle` must be live in it, and the
    /// caller must not touch the same node again while the returned borrow is
    /// in use.
    pub(crate) unsafe fn node_mut_ptr<'a>(tree: *mut Self, handle: Handle) -> &'a mut Node<K, V> {
        unsafe { (*tree).nodes.get_mut(handle) }
    }

    /// Collects every node handle in ascending key order.
    pub(crate) fn handles_in_order(&self) -> Vec<Handle> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<Handle> = Vec::new();
        let mut current = self.root;

        loop {
            while let Some(h) = current {
                stack.push(h);
                current = self.nodes.get(h).left;
            }
            let Some(h) = stack.pop() else { break };
            current = self.nodes.get(h).right;
            out.push(h);
        }

        out
    }

    // ─── Link helpers ────────────────────────────────────────────────────

    /// Is the link into `h` red? Empty links are black.
    fn is_red(&self, h: Option<Handle>) -> bool {
        h.is_some_and(|h| self.nodes.get(h).is_red())
    }

    /// Cardinality of the subtree under `h`; empty subtrees have size zero.
    fn size_of(&self, h: Option<Handle>) -> usize {
        h.map_or(0, |h| self.nodes.get(h).size.to_usize())
    }

    fn left_of(&self, h: Handle) -> Option<Handle> {
        self.nodes.get(h).left
    }

    fn right_of(&self, h: Handle) -> Option<Handle> {
        self.nodes.get(h).right
    }

    fn left_left_of(&self, h: Handle) -> Option<Handle> {
        self.left_of(h).and_then(|l| self.nodes.get(l).left)
    }

    fn right_left_of(&self, h: Handle) -> Option<Handle> {
        self.right_of(h).and_then(|r| self.nodes.get(r).left)
    }

    /// Recomputes `h`'s size from its children. Every structural change to a
    /// node's links must be followed by this before the node is returned up
    /// the call stack.
    fn update_size(&mut self, h: Handle) {
        let size = 1 + self.size_of(self.left_of(h)) + self.size_of(self.right_of(h));
        self.nodes.get_mut(h).size = Size::from_usize(size);
    }

    // ─── Structural primitives ───────────────────────────────────────────

    /// Makes a right-leaning red link lean left. `h`'s red right child
    /// becomes the subtree root, inheriting `h`'s color and size; `h` hangs
    /// off its left as a red link. Preserves BST order and in-order sequence.
    fn rotate_left(&mut self, h: Handle) -> Handle {
        let x = self.right_of(h).expect("`rotate_left()` - right child missing!");
        let x_left = self.left_of(x);
        let (h_color, h_size) = {
            let node = self.nodes.get(h);
            (node.color, node.size)
        };

        {
            let node = self.nodes.get_mut(h);
            node.right = x_left;
            node.color = Color::Red;
        }
        self.update_size(h);

        let node = self.nodes.get_mut(x);
        node.left = Some(h);
        node.color = h_color;
        node.size = h_size;
        x
    }

    /// Mirror image of [`rotate_left`](Self::rotate_left): makes a
    /// left-leaning red link lean right.
    fn rotate_right(&mut self, h: Handle) -> Handle {
        let x = self.left_of(h).expect("`rotate_right()` - left child missing!");
        let x_right = self.right_of(x);
        let (h_color, h_size) = {
            let node = self.nodes.get(h);
            (node.color, node.size)
        };

        {
            let node = self.nodes.get_mut(h);
            node.left = x_right;
            node.color = Color::Red;
        }
        self.update_size(h);

        let node = self.nodes.get_mut(x);
        node.right = Some(h);
        node.color = h_color;
        node.size = h_size;
        x
    }

    /// Flips the colors of `h` and both children. Callers must ensure both
    /// children exist and carry the opposite color of `h`.
    fn flip_colors(&mut self, h: Handle) {
        let left = self.left_of(h).expect("`flip_colors()` - left child missing!");
        let right = self.right_of(h).expect("`flip_colors()` - right child missing!");
        for handle in [h, left, right] {
            let node = self.nodes.get_mut(handle);
            node.color = node.color.flip();
        }
    }

    /// Assuming `h` is red and both `h.left` and `h.left.left` are black,
    /// makes `h.left` or one of its children red by borrowing a red link
    /// from the right side.
    fn move_red_left(&mut self, mut h: Handle) -> Handle {
        self.flip_colors(h);
        if self.is_red(self.right_left_of(h)) {
            let right = self.right_of(h).expect("`move_red_left()` - right child missing!");
            let rotated = self.rotate_right(right);
            self.nodes.get_mut(h).right = Some(rotated);
            h = self.rotate_left(h);
            self.flip_colors(h);
        }
        h
    }

    /// Assuming `h` is red and both `h.right` and `h.right.left` are black,
    /// makes `h.right` or one of its children red by borrowing a red link
    /// from the left side.
    fn move_red_right(&mut self, mut h: Handle) -> Handle {
        self.flip_colors(h);
        if self.is_red(self.left_left_of(h)) {
            h = self.rotate_right(h);
            self.flip_colors(h);
        }
        h
    }

    /// Restores the red-black invariants at `h` after any child subtree may
    /// have changed, and recomputes `h`'s size. Applied on the way back up
    /// from every recursive insertion and deletion call.
    fn balance(&mut self, mut h: Handle) -> Handle {
        if self.is_red(self.right_of(h)) && !self.is_red(self.left_of(h)) {
            h = self.rotate_left(h);
        }
        if self.is_red(self.left_of(h)) && self.is_red(self.left_left_of(h)) {
            h = self.rotate_right(h);
        }
        if self.is_red(self.left_of(h)) && self.is_red(self.right_of(h)) {
            self.flip_colors(h);
        }
        self.update_size(h);
        h
    }
}

impl<K: Ord, V> RawLlrbMap<K, V> {
    /// Searches for a key and returns its node handle if present.
    pub(crate) fn find<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(h),
            };
        }
        None
    }

    /// Returns a reference to the value corresponding to the key.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).map(|h| &self.nodes.get(h).value)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let h = self.find(key)?;
        Some(&mut self.nodes.get_mut(h).value)
    }

    /// Returns the key-value pair corresponding to the key.
    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).map(|h| {
            let node = self.nodes.get(h);
            (&node.key, &node.value)
        })
    }

    /// Returns true if the tree contains the specified key.
    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.find(key).is_some()
    }

    fn min_of(&self, mut h: Handle) -> Handle {
        while let Some(left) = self.left_of(h) {
            h = left;
        }
        h
    }

    fn max_of(&self, mut h: Handle) -> Handle {
        while let Some(right) = self.right_of(h) {
            h = right;
        }
        h
    }

    /// Returns the entry with the smallest key.
    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        let node = self.nodes.get(self.min_of(self.root?));
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the largest key.
    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        let node = self.nodes.get(self.max_of(self.root?));
        Some((&node.key, &node.value))
    }

    // ─── Insertion ───────────────────────────────────────────────────────

    /// Inserts a key-value pair into the tree.
    /// Returns the old value if the key was already present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.insert_full(key, value).1
    }

    /// Inserts and also reports the handle of the node now holding `key`.
    /// Handles survive rebalancing, so the caller may keep it for as long as
    /// the entry stays in the tree.
    pub(crate) fn insert_full(&mut self, key: K, value: V) -> (Handle, Option<V>) {
        let (new_root, entry, displaced) = self.insert_at(self.root, key, value);
        self.root = Some(new_root);
        self.nodes.get_mut(new_root).color = Color::Black;
        if displaced.is_none() {
            self.len += 1;
        }
        (entry, displaced)
    }

    fn insert_at(&mut self, h: Option<Handle>, key: K, value: V) -> (Handle, Handle, Option<V>) {
        let Some(h) = h else {
            let leaf = self.nodes.alloc(Node::new_leaf(key, value));
            return (leaf, leaf, None);
        };

        let (entry, displaced) = match key.cmp(&self.nodes.get(h).key) {
            Ordering::Less => {
                let (child, entry, displaced) = self.insert_at(self.left_of(h), key, value);
                self.nodes.get_mut(h).left = Some(child);
                (entry, displaced)
            }
            Ordering::Greater => {
                let (child, entry, displaced) = self.insert_at(self.right_of(h), key, value);
                self.nodes.get_mut(h).right = Some(child);
                (entry, displaced)
            }
            Ordering::Equal => (h, Some(core::mem::replace(&mut self.nodes.get_mut(h).value, value))),
        };

        (self.balance(h), entry, displaced)
    }

    // ─── Deletion ────────────────────────────────────────────────────────
    //
    // Deletion pushes red links *down* ahead of the descent so that the node
    // physically removed is never a lone black link; `balance` then repairs
    // the borrowed reds on the way back up, exactly as in insertion.

    /// Removes and returns the entry with the smallest key.
    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        if !self.is_red(self.left_of(root)) && !self.is_red(self.right_of(root)) {
            self.nodes.get_mut(root).color = Color::Red;
        }
        let (new_root, entry) = self.remove_min_at(root);
        self.finish_removal(new_root);
        Some(entry)
    }

    /// Removes and returns the entry with the largest key.
    pub(crate) fn pop_last(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        if !self.is_red(self.left_of(root)) && !self.is_red(self.right_of(root)) {
            self.nodes.get_mut(root).color = Color::Red;
        }
        let (new_root, entry) = self.remove_max_at(root);
        self.finish_removal(new_root);
        Some(entry)
    }

    /// Removes a key from the tree and returns the value.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the tree and returns the key-value pair.
    /// Removing an absent key is a structural no-op.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let root = self.root?;

        // Settle membership before the destructive descent starts: the
        // descent borrows red links as it goes and assumes the key is there.
        self.find(key)?;

        if !self.is_red(self.left_of(root)) && !self.is_red(self.right_of(root)) {
            self.nodes.get_mut(root).color = Color::Red;
        }
        let (new_root, entry) = self.remove_at(root, key);
        self.finish_removal(new_root);
        Some(entry)
    }

    /// Re-installs the root after a removal, restores its black color, and
    /// adjusts `len`.
    fn finish_removal(&mut self, new_root: Option<Handle>) {
        self.root = new_root;
        if let Some(root) = self.root {
            self.nodes.get_mut(root).color = Color::Black;
        }
        self.len -= 1;
    }

    /// Removes the minimum of the subtree under `h`, which must be non-empty
    /// and must not be a lone black link (callers pre-redden the root).
    fn remove_min_at(&mut self, mut h: Handle) -> (Option<Handle>, (K, V)) {
        if self.left_of(h).is_none() {
            // A node without a left child has no right child either: a red
            // right link would lean right, a black one would unbalance.
            let node = self.nodes.take(h);
            debug_assert!(node.right.is_none());
            return (None, (node.key, node.value));
        }

        if !self.is_red(self.left_of(h)) && !self.is_red(self.left_left_of(h)) {
            h = self.move_red_left(h);
        }

        let left = self.left_of(h).expect("`remove_min_at()` - left child missing!");
        let (new_left, entry) = self.remove_min_at(left);
        self.nodes.get_mut(h).left = new_left;
        (Some(self.balance(h)), entry)
    }

    /// Removes the maximum of the subtree under `h`; same preconditions as
    /// [`remove_min_at`](Self::remove_min_at).
    fn remove_max_at(&mut self, mut h: Handle) -> (Option<Handle>, (K, V)) {
        if self.is_red(self.left_of(h)) {
            h = self.rotate_right(h);
        }

        if self.right_of(h).is_none() {
            let node = self.nodes.take(h);
            debug_assert!(node.left.is_none());
            return (None, (node.key, node.value));
        }

        if !self.is_red(self.right_of(h)) && !self.is_red(self.right_left_of(h)) {
            h = self.move_red_right(h);
        }

        let right = self.right_of(h).expect("`remove_max_at()` - right child missing!");
        let (new_right, entry) = self.remove_max_at(right);
        self.nodes.get_mut(h).right = new_right;
        (Some(self.balance(h)), entry)
    }

    /// Removes `key` from the subtree under `h`. The key must be present in
    /// that subtree.
    fn remove_at<Q>(&mut self, mut h: Handle, key: &Q) -> (Option<Handle>, (K, V))
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if key < self.nodes.get(h).key.borrow() {
            if !self.is_red(self.left_of(h)) && !self.is_red(self.left_left_of(h)) {
                h = self.move_red_left(h);
            }
            let left = self.left_of(h).expect("`remove_at()` - key strayed out of the left subtree!");
            let (new_left, entry) = self.remove_at(left, key);
            self.nodes.get_mut(h).left = new_left;
            (Some(self.balance(h)), entry)
        } else {
            if self.is_red(self.left_of(h)) {
                h = self.rotate_right(h);
            }
            if key == self.nodes.get(h).key.borrow() && self.right_of(h).is_none() {
                let node = self.nodes.take(h);
                debug_assert!(node.left.is_none());
                return (None, (node.key, node.value));
            }
            if !self.is_red(self.right_of(h)) && !self.is_red(self.right_left_of(h)) {
                h = self.move_red_right(h);
            }
            if key == self.nodes.get(h).key.borrow() {
                // Successor splice: the minimum of the right subtree takes
                // this node's place; the displaced entry is handed back out.
                let right = self.right_of(h).expect("`remove_at()` - interior node lost its right child!");
                let (new_right, (succ_key, succ_value)) = self.remove_min_at(right);
                let node = self.nodes.get_mut(h);
                node.right = new_right;
                let old_key = core::mem::replace(&mut node.key, succ_key);
                let old_value = core::mem::replace(&mut node.value, succ_value);
                (Some(self.balance(h)), (old_key, old_value))
            } else {
                let right = self.right_of(h).expect("`remove_at()` - key strayed out of the right subtree!");
                let (new_right, entry) = self.remove_at(right, key);
                self.nodes.get_mut(h).right = new_right;
                (Some(self.balance(h)), entry)
            }
        }
    }

    // ─── Order statistics ────────────────────────────────────────────────

    /// Returns the number of keys strictly less than `key`. Total for any
    /// probe key, present or not, which makes it usable as an
    /// insertion-point query.
    pub(crate) fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut rank = 0;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left,
                Ordering::Greater => {
                    rank += self.size_of(node.left) + 1;
                    current = node.right;
                }
                Ordering::Equal => return rank + self.size_of(node.left),
            }
        }
        rank
    }

    /// Navigates to the node holding the element of the given rank by
    /// comparing the rank against left-subtree sizes.
    fn find_by_rank(&self, rank: usize) -> Option<Handle> {
        if rank >= self.len {
            return None;
        }

        let mut current = self.root?;
        let mut remaining = rank;
        loop {
            let node = self.nodes.get(current);
            let left_size = self.size_of(node.left);
            match remaining.cmp(&left_size) {
                Ordering::Less => {
                    current = node.left.expect("`find_by_rank()` - size fields inconsistent!");
                }
                Ordering::Greater => {
                    remaining -= left_size + 1;
                    current = node.right.expect("`find_by_rank()` - size fields inconsistent!");
                }
                Ordering::Equal => return Some(current),
            }
        }
    }

    /// Gets an element by its rank (0-indexed position in sorted order).
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.find_by_rank(rank).map(|h| {
            let node = self.nodes.get(h);
            (&node.key, &node.value)
        })
    }

    /// Gets a mutable element by its rank.
    pub(crate) fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        let h = self.find_by_rank(rank)?;
        let node = self.nodes.get_mut(h);
        Some((&node.key, &mut node.value))
    }

    /// Returns the entry with the largest key less than or equal to `key`.
    ///
    /// A plain BST descent recording the best candidate seen on the small
    /// side of the comparison.
    pub(crate) fn floor<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            match key.cmp(node.key.borrow()) {
                Ordering::Less => current = node.left,
                Ordering::Greater => {
                    best = Some(h);
                    current = node.right;
                }
                Ordering::Equal => {
                    best = Some(h);
                    break;
                }
            }
        }
        best.map(|h| {
            let node = self.nodes.get(h);
            (&node.key, &node.value)
        })
    }

    /// Returns the entry with the smallest key greater than or equal to
    /// `key`. Mirror image of [`floor`](Self::floor).
    pub(crate) fn ceiling<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut best = None;
        let mut current = self.root;
        while let Some(h) = current {
            let node = self.nodes.get(h);
            match key.cmp(node.key.borrow()) {
                Ordering::Greater => current = node.right,
                Ordering::Less => {
                    best = Some(h);
                    current = node.left;
                }
                Ordering::Equal => {
                    best = Some(h);
                    break;
                }
            }
        }
        best.map(|h| {
            let node = self.nodes.get(h);
            (&node.key, &node.value)
        })
    }

    // ─── Draining ────────────────────────────────────────────────────────
}

impl<K, V> RawLlrbMap<K, V> {
    /// Drains all key-value pairs in ascending key order. This is O(n) via a
    /// plain in-order walk; nothing is rebalanced since the whole tree goes.
    pub(crate) fn drain_to_vec(&mut self) -> Vec<(K, V)> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack: Vec<Handle> = Vec::new();
        let mut current = self.root;

        loop {
            while let Some(h) = current {
                stack.push(h);
                current = self.nodes.get(h).left;
            }
            let Some(h) = stack.pop() else { break };
            let node = self.nodes.take(h);
            current = node.right;
            out.push((node.key, node.value));
        }

        self.nodes.clear();
        self.root = None;
        self.len = 0;
        out
    }
}

impl<K: Clone, V: Clone> Clone for RawLlrbMap<K, V> {
    fn clone(&self) -> Self {
        fn clone_node<K: Clone, V: Clone>(
            old_nodes: &Arena<Node<K, V>>,
            new_nodes: &mut Arena<Node<K, V>>,
            old_handle: Handle,
        ) -> Handle {
            let node = old_nodes.get(old_handle);
            let left = node.left.map(|left| clone_node(old_nodes, new_nodes, left));
            let right = node.right.map(|right| clone_node(old_nodes, new_nodes, right));
            new_nodes.alloc(Node {
                key: node.key.clone(),
                value: node.value.clone(),
                left,
                right,
                color: node.color,
                size: node.size,
            })
        }

        let mut nodes = Arena::with_capacity(self.nodes.len());
        let root = self.root.map(|root| clone_node(&self.nodes, &mut nodes, root));
        Self {
            nodes,
            root,
            len: self.len,
        }
    }
}
