use std::fmt;

/// An owning edge to a child subtree. `None` is an empty subtree.
pub(crate) type Link<K> = Option<Box<Node<K>>>;

/// A `Node` has a key used for searching/sorting and owns at most two children. Rotations move
/// whole `Box<Node>`s between owners, they never copy or recreate a node.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    ///
    /// Only the balanced tree keeps this up to date. The baseline tree leaves it at 1.
    pub(crate) height: usize,
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left)
            .field("right", &self.right)
            .finish()
    }
}

impl<K> Node<K> {
    pub(crate) fn new_boxed(key: K) -> Box<Self> {
        Box::new(Self {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Gets the height of a possibly empty subtree. An empty subtree has a height of 0.
    pub(crate) fn height_of(link: &Link<K>) -> usize {
        link.as_ref().map_or(0, |n| n.height)
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = Self::height_of(&self.left).max(Self::height_of(&self.right)) + 1;
    }

    /// The difference in height between the left and right subtrees. Positive means the left
    /// subtree is taller.
    pub(crate) fn balance_factor(&self) -> isize {
        Self::height_of(&self.left) as isize - Self::height_of(&self.right) as isize
    }

    /// Finds whether `key` is stored somewhere in this subtree.
    pub(crate) fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        let mut node = Some(self);
        while let Some(n) = node {
            node = match key.cmp(&n.key) {
                std::cmp::Ordering::Less => n.left(),
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Greater => n.right(),
            };
        }
        false
    }
}

/// Renders a subtree as `key(left,right)`, with `_` for a missing child and just `key` for a leaf.
#[cfg(test)]
pub(crate) fn shape<K: fmt::Display>(node: Option<&Node<K>>) -> String {
    match node {
        None => "_".to_string(),
        Some(n) if n.left.is_none() && n.right.is_none() => n.key.to_string(),
        Some(n) => format!("{}({},{})", n.key, shape(n.left()), shape(n.right())),
    }
}

/// Releases a subtree without recursing, so that arbitrarily deep chains can be dropped.
pub(crate) fn drop_iteratively<K>(link: &mut Link<K>) {
    let mut stack: Vec<Box<Node<K>>> = link.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}
