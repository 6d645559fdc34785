use marrow_traits::IntRect;

use crate::tree::ViewTree;
use crate::view::View;

#[derive(Clone)]
/// A pre-order tree traverser for a [`ViewTree`].
pub struct TreeTraverser<'a> {
    tree: &'a ViewTree,
    stack: Vec<usize>,
}

impl<'a> TreeTraverser<'a> {
    /// Creates a new tree traverser which starts at the root view.
    pub fn new(tree: &'a ViewTree) -> Self {
        Self::new_with_root(tree, tree.root_id())
    }

    /// Creates a new tree traverser which starts at the specified view.
    pub fn new_with_root(tree: &'a ViewTree, root: usize) -> Self {
        let mut stack = Vec::with_capacity(32);
        stack.push(root);
        TreeTraverser { tree, stack }
    }
}

impl Iterator for TreeTraverser<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let view = self.tree.get(id)?;
        self.stack.extend(view.children.iter().rev());
        Some(id)
    }
}

#[derive(Clone)]
/// An ancestor traverser for a [`ViewTree`].
pub struct AncestorTraverser<'a> {
    tree: &'a ViewTree,
    current: usize,
}

impl<'a> AncestorTraverser<'a> {
    /// Creates a new ancestor traverser for the given tree and view id.
    pub fn new(tree: &'a ViewTree, view_id: usize) -> Self {
        AncestorTraverser {
            tree,
            current: view_id,
        }
    }
}

impl Iterator for AncestorTraverser<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let current_view = self.tree.get(self.current)?;
        self.current = current_view.parent?;
        Some(self.current)
    }
}

impl ViewTree {
    pub fn visit<F>(&self, mut visit: F)
    where
        F: FnMut(usize, &View),
    {
        TreeTraverser::new(self).for_each(|view_id| visit(view_id, &self[view_id]));
    }

    /// Window-absolute bounds of a view: its parent-relative bounds offset
    /// by the origin of every ancestor up to the root.
    pub fn absolute_bounds(&self, view_id: usize) -> Option<IntRect> {
        let view = self.get(view_id)?;
        let mut rect = view.bounds();
        for ancestor_id in AncestorTraverser::new(self, view_id) {
            let bounds = self[ancestor_id].bounds();
            rect = rect.offset(bounds.left, bounds.top);
        }
        Some(rect)
    }
}
