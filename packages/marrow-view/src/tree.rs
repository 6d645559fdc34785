use marrow_traits::IntRect;
use slab::Slab;

use crate::view::{View, ViewFlags};

/// Handle to a registered layout listener.
///
/// Returned by [`ViewTree::add_layout_listener`] and
/// [`ViewTree::on_next_layout`]; pass it to
/// [`ViewTree::remove_layout_listener`] to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LayoutListenerId(u64);

/// Returned by a layout listener to control its own registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerOutcome {
    Retain,
    Remove,
}

type LayoutCallback = Box<dyn FnMut(&View, IntRect) -> ListenerOutcome>;

struct LayoutListener {
    id: u64,
    view_id: usize,
    callback: LayoutCallback,
}

/// A slab-backed tree of views.
///
/// The tree always has a root view (id `0`). The embedder mirrors its own
/// view hierarchy into the tree with [`create_view`](Self::create_view) and
/// writes final bounds with [`set_bounds`](Self::set_bounds) as its layout
/// system computes them; bounds changes fire the layout listeners registered
/// for the affected view.
pub struct ViewTree {
    nodes: Box<Slab<View>>,
    root_id: usize,

    /// Listeners in registration order. The whole list is detached during
    /// dispatch, so an executing listener is not registered while its
    /// callback runs.
    layout_listeners: Vec<LayoutListener>,
    next_listener_id: u64,
}

impl Default for ViewTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewTree {
    pub fn new() -> Self {
        let mut nodes = Box::new(Slab::new());
        let root_id = nodes.vacant_key();
        nodes.insert(View::new(root_id, None));
        Self {
            nodes,
            root_id,
            layout_listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn root_id(&self) -> usize {
        self.root_id
    }

    pub fn root_view(&self) -> &View {
        &self.nodes[self.root_id]
    }

    pub fn get(&self, view_id: usize) -> Option<&View> {
        self.nodes.get(view_id)
    }

    pub fn get_mut(&mut self, view_id: usize) -> Option<&mut View> {
        self.nodes.get_mut(view_id)
    }

    pub fn contains(&self, view_id: usize) -> bool {
        self.nodes.contains(view_id)
    }

    /// Number of live views, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Create a view under the given parent. Returns the new view's id, or
    /// `None` when the parent is not a live view.
    pub fn create_view(&mut self, parent_id: usize) -> Option<usize> {
        if !self.nodes.contains(parent_id) {
            return None;
        }
        let id = self.nodes.vacant_key();
        self.nodes.insert(View::new(id, Some(parent_id)));
        self.nodes[parent_id].children.push(id);
        Some(id)
    }

    /// Tear down a view and its whole subtree. Layout listeners bound to any
    /// removed view are dropped with it. The root cannot be removed.
    pub fn remove_view(&mut self, view_id: usize) -> bool {
        if view_id == self.root_id || !self.nodes.contains(view_id) {
            return false;
        }
        if let Some(parent_id) = self.nodes[view_id].parent {
            self.nodes[parent_id].children.retain(|child| *child != view_id);
        }
        let mut removed = Vec::with_capacity(8);
        self.remove_subtree(view_id, &mut removed);
        self.layout_listeners
            .retain(|listener| !removed.contains(&listener.view_id));
        true
    }

    fn remove_subtree(&mut self, view_id: usize, removed: &mut Vec<usize>) {
        let view = self.nodes.remove(view_id);
        removed.push(view_id);
        for child_id in view.children {
            self.remove_subtree(child_id, removed);
        }
    }

    /// Mark a view hidden. Hidden views keep their bounds but are skipped by
    /// bone capture.
    pub fn set_hidden(&mut self, view_id: usize, hidden: bool) {
        if let Some(view) = self.nodes.get_mut(view_id) {
            view.flags.set(ViewFlags::HIDDEN, hidden);
        }
    }

    /// Write a view's final bounds, as computed by the host's layout pass.
    ///
    /// Returns whether the bounds changed. When they did, every layout
    /// listener registered for the view fires synchronously, in registration
    /// order, with the view and its old bounds.
    pub fn set_bounds(&mut self, view_id: usize, bounds: IntRect) -> bool {
        let Some(view) = self.nodes.get_mut(view_id) else {
            return false;
        };
        let old = view.bounds;
        let first_layout = !view.flags.is_laid_out();
        view.flags.insert(ViewFlags::LAID_OUT);
        if old == bounds && !first_layout {
            return false;
        }
        view.bounds = bounds;
        self.notify_layout_changed(view_id, old);
        true
    }

    /// Register a recurring layout listener for a view.
    ///
    /// The callback receives the view and its old bounds each time the
    /// view's bounds change, and decides via [`ListenerOutcome`] whether to
    /// stay registered. Registering against an id with no live view is
    /// accepted; such a listener never fires.
    pub fn add_layout_listener<F>(&mut self, view_id: usize, callback: F) -> LayoutListenerId
    where
        F: FnMut(&View, IntRect) -> ListenerOutcome + 'static,
    {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        self.layout_listeners.push(LayoutListener {
            id,
            view_id,
            callback: Box::new(callback),
        });
        LayoutListenerId(id)
    }

    /// Unsubscribe a listener by handle. Returns whether it was registered.
    pub fn remove_layout_listener(&mut self, id: LayoutListenerId) -> bool {
        let len = self.layout_listeners.len();
        self.layout_listeners.retain(|listener| listener.id != id.0);
        self.layout_listeners.len() != len
    }

    /// Run `callback` once, the next time the view's bounds change.
    ///
    /// The underlying listener is deregistered before `callback` is invoked,
    /// so it fires at most once. If the view is never laid out the callback
    /// never runs; the listener stays registered until the view is removed
    /// or the returned handle is passed to
    /// [`remove_layout_listener`](Self::remove_layout_listener).
    pub fn on_next_layout<F>(&mut self, view_id: usize, callback: F) -> LayoutListenerId
    where
        F: FnOnce(&View) + 'static,
    {
        let mut callback = Some(callback);
        self.add_layout_listener(view_id, move |view, _old| {
            if let Some(callback) = callback.take() {
                callback(view);
            }
            ListenerOutcome::Remove
        })
    }

    fn notify_layout_changed(&mut self, view_id: usize, old: IntRect) {
        // Detach the list so no listener is registered while callbacks run.
        // A one-shot listener is therefore already deregistered when its
        // callback is invoked and can never fire twice.
        let mut listeners = std::mem::take(&mut self.layout_listeners);
        listeners.retain_mut(|listener| {
            if listener.view_id != view_id {
                return true;
            }
            let view = &self.nodes[view_id];
            (listener.callback)(view, old) == ListenerOutcome::Retain
        });
        debug_assert!(self.layout_listeners.is_empty());
        self.layout_listeners = listeners;
    }
}

impl std::ops::Index<usize> for ViewTree {
    type Output = View;

    fn index(&self, view_id: usize) -> &View {
        &self.nodes[view_id]
    }
}

#[cfg(test)]
mod tests {
    use super::{ListenerOutcome, ViewTree};
    use marrow_traits::IntRect;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn create_and_remove_views() {
        let mut tree = ViewTree::new();
        let root = tree.root_id();
        let child = tree.create_view(root).unwrap();
        let grandchild = tree.create_view(child).unwrap();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.get(grandchild).unwrap().parent, Some(child));

        assert!(tree.remove_view(child));
        assert_eq!(tree.len(), 1);
        assert!(!tree.contains(child));
        assert!(!tree.contains(grandchild));
        assert!(tree.root_view().children.is_empty());

        assert!(!tree.remove_view(root));
        assert!(tree.create_view(child).is_none());
    }

    #[test]
    fn recurring_listener_fires_per_change_with_old_bounds() {
        let mut tree = ViewTree::new();
        let root = tree.root_id();
        let view = tree.create_view(root).unwrap();

        let seen = Rc::new(Cell::new(0));
        let last_old = Rc::new(Cell::new(IntRect::ZERO));
        let seen2 = Rc::clone(&seen);
        let last_old2 = Rc::clone(&last_old);
        tree.add_layout_listener(view, move |_view, old| {
            seen2.set(seen2.get() + 1);
            last_old2.set(old);
            ListenerOutcome::Retain
        });

        assert!(tree.set_bounds(view, IntRect::new(0, 0, 10, 10)));
        assert!(tree.set_bounds(view, IntRect::new(0, 0, 20, 10)));
        assert_eq!(seen.get(), 2);
        assert_eq!(last_old.get(), IntRect::new(0, 0, 10, 10));

        // Unchanged bounds are not a layout change
        assert!(!tree.set_bounds(view, IntRect::new(0, 0, 20, 10)));
        assert_eq!(seen.get(), 2);

        // A different view does not fire this listener
        tree.set_bounds(root, IntRect::new(0, 0, 100, 100));
        assert_eq!(seen.get(), 2);
    }

    #[test]
    fn zero_bounds_still_count_as_first_layout() {
        let mut tree = ViewTree::new();
        let root = tree.root_id();

        let fired = Rc::new(Cell::new(false));
        let fired2 = Rc::clone(&fired);
        tree.on_next_layout(root, move |_| fired2.set(true));

        // Bounds identical to the initial value: still the first layout pass
        assert!(tree.set_bounds(root, IntRect::ZERO));
        assert!(fired.get());
    }

    #[test]
    fn one_shot_listener_fires_exactly_once() {
        let mut tree = ViewTree::new();
        let root = tree.root_id();
        let view = tree.create_view(root).unwrap();

        let fired = Rc::new(Cell::new(0));
        let fired2 = Rc::clone(&fired);
        tree.on_next_layout(view, move |laid_out| {
            assert!(laid_out.is_laid_out());
            fired2.set(fired2.get() + 1);
        });

        tree.set_bounds(view, IntRect::new(1, 2, 3, 4));
        tree.set_bounds(view, IntRect::new(5, 6, 7, 8));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn remove_listener_by_handle() {
        let mut tree = ViewTree::new();
        let root = tree.root_id();

        let fired = Rc::new(Cell::new(false));
        let fired2 = Rc::clone(&fired);
        let handle = tree.on_next_layout(root, move |_| fired2.set(true));

        assert!(tree.remove_layout_listener(handle));
        assert!(!tree.remove_layout_listener(handle));

        tree.set_bounds(root, IntRect::new(0, 0, 10, 10));
        assert!(!fired.get());
    }

    #[test]
    fn listeners_die_with_their_view() {
        let mut tree = ViewTree::new();
        let root = tree.root_id();
        let view = tree.create_view(root).unwrap();

        let fired = Rc::new(Cell::new(false));
        let fired2 = Rc::clone(&fired);
        let handle = tree.on_next_layout(view, move |_| fired2.set(true));

        assert!(tree.remove_view(view));
        assert!(!tree.remove_layout_listener(handle));
        assert!(!fired.get());
    }
}
