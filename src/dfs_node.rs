//! Node labels that record the results of a depth-first search.
//!
//! [`crate::search::depth_first_search_annotated`] writes discovery times,
//! finish times and parents into labels implementing [`DfsNode`].  Graphs
//! hand out shared references to their labels, so implementations keep this
//! state behind interior mutability.

use std::{
    cell::{Cell, RefCell},
    fmt,
    hash::{Hash, Hasher},
    rc::{Rc, Weak},
};

/// A node type that can be annotated by a depth-first search.
pub trait DfsNode: Sized {
    fn set_discovery_time(&self, time: u32);

    fn discovery_time(&self) -> u32;

    fn set_finish_time(&self, time: u32);

    fn finish_time(&self) -> u32;

    /// Records the node from which this node was discovered.  The parent is
    /// a lookup relation only; a node does not keep its parent alive.
    fn set_parent(&self, parent: Option<&Self>);

    fn parent(&self) -> Option<Self>;
}

struct VertexState {
    id: String,
    discovered: Cell<u32>,
    finished: Cell<u32>,
    parent: RefCell<Option<Weak<VertexState>>>,
}

/// A named vertex implementing [`DfsNode`].
///
/// Clones share their traversal state, so a handle kept by the caller sees
/// the times written to the copy stored in a graph.  Equality and hashing
/// only consider the id.
#[derive(Clone)]
pub struct DfsVertex {
    state: Rc<VertexState>,
}

impl DfsVertex {
    pub fn new(id: impl Into<String>) -> Self {
        DfsVertex {
            state: Rc::new(VertexState {
                id: id.into(),
                discovered: Cell::new(0),
                finished: Cell::new(0),
                parent: RefCell::new(None),
            }),
        }
    }

    pub fn id(&self) -> &str {
        &self.state.id
    }

    /// Renders the vertex as `id: discovery/finish`.
    pub fn timeline(&self) -> String {
        format!(
            "{}: {}/{}",
            self.id(),
            self.discovery_time(),
            self.finish_time()
        )
    }
}

impl DfsNode for DfsVertex {
    fn set_discovery_time(&self, time: u32) {
        self.state.discovered.set(time);
    }

    fn discovery_time(&self) -> u32 {
        self.state.discovered.get()
    }

    fn set_finish_time(&self, time: u32) {
        self.state.finished.set(time);
    }

    fn finish_time(&self) -> u32 {
        self.state.finished.get()
    }

    fn set_parent(&self, parent: Option<&Self>) {
        *self.state.parent.borrow_mut() = parent.map(|p| Rc::downgrade(&p.state));
    }

    fn parent(&self) -> Option<Self> {
        self.state
            .parent
            .borrow()
            .as_ref()
            .and_then(Weak::upgrade)
            .map(|state| DfsVertex { state })
    }
}

impl PartialEq for DfsVertex {
    fn eq(&self, other: &Self) -> bool {
        self.state.id == other.state.id
    }
}

impl Eq for DfsVertex {}

impl Hash for DfsVertex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.id.hash(state);
    }
}

impl fmt::Debug for DfsVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DfsVertex")
            .field("id", &self.state.id)
            .field("discovered", &self.discovery_time())
            .field("finished", &self.finish_time())
            .field("parent", &self.parent().map(|p| p.state.id.clone()))
            .finish()
    }
}

impl fmt::Display for DfsVertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.state.id)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_clones_share_state() {
        let a = DfsVertex::new("a");
        let copy = a.clone();
        copy.set_discovery_time(3);
        copy.set_finish_time(4);
        assert_eq!(a.discovery_time(), 3);
        assert_eq!(a.timeline(), "a: 3/4");
    }

    #[test]
    fn test_identity_ignores_state() {
        let a = DfsVertex::new("a");
        let other_a = DfsVertex::new("a");
        a.set_discovery_time(9);
        assert_eq!(a, other_a);
        let set: HashSet<_> = [a, other_a, DfsVertex::new("b")].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_parent_is_not_owned() {
        let child = DfsVertex::new("child");
        {
            let parent = DfsVertex::new("parent");
            child.set_parent(Some(&parent));
            assert_eq!(child.parent().map(|p| p.id().to_string()), Some("parent".into()));
        }
        assert!(child.parent().is_none());
    }

    #[test]
    fn test_clear_parent() {
        let a = DfsVertex::new("a");
        let b = DfsVertex::new("b");
        b.set_parent(Some(&a));
        b.set_parent(None);
        assert!(b.parent().is_none());
    }
}
