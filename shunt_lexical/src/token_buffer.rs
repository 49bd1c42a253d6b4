//! Contains the [`TokenBuffer`] struct.

use derive_more::Deref;
use shunt_base::error::OutOfMemory;

use crate::node::NodeRef;

/// Is the ordered list of the nodes of an expression, in the order they appear in the source.
///
/// The buffer only stores handles; the nodes themselves stay owned by the arena chain they were
/// acquired from. Its capacity starts at one and doubles every time a push finds it full.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct TokenBuffer {
    #[deref]
    nodes: Vec<NodeRef>,
    capacity: usize,
}

impl TokenBuffer {
    /// Creates a new empty [`TokenBuffer`] with a capacity of one.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            capacity: 1,
        }
    }

    /// Returns the number of handles the buffer can hold before it has to grow.
    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Appends a handle at the end of the buffer, doubling the capacity first if it is full.
    ///
    /// # Errors
    /// - [`OutOfMemory`]: the buffer was full and could not grow; the handle is not appended.
    pub fn push(&mut self, node: NodeRef) -> Result<(), OutOfMemory> {
        let capacity = if self.nodes.len() == self.capacity {
            self.capacity * 2
        } else {
            self.capacity
        };

        if self.nodes.capacity() < capacity {
            self.nodes.try_reserve_exact(capacity - self.nodes.len())?;
        }

        self.capacity = capacity;

        self.nodes.push(node);
        Ok(())
    }

    /// Dissolves the buffer into its handles.
    #[must_use]
    pub fn dissolve(self) -> Vec<NodeRef> { self.nodes }
}

impl Default for TokenBuffer {
    fn default() -> Self { Self::new() }
}
