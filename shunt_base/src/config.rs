//! Contains the [`Config`] struct, the single place where the capacities used throughout a parse
//! are decided.

use derive_new::new;
use getset::CopyGetters;

/// The capacity assumed whenever a capacity of zero is requested, for both the node arenas and the
/// stacks.
pub const DEFAULT_CAPACITY: usize = 16;

/// Maps the "unspecified" capacity of zero to [`DEFAULT_CAPACITY`].
#[must_use]
pub fn resolve_capacity(capacity: usize) -> usize {
    if capacity == 0 {
        DEFAULT_CAPACITY
    } else {
        capacity
    }
}

/// Represents the capacities of the containers created during a single parse session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, CopyGetters, new)]
pub struct Config {
    /// Gets the number of nodes each arena of the chain can hold.
    #[get_copy = "pub"]
    arena_capacity: usize,

    /// Gets the number of arenas in the chain.
    #[get_copy = "pub"]
    arena_count: usize,

    /// Gets the initial capacity of the operator and output stacks.
    #[get_copy = "pub"]
    stack_capacity: usize,
}

impl Config {
    /// Returns a copy of the configuration where every zero capacity has been replaced by
    /// [`DEFAULT_CAPACITY`] and the arena count is at least one.
    #[must_use]
    pub fn resolved(self) -> Self {
        Self {
            arena_capacity: resolve_capacity(self.arena_capacity),
            arena_count: self.arena_count.max(1),
            stack_capacity: resolve_capacity(self.stack_capacity),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_capacity: DEFAULT_CAPACITY,
            arena_count: 1,
            stack_capacity: DEFAULT_CAPACITY,
        }
    }
}
