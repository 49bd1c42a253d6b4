//! Contains the definition of [`Arena`], [`Chain`], [`ID`] and [`Handle`].

use std::{
    fmt::Debug,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

use derive_more::Deref;
use log::debug;

use crate::{
    config::{resolve_capacity, Config},
    error::OutOfMemory,
};

/// Represents an unique identifier to a particular slot in the [`Arena`] of type `T`.
pub struct ID<T> {
    index: usize,
    _marker: PhantomData<T>,
}

impl<T> Debug for ID<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ID").field(&self.index).finish()
    }
}

impl<T> ID<T> {
    /// Creates a new [`ID`] with the given index.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }

    /// Gets the slot index this [`ID`] points to.
    #[must_use]
    pub fn index(self) -> usize { self.index }
}

impl<T> Clone for ID<T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for ID<T> {}

impl<T> PartialEq for ID<T> {
    fn eq(&self, other: &Self) -> bool { self.index == other.index }
}

impl<T> Eq for ID<T> {}

impl<T> PartialOrd for ID<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> { Some(self.cmp(other)) }
}

impl<T> Ord for ID<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering { self.index.cmp(&other.index) }
}

impl<T> std::hash::Hash for ID<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) { self.index.hash(state) }
}

/// Represents a fixed-capacity, append-only pool of slots of type `T`.
///
/// All the slots are allocated up front when the [`Arena`] is created and start out as
/// `T::default()`. Slots are handed out one after another by [`Arena::acquire`] and are never
/// recycled; the whole pool is released at once when the [`Arena`] is dropped. An [`ID`] stays
/// valid for as long as the [`Arena`] that produced it is alive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arena<T> {
    slots: Vec<T>,
    used: usize,
}

impl<T: Default> Arena<T> {
    /// Creates a new [`Arena`] with the default capacity.
    ///
    /// # Errors
    /// - [`OutOfMemory`]: the allocator could not provide the slots.
    pub fn new() -> Result<Self, OutOfMemory> { Self::with_capacity(0) }

    /// Creates a new [`Arena`] holding exactly `capacity` slots.
    ///
    /// A capacity of zero is replaced by [`crate::config::DEFAULT_CAPACITY`].
    ///
    /// # Errors
    /// - [`OutOfMemory`]: the allocator could not provide the slots.
    pub fn with_capacity(capacity: usize) -> Result<Self, OutOfMemory> {
        let capacity = resolve_capacity(capacity);

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        slots.resize_with(capacity, T::default);

        debug!("arena initialised with {capacity} slots");

        Ok(Self { slots, used: 0 })
    }
}

impl<T> Arena<T> {
    /// Returns the fixed number of slots of the [`Arena`].
    #[must_use]
    pub fn capacity(&self) -> usize { self.slots.len() }

    /// Returns the number of slots handed out so far.
    #[must_use]
    pub fn used(&self) -> usize { self.used }

    /// Returns `true` if every slot has been handed out.
    #[must_use]
    pub fn is_exhausted(&self) -> bool { self.used == self.slots.len() }

    /// Hands out the next unused slot.
    ///
    /// Returns [`None`] if the [`Arena`] is exhausted.
    pub fn acquire(&mut self) -> Option<ID<T>> {
        if self.is_exhausted() {
            return None;
        }

        let id = ID::new(self.used);
        self.used += 1;

        Some(id)
    }

    /// Returns a reference to the slot with the given [`ID`].
    ///
    /// Returns [`None`] if the slot has not been handed out.
    #[must_use]
    pub fn get(&self, id: ID<T>) -> Option<&T> { self.slots[..self.used].get(id.index) }

    /// Returns a mutable reference to the slot with the given [`ID`].
    ///
    /// Returns [`None`] if the slot has not been handed out.
    #[must_use]
    pub fn get_mut(&mut self, id: ID<T>) -> Option<&mut T> {
        self.slots[..self.used].get_mut(id.index)
    }

    /// Returns an iterator over the slots handed out so far, in the order they were acquired.
    pub fn iter(&self) -> std::slice::Iter<T> { self.slots[..self.used].iter() }
}

impl<T> Index<ID<T>> for Arena<T> {
    type Output = T;

    fn index(&self, id: ID<T>) -> &Self::Output { self.get(id).unwrap() }
}

impl<T> IndexMut<ID<T>> for Arena<T> {
    fn index_mut(&mut self, id: ID<T>) -> &mut Self::Output { self.get_mut(id).unwrap() }
}

impl<'a, T> IntoIterator for &'a Arena<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Represents a slot handed out by a [`Chain`]: the position of the arena in the chain and the
/// [`ID`] of the slot inside that arena.
pub struct Handle<T> {
    arena: usize,
    id: ID<T>,
}

impl<T> Handle<T> {
    /// Gets the position of the owning arena in its [`Chain`].
    #[must_use]
    pub fn arena(self) -> usize { self.arena }

    /// Gets the [`ID`] of the slot inside the owning arena.
    #[must_use]
    pub fn id(self) -> ID<T> { self.id }
}

impl<T> Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Handle")
            .field(&self.arena)
            .field(&self.id.index)
            .finish()
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self { *self }
}

impl<T> Copy for Handle<T> {}

impl<T> PartialEq for Handle<T> {
    fn eq(&self, other: &Self) -> bool { self.arena == other.arena && self.id == other.id }
}

impl<T> Eq for Handle<T> {}

impl<T> PartialOrd for Handle<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> { Some(self.cmp(other)) }
}

impl<T> Ord for Handle<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.arena
            .cmp(&other.arena)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl<T> std::hash::Hash for Handle<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.arena.hash(state);
        self.id.hash(state);
    }
}

/// Represents an ordered list of [`Arena`]s consumed one after another.
///
/// Once an arena is exhausted the chain moves its cursor to the next one. The cursor never moves
/// backwards, so later acquisitions resume where the previous one left off.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref)]
pub struct Chain<T> {
    #[deref]
    arenas: Vec<Arena<T>>,
    cursor: usize,
}

impl<T: Default> Chain<T> {
    /// Creates the chain described by the arena capacity and arena count of the given [`Config`].
    ///
    /// # Errors
    /// - [`OutOfMemory`]: the allocator could not provide the slots of one of the arenas.
    pub fn from_config(config: &Config) -> Result<Self, OutOfMemory> {
        let config = config.resolved();

        let mut arenas = Vec::new();
        arenas.try_reserve_exact(config.arena_count())?;

        for _ in 0..config.arena_count() {
            arenas.push(Arena::with_capacity(config.arena_capacity())?);
        }

        Ok(Self::new(arenas))
    }
}

impl<T> Chain<T> {
    /// Creates a new [`Chain`] over the given arenas, starting at the first one.
    #[must_use]
    pub fn new(arenas: Vec<Arena<T>>) -> Self { Self { arenas, cursor: 0 } }

    /// Gets the position of the arena the next acquisition is attempted on.
    #[must_use]
    pub fn cursor(&self) -> usize { self.cursor }

    /// Hands out the next unused slot of the chain.
    ///
    /// Returns [`None`] only once every arena of the chain is exhausted.
    pub fn acquire(&mut self) -> Option<Handle<T>> {
        while let Some(arena) = self.arenas.get_mut(self.cursor) {
            if let Some(id) = arena.acquire() {
                return Some(Handle {
                    arena: self.cursor,
                    id,
                });
            }

            self.cursor += 1;
            debug!("arena exhausted, the chain moves on to arena {}", self.cursor);
        }

        None
    }

    /// Returns a reference to the slot with the given [`Handle`].
    #[must_use]
    pub fn get(&self, handle: Handle<T>) -> Option<&T> {
        self.arenas.get(handle.arena)?.get(handle.id)
    }

    /// Returns a mutable reference to the slot with the given [`Handle`].
    #[must_use]
    pub fn get_mut(&mut self, handle: Handle<T>) -> Option<&mut T> {
        self.arenas.get_mut(handle.arena)?.get_mut(handle.id)
    }

    /// Dissolves the chain into its arenas.
    #[must_use]
    pub fn dissolve(self) -> Vec<Arena<T>> { self.arenas }
}

impl<T> Index<Handle<T>> for Chain<T> {
    type Output = T;

    fn index(&self, handle: Handle<T>) -> &Self::Output { self.get(handle).unwrap() }
}

impl<T> IndexMut<Handle<T>> for Chain<T> {
    fn index_mut(&mut self, handle: Handle<T>) -> &mut Self::Output {
        self.get_mut(handle).unwrap()
    }
}
