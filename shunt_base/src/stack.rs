//! Contains the generic LIFO [`Stack`] and its [`Dump`] display.

use std::fmt::Display;

use log::trace;

use crate::{config::resolve_capacity, error::OutOfMemory};

/// Represents a growable last-in first-out collection.
///
/// The stack keeps its own logical capacity which doubles whenever a push finds the stack full.
/// The capacity check always happens before the element is written, and the backing storage is
/// reserved fallibly so that an allocation failure is reported instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Stack<T> {
    /// Creates a new empty [`Stack`] with the default capacity.
    ///
    /// # Errors
    /// - [`OutOfMemory`]: the allocator could not provide the backing storage.
    pub fn new() -> Result<Self, OutOfMemory> { Self::with_capacity(0) }

    /// Creates a new empty [`Stack`] able to hold `capacity` elements before growing.
    ///
    /// A capacity of zero is replaced by [`crate::config::DEFAULT_CAPACITY`].
    ///
    /// # Errors
    /// - [`OutOfMemory`]: the allocator could not provide the backing storage.
    pub fn with_capacity(capacity: usize) -> Result<Self, OutOfMemory> {
        let capacity = resolve_capacity(capacity);

        let mut items = Vec::new();
        items.try_reserve_exact(capacity)?;

        Ok(Self { items, capacity })
    }

    /// Returns the number of elements the stack can hold before it has to grow.
    #[must_use]
    pub fn capacity(&self) -> usize { self.capacity }

    /// Returns the number of elements in the stack.
    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    /// Returns `true` if the stack contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Pushes an element on top of the stack, doubling the capacity first if the stack is full.
    ///
    /// # Errors
    /// - [`OutOfMemory`]: the stack was full and could not grow; the element is not pushed.
    pub fn push(&mut self, item: T) -> Result<(), OutOfMemory> {
        if self.items.len() == self.capacity {
            let new_capacity = self.capacity * 2;
            self.items.try_reserve_exact(new_capacity - self.items.len())?;
            self.capacity = new_capacity;

            trace!("stack grown to {new_capacity} elements");
        }

        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the topmost element, or [`None`] if the stack is empty.
    pub fn pop(&mut self) -> Option<T> { self.items.pop() }

    /// Returns a reference to the topmost element, or [`None`] if the stack is empty.
    #[must_use]
    pub fn peek(&self) -> Option<&T> { self.items.last() }

    /// Returns an iterator over the elements from the bottom to the top of the stack.
    pub fn iter(&self) -> std::slice::Iter<T> { self.items.iter() }

    /// Dissolves the stack into its elements, ordered from the bottom to the top.
    #[must_use]
    pub fn dissolve(self) -> Vec<T> { self.items }

    /// Returns a [`Display`] listing the capacity, the size and the elements of the stack from the
    /// top down, each element rendered by `display`.
    pub fn dump<'a, D, F>(&'a self, display: F) -> Dump<'a, T, F>
    where
        D: Display,
        F: Fn(&'a T) -> D,
    {
        Dump {
            stack: self,
            display,
        }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

/// Is a struct implementing [`Display`] that prints the content of a [`Stack`].
///
/// See [`Stack::dump`].
#[derive(Debug, Clone, Copy)]
pub struct Dump<'a, T, F> {
    stack: &'a Stack<T>,
    display: F,
}

impl<'a, T, F, D> Display for Dump<'a, T, F>
where
    F: Fn(&'a T) -> D,
    D: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stack: &'a Stack<T> = self.stack;

        writeln!(f, "Stack Capacity: {}", stack.capacity())?;
        writeln!(f, "Stack Size: {}", stack.len())?;

        if stack.is_empty() {
            return writeln!(f, "The stack is empty!");
        }

        writeln!(f, "Stack Contents: ...")?;
        writeln!(f)?;

        for (index, item) in stack.items.iter().enumerate().rev() {
            writeln!(f, "\t{index}\t{}", (self.display)(item))?;
        }

        Ok(())
    }
}
