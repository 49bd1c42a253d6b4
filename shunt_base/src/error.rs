//! Contains the error raised when a container cannot obtain memory from the allocator.

use std::collections::TryReserveError;

use thiserror::Error;

/// The allocator refused to provide the memory needed to create or grow a container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("the allocator could not provide the requested memory: {0}")]
pub struct OutOfMemory(#[from] pub TryReserveError);
