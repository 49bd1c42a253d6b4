//! Contains the helpers shared by the property based tests of the workspace.

#![deny(missing_docs, missing_debug_implementations)]

pub mod input;
