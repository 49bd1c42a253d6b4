//! Contains the code shared by every phase of the converter: the configuration surface, the node
//! arena, the generic stack and the diagnostics rendering.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod arena;
pub mod config;
pub mod error;
pub mod log;
pub mod stack;
