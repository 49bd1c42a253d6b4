//! This crate implements the lexical analysis phase of the converter. This phase is responsible
//! for encoding the expression string into [`node::Node`]s pulled from an arena chain.
//!
//! The final output of this phase is a [`token_buffer::TokenBuffer`], holding handles to the nodes
//! of the expression in source order.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod error;
pub mod node;
pub mod token_buffer;
pub mod tokenizer;
