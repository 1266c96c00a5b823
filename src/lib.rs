//! filetree - a collapsible file tree for path lists
//!
//! Turns a flat list of slash-separated paths into a sorted tree, hides
//! build noise, and renders it as an interactive terminal widget with
//! icons. Directory rows open and close on click; file rows are handed to
//! a [`core::SelectionSink`].

pub mod app;
pub mod core;
pub mod error;
pub mod handler;
pub mod integrate;
pub mod render;
pub mod tree;

pub use error::{FiletreeError, Result};
