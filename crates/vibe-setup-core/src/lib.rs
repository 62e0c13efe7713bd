//! Core library for vibe-coding-setup.
//!
//! Scaffolds a new project that follows the memory-bank convention: a
//! `memory-bank/` of planning documents for an AI coding assistant to fill in,
//! plus Cursor rules under `.cursor/` that tell the assistant how to use them.
//!
//! The flow is linear. [`prompt`] collects a name and description,
//! [`name`] sanitizes the name into a directory token, [`scaffold`] creates
//! the tree via [`project`] and fills it from [`templates`], and
//! [`instructions`] renders the next-steps text. [`config`] selects between
//! the supported file layouts.

pub mod config;
pub mod error;
pub mod instructions;
pub mod name;
pub mod project;
pub mod prompt;
pub mod scaffold;
pub mod templates;
