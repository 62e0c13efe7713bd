//! CLI command implementations for vibe-coding-setup.

pub mod init;
