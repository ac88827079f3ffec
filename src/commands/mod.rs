//! CLI command implementations for bamfilt.
//!
//! This module contains all the command implementations for the bamfilt CLI tool.
//! Each submodule implements a specific command.
//!
//! - [`filter`] - Drop alignment records with short sequences

#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::uninlined_format_args
)]

pub mod command;
pub mod common;
pub mod filter;
