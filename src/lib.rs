//! # tally
//!
//! tally is a line-oriented calculator language interpreter written in Rust.
//! It scans, parses, and evaluates integer-arithmetic commands with support
//! for variables and a `PRINT` statement, one line at a time, against a
//! symbol table that lives for the whole session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while scanning,
/// recognizing, or evaluating a command line. It standardizes error
/// reporting and carries detailed information about failures, including the
/// offending and expected token kinds and the column where the failure was
/// detected.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (scanner, parser, evaluator).
/// - Attaches columns and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of command evaluation.
///
/// This module ties together scanning, recursive-descent recognition, fused
/// evaluation, the symbol table, and the session that holds them together.
/// It exposes the public API for evaluating command lines.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, evaluator, and symbol table.
/// - Provides the session entry point for evaluating user commands.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::interpreter::session::Session;
