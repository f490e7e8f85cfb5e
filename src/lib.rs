//! # gradebook
//!
//! A personal grade tracker: records course grades, credits, and costs,
//! persists them as newline-delimited JSON, and computes GPA statistics
//! through an interactive menu.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Reading, writing, and clearing the grade file
pub mod persistence;
/// The grade record type shared by every component
pub mod record;
/// The interactive menu shell
pub mod shell;
/// GPA and cost statistics over a set of grades
pub mod stats;
/// The in-memory grade list, bound to its backing file
pub mod store;
