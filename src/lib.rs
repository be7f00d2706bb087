//! Mock crypto exchange terminal.
//!
//! Order entry goes through [`order_flow::OrderFlow`], which validates a
//! draft, holds a pending confirmation and only then executes. Market,
//! wallet and earn screens read a static [`catalog::Catalog`]. Nothing
//! leaves the process.

pub mod book;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod notify;
pub mod order_flow;
pub mod tui;

pub use error::{MockexError, Result};
