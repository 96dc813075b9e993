//! learnhub - course marketplace engine
//!
//! Catalog browsing (search, filter, sort), FAQ search, checkout and form
//! rules, page routing and dashboards, driven from a terminal CLI.

pub mod app;
pub mod catalog;
pub mod checkout;
pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod faq;
pub mod forms;
pub mod routes;
pub mod test_utils;
pub mod utils;

pub use error::{LhError, Result};
