//! # newslens
//!
//! Search world news by keyword, page through results in fixed-size
//! windows, and sample article publication dates for trend charts.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (Article, SearchContext, PageWindow)
//! - [`client`]: HTTP client for the news search API
//! - [`session`]: Search session state and pagination controller
//! - [`trend`]: Publication-date sampling and daily bucketing
//! - [`reference`]: Static country and language lookup tables
//! - [`config`]: Configuration management
//! - [`ui`]: Terminal output helpers

pub mod client;
pub mod config;
pub mod models;
pub mod reference;
pub mod session;
pub mod trend;
pub mod ui;

// Re-export commonly used types
pub use client::{ApiError, NewsApi, WorldNewsClient};
pub use models::{Article, PageWindow, SearchContext, PAGE_SIZE};
pub use session::{NewsSession, PageStatus, SearchError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
