//! compkit - browse a catalog of copy-pasteable backend components
//!
//! The core is the catalog, the search filter, navigation locations, and the
//! selection controller that keeps the active category in sync with the
//! navigation parameter. The terminal browser (`app`, `ui`) and the REST API
//! (`rest`) are two front ends over that core.

pub mod app;
pub mod catalog;
pub mod config;
pub mod filter;
pub mod logging;
pub mod navigation;
pub mod presentation;
pub mod rest;
pub mod selection;
pub mod ui;
