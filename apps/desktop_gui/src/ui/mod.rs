//! UI layer: the single listing window and its two modal panels.

pub mod app;

pub use app::CatalogApp;
