// src/serebii/mod.rs
pub mod assets;
pub mod client;
pub mod models;

pub use assets::locate_assets;
pub use client::HttpFetcher;
pub use models::CatalogEntry;
