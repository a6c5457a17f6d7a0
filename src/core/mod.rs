// CreatorScope - core/mod.rs
//
// Core business logic layer: the catalog query engine.
// Dependencies: util layer, serde, regex, csv, tracing.
// Must NOT depend on: app, platform, or perform any filesystem I/O.

pub mod export;
pub mod filter;
pub mod format;
pub mod model;
pub mod options;
pub mod price;
pub mod query;
pub mod range;
pub mod sort;
