//! Application services.

pub mod translation;
pub mod worker_search;

pub use translation::{Translator, translate};
pub use worker_search::WorkerSearch;
