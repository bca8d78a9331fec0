// src/lib.rs

pub mod c_api;
pub mod core;
pub mod persistence;
pub use crate::core::engine::AnalysisEngine;
