pub mod analyzer;
pub mod dictionary;
pub mod engine;
pub mod transcoder;
pub mod types;
