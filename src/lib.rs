pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod models;
pub mod normalizer;
pub mod parser;
pub mod pipeline;
pub mod report;
pub mod writer;
