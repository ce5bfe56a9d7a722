//! CLI commands for lexis

pub mod dispatch;
pub mod documents;
pub mod languages;
pub mod similar;
pub mod stem;
pub mod vectorize;
