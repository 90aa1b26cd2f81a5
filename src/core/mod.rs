pub mod app;
pub mod catalog;
pub mod codegen;
pub mod config;
pub mod error;
pub mod output;
pub mod paths;
