//! Core module for journal data structures and chart data extraction.

pub mod chart;
pub mod color;
pub mod dates;
pub mod entry;
pub mod error;
pub mod parser;
pub mod sample;
pub mod settings;
