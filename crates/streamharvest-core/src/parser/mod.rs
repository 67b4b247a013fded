//! HTML parsers for source pages

pub mod iframe;

pub use iframe::parse_iframe_sources;
