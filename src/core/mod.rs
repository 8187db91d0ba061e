//! Core building blocks: export parameters, annotated value resolution,
//! variable flattening, and the `ConfigParser` configuration object.
pub mod annotation;
pub mod config_parser;
pub mod params;
pub mod variables;
