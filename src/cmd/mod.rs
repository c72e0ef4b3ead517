pub mod config;
pub mod fields;
pub mod submit;
pub mod validate;
