//! Type declaration generation.

pub mod typescript;
