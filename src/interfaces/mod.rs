//! Adapters between the outside world (files, stdout) and the library.

pub mod csv;
pub mod json;
