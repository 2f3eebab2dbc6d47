//! Core definitions (errors and result helpers), relied upon by all tracecol-* crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
