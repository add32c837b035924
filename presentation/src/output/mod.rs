//! Output formatting

pub mod response;
