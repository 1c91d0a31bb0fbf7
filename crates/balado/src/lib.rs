#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

// Modules the host will call into directly or indirectly
pub mod content;
pub mod errors;
pub mod fields;
pub mod host;
pub mod pages;
pub mod permalink;
pub mod styles;

#[cfg(feature = "maud")]
#[cfg_attr(docsrs, doc(cfg(feature = "maud")))]
pub mod components;

// Internal modules
mod logging;

pub use logging::init_logging;
