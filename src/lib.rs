#[doc = include_str!("../README.md")]
#[macro_use]
extern crate doc_comment;
doc_comment!(include_str!("../README.md"));

pub mod algorithms;

mod control;
pub use control::{CentralityConfig, CentralityControl};

mod error;
pub use error::{Error, ErrorKind};

mod network;
pub use network::{Neighbor, Network, NetworkBuilder};
