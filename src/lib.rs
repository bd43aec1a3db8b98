//! IPv4 range arithmetic: derive block attributes from an address and mask,
//! split a block into equal children, merge blocks into aggregated CIDR
//! ranges and test blocks for overlap.
//!
//! Every operation is a pure function over `Copy` values and reports bad
//! input as a [`SubnetError`].

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{Result, SubnetError};
pub use models::{derive_block, BlockRecord, SubnetBlock};
pub use processing::{merge, overlaps, split};
