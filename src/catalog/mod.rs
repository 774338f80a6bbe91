//! The Stellar protocol types.
//!
//! Everything here is declared through the crate's union, enum and builder
//! generators, so all of it encodes with [`XdrCodec`](crate::XdrCodec).

pub mod asset;
pub mod keys;
pub mod ledger;
pub mod operations;
pub mod results;

pub use asset::*;
pub use keys::*;
pub use ledger::*;
pub use operations::*;
pub use results::*;
