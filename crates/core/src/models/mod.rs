//! API document types shared by the storefront and admin surfaces.
//!
//! Everything here mirrors the JSON the Canopy API speaks: camelCase keys,
//! decimal strings or bare numbers for money amounts, RFC 3339 timestamps.

pub mod cart;
pub mod catalog;
pub mod order;
pub mod page;
pub mod store;

pub use cart::*;
pub use catalog::*;
pub use order::*;
pub use page::*;
pub use store::*;
