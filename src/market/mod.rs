//! Market data: regions, price records and the lookup client.

pub mod client;
pub mod error;
pub mod record;
pub mod region;

pub use client::{MarketClient, PriceLookup};
pub use error::{LookupError, UpstreamFailure};
pub use record::PriceRecord;
pub use region::{Region, UnknownRegion};
