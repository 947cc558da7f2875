//! BCS Rust SDK
//!
//! Read-only query layer over a BCS corpus: decode codes to files or
//! contents, decode files back to codes, list codes and sections, and search
//! text across tiers.
//!
//! # Example
//!
//! ```no_run
//! use bcs_sdk::BcsClient;
//! use bcs_store::{IndexConfig, TierSelection};
//!
//! let client = BcsClient::open(&IndexConfig::new("data")).expect("Failed to index corpus");
//!
//! for result in client.decode_to_path(&["BCS0102", "BCS0103"], TierSelection::Best) {
//!     match result {
//!         Ok(resolved) => println!("{:?}", resolved.paths()),
//!         Err(e) => eprintln!("{}", e),
//!     }
//! }
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod search;

pub use client::{join_contents, BcsClient, TierAvailability, CONTENT_SEPARATOR};
pub use error::SdkError;
pub use search::{SearchHit, SearchQuery};
