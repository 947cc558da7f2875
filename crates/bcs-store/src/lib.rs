//! BCS Storage Layer
//!
//! Builds an in-memory index of the tiered rule documents and resolves
//! addresses to files.
//!
//! # Architecture
//!
//! - The filesystem is the database: the index is rebuilt from a full walk on
//!   every invocation and never persisted
//! - Individual bad files become violations; only a missing root is fatal
//! - Resolution is a pure lookup against the built index
//!
//! # Examples
//!
//! ```no_run
//! use bcs_domain::{CodeAddress, Tier};
//! use bcs_store::{resolve, CorpusIndex, IndexConfig, TierSelection};
//!
//! let index = CorpusIndex::build(&IndexConfig::new("data")).unwrap();
//! let code = CodeAddress::parse("BCS0102").unwrap();
//! let resolved = resolve(&index, code, TierSelection::Exact(Tier::Summary));
//! ```

#![warn(missing_docs)]

mod config;
mod default_tier;
mod error;
mod index;
pub mod naming;
mod resolver;
mod sections;

pub use config::{IndexConfig, CONSOLIDATED_PREFIX};
pub use default_tier::{read_default_tier, set_default_tier};
pub use error::{IndexError, ResolveError};
pub use index::{CorpusIndex, SectionDir};
pub use resolver::{resolve, Resolved, Resolver, TierSelection};
pub use sections::{list_sections, SectionInfo};
