//! # Bouquet Core
//!
//! Streaming assembly of predefined bouquets from flowers arriving one at a time.
//!
//! ## Architecture
//!
//! ```text
//! Specification lines (AS3a2b10)
//!     │
//!     ├──> Parser → BouquetSpec
//!     │
//!     ├──> BouquetCatalog (definition order, keyed by name+size)
//!     │
//!     └──> CandidateIndex (kind+size → FIFO of bouquets needing that kind)
//!
//! Arrival lines (aS)
//!     │
//!     └──> StreamProcessor
//!          ├─> storage ceiling check
//!          ├─> index candidate: place if still needed, else advance past it
//!          ├─> no index entry: first same-size bouquet with free space
//!          └─> emit canonical form when a placement completes a bouquet
//! ```
//!
//! ## Example
//!
//! ```rust
//! use bouquet_core::{run, ProcessorConfig};
//!
//! let input = "AS3a2b10\n\naS\naS\naS\nbS\nbS\n";
//! let mut output = Vec::new();
//!
//! let stats = run(input.as_bytes(), &mut output, &ProcessorConfig::default()).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "AS3a2b\n");
//! assert_eq!(stats.emitted, 1);
//! ```

mod bouquet;
mod catalog;
mod config;
mod error;
mod index;
mod parser;
mod processor;
mod stream;
mod types;

pub use bouquet::Bouquet;
pub use catalog::BouquetCatalog;
pub use config::{MalformedPolicy, ProcessorConfig, DEFAULT_STORAGE_CAPACITY, STORAGE_CAPACITY_ENV};
pub use error::{BouquetError, Result};
pub use index::CandidateIndex;
pub use parser::{decode_line, is_section_break, parse_arrival, parse_spec};
pub use processor::{Assignment, RunStats, StreamProcessor};
pub use stream::{read_catalog, run};
pub use types::{BouquetId, BouquetName, BouquetSpec, Flower, FlowerKind, IndexKey, SizeBucket};
