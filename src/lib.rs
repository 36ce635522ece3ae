//! xmltv-merge
//!
//! Merges program-guide documents from multiple EPG providers into one
//! canonical, deduplicated, sorted XMLTV document. A configurable filter
//! decides which channels are included and from which source each one may
//! come; free-text descriptions are mined for genre, year, rating, and
//! credits; locale-specific genres are mapped onto a canonical English
//! taxonomy that downstream PVRs (TVHeadend and friends) understand.
//!
//! The crate is a synchronous, in-memory engine. Fetching documents,
//! decompressing them, walking directories, and writing the merged XML back
//! out are the caller's job.
//!
//! ```
//! use xmltv_merge::{filters, ingest, MergeAssembler};
//!
//! let document = ingest::parse_xmltv(
//!     r#"<tv><channel id="BBC1"/><programme start="20240101060000" channel="BBC1">
//!        <title>Breakfast</title></programme></tv>"#,
//! )?;
//! let payload = serde_json::json!(["BBC1"]);
//!
//! let mut assembler = MergeAssembler::with_defaults(filters::resolve(Some(&payload)));
//! assembler.ingest("uk.xml", &document);
//! let merged = assembler.finalize();
//! assert_eq!(merged.channels.len(), 1);
//! # Ok::<(), xmltv_merge::errors::MergeError>(())
//! ```

pub mod config;
pub mod errors;
pub mod filters;
pub mod ingest;
pub mod merge;
pub mod mining;
pub mod models;
pub mod utils;

pub use config::MergeConfig;
pub use filters::{ChannelRule, FilterSpec, ResolvedFilter};
pub use merge::MergeAssembler;
pub use mining::{map_genre, DescriptionMiner};
pub use models::{NormalizedDocument, XmltvDocument};
