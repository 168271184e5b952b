//! Domain types shared by every Reelbase crate.
//!
//! Holds the error taxonomy, movie field rules, the metadata provider seam,
//! and the enrichment merge. No database or HTTP dependencies live here.

pub mod enrichment;
pub mod error;
pub mod metadata;
pub mod movie;
pub mod types;
