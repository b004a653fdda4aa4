//! Line-oriented pbxproj editing
//!
//! This module holds the whole transformation: identifier minting ([`id`]),
//! the hard-coded triggers and injected content ([`edits`]), the single-pass
//! rewriter ([`rewriter`]), and the run summary ([`report`]).

pub mod edits;
pub mod id;
pub mod report;
pub mod rewriter;

pub use id::{GeneratedIds, ObjectId};
pub use report::PatchReport;
pub use rewriter::rewrite;
