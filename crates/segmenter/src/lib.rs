//! Structural segmentation of files into attributable units.
//!
//! Source files segment along declaration boundaries (methods, constructors,
//! nested types, with attached doc comments pulled into the unit); Markdown
//! segments along `#`/`##`/`###` headings. Both variants produce the same
//! ordered [`SegmentEvent`] stream that the attribution sweep consumes, so
//! the merge logic downstream does not care which kind of file it came from.

mod ast;
mod code;
mod document;
mod error;
mod language;
mod provider;
mod types;

pub use ast::AstStructure;
pub use code::segment_source;
pub use document::segment_document;
pub use error::{Result, SegmenterError};
pub use language::Language;
pub use provider::{MemberDecl, StructureProvider, TypeDecl};
pub use types::{LineRange, SegmentEvent};
