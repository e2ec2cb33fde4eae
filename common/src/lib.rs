//! Vessel Mapper Common Library
//!
//! Operator name matching and the vessel report pipeline, independent of
//! any workbook library except for the optional Excel export.

pub mod types;
pub mod layout;
pub mod error;
pub mod tokenizer;
pub mod matcher;
pub mod dates;
pub mod pipeline;
pub mod export;

pub use types::{CellValue, ReferenceEntry, Table, VesselRecord};
pub use error::{Error, Result};
pub use tokenizer::tokenize;
pub use matcher::{
    match_salesperson_codes, CandidateScore, SalespersonMatcher, APPROACH, DEFAULT_MATCH_THRESHOLD,
};
pub use pipeline::{PipelineOptions, PipelineOutput, PipelineStage, PipelineStats};
