// Sales Cleaner - Core Library
// One-shot cleaning pipeline for raw sales CSV exports

pub mod cleaner;
pub mod config;
pub mod dates;
pub mod deduplication;
pub mod error;
pub mod loader;
pub mod logging;
pub mod pipeline;
pub mod schema;
pub mod table;
pub mod writer;

// Re-export commonly used types
pub use cleaner::{ColumnKind, ColumnRule, ColumnStats, MissingPolicy, ValueCleaner};
pub use config::Config;
pub use dates::{DateConverter, DateFormat, CANONICAL_FORMAT};
pub use deduplication::{DedupKey, DeduplicationEngine};
pub use error::CleanError;
pub use loader::{load_csv, load_from_reader};
pub use pipeline::{CleaningPipeline, PipelineReport};
pub use schema::{ColumnRename, SchemaNormalizer};
pub use table::{Record, Table};
pub use writer::{write_csv, write_to};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
