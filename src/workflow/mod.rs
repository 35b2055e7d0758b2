pub mod dataset_builder;
pub mod record_assembler;

pub use dataset_builder::DatasetBuilder;
pub use record_assembler::{AssembleOutcome, RecordAssembler, RecordStats};
