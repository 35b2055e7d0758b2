pub mod category;
pub mod dataset;
pub mod loaders;
pub mod question;

pub use category::Category;
pub use dataset::{Dataset, DatasetSummary};
pub use loaders::{load_blocks, load_csv_records, parse_blocks, InputFormat};
pub use question::{CodeExample, Question, RawRecord};
