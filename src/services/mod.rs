pub mod code_extractor;
pub mod follow_up_generator;
pub mod key_point_extractor;
pub mod text_normalizer;

pub use code_extractor::{extract_code, CodeMatcher};
pub use follow_up_generator::generate_follow_ups;
pub use key_point_extractor::{extract_key_points, ListPattern};
pub use text_normalizer::normalize;
