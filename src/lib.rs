pub mod cs;
pub mod error;
pub mod input;

pub use cs::dynamic;
pub use cs::dynamic::{best_coloring, coloring_score, max_savings, Color, SegmentTable};
pub use error::{Error, Result};
pub use input::{parse_test_cases, TestCase};
