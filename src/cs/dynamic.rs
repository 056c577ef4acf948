pub mod segment_savings;

// Re-export dynamic programming algorithms with descriptive names
pub use segment_savings::{best_coloring, coloring_score, max_savings, Color, SegmentTable};
