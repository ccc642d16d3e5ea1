pub mod delta;
pub mod format;
pub mod loader;
pub mod model;
pub mod orient;
pub mod report;
pub mod table;

pub use delta::Delta;
pub use loader::{load_pair, load_summary};
pub use model::{SessionSummary, TokenCounts};
pub use orient::{Orientation, Oriented, orient};
pub use report::{
    COMPARISON_FILE_NAME, ComparisonDeltas, ComparisonResult, InputTokenChange,
    default_output_path, input_token_change, render_summary, write_comparison,
};
pub use table::{Row, build_rows, render_table};
