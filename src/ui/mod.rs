mod output;

pub use output::{display_content, display_error, display_query_plan, display_warning};
