pub mod markdown;
pub mod summary;

pub use markdown::{render_markdown, write_summary};
pub use summary::{
    IssueTypeBreakdown, IssueTypeCount, SeverityBreakdown, issue_type_label, load_report,
};
