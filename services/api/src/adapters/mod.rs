pub mod bug_report;
pub mod curator_llm;
pub mod met;

pub use bug_report::{BugReport, WebhookBugReporter};
pub use curator_llm::GroqCuratorAdapter;
pub use met::MetCatalogueAdapter;
