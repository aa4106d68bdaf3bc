pub mod chat_task;
pub mod protocol;
pub mod rest;
pub mod state;
pub mod ws_handler;

// Re-export the main WebSocket handler to make it easily accessible
// to the binary that will build the web server router.
pub use rest::{health_handler, list_moods_handler, submit_bug_report_handler};
pub use ws_handler::ws_handler;
