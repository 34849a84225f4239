//! Delete Confirmation Frontend
//!
//! WASM module loaded by the product pages: confirm prompts, a Bootstrap
//! modal, and an AJAX delete with status feedback.

mod bindings;
pub mod browser;
pub mod components;
pub mod config;
pub mod confirm;
pub mod cookie;
pub mod delete_flow;
pub mod error;
pub mod messages;
pub mod models;
pub mod page;
pub mod transport;
pub mod wiring;

#[cfg(test)]
mod testing;

pub use config::DeleteConfig;
pub use error::{ConfigError, DeleteError, PageError};
pub use models::{DeleteReport, DeleteSubject, Outcome, SubjectId};
pub use page::{Page, ScheduledTask, StatusIndicator, StatusTone};
pub use transport::{DeleteRequest, DeleteTransport, FetchTransport, HttpReply, TransportError};
