//! UI Components
//!
//! Leptos components mounted on demand into server-rendered pages.

mod delete_confirm_modal;

pub use delete_confirm_modal::{show_delete_confirmation_modal, DeleteConfirmModal, ModalSession};
