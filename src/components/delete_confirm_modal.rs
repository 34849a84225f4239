//! Delete Confirm Modal Component
//!
//! Bootstrap-styled modal asking before a product is deleted. It is mounted
//! on demand and removed again as soon as it closes.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::error::PageError;
use crate::messages;
use crate::models::DeleteSubject;

#[derive(Default)]
struct SessionState {
    open: bool,
    continuation: Option<Box<dyn FnOnce()>>,
    disposer: Option<Box<dyn FnOnce()>>,
}

/// One open modal: runs the continuation at most once, and only on accept
#[derive(Clone)]
pub struct ModalSession {
    inner: Rc<RefCell<SessionState>>,
}

impl ModalSession {
    pub fn new(continuation: impl FnOnce() + 'static) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SessionState {
                open: true,
                continuation: Some(Box::new(continuation)),
                disposer: None,
            })),
        }
    }

    /// Cleanup run when the modal closes (immediately if it already has)
    pub fn set_disposer(&self, disposer: impl FnOnce() + 'static) {
        let mut state = self.inner.borrow_mut();
        if state.open {
            state.disposer = Some(Box::new(disposer));
        } else {
            drop(state);
            disposer();
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().open
    }

    /// Close and run the continuation. Returns `false` if already closed.
    pub fn accept(&self) -> bool {
        let Some((disposer, continuation)) = self.close() else {
            return false;
        };
        if let Some(dispose) = disposer {
            dispose();
        }
        if let Some(continuation) = continuation {
            continuation();
        }
        true
    }

    /// Close without running the continuation
    pub fn dismiss(&self) {
        if let Some((disposer, _continuation)) = self.close() {
            if let Some(dispose) = disposer {
                dispose();
            }
        }
    }

    #[allow(clippy::type_complexity)]
    fn close(&self) -> Option<(Option<Box<dyn FnOnce()>>, Option<Box<dyn FnOnce()>>)> {
        let mut state = self.inner.borrow_mut();
        if !state.open {
            return None;
        }
        state.open = false;
        Some((state.disposer.take(), state.continuation.take()))
    }
}

/// Modal markup, closes on "Batal", the × button, a backdrop click or Escape
#[component]
pub fn DeleteConfirmModal(subject: DeleteSubject, session: ModalSession) -> impl IntoView {
    let modal_ref = NodeRef::<leptos::html::Div>::new();

    // Focus the modal so Escape reaches it
    Effect::new(move |_| {
        if let Some(modal) = modal_ref.get() {
            let _ = modal.focus();
        }
    });

    let on_backdrop = session.clone();
    let on_escape = session.clone();
    let on_close = session.clone();
    let on_cancel = session.clone();
    let on_accept = session;

    view! {
        <div
            node_ref=modal_ref
            class="modal fade show"
            id="deleteConfirmModal"
            tabindex="-1"
            role="dialog"
            aria-modal="true"
            style="display: block; background: rgba(0, 0, 0, 0.5);"
            on:click=move |_| on_backdrop.dismiss()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    on_escape.dismiss();
                }
            }
        >
            <div class="modal-dialog" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                <div class="modal-content border-danger">
                    <div class="modal-header bg-danger text-white">
                        <h5 class="modal-title">{messages::MODAL_TITLE}</h5>
                        <button
                            type="button"
                            class="btn-close btn-close-white"
                            aria-label="Close"
                            on:click=move |_| on_close.dismiss()
                        ></button>
                    </div>
                    <div class="modal-body">
                        <p>{messages::MODAL_INTRO}</p>
                        <div class="alert alert-warning">
                            <strong>"Nama: "</strong>
                            {subject.label}
                            <br />
                            <strong>"ID: "</strong>
                            {subject.id.to_string()}
                        </div>
                        <p class="text-danger fw-bold">{messages::MODAL_IRREVERSIBLE}</p>
                    </div>
                    <div class="modal-footer">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| on_cancel.dismiss()
                        >
                            {messages::MODAL_CANCEL}
                        </button>
                        <button
                            type="button"
                            class="btn btn-danger"
                            id="confirmDeleteBtn"
                            on:click=move |_| {
                                on_accept.accept();
                            }
                        >
                            {messages::MODAL_CONFIRM}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// Mount the modal at the end of `<body>`. `on_confirm` runs once if the user accepts.
pub fn show_delete_confirmation_modal(
    subject: DeleteSubject,
    on_confirm: impl FnOnce() + 'static,
) -> Result<ModalSession, PageError> {
    let body = web_sys::window()
        .ok_or(PageError::NoWindow)?
        .document()
        .ok_or(PageError::NoDocument)?
        .body()
        .ok_or(PageError::NoBody)?;

    log::debug!("showing delete modal for {} (id {})", subject.label, subject.id);
    let session = ModalSession::new(on_confirm);
    let view_session = session.clone();
    let handle = leptos::mount::mount_to(body, move || {
        view! { <DeleteConfirmModal subject=subject session=view_session /> }
    });

    // Unmount on the next tick, not inside the click handler that closed it
    session.set_disposer(move || {
        Timeout::new(0, move || drop(handle)).forget();
    });
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counting_session() -> (ModalSession, Rc<Cell<u32>>, Rc<Cell<u32>>) {
        let runs = Rc::new(Cell::new(0));
        let disposed = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let session = ModalSession::new(move || counter.set(counter.get() + 1));
        let dispose_counter = disposed.clone();
        session.set_disposer(move || dispose_counter.set(dispose_counter.get() + 1));
        (session, runs, disposed)
    }

    #[test]
    fn test_accept_runs_continuation_once() {
        let (session, runs, disposed) = counting_session();
        assert!(session.accept());
        assert!(!session.accept());
        assert_eq!(runs.get(), 1);
        assert_eq!(disposed.get(), 1);
        assert!(!session.is_open());
    }

    #[test]
    fn test_dismiss_never_runs_continuation() {
        let (session, runs, disposed) = counting_session();
        session.dismiss();
        assert!(!session.accept());
        session.dismiss();
        assert_eq!(runs.get(), 0);
        assert_eq!(disposed.get(), 1);
    }

    #[test]
    fn test_late_disposer_runs_immediately() {
        let session = ModalSession::new(|| {});
        session.dismiss();
        let disposed = Rc::new(Cell::new(false));
        let flag = disposed.clone();
        session.set_disposer(move || flag.set(true));
        assert!(disposed.get());
    }

    #[test]
    fn test_continuation_may_reenter_session() {
        let slot: Rc<RefCell<Option<ModalSession>>> = Rc::new(RefCell::new(None));
        let inner = slot.clone();
        let session = ModalSession::new(move || {
            if let Some(session) = inner.borrow().as_ref() {
                assert!(!session.is_open());
            }
        });
        *slot.borrow_mut() = Some(session.clone());
        assert!(session.accept());
    }
}
