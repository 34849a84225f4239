//! Blocking confirm prompts

use crate::messages;
use crate::models::DeleteSubject;
use crate::page::Page;

/// Fixed warning prompt. `true` means go ahead with the delete.
pub fn confirm_delete<P: Page>(page: &P) -> bool {
    let confirmed = page.confirm(messages::CONFIRM_DELETE);
    if confirmed {
        log::info!("user confirmed delete, continuing");
    } else {
        log::info!("user cancelled delete");
    }
    confirmed
}

/// Prompt naming the product about to be deleted
pub fn confirm_delete_with_details<P: Page>(page: &P, subject: &DeleteSubject) -> bool {
    let confirmed = page.confirm(&messages::confirm_with_details(subject));
    log::info!("delete of {} (id {}) confirmed: {}", subject.label, subject.id, confirmed);
    confirmed
}
