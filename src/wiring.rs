//! Auto-wiring of delete triggers
//!
//! Runs once per page load. Elements inserted afterwards are not guarded.

use crate::confirm::confirm_delete;
use crate::page::Page;

/// Guard every element matching `selector` with the plain confirm.
/// Returns how many elements were wired.
pub fn wire_delete_triggers<P: Page>(page: &P, selector: &str) -> usize {
    let triggers = page.triggers(selector);
    for trigger in &triggers {
        let guard_page = page.clone();
        page.guard(trigger, Box::new(move || confirm_delete(&guard_page)));
    }
    log::info!("guarded {} delete trigger(s) matching `{}`", triggers.len(), selector);
    triggers.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePage;

    #[test]
    fn test_one_guard_per_trigger() {
        let page = FakePage::default();
        page.add_element("delete-1");
        page.add_element("delete-2");
        page.add_element("delete-3");

        assert_eq!(wire_delete_triggers(&page, "a.delete-btn, button.delete-btn"), 3);
        let state = page.state.borrow();
        let wired: Vec<_> = state.guards.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(wired, vec!["delete-1", "delete-2", "delete-3"]);
    }

    #[test]
    fn test_guard_blocks_only_on_decline() {
        let page = FakePage::answering(&[false, true]);
        page.add_element("delete-1");
        wire_delete_triggers(&page, ".delete-btn");

        assert!(!page.activate("delete-1"));
        assert!(page.activate("delete-1"));
        assert_eq!(page.state.borrow().confirms.len(), 2);
    }

    #[test]
    fn test_late_elements_not_covered() {
        let page = FakePage::answering(&[false]);
        page.add_element("delete-1");
        wire_delete_triggers(&page, ".delete-btn");
        page.add_element("delete-late");

        assert!(page.activate("delete-late"));
        assert!(page.state.borrow().confirms.is_empty());
    }

    #[test]
    fn test_no_triggers() {
        let page = FakePage::default();
        assert_eq!(wire_delete_triggers(&page, ".delete-btn"), 0);
        assert!(page.state.borrow().guards.is_empty());
    }
}
