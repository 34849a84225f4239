//! Page Capability
//!
//! Everything the delete flows need from the browser, behind a trait so the
//! flows run against a scripted page in tests.

/// Visual tone of a status element, mapped to Bootstrap alert classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    Info,
    Success,
    Danger,
}

impl StatusTone {
    pub fn class_name(self) -> &'static str {
        match self {
            StatusTone::Info => "alert alert-info",
            StatusTone::Success => "alert alert-success",
            StatusTone::Danger => "alert alert-danger",
        }
    }
}

/// A status element already inserted into the page
pub trait StatusIndicator {
    fn update(&self, tone: StatusTone, text: &str);
}

/// Handle to a delayed task
pub trait ScheduledTask {
    /// Drop the task without running it
    fn cancel(self);
    /// Let the task run even after the handle is gone
    fn detach(self);
}

/// Handle on the host document and window
pub trait Page: Clone + 'static {
    type Status: StatusIndicator;
    type Timer: ScheduledTask;
    type Trigger;

    /// Blocking yes/no dialog, `true` when accepted
    fn confirm(&self, message: &str) -> bool;

    fn alert(&self, message: &str);

    /// Raw cookie string (`a=1; b=2`)
    fn cookies(&self) -> String;

    /// Append a status element to the page
    fn insert_status(&self, tone: StatusTone, text: &str) -> Self::Status;

    fn navigate(&self, url: &str);

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Timer;

    /// Elements currently matching `selector`
    fn triggers(&self, selector: &str) -> Vec<Self::Trigger>;

    /// Run `guard` on activation of `trigger`; a `false` result suppresses the default action
    fn guard(&self, trigger: &Self::Trigger, guard: Box<dyn Fn() -> bool>);
}
