//! Scripted page and transport used by unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::page::{Page, ScheduledTask, StatusIndicator, StatusTone};
use crate::transport::{DeleteRequest, DeleteTransport, HttpReply, TransportError};

#[derive(Default)]
pub struct PageState {
    pub confirm_answers: VecDeque<bool>,
    pub confirms: Vec<String>,
    pub alerts: Vec<String>,
    pub cookies: String,
    /// One entry per inserted status element, holding every (tone, text) it showed
    pub statuses: Vec<Vec<(StatusTone, String)>>,
    pub navigations: Vec<String>,
    /// (delay, task) pairs; tasks are run by `fire_timers`
    pub timers: Vec<(u32, Option<Box<dyn FnOnce()>>)>,
    pub elements: Vec<String>,
    pub guards: Vec<(String, Rc<dyn Fn() -> bool>)>,
}

#[derive(Clone, Default)]
pub struct FakePage {
    pub state: Rc<RefCell<PageState>>,
}

impl FakePage {
    pub fn answering(answers: &[bool]) -> Self {
        let page = Self::default();
        page.state.borrow_mut().confirm_answers = answers.iter().copied().collect();
        page
    }

    pub fn with_cookies(self, cookies: &str) -> Self {
        self.state.borrow_mut().cookies = cookies.to_string();
        self
    }

    pub fn add_element(&self, id: &str) {
        self.state.borrow_mut().elements.push(id.to_string());
    }

    /// Simulate a click: `true` if the default action goes ahead
    pub fn activate(&self, id: &str) -> bool {
        let guards: Vec<_> = self
            .state
            .borrow()
            .guards
            .iter()
            .filter(|(element, _)| element == id)
            .map(|(_, guard)| guard.clone())
            .collect();
        guards.iter().all(|guard| guard())
    }

    pub fn fire_timers(&self) {
        let tasks: Vec<_> = self
            .state
            .borrow_mut()
            .timers
            .iter_mut()
            .filter_map(|(_, task)| task.take())
            .collect();
        for task in tasks {
            task();
        }
    }
}

pub struct FakeStatus {
    state: Rc<RefCell<PageState>>,
    index: usize,
}

impl StatusIndicator for FakeStatus {
    fn update(&self, tone: StatusTone, text: &str) {
        self.state.borrow_mut().statuses[self.index].push((tone, text.to_string()));
    }
}

pub struct FakeTimer {
    state: Rc<RefCell<PageState>>,
    index: usize,
    pub detached: Rc<Cell<bool>>,
}

impl ScheduledTask for FakeTimer {
    fn cancel(self) {
        self.state.borrow_mut().timers[self.index].1 = None;
    }

    fn detach(self) {
        self.detached.set(true);
    }
}

impl Page for FakePage {
    type Status = FakeStatus;
    type Timer = FakeTimer;
    type Trigger = String;

    fn confirm(&self, message: &str) -> bool {
        let mut state = self.state.borrow_mut();
        state.confirms.push(message.to_string());
        state.confirm_answers.pop_front().unwrap_or(false)
    }

    fn alert(&self, message: &str) {
        self.state.borrow_mut().alerts.push(message.to_string());
    }

    fn cookies(&self) -> String {
        self.state.borrow().cookies.clone()
    }

    fn insert_status(&self, tone: StatusTone, text: &str) -> FakeStatus {
        let mut state = self.state.borrow_mut();
        state.statuses.push(vec![(tone, text.to_string())]);
        FakeStatus {
            state: self.state.clone(),
            index: state.statuses.len() - 1,
        }
    }

    fn navigate(&self, url: &str) {
        self.state.borrow_mut().navigations.push(url.to_string());
    }

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> FakeTimer {
        let mut state = self.state.borrow_mut();
        state.timers.push((delay_ms, Some(task)));
        FakeTimer {
            state: self.state.clone(),
            index: state.timers.len() - 1,
            detached: Rc::new(Cell::new(false)),
        }
    }

    fn triggers(&self, _selector: &str) -> Vec<String> {
        self.state.borrow().elements.clone()
    }

    fn guard(&self, trigger: &String, guard: Box<dyn Fn() -> bool>) {
        self.state.borrow_mut().guards.push((trigger.clone(), Rc::from(guard)));
    }
}

/// Transport answering with a fixed result and recording requests
pub struct FakeTransport {
    pub reply: Result<HttpReply, TransportError>,
    pub requests: RefCell<Vec<DeleteRequest>>,
}

impl FakeTransport {
    pub fn status(status: u16, status_text: &str) -> Self {
        Self {
            reply: Ok(HttpReply {
                status,
                status_text: status_text.to_string(),
            }),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(TransportError(message.to_string())),
            requests: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl DeleteTransport for FakeTransport {
    async fn delete(&self, request: &DeleteRequest) -> Result<HttpReply, TransportError> {
        self.requests.borrow_mut().push(request.clone());
        self.reply.clone()
    }
}
