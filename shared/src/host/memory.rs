use std::cell::{Cell, RefCell};

use chrono::{DateTime, Duration, Utc};

use super::{Document, Scheduler, TimerId};

/// In-memory [`Document`] with synthetic clicks.
pub struct MemoryDocument {
    path: RefCell<String>,
    title: RefCell<String>,
    title_history: RefCell<Vec<String>>,
    click_listeners: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl MemoryDocument {
    pub fn new(path: &str, title: &str) -> Self {
        Self {
            path: RefCell::new(path.to_string()),
            title: RefCell::new(title.to_string()),
            title_history: RefCell::new(Vec::new()),
            click_listeners: RefCell::new(Vec::new()),
        }
    }

    /// Every title written through [`Document::set_title`], oldest first.
    pub fn title_history(&self) -> Vec<String> {
        self.title_history.borrow().clone()
    }

    pub fn pending_click_listeners(&self) -> usize {
        self.click_listeners.borrow().len()
    }

    /// Dispatches a click, consuming every listener registered so far.
    pub fn click(&self) {
        let listeners = std::mem::take(&mut *self.click_listeners.borrow_mut());
        for listener in listeners {
            listener();
        }
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new("/", "")
    }
}

impl Document for MemoryDocument {
    fn location_path(&self) -> String {
        self.path.borrow().clone()
    }

    fn title(&self) -> String {
        self.title.borrow().clone()
    }

    fn set_title(&self, title: &str) {
        *self.title.borrow_mut() = title.to_string();
        self.title_history.borrow_mut().push(title.to_string());
    }

    fn on_next_click(&self, handler: Box<dyn FnOnce()>) {
        self.click_listeners.borrow_mut().push(handler);
    }
}

struct PendingTimer {
    id: TimerId,
    due_ms: u64,
    task: Box<dyn FnOnce()>,
}

/// Virtual clock: time only moves when [`ManualScheduler::advance`] is called.
pub struct ManualScheduler {
    origin: DateTime<Utc>,
    elapsed_ms: Cell<u64>,
    next_id: Cell<i32>,
    timers: RefCell<Vec<PendingTimer>>,
}

impl ManualScheduler {
    pub fn new(origin: DateTime<Utc>) -> Self {
        Self {
            origin,
            elapsed_ms: Cell::new(0),
            next_id: Cell::new(1),
            timers: RefCell::new(Vec::new()),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms.get()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Moves the clock forward, running due timers in deadline order.
    pub fn advance(&self, ms: u64) {
        let target = self.elapsed_ms.get() + ms;
        loop {
            let next = {
                let mut timers = self.timers.borrow_mut();
                let due = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due_ms <= target)
                    .min_by_key(|(_, t)| (t.due_ms, t.id.0))
                    .map(|(index, _)| index);
                due.map(|index| timers.remove(index))
            };

            match next {
                Some(timer) => {
                    self.elapsed_ms.set(timer.due_ms);
                    (timer.task)();
                }
                None => break,
            }
        }
        self.elapsed_ms.set(target);
    }
}

impl Default for ManualScheduler {
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> DateTime<Utc> {
        self.origin + Duration::milliseconds(self.elapsed_ms.get() as i64)
    }

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId {
        let id = TimerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.timers.borrow_mut().push(PendingTimer {
            id,
            due_ms: self.elapsed_ms.get() + u64::from(delay_ms),
            task,
        });
        id
    }

    fn clear_timeout(&self, id: TimerId) {
        self.timers.borrow_mut().retain(|t| t.id != id);
    }
}
