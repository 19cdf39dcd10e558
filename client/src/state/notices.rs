//! Toast queue state.
//!
//! DESIGN
//! ======
//! Every notice gets a monotonically increasing id so a delayed dismissal
//! removes exactly the toast it was scheduled for, even if newer ones arrived.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

use session::{Notice, NoticeLevel};

/// Maximum number of toasts shown at once; older ones are dropped first.
pub const MAX_VISIBLE: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeItem {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<NoticeItem>,
    next_id: u64,
}

impl NoticeState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(NoticeItem { id, level: notice.level, message: notice.message });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove the notice with `id`. Returns whether it was still queued.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}

/// CSS modifier for a notice level.
pub fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "toast toast--success",
        NoticeLevel::Error => "toast toast--error",
    }
}
