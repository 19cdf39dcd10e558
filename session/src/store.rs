//! Token persistence seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser client backs this with `localStorage`, the CLI with a file, and
//! tests with [`MemoryStore`]. Only `SessionController` calls it.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Fixed key the bearer token is stored under.
pub const TOKEN_KEY: &str = "token";

/// Durable single-slot storage for the current bearer token.
///
/// Implementations swallow their own I/O failures: a token that cannot be
/// read is reported as absent, and a failed write or clear is logged by the
/// implementation and otherwise ignored.
pub trait SessionStore {
    /// The stored token, or `None` when there is no session.
    fn get(&self) -> Option<String>;

    /// Overwrite the stored token.
    fn set(&self, token: &str);

    /// Remove the stored token. Idempotent.
    fn clear(&self);
}

impl<T: SessionStore + ?Sized> SessionStore for Rc<T> {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, token: &str) {
        (**self).set(token);
    }

    fn clear(&self) {
        (**self).clear();
    }
}

/// In-process store. Used for tests and for builds without persistent storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as after a previous page load.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self { token: RefCell::new(Some(token.to_owned())) }
    }
}

impl SessionStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}
