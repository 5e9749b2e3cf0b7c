//! Scroll locking for whatever page sits behind the modal.
//!
//! The modal never reaches into the host page directly. The host hands in a [`ScrollLock`] and
//! the modal calls it on open and close. A shared `Rc<RefCell<_>>` handle works as well, so the
//! host can keep reading its own scroll state while the modal holds the lock.

use std::cell::RefCell;
use std::rc::Rc;

/// Host capability to freeze and unfreeze background scrolling.
pub trait ScrollLock {
    /// Stops the background from scrolling while the modal is open.
    fn lock_scroll(&mut self);
    /// Puts background scrolling back the way it was.
    fn restore_scroll(&mut self);
}

#[derive(Clone, Copy, Debug, Default)]
/// For hosts with nothing to lock, such as the full-page carousel.
pub struct NoScrollLock;

impl ScrollLock for NoScrollLock {
    fn lock_scroll(&mut self) {}

    fn restore_scroll(&mut self) {}
}

impl<T: ScrollLock> ScrollLock for Rc<RefCell<T>> {
    fn lock_scroll(&mut self) {
        self.borrow_mut().lock_scroll();
    }

    fn restore_scroll(&mut self) {
        self.borrow_mut().restore_scroll();
    }
}
