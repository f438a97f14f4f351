//! Session-scoped shared state.
//!
//! The original design kept the interpreter cache and the pending revert as
//! free-standing globals; here they live in one explicitly owned [`Session`]
//! passed to the use cases, with the paste command as the only writer of the
//! revert slot outside of a fired revert.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use lm_core::python::InterpreterState;
use lm_core::revert::{PendingRevert, RevertSlot};

/// Shared state for one editing session.
#[derive(Debug, Default)]
pub struct Session {
    revert: Mutex<RevertSlot>,
    interpreter: Mutex<Option<InterpreterState>>,
    paste_in_flight: AtomicBool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the single paste slot.
    ///
    /// Returns `None` while another paste is still resolving; the command is
    /// rejected rather than letting two insertions race over the revert slot.
    pub fn begin_paste(&self) -> Option<PasteGuard<'_>> {
        self.paste_in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PasteGuard { session: self })
    }

    pub fn arm_revert(&self, pending: PendingRevert) {
        self.revert.lock().unwrap().arm(pending);
    }

    pub fn clear_revert(&self) {
        self.revert.lock().unwrap().clear();
    }

    pub fn pending_revert(&self) -> Option<PendingRevert> {
        self.revert.lock().unwrap().peek().cloned()
    }

    /// Cached interpreter state, if bootstrap ran this session.
    pub fn interpreter_state(&self) -> Option<InterpreterState> {
        self.interpreter.lock().unwrap().clone()
    }

    pub fn cache_interpreter(&self, state: InterpreterState) {
        *self.interpreter.lock().unwrap() = Some(state);
    }
}

/// RAII guard for the in-flight paste slot; releases the slot on drop so an
/// early return through `?` cannot leave the command permanently busy.
#[derive(Debug)]
pub struct PasteGuard<'a> {
    session: &'a Session,
}

impl Drop for PasteGuard<'_> {
    fn drop(&mut self) {
        self.session.paste_in_flight.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lm_core::document::LineSpan;

    #[test]
    fn paste_slot_is_exclusive_until_released() {
        let session = Session::new();

        let guard = session.begin_paste().expect("slot free");
        assert!(session.begin_paste().is_none(), "second paste must be rejected");

        drop(guard);
        assert!(session.begin_paste().is_some(), "slot free again after drop");
    }

    #[test]
    fn revert_slot_round_trip() {
        let session = Session::new();
        assert_eq!(session.pending_revert(), None);

        session.arm_revert(PendingRevert {
            original_url: "http://a.com".into(),
            inserted: LineSpan::new(0, 0, 5),
        });
        assert_eq!(
            session.pending_revert().unwrap().original_url,
            "http://a.com"
        );

        session.clear_revert();
        assert_eq!(session.pending_revert(), None);
    }

    #[test]
    fn interpreter_cache_written_once_read_many() {
        let session = Session::new();
        assert!(session.interpreter_state().is_none());

        session.cache_interpreter(InterpreterState::degraded());
        assert_eq!(
            session.interpreter_state(),
            Some(InterpreterState::degraded())
        );
    }
}
