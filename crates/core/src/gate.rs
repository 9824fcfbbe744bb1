//! At-most-one in-flight call per action.
//!
//! Each asynchronous action (ask the AI designer, save, delete, ...) owns an
//! [`InFlightGate`]. Starting the action requires an [`InFlightToken`] from
//! [`InFlightGate::try_begin`]; while the token is alive the gate is
//! [`GateState::Pending`] and further attempts get `None`. Dropping the token,
//! on success, failure or panic, returns the gate to [`GateState::Idle`].
//!
//! # Example
//!
//! ```
//! use solecraft_core::{GateState, InFlightGate};
//!
//! let gate = InFlightGate::new();
//! let token = gate.try_begin().expect("gate starts idle");
//! assert_eq!(gate.state(), GateState::Pending);
//! assert!(gate.try_begin().is_none());
//!
//! drop(token);
//! assert_eq!(gate.state(), GateState::Idle);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Observable state of a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateState {
    Idle,
    Pending,
}

/// Guards one action against overlapping calls.
#[derive(Debug, Default)]
pub struct InFlightGate {
    busy: Arc<AtomicBool>,
}

/// Proof that the owning action is running. Dropping it releases the gate.
#[derive(Debug)]
#[must_use = "the gate returns to Idle as soon as the token is dropped"]
pub struct InFlightToken {
    busy: Arc<AtomicBool>,
}

impl InFlightGate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move Idle to Pending, or return `None` if a call is already in flight.
    pub fn try_begin(&self) -> Option<InFlightToken> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightToken {
                busy: Arc::clone(&self.busy),
            })
    }

    #[must_use]
    pub fn state(&self) -> GateState {
        if self.busy.load(Ordering::Acquire) {
            GateState::Pending
        } else {
            GateState::Idle
        }
    }
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_begin_refused_while_pending() {
        let gate = InFlightGate::new();
        let first = gate.try_begin();
        assert!(first.is_some());
        assert!(gate.try_begin().is_none());
        assert_eq!(gate.state(), GateState::Pending);
    }

    #[test]
    fn test_release_on_drop() {
        let gate = InFlightGate::new();
        {
            let _token = gate.try_begin();
            assert_eq!(gate.state(), GateState::Pending);
        }
        assert_eq!(gate.state(), GateState::Idle);
        assert!(gate.try_begin().is_some());
    }

    #[test]
    fn test_gates_are_independent() {
        let ai = InFlightGate::new();
        let save = InFlightGate::new();
        let _ai_token = ai.try_begin();
        assert!(save.try_begin().is_some());
    }

    #[test]
    fn test_only_one_winner_across_threads() {
        let gate = Arc::new(InFlightGate::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let gate = Arc::clone(&gate);
                std::thread::spawn(move || gate.try_begin().map(std::mem::forget).is_some())
            })
            .collect();

        let winners = handles
            .into_iter()
            .filter_map(|h| h.join().ok())
            .filter(|won| *won)
            .count();
        assert_eq!(winners, 1);
    }
}
