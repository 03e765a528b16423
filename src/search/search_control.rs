//! Shared cancellation and accounting state for a running search.
//!
//! One `SearchControl` is created per search invocation and shared between
//! the controller side and the worker. The stop flag is the cooperative half
//! of hard cancellation: the bridge raises it and abandons the result
//! channel, and the search winds down at the next node boundary.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
pub struct SearchControl {
    stop: AtomicBool,
    nodes_visited: AtomicU64,
}

impl SearchControl {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    #[inline]
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn add_nodes(&self, n: u64) {
        self.nodes_visited.fetch_add(n, Ordering::Relaxed);
    }

    #[inline]
    pub fn nodes_visited(&self) -> u64 {
        self.nodes_visited.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_flag_latches_once_requested() {
        let control = SearchControl::new();
        assert!(!control.should_stop());
        control.request_stop();
        assert!(control.should_stop());
    }

    #[test]
    fn node_accounting_accumulates() {
        let control = SearchControl::new();
        control.add_nodes(10);
        control.add_nodes(5);
        assert_eq!(control.nodes_visited(), 15);
    }
}
