// Request Id Provider Port

use crate::domain::DEFAULT_REQUEST_ID;
use std::sync::atomic::{AtomicU64, Ordering};

/// Supplies the `id` of each outgoing request
pub trait RequestIdProvider: Send + Sync {
    fn next_id(&self) -> u64;
}

/// Always `1` (default: replies are never correlated by id)
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedIdProvider;

impl RequestIdProvider for FixedIdProvider {
    fn next_id(&self) -> u64 {
        DEFAULT_REQUEST_ID
    }
}

/// Monotonic per-client counter starting at 1
///
/// Wraps from `u64::MAX` back to 1; 0 is never issued.
#[derive(Debug)]
pub struct SequentialIdProvider {
    next: AtomicU64,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first.max(1)),
        }
    }

    /// Id the next call will get, without consuming it
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Default for SequentialIdProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestIdProvider for SequentialIdProvider {
    fn next_id(&self) -> u64 {
        let prev = self
            .next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| {
                Some(id.checked_add(1).unwrap_or(1))
            });
        // closure always returns Some
        match prev {
            Ok(id) | Err(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_id_is_always_one() {
        let provider = FixedIdProvider;
        assert_eq!(provider.next_id(), 1);
        assert_eq!(provider.next_id(), 1);
    }

    #[test]
    fn test_sequential_ids_increment() {
        let provider = SequentialIdProvider::new();

        assert_eq!(provider.next_id(), 1);
        assert_eq!(provider.next_id(), 2);
        assert_eq!(provider.next_id(), 3);
        assert_eq!(provider.peek(), 4);
    }

    #[test]
    fn test_sequential_ids_wrap_to_one() {
        let provider = SequentialIdProvider::starting_at(u64::MAX);

        assert_eq!(provider.next_id(), u64::MAX);
        assert_eq!(provider.next_id(), 1);
        assert_eq!(provider.next_id(), 2);
    }

    #[test]
    fn test_sequential_never_starts_at_zero() {
        let provider = SequentialIdProvider::starting_at(0);
        assert_eq!(provider.next_id(), 1);
    }
}
