//! Scanline work distribution.
//!
//! Workers pull whole rows from a shared counter until the image is
//! exhausted.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out row indices `0..height`, each exactly once.
#[derive(Debug)]
pub struct RowQueue {
    next: AtomicUsize,
    height: usize,
}

impl RowQueue {
    pub fn new(height: usize) -> Self {
        Self {
            next: AtomicUsize::new(0),
            height,
        }
    }

    /// Claim the next unrendered row, or `None` once all are taken.
    pub fn claim(&self) -> Option<usize> {
        let row = self.next.fetch_add(1, Ordering::Relaxed);
        (row < self.height).then_some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_claims_in_order_then_stops() {
        let queue = RowQueue::new(3);
        assert_eq!(queue.claim(), Some(0));
        assert_eq!(queue.claim(), Some(1));
        assert_eq!(queue.claim(), Some(2));
        assert_eq!(queue.claim(), None);
        assert_eq!(queue.claim(), None);
    }

    #[test]
    fn test_empty_queue() {
        assert_eq!(RowQueue::new(0).claim(), None);
    }

    #[test]
    fn test_each_row_claimed_once_across_threads() {
        let queue = RowQueue::new(1000);
        let claimed = Mutex::new(Vec::new());

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    let mut mine = Vec::new();
                    while let Some(row) = queue.claim() {
                        mine.push(row);
                    }
                    claimed.lock().unwrap().extend(mine);
                });
            }
        });

        let mut claimed = claimed.into_inner().unwrap();
        claimed.sort_unstable();
        assert_eq!(claimed, (0..1000).collect::<Vec<_>>());
    }
}
