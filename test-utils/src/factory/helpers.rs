//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Values start well above zero so generated IDs look like Discord snowflakes and never
/// collide with the small literal IDs tests tend to hard-code.
pub fn next_id() -> u64 {
    100_000_000 + COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
