//! Stagger timing for reveal-on-scroll elements.
//!
//! Elements that intersect in the same observer batch fade in one after the
//! other; the delay grows with batch position and is capped so long lists do
//! not leave the tail invisible.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Transition delay for the element at `index` within an intersection batch.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: u32, max_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(step_ms).min(max_ms)
}

/// CSS `transition-delay` value for a delay in milliseconds.
#[must_use]
pub fn transition_delay(delay_ms: u32) -> String {
    format!("{delay_ms}ms")
}
