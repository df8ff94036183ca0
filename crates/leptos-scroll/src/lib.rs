//! Leptos Scroll Utilities
//!
//! Component-scoped scroll observation for Leptos.
//! The window `scroll` listener lives exactly as long as the owning component.

use leptos::ev;
use leptos::prelude::*;

/// Offset (in CSS pixels) past which a page counts as scrolled
pub const DEFAULT_THRESHOLD: f64 = 10.0;

/// Whether a vertical offset is strictly past the threshold
pub fn past_threshold(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// New flag value for a scroll event, or `None` when it is unchanged
pub fn flag_change(current: bool, offset: f64, threshold: f64) -> Option<bool> {
    let next = past_threshold(offset, threshold);
    (next != current).then_some(next)
}

/// Current vertical scroll offset of the window, 0 when unavailable
pub fn current_offset() -> f64 {
    web_sys::window()
        .and_then(|win| win.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Create a signal tracking whether the window is scrolled past `threshold`.
///
/// Re-evaluated on every scroll event, no debounce. The subscription is
/// removed when the calling component is cleaned up.
pub fn use_scroll_flag(threshold: f64) -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(past_threshold(current_offset(), threshold));

    let handle = window_event_listener(ev::scroll, move |_| {
        if let Some(next) = flag_change(scrolled.get_untracked(), current_offset(), threshold) {
            set_scrolled.set(next);
        }
    });
    on_cleanup(move || handle.remove());

    scrolled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_is_not_scrolled() {
        assert!(!past_threshold(10.0, DEFAULT_THRESHOLD));
        assert!(past_threshold(11.0, DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_top_of_page() {
        assert!(!past_threshold(0.0, DEFAULT_THRESHOLD));
        // Overscroll bounce on some browsers reports negative offsets
        assert!(!past_threshold(-24.0, DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_fractional_offsets() {
        assert!(!past_threshold(9.5, DEFAULT_THRESHOLD));
        assert!(past_threshold(10.25, DEFAULT_THRESHOLD));
        assert!(past_threshold(4200.0, DEFAULT_THRESHOLD));
    }

    #[test]
    fn test_flag_change_only_on_crossing() {
        let mut flag = false;
        let mut writes = Vec::new();
        for offset in [0.0, 5.0, 10.0, 11.0, 40.0, 12.0, 10.0, 3.0] {
            if let Some(next) = flag_change(flag, offset, DEFAULT_THRESHOLD) {
                flag = next;
                writes.push((offset, next));
            }
        }
        assert_eq!(writes, vec![(11.0, true), (10.0, false)]);
    }

    #[test]
    fn test_reversible() {
        let offsets = [0.0, 11.0, 30.0, 10.0, 2.0];
        let flags: Vec<bool> = offsets.iter().map(|o| past_threshold(*o, DEFAULT_THRESHOLD)).collect();
        assert_eq!(flags, vec![false, true, true, false, false]);
    }
}
