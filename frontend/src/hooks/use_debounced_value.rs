use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Delay before a changed search box commits, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Trailing-edge debounce: returns a copy of `value` that only updates
/// `delay_ms` after `value` stops changing. Each change drops the pending
/// timer and arms a new one, and unmount drops the timer outright, so a
/// burst of edits commits exactly once with the final value.
#[hook]
pub fn use_debounced_value<T>(value: T, delay_ms: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state(|| value.clone());

    {
        let debounced = debounced.clone();
        use_effect_with(value, move |value| {
            let value = value.clone();
            let timer = Timeout::new(delay_ms, move || {
                debounced.set(value);
            });
            // Dropping a pending Timeout cancels it.
            move || drop(timer)
        });
    }

    (*debounced).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_delay_matches_search_box_contract() {
        assert_eq!(SEARCH_DEBOUNCE_MS, 300);
    }
}
