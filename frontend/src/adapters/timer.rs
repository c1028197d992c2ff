use std::time::Duration;

use common::debounce::Scheduler;
use gloo_timers::callback::Timeout;

/// [`Scheduler`] over `setTimeout`, timed by `performance.now()`. A dropped
/// [`Timeout`] is cleared.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn now(&self) -> Duration {
        let millis = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or(0.0);
        Duration::from_secs_f64(millis / 1000.0)
    }

    fn schedule_after(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> Timeout {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, callback)
    }
}
