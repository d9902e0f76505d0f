use chrono::TimeDelta;
use dioxus::prelude::*;
use dioxus_logger::tracing;

/// Waits for `delay` using the host's timer
pub async fn sleep(delay: TimeDelta) {
    let ms = delay.num_milliseconds().max(0);
    let script = format!("await new Promise((resolve) => setTimeout(resolve, {})); return true;", ms);

    if let Err(e) = document::eval(&script).await {
        tracing::warn!("Timer failed: {:?}", e);
    }
}

/// Runs `apply` once `delay` has elapsed, without blocking the caller
pub fn after(delay: TimeDelta, apply: impl FnOnce() + 'static) {
    spawn(async move {
        sleep(delay).await;
        apply();
    });
}
