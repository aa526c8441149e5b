//! Periodic reconciliation of the session against the credential store.
//!
//! ARCHITECTURE
//! ============
//! The root `App` owns one `IdleMonitor`, starts it after hydration and stops
//! it in `on_cleanup`. Each tick runs the cheap presence check against a
//! container that holds a session:
//! - store lost its token (another tab logged out, cookies cleared): the
//!   session is cleared;
//! - store holds a different token (another tab logged in again): the
//!   container drops its copy and leaves the store alone. The new login is
//!   never adopted in place, so a session's role cannot change under a
//!   mounted page.
//!
//! Either way any mounted route guard redirects on its next render.
//!
//! Timers sit behind `IntervalScheduler` so ticks can be driven by hand in
//! tests.

#[cfg(test)]
#[path = "idle_monitor_test.rs"]
mod idle_monitor_test;

use std::time::Duration;

use crate::state::session::SessionContainer;

/// Starts and cancels repeating timers.
pub trait IntervalScheduler {
    type Handle;

    /// Run `tick` every `period`. `None` if timers are unavailable here.
    fn schedule(&self, period: Duration, tick: Box<dyn Fn()>) -> Option<Self::Handle>;

    fn cancel(&self, handle: Self::Handle);
}

/// `setInterval` in the browser; never schedules during SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl IntervalScheduler for BrowserScheduler {
    type Handle = leptos::prelude::IntervalHandle;

    fn schedule(&self, period: Duration, tick: Box<dyn Fn()>) -> Option<Self::Handle> {
        #[cfg(feature = "hydrate")]
        {
            match leptos::prelude::set_interval_with_handle(move || tick(), period) {
                Ok(handle) => Some(handle),
                Err(e) => {
                    log::warn!("idle monitor: setInterval failed: {e:?}");
                    None
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period, tick);
            None
        }
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.clear();
    }
}

/// What a single monitor tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Unchanged,
    Cleared,
}

/// One reconciliation pass.
pub fn run_tick(session: &SessionContainer) -> TickOutcome {
    let held = session.snapshot();
    let Some(held_token) = held.token() else {
        return TickOutcome::Unchanged;
    };
    if !session.auth().check_auth_lite().is_authenticated {
        log::info!("idle monitor: stored credentials disappeared, clearing session");
        session.clear_session();
        return TickOutcome::Cleared;
    }
    if session.auth().stored_token().as_deref() != Some(held_token) {
        log::info!("idle monitor: stored credentials replaced elsewhere, dropping session");
        session.discard();
        return TickOutcome::Cleared;
    }
    TickOutcome::Unchanged
}

/// Owner of the single repeating reconciliation timer.
pub struct IdleMonitor<S: IntervalScheduler> {
    scheduler: S,
    period: Duration,
    handle: Option<S::Handle>,
}

impl<S: IntervalScheduler> IdleMonitor<S> {
    pub fn new(scheduler: S, period: Duration) -> Self {
        Self { scheduler, period, handle: None }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Start ticking against `session`. Returns `false` without scheduling
    /// anything if a timer is already running or timers are unavailable.
    pub fn start(&mut self, session: SessionContainer) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = self.scheduler.schedule(
            self.period,
            Box::new(move || {
                run_tick(&session);
            }),
        );
        self.handle.is_some()
    }

    /// Cancel the timer if one is running.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: IntervalScheduler> Drop for IdleMonitor<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
