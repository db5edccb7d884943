//! Face lifecycle: visibility, ambient mode and the update timer.

use std::time::{Duration, Instant};

use pixface_core::DisplayMode;

/// Redraw period while interactive and visible.
pub const INTERACTIVE_UPDATE_RATE: Duration = Duration::from_secs(1);

/// Redraw period otherwise: once a minute, on the minute.
pub const TIME_TICK_RATE: Duration = Duration::from_secs(60);

/// Time from `now_ms` (milliseconds since the epoch) to the next multiple of `rate`.
///
/// Always positive: a call exactly on a boundary waits a full period.
pub fn delay_until_next_tick(now_ms: i64, rate: Duration) -> Duration {
    let rate_ms = (rate.as_millis() as i64).max(1);
    Duration::from_millis((rate_ms - now_ms.rem_euclid(rate_ms)) as u64)
}

/// Lifecycle state of the face.
#[derive(Debug)]
pub struct Engine {
    visible: bool,
    ambient: bool,
    ambient_timeout: Option<Duration>,
    last_input: Instant,
}

impl Engine {
    pub fn new(ambient_timeout: Option<Duration>, now: Instant) -> Self {
        Self {
            visible: true,
            ambient: false,
            ambient_timeout,
            last_input: now,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        DisplayMode::from_ambient(self.ambient)
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// The per-second timer only runs while visible and interactive.
    pub fn should_timer_be_running(&self) -> bool {
        self.visible && !self.ambient
    }

    pub fn on_visibility_changed(&mut self, visible: bool) {
        if self.visible != visible {
            log::debug!("visibility changed: {visible}");
        }
        self.visible = visible;
    }

    /// Switch ambient mode. Returns whether the mode changed.
    pub fn on_ambient_mode_changed(&mut self, ambient: bool) -> bool {
        if self.ambient == ambient {
            return false;
        }
        log::info!("{} mode", if ambient { "ambient" } else { "interactive" });
        self.ambient = ambient;
        true
    }

    /// Record user activity. Wakes the face out of ambient mode.
    pub fn on_user_input(&mut self, now: Instant) {
        self.last_input = now;
        self.on_ambient_mode_changed(false);
    }

    /// Drop into ambient mode once the idle timeout has passed.
    pub fn on_idle_check(&mut self, now: Instant) {
        if self.ambient {
            return;
        }
        if let Some(timeout) = self.ambient_timeout
            && now.saturating_duration_since(self.last_input) >= timeout
        {
            self.on_ambient_mode_changed(true);
        }
    }

    /// How long to wait before the next redraw.
    pub fn next_wake(&self, now_ms: i64, now: Instant) -> Duration {
        let rate = if self.should_timer_be_running() {
            INTERACTIVE_UPDATE_RATE
        } else {
            TIME_TICK_RATE
        };
        let tick = delay_until_next_tick(now_ms, rate);

        match self.ambient_timeout {
            Some(timeout) if !self.ambient => {
                let idle = now.saturating_duration_since(self.last_input);
                tick.min(timeout.saturating_sub(idle))
            }
            _ => tick,
        }
    }
}
