//! Toast - transient notification that closes itself after a timeout
//!
//! The countdown runs in fixed 50ms ticks from 100% down to 0%, at which
//! point the toast closes. Time is virtual: the host feeds elapsed time in
//! through `advance`, typically from its frame or event loop timer. Once
//! hidden, the progress snaps back to 100% after a short grace period so the
//! closing animation never shows a refilled bar.
//!
//! # Example
//!
//! ```ignore
//! let mut toast = Toast::new(Duration::from_secs(3))?
//!     .with_position(ToastPosition::BottomRight)
//!     .on_close(|| println!("gone"));
//!
//! toast.show();
//! loop {
//!     toast.advance(frame_timer.elapsed());
//!     draw_progress(toast.remaining_percent());
//! }
//! ```

use crate::config::ToastConfig;
use crate::error::{Result, WidgetError};
use serde::Deserialize;
use std::time::Duration;

/// Countdown granularity
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Delay between hiding and restoring the countdown to 100%
pub const DEFAULT_RESET_GRACE: Duration = Duration::from_millis(300);

/// Close callback
pub type OnClose = Box<dyn FnMut()>;

/// Snapshot of a toast countdown
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastTimerState {
    /// 0.0 - 100.0
    pub remaining_percent: f32,
    pub running: bool,
}

/// Restartable countdown driving a toast's auto-close
///
/// A timer owns at most one countdown; `start` replaces whatever was running
/// and cancels a pending reset.
#[derive(Debug, Clone)]
pub struct ToastTimer {
    duration: Duration,
    total_ticks: u32,
    elapsed_ticks: u32,

    /// Time accumulated toward the next tick
    carry: Duration,

    running: bool,
    reset_grace: Duration,

    /// Time left until the progress resets, while a reset is pending
    reset_in: Option<Duration>,
}

impl ToastTimer {
    /// Create a timer that expires after `duration`
    pub fn new(duration: Duration) -> Result<Self> {
        if duration.is_zero() {
            return Err(WidgetError::ZeroDuration);
        }
        let tick = TICK_INTERVAL.as_millis();
        let total_ticks = duration.as_millis().div_ceil(tick).max(1);
        Ok(Self {
            duration,
            total_ticks: u32::try_from(total_ticks).unwrap_or(u32::MAX),
            elapsed_ticks: 0,
            carry: Duration::ZERO,
            running: false,
            reset_grace: DEFAULT_RESET_GRACE,
            reset_in: None,
        })
    }

    pub fn with_reset_grace(mut self, grace: Duration) -> Self {
        self.reset_grace = grace;
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start counting down from 100%
    pub fn start(&mut self) {
        self.elapsed_ticks = 0;
        self.carry = Duration::ZERO;
        self.reset_in = None;
        self.running = true;
        tracing::debug!(duration_ms = self.duration.as_millis() as u64, "toast countdown started");
    }

    /// Cancel the countdown and schedule the reset to 100%
    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(remaining = self.remaining_percent(), "toast countdown cancelled");
        }
        self.running = false;
        self.carry = Duration::ZERO;
        self.reset_in = Some(self.reset_grace);
    }

    /// Advance virtual time; returns true when the countdown ran out during this call
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.running {
            self.carry += elapsed;
            while self.carry >= TICK_INTERVAL && self.elapsed_ticks < self.total_ticks {
                self.carry -= TICK_INTERVAL;
                self.elapsed_ticks += 1;
                tracing::trace!(remaining = self.remaining_percent(), "toast tick");
            }
            if self.elapsed_ticks >= self.total_ticks {
                self.running = false;
                self.carry = Duration::ZERO;
                self.reset_in = Some(self.reset_grace);
                tracing::debug!("toast countdown finished");
                return true;
            }
            return false;
        }

        if let Some(left) = self.reset_in {
            if elapsed >= left {
                self.reset_in = None;
                self.elapsed_ticks = 0;
            } else {
                self.reset_in = Some(left - elapsed);
            }
        }
        false
    }

    /// Remaining time as a percentage of the full duration
    ///
    /// Each tick takes `100 / (duration / 50ms)` off, so a duration that is
    /// not a multiple of the tick drops below zero on its last tick.
    pub fn remaining_percent(&self) -> f32 {
        let tick_ms = TICK_INTERVAL.as_secs_f32() * 1000.0;
        let duration_ms = self.duration.as_secs_f32() * 1000.0;
        (100.0 - self.elapsed_ticks as f32 * 100.0 * tick_ms / duration_ms).max(0.0)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_reset_pending(&self) -> bool {
        self.reset_in.is_some()
    }

    pub fn state(&self) -> ToastTimerState {
        ToastTimerState {
            remaining_percent: self.remaining_percent(),
            running: self.running,
        }
    }
}

/// Where the toast sits in the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    /// Positioned by the host
    None,
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
    TopCenter,
    BottomCenter,
}

/// Auto-dismissing notification
pub struct Toast {
    position: ToastPosition,
    progress_bar: bool,
    visible: bool,
    timer: ToastTimer,

    /// on_close already fired for the current showing
    close_fired: bool,

    on_close: Option<OnClose>,
}

impl std::fmt::Debug for Toast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Toast")
            .field("position", &self.position)
            .field("progress_bar", &self.progress_bar)
            .field("visible", &self.visible)
            .field("timer", &self.timer)
            .finish()
    }
}

impl Toast {
    /// Create a hidden toast that closes `timeout` after being shown
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            position: ToastPosition::default(),
            progress_bar: false,
            visible: false,
            timer: ToastTimer::new(timeout)?,
            close_fired: false,
            on_close: None,
        })
    }

    pub fn from_config(config: &ToastConfig) -> Result<Self> {
        let timer = ToastTimer::new(Duration::from_millis(config.timeout_ms))?
            .with_reset_grace(Duration::from_millis(config.reset_grace_ms));
        Ok(Self {
            position: config.position,
            progress_bar: config.progress_bar,
            visible: false,
            timer,
            close_fired: false,
            on_close: None,
        })
    }

    pub fn with_position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    /// Show the countdown as a progress bar
    pub fn with_progress_bar(mut self, enabled: bool) -> Self {
        self.progress_bar = enabled;
        self
    }

    /// Set close callback
    pub fn on_close<F>(mut self, callback: F) -> Self
    where
        F: FnMut() + 'static,
    {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn position(&self) -> ToastPosition {
        self.position
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn timer(&self) -> &ToastTimer {
        &self.timer
    }

    pub fn remaining_percent(&self) -> f32 {
        self.timer.remaining_percent()
    }

    /// Progress to draw, when the progress bar is enabled
    pub fn progress(&self) -> Option<f32> {
        self.progress_bar.then(|| self.timer.remaining_percent())
    }

    /// Show the toast and restart its countdown
    pub fn show(&mut self) {
        self.visible = true;
        self.close_fired = false;
        self.timer.start();
    }

    /// Owner-driven visibility; hiding this way does not call on_close
    pub fn set_show(&mut self, show: bool) {
        match (show, self.visible) {
            (true, false) => self.show(),
            (false, true) => {
                self.visible = false;
                self.timer.stop();
            }
            _ => {}
        }
    }

    /// User-triggered close (close button)
    pub fn close(&mut self) {
        if !self.visible {
            return;
        }
        self.visible = false;
        self.timer.stop();
        self.fire_close();
    }

    /// Advance the countdown; closes the toast when it runs out
    pub fn advance(&mut self, elapsed: Duration) {
        if self.timer.advance(elapsed) && self.visible {
            self.visible = false;
            self.fire_close();
        }
    }

    fn fire_close(&mut self) {
        if self.close_fired {
            return;
        }
        self.close_fired = true;
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counted_toast(timeout_ms: u64) -> (Toast, Rc<Cell<u32>>) {
        let closes = Rc::new(Cell::new(0));
        let sink = closes.clone();
        let toast = Toast::new(Duration::from_millis(timeout_ms))
            .unwrap()
            .on_close(move || sink.set(sink.get() + 1));
        (toast, closes)
    }

    #[test]
    fn test_countdown_step() {
        let mut timer = ToastTimer::new(Duration::from_millis(1000)).unwrap();
        timer.start();
        assert_eq!(timer.remaining_percent(), 100.0);

        // 20 ticks in a second, 5% per tick
        timer.advance(TICK_INTERVAL);
        assert!((timer.remaining_percent() - 95.0).abs() < 1e-4);

        // Partial ticks accumulate
        timer.advance(Duration::from_millis(30));
        timer.advance(Duration::from_millis(30));
        assert!((timer.remaining_percent() - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_countdown_step_uneven_duration() {
        // 120ms: each tick takes 100 / 2.4 off
        let mut timer = ToastTimer::new(Duration::from_millis(120)).unwrap();
        timer.start();

        assert!(!timer.advance(TICK_INTERVAL));
        assert!((timer.remaining_percent() - 58.333336).abs() < 1e-3);
        assert!(!timer.advance(TICK_INTERVAL));
        assert!((timer.remaining_percent() - 16.666672).abs() < 1e-3);

        // Third tick goes below zero and finishes
        assert!(timer.advance(TICK_INTERVAL));
        assert_eq!(timer.remaining_percent(), 0.0);
    }

    #[test]
    fn test_expires_within_one_tick_of_duration() {
        for timeout in [50u64, 120, 1000, 3000, 4321] {
            let (mut toast, closes) = counted_toast(timeout);
            toast.show();

            let mut elapsed = 0;
            while toast.is_visible() {
                toast.advance(TICK_INTERVAL);
                elapsed += 50;
                assert!(elapsed <= timeout + 50, "timeout {} overran", timeout);
            }
            assert!(toast.remaining_percent() <= 0.0);
            assert_eq!(closes.get(), 1);

            // Further time never closes twice
            toast.advance(Duration::from_secs(10));
            assert_eq!(closes.get(), 1);
        }
    }

    #[test]
    fn test_hide_cancels_countdown() {
        let (mut toast, closes) = counted_toast(500);
        toast.show();
        toast.advance(Duration::from_millis(200));

        toast.set_show(false);
        assert!(!toast.timer().is_running());
        toast.advance(Duration::from_secs(5));
        assert_eq!(closes.get(), 0);
        assert_eq!(toast.remaining_percent(), 100.0);
    }

    #[test]
    fn test_reset_after_grace() {
        let (mut toast, _) = counted_toast(100);
        toast.show();
        toast.advance(Duration::from_millis(100));
        assert!(!toast.is_visible());
        assert_eq!(toast.remaining_percent(), 0.0);

        toast.advance(Duration::from_millis(100));
        assert_eq!(toast.remaining_percent(), 0.0);
        assert!(toast.timer().is_reset_pending());

        toast.advance(DEFAULT_RESET_GRACE);
        assert_eq!(toast.remaining_percent(), 100.0);
        assert!(!toast.timer().is_reset_pending());
    }

    #[test]
    fn test_reshow_restarts_single_countdown() {
        let (mut toast, closes) = counted_toast(200);
        toast.show();
        toast.advance(Duration::from_millis(150));

        // Restart replaces the running countdown
        toast.show();
        assert_eq!(toast.remaining_percent(), 100.0);
        toast.advance(Duration::from_millis(150));
        assert!(toast.is_visible());
        toast.advance(Duration::from_millis(50));
        assert!(!toast.is_visible());
        assert_eq!(closes.get(), 1);

        // A new showing can close again
        toast.show();
        toast.advance(Duration::from_millis(200));
        assert_eq!(closes.get(), 2);
    }

    #[test]
    fn test_user_close_fires_once() {
        let (mut toast, closes) = counted_toast(1000);
        toast.show();
        toast.close();
        toast.close();
        toast.advance(Duration::from_secs(2));
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn test_progress_only_when_enabled() {
        let toast = Toast::new(Duration::from_secs(1)).unwrap();
        assert_eq!(toast.progress(), None);

        let toast = toast.with_progress_bar(true);
        assert_eq!(toast.progress(), Some(100.0));
    }

    #[test]
    fn test_zero_duration_rejected() {
        assert_eq!(
            ToastTimer::new(Duration::ZERO).unwrap_err(),
            WidgetError::ZeroDuration
        );
    }
}
