//! # Carousel Controller
//!
//! Owns a [`SlideRing`] together with its auto-advance timer.
//!
//! ## Lifecycle
//!
//! ```text
//!   ┌────────────────┐  previous / next / click  ┌──────────┐
//!   │ AutoAdvancing  │ ────────────────────────▶ │  Manual  │
//!   └────────────────┘                           └──────────┘
//!     timer ticks rotate clockwise                 no way back
//! ```
//!
//! The timer runs as a tokio task and only ever *sends* ticks. Ticks are
//! applied on the caller's thread through [`CarouselController::drain_ticks`],
//! so all ring mutation stays on one thread. Stopping drops the receiving
//! end of the channel, which discards any tick that fired concurrently.

use super::ring::{Direction, Role, SlideRing};
use anyhow::{bail, Context, Result};
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Auto-advance interval used when nothing else is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceMode {
    /// Initial state: the timer may rotate the ring.
    AutoAdvancing,
    /// Entered on the first user interaction. Terminal.
    Manual,
}

/// Handle to a running timer task. Aborts the task when dropped.
#[derive(Debug)]
struct AutoAdvance {
    interval: Duration,
    task: JoinHandle<()>,
    ticks: UnboundedReceiver<()>,
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[derive(Debug)]
pub struct CarouselController<T> {
    ring: SlideRing<T>,
    mode: AdvanceMode,
    timer: Option<AutoAdvance>,
}

impl<T> CarouselController<T> {
    /// Create a controller without starting the timer.
    pub fn new(slides: Vec<T>) -> Self {
        Self {
            ring: SlideRing::new(slides),
            mode: AdvanceMode::AutoAdvancing,
            timer: None,
        }
    }

    /// Create a controller and start auto-advancing right away.
    ///
    /// Must be called from within a tokio runtime.
    pub fn with_auto_advance(slides: Vec<T>, interval: Duration) -> Result<Self> {
        let mut controller = Self::new(slides);
        controller.start_auto_advance(interval)?;
        Ok(controller)
    }

    /// Start (or restart) the repeating timer.
    ///
    /// Does nothing once the controller is in [`AdvanceMode::Manual`].
    pub fn start_auto_advance(&mut self, interval: Duration) -> Result<()> {
        if interval.is_zero() {
            bail!("Auto-advance interval must be greater than zero");
        }
        if self.mode == AdvanceMode::Manual {
            log::debug!("Ignoring auto-advance start: carousel is under manual control");
            return Ok(());
        }

        let runtime = tokio::runtime::Handle::try_current()
            .context("Auto-advance requires a running tokio runtime")?;

        let (tx, rx) = mpsc::unbounded_channel();
        let task = runtime.spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.send(()).is_err() {
                    break;
                }
            }
        });

        // Replacing the old handle aborts its task.
        self.timer = Some(AutoAdvance {
            interval,
            task,
            ticks: rx,
        });
        log::debug!("Carousel auto-advance started ({} ms)", interval.as_millis());
        Ok(())
    }

    /// Cancel the timer. Safe to call at any time.
    pub fn stop_auto_advance(&mut self) {
        if self.timer.take().is_some() {
            log::debug!("Carousel auto-advance stopped");
        }
    }

    /// Apply every tick the timer has produced since the last call.
    ///
    /// Returns the number of clockwise rotations performed.
    pub fn drain_ticks(&mut self) -> usize {
        let mut rotations = 0;
        loop {
            let Some(timer) = self.timer.as_mut() else {
                break;
            };
            match timer.ticks.try_recv() {
                Ok(()) => {
                    self.ring.rotate(Direction::Clockwise);
                    rotations += 1;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::warn!("Carousel timer task ended unexpectedly");
                    self.timer = None;
                    break;
                }
            }
        }
        rotations
    }

    /// User pressed the "previous" control.
    pub fn previous(&mut self) {
        self.take_control();
        self.ring.rotate(Direction::CounterClockwise);
    }

    /// User pressed the "next" control.
    pub fn next(&mut self) {
        self.take_control();
        self.ring.rotate(Direction::Clockwise);
    }

    /// User clicked the slide at `index`.
    ///
    /// A left slide rewinds, every other slide (main included) advances.
    /// A missing index changes nothing. Returns whether a rotation happened.
    pub fn click(&mut self, index: usize) -> bool {
        let direction = match self.ring.role(index) {
            None => return false,
            Some(Role::Left) => Direction::CounterClockwise,
            Some(Role::Main | Role::Right | Role::None) => Direction::Clockwise,
        };
        self.take_control();
        self.ring.rotate(direction);
        true
    }

    /// Rotate without affecting the advance mode.
    pub fn rotate(&mut self, direction: Direction) {
        self.ring.rotate(direction);
    }

    pub fn ring(&self) -> &SlideRing<T> {
        &self.ring
    }

    pub fn mode(&self) -> AdvanceMode {
        self.mode
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.timer.is_some()
    }

    /// Interval of the running timer, if any.
    pub fn interval(&self) -> Option<Duration> {
        self.timer.as_ref().map(|timer| timer.interval)
    }

    // Stop before rotating so a pending tick can't sneak in afterwards.
    fn take_control(&mut self) {
        self.stop_auto_advance();
        if self.mode != AdvanceMode::Manual {
            log::info!("Carousel switched to manual control");
            self.mode = AdvanceMode::Manual;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(n: usize) -> CarouselController<usize> {
        CarouselController::new((0..n).collect())
    }

    #[test]
    fn test_new_controller_starts_in_auto_mode_without_timer() {
        let controller = controller(5);
        assert_eq!(controller.mode(), AdvanceMode::AutoAdvancing);
        assert!(!controller.is_auto_advancing());
        assert_eq!(controller.ring().index_of(Role::Main), Some(0));
    }

    #[test]
    fn test_start_outside_runtime_fails() {
        let mut controller = controller(3);
        let err = controller
            .start_auto_advance(DEFAULT_INTERVAL)
            .expect_err("no runtime");
        assert!(err.to_string().contains("tokio runtime"));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut controller = controller(3);
        assert!(controller.start_auto_advance(Duration::ZERO).is_err());
    }

    #[test]
    fn test_next_and_previous_enter_manual_mode() {
        let mut controller = controller(5);
        controller.next();
        assert_eq!(controller.mode(), AdvanceMode::Manual);
        assert_eq!(controller.ring().index_of(Role::Main), Some(1));

        controller.previous();
        assert_eq!(controller.ring().index_of(Role::Main), Some(0));
    }

    #[test]
    fn test_click_left_slide_rewinds() {
        let mut controller = controller(5);
        assert!(controller.click(4));
        assert_eq!(controller.ring().index_of(Role::Main), Some(4));
        assert_eq!(controller.mode(), AdvanceMode::Manual);
    }

    #[test]
    fn test_click_right_or_hidden_slide_advances() {
        let mut controller = controller(5);
        assert!(controller.click(1));
        assert_eq!(controller.ring().index_of(Role::Main), Some(1));

        // Index 4 is hidden after the first rotation.
        assert_eq!(controller.ring().role(4), Some(Role::None));
        assert!(controller.click(4));
        assert_eq!(controller.ring().index_of(Role::Main), Some(2));
    }

    #[test]
    fn test_click_missing_slide_is_ignored() {
        let mut controller = controller(5);
        assert!(!controller.click(42));
        assert_eq!(controller.mode(), AdvanceMode::AutoAdvancing);
        assert_eq!(controller.ring().start_item(), 1);
    }

    #[test]
    fn test_click_main_slide_advances() {
        let mut controller = controller(5);
        assert!(controller.click(0));
        assert_eq!(controller.ring().start_item(), 2);
        assert_eq!(controller.mode(), AdvanceMode::Manual);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_main_slide_stops_timer() {
        let mut controller = CarouselController::with_auto_advance((0..5).collect(), DEFAULT_INTERVAL)
            .expect("start timer");
        assert!(controller.click(0));
        assert!(!controller.is_auto_advancing());

        time::sleep(Duration::from_millis(8000)).await;
        assert_eq!(controller.drain_ticks(), 0);
        assert_eq!(controller.ring().start_item(), 2);
    }

    #[test]
    fn test_stop_without_timer_is_silent() {
        let mut controller = controller(2);
        controller.stop_auto_advance();
        controller.stop_auto_advance();
        assert_eq!(controller.drain_ticks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_rotate_clockwise() {
        let mut controller = CarouselController::with_auto_advance((0..5).collect(), DEFAULT_INTERVAL)
            .expect("start timer");
        assert_eq!(controller.interval(), Some(DEFAULT_INTERVAL));

        time::sleep(Duration::from_millis(3600)).await;
        assert_eq!(controller.drain_ticks(), 1);
        assert_eq!(controller.ring().start_item(), 2);

        time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(controller.drain_ticks(), 1);
        assert_eq!(controller.ring().start_item(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_first_interval() {
        let mut controller = CarouselController::with_auto_advance((0..5).collect(), DEFAULT_INTERVAL)
            .expect("start timer");

        time::sleep(Duration::from_millis(3000)).await;
        assert_eq!(controller.drain_ticks(), 0);
        assert_eq!(controller.ring().start_item(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_queued_tick_discarded_after_stop() {
        let mut controller = CarouselController::with_auto_advance((0..5).collect(), DEFAULT_INTERVAL)
            .expect("start timer");

        // Tick fires but has not been applied yet.
        time::sleep(Duration::from_millis(3600)).await;
        controller.stop_auto_advance();

        assert_eq!(controller.drain_ticks(), 0);
        assert_eq!(controller.ring().start_item(), 1);

        time::sleep(Duration::from_millis(10_000)).await;
        assert_eq!(controller.drain_ticks(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_mode_blocks_restart() {
        let mut controller = CarouselController::with_auto_advance((0..5).collect(), DEFAULT_INTERVAL)
            .expect("start timer");
        controller.next();
        assert!(!controller.is_auto_advancing());

        controller
            .start_auto_advance(DEFAULT_INTERVAL)
            .expect("restart is a no-op");
        assert!(!controller.is_auto_advancing());

        time::sleep(Duration::from_millis(8000)).await;
        assert_eq!(controller.drain_ticks(), 0);
        assert_eq!(controller.ring().start_item(), 2);
    }
}
