//! Countdown and advance timers.
//!
//! The session only arms and disarms timers through [`Timers`]; delivery of
//! the resulting events is up to the owner of the implementation. A disarmed
//! timer never delivers.

use std::future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::{self, Instant, Interval, MissedTickBehavior, Sleep};

/// Interval between countdown ticks.
pub const TICK: Duration = Duration::from_secs(1);

/// Events produced by armed timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One countdown unit elapsed.
    Tick,
    /// The post-resolution display delay elapsed.
    Advance,
}

pub trait Timers {
    /// Arm the periodic countdown, replacing any running one.
    fn start_countdown(&mut self);

    fn stop_countdown(&mut self);

    /// Arm a one-shot advance after `delay`, replacing any pending one.
    fn schedule_advance(&mut self, delay: Duration);

    fn cancel_advance(&mut self);
}

/// Timers backed by the tokio clock.
#[derive(Default)]
pub struct TokioTimers {
    countdown: Option<Interval>,
    advance: Option<Pin<Box<Sleep>>>,
}

impl TokioTimers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.countdown.is_none() && self.advance.is_none()
    }

    /// Wait for the next event of any armed timer.
    ///
    /// Pends forever while nothing is armed. Cancel safe, so it can sit in a
    /// `tokio::select!` next to the input stream.
    pub async fn next_event(&mut self) -> TimerEvent {
        let countdown = &mut self.countdown;
        let advance = &mut self.advance;

        tokio::select! {
            _ = countdown_elapsed(countdown) => TimerEvent::Tick,
            _ = advance_elapsed(advance) => TimerEvent::Advance,
        }
    }
}

impl Timers for TokioTimers {
    fn start_countdown(&mut self) {
        let mut interval = time::interval_at(Instant::now() + TICK, TICK);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.countdown = Some(interval);
    }

    fn stop_countdown(&mut self) {
        self.countdown = None;
    }

    fn schedule_advance(&mut self, delay: Duration) {
        self.advance = Some(Box::pin(time::sleep(delay)));
    }

    fn cancel_advance(&mut self) {
        self.advance = None;
    }
}

async fn countdown_elapsed(slot: &mut Option<Interval>) {
    match slot.as_mut() {
        Some(interval) => {
            interval.tick().await;
        }
        None => future::pending().await,
    }
}

async fn advance_elapsed(slot: &mut Option<Pin<Box<Sleep>>>) {
    match slot.as_mut() {
        Some(sleep) => {
            sleep.as_mut().await;
            *slot = None;
        }
        None => future::pending().await,
    }
}
