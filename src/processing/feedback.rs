//! "Copied" indicator shown after a clipboard copy.
//!
//! Shown at once, starts fading after `fade_after`, hidden after
//! `hide_after`. Both steps run on tokio timers; a new copy cancels the
//! pending ones.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default delay before the indicator starts fading.
pub const DEFAULT_FADE_AFTER: Duration = Duration::from_millis(1500);
/// Default delay before the indicator is hidden.
pub const DEFAULT_HIDE_AFTER: Duration = Duration::from_millis(2000);

/// Visibility of the copy indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackState {
    Hidden,
    Visible,
    Fading,
}

/// Timer settings for [`CopyFeedback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackTimings {
    pub fade_after: Duration,
    pub hide_after: Duration,
}

impl Default for FeedbackTimings {
    fn default() -> Self {
        FeedbackTimings {
            fade_after: DEFAULT_FADE_AFTER,
            hide_after: DEFAULT_HIDE_AFTER,
        }
    }
}

#[derive(Debug)]
struct Indicator {
    // bumped on every trigger, stale timers compare against it
    generation: u64,
    state: FeedbackState,
}

/// Owner of the indicator state and its pending timers.
///
/// [`CopyFeedback::trigger`] spawns tokio tasks, so it must be called from
/// inside a tokio runtime.
#[derive(Debug)]
pub struct CopyFeedback {
    indicator: Arc<Mutex<Indicator>>,
    timings: FeedbackTimings,
    timers: Vec<JoinHandle<()>>,
}

impl CopyFeedback {
    pub fn new(timings: FeedbackTimings) -> CopyFeedback {
        CopyFeedback {
            indicator: Arc::new(Mutex::new(Indicator {
                generation: 0,
                state: FeedbackState::Hidden,
            })),
            timings,
            timers: Vec::new(),
        }
    }

    pub fn state(&self) -> FeedbackState {
        self.indicator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .state
    }

    /// Show the indicator and (re)start the fade and hide timers.
    pub fn trigger(&mut self) {
        self.cancel();
        let generation = {
            let mut indicator = self.indicator.lock().unwrap_or_else(PoisonError::into_inner);
            indicator.generation += 1;
            indicator.state = FeedbackState::Visible;
            indicator.generation
        };
        log::debug!("copy feedback #{generation} visible");

        let fade = self.schedule(generation, self.timings.fade_after, FeedbackState::Fading);
        let hide = self.schedule(generation, self.timings.hide_after, FeedbackState::Hidden);
        self.timers.extend([fade, hide]);
    }

    /// Abort pending timers. The current state is left as it is.
    pub fn cancel(&mut self) {
        for timer in self.timers.drain(..) {
            timer.abort();
        }
    }

    fn schedule(&self, generation: u64, delay: Duration, next: FeedbackState) -> JoinHandle<()> {
        let indicator = Arc::clone(&self.indicator);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut indicator = indicator.lock().unwrap_or_else(PoisonError::into_inner);
            if indicator.generation == generation {
                log::trace!("copy feedback #{generation} -> {next:?}");
                indicator.state = next;
            }
        })
    }
}

impl Default for CopyFeedback {
    fn default() -> Self {
        CopyFeedback::new(FeedbackTimings::default())
    }
}

impl Drop for CopyFeedback {
    fn drop(&mut self) {
        self.cancel();
    }
}
