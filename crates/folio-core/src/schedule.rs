//! Self-re-registering frame loop over a host scheduling primitive.
//!
//! The host installs one continuation; `FrameLoop` asks it to run on the next
//! display refresh, runs the frame body when it fires, and asks again. Stopping
//! cancels whatever request is still pending, so nothing runs after teardown.

use crate::mount::Detach;
use std::fmt::Debug;

/// Per-frame scheduling primitive (e.g. `requestAnimationFrame`).
pub trait FrameScheduler {
    type Handle: Copy + Debug;

    /// Schedule the installed continuation for the next frame.
    /// `None` means the host refused and the loop cannot continue.
    fn request(&mut self) -> Option<Self::Handle>;

    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LoopState {
    Idle,
    Running,
    Stopped,
}

pub struct FrameLoop<S: FrameScheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
    state: LoopState,
    frames: u64,
}

impl<S: FrameScheduler> FrameLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            pending: None,
            state: LoopState::Idle,
            frames: 0,
        }
    }

    /// Register the first continuation. Has no effect once running or stopped.
    pub fn start(&mut self) {
        if self.state != LoopState::Idle {
            return;
        }
        self.state = LoopState::Running;
        self.schedule_next();
    }

    /// Called by the host when the continuation fires. Runs `body` and
    /// re-registers. Returns `false` if the loop was not running.
    pub fn on_frame(&mut self, body: impl FnOnce()) -> bool {
        self.pending = None;
        if self.state != LoopState::Running {
            return false;
        }
        body();
        self.frames += 1;
        self.schedule_next();
        true
    }

    /// Cancel the pending continuation. Idempotent.
    pub fn stop(&mut self) {
        if self.state == LoopState::Stopped {
            return;
        }
        self.state = LoopState::Stopped;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
        log::debug!("[frame] loop stopped after {} frames", self.frames);
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn schedule_next(&mut self) {
        match self.scheduler.request() {
            Some(handle) => self.pending = Some(handle),
            None => {
                log::warn!("[frame] host refused a frame request; loop halted");
                self.state = LoopState::Stopped;
            }
        }
    }
}

impl<S: FrameScheduler> Detach for FrameLoop<S> {
    fn detach(&mut self) {
        self.stop();
    }
}
