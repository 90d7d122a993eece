// Test doubles shared by the integration tests.

#![allow(dead_code)]

use folio_core::{Detach, Fill, FrameScheduler, Surface};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Fill,
}

/// Surface that records every draw call.
#[derive(Default)]
pub struct RecordingSurface {
    pub clears: usize,
    pub circles: Vec<Circle>,
}

impl RecordingSurface {
    /// Circles drawn since the last clear.
    pub fn take_frame(&mut self) -> Vec<Circle> {
        std::mem::take(&mut self.circles)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.clears += 1;
        self.circles.clear();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, fill: Fill) {
        self.circles.push(Circle {
            center,
            radius,
            fill,
        });
    }
}

#[derive(Default, Debug)]
pub struct SchedulerLog {
    pub requested: Vec<u32>,
    pub cancelled: Vec<u32>,
}

/// Scheduler that hands out increasing handles and records cancels.
#[derive(Clone, Default)]
pub struct MockScheduler {
    pub log: Rc<RefCell<SchedulerLog>>,
    pub next: u32,
    pub refuse: bool,
}

impl FrameScheduler for MockScheduler {
    type Handle = u32;

    fn request(&mut self) -> Option<u32> {
        if self.refuse {
            return None;
        }
        self.next += 1;
        self.log.borrow_mut().requested.push(self.next);
        Some(self.next)
    }

    fn cancel(&mut self, handle: u32) {
        self.log.borrow_mut().cancelled.push(handle);
    }
}

/// Listener stand-in that counts how often it was detached.
pub struct MockListener {
    pub detached: Rc<RefCell<u32>>,
}

impl Detach for MockListener {
    fn detach(&mut self) {
        *self.detached.borrow_mut() += 1;
    }
}
