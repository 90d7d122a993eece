//! Mount lifecycle shared by all animators.
//!
//! Mounting an animator produces a set of host registrations (event listeners,
//! observers, a frame loop). `Mounted` owns them and tears all of them down
//! exactly once, either on `unmount` or when dropped.

/// A host registration that can be undone.
pub trait Detach {
    fn detach(&mut self);
}

pub struct Mounted {
    name: &'static str,
    parts: Vec<Box<dyn Detach>>,
    active: bool,
}

impl Mounted {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            parts: Vec::new(),
            active: true,
        }
    }

    pub fn with(mut self, part: impl Detach + 'static) -> Self {
        self.push(part);
        self
    }

    pub fn push(&mut self, part: impl Detach + 'static) {
        self.parts.push(Box::new(part));
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Detach every part in reverse registration order.
    pub fn unmount(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        while let Some(mut part) = self.parts.pop() {
            part.detach();
        }
        log::info!("[mount] {} unmounted", self.name);
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.unmount();
    }
}
