use folio_core::{Detach, FrameLoop, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` with a single persistent continuation.
pub struct RafScheduler {
    window: web::Window,
    tick: Tick,
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request(&mut self) -> Option<i32> {
        let tick = self.tick.borrow();
        let cb = tick.as_ref()?;
        match self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
        {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("requestAnimationFrame: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        if let Err(e) = self.window.cancel_animation_frame(handle) {
            log::warn!("cancelAnimationFrame: {:?}", e);
        }
    }
}

/// Owns a running loop; detaching cancels the pending frame and releases the
/// continuation.
pub struct LoopGuard {
    frame_loop: Rc<RefCell<FrameLoop<RafScheduler>>>,
    tick: Tick,
}

impl Detach for LoopGuard {
    fn detach(&mut self) {
        self.frame_loop.borrow_mut().stop();
        self.tick.borrow_mut().take();
    }
}

/// Run `frame` once per display refresh until the returned guard is detached.
pub fn start_loop(window: &web::Window, mut frame: impl FnMut() + 'static) -> LoopGuard {
    let tick: Tick = Rc::new(RefCell::new(None));
    let frame_loop = Rc::new(RefCell::new(FrameLoop::new(RafScheduler {
        window: window.clone(),
        tick: tick.clone(),
    })));
    // weak: the continuation lives inside the scheduler the loop owns
    let loop_tick = Rc::downgrade(&frame_loop);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(frame_loop) = loop_tick.upgrade() {
            frame_loop.borrow_mut().on_frame(&mut frame);
        }
    }) as Box<dyn FnMut()>));
    frame_loop.borrow_mut().start();
    LoopGuard { frame_loop, tick }
}
