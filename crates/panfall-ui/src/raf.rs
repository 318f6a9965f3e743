//! `requestAnimationFrame` scheduling with a cancellation handle.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

struct RafState {
    raf_id: Option<i32>,
    closure: Option<Closure<dyn FnMut()>>,
    running: bool,
}

/// Self-rescheduling animation-frame loop.
///
/// Drives a callback once per display refresh until cancelled. The
/// closure only holds a weak reference to the loop state, so dropping
/// the handle tears the cycle down.
pub struct RafLoop {
    state: Rc<RefCell<RafState>>,
}

impl RafLoop {
    /// Schedule `callback` once per display refresh, starting with the
    /// next frame.
    pub fn start(mut callback: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let state = Rc::new(RefCell::new(RafState {
            raf_id: None,
            closure: None,
            running: true,
        }));

        let weak: Weak<RefCell<RafState>> = Rc::downgrade(&state);
        let closure = Closure::wrap(Box::new(move || {
            let Some(state) = weak.upgrade() else {
                return;
            };
            if !state.borrow().running {
                return;
            }
            callback();
            let id = {
                let st = state.borrow();
                st.closure.as_ref().and_then(|cl| {
                    web_sys::window()?
                        .request_animation_frame(cl.as_ref().unchecked_ref())
                        .ok()
                })
            };
            state.borrow_mut().raf_id = id;
        }) as Box<dyn FnMut()>);

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        {
            let mut st = state.borrow_mut();
            st.closure = Some(closure);
            st.raf_id = Some(id);
        }

        Ok(Self { state })
    }

    /// Cancel the pending frame; no further callbacks fire.
    pub fn cancel(&self) {
        let mut st = self.state.borrow_mut();
        st.running = false;
        if let Some(id) = st.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
