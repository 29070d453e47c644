// Pending auto-restart timer, extracted from the components layer.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

/// One-shot restart timer scheduled after a loss. Dropping the handle
/// clears the timeout, so replacing or discarding it cancels the pending
/// restart instead of racing it.
pub struct PendingRestart {
    window: Window,
    timeout_id: i32,
    // Kept alive until the handle drops; the browser holds only a raw
    // function pointer into it.
    _callback: Closure<dyn FnMut()>,
}

impl PendingRestart {
    /// Schedules `callback` to run once after `delay_ms`. Returns `None`
    /// outside a browser context or if the timer cannot be registered.
    pub fn schedule(delay_ms: i32, callback: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let timeout_id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Self {
            window,
            timeout_id,
            _callback: callback,
        })
    }
}

impl Drop for PendingRestart {
    fn drop(&mut self) {
        // Clearing an already-fired timeout is a no-op.
        self.window.clear_timeout_with_handle(self.timeout_id);
    }
}
