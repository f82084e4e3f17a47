use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type SharedCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Runs `frame` on every animation frame for the rest of the page session.
pub fn start_loop(mut frame: impl FnMut() + 'static) {
    let tick: SharedCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame();
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}

/// A repeating timeout whose next delay is chosen by the task itself.
///
/// One closure is created and re-armed after each run with the delay it
/// returned, instead of building a new callback per step.
pub fn start_repeating(first_delay: Duration, mut task: impl FnMut() -> Duration + 'static) {
    let tick: SharedCallback = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let next = task();
        arm(&tick_clone, next);
    }) as Box<dyn FnMut()>));
    arm(&tick, first_delay);
}

fn arm(tick: &SharedCallback, delay: Duration) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            ms,
        );
    }
}
