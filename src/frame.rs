use crate::dom;
use crate::runtime::SharedRuntime;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive the host once per animation frame until it is torn down or
/// replaced.
pub fn start_loop(runtime: SharedRuntime) {
    let generation = runtime.borrow().generation();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let running = match runtime.try_borrow_mut() {
            Ok(mut rt) => {
                let current = rt.generation() == generation && rt.is_running();
                if current {
                    rt.drive(|host, now, out| host.advance(now, out));
                }
                current
            }
            // an event handler holds the runtime; try again next frame
            Err(_) => true,
        };
        if running {
            request_frame(&tick_clone);
        } else if let Some(stopped) = tick_clone.borrow_mut().take() {
            // this closure is still on the stack; free it once the frame returns
            dom::set_timeout(0, move || drop(stopped));
            log::info!("[effects] frame loop stopped");
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
