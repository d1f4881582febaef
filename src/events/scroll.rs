use crate::dom;
use crate::nav::NavUpdater;
use crate::runtime::SharedRuntime;
use std::rc::Rc;
use web_sys as web;

/// One passive scroll listener feeds the host (parallax and scroll glitch
/// throttle themselves) and the navigation chrome.
pub fn wire_scroll(window: &web::Window, runtime: &SharedRuntime, nav: Rc<NavUpdater>) {
    let runtime = runtime.clone();
    dom::add_listener(window, "scroll", move |_: web::Event| {
        let scroll_y = dom::scroll_y();
        if let Ok(mut rt) = runtime.try_borrow_mut() {
            if rt.is_running() {
                rt.drive(|host, now, out| host.scroll(scroll_y, now, out));
            }
        }
        nav.update(scroll_y);
    });
}
