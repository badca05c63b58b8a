//! Best-effort DevTools deterrent. Cosmetic only: it is environment
//! dependent and trivially bypassed, so nothing trusts it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

const SIZE_THRESHOLD: f64 = 160.0;
const DEBUGGER_THRESHOLD_MS: f64 = 100.0;
const CHECK_INTERVAL_MS: u32 = 500;

const MOBILE_MARKERS: &[&str] = &[
    "android", "webos", "iphone", "ipad", "ipod", "blackberry", "iemobile", "opera mini",
];

fn has_mobile_marker(user_agent: &str) -> bool {
    let ua = user_agent.to_lowercase();
    MOBILE_MARKERS.iter().any(|m| ua.contains(m))
}

/// iPadOS reports a desktop Mac user agent; the touch points give it away.
fn is_desktop_mode_ipad(platform: &str, max_touch_points: i32) -> bool {
    platform == "MacIntel" && max_touch_points > 1
}

fn is_mobile_or_tablet(window: &web_sys::Window) -> bool {
    let navigator = window.navigator();
    has_mobile_marker(&navigator.user_agent().unwrap_or_default())
        || is_desktop_mode_ipad(
            &navigator.platform().unwrap_or_default(),
            navigator.max_touch_points(),
        )
}

fn wipe_page() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(body) = document.body() {
        body.set_inner_html(
            "<div style=\"width: 100vw; height: 100vh; display: flex; align-items: center; \
             justify-content: center;\"><h1 style=\"text-align:center;\">Acesso Bloqueado ❌</h1></div>",
        );
    }
}

/// Install the deterrent: key/context-menu blocking plus a periodic check.
/// Skipped entirely on mobile and tablet user agents. Listeners live for the
/// whole page lifetime (closures are forgotten).
pub fn install() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };
    if is_mobile_or_tablet(&window) {
        return;
    }

    let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let keydown = {
        let interval = Rc::clone(&interval);
        Closure::wrap(Box::new(move |event: web_sys::KeyboardEvent| {
            let key = event.key().to_uppercase();
            let blocked = key == "F12"
                || (event.ctrl_key()
                    && event.shift_key()
                    && matches!(key.as_str(), "I" | "J" | "C"))
                || (event.ctrl_key() && key == "U");
            if blocked {
                event.prevent_default();
                interval.borrow_mut().take();
                wipe_page();
            }
        }) as Box<dyn FnMut(_)>)
    };
    let _ = document
        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let contextmenu = Closure::wrap(Box::new(move |event: web_sys::MouseEvent| {
        event.prevent_default();
    }) as Box<dyn FnMut(_)>);
    let _ = document
        .add_event_listener_with_callback("contextmenu", contextmenu.as_ref().unchecked_ref());
    contextmenu.forget();

    let tick = {
        let interval = Rc::clone(&interval);
        move || {
            let Some(window) = web_sys::window() else {
                return;
            };

            // Docked DevTools shrink the inner viewport relative to the
            // outer window.
            let delta = |outer: Result<JsValue, JsValue>, inner: Result<JsValue, JsValue>| {
                let outer = outer.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                let inner = inner.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
                outer - inner
            };
            let width_diff = delta(window.outer_width(), window.inner_width());
            let height_diff = delta(window.outer_height(), window.inner_height());
            if width_diff > SIZE_THRESHOLD || height_diff > SIZE_THRESHOLD {
                interval.borrow_mut().take();
                wipe_page();
                return;
            }

            // An open debugger pauses on the `debugger` statement, which
            // shows up as wall-clock time across the call.
            let Some(performance) = window.performance() else {
                return;
            };
            let start = performance.now();
            let _ = Function::new_no_args("debugger;").call0(&JsValue::NULL);
            if performance.now() - start > DEBUGGER_THRESHOLD_MS {
                interval.borrow_mut().take();
                wipe_page();
            }
        }
    };
    *interval.borrow_mut() = Some(Interval::new(CHECK_INTERVAL_MS, tick));
}
