use std::panic;

use leptos::logging::log;

/// Installs the console panic hook plus a little extra context for owner
/// disposal panics, which here usually mean a push-channel or timer callback
/// fired after the app unmounted.
pub fn init() {
    console_error_panic_hook::set_once();

    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") {
            log!("[PANIC] A reactive owner was disposed before this callback ran.");
            log!("[PANIC] Check that the push subscription handle and any pending");
            log!("[PANIC] debounce timers are closed on cleanup.");
        }
    }));
}
