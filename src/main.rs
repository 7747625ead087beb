use rateyourbike::app::App;
use rateyourbike::utils::panic_hook;

fn main() {
    panic_hook::init();
    leptos::mount_to_body(App);
}
