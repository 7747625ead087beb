use leptos::*;
use leptos_router::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <A href="/" class="navbar-brand">
                "🏍️ Rate Your Bike"
            </A>
            <nav>
                <A href="/" class="navbar-link">
                    "Home"
                </A>
                <A href="/review/new" class="navbar-cta">
                    "Rate Your Bike"
                </A>
            </nav>
        </header>
    }
}
