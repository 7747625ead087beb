use leptos::*;
use leptos_router::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <p class="not-found-icon">"🏍️"</p>
            <h1>"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>
                "Looks like you've taken a wrong turn on your ride. The page you're looking for doesn't exist."
            </p>
            <A href="/" class="button-primary">
                "Back to Home"
            </A>
        </div>
    }
}
