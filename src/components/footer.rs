use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"Rate Your Bike - honest ownership reviews from real riders."</p>
            <p class="footer-note">"Reviews cannot be edited or deleted once submitted."</p>
        </footer>
    }
}
