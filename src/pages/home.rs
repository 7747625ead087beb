use leptos::*;
use leptos_router::A;

use crate::components::review_card::ReviewCard;
use crate::components::search_bar::SearchBar;
use crate::store::ReviewStore;

/// Landing page: hero with the live review count and search box, then a grid
/// of search results when a search is active, otherwise the most recently
/// added reviews.
#[component]
pub fn HomePage() -> impl IntoView {
    let store = ReviewStore::use_store();
    let collection = store.collection();
    let results = store.search_results();
    let loading = store.loading();

    let searching = move || results.with(|r| !r.is_empty());
    let bikes_to_display = move || {
        if searching() {
            results.get()
        } else {
            collection.get()
        }
    };

    view! {
        <div class="home">
            <section class="hero">
                <h1>"Find Your Perfect Bike with Real Reviews"</h1>
                <p>
                    "Search for detailed bike reviews or share your own experience - no registration required!"
                </p>
                <p class="hero-count">
                    "🏍️ "
                    <span class="count">{move || collection.with(|c| c.len())}</span>
                    " bikes listed and counting!"
                </p>
                <SearchBar/>
                <p class="hero-hint">
                    "Search by bike name, model, or brand to find reviews from real riders"
                </p>
            </section>

            <section class="featured">
                <h2>
                    {move || {
                        if searching() { "Search Results" } else { "Recently Added Reviews" }
                    }}
                </h2>
                {move || {
                    if loading.get() {
                        view! {
                            <div class="spinner-wrap">
                                <div class="spinner"></div>
                            </div>
                        }
                            .into_view()
                    } else {
                        let bikes = bikes_to_display();
                        if bikes.is_empty() {
                            view! {
                                <div class="empty-state">
                                    <h3>"No results found"</h3>
                                    <p>"Try searching with different keywords."</p>
                                </div>
                            }
                                .into_view()
                        } else {
                            view! {
                                <div class="review-grid">
                                    {bikes
                                        .into_iter()
                                        .take(6)
                                        .map(|bike| view! { <ReviewCard review=bike/> })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                                .into_view()
                        }
                    }
                }}
            </section>

            <section class="cta">
                <h2>"Share Your Bike Experience"</h2>
                <p>
                    "Help fellow bikers make informed decisions by sharing your honest review. No account needed!"
                </p>
                <A href="/review/new" class="button-primary">
                    "Rate Your Bike Now"
                </A>
            </section>
        </div>
    }
}
