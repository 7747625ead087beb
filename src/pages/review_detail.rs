use leptos::*;
use leptos_router::{use_params_map, A};

use crate::components::image_gallery::ImageGallery;
use crate::components::star_rating::StarRating;
use crate::models::review::{Review, WorthTheCost};
use crate::store::ReviewStore;
use crate::utils::format::group_thousands;
use crate::utils::time::distance_from_now;

/// Detail page for one review. The store cache answers first; only a miss
/// (deep link, freshly shared URL) goes to the backend.
#[component]
pub fn ReviewDetailPage() -> impl IntoView {
    let params = use_params_map();
    let store = ReviewStore::use_store();

    let review = create_local_resource(
        move || params.with(|p| p.get("id").cloned().unwrap_or_default()),
        move |id| {
            let store = store.clone();
            async move {
                if let Some(cached) = store.get_bike_by_id(&id) {
                    return Ok(cached);
                }
                store.backend().fetch_review(&id).await
            }
        },
    );

    view! {
        <div class="detail-page">
            {move || match review.get() {
                None => {
                    view! {
                        <div class="spinner-wrap">
                            <div class="spinner"></div>
                            <p>"Loading review..."</p>
                        </div>
                    }
                        .into_view()
                }
                Some(Err(_)) => {
                    view! {
                        <div class="detail-missing">
                            <h2>"Review Not Found"</h2>
                            <p>
                                "Failed to load the review. It may have been removed or does not exist."
                            </p>
                            <A href="/" class="button-primary">
                                "Return to Home"
                            </A>
                        </div>
                    }
                        .into_view()
                }
                Some(Ok(bike)) => view! { <ReviewDetail review=bike/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ReviewDetail(review: Review) -> impl IntoView {
    let go_back = move |_| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };
    let worth_tone = match review.worth_the_cost {
        WorthTheCost::No => "assessment assessment-no",
        _ => "assessment assessment-yes",
    };
    let worth_note = match review.worth_the_cost {
        WorthTheCost::Yes => "Reviewer feels this bike offers good value for money.",
        WorthTheCost::DefinitelyYes => {
            "Reviewer feels this bike offers exceptional value for money."
        }
        WorthTheCost::No => "Reviewer feels this bike does not offer good value for money.",
    };

    view! {
        <div class="detail">
            <button type="button" class="back-link" on:click=go_back>
                "‹ Back"
            </button>

            <header class="detail-header">
                <p class="detail-rider">{review.rider_name.clone()}</p>
                <h1>{review.bike_name.clone()}</h1>
                <div class="detail-subtitle">
                    <span>{review.model_name.clone()}</span>
                    <StarRating rating=review.rating/>
                    <span>{format!("{:.1}/5", review.rating)}</span>
                    <span class="detail-posted">
                        {format!("Posted {} ago", distance_from_now(review.created_at))}
                    </span>
                </div>
            </header>

            <ImageGallery
                images=review.images.clone()
                alt=format!("{} {}", review.bike_name, review.model_name)
            />

            <section class="detail-section">
                <h2>"Bike Details"</h2>
                <div class="detail-grid">
                    <div class="detail-item">
                        <p class="detail-label">"Purchase Year"</p>
                        <p class="detail-value">{review.purchase_year}</p>
                    </div>
                    <div class="detail-item">
                        <p class="detail-label">"Total KM Driven"</p>
                        <p class="detail-value">
                            {format!("{} km", group_thousands(review.total_km))}
                        </p>
                    </div>
                    <div class="detail-item">
                        <p class="detail-label">"Bike Cost"</p>
                        <p class="detail-value">
                            {format!("₹{}", group_thousands(review.bike_cost))}
                        </p>
                    </div>
                    <div class="detail-item">
                        <p class="detail-label">"Cost Per Service"</p>
                        <p class="detail-value">
                            {format!("₹{}", group_thousands(review.cost_per_service))}
                        </p>
                    </div>
                    <div class="detail-item">
                        <p class="detail-label">"Minor Repair Cost"</p>
                        <p class="detail-value">
                            {format!("₹{}", group_thousands(review.minor_repair_cost))}
                        </p>
                    </div>
                    <div class="detail-item">
                        <p class="detail-label">"Major Repair Cost"</p>
                        <p class="detail-value">
                            {format!("₹{}", group_thousands(review.major_repair_cost))}
                        </p>
                    </div>
                </div>
            </section>

            <section class="detail-section">
                <h2>"Value Assessment"</h2>
                <div class=worth_tone>
                    <p class="assessment-verdict">{review.worth_the_cost.verdict()}</p>
                    <p class="assessment-note">{worth_note}</p>
                </div>
            </section>

            <section class="detail-section">
                <h2>"Detailed Review"</h2>
                <p class="detail-body">{review.review.clone()}</p>
            </section>

            <aside class="detail-cta">
                <h3>"Have a similar bike?"</h3>
                <p>"Share your experience and help others make informed decisions."</p>
                <A href="/review/new" class="button-accent">
                    "Rate Your Bike"
                </A>
            </aside>
        </div>
    }
}
