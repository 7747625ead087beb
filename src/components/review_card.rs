use leptos::*;
use leptos_router::A;

use crate::components::star_rating::StarRating;
use crate::config::AppConfig;
use crate::models::review::{Review, WorthTheCost};
use crate::utils::format::group_thousands;

/// Summary card linking to a review's detail page.
#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let href = format!("/review/{}", review.id);
    let cover = review.images.first().map(|path| config.image_url(path));
    let worth_class = match review.worth_the_cost {
        WorthTheCost::Yes => "badge badge-yes",
        WorthTheCost::DefinitelyYes => "badge badge-definitely",
        WorthTheCost::No => "badge badge-no",
    };

    view! {
        <A href=href class="review-card">
            <div class="review-card-cover">
                {match cover {
                    Some(src) => view! { <img src=src alt=review.bike_name.clone()/> }.into_view(),
                    None => view! { <div class="review-card-placeholder">"🏍️"</div> }.into_view(),
                }}
                <div class="review-card-rating">
                    <StarRating rating=review.rating/>
                    <span>{format!("{:.1}", review.rating)}</span>
                </div>
            </div>
            <div class="review-card-body">
                <h3>{review.bike_name.clone()}</h3>
                <p class="review-card-model">
                    {format!("{} ({})", review.model_name, review.purchase_year)}
                </p>
                <div class="review-card-badges">
                    <span class="badge badge-cost">
                        {format!("₹{}", group_thousands(review.bike_cost))}
                    </span>
                    <span class=worth_class>{review.worth_the_cost.badge_label()}</span>
                </div>
            </div>
        </A>
    }
}
