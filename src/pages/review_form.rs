use chrono::{Datelike, Utc};
use gloo_timers::future::sleep;
use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::*;
use leptos_router::use_navigate;
use std::time::Duration;
use web_sys::File;

use crate::components::image_uploader::ImageUploader;
use crate::components::star_rating::StarRating;
use crate::models::catalog;
use crate::models::draft::{ReviewDraft, ValidationErrors};
use crate::models::review::WorthTheCost;
use crate::store::ReviewStore;

/// How long the success panel stays up before redirecting to the new review.
const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

const SUBMIT_ERROR: &str = "Failed to submit your review. Please try again.";

fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        0.0
    } else {
        trimmed.parse().unwrap_or(0.0)
    }
}

/// The submission form. Validation runs entirely client-side and blocks the
/// request; a rejected create keeps the form data so the rider can retry.
#[component]
pub fn ReviewFormPage() -> impl IntoView {
    let store = ReviewStore::use_store();
    let navigate = use_navigate();
    let current_year = Utc::now().year();

    let (rider_name, set_rider_name) = create_signal(String::new());
    let (brand, set_brand) = create_signal(String::new());
    let (model, set_model) = create_signal(String::new());
    let (year, set_year) = create_signal(current_year.to_string());
    let (total_km, set_total_km) = create_signal(String::new());
    let (bike_cost, set_bike_cost) = create_signal(String::new());
    let (cost_per_service, set_cost_per_service) = create_signal(String::new());
    let (minor_repair, set_minor_repair) = create_signal(String::new());
    let (major_repair, set_major_repair) = create_signal(String::new());
    let (review_text, set_review_text) = create_signal(String::new());
    let (rating, set_rating) = create_signal(0u8);
    let (worth, set_worth) = create_signal(WorthTheCost::Yes);
    let images: RwSignal<Vec<File>> = create_rw_signal(Vec::new());

    let errors = create_rw_signal(ValidationErrors::default());
    let (submitting, set_submitting) = create_signal(false);
    let (success, set_success) = create_signal(false);

    let available_models = move || catalog::models_for(&brand.get());

    let on_brand_change = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        // Keep the model only if the new brand still carries it.
        if !catalog::models_for(&value).contains(&model.get_untracked().as_str()) {
            set_model.set(String::new());
        }
        set_brand.set(value);
        errors.update(|e| e.remove("bike_name"));
    };

    // Adding enough photos resolves the image error without a resubmit.
    create_effect(move |_| {
        if images.with(|files| files.len()) >= 3 {
            errors.update(|e| e.remove("images"));
        }
    });

    let field_error = move |field: &'static str| {
        move || {
            errors
                .with(|e| e.get(field))
                .map(|message| view! { <p class="field-error">{message}</p> })
        }
    };

    let on_submit = {
        let store = store.clone();
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let rider = rider_name.get_untracked().trim().to_string();
            let draft = ReviewDraft {
                rider_name: if rider.is_empty() {
                    "Anonymous".to_string()
                } else {
                    rider
                },
                bike_name: brand.get_untracked(),
                model_name: model.get_untracked(),
                purchase_year: year.get_untracked().trim().parse().unwrap_or(0),
                total_km: parse_number(&total_km.get_untracked()),
                bike_cost: parse_number(&bike_cost.get_untracked()),
                cost_per_service: parse_number(&cost_per_service.get_untracked()),
                minor_repair_cost: parse_number(&minor_repair.get_untracked()),
                major_repair_cost: parse_number(&major_repair.get_untracked()),
                review: review_text.get_untracked(),
                rating: rating.get_untracked(),
                worth_the_cost: worth.get_untracked(),
            };

            let validation = draft.validate(images.with_untracked(|files| files.len()));
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            errors.set(ValidationErrors::default());
            set_submitting.set(true);

            let store = store.clone();
            let navigate = navigate.clone();
            let files = images.get_untracked();
            spawn_local(async move {
                match store.backend().submit_review(&draft, &files).await {
                    Ok(created) => {
                        set_submitting.set(false);
                        set_success.set(true);
                        sleep(REDIRECT_DELAY).await;
                        navigate(&format!("/review/{}", created.id), Default::default());
                    }
                    Err(err) => {
                        warn!("[FORM] Submission failed: {err}");
                        set_submitting.set(false);
                        errors.update(|e| e.insert("submit", SUBMIT_ERROR));
                    }
                }
            });
        }
    };

    view! {
        <div class="form-page">
            <div class="success-panel" class:hidden=move || !success.get()>
                <div class="success-check">"✓"</div>
                <h2>"Review Submitted!"</h2>
                <p>"Thank you for sharing your bike experience."</p>
                <p class="success-note">"Redirecting to your review..."</p>
            </div>

            <div class="form-wrap" class:hidden=success>
                <h1>"Rate Your Bike"</h1>
                <p class="form-intro">
                    "Your review will help fellow riders make informed decisions. Once submitted, reviews cannot be edited or deleted."
                </p>

                {move || {
                    errors
                        .with(|e| e.get("submit"))
                        .map(|message| view! { <div class="submit-error">{message}</div> })
                }}

                <form on:submit=on_submit>
                    <div class="form-grid">
                        <div class="form-field">
                            <label for="rider-name">"Your Name"</label>
                            <input
                                id="rider-name"
                                type="text"
                                placeholder="Anonymous"
                                prop:value=rider_name
                                on:input=move |ev| set_rider_name.set(event_target_value(&ev))
                            />
                        </div>

                        <div class="form-field">
                            <label for="bike-name">"Bike Brand " <span class="required">"*"</span></label>
                            <select id="bike-name" prop:value=brand on:change=on_brand_change>
                                <option value="">"Select a brand"</option>
                                {catalog::brands()
                                    .map(|name| view! { <option value=name>{name}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                            {field_error("bike_name")}
                        </div>

                        <div class="form-field">
                            <label for="model-name">"Model Name " <span class="required">"*"</span></label>
                            <select
                                id="model-name"
                                prop:value=model
                                disabled=move || brand.with(|b| b.is_empty())
                                on:change=move |ev| {
                                    set_model.set(event_target_value(&ev));
                                    errors.update(|e| e.remove("model_name"));
                                }
                            >
                                <option value="">"Select a model"</option>
                                {move || {
                                    available_models()
                                        .iter()
                                        .map(|name| view! { <option value=*name>{*name}</option> })
                                        .collect::<Vec<_>>()
                                }}
                            </select>
                            {field_error("model_name")}
                        </div>

                        <div class="form-field">
                            <label for="purchase-year">"Purchase Year"</label>
                            <select
                                id="purchase-year"
                                prop:value=year
                                on:change=move |ev| {
                                    set_year.set(event_target_value(&ev));
                                    errors.update(|e| e.remove("purchase_year"));
                                }
                            >
                                {(2000..=current_year)
                                    .map(|y| view! { <option value=y.to_string()>{y}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                            {field_error("purchase_year")}
                        </div>

                        <div class="form-field">
                            <label for="total-km">"Total KM Driven"</label>
                            <input
                                id="total-km"
                                type="text"
                                inputmode="numeric"
                                placeholder="0"
                                prop:value=total_km
                                on:input=move |ev| {
                                    set_total_km.set(event_target_value(&ev));
                                    errors.update(|e| e.remove("total_km"));
                                }
                            />
                            {field_error("total_km")}
                        </div>

                        <div class="form-field">
                            <label for="bike-cost">"Bike Cost (₹) " <span class="required">"*"</span></label>
                            <input
                                id="bike-cost"
                                type="text"
                                inputmode="numeric"
                                placeholder="0"
                                prop:value=bike_cost
                                on:input=move |ev| {
                                    set_bike_cost.set(event_target_value(&ev));
                                    errors.update(|e| e.remove("bike_cost"));
                                }
                            />
                            {field_error("bike_cost")}
                        </div>

                        <div class="form-field">
                            <label for="cost-per-service">"Cost Per Service (₹)"</label>
                            <input
                                id="cost-per-service"
                                type="text"
                                inputmode="numeric"
                                placeholder="0"
                                prop:value=cost_per_service
                                on:input=move |ev| {
                                    set_cost_per_service.set(event_target_value(&ev));
                                    errors.update(|e| e.remove("cost_per_service"));
                                }
                            />
                            {field_error("cost_per_service")}
                        </div>

                        <div class="form-field">
                            <label for="minor-repair">"Approximate Minor Repair Cost (₹)"</label>
                            <input
                                id="minor-repair"
                                type="text"
                                inputmode="numeric"
                                placeholder="0"
                                prop:value=minor_repair
                                on:input=move |ev| {
                                    set_minor_repair.set(event_target_value(&ev));
                                    errors.update(|e| e.remove("minor_repair_cost"));
                                }
                            />
                            {field_error("minor_repair_cost")}
                        </div>

                        <div class="form-field">
                            <label for="major-repair">"Approximate Major Repair Cost (₹)"</label>
                            <input
                                id="major-repair"
                                type="text"
                                inputmode="numeric"
                                placeholder="0"
                                prop:value=major_repair
                                on:input=move |ev| {
                                    set_major_repair.set(event_target_value(&ev));
                                    errors.update(|e| e.remove("major_repair_cost"));
                                }
                            />
                            {field_error("major_repair_cost")}
                        </div>
                    </div>

                    <fieldset class="worth-group">
                        <legend>"Was it worth the cost?"</legend>
                        {[WorthTheCost::Yes, WorthTheCost::DefinitelyYes, WorthTheCost::No]
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <label
                                        class="worth-option"
                                        class:selected=move || worth.get() == option
                                    >
                                        <input
                                            type="radio"
                                            name="worthTheCost"
                                            value=option.as_str()
                                            prop:checked=move || worth.get() == option
                                            on:change=move |_| set_worth.set(option)
                                        />
                                        {option.as_str()}
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </fieldset>

                    <div class="form-field">
                        <label>"Rate Your Bike " <span class="required">"*"</span></label>
                        <div class="rating-row">
                            <StarRating
                                rating=Signal::derive(move || f64::from(rating.get()))
                                on_rate=Callback::new(move |star| {
                                    set_rating.set(star);
                                    errors.update(|e| e.remove("rating"));
                                })
                            />
                            <span class="rating-value">
                                {move || {
                                    let value = rating.get();
                                    if value > 0 { value.to_string() } else { String::new() }
                                }}
                            </span>
                        </div>
                        {field_error("rating")}
                    </div>

                    <div class="form-field">
                        <label for="review">"Your Detailed Review " <span class="required">"*"</span></label>
                        <textarea
                            id="review"
                            rows=5
                            placeholder="Share your experience with this bike. What did you like? What could be improved? How does it perform on different terrains?"
                            prop:value=review_text
                            on:input=move |ev| {
                                set_review_text.set(event_target_value(&ev));
                                errors.update(|e| e.remove("review"));
                            }
                        ></textarea>
                        {field_error("review")}
                    </div>

                    <div class="form-field">
                        <ImageUploader images=images/>
                        {field_error("images")}
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="button-primary" disabled=submitting>
                            {move || {
                                if submitting.get() { "Submitting..." } else { "Submit Review" }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
