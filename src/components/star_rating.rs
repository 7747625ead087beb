use leptos::*;

/// Five-star rating row. Read-only unless an `on_rate` callback is given, in
/// which case clicking a star reports its 1-based position.
#[component]
pub fn StarRating(
    #[prop(into)] rating: MaybeSignal<f64>,
    #[prop(optional)] on_rate: Option<Callback<u8>>,
) -> impl IntoView {
    view! {
        <div class="star-rating">
            {(1..=5u8)
                .map(|star| {
                    let filled = move || f64::from(star) <= rating.get();
                    view! {
                        <button
                            type="button"
                            class="star"
                            class:filled=filled
                            disabled=on_rate.is_none()
                            aria-label=format!("Rate {star} star{}", if star > 1 { "s" } else { "" })
                            on:click=move |_| {
                                if let Some(on_rate) = on_rate {
                                    on_rate.call(star);
                                }
                            }
                        >
                            {move || if filled() { "★" } else { "☆" }}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
