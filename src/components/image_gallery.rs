use leptos::*;

use crate::config::AppConfig;

/// Carousel over a review's photos: wrap-around previous/next, a thumbnail
/// strip, and a fullscreen modal opened by clicking the main image.
#[component]
pub fn ImageGallery(images: Vec<String>, alt: String) -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    if images.is_empty() {
        return view! {
            <div class="gallery gallery-empty">
                <p>"No images available"</p>
            </div>
        }
        .into_view();
    }

    let count = images.len();
    let urls = store_value(
        images
            .iter()
            .map(|path| config.image_url(path))
            .collect::<Vec<_>>(),
    );
    let alt = store_value(alt);

    let (current, set_current) = create_signal(0usize);
    let (modal_open, set_modal_open) = create_signal(false);

    let go_previous = move |_| {
        set_current.update(|index| *index = if *index == 0 { count - 1 } else { *index - 1 });
    };
    let go_next = move |_| {
        set_current.update(|index| *index = if *index == count - 1 { 0 } else { *index + 1 });
    };

    let current_url = move || urls.with_value(|urls| urls[current.get()].clone());
    let alt_text = move || alt.with_value(|alt| alt.clone());

    view! {
        <div class="gallery">
            <div class="gallery-main">
                <button type="button" class="gallery-nav" on:click=go_previous>
                    "‹"
                </button>
                <img
                    src=current_url
                    alt=alt_text
                    on:click=move |_| set_modal_open.set(true)
                />
                <button type="button" class="gallery-nav" on:click=go_next>
                    "›"
                </button>
            </div>
            <div class="gallery-thumbs">
                {(0..count)
                    .map(|index| {
                        view! {
                            <button
                                type="button"
                                class="gallery-thumb"
                                class:active=move || current.get() == index
                                on:click=move |_| set_current.set(index)
                            >
                                <img
                                    src=move || urls.with_value(|urls| urls[index].clone())
                                    alt=move || format!("{} thumbnail {}", alt_text(), index + 1)
                                />
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            {move || {
                modal_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="gallery-modal" on:click=move |_| set_modal_open.set(false)>
                                <button
                                    type="button"
                                    class="gallery-close"
                                    on:click=move |_| set_modal_open.set(false)
                                >
                                    "✕"
                                </button>
                                <img
                                    src=current_url
                                    alt=alt_text
                                    on:click=move |ev| ev.stop_propagation()
                                />
                            </div>
                        }
                    })
            }}
        </div>
    }
    .into_view()
}
