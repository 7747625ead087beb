use gloo_timers::callback::Timeout;
use leptos::logging::log;
use leptos::*;
use leptos_router::use_navigate;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::AppConfig;
use crate::store::ReviewStore;

/// Quiet period after the last keystroke before a search is issued.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Search box with a trailing debounce: every keystroke cancels the pending
/// timer, and only the one that survives the quiet period reaches the store.
/// Clearing the input drops the results immediately, with no delay.
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = ReviewStore::use_store();
    let config = use_context::<AppConfig>().unwrap_or_default();
    let navigate = use_navigate();

    let results = store.search_results();
    let loading = store.loading();

    let (query, set_query) = create_signal(String::new());
    let (results_visible, set_results_visible) = create_signal(false);
    let pending: StoredValue<Option<Timeout>> = store_value(None);

    let input_ref = create_node_ref::<html::Input>();
    let results_ref = create_node_ref::<html::Div>();

    let on_input = {
        let store = store.clone();
        move |ev: web_sys::Event| {
            let text = event_target_value(&ev);
            set_query.set(text.clone());

            // Dropping the previous timeout cancels it.
            pending.update_value(|slot| {
                slot.take();
            });

            if text.trim().is_empty() {
                let store = store.clone();
                spawn_local(async move { store.search_bikes("").await });
                set_results_visible.set(false);
            } else {
                let store = store.clone();
                let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                    log!("[SEARCH] Querying {text:?}");
                    spawn_local(async move { store.search_bikes(&text).await });
                    set_results_visible.set(true);
                });
                pending.set_value(Some(timeout));
            }
        }
    };

    let on_focus = move |_| {
        let has_query = query.with_untracked(|q| !q.trim().is_empty());
        let has_results = results.with_untracked(|r| !r.is_empty());
        if has_query && has_results {
            set_results_visible.set(true);
        }
    };

    // Dismiss the dropdown on any press outside the input and the results
    // surface.
    let outside_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(
        move |ev: web_sys::MouseEvent| {
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let within = |node: Option<web_sys::Node>| {
                node.map(|node| node.contains(target.as_ref())).unwrap_or(false)
            };
            let in_input = within(
                input_ref
                    .get_untracked()
                    .map(|el| web_sys::Node::from((*el).clone())),
            );
            let in_results = within(
                results_ref
                    .get_untracked()
                    .map(|el| web_sys::Node::from((*el).clone())),
            );
            if !in_input && !in_results {
                set_results_visible.set(false);
            }
        },
    );
    let _ = document()
        .add_event_listener_with_callback("mousedown", outside_click.as_ref().unchecked_ref());
    on_cleanup(move || {
        let _ = document().remove_event_listener_with_callback(
            "mousedown",
            outside_click.as_ref().unchecked_ref(),
        );
    });

    view! {
        <div class="search-bar">
            <input
                node_ref=input_ref
                type="text"
                class="search-input"
                placeholder="Search bikes by name, model, or brand..."
                prop:value=query
                on:input=on_input
                on:focus=on_focus
            />
            {move || {
                results_visible
                    .get()
                    .then(|| {
                        let navigate = navigate.clone();
                        let config = config.clone();
                        view! {
                            <div class="search-results" node_ref=results_ref>
                                {move || {
                                    if loading.get() {
                                        view! {
                                            <div class="search-status">
                                                <div class="spinner"></div>
                                                <p>"Searching..."</p>
                                            </div>
                                        }
                                            .into_view()
                                    } else if results.with(|r| !r.is_empty()) {
                                        let navigate = navigate.clone();
                                        let config = config.clone();
                                        view! {
                                            <ul>
                                                {results
                                                    .get()
                                                    .into_iter()
                                                    .map(|bike| {
                                                        let navigate = navigate.clone();
                                                        let id = bike.id.clone();
                                                        let thumb = bike
                                                            .images
                                                            .first()
                                                            .map(|path| config.image_url(path));
                                                        view! {
                                                            <li
                                                                class="search-result"
                                                                on:click=move |_| {
                                                                    navigate(
                                                                        &format!("/review/{id}"),
                                                                        Default::default(),
                                                                    );
                                                                    set_results_visible.set(false);
                                                                    set_query.set(String::new());
                                                                }
                                                            >
                                                                {thumb
                                                                    .map(|src| {
                                                                        view! {
                                                                            <img src=src alt=bike.bike_name.clone()/>
                                                                        }
                                                                    })}
                                                                <div>
                                                                    <p class="result-name">{bike.bike_name.clone()}</p>
                                                                    <p class="result-model">
                                                                        {format!(
                                                                            "{} ({})",
                                                                            bike.model_name,
                                                                            bike.purchase_year,
                                                                        )}
                                                                    </p>
                                                                </div>
                                                            </li>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                        }
                                            .into_view()
                                    } else if query.with(|q| !q.trim().is_empty()) {
                                        view! {
                                            <div class="search-status">
                                                <p>"No bikes found. Try a different search."</p>
                                            </div>
                                        }
                                            .into_view()
                                    } else {
                                        ().into_view()
                                    }
                                }}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
