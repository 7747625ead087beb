use std::rc::Rc;

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::{Route, Router, Routes};

use crate::api::{HttpBackend, ReviewBackend};
use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::config::AppConfig;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::review_detail::ReviewDetailPage;
use crate::pages::review_form::ReviewFormPage;
use crate::push;
use crate::store::ReviewStore;

/// Application shell: builds the config, backend, and review store, hands
/// them to the view tree through context, starts the one-shot initial fetch
/// and the push subscription, and declares the routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();
    let backend: Rc<dyn ReviewBackend> = Rc::new(HttpBackend::new(config.api_base.clone()));
    let store = ReviewStore::new(backend);

    provide_context(config.clone());
    provide_context(store.clone());

    // One-shot initial fetch; failures surface through the store's error
    // slot and are not retried.
    {
        let store = store.clone();
        spawn_local(async move { store.initialize().await });
    }

    // Live ingestion of reviews created by any connected client.
    let push_handle = push::subscribe(config.push_url(), store);
    on_cleanup(move || push_handle.close());

    view! {
        <Title text="Rate Your Bike"/>
        <Router>
            <div class="app-shell">
                <Navbar/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/review/new" view=ReviewFormPage/>
                        <Route path="/review/:id" view=ReviewDetailPage/>
                        <Route path="/*any" view=NotFoundPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
