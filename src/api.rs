use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{File, FormData};

use crate::models::draft::ReviewDraft;
use crate::models::review::Review;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("review not found")]
    NotFound,
    #[error("server rejected the request with status {0}")]
    Status(u16),
    #[error("could not decode server response: {0}")]
    Decode(String),
    #[error("could not assemble the upload payload: {0}")]
    Form(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The backend seam. The store and the pages talk to the review service
/// through this trait so tests can substitute a fake; `HttpBackend` is the
/// real thing. Futures are boxed locally because the underlying fetch
/// primitives are not `Send`.
pub trait ReviewBackend {
    /// `GET /api/bikes` — the full review collection, server-ordered.
    fn fetch_reviews(&self) -> LocalBoxFuture<'static, ApiResult<Vec<Review>>>;

    /// `GET /api/bikes/search?query=…` — case-insensitive substring match on
    /// name, model, and brand.
    fn search_reviews(&self, query: &str) -> LocalBoxFuture<'static, ApiResult<Vec<Review>>>;

    /// `GET /api/bikes/:id` — a single review, `ApiError::NotFound` on 404.
    fn fetch_review(&self, id: &str) -> LocalBoxFuture<'static, ApiResult<Review>>;

    /// `POST /api/bikes/add` — multipart create; resolves to the stored
    /// review with its server-assigned id.
    fn submit_review(
        &self,
        draft: &ReviewDraft,
        images: &[File],
    ) -> LocalBoxFuture<'static, ApiResult<Review>>;
}

#[derive(Debug, Clone)]
pub struct HttpBackend {
    base: String,
}

impl HttpBackend {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn search_endpoint(&self, query: &str) -> String {
        format!(
            "{}/api/bikes/search?query={}",
            self.base,
            urlencoding::encode(query)
        )
    }
}

impl ReviewBackend for HttpBackend {
    fn fetch_reviews(&self) -> LocalBoxFuture<'static, ApiResult<Vec<Review>>> {
        let url = self.endpoint("/api/bikes");
        async move { get_json(&url).await }.boxed_local()
    }

    fn search_reviews(&self, query: &str) -> LocalBoxFuture<'static, ApiResult<Vec<Review>>> {
        let url = self.search_endpoint(query);
        async move { get_json(&url).await }.boxed_local()
    }

    fn fetch_review(&self, id: &str) -> LocalBoxFuture<'static, ApiResult<Review>> {
        let url = self.endpoint(&format!("/api/bikes/{id}"));
        async move {
            let response = Request::get(&url)
                .send()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            match response.status() {
                404 => Err(ApiError::NotFound),
                status if !response.ok() => Err(ApiError::Status(status)),
                _ => response
                    .json::<Review>()
                    .await
                    .map_err(|err| ApiError::Decode(err.to_string())),
            }
        }
        .boxed_local()
    }

    fn submit_review(
        &self,
        draft: &ReviewDraft,
        images: &[File],
    ) -> LocalBoxFuture<'static, ApiResult<Review>> {
        let url = self.endpoint("/api/bikes/add");
        let draft = draft.clone();
        let images = images.to_vec();
        async move {
            let form = multipart_payload(&draft, &images)?;
            let response = Request::post(&url)
                .body(form)
                .map_err(|err| ApiError::Network(err.to_string()))?
                .send()
                .await
                .map_err(|err| ApiError::Network(err.to_string()))?;
            if response.status() != 201 {
                return Err(ApiError::Status(response.status()));
            }
            response
                .json::<Review>()
                .await
                .map_err(|err| ApiError::Decode(err.to_string()))
        }
        .boxed_local()
    }
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> ApiResult<T> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Decode(err.to_string()))
}

/// Builds the multipart body the create endpoint expects: every scalar field
/// as a text part, each image as a binary `bikeImages` part.
fn multipart_payload(draft: &ReviewDraft, images: &[File]) -> ApiResult<FormData> {
    let form = FormData::new().map_err(form_err)?;
    form.append_with_str("riderName", &draft.rider_name)
        .map_err(form_err)?;
    form.append_with_str("bikeName", &draft.bike_name)
        .map_err(form_err)?;
    form.append_with_str("modelName", &draft.model_name)
        .map_err(form_err)?;
    form.append_with_str("purchaseYear", &draft.purchase_year.to_string())
        .map_err(form_err)?;
    form.append_with_str("totalKM", &draft.total_km.to_string())
        .map_err(form_err)?;
    form.append_with_str("bikeCost", &draft.bike_cost.to_string())
        .map_err(form_err)?;
    form.append_with_str("costPerService", &draft.cost_per_service.to_string())
        .map_err(form_err)?;
    form.append_with_str("minorRepairCost", &draft.minor_repair_cost.to_string())
        .map_err(form_err)?;
    form.append_with_str("majorRepairCost", &draft.major_repair_cost.to_string())
        .map_err(form_err)?;
    form.append_with_str("review", &draft.review).map_err(form_err)?;
    form.append_with_str("rating", &draft.rating.to_string())
        .map_err(form_err)?;
    form.append_with_str("worthTheCost", draft.worth_the_cost.as_str())
        .map_err(form_err)?;
    for image in images {
        form.append_with_blob("bikeImages", image).map_err(form_err)?;
    }
    Ok(form)
}

fn form_err(err: JsValue) -> ApiError {
    ApiError::Form(format!("{err:?}"))
}
