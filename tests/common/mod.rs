use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use ticket_store::{
    application::{create_application, create_middleware, create_state_with_storage},
    repository::{InMemoryStorage, Storage},
    service::tickets_service::TicketsServiceConfig,
};
use tower::ServiceExt;
use uuid::Uuid;

pub fn in_memory_application() -> Router {
    application_with_storage(Arc::new(InMemoryStorage::new()))
}

pub fn application_with_storage(storage: Arc<dyn Storage>) -> Router {
    let state = create_state_with_storage(storage, TicketsServiceConfig::default());
    create_application(state, create_middleware())
}

pub fn create_test_path() -> PathBuf {
    std::env::temp_dir().join(format!("ticket_store_it_{}.json", Uuid::new_v4()))
}

pub fn destroy_test_path(path: &Path) {
    let _ = std::fs::remove_file(path);
}

pub async fn send(
    application: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = application.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = match bytes.is_empty() {
        true => Value::Null,
        false => serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null),
    };

    (status, value)
}

pub fn str_field<'a>(value: &'a Value, name: &str) -> &'a str {
    value.get(name).unwrap().as_str().unwrap()
}
