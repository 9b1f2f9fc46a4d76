//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header, request::Parts, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, put},
    Router,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::ser::PrettyFormatter;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections render as [`AppError`]
///
/// The body is decoded whatever its declared content type.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        serde_json::from_slice(&bytes)
            .map(ApiJson)
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

/// Query string extractor whose rejections render as [`AppError`]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        Ok(ApiQuery(query))
    }
}

/// JSON response pretty-printed with four-space indentation
#[derive(Debug, Clone)]
pub struct IndentedJson<T>(pub T);

impl<T: Serialize> IntoResponse for IndentedJson<T> {
    fn into_response(self) -> Response {
        let mut buf = Vec::with_capacity(128);
        let mut ser = serde_json::Serializer::with_formatter(
            &mut buf,
            PrettyFormatter::with_indent(b"    "),
        );

        match self.0.serialize(&mut ser) {
            Ok(()) => (
                [(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                )],
                buf,
            )
                .into_response(),
            Err(err) => {
                tracing::error!("Failed to serialize response: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response()
            }
        }
    }
}

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/:id", get(books::get_book))
        .route("/checkout", put(books::checkout_book))
        .route("/return", put(books::return_book))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request as HttpRequest;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::seeded())
    }

    async fn send(app: Router, method: &str, uri: &str, body: Body) -> (StatusCode, String) {
        let request = HttpRequest::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn get_book_renders_four_space_indentation() {
        let (status, body) = send(app(), "GET", "/books/1", Body::empty()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            "{\n    \"id\": \"1\",\n    \"title\": \"In Search of Lost Time\",\n    \"author\": \"Marcel Proust\",\n    \"quantity\": 2\n}"
        );
    }

    #[tokio::test]
    async fn create_decodes_body_without_content_type() {
        let body = Body::from(r#"{"id":"7","title":"T","author":"A","quantity":1}"#);
        let (status, body) = send(app(), "POST", "/books", body).await;

        assert_eq!(status, StatusCode::CREATED);
        assert!(body.contains("\"id\": \"7\""));
    }

    #[tokio::test]
    async fn checkout_without_id_is_rejected_before_lookup() {
        let (status, body) = send(app(), "PUT", "/checkout", Body::empty()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, "{\n    \"message\": \"Missing id query parameter.\"\n}");
    }

    #[tokio::test]
    async fn repeated_id_uses_first_value() {
        let app = app();
        let (status, body) = send(app.clone(), "PUT", "/checkout?id=2&id=3", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"quantity\": 4"), "got {body}");

        let (_, body) = send(app, "GET", "/books/3", Body::empty()).await;
        assert!(body.contains("\"quantity\": 6"), "got {body}");
    }

    #[tokio::test]
    async fn create_treats_null_fields_as_zero_values() {
        let body = Body::from(r#"{"id":"9","title":null,"quantity":null}"#);
        let (status, body) = send(app(), "POST", "/books", body).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            "{\n    \"id\": \"9\",\n    \"title\": \"\",\n    \"author\": \"\",\n    \"quantity\": 0\n}"
        );
    }

    #[tokio::test]
    async fn create_with_null_body_appends_empty_book() {
        let app = app();
        let (status, _) = send(app.clone(), "POST", "/books", Body::from("null")).await;
        assert_eq!(status, StatusCode::CREATED);

        let (_, body) = send(app, "GET", "/books", Body::empty()).await;
        let books: Vec<crate::models::Book> = serde_json::from_str(&body).unwrap();
        assert_eq!(books.len(), 4);
        assert_eq!(books[3], crate::models::Book::default());
    }
}
