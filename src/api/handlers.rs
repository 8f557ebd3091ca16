//! HTTP request handlers for the social graph API

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Path, Query, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Json, Response},
    Json as JsonExtractor,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use super::dispatch::{dispatch, Operation, OperationRequest};
use crate::core::error::Error;
use crate::core::types::{Post, Record, User};
use crate::core::AppState;
use crate::graph::{PostRelations, PostView, UserRelations, UserView};
use crate::system::{health, Outcome};

// Response types
/// Standard API response wrapper for the REST routes
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the operation was successful
    pub success: bool,
    /// Response data (if successful)
    pub data: Option<T>,
    /// Optional message describing the result
    pub message: Option<String>,
    /// Optional error details
    pub error: Option<String>,
}

/// Error response for the REST routes
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Whether the operation was successful (always false)
    pub success: bool,
    /// Error message
    pub error: String,
    /// Optional details about what was invalid
    pub details: Option<Value>,
}

impl<T> ApiResponse<T> {
    /// Create a successful API response with data
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }
}

impl ErrorResponse {
    /// Create a bad request error response
    pub fn bad_request(error: String) -> Self {
        Self {
            success: false,
            error,
            details: None,
        }
    }

    /// Create an error response carrying the error class
    pub fn from_error(error: &Error) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            details: Some(json!({ "kind": error.kind() })),
        }
    }
}

/// Response of `POST /api/operations`
#[derive(Debug, Serialize)]
pub struct OperationResponse {
    /// Result of the operation, `null` for a query that found nothing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Present only when the operation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<OperationError>>,
}

/// One entry of [`OperationResponse::errors`]
#[derive(Debug, Serialize)]
pub struct OperationError {
    /// Human-readable message
    pub message: String,
    /// Error class, e.g. `NOT_FOUND`
    pub kind: &'static str,
}

/// System information and capabilities
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    /// Service name
    pub name: String,
    /// Service version
    pub version: String,
    /// Dispatcher operations
    pub operations: Vec<&'static str>,
    /// List of supported protocols
    pub protocols: Vec<String>,
}

/// `?select=posts,followers` on the REST routes
#[derive(Debug, Default, Deserialize)]
pub struct SelectQuery {
    /// Comma-separated relation names; absent means all relations
    pub select: Option<String>,
}

impl SelectQuery {
    fn names(&self) -> Option<Vec<String>> {
        self.select.as_ref().map(|list| {
            list.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
    }
}

/// HTTP status for a library error
pub fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::NotFound { .. } => StatusCode::NOT_FOUND,
        Error::Validation(_) | Error::UnknownOperation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Library error rendered as an [`ErrorResponse`]
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Request failed");
        }
        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Custom JSON extractor that returns proper JSON error responses
pub struct JsonRequest<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonRequest<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        match JsonExtractor::<T>::from_request(req, state).await {
            Ok(JsonExtractor(value)) => Ok(JsonRequest(value)),
            Err(rejection) => {
                let error_message = match rejection {
                    JsonRejection::JsonDataError(err) => format!("Invalid JSON data: {}", err.body_text()),
                    JsonRejection::JsonSyntaxError(_) => "Malformed JSON".to_string(),
                    JsonRejection::MissingJsonContentType(_) => {
                        "Missing or invalid Content-Type header. Expected 'application/json'".to_string()
                    }
                    JsonRejection::BytesRejection(_) => "Failed to read request body".to_string(),
                    _ => "Invalid JSON request".to_string(),
                };

                tracing::warn!("JSON parsing error: {}", error_message);
                Err((StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(error_message))))
            }
        }
    }
}

/// `POST /api/operations`: run one dispatcher request
pub async fn execute_operation(
    State(state): State<AppState>,
    JsonRequest(request): JsonRequest<OperationRequest>,
) -> (StatusCode, Json<OperationResponse>) {
    let started = Instant::now();
    let result = dispatch(&state.handlers, &request);
    let elapsed = started.elapsed();

    if let Some(metrics) = &state.metrics {
        let operation = request.operation.parse::<Operation>().ok();
        // Unknown names collapse into a single label.
        let label = operation.map_or("unknown", Operation::as_str);
        metrics.observe(label, Outcome::of(&result), elapsed);
        if result.is_ok() && operation.is_some_and(Operation::is_mutation) {
            metrics.record_store_stats(state.handlers.store().read().stats());
        }
    }

    match result {
        Ok(data) => (
            StatusCode::OK,
            Json(OperationResponse {
                data: Some(data),
                errors: None,
            }),
        ),
        Err(error) => {
            let status = status_for(&error);
            if status.is_server_error() {
                tracing::error!(operation = %request.operation, error = %error, "Operation failed");
            } else {
                tracing::debug!(operation = %request.operation, error = %error, "Operation rejected");
            }
            (
                status,
                Json(OperationResponse {
                    data: None,
                    errors: Some(vec![OperationError {
                        message: error.to_string(),
                        kind: error.kind(),
                    }]),
                }),
            )
        }
    }
}

/// `GET /api/users`
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<SelectQuery>,
) -> Result<Json<ApiResponse<Vec<UserView>>>, ApiError> {
    let relations = UserRelations::from_selection(query.names().as_deref())?;
    Ok(Json(ApiResponse::success(state.handlers.list_users(relations))))
}

/// `GET /api/users/:id`
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<SelectQuery>,
) -> Result<Json<ApiResponse<UserView>>, ApiError> {
    let relations = UserRelations::from_selection(query.names().as_deref())?;
    state
        .handlers
        .get_user(&id, relations)
        .map(|user| Json(ApiResponse::success(user)))
        .ok_or_else(|| ApiError(Error::not_found(User::KIND, id)))
}

/// `GET /api/posts`
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<SelectQuery>,
) -> Result<Json<ApiResponse<Vec<PostView>>>, ApiError> {
    let relations = PostRelations::from_selection(query.names().as_deref())?;
    Ok(Json(ApiResponse::success(state.handlers.list_posts(relations))))
}

/// `GET /api/posts/:id`
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<SelectQuery>,
) -> Result<Json<ApiResponse<PostView>>, ApiError> {
    let relations = PostRelations::from_selection(query.names().as_deref())?;
    state
        .handlers
        .get_post(&id, relations)
        .map(|post| Json(ApiResponse::success(post)))
        .ok_or_else(|| ApiError(Error::not_found(Post::KIND, id)))
}

/// Prometheus text exposition
pub async fn metrics_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let Some(metrics) = &state.metrics else {
        return Ok((StatusCode::NOT_FOUND, "metrics disabled").into_response());
    };
    let body = metrics.render()?;
    Ok(([(CONTENT_TYPE, "text/plain; version=0.0.4")], body).into_response())
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<health::HealthStatus> {
    let records = state.handlers.store().read().stats();
    Json(health::check(state.started, records))
}

/// System information endpoint
pub async fn system_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: crate::NAME.to_string(),
        version: crate::VERSION.to_string(),
        operations: Operation::ALL.iter().map(|op| op.as_str()).collect(),
        protocols: vec!["http".to_string()],
    })
}

/// Root API endpoint
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "Social Graph API",
        "version": crate::VERSION,
        "status": "operational",
        "endpoints": {
            "operations": "/api/operations",
            "users": "/api/users",
            "posts": "/api/posts",
            "health": "/health",
            "info": "/info",
            "metrics": "/metrics"
        }
    }))
}
