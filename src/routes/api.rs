use serde_json::json;

use super::*;

/// The comment store resource.
///
/// GET returns the full stored list; POST appends one comment and
/// returns the full updated list, which the caller treats as the new
/// source of truth. Any other method is 405. The store sits behind the
/// app-state mutex, so overlapping appends serialize instead of racing
/// on the read-rewrite cycle.
pub async fn comments(State(state): State<AppState>, method: Method, body: Bytes) -> Response {
    let mut store = state.store.lock().unwrap();

    match method {
        Method::GET => match store.list() {
            Ok(comments) => Json(comments).into_response(),
            Err(err) => store_error(err),
        },
        Method::POST => {
            let comment: Comment = match serde_json::from_slice(&body) {
                Ok(comment) => comment,
                Err(_) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "message": "Malformed comment" })),
                    )
                        .into_response()
                }
            };
            match store.append(comment) {
                Ok(comments) => Json(comments).into_response(),
                Err(err) => store_error(err),
            }
        }
        _ => (
            StatusCode::METHOD_NOT_ALLOWED,
            Json(json!({ "message": "Method not allowed" })),
        )
            .into_response(),
    }
}

fn store_error(err: StoreError) -> Response {
    let message = match err {
        StoreError::Io(_) => "Comments unreadable",
        StoreError::Format(_) => "Comments invalid",
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": message })),
    )
        .into_response()
}
