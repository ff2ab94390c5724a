use axum::{http::StatusCode, response::IntoResponse};

/// Default 404 Not Found handler, used as the final fallback in the
/// router.
///
/// The fallback sits inside the access-control middleware, so an
/// unauthenticated request to a nonexistent route is still rejected with
/// 401 before this handler can reveal that the route does not exist.
pub async fn not_found() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn returns_404_not_found() {
        let response = not_found().await.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
