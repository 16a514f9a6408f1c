use axum::response::Html;

/// Static status page served on `GET /`.
pub async fn health_check() -> Html<&'static str> {
    Html("<h1>Telnyx APIv2 Media Forking Demo is Running!</h1>")
}
