use axum::{Json, extract::Path, http::StatusCode};

pub async fn index() -> &'static str {
    "CORS demo: call /api/items from http://localhost:3000 to see the policy in action."
}

pub async fn list_items() -> Json<Vec<&'static str>> {
    Json(vec!["keyboard", "mouse", "monitor"])
}

pub async fn create_item(body: String) -> (StatusCode, String) {
    (StatusCode::CREATED, body)
}

pub async fn update_item(Path(id): Path<u32>, body: String) -> String {
    format!("updated item {id}: {body}")
}

pub async fn delete_item(Path(id): Path<u32>) -> StatusCode {
    tracing::info!(id, "deleting item");
    StatusCode::NO_CONTENT
}

pub async fn list_users() -> Json<Vec<&'static str>> {
    Json(vec!["ada", "grace"])
}
