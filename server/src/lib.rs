use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use tokio::{net::TcpListener, sync::Mutex};

use todo_core::{Item, ItemStore, StoreError};

/// Shared store handle: one connection guarded by an async mutex. A handler
/// holds the guard for exactly one store call, so the connection is released
/// on every exit path when the guard drops.
pub type Db = Arc<Mutex<ItemStore>>;

/// Boundary error: decides how each failure answers.
///
/// Input validation (non-numeric id, non-boolean status) never reaches this
/// type — the typed `Path` extractors reject those with 400 on their own.
#[derive(Debug)]
pub enum ApiError {
    /// No row matches the requested id.
    NotFound,

    /// The store could not execute the statement.
    Store(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND.into_response(),
            Self::Store(err) => {
                tracing::error!(error = %err, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "store operation failed\n").into_response()
            }
        }
    }
}

pub fn app(store: ItemStore) -> Router {
    let db: Db = Arc::new(Mutex::new(store));
    Router::new()
        .route("/items", get(list_items))
        .route("/items/init", get(init_items))
        .route("/items/drop", get(drop_items))
        // The {id} segment doubles as the new description for PUT.
        .route("/item/{id}", get(get_item).put(create_item).delete(delete_item))
        .route("/item/{id}/{status}", put(update_status))
        .with_state(db)
}

pub async fn run(listener: TcpListener, store: ItemStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_items(State(db): State<Db>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = db.lock().await.list()?;
    Ok(Json(items))
}

async fn init_items(State(db): State<Db>) -> Result<&'static str, ApiError> {
    db.lock().await.init()?;
    Ok("todos table initialized\n")
}

async fn drop_items(State(db): State<Db>) -> Result<&'static str, ApiError> {
    db.lock().await.drop_table()?;
    Ok("todos table dropped\n")
}

async fn get_item(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Item>, ApiError> {
    let item = db.lock().await.get(id)?;
    item.map(Json).ok_or(ApiError::NotFound)
}

async fn create_item(
    State(db): State<Db>,
    Path(description): Path<String>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = db.lock().await.create(&description)?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_status(
    State(db): State<Db>,
    Path((id, status)): Path<(i64, bool)>,
) -> Result<StatusCode, ApiError> {
    db.lock().await.set_done(id, status)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_item(State(db): State<Db>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    db.lock().await.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let resp = ApiError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn store_error_maps_to_500() {
        let resp = ApiError::from(store_failure()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    fn store_failure() -> StoreError {
        // Any store failure works here; a dropped table is the realistic one.
        let store = ItemStore::open_in_memory().unwrap();
        store.drop_table().unwrap();
        store.list().unwrap_err()
    }

    #[test]
    fn router_accepts_all_route_patterns() {
        // Route registration panics on conflicting patterns; building the
        // router is the assertion.
        let _ = app(ItemStore::open_in_memory().unwrap());
    }
}
