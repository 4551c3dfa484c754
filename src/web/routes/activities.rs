use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::activity_store::{ActivityMap, ActivityStore};
use crate::services::activity_service;
use crate::web::errors::ApiError;

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> Json<ActivityMap> {
    Json(activity_service::list_activities(&store).await)
}

pub async fn signup_handler(
    State(store): State<ActivityStore>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;
    let message = activity_service::signup(&store, &activity_name, &query.email).await?;
    Ok(Json(json!({ "message": message })))
}

pub async fn unregister_handler(
    State(store): State<ActivityStore>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query?;
    let message = activity_service::unregister(&store, &activity_name, &query.email).await?;
    Ok(Json(json!({ "message": message })))
}
