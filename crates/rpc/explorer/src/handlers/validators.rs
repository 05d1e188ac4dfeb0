use std::sync::Arc;

use actix_web::{
    HttpResponse, Responder, get,
    web::{Data, Query},
};
use explorer_api_types_common::{error::ApiError, id::ObjectID, responses::DataResponse};
use explorer_rpc_client::source::{ObjectSource, fetch_snapshot};
use explorer_validator_table::{
    cache::TableCache,
    surface::{Surface, TopValidators},
};
use serde::Deserialize;
use tracing::error;

pub const DEFAULT_TOP_VALIDATORS: usize = 10;

#[derive(Clone)]
pub struct ExplorerState {
    pub source: Arc<dyn ObjectSource>,
    pub object_id: ObjectID,
    pub cache: Arc<TableCache>,
}

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<usize>,
}

async fn render(state: &ExplorerState, limit: Option<usize>) -> Result<Surface, ApiError> {
    let snapshot = fetch_snapshot(state.source.as_ref(), state.object_id).await;

    TopValidators::new(limit)
        .render_cached(&snapshot, &state.cache)
        .map_err(|err| {
            error!("Failed to build validator table: {err}");
            ApiError::InternalError(format!("Failed to build validator table: {err}"))
        })
}

/// Called by `/validators/top` to get the first `limit` validators by name.
#[get("/validators/top")]
pub async fn get_top_validators(
    state: Data<ExplorerState>,
    query: Query<LimitQuery>,
) -> Result<impl Responder, ApiError> {
    let limit = query.limit.unwrap_or(DEFAULT_TOP_VALIDATORS);
    if limit == 0 {
        return Err(ApiError::InvalidParameter(
            "limit must be greater than zero".to_string(),
        ));
    }

    let surface = render(&state, Some(limit)).await?;
    Ok(HttpResponse::Ok().json(DataResponse::new(surface)))
}

/// Called by `/validators` to get the full validator list.
#[get("/validators")]
pub async fn get_validators(state: Data<ExplorerState>) -> Result<impl Responder, ApiError> {
    let surface = render(&state, None).await?;
    Ok(HttpResponse::Ok().json(DataResponse::new(surface)))
}
