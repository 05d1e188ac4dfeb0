use async_trait::async_trait;
use explorer_api_types_common::id::ObjectID;
use explorer_api_types_object::object::ObjectResponse;
use explorer_validator_table::surface::QuerySnapshot;
use tracing::error;

use crate::error::ClientError;

/// Anything that can read an on-chain object by ID.
#[async_trait]
pub trait ObjectSource: Send + Sync {
    async fn get_object(&self, object_id: ObjectID) -> Result<ObjectResponse, ClientError>;
}

/// Read `object_id` and report the outcome as a query snapshot. Failures are
/// logged and surface as an error status without data.
pub async fn fetch_snapshot<S>(source: &S, object_id: ObjectID) -> QuerySnapshot<ObjectResponse>
where
    S: ObjectSource + ?Sized,
{
    match source.get_object(object_id).await {
        Ok(response) => QuerySnapshot::success(response),
        Err(err) => {
            error!("Failed to fetch object {object_id}: {err}");
            QuerySnapshot::error(None)
        }
    }
}
