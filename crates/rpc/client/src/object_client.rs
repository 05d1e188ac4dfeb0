use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use explorer_api_types_common::id::ObjectID;
use explorer_api_types_object::object::ObjectResponse;
use reqwest::Url;
use serde_json::json;
use tracing::debug;

use crate::{
    error::ClientError,
    http_client::ClientWithBaseUrl,
    json_rpc::{JsonRpcRequest, JsonRpcResponse, ObjectDataOptions},
    source::ObjectSource,
};

pub const GET_OBJECT_METHOD: &str = "sui_getObject";

/// JSON-RPC client for a full node's object read API.
#[derive(Debug, Clone)]
pub struct ObjectApiClient {
    http_client: ClientWithBaseUrl,
    next_request_id: Arc<AtomicU64>,
}

impl ObjectApiClient {
    pub fn new(rpc_endpoint: Url, request_timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            http_client: ClientWithBaseUrl::new(rpc_endpoint, request_timeout)?,
            next_request_id: Arc::new(AtomicU64::new(1)),
        })
    }

    pub fn endpoint(&self) -> &Url {
        self.http_client.base_url()
    }

    pub async fn get_object(&self, object_id: ObjectID) -> Result<ObjectResponse, ClientError> {
        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        let request = JsonRpcRequest::new(
            request_id,
            GET_OBJECT_METHOD,
            json!([object_id, ObjectDataOptions::with_content()]),
        );
        debug!("{GET_OBJECT_METHOD} #{request_id} for {object_id}");

        let response = self
            .http_client
            .execute(self.http_client.post("")?.json(&request).build()?)
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::RequestFailed {
                status_code: response.status(),
            });
        }

        response
            .json::<JsonRpcResponse<ObjectResponse>>()
            .await?
            .into_result()
    }
}

#[async_trait]
impl ObjectSource for ObjectApiClient {
    async fn get_object(&self, object_id: ObjectID) -> Result<ObjectResponse, ClientError> {
        ObjectApiClient::get_object(self, object_id).await
    }
}
