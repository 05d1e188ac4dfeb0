use std::sync::Arc;

use explorer_api_types_object::{
    object::ObjectResponse,
    system_state::{SystemState, ValidatorSetState},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    cache::TableCache,
    error::TableError,
    table::{PlaceholderTable, TableModel, build_table},
};

pub const ERROR_BANNER_MESSAGE: &str = "Validator data could not be loaded";
pub const MORE_VALIDATORS_LABEL: &str = "More Validators";
pub const VALIDATORS_ROUTE: &str = "/validators";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryStatus {
    Loading,
    Success,
    Error,
}

/// Snapshot of an asynchronous fetch. `data` may hold a stale value from an
/// earlier success while `status` reports a later failure.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySnapshot<T> {
    pub data: Option<T>,
    pub status: QueryStatus,
}

impl<T> QuerySnapshot<T> {
    pub fn loading() -> Self {
        Self {
            data: None,
            status: QueryStatus::Loading,
        }
    }

    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            status: QueryStatus::Success,
        }
    }

    pub fn error(stale: Option<T>) -> Self {
        Self {
            data: stale,
            status: QueryStatus::Error,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == QueryStatus::Loading
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BannerCause {
    FetchFailed,
    /// The fetch succeeded but produced no rows. Rendered the same as a failure.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub full_width: bool,
    pub message: String,
    pub cause: BannerCause,
}

impl Banner {
    fn error(cause: BannerCause) -> Self {
        Self {
            full_width: true,
            message: ERROR_BANNER_MESSAGE.to_string(),
            cause,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Surface {
    Loading {
        placeholder: PlaceholderTable,
    },
    Table {
        table: Arc<TableModel>,
        more: Option<NavLink>,
    },
    ErrorBanner {
        banner: Banner,
    },
}

impl Surface {
    pub fn is_error_banner(&self) -> bool {
        matches!(self, Surface::ErrorBanner { .. })
    }
}

/// Extract the validator set from a fetched system state object. Responses
/// without a Move object fall back to an empty set; a Move object whose fields
/// do not match is an error.
pub fn validator_set_from_response(
    response: &ObjectResponse,
) -> Result<ValidatorSetState, TableError> {
    let move_object = match response.as_move_object() {
        Ok(move_object) => move_object,
        Err(err) => {
            warn!("No validator set in object response, using fallback: {err}");
            return Ok(ValidatorSetState::fallback());
        }
    };

    let system_state = SystemState::from_move_object(move_object)?;
    if let Some(epoch) = system_state.epoch {
        debug!("Loaded validator set for epoch {epoch}");
    }
    Ok(system_state.into_validator_set())
}

/// The "top validators" surface. With a `limit`, only the first `limit`
/// validators are shown and a link to the full list is attached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TopValidators {
    pub limit: Option<usize>,
}

impl TopValidators {
    pub fn new(limit: Option<usize>) -> Self {
        Self { limit }
    }

    pub fn render(&self, query: &QuerySnapshot<ObjectResponse>) -> Result<Surface, TableError> {
        self.render_with(query, |state, limit| {
            build_table(state, limit).map(Arc::new)
        })
    }

    pub fn render_cached(
        &self,
        query: &QuerySnapshot<ObjectResponse>,
        cache: &TableCache,
    ) -> Result<Surface, TableError> {
        self.render_with(query, |state, limit| cache.get_or_build(state, limit))
    }

    fn render_with<F>(
        &self,
        query: &QuerySnapshot<ObjectResponse>,
        build: F,
    ) -> Result<Surface, TableError>
    where
        F: FnOnce(&ValidatorSetState, Option<usize>) -> Result<Arc<TableModel>, TableError>,
    {
        if query.is_error() {
            return Ok(Surface::ErrorBanner {
                banner: Banner::error(BannerCause::FetchFailed),
            });
        }

        if query.is_loading() {
            return Ok(Surface::Loading {
                placeholder: PlaceholderTable::new(self.limit),
            });
        }

        let state = match &query.data {
            Some(response) => validator_set_from_response(response)?,
            None => ValidatorSetState::fallback(),
        };
        let table = build(&state, self.limit)?;

        if table.is_empty() {
            return Ok(Surface::ErrorBanner {
                banner: Banner::error(BannerCause::Empty),
            });
        }

        Ok(Surface::Table {
            table,
            more: self.more_link(),
        })
    }

    fn more_link(&self) -> Option<NavLink> {
        self.limit.map(|_| NavLink {
            label: MORE_VALIDATORS_LABEL.to_string(),
            href: VALIDATORS_ROUTE.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;
    use base64::{Engine, engine::general_purpose::STANDARD};
    use explorer_api_types_common::id::SYSTEM_STATE_OBJECT_ID;
    use explorer_api_types_object::{
        object::{MoveObject, ObjectData, ParsedData},
        system_state::{
            MoveStruct, SYSTEM_STATE_TYPE, VALIDATOR_SET_TYPE, Validator, ValidatorMetadata,
        },
    };
    use tracing_test::traced_test;

    use super::*;
    use crate::error::DecodeError;

    fn validator(raw_name: String, stake: u64) -> Validator {
        Validator::new(
            ValidatorMetadata {
                name: raw_name,
                net_address: String::new(),
                pubkey_bytes: String::new(),
                sui_address: format!("0x{stake:x}"),
            },
            U256::from(stake),
            None,
        )
    }

    fn response_for(set: ValidatorSetState) -> ObjectResponse {
        let system_state = SystemState {
            epoch: Some(1),
            validators: MoveStruct::new(VALIDATOR_SET_TYPE, set),
        };
        ObjectResponse::from_data(ObjectData {
            object_id: SYSTEM_STATE_OBJECT_ID,
            version: 1,
            digest: "digest".to_string(),
            type_: Some(SYSTEM_STATE_TYPE.to_string()),
            content: Some(ParsedData::MoveObject(MoveObject {
                type_: SYSTEM_STATE_TYPE.to_string(),
                has_public_transfer: false,
                fields: serde_json::to_value(system_state).expect("serializes"),
            })),
        })
    }

    fn alpha_bravo() -> ObjectResponse {
        response_for(ValidatorSetState::new(
            U256::from(1000u64),
            vec![
                validator(STANDARD.encode("Bravo"), 300),
                validator(STANDARD.encode("Alpha"), 700),
            ],
        ))
    }

    fn rows(surface: &Surface) -> Vec<(String, String, String)> {
        match surface {
            Surface::Table { table, .. } => table
                .data
                .iter()
                .map(|row| {
                    (
                        row.name.clone(),
                        row.stake.amount.clone(),
                        row.stake.percent_display.clone(),
                    )
                })
                .collect(),
            other => panic!("expected a table, got {other:?}"),
        }
    }

    #[test]
    fn test_full_list_is_sorted() {
        let surface = TopValidators::new(None)
            .render(&QuerySnapshot::success(alpha_bravo()))
            .expect("renders");

        assert_eq!(
            rows(&surface),
            [
                ("Alpha".to_string(), "700".to_string(), "70.00%".to_string()),
                ("Bravo".to_string(), "300".to_string(), "30.00%".to_string()),
            ]
        );
        assert!(matches!(surface, Surface::Table { more: None, .. }));
    }

    #[test]
    fn test_limited_list_links_to_all_validators() {
        let surface = TopValidators::new(Some(1))
            .render(&QuerySnapshot::success(alpha_bravo()))
            .expect("renders");

        assert_eq!(
            rows(&surface),
            [("Alpha".to_string(), "700".to_string(), "70.00%".to_string())]
        );
        match surface {
            Surface::Table {
                more: Some(link), ..
            } => {
                assert_eq!(link.label, "More Validators");
                assert_eq!(link.href, "/validators");
            }
            other => panic!("expected a linked table, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_set_renders_same_banner_as_failure() {
        let empty = TopValidators::new(Some(10))
            .render(&QuerySnapshot::success(response_for(
                ValidatorSetState::fallback(),
            )))
            .expect("renders");
        let failed = TopValidators::new(Some(10))
            .render(&QuerySnapshot::error(None))
            .expect("renders");

        // Absence of validators is shown as a failure; only the cause differs.
        match (&empty, &failed) {
            (
                Surface::ErrorBanner {
                    banner: empty_banner,
                },
                Surface::ErrorBanner {
                    banner: failed_banner,
                },
            ) => {
                assert_eq!(empty_banner.message, failed_banner.message);
                assert_eq!(empty_banner.message, ERROR_BANNER_MESSAGE);
                assert!(empty_banner.full_width);
                assert_eq!(empty_banner.cause, BannerCause::Empty);
                assert_eq!(failed_banner.cause, BannerCause::FetchFailed);
            }
            other => panic!("expected two banners, got {other:?}"),
        }
    }

    #[test]
    fn test_error_wins_over_stale_data() {
        let surface = TopValidators::new(None)
            .render(&QuerySnapshot::error(Some(alpha_bravo())))
            .expect("renders");
        assert!(surface.is_error_banner());
    }

    #[test]
    fn test_loading_renders_placeholder() {
        let surface = TopValidators::new(Some(5))
            .render(&QuerySnapshot::loading())
            .expect("renders");
        match surface {
            Surface::Loading { placeholder } => assert_eq!(placeholder.row_count, 5),
            other => panic!("expected placeholder, got {other:?}"),
        }

        let surface = TopValidators::new(None)
            .render(&QuerySnapshot::loading())
            .expect("renders");
        assert!(matches!(
            surface,
            Surface::Loading { placeholder } if placeholder.row_count == 15
        ));
    }

    #[test]
    fn test_decode_error_propagates() {
        let response = response_for(ValidatorSetState::new(
            U256::from(10u64),
            vec![validator("***".to_string(), 10)],
        ));

        let result = TopValidators::new(None).render(&QuerySnapshot::success(response));
        assert!(matches!(
            result,
            Err(TableError::Decode(DecodeError::Base64(_)))
        ));
    }

    #[traced_test]
    #[test]
    fn test_package_content_falls_back_to_banner() {
        let response: ObjectResponse = serde_json::from_value(serde_json::json!({
            "data": {
                "objectId": "0x5",
                "version": "1",
                "digest": "d",
                "content": { "dataType": "package", "disassembled": {} }
            }
        }))
        .expect("valid response");

        let surface = TopValidators::new(None)
            .render(&QuerySnapshot::success(response))
            .expect("renders");
        assert!(surface.is_error_banner());
        assert!(logs_contain("using fallback"));
    }

    #[test]
    fn test_mismatched_fields_are_an_error() {
        let response = ObjectResponse::from_data(ObjectData {
            object_id: SYSTEM_STATE_OBJECT_ID,
            version: 1,
            digest: "d".to_string(),
            type_: None,
            content: Some(ParsedData::MoveObject(MoveObject {
                type_: SYSTEM_STATE_TYPE.to_string(),
                has_public_transfer: false,
                fields: serde_json::json!({ "validators": 5 }),
            })),
        });

        let result = TopValidators::new(None).render(&QuerySnapshot::success(response));
        assert!(matches!(result, Err(TableError::Shape(_))));
    }

    #[test]
    fn test_cached_render_matches_uncached() {
        let cache = TableCache::default();
        let query = QuerySnapshot::success(alpha_bravo());
        let top = TopValidators::new(Some(2));

        let cached = top.render_cached(&query, &cache).expect("renders");
        let again = top.render_cached(&query, &cache).expect("renders");
        let uncached = top.render(&query).expect("renders");

        assert_eq!(cached, uncached);
        assert_eq!(again, uncached);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_surface_serialization_is_tagged() {
        let surface = TopValidators::new(Some(1))
            .render(&QuerySnapshot::success(alpha_bravo()))
            .expect("renders");
        let value = serde_json::to_value(&surface).expect("serializes");

        assert_eq!(value["state"], "table");
        assert_eq!(value["more"]["href"], "/validators");
        assert_eq!(value["table"]["data"][0]["name"], "Alpha");
    }
}
