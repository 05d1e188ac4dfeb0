use explorer_api_types_object::system_state::ValidatorSetState;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::{
    error::TableError,
    projection::{ValidatorView, project_state},
    rank::rank,
    stake::format_percent,
};

pub const COLUMN_HEADINGS: [&str; 3] = ["Name", "Address", "Stake"];
pub const COLUMN_ACCESSORS: [&str; 3] = ["name", "address", "stake"];
pub const DEFAULT_PLACEHOLDER_ROWS: usize = 15;
pub const PLACEHOLDER_ROW_HEIGHT: &str = "13px";
pub const PLACEHOLDER_COLUMN_WIDTH: &str = "220px";
pub const ADDRESS_ROUTE: &str = "/addresses";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub header: String,
    pub accessor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StakeCell {
    pub amount: String,
    pub percent: Decimal,
    pub percent_display: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressLink {
    pub address: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub name: String,
    pub address: String,
    pub stake: StakeCell,
    pub address_link: AddressLink,
}

impl From<&ValidatorView> for Row {
    fn from(view: &ValidatorView) -> Self {
        Self {
            name: view.name.clone(),
            address: view.address.clone(),
            stake: StakeCell {
                amount: view.stake.to_string(),
                percent: view.stake_percent,
                percent_display: format_percent(view.stake_percent),
            },
            address_link: AddressLink {
                address: view.address.clone(),
                href: format!("{ADDRESS_ROUTE}/{}", view.address),
            },
        }
    }
}

/// Presentation-layer table description, independent of any renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableModel {
    pub data: Vec<Row>,
    pub columns: Vec<ColumnSpec>,
}

impl TableModel {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

pub fn columns() -> Vec<ColumnSpec> {
    COLUMN_HEADINGS
        .into_iter()
        .zip(COLUMN_ACCESSORS)
        .map(|(header, accessor)| ColumnSpec {
            header: header.to_string(),
            accessor: accessor.to_string(),
        })
        .collect()
}

/// Project, rank and lay out the validator set as table rows.
pub fn build_table(
    state: &ValidatorSetState,
    limit: Option<usize>,
) -> Result<TableModel, TableError> {
    let views = project_state(state)?;
    let data = rank(&views, limit).iter().map(Row::from).collect();

    Ok(TableModel {
        data,
        columns: columns(),
    })
}

/// Skeleton shown while the validator set is loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderTable {
    pub row_count: usize,
    pub row_height: String,
    pub col_headings: Vec<String>,
    pub col_widths: Vec<String>,
}

impl PlaceholderTable {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            row_count: limit.unwrap_or(DEFAULT_PLACEHOLDER_ROWS),
            row_height: PLACEHOLDER_ROW_HEIGHT.to_string(),
            col_headings: COLUMN_HEADINGS.map(String::from).to_vec(),
            col_widths: vec![PLACEHOLDER_COLUMN_WIDTH.to_string(); COLUMN_HEADINGS.len()],
        }
    }
}
