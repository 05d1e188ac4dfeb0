use std::time::Duration;

use clap::Parser;
use explorer_api_types_common::id::ObjectID;
use explorer_validator_table::{
    surface::Surface,
    table::{PlaceholderTable, Row, TableModel},
};
use url::Url;

use crate::cli::constants::{DEFAULT_OBJECT_ID, DEFAULT_REQUEST_TIMEOUT, DEFAULT_RPC_ENDPOINT};

const COLUMN_GAP: &str = "  ";
const PLACEHOLDER_CELL: &str = "░░░░░░░░░░░░";

#[derive(Debug, Parser)]
pub struct ValidatorsConfig {
    #[arg(long, env = "EXPLORER_RPC_ENDPOINT", help = "Set HTTP url of the full node JSON-RPC endpoint", default_value = DEFAULT_RPC_ENDPOINT)]
    pub rpc_endpoint: Url,

    #[arg(long, help = "Set HTTP request timeout for full node calls", default_value = DEFAULT_REQUEST_TIMEOUT, value_parser = duration_parser)]
    pub request_timeout: Duration,

    #[arg(long, help = "ID of the system state object", default_value = DEFAULT_OBJECT_ID)]
    pub object_id: ObjectID,

    #[arg(
        long,
        help = "Only show the first N validators by name. Shows all of them if omitted",
        value_parser = limit_parser
    )]
    pub limit: Option<usize>,
}

pub fn duration_parser(duration_string: &str) -> Result<Duration, String> {
    Ok(Duration::from_secs(duration_string.parse().map_err(
        |err| format!("Could not parse the request timeout: {err:?}"),
    )?))
}

pub fn limit_parser(limit_string: &str) -> Result<usize, String> {
    match limit_string.parse::<usize>() {
        Ok(0) => Err("limit must be greater than zero".to_string()),
        Ok(limit) => Ok(limit),
        Err(err) => Err(format!("Could not parse the limit: {err}")),
    }
}

/// Render a surface as plain text for the terminal.
pub fn render_text(surface: &Surface) -> String {
    match surface {
        Surface::Loading { placeholder } => render_placeholder(placeholder),
        Surface::Table { table, more } => {
            let mut output = render_table(table);
            if let Some(link) = more {
                output.push_str(&format!("\n{} ({})", link.label, link.href));
            }
            output
        }
        Surface::ErrorBanner { banner } => banner.message.clone(),
    }
}

fn render_table(table: &TableModel) -> String {
    let headings = table
        .columns
        .iter()
        .map(|column| column.header.clone())
        .collect::<Vec<_>>();
    let rows = table.data.iter().map(row_cells).collect::<Vec<_>>();

    let mut widths = headings.iter().map(|heading| heading.chars().count()).collect::<Vec<_>>();
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    std::iter::once(&headings)
        .chain(&rows)
        .map(|cells| format_line(cells, &widths))
        .collect::<Vec<_>>()
        .join("\n")
}

fn row_cells(row: &Row) -> Vec<String> {
    vec![
        row.name.clone(),
        row.address.clone(),
        format!("{} ({})", row.stake.amount, row.stake.percent_display),
    ]
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
        .trim_end()
        .to_string()
}

fn render_placeholder(placeholder: &PlaceholderTable) -> String {
    let headings = placeholder.col_headings.clone();
    let widths = headings
        .iter()
        .map(|heading| heading.chars().count().max(PLACEHOLDER_CELL.chars().count()))
        .collect::<Vec<_>>();
    let skeleton = vec![PLACEHOLDER_CELL.to_string(); headings.len()];

    std::iter::once(format_line(&headings, &widths))
        .chain((0..placeholder.row_count).map(|_| format_line(&skeleton, &widths)))
        .collect::<Vec<_>>()
        .join("\n")
}
