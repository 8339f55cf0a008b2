use anyhow::Result;
use panel_api::Payload;
use serde_json::{Map, Value};
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Json,
    Raw,
    Table,
    Markdown,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

// -- Cell and row builders --

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn build_field_rows(map: &Map<String, Value>) -> Vec<FieldRow> {
    map.iter()
        .map(|(field, value)| FieldRow {
            field: field.clone(),
            value: cell(value),
        })
        .collect()
}

/// Column names in first-seen order across all objects.
fn collect_columns(items: &[Value]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for item in items {
        if let Value::Object(map) = item {
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

/// Header row plus one row per item. Arrays that are not all objects get a
/// single `Value` column.
fn build_grid(items: &[Value]) -> Vec<Vec<String>> {
    if !items.iter().all(Value::is_object) {
        let mut grid = vec![vec!["Value".to_string()]];
        grid.extend(items.iter().map(|item| vec![cell(item)]));
        return grid;
    }

    let columns = collect_columns(items);
    let mut grid = vec![columns.clone()];
    for item in items {
        grid.push(
            columns
                .iter()
                .map(|column| item.get(column).map(cell).unwrap_or_default())
                .collect(),
        );
    }
    grid
}

fn build_table(value: &Value) -> Option<Table> {
    match value {
        Value::Array(items) if !items.is_empty() => {
            let mut builder = Builder::default();
            for record in build_grid(items) {
                builder.push_record(record);
            }
            Some(builder.build())
        }
        Value::Object(map) if !map.is_empty() => Some(Table::new(build_field_rows(map))),
        _ => None,
    }
}

// -- Rendering --

/// Renders a payload for stdout. An empty string means nothing is printed.
pub fn render(payload: &Payload, format: &OutputFormat) -> Result<String> {
    let rendered = match (payload, format) {
        (payload, OutputFormat::Raw) if payload.is_null() => String::new(),
        (Payload::Null, OutputFormat::Raw) => String::new(),
        (Payload::Text(text), OutputFormat::Raw) => text.clone(),
        (Payload::Json(value), OutputFormat::Raw) => value.to_string(),
        (Payload::Json(value), OutputFormat::Table | OutputFormat::Markdown) => {
            match build_table(value) {
                Some(mut table) => {
                    if *format == OutputFormat::Markdown {
                        table.with(Style::markdown());
                    }
                    table.to_string()
                }
                None => cell(value),
            }
        }
        (Payload::Text(text), OutputFormat::Table | OutputFormat::Markdown) => text.clone(),
        (Payload::Null, OutputFormat::Table | OutputFormat::Markdown) => String::new(),
        (payload, OutputFormat::Json) => {
            serde_json::to_string_pretty(&payload.clone().into_json())?
        }
    };
    Ok(rendered)
}

pub fn print_payload(payload: &Payload, format: &OutputFormat) -> Result<()> {
    let rendered = render(payload, format)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
