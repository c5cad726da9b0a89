//! Rendering of shaped tables: text table, JSON records, or CSV.

use std::io::Write;

use anyhow::Result;
use serde_json::{Map, Value};
use alphavantage_api::Table;
use tabled::builder::Builder;
use tabled::settings::Style;

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

pub fn print_result(table: &Table, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_table(table),
        OutputFormat::Json => print_json(table)?,
        OutputFormat::Csv => {
            write_csv(table, std::io::stdout())?;
        }
    }
    Ok(())
}

fn has_keys(table: &Table) -> bool {
    table.index.is_some() || table.rows.iter().any(|row| row.key.is_some())
}

/// Header plus rows, with the index column (named or not) leading when the
/// table is keyed.
fn grid(table: &Table) -> Vec<Vec<String>> {
    let keyed = has_keys(table);
    let mut records = Vec::with_capacity(table.rows.len() + 1);
    let mut header = Vec::new();
    if keyed {
        header.push(table.index.clone().unwrap_or_default());
    }
    header.extend(table.columns.iter().cloned());
    records.push(header);
    for row in &table.rows {
        let mut record = Vec::new();
        if keyed {
            record.push(row.key.clone().unwrap_or_default());
        }
        record.extend(row.values.iter().cloned());
        records.push(record);
    }
    records
}

fn print_table(table: &Table) {
    let mut builder = Builder::default();
    for record in grid(table) {
        builder.push_record(record);
    }
    let mut rendered = builder.build();
    rendered.with(Style::psql());
    println!("{rendered}");
}

/// One JSON object per row; a row key appears under the index name, or
/// `"index"` when the payload's index was unnamed.
pub(crate) fn records(table: &Table) -> Vec<Value> {
    table
        .rows
        .iter()
        .map(|row| {
            let mut record = Map::new();
            if let Some(key) = &row.key {
                let name = table.index.clone().unwrap_or_else(|| "index".to_string());
                record.insert(name, Value::String(key.clone()));
            }
            for (column, value) in table.columns.iter().zip(&row.values) {
                record.insert(column.clone(), Value::String(value.clone()));
            }
            Value::Object(record)
        })
        .collect()
}

fn print_json(table: &Table) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&records(table))?);
    Ok(())
}

pub(crate) fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    for record in grid(table) {
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
