//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use pdguard_schemas::{AttributeValue, Entity};
use serde_json::json;

use crate::error::CliError;

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let kind = error
        .downcast_ref::<CliError>()
        .map_or("internal", CliError::kind);
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": kind
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

/// Print the record as persisted by the pipeline
pub fn print_record(record: &Entity, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "record": record
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format record as JSON: {e}"),
        }
        return;
    }

    let id = record.id.map(|id| id.to_string()).unwrap_or_default();
    println!(
        "{} {} ({})",
        "✓".green(),
        record.logical_name.bold(),
        id.dimmed()
    );
    for (name, value) in record.attributes.iter() {
        println!("  {}: {}", name, format_value(value));
    }
}

/// Print the digits-only projection of a value
pub fn print_normalized(input: &str, normalized: Option<&str>, json: bool) {
    if json {
        let output = json!({
            "success": true,
            "input": input,
            "normalized": normalized
        });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format result as JSON: {e}"),
        }
        return;
    }

    match normalized {
        Some(digits) => println!("{digits}"),
        None => println!("{}", "(no digits)".yellow()),
    }
}

fn format_value(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Null => "null".dimmed().to_string(),
        AttributeValue::Text(text) => text.clone(),
        AttributeValue::Integer(n) => n.to_string(),
        AttributeValue::Boolean(b) => b.to_string(),
        AttributeValue::Guid(id) => id.to_string(),
    }
}
