//! CLI presentation: text and JSON rendering of command results.

use crate::config::ConfigMap;
use crate::error::SharedConfError;
use comfy_table::Table;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// Result of `sharedconf resolve`
#[derive(Debug, Serialize)]
pub struct ResolveReport {
    pub docset: String,
    pub srcdir: PathBuf,
    pub defaulted: bool,
    pub restricted_overrides: Vec<String>,
}

/// One row of `sharedconf list`
#[derive(Debug, Serialize)]
pub struct DocsetRow {
    pub name: String,
    pub path: PathBuf,
    pub overrides: Vec<String>,
    pub default: bool,
    pub active: bool,
}

fn to_json<T: Serialize>(value: &T) -> Result<String, SharedConfError> {
    serde_json::to_string_pretty(value).map_err(|e| SharedConfError::ConfigError(e.to_string()))
}

pub fn format_resolve_report(report: &ResolveReport, format: &str) -> Result<String, SharedConfError> {
    if format == "json" {
        return to_json(report);
    }
    let mut s = format!(
        "Docset: {}{}\nSource directory: {}",
        report.docset,
        if report.defaulted { " (default)" } else { "" },
        report.srcdir.display()
    );
    if !report.restricted_overrides.is_empty() {
        s.push_str(&format!(
            "\nBuild-global overrides: {}",
            report.restricted_overrides.join(", ")
        ));
    }
    Ok(s)
}

/// Render a single option value; strings are printed bare in text mode
pub fn format_option(key: &str, value: &Value, format: &str) -> Result<String, SharedConfError> {
    if format == "json" {
        let mut table = ConfigMap::new();
        table.insert(key.to_string(), value.clone());
        return to_json(&table);
    }
    Ok(match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

pub fn format_options(values: &ConfigMap, format: &str) -> Result<String, SharedConfError> {
    if format == "json" {
        return to_json(values);
    }
    Ok(values
        .iter()
        .map(|(key, value)| format!("{} = {}", key, value))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn format_docset_list(rows: &[DocsetRow], format: &str) -> Result<String, SharedConfError> {
    if format == "json" {
        return to_json(&rows);
    }
    if rows.is_empty() {
        return Ok("No docsets configured.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Docset", "Path", "Overrides", "Default", "Active"]);
    for row in rows {
        let overrides = if row.overrides.is_empty() {
            "-".to_string()
        } else {
            row.overrides.join(", ")
        };
        table.add_row(vec![
            row.name.clone(),
            row.path.display().to_string(),
            overrides,
            (if row.default { "yes" } else { "" }).to_string(),
            (if row.active { "*" } else { "" }).to_string(),
        ]);
    }
    Ok(table.to_string())
}
