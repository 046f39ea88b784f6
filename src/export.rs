//! Download formats for a float dataset.
//!
//! Every format carries the same row projection: float name, position, the
//! five physical measurements plus pH, and the reading timestamp.

use std::{fmt::Write as _, str::FromStr};

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::models::{timestamp_format, FloatReading};

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    NetCdf,
}

impl ExportFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
            ExportFormat::NetCdf => "application/x-netcdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::NetCdf => "nc",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "netcdf" | "nc" => Ok(ExportFormat::NetCdf),
            other => Err(anyhow!("unsupported export format: {other}")),
        }
    }
}

/// One exported record.
#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    float_id: &'a str,
    latitude: f64,
    longitude: f64,
    temperature: f64,
    salinity: f64,
    pressure: f64,
    depth: f64,
    oxygen: f64,
    ph: f64,
    timestamp: String,
}

const COLUMNS: [&str; 10] = [
    "float_id",
    "latitude",
    "longitude",
    "temperature",
    "salinity",
    "pressure",
    "depth",
    "oxygen",
    "ph",
    "timestamp",
];

impl<'a> From<&'a FloatReading> for ExportRow<'a> {
    fn from(f: &'a FloatReading) -> Self {
        Self {
            float_id: &f.name,
            latitude: f.lat,
            longitude: f.lng,
            temperature: f.temperature,
            salinity: f.salinity,
            pressure: f.pressure,
            depth: f.depth,
            oxygen: f.oxygen,
            ph: f.ph,
            timestamp: f.timestamp.format(timestamp_format::FORMAT).to_string(),
        }
    }
}

/// Render `floats` in the requested format.
pub fn export(floats: &[FloatReading], format: ExportFormat) -> Result<String> {
    // ---
    let rows: Vec<ExportRow<'_>> = floats.iter().map(ExportRow::from).collect();
    match format {
        ExportFormat::Csv => Ok(to_csv(&rows)),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
        ExportFormat::NetCdf => Ok(to_netcdf(&rows)),
    }
}

fn to_csv(rows: &[ExportRow<'_>]) -> String {
    // ---
    if rows.is_empty() {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(COLUMNS.join(","));
    for r in rows {
        lines.push(
            [
                csv_field(r.float_id),
                r.latitude.to_string(),
                r.longitude.to_string(),
                r.temperature.to_string(),
                r.salinity.to_string(),
                r.pressure.to_string(),
                r.depth.to_string(),
                r.oxygen.to_string(),
                r.ph.to_string(),
                csv_field(&r.timestamp),
            ]
            .join(","),
        );
    }
    lines.join("\n")
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// CDL-style text dump with one variable per column over a `profile`
/// dimension.
fn to_netcdf(rows: &[ExportRow<'_>]) -> String {
    // ---
    let mut out = String::new();
    let _ = writeln!(out, "netcdf ocean_data {{");
    let _ = writeln!(out, "dimensions:");
    let _ = writeln!(out, "    profile = {} ;", rows.len());
    let _ = writeln!(out, "variables:");
    let _ = writeln!(out, "    string float_id(profile) ;");
    for name in &COLUMNS[1..9] {
        let _ = writeln!(out, "    double {name}(profile) ;");
    }
    let _ = writeln!(out, "    string timestamp(profile) ;");
    let _ = writeln!(out, "data:");

    let numeric: [(&str, fn(&ExportRow<'_>) -> f64); 8] = [
        ("latitude", |r| r.latitude),
        ("longitude", |r| r.longitude),
        ("temperature", |r| r.temperature),
        ("salinity", |r| r.salinity),
        ("pressure", |r| r.pressure),
        ("depth", |r| r.depth),
        ("oxygen", |r| r.oxygen),
        ("ph", |r| r.ph),
    ];

    for (i, r) in rows.iter().enumerate() {
        let _ = writeln!(out, "    float_id[{i}] = {} ;", cdl_string(r.float_id));
    }
    for (name, get) in numeric {
        for (i, r) in rows.iter().enumerate() {
            let _ = writeln!(out, "    {name}[{i}] = {} ;", get(r));
        }
    }
    for (i, r) in rows.iter().enumerate() {
        let _ = writeln!(out, "    timestamp[{i}] = {} ;", cdl_string(&r.timestamp));
    }
    out.push('}');
    out
}

fn cdl_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}
