use crate::clean::CleanOptions;
use crate::errors::Error;
use crate::feature_collection::{process_feature_collection, CleanReport};
use serde_json::Value;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// Clean a GeoJSON FeatureCollection held in memory; the result is compact JSON.
pub fn clean_str(input: &str, options: &CleanOptions) -> Result<(String, CleanReport), Error> {
    let mut document: Value = serde_json::from_str(input)?;
    let report = process_feature_collection(&mut document, options)?;
    Ok((serde_json::to_string(&document)?, report))
}

/// Read `input`, clean it and write compact JSON to `output`.
///
/// Output goes to a temporary file next to `output` that is renamed into
/// place only once fully written; on any error `output` is not created.
pub fn clean_file(input: &Path, output: &Path, options: &CleanOptions) -> Result<CleanReport, Error> {
    let contents = fs::read_to_string(input).map_err(|source| Error::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let mut document: Value = serde_json::from_str(&contents)?;
    drop(contents);

    let report = process_feature_collection(&mut document, options)?;
    write_compact(output, &document)?;
    info!(
        output = %output.display(),
        cleaned = report.cleaned,
        removed = report.total_removed(),
        "wrote cleaned collection"
    );
    Ok(report)
}

fn write_compact(target: &Path, document: &Value) -> Result<(), Error> {
    let write_error = |source| Error::Write {
        path: target.to_path_buf(),
        source,
    };
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    let mut writer = BufWriter::new(tmp);
    serde_json::to_writer(&mut writer, document)?;
    writer.flush().map_err(write_error)?;
    let tmp = writer
        .into_inner()
        .map_err(|e| write_error(e.into_error()))?;
    tmp.persist(target).map_err(|e| write_error(e.error))?;
    Ok(())
}
