// src/write/mod.rs

use anyhow::{Context, Result};
use arrow::{
    array::ArrayRef, csv::WriterBuilder, datatypes::Schema as ArrowSchema,
    record_batch::RecordBatch,
};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::info;

/// A row type of one of the output reports.
/// - `NAME` is the logical output name (file stem).
/// - `schema` fixes column names, order and types; downstream consumers read the header.
pub trait ReportTable: Sized {
    const NAME: &'static str;
    /// Arrow schema for the whole report
    fn schema() -> ArrowSchema;
    /// Convert rows into column arrays matching the schema
    fn to_arrays(rows: &[Self]) -> Vec<ArrayRef>;
}

/// Package report rows into a single RecordBatch.
pub fn to_record_batch<R: ReportTable>(rows: &[R]) -> Result<RecordBatch> {
    RecordBatch::try_new(Arc::new(R::schema()), R::to_arrays(rows))
        .with_context(|| format!("building record batch for `{}`", R::NAME))
}

/// Write `rows` to `<output_dir>/<NAME>.csv`, replacing any previous output.
///
/// The CSV goes to a `.tmp` sibling first and is renamed into place once
/// fully flushed; on failure the temporary file is removed.
pub fn write_report<R: ReportTable>(output_dir: &Path, rows: &[R]) -> Result<PathBuf> {
    let batch = to_record_batch(rows)?;
    let path = output_dir.join(format!("{}.csv", R::NAME));
    let tmp_path = path.with_extension("csv.tmp");

    if let Err(e) = write_csv(&tmp_path, &batch) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, &path).with_context(|| {
        format!(
            "failed to rename `{}` to `{}`",
            tmp_path.display(),
            path.display()
        )
    })?;

    info!("Generated {} with {} records", path.display(), batch.num_rows());
    Ok(path)
}

fn write_csv(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not create output file `{}`", path.display()))?;
    let mut writer = WriterBuilder::new()
        .with_header(true)
        .build(BufWriter::new(file));
    writer
        .write(batch)
        .with_context(|| format!("writing CSV to `{}`", path.display()))?;
    writer
        .into_inner()
        .flush()
        .with_context(|| format!("flushing `{}`", path.display()))?;
    Ok(())
}
