// src/load/mod.rs

use anyhow::{bail, Context, Result};
use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;
use std::{fmt, path::Path};
use tracing::debug;

pub mod types;

pub use types::{Bill, Legislator, Vote, VoteResult};

/// The four input tables, addressed by logical name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableName {
    Legislators,
    Bills,
    Votes,
    VoteResults,
}

impl TableName {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableName::Legislators => "legislators",
            TableName::Bills => "bills",
            TableName::Votes => "votes",
            TableName::VoteResults => "vote_results",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.as_str())
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record type that is read from one of the named input tables.
pub trait InputRecord: DeserializeOwned {
    const TABLE: TableName;
}

/// Read `<data_dir>/<table>.csv` (header row required) into typed records.
///
/// Columns are matched by header name, so extra columns are ignored and a
/// missing column fails the whole table with the offending record index.
pub fn load_table<T: InputRecord>(data_dir: &Path) -> Result<Vec<T>> {
    let table = T::TABLE;
    let path = data_dir.join(table.file_name());
    if !path.is_file() {
        bail!("input table `{}` not found at {}", table, path.display());
    }

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .from_path(&path)
        .with_context(|| format!("opening input table `{}` at {}", table, path.display()))?;

    let mut rows = Vec::new();
    for (idx, result) in rdr.deserialize::<T>().enumerate() {
        let row = result.with_context(|| {
            format!("malformed input table `{}` at record {}", table, idx)
        })?;
        rows.push(row);
    }

    debug!(table = %table, rows = rows.len(), "loaded input table");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn file_names_follow_table_names() {
        assert_eq!(TableName::Legislators.file_name(), "legislators.csv");
        assert_eq!(TableName::Bills.file_name(), "bills.csv");
        assert_eq!(TableName::Votes.file_name(), "votes.csv");
        assert_eq!(TableName::VoteResults.file_name(), "vote_results.csv");
    }

    #[test]
    fn loads_legislators_ignoring_extra_columns() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("legislators.csv"),
            "id, name ,party\n1,Rep. Jair,D\n2,Rep. Jane Doe,R\n",
        )?;

        let rows: Vec<Legislator> = load_table(dir.path())?;
        assert_eq!(
            rows,
            vec![
                Legislator { id: 1, name: "Rep. Jair".into() },
                Legislator { id: 2, name: "Rep. Jane Doe".into() },
            ]
        );
        Ok(())
    }

    #[test]
    fn empty_sponsor_cell_is_none() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("bills.csv"),
            "id,title,sponsor_id\n100,Test Bill 1,1\n101,Test Bill 2,\n",
        )?;

        let rows: Vec<Bill> = load_table(dir.path())?;
        assert_eq!(rows[0].sponsor_id, Some(1));
        assert_eq!(rows[1].sponsor_id, None);
        Ok(())
    }

    #[test]
    fn header_only_table_is_empty() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("vote_results.csv"),
            "id,legislator_id,vote_id,vote_type\n",
        )?;

        let rows: Vec<VoteResult> = load_table(dir.path())?;
        assert!(rows.is_empty());
        Ok(())
    }

    #[test]
    fn missing_table_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_table::<Vote>(dir.path()).unwrap_err();
        assert!(err.to_string().contains("input table `votes` not found"));
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("votes.csv"), "id\n200\n").unwrap();
        let err = load_table::<Vote>(dir.path()).unwrap_err();
        assert!(err
            .to_string()
            .contains("malformed input table `votes` at record 0"));
    }

    #[test]
    fn missing_sponsor_column_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("bills.csv"), "id,title\n100,T1\n").unwrap();
        let err = load_table::<Bill>(dir.path()).unwrap_err();
        assert!(err
            .to_string()
            .contains("malformed input table `bills` at record 0"));
    }

    #[test]
    fn quoted_field_padding_is_kept() -> Result<()> {
        let dir = tempdir()?;
        fs::write(
            dir.path().join("legislators.csv"),
            "id,name\n1,\"  Rep. X  \"\n",
        )?;

        let rows: Vec<Legislator> = load_table(dir.path())?;
        assert_eq!(rows[0].name, "  Rep. X  ");
        Ok(())
    }

    #[test]
    fn unparseable_value_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("vote_results.csv"),
            "id,legislator_id,vote_id,vote_type\n1,1,200,1\n2,1,200,yes\n",
        )
        .unwrap();
        let err = load_table::<VoteResult>(dir.path()).unwrap_err();
        assert!(err
            .to_string()
            .contains("malformed input table `vote_results` at record 1"));
    }
}
