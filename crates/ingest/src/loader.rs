//! Dataset loading: single CSV files and folders of them.
//!
//! The loader is the boundary that enforces the analysis core's input
//! contract: every record it emits has non-negative counts and a
//! precomputed ratio, and malformed rows never leave this layer.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use taglens_core::{Error, Record, Result};
use tracing::{debug, info};

use crate::csv::{parse_row, split_csv_line};

/// Load records from a single CSV file.
///
/// The header line is skipped, blank lines are skipped, and rows that
/// fail to parse are counted and dropped. Only I/O failures are errors.
pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 || line.is_empty() {
            continue;
        }

        let fields = split_csv_line(&line);
        match parse_row(&fields) {
            Some(record) => records.push(record),
            None => skipped += 1,
        }
    }

    debug!(
        path = %path.display(),
        rows = records.len(),
        skipped,
        "loaded dataset file"
    );
    Ok(records)
}

/// Load and concatenate every `*.csv` file directly under a folder.
///
/// Files load in directory-iteration order; subfolders are not entered.
/// A folder with no CSV files is a dataset error, not an empty result.
pub fn load_dir(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let mut all = Vec::new();
    let mut files = 0usize;

    for entry in std::fs::read_dir(path)? {
        let entry = entry?;
        let file_path = entry.path();
        if file_path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }

        let records = load_file(&file_path)?;
        info!(
            file = %file_path.display(),
            rows = records.len(),
            "loaded dataset file"
        );
        all.extend(records);
        files += 1;
    }

    if files == 0 {
        return Err(Error::Dataset(format!(
            "no CSV files found in {}",
            path.display()
        )));
    }

    info!(files, total_rows = all.len(), "dataset loaded");
    Ok(all)
}

/// Load a dataset from a path, dispatching on file vs directory.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    if path.is_dir() {
        load_dir(path)
    } else {
        load_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const HEADER: &str = "video_id,trending_date,title,channel_title,category_id,publish_time,tags,views,likes,dislikes,comment_count,thumbnail_link,comments_disabled,ratings_disabled,video_error_or_removed,description";

    fn write_csv(dir: &Path, name: &str, rows: &[&str]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        writeln!(f, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(f, "{}", row).unwrap();
        }
        path
    }

    fn data_row(title: &str, tags: &str, views: &str, likes: &str) -> String {
        format!(
            "id,17.01.01,{},channel,10,2017-01-01T00:00:00.000Z,{},{},{},0,0,link,False,False,False,desc",
            title, tags, views, likes
        )
    }

    #[test]
    fn test_load_file_skips_header_and_bad_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "us.csv",
            &[
                &data_row("First", "music|pop", "1000", "100"),
                "short,row",
                &data_row("Second", "gaming", "200", "bad-number"),
                &data_row("Third", "news", "500", "50"),
            ],
        );

        let records = load_file(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "First");
        assert_eq!(records[0].tags, vec!["music", "pop"]);
        assert_eq!(records[1].title, "Third");
    }

    #[test]
    fn test_load_file_quoted_title() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(
            dir.path(),
            "us.csv",
            &[&data_row("\"Hello, World\"", "music", "100", "10")],
        );

        let records = load_file(&path).unwrap();
        assert_eq!(records[0].title, "Hello, World");
    }

    #[test]
    fn test_load_file_missing_is_io_error() {
        let err = load_file("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_dir_concatenates_csv_files() {
        let dir = tempfile::tempdir().unwrap();
        write_csv(dir.path(), "a.csv", &[&data_row("A", "music", "100", "10")]);
        write_csv(dir.path(), "b.csv", &[&data_row("B", "music", "100", "20")]);
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let records = load_dir(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_load_dir_without_csv_is_dataset_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let err = load_dir(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
    }

    #[test]
    fn test_load_dispatches_on_path_kind() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_csv(dir.path(), "a.csv", &[&data_row("A", "music", "100", "10")]);

        assert_eq!(load(&file).unwrap().len(), 1);
        assert_eq!(load(dir.path()).unwrap().len(), 1);
    }
}
