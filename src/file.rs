// src/file.rs

use std::{
    fs::{self, File, OpenOptions},
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use crate::error::TableError;
use crate::specs::COLUMNS;

/// How a row reached the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteKind {
    /// File created/truncated, header written, then the row.
    Initialized,
    Appended,
}

/// The single writer of an output table.
///
/// Every write reopens the file, so rows already written survive a crash
/// mid-run. The header is written exactly once, by the first accepted row.
#[derive(Debug)]
pub struct TableWriter {
    path: PathBuf,
    initialized: bool,
    rows_written: usize,
}

impl TableWriter {
    /// Fresh table; the first write truncates whatever is at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), initialized: false, rows_written: 0 }
    }

    /// Continue an existing table if its header is ours.
    /// A missing or empty file behaves like `new`.
    pub fn resume(path: impl Into<PathBuf>) -> Result<Self, TableError> {
        let path = path.into();
        let initialized = match read_first_line(&path)? {
            None => false,
            Some(line) if line_matches_header(&line) => true,
            Some(_) => return Err(TableError::HeaderMismatch { path }),
        };
        logd!("Table: resume {} (initialized={})", path.display(), initialized);
        Ok(Self { path, initialized, rows_written: 0 })
    }

    pub fn path(&self) -> &Path { &self.path }
    pub fn is_initialized(&self) -> bool { self.initialized }

    /// Rows written by this writer (not counting rows already in a resumed file).
    pub fn rows_written(&self) -> usize { self.rows_written }

    /// Initialize on first use, append afterwards.
    pub fn write(&mut self, row: &[String]) -> Result<WriteKind, TableError> {
        if self.initialized {
            self.append(row)?;
            Ok(WriteKind::Appended)
        } else {
            self.init_with_header(row)?;
            Ok(WriteKind::Initialized)
        }
    }

    /// Create/truncate the file, write the header and `row`.
    pub fn init_with_header(&mut self, row: &[String]) -> Result<(), TableError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent).map_err(|source| self.io_err(source))?;
            }
        }
        let file = File::create(&self.path).map_err(|source| self.io_err(source))?;
        let mut w = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        w.write_record(COLUMNS).map_err(|source| self.csv_err(source))?;
        w.write_record(row).map_err(|source| self.csv_err(source))?;
        w.flush().map_err(|source| self.io_err(source))?;

        self.initialized = true;
        self.rows_written += 1;
        logf!("Table: created {}", self.path.display());
        Ok(())
    }

    /// Append one row without a header. The table must be initialized.
    pub fn append(&mut self, row: &[String]) -> Result<(), TableError> {
        if !self.initialized {
            return Err(TableError::NotInitialized { path: self.path.clone() });
        }
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| self.io_err(source))?;
        let mut w = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        w.write_record(row).map_err(|source| self.csv_err(source))?;
        w.flush().map_err(|source| self.io_err(source))?;

        self.rows_written += 1;
        Ok(())
    }

    fn io_err(&self, source: std::io::Error) -> TableError {
        TableError::Io { path: self.path.clone(), source }
    }

    fn csv_err(&self, source: csv::Error) -> TableError {
        TableError::Csv { path: self.path.clone(), source }
    }
}

fn read_first_line(path: &Path) -> Result<Option<String>, TableError> {
    if !path.exists() {
        return Ok(None);
    }
    let io_err = |source| TableError::Io { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(io_err)?;
    let mut line = s!();
    BufReader::new(file).read_line(&mut line).map_err(io_err)?;
    let line = line.trim_end_matches(['\r', '\n']);
    Ok(if line.is_empty() { None } else { Some(s!(line)) })
}

fn line_matches_header(line: &str) -> bool {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();
    cells.len() == COLUMNS.len() && cells.iter().zip(COLUMNS.iter()).all(|(a, b)| a == b)
}

pub fn ensure_directory(dir: &Path) -> std::io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
