//! Assertions on files by path.

use crate::errors::GtError;
use crate::eval::file_exists;
use crate::meta::{chain_methods, TestMeta};
use crate::reporter::Reporter;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Checks on the file at a path.
#[derive(Debug, Clone)]
pub struct FileTest<'a> {
    meta: TestMeta<'a>,
    path: PathBuf,
}

/// Start a chain of checks on the file at `path`.
///
/// ```
/// let t = gt::Recorder::new();
/// gt::file(&t, "Cargo.toml")
///     .exists()
///     .string(|t, s| {
///         gt::string(t, s).contains("[package]");
///     });
/// assert_eq!(t.errors(), 0);
/// ```
pub fn file(t: &dyn Reporter, path: impl AsRef<Path>) -> FileTest<'_> {
    FileTest {
        meta: TestMeta::new(t),
        path: path.as_ref().to_path_buf(),
    }
}

/// Short form of [`file`].
pub fn f(t: &dyn Reporter, path: impl AsRef<Path>) -> FileTest<'_> {
    file(t, path)
}

impl<'a> FileTest<'a> {
    chain_methods!();

    fn io_error(&self, action: &'static str, source: std::io::Error) -> GtError {
        GtError::Io {
            action,
            path: self.path.display().to_string(),
            source,
        }
    }

    #[track_caller]
    pub fn exists(self) -> Self {
        if !file_exists(&self.path) {
            self.meta
                .report(format!("file should exist, {}", self.path.display()));
        }
        self
    }

    #[track_caller]
    pub fn not_exists(self) -> Self {
        if file_exists(&self.path) {
            self.meta
                .report(format!("file should not exist, {}", self.path.display()));
        }
        self
    }

    /// Read the whole file as UTF-8 and pass it to `f`.
    ///
    /// A read failure is reported and `f` is not called.
    #[track_caller]
    pub fn string(self, f: impl FnOnce(&dyn Reporter, &str)) -> Self {
        log::debug!("reading {}", self.path.display());
        match fs::read_to_string(&self.path) {
            Ok(data) => self.meta.with_reporter(|t| f(t, &data)),
            Err(source) => self
                .meta
                .report(self.io_error("failed to read", source).to_string()),
        }
        self
    }

    /// Open the file and pass the handle to `f`.
    ///
    /// An open failure is reported and `f` is not called.
    #[track_caller]
    pub fn reader(self, f: impl FnOnce(&dyn Reporter, &mut dyn Read)) -> Self {
        log::debug!("opening {}", self.path.display());
        match File::open(&self.path) {
            Ok(mut handle) => self.meta.with_reporter(|t| f(t, &mut handle)),
            Err(source) => self
                .meta
                .report(self.io_error("failed to open", source).to_string()),
        }
        self
    }
}
