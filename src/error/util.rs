//! Utility functions for error handling
//!
//! This module provides utility functions to make error handling more convenient.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{RankError, Result};

/// Safely open a file with rich error information
///
/// # Arguments
/// * `path` - The path to the file to open
/// * `purpose` - Why the file is being opened (for error context)
pub fn safe_open_file(path: &Path, purpose: &str) -> Result<fs::File> {
    if !path.exists() {
        return Err(RankError::io(
            format!("file not found while {purpose}"),
            path,
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        ));
    }

    if !path.is_file() {
        return Err(RankError::io(
            format!("path is not a file while {purpose}"),
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "expected a file"),
        ));
    }

    fs::File::open(path).map_err(|e| RankError::io(format!("failed to open file for {purpose}"), path, e))
}

/// Check that a directory exists and is readable, with rich error information
pub fn validate_directory(path: &Path, purpose: &str) -> Result<()> {
    if !path.exists() {
        return Err(RankError::InvalidDirectory {
            path: path.to_path_buf(),
            message: format!("directory not found ({purpose})"),
        });
    }

    if !path.is_dir() {
        return Err(RankError::InvalidDirectory {
            path: path.to_path_buf(),
            message: format!("path is not a directory ({purpose})"),
        });
    }

    // Confirm readability up front rather than failing mid-walk
    fs::read_dir(path).map_err(|e| RankError::io(format!("failed to read directory for {purpose}"), path, e))?;

    Ok(())
}
