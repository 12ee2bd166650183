//! Batch file reading for dotenv-style KEY=value files.

use std::path::Path;

use crate::error::Result;

/// Read every KEY=value pair from a dotenv-style file, in file order.
///
/// Standard dotenv syntax applies: comments, blank lines, and quoting are
/// handled the same way as the credentials dotfile. The process environment
/// is not touched.
///
/// # Errors
///
/// Returns `Error::Dotenv` if the file cannot be read or a line does not
/// parse.
pub fn read(path: &Path) -> Result<Vec<(String, String)>> {
    let mut pairs = Vec::new();
    for item in dotenvy::from_path_iter(path)? {
        pairs.push(item?);
    }
    Ok(pairs)
}
