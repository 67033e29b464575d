use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use suffix_tree::{Text, TextError};

// Reads the whole file, keeps at most `limit` bytes of it and
// terminates it with the sentinel.
pub fn load_text(path: &Path, limit: Option<usize>, sentinel: u8) -> Result<Text> {
    let bytes =
        fs::read(path).with_context(|| format!("Could not read file `{}`", path.display()))?;
    trace!("Read {} bytes from `{}`", bytes.len(), path.display());

    prepare_text(bytes, limit, sentinel)
        .with_context(|| format!("`{}` cannot be used as suffix tree text", path.display()))
}

pub fn prepare_text(mut bytes: Vec<u8>, limit: Option<usize>, sentinel: u8) -> Result<Text, TextError> {
    if let Some(limit) = limit {
        bytes.truncate(limit);
    }

    let text = Text::terminated(bytes, sentinel);
    text.validate()?;
    Ok(text)
}
