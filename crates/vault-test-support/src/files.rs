//! Temporary files for exercising the upload flow.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

const SAMPLE_RATE: u32 = 8_000;
const BITS_PER_SAMPLE: u16 = 16;
const CHANNELS: u16 = 1;

/// A file inside its own temporary directory; both vanish on drop.
#[derive(Debug)]
pub struct TempUploadFile {
    _dir: TempDir,
    path: PathBuf,
}

impl TempUploadFile {
    /// Location of the file on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Write a silent PCM WAV file of `seconds` length named `file_name`.
///
/// # Errors
///
/// Returns an error when the temporary directory or file cannot be written.
pub fn wav_file(file_name: &str, seconds: u32) -> Result<TempUploadFile> {
    let bytes = silent_wav(seconds);
    write_temp(file_name, &bytes)
}

/// Write `contents` to a temporary file named `file_name`.
///
/// # Errors
///
/// Returns an error when the temporary directory or file cannot be written.
pub fn text_file(file_name: &str, contents: &str) -> Result<TempUploadFile> {
    write_temp(file_name, contents.as_bytes())
}

/// Bytes of a mono 16-bit PCM WAV holding `seconds` of silence.
#[must_use]
pub fn silent_wav(seconds: u32) -> Vec<u8> {
    let block_align = CHANNELS * (BITS_PER_SAMPLE / 8);
    let byte_rate = SAMPLE_RATE * u32::from(block_align);
    let data_len = byte_rate * seconds;

    let mut out = Vec::with_capacity(44 + data_len as usize);
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16_u32.to_le_bytes());
    out.extend_from_slice(&1_u16.to_le_bytes());
    out.extend_from_slice(&CHANNELS.to_le_bytes());
    out.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    out.extend_from_slice(&byte_rate.to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.resize(44 + data_len as usize, 0);
    out
}

fn write_temp(file_name: &str, bytes: &[u8]) -> Result<TempUploadFile> {
    let dir = tempfile::tempdir().context("failed to create temporary directory")?;
    let path = dir.path().join(file_name);
    fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(TempUploadFile { _dir: dir, path })
}
