//! Transient staging of uploaded videos.
//!
//! Frame-reading backends open videos by path, so each uploaded byte stream
//! is copied to a uniquely named temporary file first. The staged copy lives
//! exactly as long as the `StagedVideo` value: dropping it deletes the file,
//! on success, early termination, and error paths alike. Unique names keep
//! concurrent runs from clobbering each other's staged files.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

/// A video staged to temporary storage for the duration of one scan.
pub struct StagedVideo {
    file: NamedTempFile,
}

impl StagedVideo {
    /// Copy `reader` to a fresh temporary file. I/O failures here abort the
    /// batch; the partially written file is still removed on drop.
    pub fn stage(name: &str, reader: &mut dyn Read) -> Result<Self> {
        let mut file = NamedTempFile::new().context("failed to create staging file")?;
        std::io::copy(reader, &mut file)
            .with_context(|| format!("failed to stage '{}' to temporary storage", name))?;
        file.flush()
            .with_context(|| format!("failed to flush staged copy of '{}'", name))?;
        log::debug!("staged '{}' at {}", name, file.path().display());
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    #[test]
    fn staged_bytes_round_trip() {
        let mut reader = Cursor::new(b"qrsweep-stub:12".to_vec());
        let staged = StagedVideo::stage("clip.mp4", &mut reader).unwrap();
        let bytes = std::fs::read(staged.path()).unwrap();
        assert_eq!(bytes, b"qrsweep-stub:12");
    }

    #[test]
    fn drop_removes_the_staged_file() {
        let path: PathBuf;
        {
            let mut reader = Cursor::new(vec![1u8, 2, 3]);
            let staged = StagedVideo::stage("clip.mp4", &mut reader).unwrap();
            path = staged.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn two_staged_videos_use_distinct_paths() {
        let mut a = Cursor::new(vec![0u8]);
        let mut b = Cursor::new(vec![0u8]);
        let staged_a = StagedVideo::stage("a.mp4", &mut a).unwrap();
        let staged_b = StagedVideo::stage("b.mp4", &mut b).unwrap();
        assert_ne!(staged_a.path(), staged_b.path());
    }
}
