// Frame sequence loading

use super::AssetError;
use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// A run of numbered image files making up one animation
///
/// `pattern` holds a single `{}` that is replaced by the zero-padded frame index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameSequence {
    /// Directory under the asset root
    pub directory: String,
    pub pattern: String,
    /// First frame index
    pub start: u32,
    /// Number of frames
    pub count: u32,
    zero_pad: Option<usize>,
}

impl FrameSequence {
    pub fn new(directory: &str, pattern: &str, start: u32, count: u32) -> Self {
        Self {
            directory: directory.to_string(),
            pattern: pattern.to_string(),
            start,
            count,
            zero_pad: None,
        }
    }

    /// Force the index width instead of deriving it
    pub fn zero_pad(mut self, width: usize) -> Self {
        self.zero_pad = Some(width);
        self
    }

    /// Index width: explicit, or the number of digits in `start + count`
    pub fn pad_width(&self) -> usize {
        self.zero_pad
            .unwrap_or_else(|| (self.start + self.count).to_string().len())
    }

    /// File names in frame order
    pub fn frame_names(&self) -> Vec<String> {
        let width = self.pad_width();
        (self.start..self.start + self.count)
            .map(|i| self.pattern.replacen("{}", &format!("{:0width$}", i), 1))
            .collect()
    }
}

/// Asset loader responsible for finding and decoding frame files
#[derive(Debug, Clone)]
pub struct AssetLoader {
    base_path: PathBuf,
}

impl AssetLoader {
    /// Create a new asset loader with the given base path
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    /// Get the full path for a file of a sequence
    pub fn resolve_path(&self, sequence: &FrameSequence, name: &str) -> PathBuf {
        self.base_path.join(&sequence.directory).join(name)
    }

    /// Decode every frame of `sequence` and scale it to `size`.
    ///
    /// Fails on the first missing or undecodable file.
    pub fn load_frames(
        &self,
        sequence: &FrameSequence,
        size: (u32, u32),
    ) -> Result<Vec<RgbaImage>, AssetError> {
        if sequence.count == 0 {
            return Err(AssetError::LoadError(format!(
                "empty frame sequence {}/{}",
                sequence.directory, sequence.pattern
            )));
        }

        sequence
            .frame_names()
            .iter()
            .map(|name| {
                let path = self.resolve_path(sequence, name);
                if !path.exists() {
                    return Err(AssetError::NotFound(path.to_string_lossy().to_string()));
                }

                let frame = image::open(&path)?.to_rgba8();
                Ok(imageops::resize(&frame, size.0, size.1, FilterType::Nearest))
            })
            .collect()
    }

    /// Get the base path
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}
