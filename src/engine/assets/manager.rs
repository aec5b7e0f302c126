// Central frame store

use super::{AssetError, AssetHandle, AssetId, AssetLoader, FrameHandle, FrameSequence};
use crate::game::characters::OrientedFrames;
use image::imageops;
use image::RgbaImage;
use log::debug;
use std::collections::HashMap;
use std::path::Path;

/// Central asset manager for the game
///
/// Owns every decoded frame. Sequences are cached per size, so two actors
/// sharing a sequence share the frames too.
pub struct AssetManager {
    /// Asset loader
    loader: AssetLoader,

    /// Loaded frames, indexed by handle id
    frames: Vec<RgbaImage>,

    /// Sequences already loaded at a given size
    sequences: HashMap<(FrameSequence, (u32, u32)), OrientedFrames<FrameHandle>>,
}

impl AssetManager {
    /// Create a new asset manager
    pub fn new<P: AsRef<Path>>(asset_path: P) -> Self {
        Self {
            loader: AssetLoader::new(asset_path),
            frames: Vec::new(),
            sequences: HashMap::new(),
        }
    }

    /// Store a decoded frame
    pub fn insert_frame(&mut self, frame: RgbaImage) -> FrameHandle {
        self.frames.push(frame);
        AssetHandle::new(AssetId::from_u64((self.frames.len() - 1) as u64))
    }

    /// Load a sequence facing right and mirror it for facing left
    pub fn load_oriented(
        &mut self,
        sequence: &FrameSequence,
        size: (u32, u32),
    ) -> Result<OrientedFrames<FrameHandle>, AssetError> {
        // Check if already loaded
        let key = (sequence.clone(), size);
        if let Some(frames) = self.sequences.get(&key) {
            return Ok(frames.clone());
        }

        let decoded = self.loader.load_frames(sequence, size)?;
        let oriented = self.insert_oriented(decoded);
        debug!(
            "Loaded {} frames from {}/{}",
            oriented.len(),
            sequence.directory,
            sequence.pattern
        );

        self.sequences.insert(key, oriented.clone());
        Ok(oriented)
    }

    /// Store right-facing frames and their mirror images
    pub fn insert_oriented(&mut self, right: Vec<RgbaImage>) -> OrientedFrames<FrameHandle> {
        let right: Vec<FrameHandle> = right
            .into_iter()
            .map(|frame| self.insert_frame(frame))
            .collect();

        OrientedFrames::mirrored(right, |handle| {
            let source = &self.frames[handle.id().as_u64() as usize];
            let mirrored = imageops::flip_horizontal(source);
            self.insert_frame(mirrored)
        })
    }

    /// Get a frame by handle
    pub fn get_frame(&self, handle: FrameHandle) -> Option<&RgbaImage> {
        self.frames.get(handle.id().as_u64() as usize)
    }

    /// Get statistics about loaded assets
    pub fn stats(&self) -> AssetStats {
        AssetStats {
            frame_count: self.frames.len(),
            sequence_count: self.sequences.len(),
        }
    }

    /// Get the asset loader
    pub fn loader(&self) -> &AssetLoader {
        &self.loader
    }
}

/// Statistics about loaded assets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetStats {
    pub frame_count: usize,
    pub sequence_count: usize,
}
