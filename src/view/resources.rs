//! Image and frame-sequence resources on disk.
//!
//! An image is any file; the terminal cannot draw it, so only its existence
//! matters. A frame sequence is a directory of text files, one frame each,
//! played in file-name order.

use crate::host::{ImageHandle, ImageLookup};
use crate::model::ResourceMissingError;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Image lookup relative to a base directory, cached per path.
#[derive(Debug, Default)]
pub struct ImageCatalog {
    base_dir: PathBuf,
    cache: RefCell<HashMap<String, bool>>,
}

impl ImageCatalog {
    /// Catalog resolving paths against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            cache: RefCell::new(HashMap::new()),
        }
    }

    fn exists(&self, path: &str) -> bool {
        if let Some(found) = self.cache.borrow().get(path) {
            return *found;
        }
        let found = self.base_dir.join(path).is_file();
        debug!(path, found, "image lookup");
        self.cache.borrow_mut().insert(path.to_string(), found);
        found
    }
}

impl ImageLookup for ImageCatalog {
    fn find(&self, path: &str) -> Option<ImageHandle> {
        self.exists(path).then(|| ImageHandle::new(path))
    }
}

/// A loaded frame: its text rows.
pub type Frame = Vec<String>;

/// Frame sequences relative to a base directory, loaded on first use.
#[derive(Debug, Default)]
pub struct FrameLibrary {
    base_dir: PathBuf,
    sequences: HashMap<String, Option<Vec<Frame>>>,
    clock: Duration,
}

impl FrameLibrary {
    /// Library resolving sources against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            sequences: HashMap::new(),
            clock: Duration::ZERO,
        }
    }

    /// Set the playback clock, time since the viewer started.
    pub fn set_clock(&mut self, elapsed: Duration) {
        self.clock = elapsed;
    }

    /// Current frame of `source` at `fps`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceMissingError`] when `source` is not a directory with
    /// at least one readable frame.
    pub fn frame_at(&mut self, source: &str, fps: u32) -> Result<&Frame, ResourceMissingError> {
        let clock = self.clock;
        let base_dir = &self.base_dir;
        let sequence = self
            .sequences
            .entry(source.to_string())
            .or_insert_with(|| load_sequence(&base_dir.join(source)));

        let frames = sequence
            .as_ref()
            .ok_or_else(|| ResourceMissingError::frames(source))?;
        let index = frame_index(clock, fps, frames.len());
        frames
            .get(index)
            .ok_or_else(|| ResourceMissingError::frames(source))
    }
}

/// Frame shown at `clock` for a sequence of `len` frames at `fps`.
pub fn frame_index(clock: Duration, fps: u32, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let ticks = clock.as_millis() * u128::from(fps) / 1000;
    (ticks % len as u128) as usize
}

fn load_sequence(dir: &Path) -> Option<Vec<Frame>> {
    let read = match std::fs::read_dir(dir) {
        Ok(read) => read,
        Err(err) => {
            debug!(dir = %dir.display(), error = %err, "frame directory unavailable");
            return None;
        }
    };

    let mut paths: Vec<PathBuf> = read
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let frames: Vec<Frame> = paths
        .iter()
        .filter_map(|path| match std::fs::read_to_string(path) {
            Ok(text) => Some(text.lines().map(str::to_string).collect()),
            Err(err) => {
                warn!(frame = %path.display(), error = %err, "skipping unreadable frame");
                None
            }
        })
        .collect();

    debug!(dir = %dir.display(), frames = frames.len(), "frame sequence loaded");
    (!frames.is_empty()).then_some(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn catalog_finds_existing_file_only() {
        let dir = scratch("richlist_images");
        fs::write(dir.join("cell.png"), b"png").unwrap();

        let catalog = ImageCatalog::new(&dir);
        assert_eq!(catalog.find("cell.png"), Some(ImageHandle::new("cell.png")));
        assert_eq!(catalog.find("gone.png"), None);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn catalog_caches_lookups() {
        let dir = scratch("richlist_images_cache");
        let catalog = ImageCatalog::new(&dir);
        assert_eq!(catalog.find("late.png"), None);

        fs::write(dir.join("late.png"), b"png").unwrap();
        assert_eq!(catalog.find("late.png"), None);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn frames_play_in_file_name_order() {
        let dir = scratch("richlist_frames");
        let clip = dir.join("spin");
        fs::create_dir_all(&clip).unwrap();
        fs::write(clip.join("02.txt"), "second").unwrap();
        fs::write(clip.join("01.txt"), "first\nrow").unwrap();

        let mut library = FrameLibrary::new(&dir);
        assert_eq!(library.frame_at("spin", 10).unwrap(), &vec!["first", "row"]);

        library.set_clock(Duration::from_millis(100));
        assert_eq!(library.frame_at("spin", 10).unwrap(), &vec!["second"]);

        library.set_clock(Duration::from_millis(200));
        assert_eq!(library.frame_at("spin", 10).unwrap(), &vec!["first", "row"]);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_sequence_is_resource_missing() {
        let dir = scratch("richlist_frames_missing");
        let mut library = FrameLibrary::new(&dir);
        assert_eq!(
            library.frame_at("nowhere", 10),
            Err(ResourceMissingError::frames("nowhere"))
        );
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_directory_is_resource_missing() {
        let dir = scratch("richlist_frames_empty");
        fs::create_dir_all(dir.join("blank")).unwrap();
        let mut library = FrameLibrary::new(&dir);
        assert!(library.frame_at("blank", 10).is_err());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn frame_index_wraps() {
        assert_eq!(frame_index(Duration::from_millis(0), 10, 3), 0);
        assert_eq!(frame_index(Duration::from_millis(250), 10, 3), 2);
        assert_eq!(frame_index(Duration::from_millis(300), 10, 3), 0);
        assert_eq!(frame_index(Duration::from_secs(5), 10, 0), 0);
    }
}
