//! Music playlist for the control center
//!
//! Only the playlist and transport state live here. Decoding and audio
//! output belong to whatever media backend the head unit ships with.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CoreError, Result};

/// File extensions picked up from the music folder
pub const AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "ogg"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// Songs found in the music folder and the transport position
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<PathBuf>,
    current: usize,
    state: PlaybackState,
    loaded: bool,
    folder_missing: bool,
}

impl Playlist {
    /// Scan `folder` for audio files, sorted by file name
    ///
    /// The first track is loaded and starts playing, as the player did on
    /// start-up.
    pub fn load(folder: &Path) -> Result<Self> {
        if !folder.is_dir() {
            return Err(CoreError::ResourceMissing(folder.to_path_buf()));
        }

        let mut tracks = Vec::new();
        for entry in fs::read_dir(folder)? {
            let path = entry?.path();
            if path.is_file() && is_audio_file(&path) {
                tracks.push(path);
            }
        }
        tracks.sort_by_key(|path| path.file_name().map(|name| name.to_os_string()));

        tracing::info!(folder = %folder.display(), tracks = tracks.len(), "music folder scanned");
        Ok(Self::from_tracks(tracks))
    }

    /// Playlist whose folder could not be found
    pub fn missing() -> Self {
        Self {
            folder_missing: true,
            ..Self::default()
        }
    }

    pub fn from_tracks(tracks: Vec<PathBuf>) -> Self {
        let mut playlist = Self {
            tracks,
            ..Self::default()
        };
        if !playlist.tracks.is_empty() {
            playlist.load_current();
        }
        playlist
    }

    pub fn tracks(&self) -> &[PathBuf] {
        &self.tracks
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.loaded.then_some(self.current)
    }

    pub fn current_track(&self) -> Option<&Path> {
        if self.loaded {
            self.tracks.get(self.current).map(PathBuf::as_path)
        } else {
            None
        }
    }

    /// Pause when playing; otherwise (re)start the current track
    pub fn play_pause(&mut self) {
        match self.state {
            PlaybackState::Playing => self.state = PlaybackState::Paused,
            _ if self.tracks.is_empty() => {}
            _ if !self.loaded => self.load_current(),
            _ => self.state = PlaybackState::Playing,
        }
    }

    /// Skip forward, wrapping to the first track
    pub fn next(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.tracks.len();
        self.load_current();
    }

    /// Skip back, wrapping to the last track
    pub fn prev(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.current = (self.current + self.tracks.len() - 1) % self.tracks.len();
        self.load_current();
    }

    /// Line shown under the player title
    pub fn status_text(&self) -> String {
        if self.folder_missing {
            return "Music folder not found.".to_string();
        }
        if self.tracks.is_empty() {
            return "No audio files in folder.".to_string();
        }
        self.current_track()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "No song loaded".to_string())
    }

    fn load_current(&mut self) {
        self.loaded = true;
        self.state = PlaybackState::Playing;
        if let Some(track) = self.tracks.get(self.current) {
            tracing::debug!(track = %track.display(), "track loaded");
        }
    }
}

fn is_audio_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            AUDIO_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
