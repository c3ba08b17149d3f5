use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use hmac::{Hmac, Mac};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

const SECRET_KEY: &[u8] = b"freecell_rs_prefs_key_v1";
const HMAC_SIZE: usize = 32;

/// Table colour scheme.  Unknown names fall back to green.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Green,
    Blue,
    Red,
}

impl Theme {
    pub fn parse(name: &str) -> Theme {
        match name.trim().to_lowercase().as_str() {
            "blue" => Theme::Blue,
            "red" => Theme::Red,
            _ => Theme::Green,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Green => "Green",
            Theme::Blue => "Blue",
            Theme::Red => "Red",
        }
    }
}

/// Lifetime play statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub played: u32,
    pub won: u32,
    pub best_moves: Option<u32>,
}

impl Stats {
    pub fn record_deal(&mut self) {
        self.played += 1;
    }

    pub fn record_win(&mut self, moves: u32) {
        self.won += 1;
        self.best_moves = Some(self.best_moves.map_or(moves, |best| best.min(moves)));
    }
}

/// Everything that survives between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: String,
    pub stats: Stats,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            theme: Theme::default().name().to_string(),
            stats: Stats::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Codec(#[from] bincode::Error),

    #[error("file too short to carry a signature")]
    TooShort,

    #[error("signature mismatch")]
    BadSignature,

    #[error("invalid signing key")]
    Key,
}

impl Preferences {
    /// Load from the default location.  A missing, corrupt or tampered
    /// file yields defaults.
    pub fn load() -> Self {
        match Self::file_path() {
            Some(path) => Self::load_or_default(&path),
            None => Self::default(),
        }
    }

    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("ignoring preferences at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, PrefsError> {
        let mut data = Vec::new();
        File::open(path)?.read_to_end(&mut data)?;

        if data.len() < HMAC_SIZE {
            return Err(PrefsError::TooShort);
        }

        let (payload, signature) = data.split_at(data.len() - HMAC_SIZE);
        let mut mac = new_mac()?;
        mac.update(payload);
        mac.verify_slice(signature).map_err(|_| PrefsError::BadSignature)?;

        Ok(bincode::deserialize(payload)?)
    }

    /// Save to the default location.  Failures are logged, not raised.
    pub fn save(&self) {
        let Some(path) = Self::file_path() else { return };
        if let Err(e) = self.save_to(&path) {
            warn!("could not save preferences to {}: {e}", path.display());
        }
    }

    /// Write atomically: temp file, fsync, rename.
    pub fn save_to(&self, path: &Path) -> Result<(), PrefsError> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let mut data = bincode::serialize(self)?;
        let mut mac = new_mac()?;
        mac.update(&data);
        data.extend_from_slice(&mac.finalize().into_bytes());

        let temp_path = path.with_extension("tmp");
        let written = File::create(&temp_path).and_then(|mut file| {
            file.write_all(&data)?;
            file.sync_all()
        });
        if let Err(e) = written {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        fs::rename(&temp_path, path)?;
        debug!("saved preferences to {}", path.display());
        Ok(())
    }

    /// `<data_dir>/prefs.dat`.
    pub fn file_path() -> Option<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "freecell-rs", "freecell-rs")?;
        Some(proj_dirs.data_dir().join("prefs.dat"))
    }
}

fn new_mac() -> Result<HmacSha256, PrefsError> {
    HmacSha256::new_from_slice(SECRET_KEY).map_err(|_| PrefsError::Key)
}
