//! Run-wide wipe configuration and renderer settings.

use crate::error::CertificateError;
use crate::normalize::UNKNOWN;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The wipe method selected for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WipeMethod {
    Zero,
    One,
    Ops2,
    DodShort,
    Dod522022m,
    Gutmann,
    Random,
    Is5Enh,
    VerifyZero,
    VerifyOne,
}

impl WipeMethod {
    pub fn label(self) -> &'static str {
        match self {
            WipeMethod::Zero => "Fill With Zeros",
            WipeMethod::One => "Fill With Ones",
            WipeMethod::Ops2 => "RCMP TSSIT OPS-II",
            WipeMethod::DodShort => "DoD Short",
            WipeMethod::Dod522022m => "DoD 5220.22-M",
            WipeMethod::Gutmann => "Gutmann Wipe",
            WipeMethod::Random => "PRNG Stream",
            WipeMethod::Is5Enh => "HMG IS5 Enhanced",
            WipeMethod::VerifyZero => "Verify Zeros",
            WipeMethod::VerifyOne => "Verify Ones",
        }
    }

    /// Methods that write or check a fixed pattern and never consult the PRNG.
    pub fn uses_prng(self) -> bool {
        !matches!(
            self,
            WipeMethod::Zero | WipeMethod::One | WipeMethod::VerifyZero | WipeMethod::VerifyOne
        )
    }
}

/// Pseudo-random generator backing the random passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrngAlgorithm {
    Twister,
    Isaac,
    Isaac64,
    #[default]
    #[serde(other)]
    Unknown,
}

impl PrngAlgorithm {
    pub fn label(self) -> &'static str {
        match self {
            PrngAlgorithm::Twister => "Twister",
            PrngAlgorithm::Isaac => "Isaac",
            PrngAlgorithm::Isaac64 => "Isaac64",
            PrngAlgorithm::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerifyMode {
    None,
    #[default]
    Last,
    All,
}

impl VerifyMode {
    pub fn label(self) -> &'static str {
        match self {
            VerifyMode::None => "Verify None",
            VerifyMode::Last => "Verify Last",
            VerifyMode::All => "Verify All",
        }
    }
}

/// Options the wipe run was started with. Shared read-only by every render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfiguration {
    pub method: WipeMethod,
    #[serde(default)]
    pub prng: PrngAlgorithm,
    #[serde(default)]
    pub verify: VerifyMode,
    #[serde(default)]
    pub noblank: bool,
    #[serde(default = "default_rounds")]
    pub rounds: u32,
}

fn default_rounds() -> u32 {
    1
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            method: WipeMethod::Random,
            prng: PrngAlgorithm::Isaac64,
            verify: VerifyMode::Last,
            noblank: false,
            rounds: default_rounds(),
        }
    }
}

impl RunConfiguration {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CertificateError> {
        read_json(path.as_ref())
    }
}

/// Where certificates go and how they are branded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificateSettings {
    /// Directory certificates are written to.
    pub output_dir: PathBuf,
    /// Directory holding custom branding assets.
    pub branding_dir: Option<PathBuf>,
    /// Asset name of a PNG or JPEG brand mark inside `branding_dir`.
    pub brand_mark: Option<String>,
    /// Version of the wipe tool, printed in the footer. Unknown unless set.
    pub version: String,
    pub creator: String,
    pub producer: String,
}

impl Default for CertificateSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            branding_dir: None,
            brand_mark: None,
            version: UNKNOWN.to_string(),
            creator: "https://github.com/PartialVolume/shredos.x86_64".to_string(),
            producer: "https://github.com/martijnvanbrummelen/nwipe".to_string(),
        }
    }
}

impl CertificateSettings {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CertificateError> {
        read_json(path.as_ref())
    }

    pub fn with_output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CertificateError> {
    let source = fs::read_to_string(path).map_err(|source| CertificateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|e| {
        CertificateError::Config(format!("Failed to parse '{}': {}", path.display(), e))
    })
}
