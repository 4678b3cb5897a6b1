//! Dictionary format auto-detection

use super::args::DictFormat;
use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;

/// Detected format with the method that found it
#[derive(Debug)]
pub struct FormatDetection {
    /// Detected format
    pub format: DictFormat,
    /// Detection method used
    pub method: DetectionMethod,
}

/// Method used to detect dictionary format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionMethod {
    /// Exact detection via magic bytes or header
    Exact,
    /// Heuristic detection via file extension
    Extension,
    /// Heuristic detection via file content analysis
    Content,
    /// User explicitly specified
    UserSpecified,
}

impl std::fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => write!(f, "exact (magic bytes)"),
            Self::Extension => write!(f, "heuristic (file extension)"),
            Self::Content => write!(f, "heuristic (content analysis)"),
            Self::UserSpecified => write!(f, "user specified"),
        }
    }
}

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Detect dictionary format from file
pub fn detect_format(path: &Path, user_format: Option<DictFormat>) -> Result<FormatDetection> {
    if let Some(format) = user_format {
        return Ok(FormatDetection {
            format,
            method: DetectionMethod::UserSpecified,
        });
    }

    if let Ok(format) = detect_by_extension(path) {
        return Ok(FormatDetection {
            format,
            method: DetectionMethod::Extension,
        });
    }

    detect_by_content(path)
}

/// Detect format by file extension
fn detect_by_extension(path: &Path) -> Result<DictFormat> {
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .context("Invalid filename")?
        .to_lowercase();

    #[cfg(feature = "compression")]
    {
        if name.ends_with(".bin.gz") {
            return Ok(DictFormat::BincodeGzip);
        }
        if name.ends_with(".json.gz") {
            return Ok(DictFormat::JsonGzip);
        }
    }

    let ext = name.rsplit_once('.').map(|(_, ext)| ext).context("No file extension")?;
    match ext {
        "dict" | "txt" | "text" => Ok(DictFormat::Cmudict),
        "bin" | "bincode" => Ok(DictFormat::Bincode),
        "json" => Ok(DictFormat::Json),
        _ => bail!("Unknown file extension: {}", ext),
    }
}

/// Detect format by analyzing the first bytes of the file
fn detect_by_content(path: &Path) -> Result<FormatDetection> {
    let mut file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;

    let mut header = [0u8; 64];
    let bytes_read = file
        .read(&mut header)
        .with_context(|| format!("Failed to read file header: {}", path.display()))?;
    let header = &header[..bytes_read];

    if header.starts_with(&GZIP_MAGIC) {
        #[cfg(feature = "compression")]
        return detect_compressed(path);
        #[cfg(not(feature = "compression"))]
        bail!("Gzip-compressed dictionary requires the compression feature");
    }

    let first = header.iter().find(|b| !b.is_ascii_whitespace());
    if first == Some(&b'{') {
        return Ok(FormatDetection {
            format: DictFormat::Json,
            method: DetectionMethod::Exact,
        });
    }

    let is_text = !header.is_empty()
        && header
            .iter()
            .all(|&b| b.is_ascii_graphic() || b.is_ascii_whitespace());
    let format = if is_text {
        DictFormat::Cmudict
    } else {
        DictFormat::Bincode
    };

    Ok(FormatDetection {
        format,
        method: DetectionMethod::Content,
    })
}

/// Tell JSON from bincode inside a gzip stream by its first decoded byte
#[cfg(feature = "compression")]
fn detect_compressed(path: &Path) -> Result<FormatDetection> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open file: {}", path.display()))?;
    let mut decoder = flate2::read::GzDecoder::new(file);

    let mut header = [0u8; 64];
    let bytes_read = decoder
        .read(&mut header)
        .with_context(|| format!("Failed to decompress file header: {}", path.display()))?;

    let first = header[..bytes_read].iter().find(|b| !b.is_ascii_whitespace());
    let format = if first == Some(&b'{') {
        DictFormat::JsonGzip
    } else {
        DictFormat::BincodeGzip
    };

    Ok(FormatDetection {
        format,
        method: DetectionMethod::Exact,
    })
}
