//! Histogram file reader and writer.
//!
//! Layout (little-endian):
//!
//! ```text
//! magic   8 bytes  "CWHIST\0\0"
//! version u32      currently 1
//! count   u32      number of histograms
//! per histogram:
//!   name_len u32, name bytes (UTF-8)
//!   nbins    u32
//!   centers  f64 × nbins
//!   contents f64 × nbins
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::decode::Cursor;
use crate::error::{Result, StoreError};

pub const HIST_MAGIC: &[u8; 8] = b"CWHIST\0\0";
pub const HIST_FILE_VERSION: u32 = 1;

/// One named, pre-binned 1D histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub name: String,
    pub centers: Vec<f64>,
    pub contents: Vec<f64>,
}

impl Histogram {
    pub fn nbins(&self) -> usize {
        self.contents.len()
    }

    /// Sum of bin contents.
    pub fn total(&self) -> f64 {
        self.contents.iter().sum()
    }
}

/// All histograms of one file, with lookup by name.
#[derive(Debug)]
pub struct HistogramFile {
    histograms: Vec<Histogram>,
}

impl HistogramFile {
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::FileNotFound { path: path.to_path_buf() }
            } else {
                StoreError::Io(e)
            }
        })?;
        Self::from_bytes(&data)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut cursor = Cursor::new(data);
        let magic = cursor
            .take(HIST_MAGIC.len())
            .map_err(|_| StoreError::BadMagic { expected: "CWHIST" })?;
        if magic != HIST_MAGIC {
            return Err(StoreError::BadMagic { expected: "CWHIST" });
        }
        let version = cursor
            .take_u32()
            .map_err(|message| StoreError::MalformedHistogram { index: 0, message })?;
        if version != HIST_FILE_VERSION {
            return Err(StoreError::UnsupportedVersion { kind: "histogram", version });
        }
        let count = cursor
            .take_u32()
            .map_err(|message| StoreError::MalformedHistogram { index: 0, message })?
            as usize;
        let mut histograms = Vec::with_capacity(count.min(data.len() / 16));
        for index in 0..count {
            let histogram = decode_histogram(&mut cursor)
                .map_err(|message| StoreError::MalformedHistogram { index, message })?;
            histograms.push(histogram);
        }
        debug!(histograms = histograms.len(), "opened histogram file");
        Ok(Self { histograms })
    }

    /// Histogram names in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.histograms.iter().map(|h| h.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Histogram> {
        self.histograms.iter()
    }

    /// Look up a histogram by exact name.
    pub fn histogram(&self, name: &str) -> Result<&Histogram> {
        self.histograms
            .iter()
            .find(|h| h.name == name)
            .ok_or_else(|| StoreError::HistogramNotFound { name: name.to_string() })
    }

    /// True if a histogram with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.histograms.iter().any(|h| h.name == name)
    }
}

fn decode_histogram(cursor: &mut Cursor<'_>) -> std::result::Result<Histogram, String> {
    let name_len = cursor.take_u32()? as usize;
    let name_bytes = cursor.take(name_len)?;
    let name = std::str::from_utf8(name_bytes)
        .map_err(|e| format!("histogram name is not UTF-8: {e}"))?
        .to_string();
    let nbins = cursor.take_u32()? as usize;
    let centers = cursor.take_f64_vec(nbins)?;
    let contents = cursor.take_f64_vec(nbins)?;
    Ok(Histogram { name, centers, contents })
}

/// Serialize histograms into an in-memory file image.
pub fn encode_histogram_file(histograms: &[Histogram]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(HIST_MAGIC);
    out.extend_from_slice(&HIST_FILE_VERSION.to_le_bytes());
    out.extend_from_slice(&(histograms.len() as u32).to_le_bytes());
    for histogram in histograms {
        out.extend_from_slice(&(histogram.name.len() as u32).to_le_bytes());
        out.extend_from_slice(histogram.name.as_bytes());
        out.extend_from_slice(&(histogram.nbins() as u32).to_le_bytes());
        for value in &histogram.centers {
            out.extend_from_slice(&value.to_le_bytes());
        }
        for value in &histogram.contents {
            out.extend_from_slice(&value.to_le_bytes());
        }
    }
    out
}

/// Write histograms to a histogram file.
pub fn write_histogram_file(path: &Path, histograms: &[Histogram]) -> Result<()> {
    let data = encode_histogram_file(histograms);
    let mut file = fs::File::create(path)?;
    file.write_all(&data)?;
    Ok(())
}
