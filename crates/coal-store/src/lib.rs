//! Binary columnar storage for coalescence analysis tools.
//!
//! Two self-contained formats: the event transport file (`.cwe`) holding
//! full parton/hadron records per event, and the histogram file (`.cwh`)
//! holding named pre-binned 1D histograms. Readers validate headers up
//! front and surface per-record decode failures as per-record errors so
//! callers can skip and count them.

mod decode;
pub mod error;
pub mod event_file;
pub mod hist_file;

pub use error::{Result, StoreError};
pub use event_file::{
    EVENT_FILE_VERSION, EVENT_MAGIC, EventFileReader, encode_event_file, read_event,
    write_event_file,
};
pub use hist_file::{
    HIST_FILE_VERSION, HIST_MAGIC, Histogram, HistogramFile, encode_histogram_file,
    write_histogram_file,
};
