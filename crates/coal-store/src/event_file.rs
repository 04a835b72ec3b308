//! Event transport file reader and writer.
//!
//! Layout (all integers and floats little-endian):
//!
//! ```text
//! magic   8 bytes  "CWEVENT\0"
//! version u32      currently 1
//! count   u32      number of events
//! offsets u64 × count   absolute byte offset of each event payload
//! events  variable      payloads in offset order
//! ```
//!
//! Each event payload is columnar: header fields, then one array per
//! parton field, one array per hadron field, then the per-hadron
//! constituent ID lists. The offset table gives random access by event
//! index; a payload that fails to decode poisons only that event.

use std::fs;
use std::io::Write;
use std::path::Path;

use coal_model::{Event, Hadron, Parton};
use tracing::debug;

use crate::decode::Cursor;
use crate::error::{Result, StoreError};

pub const EVENT_MAGIC: &[u8; 8] = b"CWEVENT\0";
pub const EVENT_FILE_VERSION: u32 = 1;

/// Reader over one event transport file, loaded into memory.
#[derive(Debug)]
pub struct EventFileReader {
    data: Vec<u8>,
    offsets: Vec<u64>,
}

impl EventFileReader {
    /// Open and validate an event file.
    pub fn open(path: &Path) -> Result<Self> {
        let data = fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::FileNotFound { path: path.to_path_buf() }
            } else {
                StoreError::Io(e)
            }
        })?;
        Self::from_bytes(data)
    }

    /// Validate the header of an in-memory file image.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let mut cursor = Cursor::new(&data);
        let magic = cursor
            .take(EVENT_MAGIC.len())
            .map_err(|_| StoreError::BadMagic { expected: "CWEVENT" })?;
        if magic != EVENT_MAGIC {
            return Err(StoreError::BadMagic { expected: "CWEVENT" });
        }
        let version = cursor
            .take_u32()
            .map_err(|message| StoreError::MalformedEvent { index: 0, message })?;
        if version != EVENT_FILE_VERSION {
            return Err(StoreError::UnsupportedVersion { kind: "event", version });
        }
        let count = cursor
            .take_u32()
            .map_err(|message| StoreError::MalformedEvent { index: 0, message })?
            as usize;
        let mut offsets = Vec::with_capacity(count.min(data.len() / 8));
        for index in 0..count {
            let offset = cursor
                .take_u64()
                .map_err(|message| StoreError::MalformedEvent { index, message })?;
            offsets.push(offset);
        }
        debug!(events = count, bytes = data.len(), "opened event file");
        drop(cursor);
        Ok(Self { data, offsets })
    }

    /// Number of events in the file.
    pub fn event_count(&self) -> usize {
        self.offsets.len()
    }

    /// Decode the event at `index`.
    ///
    /// An index past the end is `EventOutOfRange`; a payload that cannot
    /// be decoded is `MalformedEvent` and leaves other events readable.
    pub fn read_event(&self, index: usize) -> Result<Event> {
        let offset = *self.offsets.get(index).ok_or(StoreError::EventOutOfRange {
            index,
            count: self.offsets.len(),
        })? as usize;
        let payload = self
            .data
            .get(offset..)
            .ok_or_else(|| StoreError::MalformedEvent {
                index,
                message: format!("offset {offset} past end of file"),
            })?;
        decode_event(payload)
            .map_err(|message| StoreError::MalformedEvent { index, message })
    }

    /// Iterate all events in file order, yielding a per-event `Result`
    /// so callers can skip and count malformed records.
    pub fn events(&self) -> impl Iterator<Item = Result<Event>> + '_ {
        (0..self.event_count()).map(|index| self.read_event(index))
    }
}

fn decode_event(payload: &[u8]) -> std::result::Result<Event, String> {
    let mut cursor = Cursor::new(payload);
    let id = cursor.take_u32()?;
    let reaction_plane = cursor.take_f64()?;
    let n_partons = cursor.take_u32()? as usize;
    let n_hadrons = cursor.take_u32()? as usize;

    let ids = cursor.take_u32_vec(n_partons)?;
    let px_pos = cursor.take_f64_vec(n_partons)?;
    let py_pos = cursor.take_f64_vec(n_partons)?;
    let pz_pos = cursor.take_f64_vec(n_partons)?;
    let px_mom = cursor.take_f64_vec(n_partons)?;
    let py_mom = cursor.take_f64_vec(n_partons)?;
    let pz_mom = cursor.take_f64_vec(n_partons)?;
    let baryon_thirds = cursor.take_i32_vec(n_partons)?;
    let partons = (0..n_partons)
        .map(|i| Parton {
            unique_id: ids[i],
            x: px_pos[i],
            y: py_pos[i],
            z: pz_pos[i],
            px: px_mom[i],
            py: py_mom[i],
            pz: pz_mom[i],
            baryon_thirds: baryon_thirds[i],
        })
        .collect();

    let hx = cursor.take_f64_vec(n_hadrons)?;
    let hy = cursor.take_f64_vec(n_hadrons)?;
    let hz = cursor.take_f64_vec(n_hadrons)?;
    let hpx = cursor.take_f64_vec(n_hadrons)?;
    let hpy = cursor.take_f64_vec(n_hadrons)?;
    let hpz = cursor.take_f64_vec(n_hadrons)?;
    let baryon_number = cursor.take_i32_vec(n_hadrons)?;
    let mut hadrons: Vec<Hadron> = (0..n_hadrons)
        .map(|i| Hadron {
            x: hx[i],
            y: hy[i],
            z: hz[i],
            px: hpx[i],
            py: hpy[i],
            pz: hpz[i],
            baryon_number: baryon_number[i],
            constituent_ids: Vec::new(),
        })
        .collect();
    for hadron in &mut hadrons {
        let len = cursor.take_u32()? as usize;
        hadron.constituent_ids = cursor.take_u32_vec(len)?;
    }

    Ok(Event { id, reaction_plane, partons, hadrons })
}

fn encode_event(event: &Event, out: &mut Vec<u8>) {
    out.extend_from_slice(&event.id.to_le_bytes());
    out.extend_from_slice(&event.reaction_plane.to_le_bytes());
    out.extend_from_slice(&(event.partons.len() as u32).to_le_bytes());
    out.extend_from_slice(&(event.hadrons.len() as u32).to_le_bytes());

    for p in &event.partons {
        out.extend_from_slice(&p.unique_id.to_le_bytes());
    }
    for field in [
        |p: &Parton| p.x,
        |p: &Parton| p.y,
        |p: &Parton| p.z,
        |p: &Parton| p.px,
        |p: &Parton| p.py,
        |p: &Parton| p.pz,
    ] {
        for p in &event.partons {
            out.extend_from_slice(&field(p).to_le_bytes());
        }
    }
    for p in &event.partons {
        out.extend_from_slice(&p.baryon_thirds.to_le_bytes());
    }

    for field in [
        |h: &Hadron| h.x,
        |h: &Hadron| h.y,
        |h: &Hadron| h.z,
        |h: &Hadron| h.px,
        |h: &Hadron| h.py,
        |h: &Hadron| h.pz,
    ] {
        for h in &event.hadrons {
            out.extend_from_slice(&field(h).to_le_bytes());
        }
    }
    for h in &event.hadrons {
        out.extend_from_slice(&h.baryon_number.to_le_bytes());
    }
    for h in &event.hadrons {
        out.extend_from_slice(&(h.constituent_ids.len() as u32).to_le_bytes());
        for id in &h.constituent_ids {
            out.extend_from_slice(&id.to_le_bytes());
        }
    }
}

/// Serialize events into an in-memory file image.
pub fn encode_event_file(events: &[Event]) -> Vec<u8> {
    let header_len = EVENT_MAGIC.len() + 4 + 4 + events.len() * 8;
    let mut payloads = Vec::with_capacity(events.len());
    let mut offsets = Vec::with_capacity(events.len());
    let mut next = header_len as u64;
    for event in events {
        let mut payload = Vec::new();
        encode_event(event, &mut payload);
        offsets.push(next);
        next += payload.len() as u64;
        payloads.push(payload);
    }

    let mut out = Vec::with_capacity(next as usize);
    out.extend_from_slice(EVENT_MAGIC);
    out.extend_from_slice(&EVENT_FILE_VERSION.to_le_bytes());
    out.extend_from_slice(&(events.len() as u32).to_le_bytes());
    for offset in offsets {
        out.extend_from_slice(&offset.to_le_bytes());
    }
    for payload in payloads {
        out.extend_from_slice(&payload);
    }
    out
}

/// Write events to an event transport file.
pub fn write_event_file(path: &Path, events: &[Event]) -> Result<()> {
    let data = encode_event_file(events);
    let mut file = fs::File::create(path)?;
    file.write_all(&data)?;
    Ok(())
}

/// Open and decode one event by index. Convenience for the single-event
/// visualization path.
pub fn read_event(path: &Path, index: usize) -> Result<Event> {
    EventFileReader::open(path)?.read_event(index)
}
