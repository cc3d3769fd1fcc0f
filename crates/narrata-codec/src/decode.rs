//! Decoding of RIFF/WAVE containers and headerless 16-bit PCM.
//!
//! TTS services hand back either a complete WAV file or bare little-endian
//! `i16` samples. The container is sniffed from its magic numbers; anything
//! else is treated as raw PCM in the caller's [`RawPcmFormat`].
//!
//! Header parsing is lenient: a file that carries the
//! `RIFF....WAVE` magic but whose chunk table cannot be walked is still
//! decoded, assuming the canonical 44-byte header.

use crate::error::Result;
use crate::format::wav::WAV_HEADER_LEN;
use narrata_core::{Error, RawPcmFormat, SampleBuffer};

const RIFF_ID: u32 = 0x5249_4646; // "RIFF"
const WAVE_ID: u32 = 0x5741_5645; // "WAVE"
const DATA_ID: u32 = 0x6461_7461; // "data"

const CHANNELS_OFFSET: usize = 22;
const SAMPLE_RATE_OFFSET: usize = 24;
const FIRST_CHUNK_OFFSET: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;

/// Result of sniffing an input byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// RIFF/WAVE container.
    Wav {
        channels: u16,
        sample_rate: u32,
        /// Byte offset where the PCM payload starts.
        data_offset: usize,
        /// `false` when no `data` chunk was found and the 44-byte
        /// fallback is in use.
        scanned: bool,
    },
    /// Headerless little-endian 16-bit PCM.
    RawPcm,
}

/// Decide whether `bytes` is a WAV container and where its samples start.
pub fn detect_container(bytes: &[u8]) -> Container {
    if bytes.len() < WAV_HEADER_LEN
        || read_u32_be(bytes, 0) != Some(RIFF_ID)
        || read_u32_be(bytes, 8) != Some(WAVE_ID)
    {
        return Container::RawPcm;
    }

    // Length was checked above, both reads are in bounds
    let channels = read_u16_le(bytes, CHANNELS_OFFSET).unwrap_or_default();
    let sample_rate = read_u32_le(bytes, SAMPLE_RATE_OFFSET).unwrap_or_default();

    let (data_offset, scanned) = match find_data_chunk(bytes) {
        Some(offset) => (offset, true),
        None => {
            log::warn!(
                "RIFF/WAVE input has no readable data chunk, assuming {}-byte header",
                WAV_HEADER_LEN
            );
            (WAV_HEADER_LEN, false)
        }
    };

    Container::Wav {
        channels,
        sample_rate,
        data_offset,
        scanned,
    }
}

/// Decode a WAV file or raw 16-bit PCM into a normalized sample buffer.
///
/// `raw` supplies the sample rate and channel count when the input has no
/// RIFF/WAVE header. Samples are normalized as `v / 32768.0`.
///
/// # Errors
///
/// - [`Error::EmptyAudio`] if no complete frame remains after the header
/// - invalid-parameter variants if `raw` or the WAV header describe a zero
///   sample rate or a channel count other than 1 or 2
pub fn decode(bytes: &[u8], raw: RawPcmFormat) -> Result<SampleBuffer> {
    raw.validate()?;

    let (format, payload) = match detect_container(bytes) {
        Container::Wav {
            channels,
            sample_rate,
            data_offset,
            scanned,
        } => {
            log::debug!(
                "Detected WAV container: {} Hz, {} channel(s), data at byte {} ({})",
                sample_rate,
                channels,
                data_offset,
                if scanned { "scanned" } else { "fallback" }
            );
            let format = RawPcmFormat::new(sample_rate, channels as usize);
            format.validate()?;
            (format, bytes.get(data_offset..).unwrap_or_default())
        }
        Container::RawPcm => {
            log::debug!(
                "No WAV header, decoding {} bytes as raw PCM ({} Hz, {} channel(s))",
                bytes.len(),
                raw.sample_rate,
                raw.channels
            );
            (raw, bytes)
        }
    };

    let channels = deinterleave(payload, format.channels)?;
    Ok(SampleBuffer::new(format.sample_rate, channels)?)
}

/// Split interleaved little-endian `i16` samples into normalized channels.
fn deinterleave(payload: &[u8], channel_count: usize) -> Result<Vec<Vec<f32>>> {
    let sample_count = payload.len() / 2;
    let frame_count = sample_count / channel_count;
    if frame_count == 0 {
        return Err(Error::EmptyAudio.into());
    }

    let mut channels: Vec<Vec<f32>> = (0..channel_count)
        .map(|_| Vec::with_capacity(frame_count))
        .collect();
    for frame in payload.chunks_exact(2 * channel_count).take(frame_count) {
        for (channel, sample) in channels.iter_mut().zip(frame.chunks_exact(2)) {
            let value = i16::from_le_bytes([sample[0], sample[1]]);
            channel.push(value as f32 / 32768.0);
        }
    }

    Ok(channels)
}

/// Walk the chunk table looking for `data`; returns the payload offset.
fn find_data_chunk(bytes: &[u8]) -> Option<usize> {
    let mut pos = FIRST_CHUNK_OFFSET;
    while pos.checked_add(CHUNK_HEADER_LEN)? <= bytes.len() {
        if read_u32_be(bytes, pos)? == DATA_ID {
            return Some(pos + CHUNK_HEADER_LEN);
        }
        let size = read_u32_le(bytes, pos + 4)? as usize;
        pos = pos.checked_add(CHUNK_HEADER_LEN)?.checked_add(size)?;
    }
    None
}

fn read_u32_be(bytes: &[u8], offset: usize) -> Option<u32> {
    let raw = bytes.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_be_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

fn read_u32_le(bytes: &[u8], offset: usize) -> Option<u32> {
    let raw = bytes.get(offset..offset.checked_add(4)?)?;
    Some(u32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]))
}

fn read_u16_le(bytes: &[u8], offset: usize) -> Option<u16> {
    let raw = bytes.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_le_bytes([raw[0], raw[1]]))
}
