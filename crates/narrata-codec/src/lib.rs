//! # narrata-codec
//!
//! Byte-level audio I/O for the narrata pipeline:
//! - **Decoding**: RIFF/WAVE containers or headerless 16-bit PCM into a
//!   [`SampleBuffer`](narrata_core::SampleBuffer)
//! - **Encoding**: canonical 44-byte-header 16-bit PCM WAV via hound
//! - **Payloads**: base64 audio as handed over by the TTS service
//!
//! ```ignore
//! use narrata_codec::{decode, encode_wav, RawPcmFormat};
//!
//! let buffer = decode(&bytes, RawPcmFormat::default())?;
//! let wav = encode_wav(&buffer)?;
//! ```

pub mod decode;
pub mod error;
pub mod format;
mod payload;

pub use decode::{decode, detect_container, Container};
pub use error::{CodecError, Result};
pub use format::wav::{encode_wav, float_to_i16, WAV_HEADER_LEN, WAV_MIME_TYPE};
pub use narrata_core::RawPcmFormat;
pub use payload::decode_base64_payload;
