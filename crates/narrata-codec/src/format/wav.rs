//! WAV format encoder using hound
//!
//! Always writes 16-bit integer PCM with a single `fmt ` and a single `data`
//! chunk, which is the 44-byte canonical header.

use crate::error::Result;
use hound::{SampleFormat, WavSpec, WavWriter};
use narrata_core::SampleBuffer;
use std::io::{Cursor, Seek, Write};

/// Size of the canonical RIFF/WAVE header.
pub const WAV_HEADER_LEN: usize = 44;

/// MIME type of the encoder's output.
pub const WAV_MIME_TYPE: &str = "audio/wav";

const BITS_PER_SAMPLE: u16 = 16;

/// Encode a buffer as a 16-bit PCM WAV file in memory
///
/// Channels are interleaved (`L, R, L, R, ...` for stereo) and each sample
/// is clamped and quantized with [`float_to_i16`].
pub fn encode_wav(buffer: &SampleBuffer) -> Result<Vec<u8>> {
    let spec = create_wav_spec(buffer);
    let data_len = buffer.frame_count() * buffer.channel_count() * 2;

    let mut bytes = Vec::with_capacity(WAV_HEADER_LEN + data_len);
    {
        let cursor = Cursor::new(&mut bytes);
        let mut writer = WavWriter::new(cursor, spec)?;

        write_interleaved(&mut writer, buffer)?;

        // Finalize patches the RIFF and data sizes
        writer.finalize()?;
    }

    log::debug!(
        "Encoded {} frames x {} channels into {} WAV bytes",
        buffer.frame_count(),
        buffer.channel_count(),
        bytes.len()
    );

    Ok(bytes)
}

fn create_wav_spec(buffer: &SampleBuffer) -> WavSpec {
    WavSpec {
        channels: buffer.channel_count() as u16,
        sample_rate: buffer.sample_rate(),
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Int,
    }
}

fn write_interleaved<W: Write + Seek>(writer: &mut WavWriter<W>, buffer: &SampleBuffer) -> Result<()> {
    let channels = buffer.channels();
    for frame in 0..buffer.frame_count() {
        for channel in channels {
            writer.write_sample(float_to_i16(channel[frame]))?;
        }
    }
    Ok(())
}

/// Convert a float sample to 16-bit PCM with clipping
///
/// Negative samples scale by 32768 and positive ones by 32767, so both
/// `-1.0` and `+1.0` land exactly on the `i16` limits. The cast truncates
/// toward zero.
#[inline]
pub fn float_to_i16(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    if clamped < 0.0 {
        (clamped * 32768.0) as i16
    } else {
        (clamped * 32767.0) as i16
    }
}
