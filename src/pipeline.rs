//! Render pipeline: decode, stretch, enhance, encode.

use narrata_codec::{decode, decode_base64_payload, encode_wav, RawPcmFormat, WAV_MIME_TYPE};
use narrata_core::{format_time, SampleBuffer};
use narrata_dsp::{EnhancementSettings, Enhancer};
use narrata_stretch::{SolaConfig, TimeStretcher};
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::Result;

/// A finished WAV file and a summary of what it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedAudio {
    bytes: Vec<u8>,
    sample_rate: u32,
    channel_count: usize,
    frame_count: usize,
}

impl RenderedAudio {
    fn new(bytes: Vec<u8>, buffer: &SampleBuffer) -> Self {
        Self {
            bytes,
            sample_rate: buffer.sample_rate(),
            channel_count: buffer.channel_count(),
            frame_count: buffer.frame_count(),
        }
    }

    /// The complete WAV file
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn mime_type(&self) -> &'static str {
        WAV_MIME_TYPE
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn channel_count(&self) -> usize {
        self.channel_count
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.frame_count as f64 / self.sample_rate as f64
    }

    /// Duration as `mm:ss` for playback controls
    pub fn duration_label(&self) -> String {
        format_time(self.duration())
    }
}

/// Turns TTS output bytes into a playable WAV file.
///
/// Control flow per render is fixed: decode, time-stretch when the speed is
/// not 1.0, enhance when enabled, encode. Every stage produces a new buffer;
/// nothing is shared between renders, so one pipeline can serve many
/// threads.
///
/// # Example
///
/// ```no_run
/// use narrata::Pipeline;
///
/// # fn main() -> narrata::Result<()> {
/// # let tts_bytes: Vec<u8> = Vec::new();
/// let pipeline = Pipeline::builder().speed(1.25).enhance(true).build()?;
/// let audio = pipeline.render(&tts_bytes)?;
/// println!("{} ({})", audio.mime_type(), audio.duration_label());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    enhancer: Enhancer,
    stretcher: TimeStretcher,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            config: PipelineConfig::default(),
            enhancer: Enhancer::cinematic(),
            stretcher: TimeStretcher::default(),
        }
    }
}

impl Pipeline {
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Pipeline with default enhancement and stretch settings.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage over `bytes` (WAV or raw 16-bit PCM).
    pub fn render(&self, bytes: &[u8]) -> Result<RenderedAudio> {
        let buffer = self.decode_stage(bytes)?;
        let buffer = self.stretch_stage(buffer)?;
        let buffer = self.enhance_stage(buffer)?;
        self.encode_stage(&buffer)
    }

    /// Render audio handed over as base64 text.
    pub fn render_base64(&self, payload: &str) -> Result<RenderedAudio> {
        let bytes = decode_base64_payload(payload)?;
        self.render(&bytes)
    }

    /// [`render`](Self::render) with a yield to the runtime after each stage.
    ///
    /// Stages themselves are not interrupted; dropping the future between
    /// stages abandons the render.
    #[cfg(feature = "async")]
    pub async fn render_async(&self, bytes: Vec<u8>) -> Result<RenderedAudio> {
        use tokio::task::yield_now;

        let buffer = self.decode_stage(&bytes)?;
        drop(bytes);
        yield_now().await;

        let buffer = self.stretch_stage(buffer)?;
        yield_now().await;

        let buffer = self.enhance_stage(buffer)?;
        yield_now().await;

        self.encode_stage(&buffer)
    }

    fn decode_stage(&self, bytes: &[u8]) -> Result<SampleBuffer> {
        let buffer = decode(bytes, self.config.raw_format)?;
        debug!(
            input_bytes = bytes.len(),
            frames = buffer.frame_count(),
            channels = buffer.channel_count(),
            sample_rate = buffer.sample_rate(),
            "decoded"
        );
        Ok(buffer)
    }

    fn stretch_stage(&self, buffer: SampleBuffer) -> Result<SampleBuffer> {
        if !self.config.needs_stretch() {
            return Ok(buffer);
        }
        let stretched = self.stretcher.process(&buffer, self.config.speed)?;
        debug!(
            speed = self.config.speed,
            frames_in = buffer.frame_count(),
            frames_out = stretched.frame_count(),
            "time-stretched"
        );
        Ok(stretched)
    }

    fn enhance_stage(&self, buffer: SampleBuffer) -> Result<SampleBuffer> {
        if !self.config.enhance {
            return Ok(buffer);
        }
        let enhanced = self.enhancer.process(&buffer)?;
        debug!(frames = enhanced.frame_count(), "enhanced");
        Ok(enhanced)
    }

    fn encode_stage(&self, buffer: &SampleBuffer) -> Result<RenderedAudio> {
        let bytes = encode_wav(buffer)?;
        let rendered = RenderedAudio::new(bytes, buffer);
        info!(
            frames = rendered.frame_count(),
            duration = %rendered.duration_label(),
            bytes = rendered.bytes().len(),
            "render complete"
        );
        Ok(rendered)
    }
}

/// Builder for configuring a [`Pipeline`].
///
/// # Example
///
/// ```
/// use narrata::{Pipeline, RawPcmFormat};
///
/// let pipeline = Pipeline::builder()
///     .raw_format(RawPcmFormat::mono(22050))
///     .speed(0.75)
///     .enhance(false)
///     .build()
///     .unwrap();
/// assert_eq!(pipeline.config().speed, 0.75);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
    enhancement: EnhancementSettings,
    sola: SolaConfig,
}

impl PipelineBuilder {
    /// Replace all per-render options at once
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Default: 24000 Hz mono
    pub fn raw_format(mut self, format: RawPcmFormat) -> Self {
        self.config.raw_format = format;
        self
    }

    /// Default: 1.0
    pub fn speed(mut self, speed: f64) -> Self {
        self.config.speed = speed;
        self
    }

    /// Default: true
    pub fn enhance(mut self, enabled: bool) -> Self {
        self.config.enhance = enabled;
        self
    }

    /// Override the cinematic preset
    pub fn enhancement(mut self, settings: EnhancementSettings) -> Self {
        self.enhancement = settings;
        self
    }

    /// Override the 40/20/8 ms SOLA windows
    pub fn sola(mut self, config: SolaConfig) -> Self {
        self.sola = config;
        self
    }

    /// Validates everything before any audio is touched.
    pub fn build(self) -> Result<Pipeline> {
        self.config.validate()?;
        Ok(Pipeline {
            config: self.config,
            enhancer: Enhancer::new(self.enhancement)?,
            stretcher: TimeStretcher::new(self.sola)?,
        })
    }
}
