use std::io::Cursor;

use interpreter_domain::DomainError;

const RIFF_MAGIC: &[u8; 4] = b"RIFF";

/// Normalizes captured bytes to the WAV container the transcription service
/// expects. Bytes already carrying a RIFF header pass through unchanged;
/// anything else is treated as 16-bit little-endian mono PCM and wrapped.
pub fn ensure_wav_container(bytes: Vec<u8>, sample_rate_hz: u32) -> Result<Vec<u8>, DomainError> {
    if bytes.is_empty() {
        return Err(DomainError::capture("audio payload is empty"));
    }
    if bytes.len() >= 4 && &bytes[..4] == RIFF_MAGIC {
        return Ok(bytes);
    }
    if bytes.len() % 2 != 0 {
        return Err(DomainError::capture(
            "raw payload is not 16-bit PCM (odd byte count)",
        ));
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: sample_rate_hz,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    let mut writer = hound::WavWriter::new(&mut cursor, spec)
        .map_err(|err| DomainError::capture(format!("could not open wav writer: {err}")))?;
    for chunk in bytes.chunks_exact(2) {
        let sample = i16::from_le_bytes([chunk[0], chunk[1]]);
        writer
            .write_sample(sample)
            .map_err(|err| DomainError::capture(format!("could not write sample: {err}")))?;
    }
    writer
        .finalize()
        .map_err(|err| DomainError::capture(format!("could not finalize wav: {err}")))?;
    Ok(cursor.into_inner())
}
