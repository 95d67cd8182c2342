//! Admin-uploaded audio: narrated sounds and labeled audio files

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::RecordId;

/// Narrated sound used by activities (letter sounds, instructions)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoundAsset {
    pub id: RecordId,
    pub label: String,
    pub category: String,
    /// `data:` URL or remote URL returned by the store
    pub data_url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Audio file with a free-form label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFile {
    pub id: RecordId,
    pub label: String,
    pub file_name: String,
    pub data_url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Upload request for a narrated sound
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSoundAsset {
    pub label: String,
    pub category: String,
    pub data_url: String,
}

impl NewSoundAsset {
    pub fn new(
        label: impl Into<String>,
        category: impl Into<String>,
        data_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            label: required("Sound label", label.into())?,
            category: required("Sound category", category.into())?,
            data_url: audio_data_url(data_url.into())?,
        })
    }
}

/// Upload request for a labeled audio file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAudioFile {
    pub label: String,
    pub file_name: String,
    pub data_url: String,
}

impl NewAudioFile {
    pub fn new(
        label: impl Into<String>,
        file_name: impl Into<String>,
        data_url: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            label: required("Audio label", label.into())?,
            file_name: required("File name", file_name.into())?,
            data_url: audio_data_url(data_url.into())?,
        })
    }
}

fn required(field: &str, value: String) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed.to_string())
}

fn audio_data_url(value: String) -> Result<String, DomainError> {
    if !value.starts_with("data:audio/") {
        return Err(DomainError::validation("Upload must be an audio data URL"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sound_requires_audio_payload() {
        assert!(NewSoundAsset::new("A", "harfler", "data:audio/mpeg;base64,AAAA").is_ok());
        assert!(NewSoundAsset::new("A", "harfler", "data:image/png;base64,AAAA").is_err());
    }

    #[test]
    fn new_audio_file_trims_fields() {
        let file = NewAudioFile::new(" Kuş ", " kus.mp3 ", "data:audio/mpeg;base64,AA").unwrap();
        assert_eq!(file.label, "Kuş");
        assert_eq!(file.file_name, "kus.mp3");
    }

    #[test]
    fn blank_label_is_rejected() {
        assert!(NewAudioFile::new(" ", "a.mp3", "data:audio/mpeg;base64,AA").is_err());
    }
}
