//! Decoding of the inspection photo carried inline in a submission.
//!
//! The capture application stores the photo as a data URI
//! (`data:image/png;base64,<payload>`). Only the payload after the first
//! comma is used; the MIME prefix is ignored and the format is sniffed from
//! the decoded bytes instead.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use flate2::Compression;
use flate2::write::ZlibEncoder;
use lopdf::{Stream, dictionary};
use schouw_layout::Size;
use std::io::Write;
use thiserror::Error;

/// Why a photo could not be embedded. Always recovered by the renderer.
#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("photo reference has no ',' separating header and payload")]
    MissingSeparator,
    #[error("photo payload is empty")]
    EmptyPayload,
    #[error("photo payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("photo bytes could not be decoded as an image: {0}")]
    Image(#[from] image::ImageError),
    #[error("failed to compress photo data: {0}")]
    Compression(#[from] std::io::Error),
}

/// Standard alphabet, accepting payloads with or without `=` padding.
const PAYLOAD_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Returns the raw image bytes encoded in a data URI. Whitespace inside the
/// payload, such as MIME line breaks, is ignored.
pub fn decode_payload(photo_url: &str) -> Result<Vec<u8>, PhotoError> {
    let (_, payload) = photo_url
        .split_once(',')
        .ok_or(PhotoError::MissingSeparator)?;
    let payload: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    if payload.is_empty() {
        return Err(PhotoError::EmptyPayload);
    }
    Ok(PAYLOAD_ENGINE.decode(payload)?)
}

/// A decoded photo as 8-bit RGB samples, ready to become an image XObject.
#[derive(Debug, Clone)]
pub struct EmbeddedPhoto {
    pub width: u32,
    pub height: u32,
    rgb: Vec<u8>,
}

impl EmbeddedPhoto {
    pub fn from_data_uri(photo_url: &str) -> Result<Self, PhotoError> {
        let bytes = decode_payload(photo_url)?;
        Self::from_image_bytes(&bytes)
    }

    /// Decodes PNG, JPEG or GIF bytes. Transparency is dropped.
    pub fn from_image_bytes(bytes: &[u8]) -> Result<Self, PhotoError> {
        let decoded = image::load_from_memory(bytes)?.to_rgb8();
        let (width, height) = decoded.dimensions();
        Ok(Self {
            width,
            height,
            rgb: decoded.into_raw(),
        })
    }

    pub fn intrinsic_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Builds a Flate-compressed `DeviceRGB` image XObject.
    pub fn to_xobject(&self) -> Result<Stream, PhotoError> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&self.rgb)?;
        let compressed = encoder.finish()?;

        let dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => self.width as i64,
            "Height" => self.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "FlateDecode",
        };
        Ok(Stream::new(dict, compressed).with_compression(false))
    }
}
