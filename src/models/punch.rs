use super::punch_type::PunchType;
use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A stored punch. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchRecord {
    pub id: String,
    pub user_id: String,
    pub kind: PunchType,
    pub time: String,                     // ⇔ records.time ("HH:MM" label)
    pub timestamp: DateTime<Utc>,         // ⇔ records.timestamp (RFC3339)
    pub photo: Option<Photo>,             // ⇔ records.photo (data URL)
    pub location: Option<GeoPoint>,       // ⇔ records.latitude / longitude
}

/// Everything needed to append a punch; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewPunch {
    pub user_id: String,
    pub kind: PunchType,
    pub time: String,
    pub timestamp: DateTime<Utc>,
    pub photo: Option<Photo>,
    pub location: Option<GeoPoint>,
}

impl NewPunch {
    pub fn into_record(self, id: String) -> PunchRecord {
        PunchRecord {
            id,
            user_id: self.user_id,
            kind: self.kind,
            time: self.time,
            timestamp: self.timestamp,
            photo: self.photo,
            location: self.location,
        }
    }
}

/// Optional data captured together with a punch.
#[derive(Debug, Clone, Default)]
pub struct Capture {
    pub photo: Option<Photo>,
    pub location: Option<GeoPoint>,
}

/// Opaque photo payload, kept as a `data:` URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Photo(String);

impl Photo {
    pub fn from_data_url(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Read an image file and wrap it as `data:<mime>;base64,<payload>`.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(mime_for(path), &bytes))
    }

    pub fn from_bytes(mime: &str, bytes: &[u8]) -> Self {
        Self(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn mime_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Latitude/longitude in decimal degrees, rounded to 6 fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> AppResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidCoordinates(format!(
                "latitude {latitude} out of range [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidCoordinates(format!(
                "longitude {longitude} out of range [-180, 180]"
            )));
        }

        Ok(Self {
            latitude: round6(latitude),
            longitude: round6(longitude),
        })
    }
}

fn round6(v: f64) -> f64 {
    (v * 1_000_000.0).round() / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geopoint_keeps_six_fraction_digits() {
        let p = GeoPoint::new(-23.550_519_9, -46.633_308_4).unwrap();
        assert_eq!(format!("{:.6}", p.latitude), "-23.550520");
        assert_eq!(format!("{:.6}", p.longitude), "-46.633308");
        assert_eq!(p.latitude, -23.55052);
    }

    #[test]
    fn geopoint_rejects_out_of_range() {
        assert!(matches!(
            GeoPoint::new(91.0, 0.0),
            Err(AppError::InvalidCoordinates(_))
        ));
        assert!(matches!(
            GeoPoint::new(0.0, -180.5),
            Err(AppError::InvalidCoordinates(_))
        ));
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn photo_is_stored_as_data_url() {
        let p = Photo::from_bytes("image/jpeg", b"abc");
        assert_eq!(p.as_str(), "data:image/jpeg;base64,YWJj");
        assert_eq!(mime_for(Path::new("face.PNG")), "image/png");
        assert_eq!(mime_for(Path::new("face")), "application/octet-stream");
    }
}
