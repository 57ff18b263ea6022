use crate::models::Clinic;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::env;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.geoapify.com";
const PLACE_CATEGORIES: &str = "healthcare.hospital,healthcare.clinic_or_praxis";
const SEARCH_RADIUS_M: u32 = 5000;
const RESULT_LIMIT: u32 = 35;
const DEFAULT_SERVICES: [&str; 3] = ["Checkups", "Maternity", "Vaccinations"];

#[derive(Debug, Error)]
pub enum ClinicError {
    #[error("GEOAPIFY_API_KEY is not set")]
    MissingApiKey,
    #[error("Location not found")]
    LocationNotFound,
    #[error("places service returned {0}")]
    UnexpectedStatus(StatusCode),
    #[error("places request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Thin wrapper over the Geoapify geocode and places endpoints: resolve the
/// free-text location to coordinates, then list healthcare places within a
/// fixed radius. One request each, no retries.
pub struct ClinicFinder {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ClinicFinder {
    pub fn from_env() -> Result<Self, ClinicError> {
        let api_key = env::var("GEOAPIFY_API_KEY").map_err(|_| ClinicError::MissingApiKey)?;
        let base_url =
            env::var("GEOAPIFY_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, api_key))
    }

    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
        }
    }

    pub async fn search(&self, location: &str) -> Result<Vec<Clinic>, ClinicError> {
        let (lat, lon) = self.geocode(location).await?;
        self.places_near(lat, lon).await
    }

    async fn geocode(&self, location: &str) -> Result<(f64, f64), ClinicError> {
        let url = format!("{}/v1/geocode/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[("text", location), ("apiKey", &self.api_key)])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClinicError::UnexpectedStatus(response.status()));
        }

        let body: FeatureCollection = response.json().await?;
        let feature = body
            .features
            .into_iter()
            .next()
            .ok_or(ClinicError::LocationNotFound)?;
        match (feature.properties.lat, feature.properties.lon) {
            (Some(lat), Some(lon)) => Ok((lat, lon)),
            _ => Err(ClinicError::LocationNotFound),
        }
    }

    async fn places_near(&self, lat: f64, lon: f64) -> Result<Vec<Clinic>, ClinicError> {
        let url = format!("{}/v2/places", self.base_url);
        let filter = format!("circle:{lon},{lat},{SEARCH_RADIUS_M}");
        let limit = RESULT_LIMIT.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("categories", PLACE_CATEGORIES),
                ("filter", filter.as_str()),
                ("limit", limit.as_str()),
                ("apiKey", &self.api_key),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ClinicError::UnexpectedStatus(response.status()));
        }

        let body: FeatureCollection = response.json().await?;
        Ok(body
            .features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| clinic_from(feature.properties, index))
            .collect())
    }
}

#[derive(Debug, Default, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: PlaceProperties,
}

#[derive(Debug, Default, Deserialize)]
struct PlaceProperties {
    lat: Option<f64>,
    lon: Option<f64>,
    place_id: Option<String>,
    name: Option<String>,
    formatted: Option<String>,
    address_line1: Option<String>,
    city: Option<String>,
    tel: Option<String>,
    distance: Option<f64>,
    website: Option<String>,
    opening_hours: Option<OpeningHours>,
}

// The places API has returned both a bare string and `{ "text": ... }`
// for opening hours.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OpeningHours {
    Structured { text: String },
    Plain(String),
}

impl OpeningHours {
    fn into_text(self) -> String {
        match self {
            OpeningHours::Structured { text } => text,
            OpeningHours::Plain(text) => text,
        }
    }
}

fn clinic_from(props: PlaceProperties, index: usize) -> Clinic {
    let address = props.formatted.unwrap_or_else(|| {
        format!(
            "{}, {}",
            props.address_line1.unwrap_or_default(),
            props.city.unwrap_or_default()
        )
    });

    Clinic {
        id: props.place_id.unwrap_or_else(|| index.to_string()),
        name: props.name.unwrap_or_else(|| "Unnamed Clinic".to_string()),
        address,
        phone: props.tel.unwrap_or_else(|| "N/A".to_string()),
        distance_km: props.distance.map(|meters| (meters / 100.0).round() / 10.0),
        services: DEFAULT_SERVICES.iter().map(ToString::to_string).collect(),
        hours: props
            .opening_hours
            .map(OpeningHours::into_text)
            .unwrap_or_else(|| "See website or call for hours".to_string()),
        website: props.website.unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_fills_fallbacks_for_sparse_places() {
        let clinic = clinic_from(PlaceProperties::default(), 3);
        assert_eq!(clinic.id, "3");
        assert_eq!(clinic.name, "Unnamed Clinic");
        assert_eq!(clinic.address, ", ");
        assert_eq!(clinic.phone, "N/A");
        assert_eq!(clinic.distance_km, None);
        assert_eq!(clinic.hours, "See website or call for hours");
        assert_eq!(clinic.services, ["Checkups", "Maternity", "Vaccinations"]);
        assert!(clinic.website.is_empty());
    }

    #[test]
    fn mapping_converts_distance_to_km_with_one_decimal() {
        let props = PlaceProperties {
            place_id: Some("abc".to_string()),
            name: Some("City Maternity Clinic".to_string()),
            formatted: Some("1 Main St, Springfield".to_string()),
            tel: Some("+1 555 0100".to_string()),
            distance: Some(1260.0),
            ..PlaceProperties::default()
        };

        let clinic = clinic_from(props, 0);
        assert_eq!(clinic.id, "abc");
        assert_eq!(clinic.address, "1 Main St, Springfield");
        assert_eq!(clinic.distance_km, Some(1.3));
    }

    #[test]
    fn opening_hours_accepts_both_shapes() {
        let structured: OpeningHours = serde_json::from_value(serde_json::json!({
            "text": "Mo-Fr 08:00-18:00"
        }))
        .unwrap();
        assert_eq!(structured.into_text(), "Mo-Fr 08:00-18:00");

        let plain: OpeningHours =
            serde_json::from_value(serde_json::json!("24/7")).unwrap();
        assert_eq!(plain.into_text(), "24/7");
    }
}
