//! # Hop Geolocation
//!
//! [`Geolocator`] is the seam to the remote geolocation service;
//! [`IpApiGeolocator`] speaks the ip-api.com JSON protocol. [`GeoResolver`]
//! turns a lookup into the point drawn on the map plus its DMS rendering.
//!
//! Every failure collapses into a single [`LookupError`]. There are no
//! retries, no timeouts and no caching.

use async_trait::async_trait;
use geotrace_common::error::LookupError;
use geotrace_common::geo::{Dms, GeoPoint, GeoRecord, decimal_to_dms};
use geotrace_common::hop::HopAddress;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Maps an address to a location.
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn lookup(&self, ip: &HopAddress) -> Result<GeoRecord, LookupError>;
}

pub struct IpApiGeolocator {
    endpoint: String,
    client: Client,
}

impl IpApiGeolocator {
    /// `endpoint` is the base URL; lookups go to `{endpoint}/{ip}`.
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            endpoint: endpoint.into(),
            client: Client::builder().build()?,
        })
    }

    fn url_for(&self, ip: &HopAddress) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), ip)
    }
}

#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    city: String,
    #[serde(default, rename = "regionName")]
    region: String,
    #[serde(default)]
    country: String,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

impl IpApiResponse {
    fn into_record(self, ip: &HopAddress) -> Result<GeoRecord, LookupError> {
        if self.status != "success" {
            let reason: String = self.message.unwrap_or_else(|| format!("status {}", self.status));
            return Err(LookupError::new(ip.as_str(), reason));
        }

        let (Some(latitude), Some(longitude)) = (self.lat, self.lon) else {
            return Err(LookupError::new(ip.as_str(), "response without coordinates"));
        };

        Ok(GeoRecord {
            ip: self.query.unwrap_or_else(|| ip.to_string()),
            city: self.city,
            region: self.region,
            country: self.country,
            latitude,
            longitude,
        })
    }
}

#[async_trait]
impl Geolocator for IpApiGeolocator {
    async fn lookup(&self, ip: &HopAddress) -> Result<GeoRecord, LookupError> {
        let url: String = self.url_for(ip);
        debug!(%ip, %url, "geolocation request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::new(ip.as_str(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::new(ip.as_str(), format!("HTTP {status}")));
        }

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| LookupError::new(ip.as_str(), e))?;

        body.into_record(ip)
    }
}

/// A successful lookup together with what is drawn and printed for it.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    pub record: GeoRecord,
    pub point: GeoPoint,
    pub latitude_dms: Dms,
    pub longitude_dms: Dms,
}

impl From<GeoRecord> for Resolved {
    fn from(record: GeoRecord) -> Self {
        Self {
            point: record.to_point(),
            latitude_dms: decimal_to_dms(record.latitude),
            longitude_dms: decimal_to_dms(record.longitude),
            record,
        }
    }
}

pub struct GeoResolver {
    geolocator: Box<dyn Geolocator>,
}

impl GeoResolver {
    pub fn new(geolocator: Box<dyn Geolocator>) -> Self {
        Self { geolocator }
    }

    pub async fn resolve(&self, ip: &HopAddress) -> Result<Resolved, LookupError> {
        let record: GeoRecord = self.geolocator.lookup(ip).await?;
        debug!(
            %ip,
            city = %record.city,
            lat = record.latitude,
            lon = record.longitude,
            "hop located"
        );
        Ok(Resolved::from(record))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    async fn respond_with(server: &MockServer, ip: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/json/{ip}")))
            .respond_with(response)
            .mount(server)
            .await;
    }

    fn geolocator(server: &MockServer) -> IpApiGeolocator {
        IpApiGeolocator::new(format!("{}/json", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn parses_successful_lookup() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "status": "success",
            "query": "8.8.8.8",
            "city": "Ashburn",
            "regionName": "Virginia",
            "country": "United States",
            "lat": 39.03,
            "lon": -77.5
        });
        respond_with(&server, "8.8.8.8", ResponseTemplate::new(200).set_body_json(body)).await;

        let record = geolocator(&server)
            .lookup(&HopAddress::from("8.8.8.8"))
            .await
            .unwrap();

        assert_eq!(record.city, "Ashburn");
        assert_eq!(record.region, "Virginia");
        assert_eq!(record.country, "United States");
        assert_eq!(record.latitude, 39.03);
        assert_eq!(record.longitude, -77.5);
    }

    #[tokio::test]
    async fn fail_status_is_a_lookup_error() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "status": "fail",
            "message": "private range",
            "query": "192.168.1.1"
        });
        respond_with(&server, "192.168.1.1", ResponseTemplate::new(200).set_body_json(body)).await;

        let err = geolocator(&server)
            .lookup(&HopAddress::from("192.168.1.1"))
            .await
            .unwrap_err();

        assert_eq!(err, LookupError::new("192.168.1.1", "private range"));
    }

    #[tokio::test]
    async fn http_error_is_a_lookup_error() {
        let server = MockServer::start().await;
        respond_with(&server, "1.1.1.1", ResponseTemplate::new(429)).await;

        let err = geolocator(&server)
            .lookup(&HopAddress::from("1.1.1.1"))
            .await
            .unwrap_err();

        assert_eq!(err.ip, "1.1.1.1");
        assert!(err.reason.contains("429"), "{}", err.reason);
    }

    #[tokio::test]
    async fn garbage_body_is_a_lookup_error() {
        let server = MockServer::start().await;
        respond_with(
            &server,
            "1.1.1.1",
            ResponseTemplate::new(200).set_body_string("<html>quota</html>"),
        )
        .await;

        assert!(geolocator(&server).lookup(&HopAddress::from("1.1.1.1")).await.is_err());
    }

    #[tokio::test]
    async fn missing_coordinates_is_a_lookup_error() {
        let server = MockServer::start().await;
        let body = serde_json::json!({ "status": "success", "city": "Nowhere" });
        respond_with(&server, "1.1.1.1", ResponseTemplate::new(200).set_body_json(body)).await;

        let err = geolocator(&server)
            .lookup(&HopAddress::from("1.1.1.1"))
            .await
            .unwrap_err();
        assert_eq!(err.reason, "response without coordinates");
    }

    #[test]
    fn url_ignores_trailing_slash() {
        let locator = IpApiGeolocator::new("http://localhost/json/").unwrap();
        assert_eq!(
            locator.url_for(&HopAddress::from("8.8.8.8")),
            "http://localhost/json/8.8.8.8"
        );
    }

    #[test]
    fn resolved_carries_point_and_dms() {
        let resolved = Resolved::from(GeoRecord {
            ip: "1.2.3.4".into(),
            city: "Dublin".into(),
            region: "Leinster".into(),
            country: "Ireland".into(),
            latitude: 53.3493795,
            longitude: -6.2605593,
        });
        assert_eq!(resolved.point, GeoPoint::new(-6.2605593, 53.3493795, "Dublin"));
        assert_eq!(resolved.latitude_dms.degrees, 53);
        assert_eq!(resolved.longitude_dms.degrees, 6);
        assert_eq!(resolved.longitude_dms.minutes, 15);
    }
}
