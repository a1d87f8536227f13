use async_trait::async_trait;
use geotrace_common::error::TraceError;
use geotrace_common::host::Host;
use geotrace_core::trace::TraceRunner;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Replays canned trace output, or fails like a missing executable.
pub struct ScriptedRunner(pub Option<String>);

#[async_trait]
impl TraceRunner for ScriptedRunner {
    async fn run(&self, _host: &Host) -> Result<String, TraceError> {
        self.0.clone().ok_or_else(|| TraceError::Spawn {
            program: "tracert".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "tracert not found"),
        })
    }
}

pub async fn mock_location(server: &MockServer, ip: &str, city: &str, lat: f64, lon: f64) {
    let body = serde_json::json!({
        "status": "success",
        "query": ip,
        "city": city,
        "regionName": "",
        "country": "",
        "lat": lat,
        "lon": lon
    });
    Mock::given(method("GET"))
        .and(path(format!("/json/{ip}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mock_failure(server: &MockServer, ip: &str) {
    let body = serde_json::json!({ "status": "fail", "message": "reserved range", "query": ip });
    Mock::given(method("GET"))
        .and(path(format!("/json/{ip}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
