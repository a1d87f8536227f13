#![cfg(test)]
use geotrace_common::config::{AddressDelimiters, OriginPolicy};
use geotrace_common::error::PipelineError;
use geotrace_common::geo::GeoPoint;
use geotrace_common::hop::HopAddress;
use geotrace_common::host::Host;
use geotrace_core::extract::HopExtractor;
use geotrace_core::geolocation::IpApiGeolocator;
use geotrace_core::render::MapRenderer;
use geotrace_core::service::TraceService;
use wiremock::MockServer;

use crate::utils::{ScriptedRunner, mock_failure, mock_location};

const TRACE: &str = "1 [192.168.1.1]\n2 [203.0.113.5]\n3 [8.8.8.8]";

fn service(
    output: Option<&str>,
    server: &MockServer,
    map: &std::path::Path,
    policy: OriginPolicy,
) -> TraceService {
    TraceService::new(
        HopExtractor::new(
            Box::new(ScriptedRunner(output.map(str::to_string))),
            AddressDelimiters::Brackets,
        ),
        policy,
        Box::new(IpApiGeolocator::new(format!("{}/json", server.uri())).unwrap()),
        Box::new(MapRenderer::new(map, 600, 250).with_labels(false)),
    )
}

fn host() -> Host {
    "interia.pl".parse().unwrap()
}

/// The first hop is dropped, the rest are located in order and the map is written.
#[tokio::test]
async fn trace_to_map() {
    let server = MockServer::start().await;
    mock_location(&server, "203.0.113.5", "Frankfurt", 50.11, 8.68).await;
    mock_location(&server, "8.8.8.8", "Ashburn", 39.03, -77.5).await;
    let dir = tempfile::tempdir().unwrap();
    let map = dir.path().join("mapa.png");

    let svc = service(Some(TRACE), &server, &map, OriginPolicy::DropFirst);
    let mut order: Vec<usize> = Vec::new();
    let report = svc.run(&host(), |idx, _| order.push(idx)).await.unwrap();

    assert_eq!(
        report.intermediate,
        vec![HopAddress::from("203.0.113.5"), HopAddress::from("8.8.8.8")]
    );
    assert_eq!(
        report.path,
        vec![
            GeoPoint::new(8.68, 50.11, "Frankfurt"),
            GeoPoint::new(-77.5, 39.03, "Ashburn"),
        ]
    );
    assert_eq!(order, vec![0, 1]);
    assert_eq!(report.map, map);
    assert!(std::fs::metadata(&map).unwrap().len() > 0);
}

/// One unresolvable hop aborts the run and no map is produced.
#[tokio::test]
async fn lookup_failure_is_fatal() {
    let server = MockServer::start().await;
    mock_location(&server, "203.0.113.5", "Frankfurt", 50.11, 8.68).await;
    mock_failure(&server, "8.8.8.8").await;
    let dir = tempfile::tempdir().unwrap();
    let map = dir.path().join("mapa.png");

    let svc = service(Some(TRACE), &server, &map, OriginPolicy::DropFirst);
    let err = svc.run(&host(), |_, _| {}).await.unwrap_err();

    match err {
        PipelineError::Lookup(e) => {
            assert_eq!(e.ip, "8.8.8.8");
            assert_eq!(e.reason, "reserved range");
        }
        other => panic!("expected lookup error, got {other:?}"),
    }
    assert!(!map.exists());
}

/// A trace that cannot run ends in a clear empty-path error.
#[tokio::test]
async fn failed_trace_reports_empty_path() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let map = dir.path().join("mapa.png");

    let svc = service(None, &server, &map, OriginPolicy::DropFirst);
    let err = svc.run(&host(), |_, _| {}).await.unwrap_err();

    assert!(matches!(err, PipelineError::EmptyPath { .. }));
    assert!(err.to_string().contains("interia.pl"));
    assert!(!map.exists());
    assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

/// With `KeepAll` the first address is located too.
#[tokio::test]
async fn keep_all_locates_every_hop() {
    let server = MockServer::start().await;
    mock_location(&server, "203.0.113.5", "Frankfurt", 50.11, 8.68).await;
    mock_location(&server, "8.8.8.8", "Ashburn", 39.03, -77.5).await;
    let dir = tempfile::tempdir().unwrap();
    let map = dir.path().join("mapa.png");

    let svc = service(
        Some("[203.0.113.5]\n * * *\n[8.8.8.8]"),
        &server,
        &map,
        OriginPolicy::KeepAll,
    );
    let report = svc.run(&host(), |_, _| {}).await.unwrap();

    assert_eq!(report.hops, report.intermediate);
    assert_eq!(report.path.len(), 2);
}
