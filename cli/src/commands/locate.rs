use std::net::Ipv4Addr;

use geotrace_common::{config::Config, hop::HopAddress};
use geotrace_core::geolocation::{GeoResolver, IpApiGeolocator, Resolved};

use crate::terminal::{format, print};

pub async fn locate(ip: Ipv4Addr, cfg: &Config) -> anyhow::Result<()> {
    let resolver = GeoResolver::new(Box::new(IpApiGeolocator::new(&cfg.geo_endpoint)?));
    let resolved: Resolved = resolver.resolve(&HopAddress::from(ip)).await?;

    print::header("location", cfg.quiet);
    print::hop_tree(0, &resolved.point.label, &format::resolved_to_details(&resolved));
    Ok(())
}
