use geotrace_common::error::LookupError;
use geotrace_common::geo::Path;
use geotrace_common::hop::HopAddress;

use crate::geolocation::{GeoResolver, Resolved};

/// Builds the located path from the filtered hops.
///
/// Lookups run one at a time, in hop order. The first failure ends the
/// assembly and no partial path is returned.
pub struct PathAssembler {
    resolver: GeoResolver,
}

impl PathAssembler {
    pub fn new(resolver: GeoResolver) -> Self {
        Self { resolver }
    }

    pub async fn assemble(&self, hops: &[HopAddress]) -> Result<Path, LookupError> {
        self.assemble_with(hops, |_, _| {}).await
    }

    /// Like [`assemble`](Self::assemble), calling `on_resolved` after each hop is placed.
    pub async fn assemble_with<F>(
        &self,
        hops: &[HopAddress],
        mut on_resolved: F,
    ) -> Result<Path, LookupError>
    where
        F: FnMut(usize, &Resolved),
    {
        let mut path: Path = Vec::with_capacity(hops.len());
        for (idx, hop) in hops.iter().enumerate() {
            let resolved: Resolved = self.resolver.resolve(hop).await?;
            on_resolved(idx, &resolved);
            path.push(resolved.point);
        }
        Ok(path)
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
