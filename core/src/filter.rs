use geotrace_common::config::OriginPolicy;
use geotrace_common::hop::HopAddress;

/// Applies `policy` to the extracted hops. Empty input is returned unchanged.
pub fn apply(policy: OriginPolicy, mut hops: Vec<HopAddress>) -> Vec<HopAddress> {
    match policy {
        OriginPolicy::DropFirst => {
            if !hops.is_empty() {
                hops.remove(0);
            }
            hops
        }
        OriginPolicy::KeepAll => hops,
    }
}

/// Removes the first entry, if any.
pub fn drop_origin(hops: Vec<HopAddress>) -> Vec<HopAddress> {
    apply(OriginPolicy::DropFirst, hops)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
