use std::fmt;
use std::net::Ipv4Addr;

/// A dotted-quad address as it appeared in trace output.
///
/// The text is kept verbatim: the extraction pattern allows octets up to
/// `999`, so not every hop is a valid [`Ipv4Addr`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HopAddress(String);

impl HopAddress {
    pub fn new(addr: impl Into<String>) -> Self {
        Self(addr.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_ipv4(&self) -> Option<Ipv4Addr> {
        self.0.parse().ok()
    }
}

impl fmt::Display for HopAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Ipv4Addr> for HopAddress {
    fn from(addr: Ipv4Addr) -> Self {
        Self(addr.to_string())
    }
}

impl From<&str> for HopAddress {
    fn from(addr: &str) -> Self {
        Self(addr.to_string())
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
