//! End-to-end checks of the trace-to-map pipeline against fake trace output,
//! a mocked geolocation service and the real map renderer.

#[cfg(test)]
mod pipeline;
#[cfg(test)]
mod utils;
