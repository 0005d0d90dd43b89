//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates the per-IP rate limiter for `/api`.
///
/// # Limits
///
/// - **Rate**: one token replenished every `replenish_ms` milliseconds
/// - **Burst**: `burst_size` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`. The client
/// key is the socket peer address, so the router must be served with
/// connect info.
///
/// # Panics
///
/// Panics if either argument is zero; [`crate::config::Config::validate`]
/// rejects such values before the router is built.
pub fn layer(
    replenish_ms: u64,
    burst_size: u32,
) -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit values are validated at startup"),
    );

    GovernorLayer::new(governor_conf)
}
