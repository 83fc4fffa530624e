use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

lazy_static! {
    /// Provider calls by operation (main_page, search, load, load_links)
    pub static ref PROVIDER_REQUESTS: IntCounterVec = register_int_counter_vec!(
        "provider_requests_total",
        "Provider operations invoked",
        &["operation"]
    )
    .unwrap();

    /// Detail pieces that degraded to empty (cast, related, taxonomy, seasons)
    pub static ref PROVIDER_DEGRADED: IntCounterVec = register_int_counter_vec!(
        "provider_degraded_total",
        "Detail pieces replaced by an empty value",
        &["piece"]
    )
    .unwrap();
}

pub fn record_request(operation: &str) {
    PROVIDER_REQUESTS.with_label_values(&[operation]).inc();
}

pub fn record_degraded(piece: &str) {
    PROVIDER_DEGRADED.with_label_values(&[piece]).inc();
}

/// Encode every registered metric in the Prometheus text format.
///
/// Returns the content type alongside the body.
pub fn render() -> Result<(String, Vec<u8>), prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut body = Vec::new();
    encoder.encode(&prometheus::gather(), &mut body)?;
    Ok((encoder.format_type().to_string(), body))
}
