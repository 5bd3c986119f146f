//! Request metrics
//!
//! - `wykop_requests_total` (counter): labels `method`, `status`
//! - `wykop_errors_total` (counter): label `kind`
//!
//! The library never installs a recorder. Until the application installs one
//! these calls are no-ops.

/// Record a completed round trip with its HTTP method and status code.
pub fn record_request(method: &'static str, status: u16) {
    metrics::counter!("wykop_requests_total", "method" => method, "status" => status.to_string())
        .increment(1);
}

/// Record a failed call with its error kind label.
pub fn record_error(kind: &'static str) {
    metrics::counter!("wykop_errors_total", "kind" => kind).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use metrics_exporter_prometheus::PrometheusBuilder;

    #[test]
    fn record_functions_do_not_panic_without_recorder() {
        record_request("GET", 200);
        record_error("not_found");
    }

    #[test]
    fn counters_render_with_labels() {
        // Isolated recorder: install_recorder() would claim the global slot
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();
        let _guard = metrics::set_default_local_recorder(&recorder);

        record_request("POST", 403);
        record_error("forbidden");

        let output = handle.render();
        assert!(output.contains("wykop_requests_total"), "got: {output}");
        assert!(output.contains("method=\"POST\""), "got: {output}");
        assert!(output.contains("status=\"403\""), "got: {output}");
        assert!(output.contains("wykop_errors_total"), "got: {output}");
        assert!(output.contains("kind=\"forbidden\""), "got: {output}");
    }
}
