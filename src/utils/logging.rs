use tracing::{info, warn, error, debug};

pub fn log_request_received(endpoint: &str, method: &str) {
    info!("Request received: {} {}", method, endpoint);
}

pub fn log_request_processed(endpoint: &str, status: u16, duration_ms: u64) {
    info!("Request processed: {} - Status: {} - Duration: {}ms",
          endpoint, status, duration_ms);
}

pub fn log_upstream_error(upstream: &str, error: &str) {
    error!("Upstream error: {} - Error: {}", upstream, error);
}

pub fn log_upstream_status(upstream: &str, status: u16) {
    warn!("Upstream returned non-success status: {} - Status: {}", upstream, status);
}

pub fn log_config_loaded(env: &str) {
    info!("Configuration loaded successfully for environment: {}", env);
}

pub fn log_server_startup(port: u16) {
    info!("🚀 IGDB search gateway starting on port {}", port);
}

pub fn log_server_ready(address: &str) {
    info!("✅ Server ready and listening on http://{}", address);
}

pub fn log_health_check() {
    debug!("Health check requested");
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Validation error: {} - {}", field, message);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
