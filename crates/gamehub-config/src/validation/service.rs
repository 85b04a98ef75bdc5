use crate::schema::GameHubConfig;

use super::helpers::validate_range;

pub(crate) fn validate_service(errors: &mut Vec<String>, config: &GameHubConfig) {
    let service = &config.service;
    let url = service.base_url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!(
            "service.base_url = {:?} must start with http:// or https://",
            service.base_url
        ));
    }
    validate_range(
        errors,
        "service.connect_timeout_ms",
        service.connect_timeout_ms,
        100,
        60_000,
    );
    validate_range(
        errors,
        "service.request_timeout_ms",
        service.request_timeout_ms,
        100,
        120_000,
    );
}
