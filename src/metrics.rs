use lazy_static::lazy_static;
use prometheus::{Counter, Gauge, register_counter, register_gauge};

lazy_static! {
    pub static ref REQUEST_TOTAL: Counter =
        register_counter!("qr_gateway_requests_total", "Total number of requests").unwrap();
    pub static ref RATE_LIMITED_TOTAL: Counter = register_counter!(
        "qr_gateway_rate_limited_total",
        "Requests rejected by the rate limiter"
    )
    .unwrap();
    pub static ref QR_CODE_COUNT: Gauge =
        register_gauge!("qr_gateway_qr_codes", "Current number of QR codes").unwrap();
    pub static ref CLICKS_TOTAL: Counter =
        register_counter!("qr_gateway_clicks_total", "Total recorded click events").unwrap();
}
