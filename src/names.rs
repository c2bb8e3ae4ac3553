pub const HOME_URL: &str = "/";
pub const HEALTH_URL: &str = "/health";
pub const CREATE_URL: &str = "/create";
pub const TRIVIA_URL: &str = "/trivia";
pub const TRIVIA_BUNDLE_ROUTE: &str = "/trivia/{id}";

pub fn trivia_bundle_url(id: i32) -> String {
    format!("/trivia/{id}")
}

pub fn category_url(category: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(category.as_bytes()).collect();
    format!("/?category={encoded}")
}

// Health check deadline
pub const HEALTH_CHECK_TIMEOUT_SECS: u64 = 1;
