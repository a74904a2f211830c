use std::time::Duration;

pub fn default_http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .gzip(true)
        .brotli(true)
        .timeout(timeout)
        .build()
}
