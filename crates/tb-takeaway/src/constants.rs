use std::time::Duration;

/// The default endpoint format for the Takeaway mobile API
pub const DEFAULT_ENDPOINT_URL_FORMAT: &str = "https://$language.citymeal.com/android/android.php";
pub const DEFAULT_ENDPOINT_REPLACE_TOKEN: &str = "$language";

/// The language subdomain used when none is configured
pub const DEFAULT_LANGUAGE: &str = "de";

/// Shared secret appended to every checksum
pub const DEFAULT_SECRET: &str = "4ndro1d";

pub const DEFAULT_PROTOCOL_VERSION: &str = "5.7";
pub const DEFAULT_SYSTEM_VERSION: &str = "24";
pub const DEFAULT_APP_VERSION: &str = "4.15.3.2";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Form field carrying the request checksum
pub const CHECKSUM_FIELD: &str = "var0";
/// Form field carrying the function name
pub const FUNCTION_FIELD: &str = "var1";

pub const LANGUAGE_FIELD: &str = "language";
pub const VERSION_FIELD: &str = "version";
pub const SYSTEM_VERSION_FIELD: &str = "systemVersion";
pub const APP_VERSION_FIELD: &str = "appVersion";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_url_format_has_token() {
        assert!(DEFAULT_ENDPOINT_URL_FORMAT.contains(DEFAULT_ENDPOINT_REPLACE_TOKEN));
    }
}
