use httpmock::MockServer;

use crate::client::{Client, ClientConfigBuilder, Endpoint};

pub(crate) const TEST_LANGUAGE: &str = "de";

/// Client pointed at `server`, under `/<language>/android.php`.
pub(crate) fn client_for(server: &MockServer) -> Client {
    let endpoint = Endpoint::try_new(
        server.url("/$language/android.php"),
        "$language".to_string(),
    )
    .unwrap();
    let config = ClientConfigBuilder::default()
        .language(TEST_LANGUAGE)
        .endpoint(endpoint)
        .build()
        .unwrap();
    Client::from_config(config).unwrap()
}
