//! Mock feed server helpers

use quake_report::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mock server serves the feed on
pub const FEED_PATH: &str = "/earthquakes/feed/v1.0/summary/significant_month.geojson";

/// Start a mock server that answers the feed path with `status` and `body`
pub async fn serve_feed(status: u16, body: &str) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(FEED_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    server
}

/// Config pointing at the mock server's feed
pub fn config_for(server: &MockServer, minimum_magnitude: f64) -> Config {
    Config {
        feed_url: format!("{}{}", server.uri(), FEED_PATH),
        minimum_magnitude,
    }
}
