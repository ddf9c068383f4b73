pub const API_URL: &str = "https://api.layer.com";

/// Versioned vendor media type sent as `Accept` on every request.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.layer+json; version=1.0";

/// Builds the URL for an endpoint under an application.
///
/// No segments yields the application's base collection URL.
pub fn app_url(app_id: &str, segments: &[&str]) -> String {
	format!("{}/apps/{}/{}", API_URL, app_id, segments.join("/"))
}
