use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub const WEATHER_API_KEY_VARS: &[&str] = &["HUARAZ_WEATHER_API_KEY", "OPENWEATHER_API_KEY"];
pub const DEFAULT_WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const DEFAULT_WEATHER_LOCATION: &str = "Huaraz,PE";
pub const DEFAULT_WEATHER_TIMEOUT: Duration = Duration::from_secs(10);

pub const STATIC_CLIMATE: &str = "Huaraz tiene un clima templado de montaña: días soleados de 18-22 °C y noches frías que pueden bajar a 0-5 °C. \
La estación seca va de mayo a septiembre, con cielos despejados ideales para trekking. \
De noviembre a marzo es temporada de lluvias, con tardes nubladas y precipitaciones frecuentes. \
Lleva siempre ropa abrigadora y protector solar por la radiación en altura.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherReport {
    pub location: String,
    /// False when `summary` is the static climate description.
    pub live: bool,
    pub summary: String,
}

/// First non-empty key among [`WEATHER_API_KEY_VARS`].
pub fn api_key_from_env() -> Option<String> {
    first_set_var(WEATHER_API_KEY_VARS)
}

/// A variable that is set but blank does not shadow the ones after it.
fn first_set_var(vars: &[&str]) -> Option<String> {
    vars.iter().find_map(|var| {
        std::env::var(var)
            .ok()
            .filter(|value| !value.trim().is_empty())
    })
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    #[serde(default)]
    weather: Vec<WeatherCondition>,
    main: MainReadings,
    #[serde(default)]
    wind: Option<Wind>,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    feels_like: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

/// Best-effort current weather. Missing key, network errors, timeouts and
/// malformed replies all degrade to [`STATIC_CLIMATE`].
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
}

impl WeatherClient {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build weather HTTP client")?;

        Ok(Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_WEATHER_URL.to_string(),
        })
    }

    pub fn from_env(timeout: Duration) -> Result<Self> {
        Self::new(api_key_from_env(), timeout)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn current(&self, location: &str) -> WeatherReport {
        let Some(api_key) = &self.api_key else {
            debug!("No weather API key configured, using static climate text");
            return Self::fallback(location, None);
        };

        match self.fetch(api_key, location).await {
            Ok(summary) => WeatherReport {
                location: location.to_string(),
                live: true,
                summary,
            },
            Err(e) => {
                warn!("Live weather lookup for {} failed: {:#}", location, e);
                Self::fallback(location, Some(&e))
            }
        }
    }

    async fn fetch(&self, api_key: &str, location: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", location),
                ("appid", api_key),
                ("units", "metric"),
                ("lang", "es"),
            ])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Weather request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Weather API error {}: {}", status, error_text));
        }

        let current: CurrentWeatherResponse = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse weather response")?;

        Ok(format_current(location, &current))
    }

    fn fallback(location: &str, error: Option<&anyhow::Error>) -> WeatherReport {
        let summary = match error {
            Some(e) => format!(
                "{} (No se pudo obtener el clima en tiempo real: {})",
                STATIC_CLIMATE, e
            ),
            None => STATIC_CLIMATE.to_string(),
        };

        WeatherReport {
            location: location.to_string(),
            live: false,
            summary,
        }
    }
}

fn format_current(location: &str, current: &CurrentWeatherResponse) -> String {
    let description = current
        .weather
        .first()
        .map(|w| w.description.as_str())
        .unwrap_or("sin descripción");

    let mut summary = format!(
        "Clima actual en {}: {}, {:.1} °C (sensación térmica {:.1} °C), humedad {}%",
        location, description, current.main.temp, current.main.feels_like, current.main.humidity
    );
    if let Some(wind) = &current.wind {
        summary.push_str(&format!(", viento {:.1} m/s", wind.speed));
    }
    summary.push('.');
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_key_uses_static_text() {
        let client = WeatherClient::new(None, DEFAULT_WEATHER_TIMEOUT).unwrap();
        let report = client.current(DEFAULT_WEATHER_LOCATION).await;

        assert!(!client.has_api_key());
        assert!(!report.live);
        assert_eq!(report.summary, STATIC_CLIMATE);
        assert_eq!(report.location, "Huaraz,PE");
    }

    #[tokio::test]
    async fn blank_key_counts_as_missing() {
        let client = WeatherClient::new(Some("  ".to_string()), DEFAULT_WEATHER_TIMEOUT).unwrap();
        assert!(!client.has_api_key());
    }

    #[tokio::test]
    async fn network_failure_falls_back() {
        let client = WeatherClient::new(Some("key".to_string()), Duration::from_millis(500))
            .unwrap()
            .with_base_url("http://127.0.0.1:9/weather");
        let report = client.current("Huaraz").await;

        assert!(!report.live);
        assert!(report.summary.starts_with(STATIC_CLIMATE));
        assert!(report
            .summary
            .contains("No se pudo obtener el clima en tiempo real"));
    }

    #[tokio::test]
    async fn failed_lookup_does_not_expose_api_key() {
        let client = WeatherClient::new(
            Some("SECRETKEY123".to_string()),
            Duration::from_millis(500),
        )
        .unwrap()
        .with_base_url("http://127.0.0.1:9/weather");

        let err = client.fetch("SECRETKEY123", "Huaraz").await.unwrap_err();
        let logged = format!("{:#}", err);
        assert!(logged.starts_with("Weather request failed"));
        assert!(!logged.contains("SECRETKEY123"));
        assert!(!logged.contains("appid"));

        let report = client.current("Huaraz").await;
        assert!(!report.live);
        assert!(!report.summary.contains("SECRETKEY123"));
    }

    #[tokio::test]
    async fn silent_server_hits_the_timeout() {
        // Connections queue in the backlog and never get a reply.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/weather", listener.local_addr().unwrap());
        let client = WeatherClient::new(Some("key".to_string()), Duration::from_millis(300))
            .unwrap()
            .with_base_url(url);

        let started = std::time::Instant::now();
        let report = client.current("Huaraz").await;

        assert!(!report.live);
        assert!(started.elapsed() < Duration::from_secs(10));
        drop(listener);
    }

    #[test]
    fn blank_env_var_does_not_hide_the_next_one() {
        // SAFETY: these variable names are only touched by this test.
        unsafe {
            std::env::set_var("HUARAZ_TEST_BLANK_WEATHER_KEY", "");
            std::env::set_var("HUARAZ_TEST_REAL_WEATHER_KEY", "abc123");
        }

        assert_eq!(
            first_set_var(&[
                "HUARAZ_TEST_BLANK_WEATHER_KEY",
                "HUARAZ_TEST_REAL_WEATHER_KEY"
            ]),
            Some("abc123".to_string())
        );
        assert_eq!(first_set_var(&["HUARAZ_TEST_BLANK_WEATHER_KEY"]), None);
    }

    #[test]
    fn formats_openweather_payload() {
        let payload = r#"{
            "weather": [{"description": "cielo claro"}],
            "main": {"temp": 17.26, "feels_like": 16.4, "humidity": 48},
            "wind": {"speed": 3.1}
        }"#;
        let current: CurrentWeatherResponse = serde_json::from_str(payload).unwrap();

        assert_eq!(
            format_current("Huaraz", &current),
            "Clima actual en Huaraz: cielo claro, 17.3 °C (sensación térmica 16.4 °C), humedad 48%, viento 3.1 m/s."
        );
    }
}
