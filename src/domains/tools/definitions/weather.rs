//! Weather tool definition.
//!
//! Fetches current conditions from the OpenWeatherMap API. The API key is
//! read from the environment on every invocation - never cached and never
//! validated at startup - and a missing key produces a *successful* result
//! carrying setup instructions instead of an error.

use rmcp::model::{CallToolResult, Content};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolHandler;
use crate::domains::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::domains::tools::validator::ValidatedArguments;

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

const API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";

/// Parameters for the weather tool.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherApiParams {
    /// City name to look up.
    pub city: String,

    /// Unit system, defaults to metric.
    pub units: Option<String>,
}

/// Subset of the OpenWeatherMap current-weather response we report.
#[derive(Debug, Deserialize)]
struct WeatherResponse {
    name: String,
    main: WeatherMain,
    wind: WeatherWind,
    weather: Vec<WeatherCondition>,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
    feels_like: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: String,
}

/// Weather tool - current conditions for a city via OpenWeatherMap.
pub struct WeatherApiTool {
    client: Client,
}

impl WeatherApiTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "weather_api";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get current weather for a city (requires OPENWEATHER_API_KEY)";

    /// Create the tool with its own outbound client.
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    fn setup_instructions() -> String {
        format!(
            "Weather API key not configured.\n\n\
             To use this tool:\n\
             1. Create a free account at https://openweathermap.org/api\n\
             2. Generate an API key\n\
             3. Set the {} environment variable and restart the server",
            API_KEY_VAR
        )
    }

    fn temperature_suffix(units: &str) -> &'static str {
        match units {
            "imperial" => "\u{b0}F",
            "standard" => "K",
            _ => "\u{b0}C",
        }
    }

    fn wind_suffix(units: &str) -> &'static str {
        match units {
            "imperial" => "mph",
            _ => "m/s",
        }
    }
}

impl Default for WeatherApiTool {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ToolHandler for WeatherApiTool {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn schema(&self) -> ToolSchema {
        ToolSchema::new()
            .field(FieldSpec::required(
                "city",
                FieldKind::String,
                "City name to look up",
            ))
            .field(
                FieldSpec::optional("units", FieldKind::String, "Unit system (default: metric)")
                    .with_allowed(&["metric", "imperial", "standard"]),
            )
    }

    #[instrument(skip_all)]
    async fn call(&self, args: ValidatedArguments) -> Result<CallToolResult, ToolError> {
        let params: WeatherApiParams = args.parse()?;
        let units = params.units.as_deref().unwrap_or("metric");

        // Read the credential per invocation; a missing key degrades to a
        // helpful success response rather than an error.
        let api_key = match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.is_empty() => key,
            _ => {
                warn!("{} not set, returning setup instructions", API_KEY_VAR);
                return Ok(CallToolResult::success(vec![Content::text(
                    Self::setup_instructions(),
                )]));
            }
        };

        let query = serde_urlencoded::to_string([
            ("q", params.city.as_str()),
            ("units", units),
            ("appid", api_key.as_str()),
        ])
        .map_err(|e| ToolError::internal(format!("Failed to encode query: {}", e)))?;

        info!("Fetching weather for {}", params.city);

        let response = self
            .client
            .get(format!("{}?{}", API_URL, query))
            .send()
            .await
            .map_err(|e| ToolError::internal(format!("Weather request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(ToolError::internal(format!(
                "Weather API returned {}: {}",
                status, detail
            )));
        }

        let weather: WeatherResponse = response
            .json()
            .await
            .map_err(|e| ToolError::internal(format!("Failed to parse weather response: {}", e)))?;

        let description = weather
            .weather
            .first()
            .map(|c| c.description.clone())
            .unwrap_or_else(|| "unknown".to_string());

        let temp_suffix = Self::temperature_suffix(units);
        Ok(CallToolResult::success(vec![Content::text(format!(
            "Weather in {}:\n\
             Conditions: {}\n\
             Temperature: {:.1}{} (feels like {:.1}{})\n\
             Humidity: {:.0}%\n\
             Wind: {:.1} {}",
            weather.name,
            description,
            weather.main.temp,
            temp_suffix,
            weather.main.feels_like,
            temp_suffix,
            weather.main.humidity,
            weather.wind.speed,
            Self::wind_suffix(units),
        ))]))
    }
}
