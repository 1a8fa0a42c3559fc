//! Weather forecast tool definition.
//!
//! Simulated forecast: no external service is contacted. Each day is
//! "Sunny" and the temperature rises by two degrees per day from 72.

use schemars::JsonSchema;
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, instrument};

use crate::domains::tools::error::ToolError;
use crate::domains::tools::handlers::ToolDefinition;

/// Number of forecast days when the caller does not ask for a specific count.
pub const DEFAULT_FORECAST_DAYS: u32 = 1;

/// Upper bound on the forecast length accepted from callers.
pub const MAX_FORECAST_DAYS: u32 = 365;

const BASE_TEMPERATURE: i64 = 72;
const TEMPERATURE_STEP: i64 = 2;
const PLACEHOLDER_CONDITION: &str = "Sunny";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the weather tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWeatherParams {
    /// The name of the location
    pub location: String,

    #[serde(flatten)]
    pub options: ForecastOptions,
}

/// Recognized options of the weather tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ForecastOptions {
    /// Number of days for forecast (default: 1)
    #[serde(deserialize_with = "whole_days")]
    #[schemars(with = "u32", range(min = 1, max = 365))]
    pub days: u32,
}

/// Accepts integers and integral floats (`2.0`) as a day count.
fn whole_days<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    struct WholeDays;

    impl<'de> Visitor<'de> for WholeDays {
        type Value = u32;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a whole number of days")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
            u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<u32, E> {
            if v.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&v) {
                Ok(v as u32)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(WholeDays)
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            days: DEFAULT_FORECAST_DAYS,
        }
    }
}

// ============================================================================
// Tool Output
// ============================================================================

/// Forecast for a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherReport {
    pub location: String,
    pub days: u32,
    pub forecast: Vec<DailyForecast>,
}

/// One forecast day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DailyForecast {
    /// 1-based day number.
    pub day: u32,
    pub condition: String,
    pub temperature: i64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Weather tool - returns a simulated forecast for a location.
pub struct GetWeatherTool;

impl ToolDefinition for GetWeatherTool {
    const NAME: &'static str = "get_weather";
    const DESCRIPTION: &'static str = "Get weather forecast for a location (simulated). Returns the location, the number of days and one forecast entry per day.";

    type Params = GetWeatherParams;
    type Output = WeatherReport;

    fn validate(params: &GetWeatherParams) -> Result<(), ToolError> {
        if params.location.trim().is_empty() {
            return Err(ToolError::invalid_arguments("location must not be empty"));
        }

        let days = params.options.days;
        if !(1..=MAX_FORECAST_DAYS).contains(&days) {
            return Err(ToolError::invalid_arguments(format!(
                "days must be between 1 and {}, got {}",
                MAX_FORECAST_DAYS, days
            )));
        }

        Ok(())
    }

    #[instrument(skip_all, fields(location = %params.location, days = params.options.days))]
    fn execute(params: GetWeatherParams) -> WeatherReport {
        info!("Weather tool called");
        get_weather(&params.location, params.options)
    }
}

/// Build the simulated forecast.
pub fn get_weather(location: &str, options: ForecastOptions) -> WeatherReport {
    let forecast = (0..options.days)
        .map(|i| DailyForecast {
            day: i + 1,
            condition: PLACEHOLDER_CONDITION.to_string(),
            temperature: BASE_TEMPERATURE + TEMPERATURE_STEP * i64::from(i),
        })
        .collect();

    WeatherReport {
        location: location.to_string(),
        days: options.days,
        forecast,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::handlers::ToolDescriptor;
    use proptest::prelude::*;

    fn invoke(args: serde_json::Value) -> Result<rmcp::model::CallToolResult, ToolError> {
        ToolDescriptor::of::<GetWeatherTool>().invoke(args.as_object().cloned().unwrap())
    }

    #[test]
    fn test_default_is_one_day() {
        let report = get_weather("X", ForecastOptions::default());
        assert_eq!(report.days, 1);
        assert_eq!(
            report.forecast,
            vec![DailyForecast {
                day: 1,
                condition: "Sunny".to_string(),
                temperature: 72,
            }]
        );
    }

    #[test]
    fn test_three_day_forecast() {
        let report = get_weather("Paris", ForecastOptions { days: 3 });
        let temps: Vec<_> = report.forecast.iter().map(|d| d.temperature).collect();
        assert_eq!(temps, vec![72, 74, 76]);
        assert_eq!(report.location, "Paris");
    }

    #[test]
    fn test_days_omitted_defaults_to_one() {
        let result = invoke(serde_json::json!({ "location": "X" })).unwrap();
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["days"], 1);
        assert_eq!(structured["forecast"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_structured_output_shape() {
        let result = invoke(serde_json::json!({ "location": "Oslo", "days": 2 })).unwrap();
        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({
                "location": "Oslo",
                "days": 2,
                "forecast": [
                    { "day": 1, "condition": "Sunny", "temperature": 72 },
                    { "day": 2, "condition": "Sunny", "temperature": 74 }
                ]
            }))
        );
    }

    #[test]
    fn test_zero_days_rejected() {
        let result = invoke(serde_json::json!({ "location": "X", "days": 0 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_negative_days_rejected() {
        let result = invoke(serde_json::json!({ "location": "X", "days": -2 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_integral_float_days_accepted() {
        let result = invoke(serde_json::json!({ "location": "X", "days": 2.0 })).unwrap();
        let structured = result.structured_content.unwrap();
        assert_eq!(structured["days"], 2);
        assert_eq!(structured["forecast"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_fractional_or_null_days_rejected() {
        for days in [serde_json::json!(2.5), serde_json::json!("2"), serde_json::Value::Null] {
            let result = invoke(serde_json::json!({ "location": "X", "days": days }));
            assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
        }
    }

    #[test]
    fn test_too_many_days_rejected() {
        let result = invoke(serde_json::json!({ "location": "X", "days": 1000 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_empty_location_rejected() {
        let result = invoke(serde_json::json!({ "location": "  " }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));

        let result = invoke(serde_json::json!({ "days": 2 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_schema_parameters() {
        let params = ToolDescriptor::of::<GetWeatherTool>().parameters();
        let names: Vec<_> = params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["location", "days"]);

        let location = params.iter().find(|p| p.name == "location").unwrap();
        assert_eq!(location.kind, "string");
        assert!(location.required);

        let days = params.iter().find(|p| p.name == "days").unwrap();
        assert_eq!(days.kind, "integer");
        assert!(!days.required);
    }

    proptest! {
        #[test]
        fn prop_forecast_matches_days(location in "[A-Za-z ]{1,20}", days in 1u32..=MAX_FORECAST_DAYS) {
            let report = get_weather(&location, ForecastOptions { days });
            prop_assert_eq!(report.forecast.len(), days as usize);
            for (i, entry) in report.forecast.iter().enumerate() {
                prop_assert_eq!(entry.day as usize, i + 1);
                prop_assert_eq!(entry.temperature, 72 + 2 * i as i64);
                prop_assert_eq!(entry.condition.as_str(), "Sunny");
            }
        }
    }
}
