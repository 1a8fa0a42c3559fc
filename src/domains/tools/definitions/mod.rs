//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod add_numbers;
pub mod get_weather;
pub mod list_files;

pub use add_numbers::{AddNumbersParams, AddNumbersTool};
pub use get_weather::{DailyForecast, ForecastOptions, GetWeatherParams, GetWeatherTool, WeatherReport};
pub use list_files::{ListFilesParams, ListFilesTool};
