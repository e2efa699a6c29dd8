//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod echo;
pub mod file_ops;
pub mod http_request;
pub mod json_placeholder;
pub mod math;
pub mod time;
pub mod weather;

pub use echo::EchoTool;
pub use file_ops::FileOperationsTool;
pub use http_request::HttpRequestTool;
pub use json_placeholder::JsonPlaceholderTool;
pub use math::{AddNumbersTool, MultiplyNumbersTool};
pub use time::GetTimeTool;
pub use weather::WeatherApiTool;
