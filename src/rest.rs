//! REST API endpoints for Alpha Vantage
pub mod time_series;
