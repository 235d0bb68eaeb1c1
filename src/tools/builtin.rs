//! The five built-in tools and the toolkit behind them.
//!
//! [`ToolKit`] owns the service clients (and therefore the credentials) and
//! exposes one total operation per tool: each returns a `String`, rendering
//! any failure as a descriptive message instead of an error value.
//! [`builtin_tools`] wraps those operations as [`FnTool`]s for the registry.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::ChatConfig;
use crate::error::ParleyError;
use crate::services::{clock, NewsClient, SystemMetrics, WeatherClient, WolframClient};
use crate::tools::tool::{FnTool, Tool};
use crate::tools::types::ToolParameters;

pub const GET_WEATHER: &str = "get_weather";
pub const GET_NEWS: &str = "get_news";
pub const GET_SYSTEM_METRICS: &str = "get_system_metrics";
pub const GET_CURRENT_TIME_AND_DATE: &str = "get_current_time_and_date";
pub const ASK_WOLFRAM: &str = "ask_wolfram";

/// Credentials-holding backend for the built-in tools.
#[derive(Debug, Clone)]
pub struct ToolKit {
    weather: WeatherClient,
    news: NewsClient,
    wolfram: WolframClient,
}

impl ToolKit {
    pub fn new(config: &ChatConfig) -> Self {
        Self {
            weather: WeatherClient::from_config(config),
            news: NewsClient::from_config(config),
            wolfram: WolframClient::from_config(config),
        }
    }

    pub async fn get_weather(&self, city: &str) -> String {
        self.weather
            .current(city)
            .await
            .unwrap_or_else(|e| render_failure(GET_WEATHER, "Error fetching weather data", e))
    }

    pub async fn get_news(&self, topic: Option<&str>) -> String {
        self.news
            .headlines(topic)
            .await
            .unwrap_or_else(|e| render_failure(GET_NEWS, "Error fetching news", e))
    }

    pub async fn get_system_metrics(&self) -> String {
        SystemMetrics::sample()
            .await
            .map(|m| m.to_string())
            .unwrap_or_else(|e| {
                render_failure(GET_SYSTEM_METRICS, "Error fetching system metrics", e)
            })
    }

    pub fn get_current_time_and_date(&self) -> String {
        clock::now()
    }

    pub async fn ask_wolfram(&self, query: &str) -> String {
        self.wolfram
            .query(query)
            .await
            .unwrap_or_else(|e| render_failure(ASK_WOLFRAM, "Error querying Wolfram Alpha", e))
    }
}

fn render_failure(tool: &str, prefix: &str, err: ParleyError) -> String {
    if err.is_credential_error() {
        warn!(tool, error = %err, "tool degraded: credentials missing or rejected");
    } else {
        debug!(tool, error = %err, "tool failed");
    }
    format!("{prefix}: {err}")
}

/// Build the fixed catalog, in advertisement order.
pub fn builtin_tools(kit: Arc<ToolKit>) -> Vec<Arc<dyn Tool>> {
    vec![
        weather_tool(kit.clone()),
        news_tool(kit.clone()),
        system_metrics_tool(kit.clone()),
        time_tool(kit.clone()),
        wolfram_tool(kit),
    ]
}

fn weather_tool(kit: Arc<ToolKit>) -> Arc<dyn Tool> {
    Arc::new(FnTool::new(
        GET_WEATHER,
        "Get current weather information for a location",
        ToolParameters::object()
            .string("city", "The city name, e.g. London", true)
            .build(),
        move |args| {
            let kit = kit.clone();
            async move {
                let city = args.get_str("city")?;
                Ok(kit.get_weather(city).await)
            }
        },
    ))
}

fn news_tool(kit: Arc<ToolKit>) -> Arc<dyn Tool> {
    Arc::new(FnTool::new(
        GET_NEWS,
        "Get latest news headlines, optionally filtered by topic",
        ToolParameters::object()
            .string("topic", "Optional topic to filter news", false)
            .build(),
        move |args| {
            let kit = kit.clone();
            async move { Ok(kit.get_news(args.get_str_opt("topic")).await) }
        },
    ))
}

fn system_metrics_tool(kit: Arc<ToolKit>) -> Arc<dyn Tool> {
    Arc::new(FnTool::new(
        GET_SYSTEM_METRICS,
        "Get current system performance metrics",
        ToolParameters::empty(),
        move |_args| {
            let kit = kit.clone();
            async move { Ok(kit.get_system_metrics().await) }
        },
    ))
}

fn time_tool(kit: Arc<ToolKit>) -> Arc<dyn Tool> {
    Arc::new(FnTool::new(
        GET_CURRENT_TIME_AND_DATE,
        "Get the current time and date",
        ToolParameters::empty(),
        move |_args| {
            let kit = kit.clone();
            async move { Ok(kit.get_current_time_and_date()) }
        },
    ))
}

fn wolfram_tool(kit: Arc<ToolKit>) -> Arc<dyn Tool> {
    Arc::new(FnTool::new(
        ASK_WOLFRAM,
        "Query Wolfram Alpha for factual information",
        ToolParameters::object()
            .string("query", "The query to send to Wolfram Alpha", true)
            .build(),
        move |args| {
            let kit = kit.clone();
            async move {
                let query = args.get_str("query")?;
                Ok(kit.ask_wolfram(query).await)
            }
        },
    ))
}
