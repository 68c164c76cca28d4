//! Prompt construction for chat-completions providers.

use super::InsightContext;
use crate::core::format_date;
use serde_json::json;

/// System message sent with every request.
pub const SYSTEM_PROMPT: &str = "You are an economist who specialises in Zambia. \
Give short, data-driven commentary on the figures you are shown.";

/// Build the user message for a forecast.
///
/// Only the trailing `history_window` historical points are included.
pub fn build_prompt(context: &InsightContext<'_>, history_window: usize) -> String {
    let start = context.history.len().saturating_sub(history_window);
    let history: Vec<_> = context.history[start..]
        .iter()
        .map(|p| json!({ "x": format_date(p.date), "y": p.value }))
        .collect();
    let forecast: Vec<_> = context
        .forecast
        .iter()
        .map(|p| json!({ "x": format_date(p.date), "y": p.value, "isForecast": true }))
        .collect();

    format!(
        "Review this Zambian indicator: {metric}.\n\n\
         Most recent {count} historical periods: {history}\n\
         Projected values: {forecast}\n\n\
         In under 150 words, cover:\n\
         1. The main trends in the history\n\
         2. What the projection implies for Zambia's economy\n\
         3. Risks and opportunities\n\
         4. Relevant Zambian context\n\
         Keep it practical.",
        metric = context.metric_name,
        count = history.len(),
        history = serde_json::Value::Array(history),
        forecast = serde_json::Value::Array(forecast),
    )
}
