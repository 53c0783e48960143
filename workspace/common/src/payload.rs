//! Response payloads of the `/predict/` endpoint.
//!
//! Every field is optional on the wire: the backend omits or nulls values it
//! cannot compute (e.g. `accuracy`), and the dashboard renders a placeholder
//! for anything absent instead of rejecting the response.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Twelve-month forecast returned by `GET /predict/` and `POST /predict/`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ForecastResponse {
    /// Last observed price
    pub current_price: Option<f64>,
    /// Evaluation metrics of the model on the recent period
    #[serde(deserialize_with = "null_as_default")]
    pub metrics: ForecastMetrics,
    /// Past observations, oldest first
    #[serde(deserialize_with = "null_as_default")]
    pub history: Vec<HistoryPoint>,
    /// Future predictions, oldest first
    #[serde(deserialize_with = "null_as_default")]
    pub forecast: Vec<ForecastPoint>,
    /// Mean of the forecast values
    pub avg_forecast: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ForecastMetrics {
    /// Mean absolute error
    pub mae: Option<f64>,
    /// Root mean squared error
    pub rmse: Option<f64>,
    /// Accuracy in percent
    pub accuracy: Option<f64>,
    /// Confidence in percent
    pub confidence: Option<f64>,
    /// Change of the average forecast against the current price, in percent
    pub trend_pct: Option<f64>,
}

/// One past observation next to the model's fitted value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct HistoryPoint {
    /// ISO date (`YYYY-MM-DD`, possibly with a time part)
    pub date: String,
    pub actual: Option<f64>,
    pub predicted: Option<f64>,
}

/// One future month of the forecast.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct ForecastPoint {
    /// ISO date (`YYYY-MM-DD`, possibly with a time part)
    pub date: String,
    /// Predicted price
    pub forecast: Option<f64>,
    /// Change against the previous month, in percent
    pub change_pct: Option<f64>,
}

/// Point prediction returned by `GET /predict/?month=<value>`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct MonthPredictionResponse {
    pub predicted_price: Option<f64>,
    /// Accuracy in percent
    pub accuracy: Option<f64>,
    /// Mean absolute error
    pub mae: Option<f64>,
    /// Confidence in percent
    pub confidence: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub history: Vec<HistoryPoint>,
}

/// Error body the backend sends when its model fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BackendError {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_response_from_backend_payload() {
        let json = r#"{
            "current_price": 1520.25,
            "metrics": {"mae": 0.0, "rmse": 0.0, "trend_pct": 3.4, "accuracy": null, "confidence": 95},
            "history": [{"date": "2024-11-01", "actual": 1500.0, "predicted": 1498.5}],
            "forecast": [{"date": "2025-01-01", "forecast": 1530.0, "change_pct": 0.64}],
            "avg_forecast": 1572.0
        }"#;

        let response: ForecastResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.current_price, Some(1520.25));
        assert_eq!(response.metrics.accuracy, None);
        assert_eq!(response.metrics.confidence, Some(95.0));
        assert_eq!(response.metrics.trend_pct, Some(3.4));
        assert_eq!(response.history.len(), 1);
        assert_eq!(response.history[0].predicted, Some(1498.5));
        assert_eq!(response.forecast[0].change_pct, Some(0.64));
        assert_eq!(response.avg_forecast, Some(1572.0));
    }

    #[test]
    fn test_forecast_response_tolerates_missing_and_null_fields() {
        let response: ForecastResponse =
            serde_json::from_str(r#"{"metrics": null, "forecast": null}"#).unwrap();

        assert_eq!(response, ForecastResponse::default());
    }

    #[test]
    fn test_month_prediction_response() {
        let json = r#"{
            "predicted_price": 1612.4,
            "accuracy": 92.5,
            "mae": 14.2,
            "confidence": 95,
            "history": [
                {"date": "2024-10-01", "actual": 1580.0, "predicted": 1575.0},
                {"date": "2024-11-01", "actual": 1590.0}
            ]
        }"#;

        let response: MonthPredictionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.predicted_price, Some(1612.4));
        assert_eq!(response.history.len(), 2);
        assert_eq!(response.history[1].predicted, None);
    }

    #[test]
    fn test_backend_error_body() {
        let body: BackendError =
            serde_json::from_str(r#"{"error": "Model predict failed on future data: boom"}"#).unwrap();
        assert!(body.error.starts_with("Model predict failed"));
    }
}
