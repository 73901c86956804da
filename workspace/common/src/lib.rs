//! Transport-layer types shared with the forecast backend.
//! These structs mirror the JSON payloads served by the backend's
//! `/metrics` and `/predictions` endpoints so the frontend can deserialize
//! responses without duplicating shapes.
//!
//! Field casing follows the wire format: the backend exports coefficient
//! and prediction records straight from its dataframes, so those fields
//! arrive in PascalCase (`Feature`, `Actual_Price`, ...).

use serde::{Deserialize, Serialize};

/// Evaluation metrics of the trained model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetrics {
    /// Coefficient of determination, nominally in [0, 1].
    pub r2: f64,
    /// Mean squared error between predicted and actual prices.
    pub mse: f64,
    /// Percentage of predictions with the correct movement direction, 0-100.
    pub directional_accuracy: f64,
}

/// One model weight with its feature name and optional plain-text reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    #[serde(rename = "Feature")]
    pub feature: String,
    #[serde(rename = "Coefficient")]
    pub coefficient: f64,
    /// May be absent or `null` in the payload.
    #[serde(rename = "Explanation", default)]
    pub explanation: Option<String>,
}

/// Response body of `GET /metrics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    pub metrics: ModelMetrics,
    /// Human-readable findings, in presentation order.
    pub insights: Vec<String>,
    /// Model weights, in presentation order.
    pub coefficients: Vec<Coefficient>,
}

/// One record of `GET /predictions`: actual vs. predicted closing price for
/// a single day. The backend sorts these chronologically before serving;
/// consumers render them in the order received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionPoint {
    /// Date string as exported by the backend (`YYYY-MM-DD`).
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Actual_Price")]
    pub actual_price: f64,
    #[serde(rename = "Predicted_Price")]
    pub predicted_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS_JSON: &str = r#"{
        "metrics": {
            "mse": 12.34,
            "r2": 0.67,
            "directional_accuracy": 61.2
        },
        "insights": [
            "Model explains 67.0% of the variance in stock prices.",
            "Day-to-day changes in data have a stronger impact than the raw value level."
        ],
        "coefficients": [
            {"Feature": "Data_Lag1", "Coefficient": 0.8421},
            {"Feature": "Volume", "Coefficient": -0.015, "Explanation": "negative momentum signal"}
        ]
    }"#;

    #[test]
    fn test_deserialize_metrics_report() {
        let report: MetricsReport =
            serde_json::from_str(METRICS_JSON).expect("Should parse metrics payload");

        assert_eq!(report.metrics.r2, 0.67);
        assert_eq!(report.metrics.mse, 12.34);
        assert_eq!(report.metrics.directional_accuracy, 61.2);
        assert_eq!(report.insights.len(), 2);
        assert_eq!(report.coefficients.len(), 2);
        assert_eq!(report.coefficients[0].feature, "Data_Lag1");
        assert_eq!(report.coefficients[1].coefficient, -0.015);
    }

    #[test]
    fn test_explanation_missing_or_null_is_none() {
        let report: MetricsReport =
            serde_json::from_str(METRICS_JSON).expect("Should parse metrics payload");
        assert_eq!(report.coefficients[0].explanation, None);
        assert_eq!(
            report.coefficients[1].explanation.as_deref(),
            Some("negative momentum signal")
        );

        let with_null: Coefficient = serde_json::from_str(
            r#"{"Feature": "Data_Diff", "Coefficient": 0.12, "Explanation": null}"#,
        )
        .expect("Should parse null explanation");
        assert_eq!(with_null.explanation, None);
    }

    #[test]
    fn test_deserialize_prediction_records() {
        let points: Vec<PredictionPoint> = serde_json::from_str(
            r#"[
                {"Date": "2024-01-15", "Actual_Price": 101.5, "Predicted_Price": 100.9},
                {"Date": "2024-01-16", "Actual_Price": 102.0, "Predicted_Price": 101.7}
            ]"#,
        )
        .expect("Should parse prediction payload");

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].date, "2024-01-15");
        assert_eq!(points[0].actual_price, 101.5);
        assert_eq!(points[1].predicted_price, 101.7);
    }

    #[test]
    fn test_empty_predictions_array() {
        let points: Vec<PredictionPoint> =
            serde_json::from_str("[]").expect("Should parse empty payload");
        assert!(points.is_empty());
    }

    #[test]
    fn test_serialized_field_names_match_wire_format() {
        let point = PredictionPoint {
            date: "2024-01-15".to_string(),
            actual_price: 101.5,
            predicted_price: 100.9,
        };
        let value = serde_json::to_value(&point).expect("Should serialize");
        let object = value.as_object().expect("Should be an object");
        assert!(object.contains_key("Date"));
        assert!(object.contains_key("Actual_Price"));
        assert!(object.contains_key("Predicted_Price"));

        let coefficient = Coefficient {
            feature: "Data_Lag1".to_string(),
            coefficient: 0.8421,
            explanation: None,
        };
        let value = serde_json::to_value(&coefficient).expect("Should serialize");
        let object = value.as_object().expect("Should be an object");
        assert!(object.contains_key("Feature"));
        assert!(object.contains_key("Coefficient"));
    }
}
