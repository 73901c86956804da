use common::PredictionPoint;
use plotly::common::{DashType, Line, Mode};
use plotly::Scatter;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::common::format::short_date;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct PriceChartProps {
    pub data: Vec<PredictionPoint>,
}

/// Index-aligned projection of the prediction records into chart columns:
/// one axis label per point plus the two price series, all in input order.
/// Duplicate or unsorted dates render as-is.
fn chart_series(points: &[PredictionPoint]) -> (Vec<String>, Vec<f64>, Vec<f64>) {
    let labels = points.iter().map(|p| short_date(&p.date)).collect();
    let actuals = points.iter().map(|p| p.actual_price).collect();
    let predicted = points.iter().map(|p| p.predicted_price).collect();
    (labels, actuals, predicted)
}

/// Two-series line chart of actual vs. predicted prices. An empty input
/// renders an empty plot.
#[function_component(PriceChart)]
pub fn price_chart(props: &PriceChartProps) -> Html {
    let container_ref = use_node_ref();
    let data = props.data.clone();

    use_effect_with((container_ref.clone(), data), move |(container_ref, data)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id("chart-price-forecast");

            let (labels, actuals, predicted) = chart_series(data);

            let actual_trace = Scatter::new(labels.clone(), actuals)
                .mode(Mode::Lines)
                .name("Actual Price")
                .line(Line::new().color("#000000").width(2.0));

            let predicted_trace = Scatter::new(labels, predicted)
                .mode(Mode::Lines)
                .name("Predicted Price")
                .line(Line::new().color("#FF5733").width(2.0).dash(DashType::Dash));

            // Serialize traces to JSON and parse as JS objects
            let data_js = js_sys::Array::new();
            for trace_json in [
                serde_json::to_string(&actual_trace).unwrap(),
                serde_json::to_string(&predicted_trace).unwrap(),
            ] {
                let trace_js = js_sys::JSON::parse(&trace_json).unwrap();
                data_js.push(&trace_js);
            }

            let layout = serde_json::json!({
                "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "xaxis": {
                    "showgrid": false,
                    "tickfont": {"family": "monospace", "color": "#666"}
                },
                "yaxis": {
                    "showgrid": true,
                    "gridcolor": "#e5e7eb",
                    "tickfont": {"family": "monospace", "color": "#666"}
                },
                "hovermode": "x unified",
                "showlegend": true,
                "legend": {
                    "orientation": "h",
                    "y": 1.1,
                    "font": {"family": "monospace"}
                },
                "height": 420
            });

            let config = serde_json::json!({"responsive": true, "displayModeBar": false});

            newPlot(
                "chart-price-forecast",
                data_js.into(),
                serde_wasm_bindgen::to_value(&layout).unwrap(),
                serde_wasm_bindgen::to_value(&config).unwrap(),
            );
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:420px;"></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, actual: f64, predicted: f64) -> PredictionPoint {
        PredictionPoint {
            date: date.to_string(),
            actual_price: actual,
            predicted_price: predicted,
        }
    }

    #[test]
    fn test_series_lengths_equal_input_length() {
        let points = vec![
            point("2024-01-15", 101.5, 100.9),
            point("2024-01-16", 102.0, 101.7),
            point("2024-01-17", 101.2, 102.1),
        ];
        let (labels, actuals, predicted) = chart_series(&points);
        assert_eq!(labels.len(), 3);
        assert_eq!(actuals.len(), 3);
        assert_eq!(predicted.len(), 3);
    }

    #[test]
    fn test_empty_input_produces_empty_series() {
        let (labels, actuals, predicted) = chart_series(&[]);
        assert!(labels.is_empty());
        assert!(actuals.is_empty());
        assert!(predicted.is_empty());
    }

    #[test]
    fn test_series_preserve_input_order_and_alignment() {
        // Deliberately unsorted with a duplicate date: rendered as-is.
        let points = vec![
            point("2024-01-16", 102.0, 101.7),
            point("2024-01-15", 101.5, 100.9),
            point("2024-01-15", 101.5, 100.9),
        ];
        let (labels, actuals, predicted) = chart_series(&points);
        assert_eq!(labels, vec!["1/16/2024", "1/15/2024", "1/15/2024"]);
        assert_eq!(actuals, vec![102.0, 101.5, 101.5]);
        assert_eq!(predicted, vec![101.7, 100.9, 100.9]);
    }

    #[test]
    fn test_unparseable_dates_label_verbatim() {
        let points = vec![point("Q1 close", 100.0, 99.0)];
        let (labels, _, _) = chart_series(&points);
        assert_eq!(labels, vec!["Q1 close"]);
    }
}
