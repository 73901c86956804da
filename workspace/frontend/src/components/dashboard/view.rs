use yew::prelude::*;

use super::chart::PriceChart;
use super::coefficients::CoefficientsPanel;
use super::insights::InsightsPanel;
use super::metric_card::{MetricCard, Trend};
use crate::api_client::forecast::{get_dashboard_data, DashboardData};
use crate::common::fetch_hook::use_fetch;
use crate::common::fetch_render::FetchRender;
use crate::common::format::{fixed2, percent1};

fn r2_trend(r2: f64) -> Trend {
    if r2 > 0.5 {
        Trend::Up
    } else {
        Trend::Neutral
    }
}

fn directional_trend(accuracy_pct: f64) -> Trend {
    if accuracy_pct > 50.0 {
        Trend::Up
    } else {
        Trend::Down
    }
}

/// The forecast dashboard page: fetches both backend resources once on
/// mount and renders the loading, error or content view.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let fetch_state = use_fetch(get_dashboard_data);

    let render = Callback::from(|data: DashboardData| {
        let DashboardData {
            metrics,
            predictions,
        } = data;

        html! {
            <main class="min-h-screen bg-[#f0f0f0] p-4 md:p-8 font-mono">
                <header class="mb-8 border-b-4 border-black pb-4">
                    <h1 class="text-4xl md:text-5xl font-black uppercase tracking-tighter text-black flex items-center gap-4">
                        <i class="fas fa-wave-square"></i>
                        {"Lagged Price Forecast"}
                    </h1>
                    <p class="text-gray-600 mt-2 font-bold pl-1">
                        {"Predicting Stock Movement based on Previous Day Data"}
                    </p>
                </header>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                    <MetricCard
                        title="Model Accuracy (R²)"
                        value={percent1(metrics.metrics.r2 * 100.0)}
                        subtext="Variance explained by the model"
                        trend={r2_trend(metrics.metrics.r2)}
                        color="bg-blue-100"
                    />
                    <MetricCard
                        title="Mean Squared Error"
                        value={fixed2(metrics.metrics.mse)}
                        subtext="Average squared difference"
                        color="bg-pink-100"
                    />
                    <MetricCard
                        title="Directional Accuracy"
                        value={percent1(metrics.metrics.directional_accuracy)}
                        subtext="Correct trend predictions"
                        trend={directional_trend(metrics.metrics.directional_accuracy)}
                        color="bg-green-100"
                    />
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                    <div class="lg:col-span-2 bg-white border-2 border-black shadow-[8px_8px_0px_0px_rgba(0,0,0,1)] rounded-lg p-6">
                        <h3 class="text-xl font-black uppercase mb-4 flex items-center gap-2">
                            <i class="fas fa-arrow-trend-up"></i>
                            {"Price Forecast"}
                        </h3>
                        <PriceChart data={predictions} />
                    </div>

                    <div class="space-y-6">
                        <InsightsPanel insights={metrics.insights} />
                        <CoefficientsPanel coefficients={metrics.coefficients} />
                    </div>
                </div>
            </main>
        }
    });

    html! {
        <FetchRender<DashboardData> state={(*fetch_state).clone()} render={render} />
    }
}
