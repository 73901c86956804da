use common::Coefficient;
use yew::prelude::*;

use crate::common::format::{bar_width, signed4};

#[derive(Properties, PartialEq)]
pub struct CoefficientsPanelProps {
    pub coefficients: Vec<Coefficient>,
}

/// Feature-importance panel: one row per coefficient, in input order, with
/// a sign-colored value and a magnitude bar clamped at full width.
#[function_component(CoefficientsPanel)]
pub fn coefficients_panel(props: &CoefficientsPanelProps) -> Html {
    html! {
        <div class="bg-white border-2 border-black shadow-[4px_4px_0px_0px_rgba(0,0,0,1)] rounded-lg p-6">
            <h3 class="text-lg font-black uppercase mb-4">{"Feature Importance"}</h3>
            <div class="space-y-3">
                {for props.coefficients.iter().map(coefficient_row)}
            </div>
        </div>
    }
}

fn coefficient_row(c: &Coefficient) -> Html {
    let positive = c.coefficient > 0.0;
    let value_class = if positive {
        "text-sm font-black text-green-600"
    } else {
        "text-sm font-black text-red-600"
    };
    let bar_class = if positive {
        "h-full bg-green-500"
    } else {
        "h-full bg-red-500"
    };
    let bar_style = format!("width: {}%", bar_width(c.coefficient));

    html! {
        <div key={c.feature.clone()} class="bg-gray-50 p-3 border border-gray-200 rounded">
            <div class="flex justify-between items-center mb-1">
                <span class="text-xs font-bold uppercase text-gray-500">{&c.feature}</span>
                <span class={value_class}>{signed4(c.coefficient)}</span>
            </div>
            <div class="w-full bg-gray-200 h-2 rounded-full overflow-hidden mb-2">
                <div class={bar_class} style={bar_style}></div>
            </div>
            {if let Some(explanation) = &c.explanation {
                html! { <p class="text-xs text-gray-600 italic">{explanation}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
