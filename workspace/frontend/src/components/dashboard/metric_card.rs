use yew::prelude::*;

/// Direction glyph shown next to a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

impl Trend {
    fn icon_class(&self) -> &'static str {
        match self {
            Trend::Up => "fas fa-arrow-trend-up text-green-600",
            Trend::Down => "fas fa-arrow-trend-down text-red-600",
            Trend::Neutral => "fas fa-minus text-gray-600",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtext: Option<AttrValue>,
    #[prop_or_default]
    pub trend: Option<Trend>,
    #[prop_or_default]
    pub color: Option<AttrValue>,
}

/// Labeled numeric card. `value` arrives pre-formatted; this component
/// performs no numeric computation.
#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    let color = props
        .color
        .clone()
        .unwrap_or_else(|| AttrValue::from("bg-white"));

    html! {
        <div class={classes!(color.to_string(), "border-2", "border-black", "shadow-[4px_4px_0px_0px_rgba(0,0,0,1)]", "p-6", "rounded-lg")}>
            <h3 class="text-sm font-bold uppercase tracking-wider text-gray-600 mb-2">
                {&props.title}
            </h3>
            <div class="flex items-end justify-between">
                <div class="text-3xl font-black text-black">{&props.value}</div>
                {if let Some(trend) = props.trend {
                    html! { <i class={trend.icon_class()}></i> }
                } else {
                    html! {}
                }}
            </div>
            {if let Some(subtext) = &props.subtext {
                html! { <p class="text-sm font-medium text-gray-500 mt-2">{subtext}</p> }
            } else {
                html! {}
            }}
        </div>
    }
}
