use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InsightsPanelProps {
    pub insights: Vec<String>,
}

/// Numbered model-insight list, in the order the backend returned them.
#[function_component(InsightsPanel)]
pub fn insights_panel(props: &InsightsPanelProps) -> Html {
    html! {
        <div class="bg-yellow-100 border-2 border-black shadow-[8px_8px_0px_0px_rgba(0,0,0,1)] rounded-lg p-6">
            <h3 class="text-xl font-black uppercase mb-4 border-b-2 border-black pb-2">
                {"Model Insights"}
            </h3>
            <ul class="space-y-4">
                {for props.insights.iter().enumerate().map(|(idx, insight)| html! {
                    <li class="flex items-start gap-3 text-sm font-bold text-gray-800">
                        <span class="bg-black text-white rounded-full w-6 h-6 flex items-center justify-center shrink-0 text-xs mt-0.5">
                            {idx + 1}
                        </span>
                        {insight}
                    </li>
                })}
            </ul>
        </div>
    }
}
