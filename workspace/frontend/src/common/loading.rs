use yew::prelude::*;

/// Full-screen loading indicator shown while the initial fetch is pending.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="min-h-screen bg-yellow-50 flex items-center justify-center">
            <div class="text-2xl font-black font-mono animate-pulse">
                {"LOADING MARKET DATA..."}
            </div>
        </div>
    }
}
