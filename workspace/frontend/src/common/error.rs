use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ErrorScreenProps {
    pub message: String,
}

/// Full-screen error panel shown instead of the page content when the
/// initial load fails. The message is the fixed operator-facing text;
/// the underlying cause is only in the console log.
#[function_component(ErrorScreen)]
pub fn error_screen(props: &ErrorScreenProps) -> Html {
    log::warn!("Displaying error to user: {}", props.message);

    html! {
        <div class="min-h-screen bg-yellow-50 flex items-center justify-center p-4">
            <div class="bg-red-100 border-2 border-red-500 text-red-700 p-6 rounded-lg max-w-lg shadow-[4px_4px_0px_0px_rgba(239,68,68,1)]">
                <h2 class="text-xl font-bold mb-2 flex items-center gap-2">
                    <i class="fas fa-exclamation-circle"></i>
                    {"System Error"}
                </h2>
                <p class="font-mono">{&props.message}</p>
            </div>
        </div>
    }
}
