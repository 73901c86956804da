use yew::prelude::*;

use super::error::ErrorScreen;
use super::loading::LoadingScreen;
use crate::hooks::FetchState;

#[derive(Properties)]
pub struct FetchRenderProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<T>,
    pub render: Callback<T, Html>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

/// Renders exactly one of the three mutually exclusive page views:
/// - Loading: full-screen loading indicator, no partial data
/// - Error: full-screen error panel with the message
/// - Success: the render callback applied to the data
#[function_component(FetchRender)]
pub fn fetch_render<T>(props: &FetchRenderProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::Loading => html! { <LoadingScreen /> },
        FetchState::Error(err) => html! { <ErrorScreen message={err.clone()} /> },
        FetchState::Success(data) => props.render.emit(data.clone()),
    }
}
