use std::future::Future;
use yew::prelude::*;

use crate::hooks::FetchState;

/// Runs `fetch_fn` once on mount and owns the resulting state handle.
/// The state moves from `Loading` to exactly one of `Success` or `Error`
/// when the future settles. If the component unmounts first, the settled
/// result is simply discarded; there is no cancellation token.
#[hook]
pub fn use_fetch<T, F, Fut>(fetch_fn: F) -> UseStateHandle<FetchState<T>>
where
    T: 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let fetch_state = use_state(|| FetchState::Loading);

    {
        let fetch_state = fetch_state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match fetch_fn().await {
                    Ok(data) => fetch_state.set(FetchState::Success(data)),
                    Err(err) => fetch_state.set(FetchState::Error(err)),
                }
            });
            || ()
        });
    }

    fetch_state
}
