use crate::layout::global_context::NavContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the NavContext store to the whole app via context.
    provide_context(NavContext::new());

    view! {
        <Shell />
    }
}
