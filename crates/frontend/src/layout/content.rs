use crate::layout::global_context::NavContext;
use leptos::prelude::*;
use navigation::menu::catalog::CONSOLE_MENU;
use navigation::menu::resolver::find_by_key;

/// Content area for the active section.
///
/// Renders the resolved menu entry; section pages mount here.
#[component]
pub fn Content() -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext context not found");

    let section = move || {
        ctx.current_path.with(|path| {
            find_by_key(&CONSOLE_MENU, path)
                .map(|node| node.label.clone())
                .unwrap_or_else(|| "Select a section".to_string())
        })
    };

    view! {
        <div class="app-content">
            <h2 class="app-content__section">{section}</h2>
        </div>
    }
}
