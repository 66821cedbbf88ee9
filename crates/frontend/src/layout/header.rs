use crate::layout::global_context::NavContext;
use leptos::prelude::*;
use navigation::menu::catalog::{CONSOLE_MENU, CONSOLE_TITLE};
use navigation::menu::resolver::label_for_key;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext context not found");

    // Breadcrumb follows the current path. A path with no menu entry falls
    // back to the console title, never an error state.
    let breadcrumb = move || {
        ctx.current_path
            .with(|path| label_for_key(&CONSOLE_MENU, path, CONSOLE_TITLE).to_string())
    };

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                <span class="header__title">{CONSOLE_TITLE}</span>
                <span class="header__breadcrumb">{breadcrumb}</span>
            </div>
        </header>
    }
}
