pub mod content;
pub mod global_context;
pub mod header;
pub mod sidebar;

use leptos::prelude::*;

use content::Content;
use global_context::NavContext;
use header::Header;
use sidebar::Sidebar;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext context not found");

    // Start observing the location hash. This runs once when the shell is created.
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <Header />
            <div class="app-body">
                <div data-zone="left" class="app-sidebar">
                    <Sidebar />
                </div>
                <div data-zone="center" class="app-main" style="flex: 1; overflow: auto;">
                    <Content />
                </div>
            </div>
        </div>
    }
}
