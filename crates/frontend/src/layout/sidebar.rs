use crate::layout::global_context::NavContext;
use leptos::prelude::*;
use navigation::menu::catalog::CONSOLE_MENU;
use navigation::menu::MenuNode;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext context not found");

    // Groups with submenus start expanded, matching the console default
    let expanded_groups = RwSignal::new(
        CONSOLE_MENU
            .iter()
            .filter(|node| node.has_children())
            .map(|node| node.key.clone())
            .collect::<Vec<String>>(),
    );

    view! {
        <div class="app-sidebar__content">
            {CONSOLE_MENU
                .iter()
                .map(|node| sidebar_entry(node, expanded_groups, ctx))
                .collect_view()}
        </div>
    }
}

/// One root entry: either a leaf item or a collapsible group
fn sidebar_entry(
    node: &'static MenuNode,
    expanded_groups: RwSignal<Vec<String>>,
    ctx: NavContext,
) -> impl IntoView {
    let has_children = node.has_children();
    let key_stored = StoredValue::new(node.key.clone());
    let key_for_click = node.key.clone();
    let key_for_exp = node.key.clone();
    let key_for_show = node.key.clone();

    view! {
        <div>
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || {
                    !has_children && ctx.current_path.get() == key_stored.get_value()
                }
                on:click=move |_| {
                    if has_children {
                        let key = key_for_click.clone();
                        expanded_groups.update(move |keys| {
                            if let Some(pos) = keys.iter().position(|k| k == &key) {
                                keys.remove(pos);
                            } else {
                                keys.push(key);
                            }
                        });
                    } else {
                        ctx.navigate(&key_for_click);
                    }
                }
            >
                <div class="app-sidebar__item-content">
                    <span>{node.label.clone()}</span>
                </div>
                {has_children.then(|| {
                    view! {
                        <div
                            class="app-sidebar__chevron"
                            class:app-sidebar__chevron--expanded=move || {
                                expanded_groups.get().contains(&key_for_exp)
                            }
                        >
                            {"\u{203a}"}
                        </div>
                    }
                })}
            </div>

            {has_children.then(|| {
                view! {
                    <Show when=move || expanded_groups.get().contains(&key_for_show)>
                        <div class="app-sidebar__children">
                            {node
                                .children
                                .iter()
                                .map(|child| {
                                    let child_key = StoredValue::new(child.key.clone());
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.current_path.get() == child_key.get_value()
                                            }
                                            on:click=move |_| {
                                                ctx.navigate(&child_key.get_value());
                                            }
                                        >
                                            <div class="app-sidebar__item-content">
                                                <span>{child.label.clone()}</span>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Show>
                }
            })}
        </div>
    }
}
