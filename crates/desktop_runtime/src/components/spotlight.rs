use super::*;

#[component]
pub(super) fn Spotlight() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let launcher = runtime.launcher;
    let input_ref = create_node_ref::<html::Input>();

    create_effect(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let results = create_memo(move |_| launcher.with(|state| state.results()));

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let action = match ev.key().as_str() {
            "ArrowDown" => LauncherAction::SelectNext,
            "ArrowUp" => LauncherAction::SelectPrevious,
            "Enter" => LauncherAction::Activate,
            "Escape" => LauncherAction::Close,
            _ => return,
        };
        ev.prevent_default();
        runtime.dispatch_launcher_action(action);
    };

    view! {
        <Show when=move || launcher.with(|state| state.open) fallback=|| ()>
            <div
                class="spotlight-overlay"
                on:click=move |_| runtime.dispatch_launcher_action(LauncherAction::Close)
            >
                <div class="spotlight-container" on:click=|ev| ev.stop_propagation()>
                    <div class="spotlight-search">
                        <span class="spotlight-icon" aria-hidden="true">"🔍"</span>
                        <input
                            node_ref=input_ref
                            type="text"
                            class="spotlight-input"
                            placeholder="Search apps..."
                            aria-label="Search apps"
                            prop:value=move || launcher.with(|state| state.query.clone())
                            on:input=move |ev| {
                                runtime
                                    .dispatch_launcher_action(
                                        LauncherAction::SetQuery(event_target_value(&ev)),
                                    )
                            }
                            on:keydown=on_keydown
                        />
                        <span class="spotlight-shortcut">"ESC"</span>
                    </div>
                    <Show when=move || results.with(|r| !r.is_empty()) fallback=|| ()>
                        <ul class="spotlight-results" role="listbox">
                            {move || {
                                results
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, entry)| {
                                        let selected = move || {
                                            launcher.with(|state| state.selected == index)
                                        };
                                        view! {
                                            <li
                                                role="option"
                                                class="spotlight-result"
                                                class:selected=selected
                                                aria-selected=move || selected().to_string()
                                                on:click=move |_| {
                                                    runtime
                                                        .dispatch_launcher_action(
                                                            LauncherAction::ActivateAt(index),
                                                        )
                                                }
                                                on:mouseenter=move |_| {
                                                    runtime
                                                        .dispatch_launcher_action(
                                                            LauncherAction::Hover(index),
                                                        )
                                                }
                                            >
                                                <span class="spotlight-result-icon">{entry.icon}</span>
                                                <span class="spotlight-result-title">{entry.title}</span>
                                                <Show when=selected fallback=|| ()>
                                                    <span class="spotlight-result-hint">"↵"</span>
                                                </Show>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </Show>
                    <Show
                        when=move || {
                            launcher.with(|state| !state.query.is_empty())
                                && results.with(Vec::is_empty)
                        }
                        fallback=|| ()
                    >
                        <div class="spotlight-empty">"No results found"</div>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
