//! Lightweight built-in app views hosted by desktop windows.

use desktop_app_contract::{window_primary_input_dom_id, AppMountContext};
use leptos::*;

use crate::model::{AppId, DesktopTheme, WALLPAPER_PRESETS};

use super::app_descriptor;

pub(super) fn mount_browser_app(_: AppMountContext) -> View {
    view! {
        <div class="app-shell app-browser-shell">
            <div class="app-toolbar" role="group" aria-label="Browser navigation">
                <button type="button" class="app-action" disabled=true>"←"</button>
                <button type="button" class="app-action" disabled=true>"→"</button>
                <input
                    class="app-address"
                    type="text"
                    readonly=true
                    value="https://portfolio.local/resume"
                />
            </div>
            <article class="app-browser-page">
                <h1>"Resume"</h1>
                <p>"Experience, projects and contact details."</p>
            </article>
        </div>
    }
    .into_view()
}

pub(super) fn mount_notes_app(context: AppMountContext) -> View {
    let input_id = window_primary_input_dom_id(&context.window_id);
    let text = create_rw_signal(String::new());
    view! {
        <div class="app-shell app-notes-shell">
            <textarea
                id=input_id
                class="app-notes-editor"
                placeholder="Start typing..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <div class="app-statusbar">
                <span>{move || format!("{} characters", text.with(|t| t.chars().count()))}</span>
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn mount_terminal_app(context: AppMountContext) -> View {
    view! { <TerminalPlaceholder context=context /> }.into_view()
}

#[component]
fn TerminalPlaceholder(context: AppMountContext) -> impl IntoView {
    let input_id = window_primary_input_dom_id(&context.window_id);
    let line = create_rw_signal(String::new());
    let history = create_rw_signal(Vec::<String>::new());

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            let entered = line.get_untracked();
            if !entered.trim().is_empty() {
                history.update(|lines| lines.push(format!("$ {entered}")));
            }
            line.set(String::new());
        }
        // Escape clears the prompt instead of closing the window.
        "Escape" => {
            ev.prevent_default();
            line.set(String::new());
        }
        _ => {}
    };

    view! {
        <div class="app-shell app-terminal-shell">
            <div class="app-terminal-output">
                <For
                    each=move || history.get().into_iter().enumerate()
                    key=|(idx, _)| *idx
                    let:entry
                >
                    <div class="app-terminal-line">{entry.1}</div>
                </For>
            </div>
            <label class="app-terminal-prompt">
                <span>"guest@portfolio:~$"</span>
                <input
                    id=input_id
                    type="text"
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=move || line.get()
                    on:input=move |ev| line.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
            </label>
        </div>
    }
}

pub(super) fn mount_settings_app(context: AppMountContext) -> View {
    let host = context.host;
    view! {
        <div class="app-shell app-settings-shell">
            <section class="settings-section" aria-label="Theme">
                <h2>"Theme"</h2>
                <div class="settings-options" role="radiogroup">
                    {DesktopTheme::ALL
                        .into_iter()
                        .map(|theme| {
                            view! {
                                <button
                                    type="button"
                                    role="radio"
                                    class="settings-option"
                                    class:selected=move || host.theme_id.get() == theme.id()
                                    aria-checked=move || (host.theme_id.get() == theme.id()).to_string()
                                    on:click=move |_| host.set_theme(theme.id())
                                >
                                    {theme.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
            <section class="settings-section" aria-label="Wallpaper">
                <h2>"Wallpaper"</h2>
                <div class="settings-wallpapers" role="radiogroup">
                    {WALLPAPER_PRESETS
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <button
                                    type="button"
                                    role="radio"
                                    class="settings-wallpaper"
                                    class:selected=move || host.wallpaper_id.get() == preset.id
                                    aria-checked=move || (host.wallpaper_id.get() == preset.id).to_string()
                                    style=format!("background-image: url('/{}')", preset.id)
                                    on:click=move |_| host.set_wallpaper(preset.id)
                                >
                                    <span>{preset.name}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
    .into_view()
}

/// Card shown for apps whose full experience lives outside the window manager.
pub(super) fn mount_generic_app(context: AppMountContext) -> View {
    let descriptor = AppId::parse(&context.window_id).map(app_descriptor);
    let (icon, title) = descriptor
        .map(|d| (d.icon, d.title))
        .unwrap_or(("🗔", "App"));
    view! {
        <div class="app-shell app-placeholder-shell">
            <div class="app-placeholder-card">
                <span class="app-placeholder-icon" aria-hidden="true">{icon}</span>
                <p><strong>{title}</strong></p>
            </div>
        </div>
    }
    .into_view()
}
