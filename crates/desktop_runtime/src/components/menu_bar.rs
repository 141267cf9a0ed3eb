use std::time::Duration;

use platform_host::ClockSnapshot;

use super::*;
use crate::model::DesktopTheme;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// `Mon, Jan 5`
fn format_menu_date(clock: ClockSnapshot) -> String {
    let weekday = WEEKDAYS.get(clock.weekday as usize).copied().unwrap_or("");
    let month = MONTHS
        .get(clock.month.saturating_sub(1) as usize)
        .copied()
        .unwrap_or("");
    format!("{weekday}, {month} {}", clock.day)
}

/// `09:41 AM`
fn format_menu_time(clock: ClockSnapshot) -> String {
    let suffix = if clock.hour < 12 { "AM" } else { "PM" };
    let hour = match clock.hour % 12 {
        0 => 12,
        hour => hour,
    };
    format!("{hour:02}:{:02} {suffix}", clock.minute)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ProfileLink {
    label: &'static str,
    icon: &'static str,
    href: &'static str,
}

const PROFILE_LINKS: [ProfileLink; 2] = [
    ProfileLink {
        label: "GitHub",
        icon: "🐙",
        href: "https://github.com/yusufktlk",
    },
    ProfileLink {
        label: "LinkedIn",
        icon: "💼",
        href: "https://www.linkedin.com/in/yusuf-kitlik/",
    },
];

/// Decorative status glyphs shown before the clock.
const STATUS_ICONS: [(&str, &str); 2] = [("🔋", "Battery"), ("📶", "Wi-Fi")];

fn theme_icon(theme: DesktopTheme) -> &'static str {
    match theme {
        DesktopTheme::Dark => "🌙",
        DesktopTheme::Light => "☀️",
        DesktopTheme::Green => "🌲",
    }
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let brand_menu_open = create_rw_signal(false);
    let clock = create_rw_signal(ClockSnapshot::now());

    match set_interval_with_handle(move || clock.set(ClockSnapshot::now()), Duration::from_secs(1))
    {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("menu bar clock timer failed: {err:?}"),
    }

    let choose_theme = move |theme: DesktopTheme| {
        brand_menu_open.set(false);
        runtime.dispatch_action(DesktopAction::SetTheme { theme });
    };

    view! {
        <header class="menu-bar">
            <div class="menu-bar-left">
                <button
                    type="button"
                    class="menu-item brand-menu"
                    aria-haspopup="menu"
                    aria-expanded=move || brand_menu_open.get().to_string()
                    on:click=move |_| brand_menu_open.update(|open| *open = !*open)
                >
                    <span class="brand-logo" aria-hidden="true">"🍎"</span>
                </button>
                <Show when=move || brand_menu_open.get() fallback=|| ()>
                    <div class="menu-backdrop" on:click=move |_| brand_menu_open.set(false)></div>
                    <div class="dropdown-menu" role="menu">
                        <div class="dropdown-header">"Portfolio"</div>
                        <div class="dropdown-divider"></div>
                        <div class="dropdown-section">"Theme"</div>
                        {DesktopTheme::ALL
                            .into_iter()
                            .map(|theme| {
                                view! {
                                    <button
                                        type="button"
                                        role="menuitemradio"
                                        class="dropdown-item"
                                        class:active=move || state.with(|desktop| desktop.theme == theme)
                                        on:click=move |_| choose_theme(theme)
                                    >
                                        <span class="dropdown-icon">{theme_icon(theme)}</span>
                                        {theme.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <div class="dropdown-divider"></div>
                        <button
                            type="button"
                            role="menuitem"
                            class="dropdown-item"
                            on:click=move |_| {
                                brand_menu_open.set(false);
                                runtime.dispatch_launcher_action(LauncherAction::Open);
                            }
                        >
                            <span class="dropdown-icon">"🔍"</span>
                            "Search"
                        </button>
                        <div class="dropdown-divider"></div>
                        {PROFILE_LINKS
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        role="menuitem"
                                        class="dropdown-item"
                                        on:click=move |_| brand_menu_open.set(false)
                                    >
                                        <span class="dropdown-icon">{link.icon}</span>
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
                <span class="menu-item app-name">"Finder"</span>
            </div>
            <div class="menu-bar-right">
                {STATUS_ICONS
                    .into_iter()
                    .map(|(icon, label)| {
                        view! {
                            <span class="menu-item status-icon" title=label aria-label=label>
                                {icon}
                            </span>
                        }
                    })
                    .collect_view()}
                <span class="menu-item datetime">
                    {move || {
                        let now = clock.get();
                        format!("{} {}", format_menu_date(now), format_menu_time(now))
                    }}
                </span>
            </div>
        </header>
    }
}
