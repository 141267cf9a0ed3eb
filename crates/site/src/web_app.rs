use desktop_runtime::{AppId, DesktopConfig, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio OS" />
        <Meta name="description" content="A desktop-style personal portfolio shell." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </main>
        </Router>
    }
}

/// Desktop startup config for a `?open=<app-id>` deep link.
///
/// Unknown ids keep the default boot window.
pub fn boot_config_for(open: Option<&str>) -> DesktopConfig {
    let mut config = DesktopConfig::default();
    if let Some(app_id) = open.and_then(AppId::parse) {
        config.boot_app = Some(app_id);
    }
    config
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let query = use_query_map();
    let open = query.with_untracked(|map| map.get("open").cloned());
    let config = boot_config_for(open.as_deref());

    view! {
        <DesktopProvider config=config>
            <DesktopShell />
        </DesktopProvider>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deep_link_overrides_boot_app() {
        assert_eq!(boot_config_for(Some("notes")).boot_app, Some(AppId::Notes));
        assert_eq!(boot_config_for(Some(" Tictactoe ")).boot_app, Some(AppId::TicTacToe));
    }

    #[test]
    fn missing_or_unknown_deep_link_keeps_browser() {
        assert_eq!(boot_config_for(None).boot_app, Some(AppId::Browser));
        assert_eq!(boot_config_for(Some("gta6")).boot_app, Some(AppId::Browser));
    }
}
