//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::shell_layout::ShellLayout;
use crate::pages::section::SectionPage;
use crate::state::theme::ThemeHandle;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the navigation and theme contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = crate::state::config::load();
    let nav = RwSignal::new(crate::state::navigation::initial_state(&config.navigation));
    let theme = ThemeHandle::new();

    provide_context(nav);
    provide_context(theme);

    // Storage and matchMedia only exist in the browser; the controller is
    // mounted after hydration so the server never guesses a scheme.
    #[cfg(feature = "hydrate")]
    {
        let theme_config = config.theme.clone();
        Effect::new(move || {
            let controller = shell_state::ThemeController::new(
                theme_config.clone(),
                crate::util::browser_storage::LocalStorageStore,
                crate::util::media_query::MediaQueryColorScheme,
            );
            theme.mount(controller);
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/shell.css"/>
        <Title text="Beyond UI"/>

        <Router>
            <ShellLayout>
                <Routes fallback=|| view! { <SectionPage/> }>
                    <Route path=StaticSegment("") view=SectionPage/>
                </Routes>
            </ShellLayout>
        </Router>
    }
}
