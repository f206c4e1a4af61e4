//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{home::HomePage, songs::SongsPage};
use crate::state::songs::SongsState;

/// Routed pages. Any path outside this table redirects to [`Page::Home`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    Songs,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::Songs];

    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Songs => "/songs",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Songs => "Songs",
        }
    }

    /// Exact route match, ignoring a trailing slash.
    #[must_use]
    pub fn match_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Home),
            "/songs" => Some(Self::Songs),
            _ => None,
        }
    }

    /// The page a path ends up on, wildcard included.
    #[must_use]
    pub fn resolve(path: &str) -> Self {
        Self::match_path(path).unwrap_or(Self::Home)
    }
}

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
/// Provides the songs state context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let songs = RwSignal::new(SongsState::default());
    provide_context(songs);

    view! {
        <Stylesheet id="leptos" href="/pkg/setlist.css"/>
        <Title text="Setlist"/>

        <Router>
            <NavBar/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path=Page::Home.path()/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("songs") view=SongsPage/>
                </Routes>
            </main>
        </Router>
    }
}
