//! Top navigation bar linking the routed pages.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::app::Page;

/// Links to every page; the page the current path resolves to is marked active.
#[component]
pub fn NavBar() -> impl IntoView {
    let location = use_location();
    let active = Memo::new(move |_| Page::resolve(&location.pathname.get()));

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Setlist"</span>
            {Page::ALL
                .into_iter()
                .map(|page| {
                    view! {
                        <a
                            class="nav-bar__link"
                            class:nav-bar__link--active=move || active.get() == page
                            href=page.path()
                        >
                            {page.label()}
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
