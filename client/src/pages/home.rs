//! Home page: landing route and wildcard target.

use leptos::prelude::*;

use crate::app::Page;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Setlist"</h1>
            <p class="home-page__lead">"Keep track of the songs you love."</p>
            <a class="btn btn--primary" href=Page::Songs.path()>
                "Manage songs"
            </a>
        </section>
    }
}
