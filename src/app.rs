mod about;
mod contact;
mod homepage;
mod icon;
mod navbar;
mod not_found;
mod reveal;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use contact::ContactPage;
use homepage::HomePage;
use navbar::Navbar;
use not_found::NotFound;

use crate::content::PROFILE;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | {}", PROFILE.short_name) />

        <Router>
            <div class="min-h-screen bg-cream text-ink">
                <Navbar />
                <main class="pt-24 w-full">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/about") view=AboutPage />
                        <Route path=path!("/contact") view=ContactPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
