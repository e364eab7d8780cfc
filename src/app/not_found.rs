use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::{components::*, hooks::use_location};

use crate::{motion::Motion, nav::Page};

use super::reveal::Reveal;

#[component]
pub fn NotFound() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <Title text="Page Not Found" />
        <div class="min-h-[60vh] w-full flex items-center justify-center px-8">
            <Reveal motion=Motion::RISE class="text-center space-y-6">
                <h2 class="text-5xl font-bold">"404"</h2>
                <p class="text-xl text-umber">
                    "Nothing lives at " <code class="text-ink">{move || pathname.get()}</code> "."
                </p>
                <A
                    href=Page::Home.path()
                    attr:class="inline-block bg-gold text-white px-8 py-3 rounded-lg font-semibold hover:bg-gold-dark transition-colors duration-300"
                >
                    "Back to " {Page::Home.label()}
                </A>
            </Reveal>
        </div>
    }
}
