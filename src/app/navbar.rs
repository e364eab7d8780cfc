use leptos::{either::Either, prelude::*};
use leptos_router::{components::*, hooks::use_location};

use crate::{
    content::PROFILE,
    icons::Icon,
    motion::{Motion, Stagger},
    nav::{link_class, MenuState, Page, Placement},
};

use super::{icon::IconView, reveal::Entrance};

const DESKTOP_ITEMS: Stagger = Stagger::new(300, 100);
const MOBILE_ITEMS: Stagger = Stagger::new(0, 100);
const BRAND: Motion = Motion::slide_x(-50, 600).with_delay(200);

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let (menu, set_menu) = signal(MenuState::default());

    // closes the panel for every route change, including back/forward
    Effect::new(move |_| {
        let path = pathname.get();
        set_menu.update(|menu| match menu.navigated(&path) {
            Some(page) => log::debug!("navigated to {}", page.label()),
            None => log::debug!("navigated to unknown route {path}"),
        });
    });
    // a click on the current route leaves the pathname unchanged
    let close_menu = move |_: leptos::ev::MouseEvent| set_menu.update(MenuState::close);

    let toggle_menu = move |_| {
        set_menu.update(MenuState::toggle);
        log::debug!("mobile menu open: {}", menu.get_untracked().is_open());
    };

    view! {
        <Entrance
            motion=Motion::DROP
            class="fixed top-0 left-0 right-0 z-50 w-full bg-cream/95 backdrop-blur-sm border-b border-gold/30"
        >
            <header>
                <nav class="flex justify-between items-center py-6 px-8 w-full">
                    <Entrance motion=BRAND class="text-2xl font-bold">
                        <span on:click=close_menu>
                            <A
                                href=Page::Home.path()
                                attr:class="bg-gradient-to-r from-gold via-gold-dark to-gold bg-clip-text text-transparent"
                            >
                                {PROFILE.short_name}
                            </A>
                        </span>
                    </Entrance>
                    <ul class="hidden md:flex gap-12 font-medium text-lg">
                        {Page::ALL
                            .into_iter()
                            .enumerate()
                            .map(|(index, page)| {
                                let motion = Motion::slide_y(-20, 600)
                                    .with_delay(DESKTOP_ITEMS.delay(index));
                                view! {
                                    <li on:click=close_menu>
                                        <Entrance motion>
                                            <NavLink page placement=Placement::Desktop />
                                        </Entrance>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <button
                        class="md:hidden p-2 text-ink hover:text-gold hover:scale-110 active:scale-90 transition-all duration-300"
                        aria-label="Toggle navigation menu"
                        aria-expanded=move || menu.get().is_open().to_string()
                        on:click=toggle_menu
                    >
                        {move || {
                            if menu.get().is_open() {
                                Either::Left(view! { <IconView icon=Icon::X /> })
                            } else {
                                Either::Right(view! { <IconView icon=Icon::Menu /> })
                            }
                        }}
                    </button>
                </nav>
                <Show when=move || menu.get().is_open()>
                    <div class="md:hidden bg-cream/95 backdrop-blur-sm border-t border-gold/30 animate-menu-open">
                        <div class="py-6 px-8">
                            <ul class="space-y-6">
                                {Page::ALL
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, page)| {
                                        let motion = Motion::slide_x(-20, 400)
                                            .with_delay(MOBILE_ITEMS.delay(index));
                                        view! {
                                            // clicks bubble up from the link
                                            <li on:click=close_menu>
                                                <Entrance motion>
                                                    <NavLink page placement=Placement::Mobile />
                                                </Entrance>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </div>
                </Show>
            </header>
        </Entrance>
    }
}

#[component]
fn NavLink(page: Page, placement: Placement) -> impl IntoView {
    let pathname = use_location().pathname;
    let is_active = move || page.is_active(&pathname.get());

    view! {
        <A
            href=page.path()
            attr:class=move || link_class(placement, is_active())
        >
            {page.label()}
            {(placement == Placement::Desktop)
                .then(|| {
                    view! {
                        <span class="absolute -bottom-1 left-0 w-0 h-0.5 bg-gold transition-all duration-300 group-hover:w-full"></span>
                        {move || {
                            is_active()
                                .then(|| {
                                    view! {
                                        <span class="absolute -bottom-1 left-0 right-0 h-0.5 bg-gold"></span>
                                    }
                                })
                        }}
                    }
                })}
        </A>
    }
}
