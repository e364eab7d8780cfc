use leptos::{ev::SubmitEvent, prelude::*};
use leptos_meta::Title;

use crate::{
    content::{CONTACT_DETAILS, CONTACT_SOCIALS, LINKEDIN},
    motion::{Motion, Stagger},
    nav::Page,
};

use super::{
    icon::IconView,
    reveal::{Reveal, RevealItem},
};

const INPUT_CLASS: &str = "w-full border-2 border-sand rounded-lg px-4 py-3 focus:border-gold focus:outline-none transition-colors duration-300 bg-white";

#[component]
pub fn ContactPage() -> impl IntoView {
    // there is no delivery endpoint; keep the browser from reloading the page
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        log::info!("contact form submitted, no delivery endpoint configured");
    };

    view! {
        <Title text=Page::Contact.title() />
        <div class="min-h-screen w-full bg-cream text-ink px-8 lg:px-16 py-24 lg:py-32">
            <div class="max-w-4xl mx-auto">
                <Reveal stagger=Stagger::CONTAINER>
                    <RevealItem motion=Motion::RISE index=0>
                        <h2 class="text-5xl font-bold mb-12 text-center">"Contact"</h2>
                    </RevealItem>
                    <div class="grid md:grid-cols-2 gap-12">
                        <RevealItem motion=Motion::RISE index=1 class="space-y-6">
                            <h3 class="text-2xl font-bold mb-4">"Let's Connect"</h3>
                            <div class="space-y-4">
                                {CONTACT_DETAILS
                                    .iter()
                                    .map(|detail| {
                                        view! {
                                            <div class="flex items-center gap-3">
                                                <IconView icon=detail.icon size=20 class="text-gold" />
                                                <span class="text-umber">{detail.text}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <div class="flex gap-4 mt-8">
                                {CONTACT_SOCIALS
                                    .iter()
                                    .map(|social| {
                                        let background = if *social == LINKEDIN {
                                            "bg-[#0077B5]"
                                        } else {
                                            "bg-ink"
                                        };
                                        view! {
                                            <a
                                                href=social.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.label
                                                class=format!(
                                                    "w-12 h-12 {background} rounded-full flex items-center justify-center text-white hover:bg-gold hover:scale-110 active:scale-90 transition-all duration-300",
                                                )
                                            >
                                                <IconView icon=social.icon size=20 />
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </RevealItem>
                        <RevealItem motion=Motion::RISE index=2>
                            <form class="space-y-6" on:submit=on_submit>
                                <div>
                                    <input type="text" name="name" placeholder="Your Name" class=INPUT_CLASS />
                                </div>
                                <div>
                                    <input type="email" name="email" placeholder="Your Email" class=INPUT_CLASS />
                                </div>
                                <div>
                                    <textarea
                                        name="message"
                                        placeholder="Your Message"
                                        rows="6"
                                        class=format!("{INPUT_CLASS} resize-none")
                                    ></textarea>
                                </div>
                                <button
                                    type="submit"
                                    class="w-full bg-gradient-to-r from-gold to-gold-dark text-white px-8 py-4 rounded-lg font-semibold hover:shadow-lg hover:scale-[1.02] active:scale-[0.98] transition-all duration-300"
                                >
                                    "Send Message"
                                </button>
                            </form>
                        </RevealItem>
                    </div>
                </Reveal>
            </div>
        </div>
    }
}
