use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    content::{TimelineEntry, CERTIFICATIONS, EDUCATION, EXPERIENCE, PROFILE},
    icons::Icon,
    motion::{loop_style, Motion, Stagger},
    nav::Page,
};

use super::{
    icon::IconView,
    reveal::{Reveal, RevealItem},
};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=Page::About.title() />
        <div class="min-h-screen w-full bg-cream text-ink px-8 lg:px-16 py-24 lg:py-32">
            <div class="max-w-7xl mx-auto">
                <Reveal stagger=Stagger::CONTAINER>
                    <RevealItem motion=Motion::RISE index=0 class="text-center mb-16">
                        <div class="flex flex-col lg:flex-row items-center gap-12">
                            <div class="lg:w-2/3">
                                <h2 class="text-5xl font-bold mb-4">"About Me"</h2>
                                <p class="text-xl text-umber leading-relaxed">
                                    "Hi, I'm "
                                    <span class="font-semibold text-ink">{PROFILE.name}</span>
                                    ", "
                                    {PROFILE.about_intro}
                                </p>
                            </div>
                            <div class="lg:w-1/3 flex justify-center">
                                <AboutPortrait />
                            </div>
                        </div>
                    </RevealItem>
                    <div class="grid lg:grid-cols-2 gap-16 mb-16">
                        <RevealItem motion=Motion::RISE index=1>
                            <Timeline title="Education" icon=Icon::BookOpen entries=EDUCATION />
                        </RevealItem>
                        <RevealItem motion=Motion::RISE index=2>
                            <Timeline
                                title="Work Experience"
                                icon=Icon::Briefcase
                                entries=EXPERIENCE
                            />
                        </RevealItem>
                    </div>
                    <div class="border-t border-sand my-16"></div>
                    <RevealItem motion=Motion::RISE index=3>
                        <Achievements />
                    </RevealItem>
                </Reveal>
            </div>
        </div>
    }
}

#[component]
fn AboutPortrait() -> impl IntoView {
    view! {
        <div class="relative">
            <div class="w-56 h-72 rounded-3xl overflow-hidden shadow-2xl border-4 border-gold hover:scale-105 transition-transform duration-300">
                <Reveal motion=Motion::ZOOM once=false class="w-full h-full">
                    <img
                        src=PROFILE.about_portrait
                        alt=PROFILE.name
                        class="w-full h-full object-cover object-center"
                    />
                </Reveal>
            </div>
            <div
                class="absolute -top-2 -right-2 w-5 h-5 bg-gold rounded-full animate-pulse-scale"
                style=loop_style(2000, 0)
            ></div>
            <div
                class="absolute -bottom-2 -left-2 w-4 h-4 bg-gold-dark rounded-full animate-pulse-scale"
                style=loop_style(2500, 500)
            ></div>
        </div>
    }
}

#[component]
fn Timeline(
    title: &'static str,
    icon: Icon,
    entries: &'static [TimelineEntry],
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 mb-8">
            <IconView icon size=28 class="text-gold" />
            <h3 class="text-3xl font-bold">{title}</h3>
        </div>
        <div class="space-y-8">
            {entries
                .iter()
                .map(|entry| {
                    view! {
                        <div class="border-l-4 border-gold pl-6">
                            <h4 class="text-xl font-bold text-ink mb-2">{entry.heading}</h4>
                            <p class="text-lg text-gold font-semibold mb-2">{entry.subheading}</p>
                            <p class="text-umber mb-3">{entry.period}</p>
                            {entry
                                .grade
                                .map(|grade| {
                                    view! { <p class="text-umber font-medium mb-3">{grade}</p> }
                                })}
                            <p class="text-umber text-sm leading-relaxed">{entry.summary}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Achievements() -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 mb-8">
            <IconView icon=Icon::Award size=28 class="text-gold" />
            <h3 class="text-3xl font-bold">"Achievements & Leadership"</h3>
        </div>
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
            {CERTIFICATIONS
                .iter()
                .map(|cert| {
                    view! {
                        <Reveal
                            motion=Motion::CARD
                            margin="-100px"
                            class="bg-white rounded-xl p-6 shadow-lg border border-sand hover:-translate-y-0.5 transition-transform"
                        >
                            <div class="flex items-start justify-between mb-3">
                                <h4 class="text-lg font-bold text-ink">{cert.title}</h4>
                                <span class="text-gold font-semibold">{cert.date}</span>
                            </div>
                            <p class="text-gold font-medium mb-2">{cert.issuer}</p>
                            <p class="text-umber text-sm">{cert.description}</p>
                        </Reveal>
                    }
                })
                .collect_view()}
        </div>
    }
}
