use leptos::prelude::*;
use leptos_meta::Title;

use crate::{
    content::{Project, SkillCategory, HERO_SOCIALS, PROFILE, PROJECTS, SKILLS},
    icons::Icon,
    motion::{alternate, loop_style, Motion, Stagger},
    nav::Page,
};

use super::{
    icon::IconView,
    reveal::{Reveal, RevealItem},
};

const SOCIALS: Stagger = Stagger::new(900, 100);
const TECH_BADGES: Stagger = Stagger::new(800, 100);
const FEATURES: Stagger = Stagger::new(1000, 100);
const SKILL_LIST: Stagger = Stagger::new(0, 100);

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=Page::Home.title() />
        <div class="min-h-screen w-full bg-cream text-ink">
            <Hero />
            <Projects />
            <Skills />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="w-full px-8 lg:px-16 py-24 lg:py-32">
            <div class="max-w-7xl mx-auto">
                <Reveal
                    stagger=Stagger::CONTAINER
                    class="flex flex-col lg:flex-row items-center gap-16"
                >
                    <RevealItem motion=Motion::RISE index=0 class="lg:w-1/2 flex justify-center">
                        <Portrait />
                    </RevealItem>
                    <RevealItem motion=Motion::RISE index=1 class="lg:w-1/2 space-y-8">
                        <Reveal motion=Motion::LIFT.with_delay(200)>
                            <h1 class="text-5xl lg:text-6xl font-bold text-ink mb-4">
                                {PROFILE.name}
                            </h1>
                            <h2 class="text-2xl lg:text-3xl text-gold font-semibold mb-6 animate-breathe">
                                {PROFILE.headline}
                            </h2>
                        </Reveal>
                        <Reveal motion=Motion::LIFT.with_delay(400)>
                            <p class="text-xl text-umber leading-relaxed">{PROFILE.bio}</p>
                        </Reveal>
                        <Reveal
                            motion=Motion::LIFT.with_delay(600)
                            class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start"
                        >
                            <a
                                href=PROFILE.mailto()
                                class="bg-gradient-to-r from-gold to-gold-dark text-white px-8 py-4 rounded-xl font-semibold hover:shadow-xl hover:scale-105 hover:-translate-y-1 active:scale-95 transition-all duration-300 flex items-center justify-center gap-2 group"
                            >
                                <IconView icon=Icon::Mail size=20 />
                                "Get In Touch"
                                <IconView
                                    icon=Icon::ArrowRight
                                    size=16
                                    class="group-hover:translate-x-1 transition-transform"
                                />
                            </a>
                        </Reveal>
                        <Reveal
                            motion=Motion::LIFT.with_delay(800)
                            stagger=SOCIALS
                            class="flex gap-6 justify-center lg:justify-start"
                        >
                            {HERO_SOCIALS
                                .iter()
                                .enumerate()
                                .map(|(index, social)| {
                                    view! {
                                        <RevealItem motion=Motion::GROW index>
                                            <a
                                                href=social.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                aria-label=social.label
                                                class="block text-slate-600 hover:text-white transition-all duration-300 p-3 rounded-full bg-white/50 backdrop-blur-sm hover:shadow-lg hover:bg-amber-500 hover:scale-125 hover:rotate-6"
                                            >
                                                <IconView icon=social.icon />
                                            </a>
                                        </RevealItem>
                                    }
                                })
                                .collect_view()}
                        </Reveal>
                    </RevealItem>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Portrait() -> impl IntoView {
    view! {
        <div class="relative">
            <div
                class="w-60 h-80 lg:w-72 lg:h-96 overflow-hidden shadow-2xl border-4 border-gold hover:scale-105 transition-transform duration-300"
                style="border-radius: 24px 24px 0 0"
            >
                <Reveal motion=Motion::ZOOM once=false class="w-full h-full">
                    <img
                        src=PROFILE.portrait
                        alt=PROFILE.name
                        class="w-full h-full object-cover object-center"
                    />
                </Reveal>
            </div>
            <div
                class="absolute -top-4 -right-4 w-8 h-8 bg-gold rounded-full animate-pulse-scale"
                style=loop_style(2000, 0)
            ></div>
            <div
                class="absolute -bottom-4 -left-4 w-6 h-6 bg-gold-dark rounded-full animate-pulse-scale"
                style=loop_style(2500, 500)
            ></div>
        </div>
    }
}

#[component]
fn Projects() -> impl IntoView {
    view! {
        <section class="w-full px-8 lg:px-16 py-24 lg:py-32 bg-gradient-to-br from-cream to-sand">
            <div class="max-w-7xl mx-auto">
                <Reveal motion=Motion::RISE class="text-center mb-20">
                    <h2 class="text-5xl font-bold mb-4">"Featured Projects"</h2>
                    <p class="text-xl text-umber max-w-2xl mx-auto">
                        "Explore my latest work showcasing innovative solutions and cutting-edge technologies"
                    </p>
                </Reveal>
                <Reveal stagger=Stagger::CONTAINER class="space-y-16">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard project index /> })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}

/// One project row. Rows zig-zag: even rows put the screenshot left, odd rows right.
#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let direction = if index % 2 == 0 {
        "lg:flex-row"
    } else {
        "lg:flex-row-reverse"
    };
    let class = format!("relative group {direction} flex flex-col gap-12 items-center");
    // content enters from the side opposite the screenshot
    let content_motion = Motion::slide_x(-alternate(index, 50), 600).with_delay(200);

    view! {
        <RevealItem motion=Motion::RISE index class=class>
            <div class="lg:w-1/2 relative overflow-hidden rounded-2xl shadow-2xl hover:scale-[1.02] transition-transform duration-300">
                <div class="relative aspect-video overflow-hidden">
                    <img
                        src=project.image
                        alt=project.title
                        class="w-full h-full object-cover hover:scale-110 transition-transform duration-700"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/60 via-transparent to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                    <Reveal
                        motion=Motion::POP.with_delay(500)
                        class="absolute top-4 right-4 bg-green-500 text-white px-3 py-1 rounded-full text-sm font-semibold"
                    >
                        {project.status}
                    </Reveal>
                    <div class="absolute inset-0 flex items-center justify-center gap-4 opacity-0 translate-y-5 group-hover:opacity-100 group-hover:translate-y-0 transition-all duration-500">
                        <a
                            href=project.demo_href()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bg-white text-ink px-6 py-3 rounded-lg font-semibold hover:bg-gold hover:text-white hover:scale-105 active:scale-95 transition-all duration-300 shadow-lg"
                        >
                            "Live Demo"
                        </a>
                    </div>
                </div>
            </div>
            <Reveal motion=content_motion class="lg:w-1/2 space-y-6">
                <h3 class="text-3xl font-bold text-ink group-hover:text-gold hover:translate-x-2 transition-all duration-300">
                    {project.title}
                </h3>
                <Reveal motion=Motion::FADE.with_delay(400)>
                    <p class="text-lg text-umber leading-relaxed">{project.description}</p>
                </Reveal>
                <Reveal motion=Motion::FADE.with_delay(600) stagger=TECH_BADGES>
                    <h4 class="text-lg font-semibold text-ink mb-3">"Technologies Used"</h4>
                    <div class="flex flex-wrap gap-3">
                        {project
                            .tech
                            .iter()
                            .enumerate()
                            .map(|(index, tech)| {
                                view! {
                                    <RevealItem motion=Motion::POP index>
                                        <span class="inline-block bg-gold/10 text-gold px-4 py-2 rounded-full text-sm font-medium border border-gold/20 hover:scale-110 hover:rotate-6 transition-transform">
                                            {*tech}
                                        </span>
                                    </RevealItem>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal motion=Motion::FADE.with_delay(800) stagger=FEATURES>
                    <h4 class="text-lg font-semibold text-ink mb-3">"Key Features"</h4>
                    <div class="grid grid-cols-2 gap-2">
                        {project
                            .features
                            .iter()
                            .enumerate()
                            .map(|(index, feature)| {
                                view! {
                                    <RevealItem
                                        motion=Motion::slide_x(-20, 600)
                                        index
                                        class="flex items-center gap-2 text-umber"
                                    >
                                        <div
                                            class="w-2 h-2 bg-gold rounded-full animate-pulse-scale"
                                            style=loop_style(2000, 200 * index as u32)
                                        ></div>
                                        <span class="text-sm">{*feature}</span>
                                    </RevealItem>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal motion=Motion::LIFT.with_delay(1200) class="flex gap-4 pt-4">
                    <a
                        href=project.demo_href()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="bg-gold text-white px-8 py-3 rounded-lg font-semibold hover:bg-gold-dark hover:scale-105 hover:-translate-y-0.5 active:scale-95 transition-all duration-300 shadow-lg flex items-center gap-2"
                    >
                        <IconView icon=Icon::ExternalLink size=18 />
                        "Live Demo"
                    </a>
                </Reveal>
            </Reveal>
        </RevealItem>
    }
}

#[component]
fn Skills() -> impl IntoView {
    view! {
        <section class="w-full px-8 lg:px-16 py-24 lg:py-32">
            <div class="max-w-7xl mx-auto">
                <Reveal motion=Motion::RISE class="text-center mb-16">
                    <h2 class="text-5xl font-bold mb-4">"Skills & Technologies"</h2>
                    <p class="text-xl text-umber max-w-2xl mx-auto">
                        "A snapshot of the tools and technologies I use to bring ideas to life."
                    </p>
                </Reveal>
                <Reveal
                    stagger=Stagger::CONTAINER
                    class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-x-8 gap-y-12"
                >
                    {SKILLS
                        .iter()
                        .enumerate()
                        .map(|(index, category)| view! { <SkillCard category index /> })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(category: &'static SkillCategory, index: usize) -> impl IntoView {
    view! {
        <RevealItem motion=Motion::RISE index>
            <div class="flex items-center gap-4 mb-6">
                <div class="text-gold">
                    <IconView icon=category.icon />
                </div>
                <h3 class="text-2xl font-bold text-ink">{category.category}</h3>
            </div>
            <Reveal stagger=SKILL_LIST>
                <ul class="space-y-3 text-lg text-umber">
                    {category
                        .skills
                        .iter()
                        .enumerate()
                        .map(|(index, skill)| {
                            view! {
                                <li class="relative pl-5 before:content-['▸'] before:absolute before:left-0 before:top-1 before:text-gold before:text-sm">
                                    <RevealItem motion=Motion::slide_x(-10, 600) index>
                                        {*skill}
                                    </RevealItem>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Reveal>
        </RevealItem>
    }
}
