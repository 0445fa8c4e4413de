use leptos::{html, prelude::*};

use super::{
    contact::open_modal,
    hooks::{use_mounted, use_scroll_progress},
};
use crate::{
    contact::ContactFlow,
    motion::{parallax_transform, Entrance, Offset},
    site::{HERO_BADGES, OWNER_EMPLOYER, OWNER_NAME, OWNER_ROLE, PROJECTS_ANCHOR},
};

const TITLE: Entrance = Entrance::new(Offset::Y(30.0));
const SUBTITLE: Entrance = Entrance::new(Offset::Y(30.0)).with_delay(0.2);
const BADGES: Entrance = Entrance::new(Offset::Fade).with_delay(0.6);
const ACTIONS: Entrance = Entrance::new(Offset::Y(20.0)).with_delay(0.8);

/// `content` wraps the whole page; its size changes drive the parallax extent.
#[component]
pub fn HeroSection(content: NodeRef<html::Div>) -> impl IntoView {
    let flow = expect_context::<RwSignal<ContactFlow>>();
    let progress = use_scroll_progress(content);
    let mounted = use_mounted();
    let enter = move |entrance: Entrance| move || entrance.style(mounted.get());

    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-br from-slate-900 via-purple-900 to-slate-900">
            <div
                class="absolute inset-0 opacity-30 will-change-transform"
                style=move || parallax_transform(progress.get())
            >
                <div class="absolute inset-0 hero-noise mix-blend-soft-light"></div>
            </div>

            <div class="relative z-10 text-center px-6 max-w-5xl mx-auto">
                <h1
                    class="text-6xl md:text-8xl font-bold text-white mb-6 tracking-tighter"
                    style=enter(TITLE)
                >
                    "Hi, I'm "
                    <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                        {OWNER_NAME}
                    </span>
                </h1>
                <p class="text-2xl md:text-4xl text-gray-300 mb-8" style=enter(SUBTITLE)>
                    {OWNER_ROLE}
                    " @ "
                    <span class="text-purple-400 font-semibold">{OWNER_EMPLOYER}</span>
                </p>
                <div class="flex flex-wrap gap-4 justify-center" style=enter(BADGES)>
                    {HERO_BADGES
                        .iter()
                        .map(|badge| {
                            view! {
                                <span class=format!(
                                    "text-lg px-6 py-3 rounded-full border {}",
                                    badge.class,
                                )>{badge.emoji} " " {badge.label}</span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="mt-12 flex flex-wrap gap-6 justify-center" style=enter(ACTIONS)>
                    <a
                        href=format!("#{PROJECTS_ANCHOR}")
                        class="bg-purple-600 hover:bg-purple-700 text-white text-lg px-8 py-3 rounded-md transition-colors duration-200"
                    >
                        "View Projects →"
                    </a>
                    <button
                        type="button"
                        class="border border-purple-500 text-purple-400 hover:bg-purple-500/20 text-lg px-8 py-3 rounded-md transition-colors duration-200"
                        on:click=move |_| open_modal(flow)
                    >
                        "✉ Contact Me"
                    </button>
                </div>
            </div>

            <div class="absolute bottom-10 left-1/2 -translate-x-1/2 scroll-hint" aria-hidden="true">
                <div class="w-6 h-10 border-2 border-purple-400 rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-purple-400 rounded-full mt-2"></div>
                </div>
            </div>
        </section>
    }
}
