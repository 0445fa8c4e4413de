use leptos::{html, prelude::*};

use super::{hooks::use_reveal, reveal::Reveal};
use crate::{
    motion::{Entrance, Offset},
    projects::{Alignment, PROJECTS},
    site::PROJECTS_ANCHOR,
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=PROJECTS_ANCHOR class="py-24 px-6 bg-gradient-to-b from-black to-slate-900">
            <div class="max-w-7xl mx-auto">
                // fades again every time the heading comes back into view
                <Reveal entrance=Entrance::new(Offset::Fade) once=false>
                    <h2 class="text-5xl font-bold text-center mb-16 text-white">
                        "Featured " <span class="text-purple-400">"Projects"</span>
                    </h2>
                </Reveal>
                <div class="space-y-24">
                    {PROJECTS
                        .iter()
                        .map(|p| {
                            view! {
                                <ProjectCard
                                    title=p.title
                                    link=p.link
                                    description=p.description
                                    tags=p.tags
                                    achievement=p.achievement
                                    alignment=p.alignment
                                />
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// One project, sliding in from its alignment side the first time it is seen.
#[component]
pub fn ProjectCard(
    title: &'static str,
    link: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    achievement: &'static str,
    #[prop(default = Alignment::Left)] alignment: Alignment,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(node_ref, true);
    let entrance = Entrance::new(Offset::X(alignment.slide_from_px()));

    let (grid_class, text_class, media_class) = if alignment.is_reversed() {
        (
            "grid md:grid-cols-2 gap-12 items-center md:grid-flow-dense",
            "md:order-2",
            "md:order-1 relative group",
        )
    } else {
        (
            "grid md:grid-cols-2 gap-12 items-center",
            "",
            "relative group",
        )
    };

    view! {
        <div node_ref=node_ref class=grid_class style=move || entrance.style(visible.get())>
            <div class=text_class>
                <h3 class="text-4xl font-bold text-white mb-4">{title}</h3>
                <p class="text-gray-300 text-lg leading-relaxed mb-6">{description}</p>
                <p class="text-purple-400 font-semibold mb-6">"🏆 " {achievement}</p>
                <div class="flex flex-wrap gap-3 mb-8">
                    {tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-md px-2 py-1 border border-purple-500 text-purple-300 text-sm">
                                    {*tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <a
                    href=link
                    target="_blank"
                    rel="noopener noreferrer"
                    class="inline-block bg-white text-black text-lg px-6 py-2 rounded-md hover:bg-gray-200 transition-colors duration-200"
                >
                    "View Live Project ↗"
                </a>
            </div>
            <div class=media_class>
                <div class="relative overflow-hidden rounded-2xl shadow-2xl">
                    <div class="bg-gray-800 border-2 border-dashed border-purple-500 rounded-2xl w-full h-96 flex items-center justify-center text-7xl opacity-50">
                        "🌐"
                    </div>
                    <div class="absolute inset-0 bg-gradient-to-t from-purple-600/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-500 flex items-end p-8">
                        <p class="text-white text-xl font-bold">"Live → " {link}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
