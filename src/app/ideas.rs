use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    motion::{Entrance, Offset},
    site::IDEA_CARDS,
};

const CARD_ACCENTS: [&str; 2] = ["border-purple-500/50", "border-pink-500/50"];

#[component]
pub fn IdeasSection() -> impl IntoView {
    view! {
        <section class="py-24 px-6 bg-purple-950/50">
            <div class="max-w-6xl mx-auto text-center">
                <Reveal entrance=Entrance::new(Offset::Scale(0.9)) class="inline-block">
                    <h2 class="text-5xl font-bold text-white mb-8">
                        <span class="bg-gradient-to-r from-purple-400 to-pink-400 bg-clip-text text-transparent">
                            "Currently Building the Future"
                        </span>
                    </h2>
                    <div class="grid md:grid-cols-2 gap-10 mt-16">
                        {IDEA_CARDS
                            .iter()
                            .zip(CARD_ACCENTS)
                            .map(|(card, accent)| {
                                view! {
                                    <div class=format!(
                                        "bg-black/50 border {accent} rounded-xl p-10 backdrop-blur-xl",
                                    )>
                                        <div class="text-6xl mb-6">{card.emoji}</div>
                                        <h3 class="text-3xl font-bold text-white mb-4">{card.title}</h3>
                                        <p class="text-gray-300 text-lg">{card.desc}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
