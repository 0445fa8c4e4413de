use leptos::prelude::*;

use super::reveal::Reveal;
use crate::{
    motion::{Entrance, Offset},
    site::{ABOUT_BLURB, ABOUT_TILES},
};

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section class="py-24 px-6 bg-black text-white">
            <div class="max-w-6xl mx-auto">
                <Reveal entrance=Entrance::new(Offset::Fade) class="text-center mb-16">
                    <h2 class="text-5xl font-bold mb-6">"Crafting Digital Excellence"</h2>
                    <p class="text-xl text-gray-400 max-w-3xl mx-auto">{ABOUT_BLURB}</p>
                </Reveal>
                <div class="grid md:grid-cols-3 gap-8">
                    {ABOUT_TILES
                        .iter()
                        .enumerate()
                        .map(|(i, tile)| {
                            view! {
                                <Reveal
                                    entrance=Entrance::new(Offset::Y(50.0)).staggered(i)
                                    class="text-center"
                                >
                                    <div class="w-20 h-20 mx-auto mb-6 rounded-full bg-gradient-to-br from-purple-600 to-pink-600 flex items-center justify-center text-3xl">
                                        {tile.emoji}
                                    </div>
                                    <h3 class="text-2xl font-bold mb-3">{tile.title}</h3>
                                    <p class="text-gray-400">{tile.desc}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
