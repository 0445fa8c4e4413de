use leptos::prelude::*;

use super::contact::open_modal;
use crate::{
    contact::ContactFlow,
    site::{build_date, OWNER_NAME, SOCIAL_LINKS},
};

#[component]
pub fn CtaSection() -> impl IntoView {
    let flow = expect_context::<RwSignal<ContactFlow>>();

    view! {
        <section class="py-24 px-6 bg-black text-white text-center">
            <h2 class="text-5xl font-bold mb-8">"Let's Build Something Extraordinary"</h2>
            <p class="text-xl text-gray-400 mb-12 max-w-2xl mx-auto">
                "Whether it's a high-scale enterprise solution, a premium client project, or your next big idea, I'm ready."
            </p>
            <div class="flex flex-wrap gap-6 justify-center">
                <button
                    type="button"
                    class="bg-gradient-to-r from-purple-600 to-pink-600 text-white text-lg px-10 py-3 rounded-md"
                    on:click=move |_| open_modal(flow)
                >
                    "✉ Hire Me"
                </button>
                {SOCIAL_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=format!("{} Profile", link.label)
                                class="border border-purple-500 text-purple-400 hover:bg-purple-500/20 text-lg px-10 py-3 rounded-md transition-colors duration-200"
                            >
                                <i class=link.icon></i>
                                " "
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="mt-16 text-sm text-gray-600">
                "© " {OWNER_NAME} " · built " {build_date()}
            </p>
        </section>
    }
}
