use leptos::{html, prelude::*};

use super::hooks::use_reveal;
use crate::motion::Entrance;

/// Wraps `children` in a block that plays `entrance` when scrolled into view.
#[component]
pub fn Reveal(
    entrance: Entrance,
    #[prop(default = true)] once: bool,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(node_ref, once);

    view! {
        <div node_ref=node_ref class=class style=move || entrance.style(visible.get())>
            {children()}
        </div>
    }
}
