use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};

use crate::contact::{ContactFlow, Field, LogSink};

pub fn open_modal(flow: RwSignal<ContactFlow>) {
    log::debug!("contact modal opened");
    flow.update(ContactFlow::open);
}

fn close_modal(flow: RwSignal<ContactFlow>) {
    log::debug!("contact modal dismissed");
    flow.update(ContactFlow::close);
}

fn acknowledge(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = window().alert_with_message(message);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::info!("{message}");
    }
}

/// The single contact dialog. Every trigger on the page opens this instance.
#[component]
pub fn ContactModal() -> impl IntoView {
    let flow = expect_context::<RwSignal<ContactFlow>>();

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if ev.key() == "Escape" && flow.with_untracked(ContactFlow::is_open) {
            close_modal(flow);
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match flow.try_update(|f| f.submit(&LogSink)) {
            Some(Ok(ack)) => acknowledge(&ack.message),
            // the required attributes already flagged the field to the user
            Some(Err(err)) => log::debug!("contact submission rejected: {err}"),
            None => {}
        }
    };

    view! {
        <Show when=move || flow.with(ContactFlow::is_open)>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center bg-black/80 p-4"
                on:click=move |_| close_modal(flow)
            >
                <div
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="contact-title"
                    class="relative w-full max-w-lg rounded-lg bg-slate-900 border border-purple-500 text-white p-6 shadow-2xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        type="button"
                        aria-label="Close"
                        class="absolute right-4 top-4 text-gray-400 hover:text-white"
                        on:click=move |_| close_modal(flow)
                    >
                        "✕"
                    </button>
                    <h2 id="contact-title" class="text-2xl font-bold">
                        "Get In Touch"
                    </h2>
                    <p class="text-gray-400 mt-1">"Let's discuss your project or opportunity"</p>
                    <form class="space-y-4 mt-4" on:submit=on_submit>
                        <FieldInput flow=flow field=Field::Name kind="text" placeholder="Your Name" />
                        <FieldInput
                            flow=flow
                            field=Field::Email
                            kind="email"
                            placeholder="Your Email"
                        />
                        <textarea
                            placeholder="Your Message (optional)"
                            class="w-full px-4 py-2 rounded-md bg-slate-800 border border-slate-700 text-white min-h-[100px] focus:outline-none focus:ring-2 focus:ring-purple-500"
                            prop:value=move || flow.with(|f| f.form().message.clone())
                            on:input=move |ev| {
                                flow.update(|f| f.set_field(Field::Message, event_target_value(&ev)))
                            }
                        ></textarea>
                        <button
                            type="submit"
                            class="w-full bg-purple-600 hover:bg-purple-700 text-white py-2 rounded-md transition-colors duration-200"
                        >
                            "Send Message"
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn FieldInput(
    flow: RwSignal<ContactFlow>,
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <input
            type=kind
            placeholder=placeholder
            required=true
            class="w-full px-4 py-2 rounded-md bg-slate-800 border border-slate-700 text-white focus:outline-none focus:ring-2 focus:ring-purple-500"
            prop:value=move || flow.with(|f| f.form().get(field).to_string())
            on:input=move |ev| flow.update(|f| f.set_field(field, event_target_value(&ev)))
        />
    }
}
