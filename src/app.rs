mod about;
mod contact;
mod cta;
mod hero;
mod hooks;
mod ideas;
mod projects;
mod reveal;

use leptos::{html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::{contact::ContactFlow, site::OWNER_NAME};
use about::AboutSection;
use contact::ContactModal;
use cta::CtaSection;
use hero::HeroSection;
use ideas::IdeasSection;
use projects::ProjectsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-black text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER_NAME} - {title}") />
        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=Page />
                </Routes>
            </main>
        </Router>
    }
}

/// The whole portfolio. Owns the one contact flow every trigger shares.
#[component]
fn Page() -> impl IntoView {
    let flow = RwSignal::new(ContactFlow::default());
    provide_context(flow);
    let content = NodeRef::<html::Div>::new();

    view! {
        <Title text="Portfolio" />
        <div node_ref=content>
            <HeroSection content=content />
            <AboutSection />
            <ProjectsSection />
            <IdeasSection />
            <CtaSection />
        </div>
        <ContactModal />
    }
}
