use yew::prelude::*;

use crate::components::footer::Footer;
use crate::content::SECTIONS;
use crate::observer::{use_viewport_observer, ObserverOptions, ViewState};
use crate::pages::{
    about::About, contact::Contact, education::Education, experience::ExperienceSection,
    hero::Hero, projects::Projects, skills::Skills,
};

/// The whole single-page site. Sections read their reveal flag from the
/// `ViewState` provided here.
#[function_component(Home)]
pub fn home() -> Html {
    let revealed = use_viewport_observer(SECTIONS, ObserverOptions::reveal(), ());

    html! {
        <ContextProvider<ViewState> context={revealed}>
            <main class="page">
                <Hero />
                <About />
                <Education />
                <Skills />
                <ExperienceSection />
                <Projects />
                <Contact />
            </main>
            <Footer />
        </ContextProvider<ViewState>>
    }
}
