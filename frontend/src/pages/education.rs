use yew::prelude::*;

use crate::components::tilt_card::TiltCard;
use crate::content::EDUCATION;
use crate::observer::use_revealed;
use crate::pointer::TiltConfig;

#[function_component(Education)]
pub fn education() -> Html {
    let revealed = use_revealed("education");

    html! {
        <section id="education" class={classes!("section", "reveal", revealed.then(|| "revealed"))}>
            <div class="section-inner">
                <span class="section-eyebrow rv">{"02 / Education"}</span>
                <h2 class="section-title rv" style="--d: 100ms">
                    {"Academic "}<span class="gradient-text">{"foundation"}</span>
                </h2>
                <div class="education-list">
                    {
                        EDUCATION.iter().enumerate().map(|(i, entry)| html! {
                            <div key={entry.degree} class="rv" style={format!("--d: {}ms", 200 + 150 * i)}>
                                <TiltCard
                                    config={TiltConfig::subtle()}
                                    class="education-card glass"
                                    style={format!("--accent: {}", entry.color)}
                                >
                                    <div class="education-icon">{ entry.icon }</div>
                                    <div class="education-body">
                                        <h3>{ entry.degree }</h3>
                                        <p class="education-school">{ entry.institution }</p>
                                        <div class="education-meta">
                                            <span>{ entry.location }</span>
                                            <span class="mono">{ entry.period }</span>
                                        </div>
                                    </div>
                                </TiltCard>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .education-list {
                        display: grid;
                        gap: 1.5rem;
                        perspective: 1000px;
                    }
                    .education-card {
                        display: flex;
                        gap: 1.5rem;
                        align-items: center;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        border-left: 3px solid var(--accent);
                        transform-style: preserve-3d;
                    }
                    .education-icon {
                        font-size: 2.5rem;
                    }
                    .education-body h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .education-school {
                        margin: 0.25rem 0 0.75rem;
                        color: var(--accent);
                    }
                    .education-meta {
                        display: flex;
                        gap: 1.5rem;
                        font-size: 0.8rem;
                        color: #64748b;
                    }
                "#}
            </style>
        </section>
    }
}
