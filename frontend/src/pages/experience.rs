use yew::prelude::*;

use crate::content::EXPERIENCE;
use crate::observer::use_revealed;

#[function_component(ExperienceSection)]
pub fn experience_section() -> Html {
    let revealed = use_revealed("experience");

    html! {
        <section id="experience" class={classes!("section", "reveal", revealed.then(|| "revealed"))}>
            <div class="section-inner">
                <span class="section-eyebrow rv">{"04 / Experience"}</span>
                <h2 class="section-title rv" style="--d: 100ms">
                    {"Where I've "}<span class="gradient-text">{"built"}</span>
                </h2>
                <div class="timeline">
                    <div class="timeline-line"></div>
                    {
                        EXPERIENCE.iter().enumerate().map(|(i, entry)| html! {
                            <article
                                key={entry.title}
                                class="timeline-item rv"
                                style={format!("--d: {}ms; --accent: {}", 200 + 200 * i, entry.color)}
                            >
                                <div class="timeline-marker">{ entry.icon }</div>
                                <div class="timeline-card glass">
                                    <div class="timeline-head">
                                        <div>
                                            <h3>{ entry.title }</h3>
                                            <p class="timeline-company">{ entry.company }</p>
                                        </div>
                                        <div class="timeline-meta">
                                            <span class="timeline-kind">{ entry.kind }</span>
                                            <span class="mono">{ entry.period }</span>
                                            <span>{ entry.location }</span>
                                        </div>
                                    </div>
                                    <p class="timeline-description">{ entry.description }</p>
                                    <ul class="timeline-highlights">
                                        { for entry.highlights.iter().map(|h| html! { <li>{ *h }</li> }) }
                                    </ul>
                                    <div class="tag-list">
                                        { for entry.skills.iter().map(|s| html! { <span class="tag">{ *s }</span> }) }
                                    </div>
                                </div>
                            </article>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .timeline {
                        position: relative;
                        padding-left: 3.5rem;
                    }
                    .timeline-line {
                        position: absolute;
                        left: 1.25rem;
                        top: 0;
                        bottom: 0;
                        width: 1px;
                        background: linear-gradient(180deg, #3b82f6, #8b5cf6, #06b6d4);
                        opacity: 0.4;
                    }
                    .timeline-item {
                        position: relative;
                        margin-bottom: 2.5rem;
                    }
                    .timeline-marker {
                        position: absolute;
                        left: -3.5rem;
                        top: 1.5rem;
                        width: 2.5rem;
                        height: 2.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: #020817;
                        border: 1px solid var(--accent);
                        box-shadow: 0 0 20px var(--accent);
                    }
                    .timeline-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                    }
                    .timeline-head {
                        display: flex;
                        justify-content: space-between;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .timeline-head h3 {
                        font-size: 1.2rem;
                        font-weight: 700;
                    }
                    .timeline-company {
                        color: var(--accent);
                    }
                    .timeline-meta {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-end;
                        gap: 0.2rem;
                        font-size: 0.75rem;
                        color: #64748b;
                    }
                    .timeline-kind {
                        padding: 0.15rem 0.6rem;
                        border-radius: 9999px;
                        border: 1px solid var(--accent);
                        color: var(--accent);
                    }
                    .timeline-description {
                        margin: 1rem 0;
                        color: #94a3b8;
                        line-height: 1.7;
                    }
                    .timeline-highlights {
                        margin: 0 0 1.25rem 1rem;
                        color: #cbd5e1;
                        font-size: 0.9rem;
                        line-height: 1.8;
                    }
                "#}
            </style>
        </section>
    }
}
