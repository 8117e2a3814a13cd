use yew::prelude::*;

use crate::components::stat_counter::StatCounter;
use crate::content::{ABOUT_PARAGRAPHS, ABOUT_TAGS, STATS};
use crate::observer::use_revealed;

#[function_component(About)]
pub fn about() -> Html {
    let revealed = use_revealed("about");

    html! {
        <section id="about" class={classes!("section", "reveal", revealed.then(|| "revealed"))}>
            <div class="section-inner about-grid">
                <div class="about-story">
                    <span class="section-eyebrow rv">{"01 / About"}</span>
                    <h2 class="section-title rv" style="--d: 100ms">
                        {"Engineering "}<span class="gradient-text">{"intelligence"}</span>{" for healthcare"}
                    </h2>
                    {
                        ABOUT_PARAGRAPHS.iter().enumerate().map(|(i, paragraph)| html! {
                            <p class="about-paragraph rv" style={format!("--d: {}ms", 200 + 100 * i)}>
                                { *paragraph }
                            </p>
                        }).collect::<Html>()
                    }
                    <div class="tag-list rv" style="--d: 500ms">
                        { for ABOUT_TAGS.iter().map(|tag| html! { <span class="tag">{ *tag }</span> }) }
                    </div>
                </div>
                <div class="about-stats">
                    {
                        STATS.iter().enumerate().map(|(index, stat)| html! {
                            <StatCounter key={stat.label} {stat} {index} active={revealed} />
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .about-grid {
                        display: grid;
                        grid-template-columns: 3fr 2fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-paragraph {
                        margin-bottom: 1.25rem;
                        color: #94a3b8;
                        line-height: 1.8;
                    }
                    .about-stats {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                    }
                    .stat {
                        padding: 1.75rem 1.25rem;
                        border-radius: 1.25rem;
                        text-align: center;
                    }
                    .stat-value {
                        font-size: 2.5rem;
                        font-weight: 800;
                        font-variant-numeric: tabular-nums;
                    }
                    .stat-label {
                        margin-top: 0.5rem;
                        font-size: 0.8rem;
                        color: #94a3b8;
                    }
                    @media (max-width: 900px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
