use yew::prelude::*;

use crate::content::SKILL_CATEGORIES;
use crate::observer::use_revealed;

#[function_component(Skills)]
pub fn skills() -> Html {
    let revealed = use_revealed("skills");

    html! {
        <section id="skills" class={classes!("section", "reveal", revealed.then(|| "revealed"))}>
            <div class="section-inner">
                <span class="section-eyebrow rv">{"03 / Skills"}</span>
                <h2 class="section-title rv" style="--d: 100ms">
                    {"Technical "}<span class="gradient-text">{"arsenal"}</span>
                </h2>
                <div class="skills-grid">
                    {
                        SKILL_CATEGORIES.iter().enumerate().map(|(i, category)| html! {
                            <div
                                key={category.title}
                                class="skill-card glass rv"
                                style={format!("--d: {}ms; --accent: {}; --glow: {}", 200 + 100 * i, category.color, category.glow)}
                            >
                                <div class="skill-card-head">
                                    <span class="skill-icon">{ category.icon }</span>
                                    <h3>{ category.title }</h3>
                                </div>
                                {
                                    category.skills.iter().enumerate().map(|(j, skill)| {
                                        // Bars fill once the section is revealed, one after another.
                                        let width = if revealed { skill.level } else { 0 };
                                        html! {
                                            <div key={skill.name} class="skill-row">
                                                <div class="skill-row-head">
                                                    <span>{ skill.name }</span>
                                                    <span class="mono">{ format!("{}%", skill.level) }</span>
                                                </div>
                                                <div class="skill-track">
                                                    <div
                                                        class="skill-fill"
                                                        style={format!("width: {}%; transition-delay: {}ms", width, 300 + 100 * i + 60 * j)}
                                                    ></div>
                                                </div>
                                            </div>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .skills-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                    }
                    .skill-card {
                        padding: 1.75rem;
                        border-radius: 1.5rem;
                        transition: box-shadow 0.4s ease, border-color 0.4s ease;
                    }
                    .skill-card:hover {
                        border-color: var(--accent);
                        box-shadow: 0 0 40px var(--glow);
                    }
                    .skill-card-head {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .skill-icon {
                        font-size: 1.5rem;
                    }
                    .skill-card-head h3 {
                        font-size: 1rem;
                        font-weight: 700;
                    }
                    .skill-row {
                        margin-bottom: 1rem;
                    }
                    .skill-row-head {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.8rem;
                        color: #cbd5e1;
                        margin-bottom: 0.4rem;
                    }
                    .skill-track {
                        height: 4px;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.06);
                        overflow: hidden;
                    }
                    .skill-fill {
                        height: 100%;
                        border-radius: 9999px;
                        background: linear-gradient(90deg, var(--accent), rgba(255, 255, 255, 0.7));
                        transition: width 1.2s cubic-bezier(0.22, 1, 0.36, 1);
                    }
                "#}
            </style>
        </section>
    }
}
