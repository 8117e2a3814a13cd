use yew::prelude::*;

use crate::components::tilt_card::TiltCard;
use crate::content::PROJECTS;
use crate::observer::use_revealed;
use crate::pointer::TiltConfig;

#[function_component(Projects)]
pub fn projects() -> Html {
    let revealed = use_revealed("projects");

    html! {
        <section id="projects" class={classes!("section", "reveal", revealed.then(|| "revealed"))}>
            <div class="section-inner">
                <span class="section-eyebrow rv">{"05 / Projects"}</span>
                <h2 class="section-title rv" style="--d: 100ms">
                    {"Selected "}<span class="gradient-text">{"work"}</span>
                </h2>
                <div class="projects-grid">
                    {
                        PROJECTS.iter().enumerate().map(|(i, project)| html! {
                            <div key={project.id} class="rv" style={format!("--d: {}ms", 200 + 150 * i)}>
                                <TiltCard
                                    config={TiltConfig::card()}
                                    class="project-card glass"
                                    style={format!("--accent: {}; --glow: {}", project.accent, project.glow)}
                                >
                                    <div class="project-head" data-cursor="hover">
                                        <span class="project-number mono">{ project.number }</span>
                                        <span class="project-icon">{ project.icon }</span>
                                    </div>
                                    <h3 class="project-title">{ project.title }</h3>
                                    <p class="project-subtitle">{ project.subtitle }</p>
                                    <p class="project-description">{ project.description }</p>
                                    <div class="project-metrics">
                                        {
                                            project.metrics.iter().map(|metric| html! {
                                                <div key={metric.label} class="project-metric">
                                                    <span class="metric-value" style={format!("color: {}", metric.color)}>
                                                        { metric.value }
                                                    </span>
                                                    <span class="metric-label">{ metric.label }</span>
                                                </div>
                                            }).collect::<Html>()
                                        }
                                    </div>
                                    <div class="tag-list">
                                        { for project.tags.iter().map(|t| html! { <span class="tag">{ *t }</span> }) }
                                    </div>
                                </TiltCard>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <style>
                {r#"
                    .projects-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                        gap: 2rem;
                        perspective: 1200px;
                    }
                    .project-card {
                        height: 100%;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        transform-style: preserve-3d;
                        transition: box-shadow 0.4s ease;
                    }
                    .project-card:hover {
                        box-shadow: 0 30px 60px -20px var(--glow);
                    }
                    .project-head {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        transform: translateZ(30px);
                    }
                    .project-number {
                        font-size: 0.8rem;
                        color: var(--accent);
                    }
                    .project-icon {
                        font-size: 2rem;
                    }
                    .project-title {
                        margin-top: 1.25rem;
                        font-size: 1.35rem;
                        font-weight: 700;
                        transform: translateZ(20px);
                    }
                    .project-subtitle {
                        margin-top: 0.25rem;
                        font-size: 0.8rem;
                        color: var(--accent);
                    }
                    .project-description {
                        margin: 1rem 0 1.5rem;
                        color: #94a3b8;
                        font-size: 0.9rem;
                        line-height: 1.7;
                    }
                    .project-metrics {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 0.75rem;
                        margin-bottom: 1.5rem;
                    }
                    .project-metric {
                        display: flex;
                        flex-direction: column;
                        gap: 0.2rem;
                        padding: 0.75rem;
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.03);
                    }
                    .metric-value {
                        font-weight: 700;
                        font-size: 0.95rem;
                    }
                    .metric-label {
                        font-size: 0.7rem;
                        color: #64748b;
                    }
                "#}
            </style>
        </section>
    }
}
