use yew::prelude::*;
use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;

use crate::components::neural_bg::NeuralBackground;
use crate::config::RESUME_PATH;
use crate::content::{OWNER_FIRST, OWNER_LAST, ROLES, TAGLINE};
use crate::scroll::scroll_to_section;
use crate::typewriter::TypewriterState;

#[derive(Properties, PartialEq)]
pub struct TypewriterProps {
    pub words: &'static [&'static str],
}

#[function_component(Typewriter)]
pub fn typewriter(props: &TypewriterProps) -> Html {
    let state = use_state_eq(TypewriterState::default);

    {
        let setter = state.setter();
        let words = props.words;
        use_effect_with_deps(
            move |current: &TypewriterState| {
                let (next, delay) = current.step(words);
                let timeout = Timeout::new(delay, move || setter.set(next));
                move || drop(timeout)
            },
            *state,
        );
    }

    html! {
        <span class="typewriter">
            <span class="gradient-text">{ state.text(props.words) }</span>
            <span class="typewriter-caret">{"|"}</span>
        </span>
    }
}

fn scroll_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    })
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id="hero" class="hero">
            <NeuralBackground />
            <div class="hero-glow"></div>
            <div class="hero-content">
                <div class="hero-badge glass">
                    <span class="pulse-dot"></span>
                    {"Available for opportunities"}
                </div>
                <h1 class="hero-name">
                    <span class="hero-first">{ OWNER_FIRST }</span>
                    <span class="hero-last gradient-text">{ OWNER_LAST }</span>
                </h1>
                <div class="hero-role">
                    <Typewriter words={ROLES} />
                </div>
                <p class="hero-tagline">{ TAGLINE }</p>
                <div class="hero-ctas">
                    <a href="#projects" class="btn btn-primary magnetic-btn" onclick={scroll_to("projects")}>
                        {"View Projects"}
                    </a>
                    <a href={RESUME_PATH} class="btn btn-ghost magnetic-btn" download="">
                        {"Download Resume"}
                    </a>
                    <a href="#contact" class="btn btn-ghost magnetic-btn" onclick={scroll_to("contact")}>
                        {"Contact Me"}
                    </a>
                </div>
            </div>
            <a href="#about" class="scroll-indicator" aria-label="Scroll down" onclick={scroll_to("about")}>
                <span class="scroll-mouse"><span class="scroll-wheel"></span></span>
                <span class="scroll-label">{"Scroll"}</span>
            </a>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .neural-bg {
                        position: absolute;
                        inset: 0;
                        width: 100%;
                        height: 100%;
                        z-index: 0;
                    }
                    .hero-glow {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(ellipse at center, rgba(59, 130, 246, 0.15), transparent 60%);
                        pointer-events: none;
                        z-index: 1;
                    }
                    .hero-content {
                        position: relative;
                        z-index: 2;
                        text-align: center;
                        padding: 0 1.5rem;
                        animation: hero-rise 1s ease-out 2.7s both;
                    }
                    @keyframes hero-rise {
                        from { transform: translateY(40px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        font-size: 0.8rem;
                        color: #94a3b8;
                    }
                    .pulse-dot {
                        width: 8px;
                        height: 8px;
                        border-radius: 50%;
                        background: #22c55e;
                        animation: pulse 2s infinite;
                    }
                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.4; }
                    }
                    .hero-name {
                        margin: 1.5rem 0 1rem;
                        font-size: clamp(2.5rem, 8vw, 6rem);
                        font-weight: 800;
                        line-height: 1;
                        letter-spacing: -0.03em;
                    }
                    .hero-name span {
                        display: block;
                    }
                    .hero-role {
                        min-height: 2.5rem;
                        font-family: 'JetBrains Mono', monospace;
                        font-size: clamp(1.1rem, 3vw, 1.6rem);
                    }
                    .typewriter-caret {
                        margin-left: 2px;
                        color: #3b82f6;
                        animation: blink 1s step-end infinite;
                    }
                    @keyframes blink {
                        50% { opacity: 0; }
                    }
                    .hero-tagline {
                        max-width: 36rem;
                        margin: 1.5rem auto 2.5rem;
                        color: #94a3b8;
                        line-height: 1.7;
                    }
                    .hero-ctas {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        flex-wrap: wrap;
                    }
                    .scroll-indicator {
                        position: absolute;
                        bottom: 2.5rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 2;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        color: #64748b;
                        text-decoration: none;
                        font-size: 0.7rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                    }
                    .scroll-mouse {
                        width: 22px;
                        height: 36px;
                        border: 1px solid rgba(148, 163, 184, 0.5);
                        border-radius: 12px;
                        display: flex;
                        justify-content: center;
                        padding-top: 6px;
                    }
                    .scroll-wheel {
                        width: 3px;
                        height: 8px;
                        border-radius: 2px;
                        background: #3b82f6;
                        animation: wheel 1.6s ease-in-out infinite;
                    }
                    @keyframes wheel {
                        from { transform: translateY(0); opacity: 1; }
                        to { transform: translateY(12px); opacity: 0; }
                    }
                "#}
            </style>
        </section>
    }
}
