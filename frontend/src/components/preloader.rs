use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;
use gloo_timers::callback::{Interval, Timeout};

use crate::intro::{IntroAction, IntroPhase, IntroSchedule, IntroState};

#[function_component(Preloader)]
pub fn preloader() -> Html {
    let schedule = IntroSchedule::default();
    let intro = use_reducer_eq(|| IntroState::new(&schedule));

    {
        let dispatcher = intro.dispatcher();
        use_effect_with_deps(
            move |_| {
                let mut timers: Vec<Timeout> = schedule
                    .phases()
                    .filter(|(phase, _)| *phase != IntroPhase::Initializing)
                    .map(|(phase, at)| {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(at, move || dispatcher.dispatch(IntroAction::Enter(phase)))
                    })
                    .collect();

                let ticker = Rc::new(RefCell::new(Some({
                    let dispatcher = dispatcher.clone();
                    Interval::new(schedule.tick_ms, move || dispatcher.dispatch(IntroAction::Tick))
                })));

                // The overlay leaves at a fixed time even if the counter has
                // not reached 100 yet.
                {
                    let ticker = ticker.clone();
                    timers.push(Timeout::new(schedule.dismiss_ms, move || {
                        ticker.borrow_mut().take();
                        log::debug!("intro dismissed");
                        dispatcher.dispatch(IntroAction::Dismiss);
                    }));
                }

                move || {
                    drop(timers);
                    ticker.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div class={classes!("preloader", (!intro.visible).then(|| "hidden"))} aria-hidden={(!intro.visible).to_string()}>
            <div class="preloader-inner">
                <div class="preloader-orb">
                    <span class="orb-ring"></span>
                    <span class="orb-ring delayed"></span>
                    <span class="orb-core"></span>
                </div>
                <div class="preloader-count gradient-text">
                    { format!("{}%", intro.percent()) }
                </div>
                <div class="preloader-track">
                    <div class="preloader-fill" style={format!("width: {}%", intro.percent())}></div>
                </div>
                <p class="preloader-caption">{ intro.phase.caption() }</p>
            </div>
            <style>
                {r#"
                    .preloader {
                        position: fixed;
                        inset: 0;
                        z-index: 10000;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        background: #020817;
                        transition: opacity 0.8s ease, visibility 0.8s ease;
                    }
                    .preloader.hidden {
                        opacity: 0;
                        visibility: hidden;
                        pointer-events: none;
                    }
                    .preloader-inner {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .preloader-orb {
                        position: relative;
                        width: 96px;
                        height: 96px;
                    }
                    .orb-ring {
                        position: absolute;
                        inset: 0;
                        border-radius: 50%;
                        border: 1px solid rgba(59, 130, 246, 0.4);
                        animation: orb-pulse 1.6s ease-out infinite;
                    }
                    .orb-ring.delayed {
                        animation-delay: 0.8s;
                    }
                    .orb-core {
                        position: absolute;
                        inset: 32px;
                        border-radius: 50%;
                        background: radial-gradient(circle, #60a5fa, #8b5cf6);
                        box-shadow: 0 0 40px rgba(59, 130, 246, 0.6);
                    }
                    @keyframes orb-pulse {
                        from { transform: scale(0.6); opacity: 1; }
                        to { transform: scale(1.4); opacity: 0; }
                    }
                    .preloader-count {
                        font-family: 'JetBrains Mono', monospace;
                        font-size: 2.5rem;
                        font-weight: 700;
                    }
                    .preloader-track {
                        width: 240px;
                        height: 2px;
                        background: rgba(255, 255, 255, 0.08);
                        border-radius: 9999px;
                        overflow: hidden;
                    }
                    .preloader-fill {
                        height: 100%;
                        background: linear-gradient(90deg, #3b82f6, #8b5cf6, #06b6d4);
                    }
                    .preloader-caption {
                        font-family: 'JetBrains Mono', monospace;
                        font-size: 0.75rem;
                        letter-spacing: 0.15em;
                        color: #64748b;
                    }
                "#}
            </style>
        </div>
    }
}
