use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{HtmlElement, MouseEvent};

mod config;
mod content;
mod spring;
mod frame;
mod scroll;
mod observer;
mod pointer;
mod intro;
mod typewriter;
mod count_up;
mod background;
mod contact;

mod components {
    pub mod cursor;
    pub mod preloader;
    pub mod tilt_card;
    pub mod neural_bg;
    pub mod stat_counter;
    pub mod footer;
}
mod pages {
    pub mod home;
    pub mod hero;
    pub mod about;
    pub mod education;
    pub mod skills;
    pub mod experience;
    pub mod projects;
    pub mod contact;
    pub mod not_found;
}

use components::{cursor::Cursor, preloader::Preloader};
use content::{nav_sections, SECTIONS};
use frame::{frame_delta, FrameLoop};
use observer::{use_viewport_observer, ObserverOptions};
use pages::{home::Home, not_found::NotFound};
use scroll::{scroll_to_section, scroll_to_top, use_scroll_metrics};
use spring::{Spring, SpringConfig};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let scroll = use_scroll_metrics();
    let route = use_route::<Route>();
    let view = use_viewport_observer(SECTIONS, ObserverOptions::navigation(), route);
    let navigator = use_navigator();

    // The bar chases the scroll fraction through a spring so it never jumps.
    let bar_ref = use_node_ref();
    let progress_target = use_mut_ref(|| 0.0_f64);
    *progress_target.borrow_mut() = scroll.progress;
    {
        let bar_ref = bar_ref.clone();
        let progress_target = progress_target.clone();
        use_effect_with_deps(move |_| {
            let mut spring = Spring::new(0.0, SpringConfig::progress());
            let mut last_frame = None;
            let mut painted = f64::NAN;
            let frames = FrameLoop::start(move |timestamp| {
                let dt = frame_delta(&mut last_frame, timestamp);
                spring.set_target(*progress_target.borrow());
                let value = spring.step(dt);
                if value != painted {
                    if let Some(bar) = bar_ref.cast::<HtmlElement>() {
                        let _ = bar.style().set_property("transform", &format!("scaleX({:.4})", value));
                    }
                    painted = value;
                }
                true
            });
            move || drop(frames)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = |id: &'static str| {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            scroll_to_section(id);
        })
    };

    let go_home = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
            scroll_to_top();
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <>
            <div class="progress-bar" ref={bar_ref} style="transform: scaleX(0)"></div>
            <nav class={classes!("top-nav", scroll.scrolled().then(|| "scrolled"))}>
                <div class="nav-content">
                    <a href="/" class="nav-logo" onclick={go_home}>
                        {"NH"}<span class="accent">{"."}</span>{"AI"}
                    </a>

                    <button class="burger-menu" aria-label="Toggle menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class={menu_class}>
                        {
                            nav_sections().into_iter().map(|section| {
                                let active = view.is_active(section.id);
                                html! {
                                    <a
                                        key={section.id}
                                        href={section.anchor()}
                                        class={classes!("nav-link", active.then(|| "active"))}
                                        onclick={go_to(section.id)}
                                    >
                                        {section.label}
                                        <span class="nav-underline"></span>
                                    </a>
                                }
                            }).collect::<Html>()
                        }
                        <a href="#contact" class="nav-cta magnetic-btn" onclick={go_to("contact")}>
                            {"Let's Talk"}
                        </a>
                    </div>
                </div>
            </nav>
            <style>
                {r#"
                    .progress-bar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        height: 2px;
                        transform-origin: 0% 50%;
                        background: linear-gradient(90deg, #3b82f6, #8b5cf6, #06b6d4);
                        z-index: 200;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        padding: 2rem 0;
                        transition: padding 0.5s ease;
                        animation: nav-drop 0.6s ease-out 2.8s both;
                    }
                    .top-nav.scrolled {
                        padding: 1rem 0;
                    }
                    .top-nav.scrolled .nav-content {
                        background: rgba(15, 23, 42, 0.75);
                        backdrop-filter: blur(20px);
                        border: 1px solid rgba(255, 255, 255, 0.05);
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    }
                    @keyframes nav-drop {
                        from { transform: translateY(-80px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0.75rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        border-radius: 9999px;
                        transition: all 0.5s ease;
                    }
                    .nav-logo {
                        font-family: 'JetBrains Mono', monospace;
                        font-size: 0.875rem;
                        font-weight: 600;
                        letter-spacing: 0.1em;
                        color: #fff;
                        text-decoration: none;
                    }
                    .nav-logo .accent {
                        color: #3b82f6;
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 0.25rem;
                    }
                    .nav-link {
                        position: relative;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        color: #94a3b8;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .nav-link:hover {
                        color: #fff;
                    }
                    .nav-link.active {
                        color: #60a5fa;
                    }
                    .nav-underline {
                        position: absolute;
                        bottom: 0.25rem;
                        left: 1rem;
                        right: 1rem;
                        height: 1px;
                        background: #3b82f6;
                        opacity: 0;
                        transition: opacity 0.3s ease;
                    }
                    .nav-link:hover .nav-underline {
                        opacity: 0.5;
                    }
                    .nav-link.active .nav-underline {
                        opacity: 1;
                    }
                    .nav-cta {
                        margin-left: 1rem;
                        padding: 0.5rem 1rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #fff;
                        text-decoration: none;
                        border-radius: 0.75rem;
                        background: linear-gradient(135deg, #3b82f6, #8b5cf6);
                        box-shadow: 0 0 20px rgba(59, 130, 246, 0.4);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        padding: 0.5rem;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-links {
                            display: none;
                        }
                        .nav-links.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 1rem;
                            right: 1rem;
                            padding: 1rem;
                            border-radius: 1.5rem;
                            background: rgba(2, 8, 23, 0.95);
                        }
                        .nav-cta {
                            margin-left: 0;
                        }
                    }
                "#}
            </style>
        </>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Cursor />
            <Preloader />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}
