use yew::prelude::*;
use chrono::{Datelike, Local};
use web_sys::MouseEvent;

use crate::content::{OWNER_NAME, SOCIALS};
use crate::scroll::scroll_to_top;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    let back_to_top = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_top();
    });

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <span class="nav-logo">{"NH"}<span class="accent">{"."}</span>{"AI"}</span>
                    <p>{ format!("© {} {}. Built with Rust and WebAssembly.", year, OWNER_NAME) }</p>
                </div>
                <div class="footer-socials">
                    {
                        SOCIALS.iter().map(|social| html! {
                            <a
                                key={social.label}
                                href={social.href}
                                target="_blank"
                                rel="noopener noreferrer"
                                style={format!("--accent: {}", social.color)}
                            >
                                { social.label }
                            </a>
                        }).collect::<Html>()
                    }
                </div>
                <button class="back-to-top magnetic-btn" aria-label="Back to top" onclick={back_to_top}>
                    {"↑"}
                </button>
            </div>
            <style>
                {r#"
                    .site-footer {
                        position: relative;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        padding: 3rem 2rem;
                    }
                    .footer-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                        flex-wrap: wrap;
                    }
                    .footer-brand p {
                        margin-top: 0.5rem;
                        font-size: 0.8rem;
                        color: #64748b;
                    }
                    .footer-socials {
                        display: flex;
                        gap: 1.5rem;
                    }
                    .footer-socials a {
                        color: #94a3b8;
                        font-size: 0.875rem;
                        text-decoration: none;
                        transition: color 0.3s ease;
                    }
                    .footer-socials a:hover {
                        color: var(--accent);
                    }
                    .back-to-top {
                        width: 2.75rem;
                        height: 2.75rem;
                        border-radius: 9999px;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(255, 255, 255, 0.03);
                        color: #fff;
                        font-size: 1.1rem;
                    }
                    .back-to-top:hover {
                        border-color: #3b82f6;
                        box-shadow: 0 0 20px rgba(59, 130, 246, 0.4);
                    }
                "#}
            </style>
        </footer>
    }
}
