use yew::prelude::*;
use yew_hooks::use_is_mounted;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::config::CONTACT_EMAIL;
use crate::contact::{deliver, schedule_reset, ContactFlow, FormField, FormSubmitRelay, SubmissionState};
use crate::content::{CONTACT_INFO, SOCIALS};
use crate::observer::use_revealed;

#[function_component(Contact)]
pub fn contact() -> Html {
    let revealed = use_revealed("contact");
    let flow = use_mut_ref(ContactFlow::default);
    let reset_timer = use_mut_ref(|| None::<Timeout>);
    let redraw = use_force_update();
    let is_mounted = use_is_mounted();

    {
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(move |_| move || drop(reset_timer.borrow_mut().take()), ());
    }

    let edit = |field: FormField| {
        let flow = flow.clone();
        let redraw = redraw.clone();
        move |value: String| {
            flow.borrow_mut().edit(field, value);
            redraw.force_update();
        }
    };

    let on_name = {
        let edit = edit(FormField::Name);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_email = {
        let edit = edit(FormField::Email);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            edit(input.value());
        })
    };
    let on_message = {
        let edit = edit(FormField::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            edit(input.value());
        })
    };

    let onsubmit = {
        let flow = flow.clone();
        let reset_timer = reset_timer.clone();
        let redraw = redraw.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let payload = flow.borrow_mut().submit();
            redraw.force_update();
            let Some(payload) = payload else {
                return;
            };

            let flow = flow.clone();
            let reset_timer = reset_timer.clone();
            let redraw = redraw.clone();
            let is_mounted = is_mounted.clone();
            spawn_local(async move {
                let relay = FormSubmitRelay::default();
                let outcome = deliver(&flow, &relay, payload, move || is_mounted()).await;
                if outcome.is_some() {
                    redraw.force_update();
                    *reset_timer.borrow_mut() = schedule_reset(flow, move || redraw.force_update());
                }
            });
        })
    };

    let current = flow.borrow();
    let state = current.state();
    let sending = state == SubmissionState::Sending;
    let field_error = |field: FormField| {
        current.error(field).map(|message| html! {
            <span class="field-error">{ message }</span>
        })
    };

    let panel = match state {
        SubmissionState::Sent => html! {
            <div class="form-panel success">
                <div class="panel-icon">{"✓"}</div>
                <h3>{"Message sent!"}</h3>
                <p>{"Thanks for reaching out. I'll get back to you within 24 hours."}</p>
            </div>
        },
        SubmissionState::Error => html! {
            <div class="form-panel failure">
                <div class="panel-icon">{"!"}</div>
                <h3>{"Something went wrong"}</h3>
                <p>
                    {"The message could not be delivered. You can email me directly at "}
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{ CONTACT_EMAIL }</a>
                    {"."}
                </p>
            </div>
        },
        SubmissionState::Idle | SubmissionState::Sending => html! {
            <form class="contact-form" onsubmit={onsubmit} novalidate=true>
                <div class="form-row">
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        name={FormField::Name.key()}
                        type="text"
                        placeholder="Your name"
                        value={current.form().name.clone()}
                        oninput={on_name}
                        disabled={sending}
                        class={classes!(current.error(FormField::Name).is_some().then(|| "invalid"))}
                    />
                    { field_error(FormField::Name) }
                </div>
                <div class="form-row">
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        name={FormField::Email.key()}
                        type="email"
                        placeholder="you@company.com"
                        value={current.form().email.clone()}
                        oninput={on_email}
                        disabled={sending}
                        class={classes!(current.error(FormField::Email).is_some().then(|| "invalid"))}
                    />
                    { field_error(FormField::Email) }
                </div>
                <div class="form-row">
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        name={FormField::Message.key()}
                        rows="5"
                        placeholder="Tell me about the role or project..."
                        value={current.form().message.clone()}
                        oninput={on_message}
                        disabled={sending}
                        class={classes!(current.error(FormField::Message).is_some().then(|| "invalid"))}
                    />
                    { field_error(FormField::Message) }
                </div>
                <button type="submit" class="btn btn-primary magnetic-btn submit-btn" disabled={sending}>
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>
            </form>
        },
    };

    html! {
        <section id="contact" class={classes!("section", "reveal", revealed.then(|| "revealed"))}>
            <div class="section-inner">
                <span class="section-eyebrow rv">{"06 / Contact"}</span>
                <h2 class="section-title rv" style="--d: 100ms">
                    {"Let's build "}<span class="gradient-text">{"something"}</span>
                </h2>
                <div class="contact-grid">
                    <div class="contact-info">
                        {
                            CONTACT_INFO.iter().enumerate().map(|(i, info)| html! {
                                <div
                                    key={info.label}
                                    class="info-card glass rv"
                                    style={format!("--d: {}ms; --accent: {}", 200 + 100 * i, info.color)}
                                >
                                    <span class="info-icon">{ info.icon }</span>
                                    <div>
                                        <span class="info-label">{ info.label }</span>
                                        <p class="info-value">{ info.value }</p>
                                        <span class="info-sub">{ info.sub }</span>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                        <div class="contact-socials rv" style="--d: 500ms">
                            {
                                SOCIALS.iter().map(|social| html! {
                                    <a
                                        key={social.label}
                                        href={social.href}
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="social-link glass"
                                        style={format!("--accent: {}", social.color)}
                                    >
                                        { social.label }
                                    </a>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                    <div class="contact-form-wrap glass rv" style="--d: 300ms">
                        { panel }
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 2fr 3fr;
                        gap: 2.5rem;
                    }
                    .contact-info {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .info-card {
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                        padding: 1.25rem 1.5rem;
                        border-radius: 1.25rem;
                    }
                    .info-icon {
                        font-size: 1.4rem;
                    }
                    .info-label {
                        font-size: 0.7rem;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        color: var(--accent);
                    }
                    .info-value {
                        margin: 0.2rem 0;
                        font-weight: 600;
                        word-break: break-word;
                    }
                    .info-sub {
                        font-size: 0.75rem;
                        color: #64748b;
                    }
                    .contact-socials {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .social-link {
                        padding: 0.6rem 1.2rem;
                        border-radius: 9999px;
                        font-size: 0.85rem;
                        color: #cbd5e1;
                        text-decoration: none;
                    }
                    .social-link:hover {
                        color: var(--accent);
                        border-color: var(--accent);
                    }
                    .contact-form-wrap {
                        padding: 2.5rem;
                        border-radius: 1.5rem;
                    }
                    .contact-form .form-row {
                        display: flex;
                        flex-direction: column;
                        gap: 0.4rem;
                        margin-bottom: 1.25rem;
                    }
                    .contact-form label {
                        font-size: 0.75rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #94a3b8;
                    }
                    .contact-form input,
                    .contact-form textarea {
                        padding: 0.85rem 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        background: rgba(255, 255, 255, 0.03);
                        color: #fff;
                        font: inherit;
                        resize: vertical;
                        transition: border-color 0.3s ease;
                    }
                    .contact-form input:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #3b82f6;
                    }
                    .contact-form .invalid {
                        border-color: #ef4444;
                    }
                    .contact-form :disabled {
                        opacity: 0.6;
                    }
                    .field-error {
                        font-size: 0.75rem;
                        color: #f87171;
                    }
                    .submit-btn {
                        width: 100%;
                    }
                    .form-panel {
                        text-align: center;
                        padding: 2rem 1rem;
                    }
                    .panel-icon {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        font-size: 1.75rem;
                        font-weight: 700;
                    }
                    .form-panel.success .panel-icon {
                        background: rgba(34, 197, 94, 0.15);
                        color: #22c55e;
                    }
                    .form-panel.failure .panel-icon {
                        background: rgba(239, 68, 68, 0.15);
                        color: #ef4444;
                    }
                    .form-panel h3 {
                        font-size: 1.3rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }
                    .form-panel p {
                        color: #94a3b8;
                        line-height: 1.7;
                    }
                    .form-panel a {
                        color: #60a5fa;
                    }
                    @media (max-width: 900px) {
                        .contact-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
