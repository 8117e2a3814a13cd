use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <span class="mono not-found-code gradient-text">{"404"}</span>
            <h1>{"This page drifted out of the network."}</h1>
            <p>{"The address you followed doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary magnetic-btn">
                {"Back home"}
            </Link<Route>>
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                        text-align: center;
                        padding: 2rem;
                    }
                    .not-found-code {
                        font-size: 6rem;
                        font-weight: 800;
                    }
                    .not-found p {
                        color: #94a3b8;
                        margin-bottom: 1rem;
                    }
                "#}
            </style>
        </section>
    }
}
