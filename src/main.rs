use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod carousel;
mod config;
mod motion;
mod orbit;
mod transition;
mod sections {
    pub mod faq;
    pub mod footer;
    pub mod founders;
    pub mod hero;
    pub mod problem;
    pub mod solution;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

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
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"404"}</h1>
                    <p>{"This page doesn't exist. Clothes that fit you do."}</p>
                    <Link<Route> to={Route::Home} classes="not-found-link">
                        {"Back to fitlane"}
                    </Link<Route>>
                    <style>
                        {r#"
                        .not-found {
                            min-height: 100vh;
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            justify-content: center;
                            gap: 0.6rem;
                            background: #FFFDFB;
                            color: #0A0080;
                        }

                        .not-found h1 {
                            font-size: 4rem;
                            margin: 0;
                        }

                        .not-found-link {
                            color: #0A0080;
                            font-weight: 700;
                            border-bottom: 2px solid #EBBAB9;
                            text-decoration: none;
                        }
                        "#}
                    </style>
                </div>
            }
        }
    }
}

const NAV_LINKS: &[(&str, &str)] = &[
    ("The problem", "#problem"),
    ("How it works", "#solution"),
    ("Founders", "#founders"),
    ("FAQ", "#faq"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 40);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // No prevent_default here, the anchor still has to scroll.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"fitlane"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    {
                        NAV_LINKS.iter().map(|(label, anchor)| {
                            html! {
                                <a href={*anchor} class="nav-link" onclick={close_menu.clone()}>
                                    {*label}
                                </a>
                            }
                        }).collect::<Html>()
                    }
                    <a href="#subscribe" class="nav-cta" onclick={close_menu.clone()}>
                        {"Find your fit"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    padding: 1rem 2rem;
                    background: transparent;
                    transition: background 0.25s ease, box-shadow 0.25s ease;
                }

                .top-nav.scrolled {
                    background: rgba(255, 253, 251, 0.92);
                    backdrop-filter: blur(8px);
                    box-shadow: 0 4px 20px rgba(10, 0, 128, 0.08);
                }

                .nav-content {
                    max-width: 1180px;
                    margin: 0 auto;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .nav-logo {
                    font-size: 1.3rem;
                    font-weight: 800;
                    color: #0A0080;
                    text-decoration: none;
                }

                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.6rem;
                }

                .nav-link {
                    color: #0A0080;
                    text-decoration: none;
                    font-size: 0.95rem;
                    font-weight: 500;
                }

                .nav-link:hover {
                    color: #B0504E;
                }

                .nav-cta {
                    padding: 0.55rem 1.3rem;
                    border-radius: 999px;
                    background: #0A0080;
                    color: #FFFDFB;
                    text-decoration: none;
                    font-size: 0.9rem;
                    font-weight: 600;
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 6px;
                }

                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #0A0080;
                    border-radius: 2px;
                }

                @media (max-width: 968px) {
                    .burger-menu {
                        display: flex;
                    }

                    .nav-right {
                        display: none;
                    }

                    .nav-right.mobile-menu-open {
                        display: flex;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        align-items: stretch;
                        gap: 0;
                        background: rgba(255, 253, 251, 0.98);
                        box-shadow: 0 12px 30px rgba(10, 0, 128, 0.12);
                    }

                    .nav-right.mobile-menu-open .nav-link,
                    .nav-right.mobile-menu-open .nav-cta {
                        padding: 1rem 2rem;
                        border-radius: 0;
                    }

                    .nav-right.mobile-menu-open .nav-cta {
                        background: #0A0080;
                    }
                }

                @media (prefers-reduced-motion: reduce) {
                    .top-nav {
                        transition: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
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

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
