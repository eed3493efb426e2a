use yew::prelude::*;

use crate::sections::faq::Faq;
use crate::sections::footer::Footer;
use crate::sections::founders::Founders;
use crate::sections::hero::Hero;
use crate::sections::problem::Problem;
use crate::sections::solution::Solution;

#[function_component(Home)]
pub fn home() -> Html {
    // Landing always opens at the top, even after in-page anchor history.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing">
            <Hero />
            <Problem />
            <Solution />
            <Founders />
            <Faq />
            <Footer />

            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
                    background: #FFFDFB;
                    color: #1A1A2E;
                }

                html {
                    scroll-behavior: smooth;
                }

                #hero, #problem, #solution, #founders, #faq, #subscribe {
                    scroll-margin-top: 70px;
                }

                @media (prefers-reduced-motion: reduce) {
                    html {
                        scroll-behavior: auto;
                    }
                }
                "#}
            </style>
        </div>
    }
}
