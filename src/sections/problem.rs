use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::carousel::{Carousel, CarouselAction, Direction};
use crate::motion::{prefers_reduced_motion, viewport_width};
use crate::orbit::{
    position, radius_for_width, slot_angle, wrap_deg, Spin, ORBIT_STEP_DEG, ORBIT_TICK_MS,
};

pub const PROBLEM_AUTOPLAY_MS: u32 = 6000;

struct ProblemCard {
    glyph: &'static str,
    title: &'static str,
    body: &'static str,
    stat: &'static str,
}

const PROBLEMS: &[ProblemCard] = &[
    ProblemCard {
        glyph: "📏",
        title: "Sizes That Lie",
        body: "A medium in one shop is a large in the next. Size charts describe a fit model, not you.",
        stat: "3 in 4 shoppers own clothes that never fit right",
    },
    ProblemCard {
        glyph: "📦",
        title: "Returns on Repeat",
        body: "Order three sizes, keep one, queue at the post office with the rest. Fit roulette, by another name.",
        stat: "1 in 3 garments bought online goes back",
    },
    ProblemCard {
        glyph: "⏳",
        title: "Hours Lost to Guesswork",
        body: "Reviews, measuring tapes, brand-by-brand forums. Finding clothes that fit has become homework.",
        stat: "40 minutes of research per purchase",
    },
];

#[function_component(Problem)]
pub fn problem() -> Html {
    let reduced_motion = prefers_reduced_motion();
    let spin = use_state(|| {
        if prefers_reduced_motion() {
            Spin::frozen(ORBIT_STEP_DEG)
        } else {
            Spin::new(ORBIT_STEP_DEG)
        }
    });
    let viewport = use_state(viewport_width);
    let mobile = use_reducer(|| Carousel::new(PROBLEMS.len()));

    // One tick per render while spinning; freezing stops the chain and the
    // cleanup cancels whatever is still pending.
    {
        let spin = spin.clone();
        use_effect(move || {
            let timeout = if spin.is_frozen() {
                None
            } else {
                let spin = spin.clone();
                Some(Timeout::new(ORBIT_TICK_MS, move || {
                    let mut next = *spin;
                    next.tick();
                    spin.set(next);
                }))
            };
            move || drop(timeout)
        });
    }

    {
        let viewport = viewport.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let resize_callback = Closure::wrap(Box::new(move || {
                    viewport.set(viewport_width());
                }) as Box<dyn FnMut()>);
                window
                    .add_event_listener_with_callback(
                        "resize",
                        resize_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
                move || {
                    window
                        .remove_event_listener_with_callback(
                            "resize",
                            resize_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    {
        let dispatcher = mobile.dispatcher();
        use_interval(
            move || {
                dispatcher.dispatch(CarouselAction::Advance(Direction::Forward));
            },
            PROBLEM_AUTOPLAY_MS,
        );
    }

    let on_orbit_enter = {
        let spin = spin.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *spin;
            next.freeze();
            spin.set(next);
        })
    };
    let on_orbit_leave = {
        let spin = spin.clone();
        Callback::from(move |_: MouseEvent| {
            if reduced_motion {
                return;
            }
            let mut next = *spin;
            next.thaw();
            spin.set(next);
        })
    };

    let radius = radius_for_width(*viewport);
    let count = PROBLEMS.len();
    let stage_size = 2.0 * radius + 280.0;
    let active = mobile.index();

    html! {
        <section id="problem" class="problem-section">
            <div class="problem-heading">
                <h2>{"Shopping off the rack is a bet you keep losing"}</h2>
                <p>{"Ready-made sizing was built for averages. Nobody is average in every direction."}</p>
            </div>

            <div
                class="problem-orbit"
                style={format!("min-height: {:.0}px;", stage_size)}
                onmouseenter={on_orbit_enter}
                onmouseleave={on_orbit_leave}
            >
                <div
                    class="orbit-ring"
                    style={format!("width: {:.0}px; height: {:.0}px;", 2.0 * radius, 2.0 * radius)}
                ></div>
                <div class="orbit-center">
                    <span class="orbit-center-tag">{"the fit gap"}</span>
                    <h3>{"Your body vs. the size chart"}</h3>
                </div>
                {
                    PROBLEMS.iter().enumerate().map(|(i, card)| {
                        let theta = wrap_deg(slot_angle(i, count) + spin.angle());
                        let (x, y) = position(radius, theta);
                        html! {
                            <>
                                <div
                                    class="orbit-beam"
                                    style={format!(
                                        "width: {:.1}px; transform: rotate({:.2}deg);",
                                        radius, theta
                                    )}
                                >
                                    <span class="orbit-pulse"></span>
                                </div>
                                <div
                                    class="orbit-card"
                                    style={format!(
                                        "transform: translate(-50%, -50%) translate({:.1}px, {:.1}px);",
                                        x, y
                                    )}
                                >
                                    <span class="orbit-glyph">{card.glyph}</span>
                                    <h4>{card.title}</h4>
                                    <p>{card.body}</p>
                                    <span class="orbit-stat">{card.stat}</span>
                                </div>
                            </>
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="problem-mobile">
                <div class="problem-mobile-card" key={active}>
                    <span class="orbit-glyph">{PROBLEMS[active].glyph}</span>
                    <h4>{PROBLEMS[active].title}</h4>
                    <p>{PROBLEMS[active].body}</p>
                    <span class="orbit-stat">{PROBLEMS[active].stat}</span>
                </div>
                <div class="problem-dots">
                    {
                        (0..count).map(|i| {
                            let dispatcher = mobile.dispatcher();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                dispatcher.dispatch(CarouselAction::Select(i));
                            });
                            html! {
                                <button
                                    class={classes!("problem-dot", if i == active { "active" } else { "" })}
                                    aria-label={format!("Show problem {}", i + 1)}
                                    {onclick}
                                />
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                .problem-section {
                    padding: 6rem 2rem;
                    background: #FFFDFB;
                    overflow: hidden;
                }

                .problem-heading {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 2rem;
                }

                .problem-heading h2 {
                    font-size: 2.2rem;
                    color: #0A0080;
                    margin: 0 0 1rem;
                }

                .problem-heading p {
                    color: #4A4A68;
                    font-size: 1.1rem;
                    margin: 0;
                }

                .problem-orbit {
                    position: relative;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .orbit-ring {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    border: 1px dashed rgba(10, 0, 128, 0.15);
                    border-radius: 50%;
                }

                .orbit-center {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    text-align: center;
                    width: 220px;
                    z-index: 2;
                }

                .orbit-center-tag {
                    display: inline-block;
                    padding: 0.25rem 0.8rem;
                    border-radius: 999px;
                    background: rgba(235, 186, 185, 0.35);
                    color: #B0504E;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                    margin-bottom: 0.6rem;
                }

                .orbit-center h3 {
                    margin: 0;
                    color: #0A0080;
                    font-size: 1.25rem;
                }

                .orbit-beam {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    height: 1px;
                    background: linear-gradient(90deg, rgba(10, 0, 128, 0.25), rgba(10, 0, 128, 0));
                    transform-origin: left center;
                    z-index: 1;
                }

                .orbit-pulse {
                    position: absolute;
                    right: -5px;
                    top: 50%;
                    width: 10px;
                    height: 10px;
                    margin-top: -5px;
                    border-radius: 50%;
                    background: rgba(235, 186, 185, 0.9);
                    animation: orbit-pulse 2s ease-in-out infinite;
                }

                @keyframes orbit-pulse {
                    0%, 100% { transform: scale(1); opacity: 0.55; }
                    50% { transform: scale(1.6); opacity: 1; }
                }

                .orbit-card {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 240px;
                    background: #FFFFFF;
                    border: 1px solid rgba(10, 0, 128, 0.1);
                    border-radius: 18px;
                    padding: 1.2rem 1.4rem;
                    box-shadow: 0 12px 34px rgba(10, 0, 128, 0.1);
                    z-index: 2;
                }

                .orbit-glyph {
                    font-size: 1.6rem;
                }

                .orbit-card h4, .problem-mobile-card h4 {
                    margin: 0.5rem 0;
                    color: #0A0080;
                    font-size: 1.1rem;
                }

                .orbit-card p, .problem-mobile-card p {
                    margin: 0 0 0.8rem;
                    color: #4A4A68;
                    font-size: 0.9rem;
                    line-height: 1.5;
                }

                .orbit-stat {
                    display: block;
                    font-size: 0.78rem;
                    font-weight: 700;
                    color: #B0504E;
                }

                .problem-mobile {
                    display: none;
                }

                @media (max-width: 968px) {
                    .problem-orbit {
                        display: none;
                    }

                    .problem-mobile {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 1.2rem;
                    }

                    .problem-mobile-card {
                        width: 100%;
                        max-width: 380px;
                        background: #FFFFFF;
                        border: 1px solid rgba(10, 0, 128, 0.1);
                        border-radius: 18px;
                        padding: 1.4rem 1.6rem;
                        box-shadow: 0 12px 34px rgba(10, 0, 128, 0.1);
                        animation: problem-card-in 0.6s ease;
                    }

                    @keyframes problem-card-in {
                        from { opacity: 0; transform: translateY(24px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                }

                .problem-dots {
                    display: flex;
                    gap: 0.6rem;
                }

                .problem-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(10, 0, 128, 0.2);
                    cursor: pointer;
                    padding: 0;
                }

                .problem-dot.active {
                    background: #0A0080;
                }

                @media (prefers-reduced-motion: reduce) {
                    .problem-mobile-card, .orbit-pulse {
                        animation: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
