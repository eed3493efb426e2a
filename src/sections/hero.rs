use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::carousel::{drag_direction, Carousel, CarouselAction, Direction, DRAG_THRESHOLD_PX};
use crate::transition::{Phase, Transition};

pub const HERO_AUTOPLAY_MS: u32 = 4000;
pub const HERO_SWAP_MS: u32 = 450;

#[derive(Clone, Copy, PartialEq, Eq)]
enum NodeKind {
    Cta,
    Action,
    Info,
    Proof,
}

impl NodeKind {
    fn tag(&self) -> &'static str {
        match self {
            NodeKind::Cta => "start here",
            NodeKind::Action => "what you do",
            NodeKind::Info => "why it works",
            NodeKind::Proof => "who makes it",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            NodeKind::Cta => "node-cta",
            NodeKind::Action => "node-action",
            NodeKind::Info => "node-info",
            NodeKind::Proof => "node-proof",
        }
    }
}

struct HeroNode {
    title: &'static str,
    kind: NodeKind,
    hint: &'static str,
}

const NODES: &[HeroNode] = &[
    HeroNode {
        title: "Build Your Size Profile",
        kind: NodeKind::Cta,
        hint: "Five quick measurements, guided step by step. Ten minutes, once.",
    },
    HeroNode {
        title: "Send Us a Design",
        kind: NodeKind::Action,
        hint: "A sketch, a photo, a link to something you wish fit you. That's enough.",
    },
    HeroNode {
        title: "Cut for Your Body",
        kind: NodeKind::Info,
        hint: "Patterns are drafted from your numbers, not picked off a size chart.",
    },
    HeroNode {
        title: "Vetted Ateliers",
        kind: NodeKind::Proof,
        hint: "Small workshops we visit, rate and keep working with. No mystery factories.",
    },
    HeroNode {
        title: "Made to Order",
        kind: NodeKind::Info,
        hint: "Nothing is sewn until you ask for it. No warehouse, no landfill run.",
    },
];

// Index changes ride the swap cycle: a request exits the old card, the
// exit timer commits the step and enters the new one. Requests landing
// mid-swap are dropped rather than queued.
#[derive(Clone, Copy, PartialEq)]
struct HeroState {
    carousel: Carousel,
    fx: Transition,
    pending: Option<CarouselAction>,
}

enum HeroAction {
    Mounted,
    Request(CarouselAction),
    ExitDone,
    EnterDone,
}

impl HeroState {
    fn new() -> Self {
        Self {
            carousel: Carousel::new(NODES.len()),
            fx: Transition::new(),
            pending: None,
        }
    }
}

impl Reducible for HeroState {
    type Action = HeroAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            HeroAction::Mounted => next.fx.begin_enter(),
            HeroAction::Request(request) => {
                if next.fx.phase() == Phase::Visible && next.pending.is_none() {
                    next.pending = Some(request);
                    next.fx.begin_exit();
                }
            }
            HeroAction::ExitDone => {
                if let Some(request) = next.pending.take() {
                    next.carousel.apply(request);
                }
                next.fx.begin_enter();
            }
            HeroAction::EnterDone => next.fx.settle(),
        }
        Rc::new(next)
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let state = use_reducer(HeroState::new);
    let hovered = use_state(|| false);
    let drag_origin = use_state(|| None::<i32>);

    // Swap cycle driver, keyed on the phase so each step schedules the next.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |phase: &Phase| {
                let timeout = match *phase {
                    Phase::Idle => {
                        dispatcher.dispatch(HeroAction::Mounted);
                        None
                    }
                    Phase::Entering => {
                        let dispatcher = dispatcher.clone();
                        Some(Timeout::new(HERO_SWAP_MS, move || {
                            dispatcher.dispatch(HeroAction::EnterDone);
                        }))
                    }
                    Phase::Exiting => {
                        let dispatcher = dispatcher.clone();
                        Some(Timeout::new(HERO_SWAP_MS, move || {
                            dispatcher.dispatch(HeroAction::ExitDone);
                        }))
                    }
                    Phase::Visible => None,
                };
                move || drop(timeout)
            },
            state.fx.phase(),
        );
    }

    // Autoplay runs exactly while the stage is not hovered.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |suspended: &bool| {
                let interval = if *suspended {
                    None
                } else {
                    Some(Interval::new(HERO_AUTOPLAY_MS, move || {
                        dispatcher.dispatch(HeroAction::Request(CarouselAction::Advance(
                            Direction::Forward,
                        )));
                    }))
                };
                move || drop(interval)
            },
            *hovered,
        );
    }

    let on_stage_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let on_stage_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    let onpointerdown = {
        let drag_origin = drag_origin.clone();
        Callback::from(move |e: PointerEvent| {
            drag_origin.set(Some(e.client_x()));
        })
    };
    let onpointerup = {
        let drag_origin = drag_origin.clone();
        let dispatcher = state.dispatcher();
        Callback::from(move |e: PointerEvent| {
            if let Some(origin) = *drag_origin {
                let offset = f64::from(e.client_x() - origin);
                if let Some(direction) = drag_direction(offset, DRAG_THRESHOLD_PX) {
                    dispatcher.dispatch(HeroAction::Request(CarouselAction::Advance(direction)));
                }
                drag_origin.set(None);
            }
        })
    };
    let onpointercancel = {
        let drag_origin = drag_origin.clone();
        Callback::from(move |_: PointerEvent| drag_origin.set(None))
    };

    let active = state.carousel.index();
    let node = &NODES[active];

    html! {
        <section id="hero" class="hero-section">
            <div class="hero-inner">
                <div class="hero-copy">
                    <h1>{"Clothes that fit you."}<br />{"Not the other way around."}</h1>
                    <p class="hero-sub">
                        {"fitlane turns five measurements into garments cut for your body and sewn to order by ateliers we trust."}
                    </p>
                    <a href="#subscribe" class="hero-cta">{"Join the first run"}</a>
                </div>

                <div class="hero-stage" onmouseenter={on_stage_enter} onmouseleave={on_stage_leave}>
                    <div class="hero-orbit">
                        <div class="hero-orb">
                            <div class="orb-ring ring-outer"></div>
                            <div class="orb-ring ring-inner"></div>
                            <span class="orb-core">{"fl"}</span>
                        </div>
                        {
                            NODES.iter().enumerate().map(|(i, chip)| {
                                let dispatcher = state.dispatcher();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    dispatcher.dispatch(HeroAction::Request(CarouselAction::Select(i)));
                                });
                                html! {
                                    <button
                                        class={classes!(
                                            "hero-node",
                                            format!("node-pos-{}", i),
                                            chip.kind.class(),
                                            if i == active { "active" } else { "" }
                                        )}
                                        {onclick}
                                    >
                                        {chip.title}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    <div
                        class="hero-showcase"
                        {onpointerdown}
                        {onpointerup}
                        {onpointercancel}
                    >
                        <div class={classes!("showcase-card", node.kind.class(), state.fx.css_class())}>
                            <span class="showcase-tag">{node.kind.tag()}</span>
                            <h3>{node.title}</h3>
                            <p>{node.hint}</p>
                            {
                                if node.kind == NodeKind::Cta {
                                    html! { <a href="#subscribe" class="showcase-cta">{"Start your profile"}</a> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>
                    </div>

                    <div class="hero-dots">
                        {
                            (0..state.carousel.len()).map(|i| {
                                let dispatcher = state.dispatcher();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    dispatcher.dispatch(HeroAction::Request(CarouselAction::Select(i)));
                                });
                                html! {
                                    <button
                                        class={classes!("hero-dot", if i == active { "active" } else { "" })}
                                        aria-label={format!("Show card {}", i + 1)}
                                        {onclick}
                                    />
                                }
                            }).collect::<Html>()
                        }
                    </div>

                    // Orbit chips collapse into this list on narrow screens.
                    <div class="hero-node-list">
                        {
                            NODES.iter().enumerate().map(|(i, chip)| {
                                let dispatcher = state.dispatcher();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    dispatcher.dispatch(HeroAction::Request(CarouselAction::Select(i)));
                                });
                                html! {
                                    <button
                                        class={classes!(
                                            "hero-node-row",
                                            if i == active { "active" } else { "" }
                                        )}
                                        {onclick}
                                    >
                                        <span class="node-row-tag">{chip.kind.tag()}</span>
                                        <span class="node-row-title">{chip.title}</span>
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero-section {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    background: linear-gradient(180deg, #FFFDFB 0%, #FAF6F2 100%);
                    padding: 7rem 2rem 4rem;
                }

                .hero-inner {
                    max-width: 1180px;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-copy h1 {
                    font-size: 3.2rem;
                    line-height: 1.1;
                    color: #0A0080;
                    margin: 0 0 1.5rem;
                }

                .hero-sub {
                    font-size: 1.15rem;
                    line-height: 1.6;
                    color: #4A4A68;
                    max-width: 28rem;
                    margin: 0 0 2rem;
                }

                .hero-cta {
                    display: inline-block;
                    padding: 1rem 2.2rem;
                    border-radius: 999px;
                    background: #0A0080;
                    color: #FFFDFB;
                    text-decoration: none;
                    font-weight: 600;
                    transition: transform 0.2s ease, box-shadow 0.2s ease;
                }

                .hero-cta:hover {
                    transform: translateY(-2px);
                    box-shadow: 0 10px 30px rgba(10, 0, 128, 0.25);
                }

                .hero-stage {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }

                .hero-orbit {
                    position: relative;
                    width: 360px;
                    height: 300px;
                }

                .hero-orb {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 120px;
                    height: 120px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .orb-core {
                    width: 72px;
                    height: 72px;
                    border-radius: 50%;
                    background: #0A0080;
                    color: #EBBAB9;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.6rem;
                    font-weight: 700;
                    box-shadow: 0 8px 30px rgba(10, 0, 128, 0.3);
                }

                .orb-ring {
                    position: absolute;
                    border-radius: 50%;
                    border: 1px dashed rgba(10, 0, 128, 0.3);
                }

                .ring-outer {
                    inset: -14px;
                    animation: orb-spin 40s linear infinite;
                }

                .ring-inner {
                    inset: 6px;
                    border-color: rgba(235, 186, 185, 0.8);
                    animation: orb-spin 25s linear infinite reverse;
                }

                @keyframes orb-spin {
                    from { transform: rotate(0deg); }
                    to { transform: rotate(360deg); }
                }

                .hero-node {
                    position: absolute;
                    padding: 0.45rem 0.9rem;
                    border-radius: 999px;
                    border: 1px solid rgba(10, 0, 128, 0.15);
                    background: #FFFFFF;
                    color: #0A0080;
                    font-size: 0.8rem;
                    font-weight: 600;
                    cursor: pointer;
                    white-space: nowrap;
                    box-shadow: 0 4px 14px rgba(10, 0, 128, 0.08);
                    transition: transform 0.2s ease, border-color 0.2s ease;
                }

                .hero-node:hover {
                    transform: scale(1.05);
                }

                .hero-node.active {
                    border-color: #0A0080;
                    background: #0A0080;
                    color: #FFFDFB;
                }

                .node-pos-0 { top: 0; left: 50%; transform: translateX(-50%); }
                .node-pos-1 { top: 28%; right: -4%; }
                .node-pos-2 { bottom: 6%; right: 4%; }
                .node-pos-3 { bottom: 6%; left: 4%; }
                .node-pos-4 { top: 28%; left: -4%; }

                .hero-showcase {
                    width: 100%;
                    max-width: 380px;
                    touch-action: pan-y;
                    cursor: grab;
                }

                .hero-showcase:active {
                    cursor: grabbing;
                }

                .showcase-card {
                    background: #FFFFFF;
                    border: 1px solid rgba(10, 0, 128, 0.1);
                    border-radius: 20px;
                    padding: 1.6rem 1.8rem;
                    box-shadow: 0 14px 40px rgba(10, 0, 128, 0.1);
                    min-height: 11rem;
                }

                .showcase-card h3 {
                    margin: 0.6rem 0 0.5rem;
                    color: #0A0080;
                    font-size: 1.3rem;
                }

                .showcase-card p {
                    margin: 0;
                    color: #4A4A68;
                    line-height: 1.55;
                }

                .showcase-tag {
                    display: inline-block;
                    padding: 0.2rem 0.7rem;
                    border-radius: 999px;
                    font-size: 0.7rem;
                    font-weight: 700;
                    letter-spacing: 0.08em;
                    text-transform: uppercase;
                }

                .node-cta .showcase-tag, .showcase-card.node-cta .showcase-tag {
                    background: rgba(10, 0, 128, 0.1);
                    color: #0A0080;
                }

                .showcase-card.node-action .showcase-tag {
                    background: rgba(235, 186, 185, 0.35);
                    color: #B0504E;
                }

                .showcase-card.node-info .showcase-tag {
                    background: rgba(74, 74, 104, 0.12);
                    color: #4A4A68;
                }

                .showcase-card.node-proof .showcase-tag {
                    background: rgba(46, 125, 50, 0.12);
                    color: #2E7D32;
                }

                .showcase-cta {
                    display: inline-block;
                    margin-top: 1rem;
                    color: #0A0080;
                    font-weight: 700;
                    text-decoration: none;
                    border-bottom: 2px solid #EBBAB9;
                }

                .card-idle {
                    opacity: 0;
                }

                .card-entering {
                    animation: hero-card-in 0.45s ease forwards;
                }

                .card-visible {
                    opacity: 1;
                }

                .card-exiting {
                    animation: hero-card-out 0.45s ease forwards;
                }

                @keyframes hero-card-in {
                    from { opacity: 0; transform: translateX(60px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes hero-card-out {
                    from { opacity: 1; transform: translateX(0); }
                    to { opacity: 0; transform: translateX(-60px); }
                }

                .hero-dots {
                    display: flex;
                    gap: 0.6rem;
                }

                .hero-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: rgba(10, 0, 128, 0.2);
                    cursor: pointer;
                    padding: 0;
                    transition: background 0.2s ease, transform 0.2s ease;
                }

                .hero-dot.active {
                    background: #0A0080;
                    transform: scale(1.3);
                }

                .hero-node-list {
                    display: none;
                }

                @media (max-width: 968px) {
                    .hero-inner {
                        grid-template-columns: 1fr;
                        text-align: center;
                    }

                    .hero-copy h1 {
                        font-size: 2.3rem;
                    }

                    .hero-sub {
                        margin: 0 auto 2rem;
                    }

                    .hero-orbit {
                        display: none;
                    }

                    .hero-node-list {
                        display: flex;
                        flex-direction: column;
                        gap: 0.6rem;
                        margin-top: 1.4rem;
                        width: 100%;
                        max-width: 380px;
                    }

                    .hero-node-row {
                        display: flex;
                        align-items: center;
                        gap: 0.8rem;
                        padding: 0.7rem 1rem;
                        border: 1px solid rgba(10, 0, 128, 0.12);
                        border-radius: 12px;
                        background: #FFFFFF;
                        cursor: pointer;
                        font: inherit;
                        text-align: left;
                    }

                    .hero-node-row.active {
                        border-color: #0A0080;
                        box-shadow: 0 6px 18px rgba(10, 0, 128, 0.12);
                    }

                    .node-row-tag {
                        font-size: 0.68rem;
                        font-weight: 700;
                        letter-spacing: 0.08em;
                        text-transform: uppercase;
                        color: #B0504E;
                        white-space: nowrap;
                    }

                    .node-row-title {
                        color: #0A0080;
                        font-weight: 600;
                        font-size: 0.92rem;
                    }
                }

                @media (prefers-reduced-motion: reduce) {
                    .ring-outer, .ring-inner {
                        animation: none;
                    }

                    .card-entering, .card-exiting {
                        animation: none;
                        opacity: 1;
                        transform: none;
                    }

                    .hero-cta, .hero-node, .hero-dot {
                        transition: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: HeroState, action: HeroAction) -> HeroState {
        *Rc::new(state).reduce(action)
    }

    #[test]
    fn mount_enters_then_settles() {
        let state = HeroState::new();
        assert_eq!(state.fx.phase(), Phase::Idle);
        let state = reduce(state, HeroAction::Mounted);
        assert_eq!(state.fx.phase(), Phase::Entering);
        let state = reduce(state, HeroAction::EnterDone);
        assert_eq!(state.fx.phase(), Phase::Visible);
        assert_eq!(state.carousel.index(), 0);
    }

    #[test]
    fn request_commits_only_after_exit_completes() {
        let state = reduce(HeroState::new(), HeroAction::Mounted);
        let state = reduce(state, HeroAction::EnterDone);

        let state = reduce(
            state,
            HeroAction::Request(CarouselAction::Advance(Direction::Forward)),
        );
        assert_eq!(state.fx.phase(), Phase::Exiting);
        assert_eq!(state.carousel.index(), 0);

        let state = reduce(state, HeroAction::ExitDone);
        assert_eq!(state.fx.phase(), Phase::Entering);
        assert_eq!(state.carousel.index(), 1);

        let state = reduce(state, HeroAction::EnterDone);
        assert_eq!(state.fx.phase(), Phase::Visible);
    }

    #[test]
    fn requests_landing_mid_swap_are_dropped() {
        let state = reduce(HeroState::new(), HeroAction::Mounted);
        let state = reduce(
            state,
            HeroAction::Request(CarouselAction::Advance(Direction::Forward)),
        );
        assert_eq!(state.fx.phase(), Phase::Entering);
        assert!(state.pending.is_none());

        let state = reduce(state, HeroAction::EnterDone);
        let state = reduce(state, HeroAction::Request(CarouselAction::Select(3)));
        let state = reduce(state, HeroAction::Request(CarouselAction::Select(4)));
        assert_eq!(state.pending, Some(CarouselAction::Select(3)));

        let state = reduce(state, HeroAction::ExitDone);
        assert_eq!(state.carousel.index(), 3);
    }

    #[test]
    fn dot_selection_rides_the_same_cycle() {
        let state = reduce(HeroState::new(), HeroAction::Mounted);
        let state = reduce(state, HeroAction::EnterDone);
        let state = reduce(state, HeroAction::Request(CarouselAction::Select(2)));
        let state = reduce(state, HeroAction::ExitDone);
        assert_eq!(state.carousel.index(), 2);
    }
}
