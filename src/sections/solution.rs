use yew::prelude::*;

struct Step {
    title: &'static str,
    body: &'static str,
}

const STEPS: &[Step] = &[
    Step {
        title: "Measure once",
        body: "Five numbers with our guided flow. A friend, a tape and ten minutes is all it takes.",
    },
    Step {
        title: "Pick or propose",
        body: "Choose from our drops, or send any design you wish existed in your size.",
    },
    Step {
        title: "We draft your pattern",
        body: "Your numbers become a one-off pattern, checked by a human patternmaker before anything is cut.",
    },
    Step {
        title: "An atelier sews it",
        body: "A vetted workshop cuts and sews your piece. We inspect it, then it ships to your door.",
    },
];

#[function_component(Solution)]
pub fn solution() -> Html {
    html! {
        <section id="solution" class="solution-section">
            <div class="solution-heading">
                <h2>{"From your numbers to your wardrobe"}</h2>
                <p>{"Four steps, no guessing anywhere in between."}</p>
            </div>

            <div class="solution-flow">
                <svg class="flow-line" viewBox="0 0 1000 60" preserveAspectRatio="none" aria-hidden="true">
                    <path
                        d="M 0 30 C 180 0, 320 60, 500 30 C 680 0, 820 60, 1000 30"
                        fill="none"
                        stroke="#EBBAB9"
                        stroke-width="2"
                        stroke-dasharray="10 8"
                    />
                </svg>
                <div class="solution-steps">
                    {
                        STEPS.iter().enumerate().map(|(i, step)| {
                            html! {
                                <div class="solution-step">
                                    <span class="step-number">{format!("{}", i + 1)}</span>
                                    <h3>{step.title}</h3>
                                    <p>{step.body}</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <div class="solution-cta-row">
                <a href="#subscribe" class="solution-cta">{"Get measured first"}</a>
                <span class="solution-cta-hint">{"Early profiles get first-run pricing."}</span>
            </div>

            <style>
                {r#"
                .solution-section {
                    padding: 6rem 2rem;
                    background: linear-gradient(180deg, #FAF6F2 0%, #FFFDFB 100%);
                }

                .solution-heading {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 3rem;
                }

                .solution-heading h2 {
                    font-size: 2.2rem;
                    color: #0A0080;
                    margin: 0 0 1rem;
                }

                .solution-heading p {
                    color: #4A4A68;
                    font-size: 1.1rem;
                    margin: 0;
                }

                .solution-flow {
                    position: relative;
                    max-width: 1100px;
                    margin: 0 auto;
                }

                .flow-line {
                    position: absolute;
                    top: 2.4rem;
                    left: 0;
                    width: 100%;
                    height: 60px;
                    z-index: 0;
                }

                .flow-line path {
                    animation: flow-dash 3s linear infinite;
                }

                @keyframes flow-dash {
                    from { stroke-dashoffset: 36; }
                    to { stroke-dashoffset: 0; }
                }

                .solution-steps {
                    position: relative;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.4rem;
                    z-index: 1;
                }

                .solution-step {
                    background: #FFFFFF;
                    border: 1px solid rgba(10, 0, 128, 0.1);
                    border-radius: 18px;
                    padding: 1.4rem 1.5rem;
                    box-shadow: 0 10px 30px rgba(10, 0, 128, 0.08);
                }

                .step-number {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.2rem;
                    height: 2.2rem;
                    border-radius: 50%;
                    background: #0A0080;
                    color: #EBBAB9;
                    font-weight: 700;
                }

                .solution-step h3 {
                    margin: 0.8rem 0 0.5rem;
                    color: #0A0080;
                    font-size: 1.1rem;
                }

                .solution-step p {
                    margin: 0;
                    color: #4A4A68;
                    font-size: 0.92rem;
                    line-height: 1.55;
                }

                .solution-cta-row {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.6rem;
                    margin-top: 3rem;
                }

                .solution-cta {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    background: #0A0080;
                    color: #FFFDFB;
                    text-decoration: none;
                    font-weight: 600;
                }

                .solution-cta-hint {
                    color: #4A4A68;
                    font-size: 0.85rem;
                }

                @media (max-width: 968px) {
                    .solution-steps {
                        grid-template-columns: 1fr;
                        max-width: 420px;
                        margin: 0 auto;
                    }

                    .flow-line {
                        display: none;
                    }
                }

                @media (prefers-reduced-motion: reduce) {
                    .flow-line path {
                        animation: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
