use yew::prelude::*;

struct Founder {
    initials: &'static str,
    name: &'static str,
    role: &'static str,
    quote: &'static str,
    note: &'static str,
}

const FOUNDERS: &[Founder] = &[
    Founder {
        initials: "MT",
        name: "Mari Tamm",
        role: "Design",
        quote: "I spent eight years drafting patterns for a fit model nobody has ever met.",
        note: "Mari ran pattern rooms for two Nordic labels before deciding the size chart itself was the bug.",
    },
    Founder {
        initials: "JK",
        name: "Joel Kask",
        role: "Engineering",
        quote: "Five measurements carry more signal than every size label in your closet.",
        note: "Joel built logistics software for made-to-order furniture and kept asking why clothes still shipped in guesses.",
    },
];

#[function_component(Founders)]
pub fn founders() -> Html {
    html! {
        <section id="founders" class="founders-section">
            <div class="founders-heading">
                <h2>{"Why we started fitlane"}</h2>
                <p>{"Two people who got tired of clothes made for someone else."}</p>
            </div>

            <div class="founders-row">
                {
                    FOUNDERS.iter().map(|founder| {
                        html! {
                            <div class="founder-card">
                                <div class="founder-top">
                                    <span class="founder-badge">{founder.initials}</span>
                                    <div>
                                        <h3>{founder.name}</h3>
                                        <span class="founder-role">{founder.role}</span>
                                    </div>
                                </div>
                                <blockquote>{founder.quote}</blockquote>
                                <p>{founder.note}</p>
                            </div>
                        }
                    }).collect::<Html>()
                }
                <div class="founders-connector" aria-hidden="true"></div>
            </div>

            <div class="founders-cta-row">
                <a href="#faq" class="founders-cta">{"Still curious? Read the FAQ"}</a>
            </div>

            <style>
                {r#"
                .founders-section {
                    padding: 6rem 2rem;
                    background: #FFFDFB;
                }

                .founders-heading {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 3rem;
                }

                .founders-heading h2 {
                    font-size: 2.2rem;
                    color: #0A0080;
                    margin: 0 0 1rem;
                }

                .founders-heading p {
                    color: #4A4A68;
                    font-size: 1.1rem;
                    margin: 0;
                }

                .founders-row {
                    position: relative;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                    max-width: 900px;
                    margin: 0 auto;
                }

                .founders-connector {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    width: 3rem;
                    height: 1px;
                    background: #EBBAB9;
                }

                .founder-card {
                    background: #FFFFFF;
                    border: 1px solid rgba(10, 0, 128, 0.1);
                    border-radius: 20px;
                    padding: 1.8rem 2rem;
                    box-shadow: 0 12px 34px rgba(10, 0, 128, 0.08);
                }

                .founder-top {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.2rem;
                }

                .founder-badge {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    background: #0A0080;
                    color: #EBBAB9;
                    font-weight: 700;
                    font-size: 1.1rem;
                }

                .founder-top h3 {
                    margin: 0;
                    color: #0A0080;
                    font-size: 1.15rem;
                }

                .founder-role {
                    color: #B0504E;
                    font-size: 0.8rem;
                    font-weight: 700;
                    letter-spacing: 0.06em;
                    text-transform: uppercase;
                }

                .founder-card blockquote {
                    margin: 0 0 1rem;
                    padding-left: 1rem;
                    border-left: 3px solid #EBBAB9;
                    color: #0A0080;
                    font-style: italic;
                    line-height: 1.5;
                }

                .founder-card p {
                    margin: 0;
                    color: #4A4A68;
                    font-size: 0.92rem;
                    line-height: 1.55;
                }

                .founders-cta-row {
                    text-align: center;
                    margin-top: 3rem;
                }

                .founders-cta {
                    color: #0A0080;
                    font-weight: 700;
                    text-decoration: none;
                    border-bottom: 2px solid #EBBAB9;
                }

                @media (max-width: 968px) {
                    .founders-row {
                        grid-template-columns: 1fr;
                        max-width: 420px;
                    }

                    .founders-connector {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}
