use yew::prelude::*;

const FAQS: &[(&str, &str)] = &[
    (
        "How do I get measured?",
        "Our guided flow walks you through five measurements: chest, waist, hips, shoulders and inseam. Grab a tape and ideally a friend, it takes about ten minutes and you only do it once.",
    ),
    (
        "What if my measurements change?",
        "Open your profile and update the numbers whenever you like. Every order is cut from the profile as it stands the moment you place it.",
    ),
    (
        "Can you really make any design I send?",
        "Most garments, yes. Send a sketch, a photo or a link and we come back within two days with what is feasible, in which fabrics, and at what price. Heavy outerwear and shoes are the current exceptions.",
    ),
    (
        "Who actually sews my clothes?",
        "Small ateliers we have visited, rated and keep working with. Each delivery names the workshop that made it, and our ratings are published as they are.",
    ),
    (
        "How long does an order take?",
        "Made to order means nothing exists before you ask for it. Most pieces are cut, sewn and delivered within two to three weeks.",
    ),
    (
        "What if it still doesn't fit?",
        "The first adjustment is on us. We tweak your pattern, alter or remake the piece, and your profile learns from the correction.",
    ),
    (
        "Does this work for every body type?",
        "That is the whole point. Patterns are drafted from your numbers, so there is no chart to fall outside of.",
    ),
    (
        "What happens to my measurement data?",
        "It is used to draft your patterns and for nothing else. It is never sold, and you can delete your profile along with every measurement at any time.",
    ),
    (
        "Is made to order more expensive?",
        "More than fast fashion, comparable to mid-range brands. You are not paying for racks of unsold stock, and the piece does not go in a landfill because it fits.",
    ),
];

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    html! {
        <div class={classes!("faq-item", if props.open { "open" } else { "" })}>
            <button class="faq-question" {onclick}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer}</p>
            </div>
        </div>
    }
}

// At most one entry open; clicking the open one closes it.
fn toggled(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open_index = use_state(|| None::<usize>);

    let on_toggle = {
        let open_index = open_index.clone();
        Callback::from(move |index: usize| {
            open_index.set(toggled(*open_index, index));
        })
    };

    html! {
        <section id="faq" class="faq-section">
            <div class="faq-heading">
                <h2>{"Questions, answered"}</h2>
                <p>{"Everything people ask before their first made-to-order piece."}</p>
            </div>

            <div class="faq-list">
                {
                    FAQS.iter().enumerate().map(|(i, (question, answer))| {
                        html! {
                            <FaqItem
                                index={i}
                                question={*question}
                                answer={*answer}
                                open={*open_index == Some(i)}
                                on_toggle={on_toggle.clone()}
                            />
                        }
                    }).collect::<Html>()
                }
            </div>

            <div class="faq-cta-row">
                <span>{"Something else on your mind?"}</span>
                <a href="mailto:hello@fitlane.co" class="faq-cta">{"Write to us"}</a>
            </div>

            <style>
                {r#"
                .faq-section {
                    padding: 6rem 2rem;
                    background: linear-gradient(180deg, #FFFDFB 0%, #FAF6F2 100%);
                }

                .faq-heading {
                    text-align: center;
                    max-width: 640px;
                    margin: 0 auto 3rem;
                }

                .faq-heading h2 {
                    font-size: 2.2rem;
                    color: #0A0080;
                    margin: 0 0 1rem;
                }

                .faq-heading p {
                    color: #4A4A68;
                    font-size: 1.1rem;
                    margin: 0;
                }

                .faq-list {
                    max-width: 720px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 0.8rem;
                }

                .faq-item {
                    background: #FFFFFF;
                    border: 1px solid rgba(10, 0, 128, 0.1);
                    border-radius: 14px;
                    overflow: hidden;
                    transition: border-color 0.2s ease;
                }

                .faq-item.open {
                    border-color: rgba(10, 0, 128, 0.35);
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.1rem 1.4rem;
                    background: none;
                    border: none;
                    cursor: pointer;
                    text-align: left;
                }

                .question-text {
                    color: #0A0080;
                    font-weight: 600;
                    font-size: 1rem;
                }

                .toggle-icon {
                    color: #B0504E;
                    font-size: 1.3rem;
                    line-height: 1;
                    transition: transform 0.2s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    display: none;
                    padding: 0 1.4rem 1.2rem;
                }

                .faq-item.open .faq-answer {
                    display: block;
                    animation: faq-reveal 0.25s ease;
                }

                .faq-answer p {
                    margin: 0;
                    color: #4A4A68;
                    line-height: 1.6;
                    font-size: 0.95rem;
                }

                @keyframes faq-reveal {
                    from { opacity: 0; transform: translateY(-6px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .faq-cta-row {
                    display: flex;
                    justify-content: center;
                    gap: 0.6rem;
                    margin-top: 3rem;
                    color: #4A4A68;
                }

                .faq-cta {
                    color: #0A0080;
                    font-weight: 700;
                    text-decoration: none;
                    border-bottom: 2px solid #EBBAB9;
                }

                @media (prefers-reduced-motion: reduce) {
                    .faq-item.open .faq-answer {
                        animation: none;
                    }

                    .toggle-icon {
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
    use super::toggled;

    #[test]
    fn opening_another_entry_closes_the_previous_one() {
        assert_eq!(toggled(None, 2), Some(2));
        assert_eq!(toggled(Some(2), 5), Some(5));
    }

    #[test]
    fn clicking_the_open_entry_closes_it() {
        assert_eq!(toggled(Some(5), 5), None);
        assert_eq!(toggled(None, 0), Some(0));
        assert_eq!(toggled(Some(0), 0), None);
    }
}
