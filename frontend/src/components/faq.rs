use log::debug;
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::faq::{answer_id, is_activation_key, FaqGroup};

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: Html,
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    /// Distinguishes answer ids when a page has several groups.
    pub group: AttrValue,
    pub items: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let len = props.items.len();
    let state = use_state(|| FaqGroup::new(len));

    let activate = {
        let state = state.clone();
        let group_name = props.group.clone();
        Callback::from(move |index: usize| {
            let next = state.activate(index);
            debug!("FAQ {} open item: {:?}", group_name, next.open_item());
            state.set(next);
        })
    };

    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(index, entry)| {
                let expanded = state.is_expanded(index);
                let answer_id = answer_id(&props.group, index);

                let onclick = {
                    let activate = activate.clone();
                    Callback::from(move |_: MouseEvent| activate.emit(index))
                };
                let onkeydown = {
                    let activate = activate.clone();
                    Callback::from(move |e: KeyboardEvent| {
                        if is_activation_key(&e.key()) {
                            e.prevent_default();
                            activate.emit(index);
                        }
                    })
                };

                html! {
                    <div class={classes!("faq-item", expanded.then(|| "active"))}>
                        <div
                            class="faq-question"
                            role="button"
                            tabindex="0"
                            aria-expanded={state.aria_expanded(index)}
                            aria-controls={answer_id.clone()}
                            {onclick}
                            {onkeydown}
                        >
                            <span class="question-text">{entry.question.clone()}</span>
                            <span class="toggle-icon" aria-hidden="true">{if expanded { "−" } else { "+" }}</span>
                        </div>
                        <div class="faq-answer" id={answer_id}>
                            { entry.answer.clone() }
                        </div>
                    </div>
                }
            }) }

            <style>
                {r#"
                .faq-list {
                    max-width: 800px;
                    margin: 0 auto;
                }

                .faq-item {
                    border: 1px solid rgba(30, 144, 255, 0.15);
                    border-radius: 8px;
                    margin-bottom: 1rem;
                    background: rgba(255, 255, 255, 0.03);
                    overflow: hidden;
                }

                .faq-question {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1.25rem 1.5rem;
                    cursor: pointer;
                    font-size: 1.1rem;
                    font-weight: 600;
                }

                .faq-question:focus-visible {
                    outline: 2px solid #7EB2FF;
                    outline-offset: -2px;
                }

                .faq-answer {
                    max-height: 0;
                    padding: 0 1.5rem;
                    transition: max-height 0.3s ease, padding 0.3s ease;
                    overflow: hidden;
                    color: #bbb;
                    line-height: 1.6;
                }

                .faq-item.active .faq-answer {
                    max-height: 600px;
                    padding: 0 1.5rem 1.25rem;
                }
                "#}
            </style>
        </div>
    }
}
