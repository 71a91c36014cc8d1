use yew::prelude::*;

use crate::config::CONFIG;

/// Accordion rule: clicking the open branch closes it, any other opens.
pub fn toggle_branch(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
pub struct ContributionOfferProps {
    pub on_open_notebook: Callback<()>,
}

#[function_component(ContributionOffer)]
pub fn contribution_offer(props: &ContributionOfferProps) -> Html {
    let contribution = &CONFIG.profile.contribution;
    let open_branch = use_state(|| None::<usize>);

    let book_call = Callback::from(move |_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(CONFIG.profile.contribution.cta.url, "_blank");
        }
    });

    let open_notebook = {
        let on_open_notebook = props.on_open_notebook.clone();
        Callback::from(move |_: MouseEvent| on_open_notebook.emit(()))
    };

    html! {
        <div class="offer">
            <div class="offer__intro">
                <h2 class="offer__title float">{ contribution.title }</h2>
                <p class="offer__text">{ contribution.sub_text }</p>
            </div>

            <div class="offer__branches">
                {
                    for contribution.branches.iter().enumerate().map(|(index, branch)| {
                        let is_open = *open_branch == Some(index);
                        let onclick = {
                            let open_branch = open_branch.clone();
                            Callback::from(move |_: MouseEvent| {
                                open_branch.set(toggle_branch(*open_branch, index));
                            })
                        };
                        html! {
                            <div key={index} class="offer__branch float" style={format!("animation-delay: {:.2}s;", index as f64 * 0.15)}>
                                <div class={classes!("offer__pill", is_open.then(|| "offer__pill--open"))} onclick={onclick}>
                                    <span>{ branch.label }</span>
                                    <span class={classes!("offer__chevron", is_open.then(|| "offer__chevron--open"))}>{"⌄"}</span>
                                </div>
                                <div class={classes!("offer__details", is_open.then(|| "offer__details--open"))}>
                                    <div class="offer__details-inner">
                                        <p>{ branch.description }</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                }
            </div>

            <div class="offer__cta">
                <button class="offer__book" onclick={book_call}>{ contribution.cta.label }</button>
                <button class="offer__notebook" onclick={open_notebook}>
                    {"Write something in my notebook"}
                </button>
            </div>
            <style>
                {r#"
                .offer {
                    width: 100%;
                    max-width: 420px;
                    margin: 0 auto;
                    padding: 2.5rem 2rem;
                    display: flex;
                    flex-direction: column;
                    border-radius: 40px;
                    background: linear-gradient(to bottom, rgba(36, 102, 199, 0.1), rgba(30, 75, 138, 0.15), rgba(11, 36, 80, 0.4));
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 24px 60px rgba(0, 0, 0, 0.25);
                }
                .offer__intro { display: flex; flex-direction: column; align-items: center; text-align: center; gap: 1rem; }
                .offer__title { font-family: serif; font-style: italic; font-size: 1.875rem; color: white; }
                .offer__text { white-space: pre-line; font-size: 0.875rem; line-height: 1.6; color: rgba(255, 255, 255, 0.9); }
                .offer__branches { margin-top: 2rem; display: flex; flex-direction: column; gap: 1rem; }
                .offer__pill {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1.25rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.15);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: white;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.3s ease-out;
                }
                .offer__pill:hover { transform: translateY(-4px); }
                .offer__pill--open { background: rgba(255, 255, 255, 0.25); }
                .offer__chevron { transition: transform 0.3s ease; }
                .offer__chevron--open { transform: rotate(180deg); }
                .offer__details {
                    display: grid;
                    grid-template-rows: 0fr;
                    opacity: 0;
                    transition: all 0.3s ease;
                }
                .offer__details--open { grid-template-rows: 1fr; opacity: 1; margin-top: 0.5rem; }
                .offer__details-inner { overflow: hidden; }
                .offer__details-inner p {
                    margin: 0;
                    padding: 0.75rem 1rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.9);
                }
                .offer__cta { margin-top: 2.5rem; display: flex; flex-wrap: wrap; gap: 0.75rem; justify-content: center; }
                .offer__book, .offer__notebook {
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    white-space: nowrap;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .offer__book { border: none; background: white; color: #0b2450; font-weight: 600; box-shadow: 0 14px 35px rgba(0, 0, 0, 0.35); }
                .offer__book:hover { transform: translateY(-2px); }
                .offer__notebook { background: rgba(255, 255, 255, 0.1); border: 1px solid rgba(255, 255, 255, 0.3); color: white; }
                .offer__notebook:hover { background: rgba(255, 255, 255, 0.2); }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_accordion() {
        assert_eq!(toggle_branch(None, 2), Some(2));
        assert_eq!(toggle_branch(Some(2), 2), None);
        assert_eq!(toggle_branch(Some(2), 4), Some(4));
    }
}
