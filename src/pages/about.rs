use yew::prelude::*;

use crate::components::brands::BrandScroller;
use crate::components::contribution::ContributionOffer;
use crate::components::icons::BackIcon;
use crate::components::orbit::RoleBubbleOrbit;
use crate::config::CONFIG;

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub on_back: Callback<()>,
    pub on_open_notebook: Callback<()>,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let profile = &CONFIG.profile;

    // Start at the top when arriving from the folder
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    html! {
        <div class="about">
            <div class="about__backdrop"></div>
            <div class="about__content">
                <div class="about__top">
                    <button class="about__back" onclick={back.clone()} aria-label="Back to Home">
                        <BackIcon />
                    </button>
                </div>

                <div class="about__card">
                    <div class="about__hero">
                        <img
                            class="about__header-img float"
                            src={CONFIG.image_url("10.png")}
                            alt="Decorative Header"
                        />
                        <RoleBubbleOrbit />
                        <div class="about__avatar float" onclick={back}>
                            <div class="about__avatar-ring">
                                <img src={CONFIG.image_url("11.png")} alt="Smiley Hero" />
                            </div>
                        </div>
                    </div>

                    <div class="about__tags">
                        {
                            for profile.tags.iter().enumerate().map(|(index, tag)| html! {
                                <div
                                    key={*tag}
                                    class="about__tag float"
                                    style={format!("animation-delay: {:.1}s;", index as f64 * 0.3)}
                                >
                                    { *tag }
                                </div>
                            })
                        }
                    </div>

                    <div class="about__text">
                        <h1>{ profile.hero.headline }</h1>
                        <div class="about__sub">{ profile.hero.sub_headline }</div>
                        <div class="about__descriptor">{ profile.hero.descriptor }</div>
                    </div>
                </div>

                <div class="about__section">
                    <BrandScroller />
                </div>

                <div class="about__section about__section--offer">
                    <ContributionOffer on_open_notebook={props.on_open_notebook.clone()} />
                    <p class="about__cta-copy wavy">{ profile.contribution.cta.sub_copy }</p>
                </div>
            </div>
            <style>
                {r#"
                .about {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    overflow-x: hidden;
                    background: #f9fafb;
                }
                .about__backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    background: url('https://wallpapercave.com/wp/wp12254035.jpg') center / cover no-repeat;
                }
                .about__content {
                    position: relative;
                    z-index: 10;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    padding: 6rem 0 3rem;
                }
                .about__top { width: 100%; max-width: 420px; padding: 0 1rem; margin-bottom: 1rem; }
                .about__back {
                    padding: 10px;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    color: white;
                    cursor: pointer;
                }
                .about__back:hover { background: rgba(255, 255, 255, 0.2); }
                .about__card {
                    position: relative;
                    width: 90vw;
                    max-width: 420px;
                    padding: 2.5rem 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 40px;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }
                .about__hero {
                    position: relative;
                    width: 100%;
                    height: 300px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    flex-shrink: 0;
                }
                .about__header-img { position: absolute; top: -2.5rem; z-index: 30; width: 8rem; object-fit: contain; }
                .about__avatar {
                    position: relative;
                    z-index: 20;
                    width: 8rem;
                    height: 8rem;
                    cursor: pointer;
                }
                .about__avatar-ring {
                    width: 100%;
                    height: 100%;
                    overflow: hidden;
                    border-radius: 9999px;
                    border: 2px solid rgba(255, 255, 255, 0.7);
                    box-shadow: 0 0 30px rgba(255, 255, 255, 0.3);
                    background: rgba(255, 255, 255, 0.1);
                }
                .about__avatar-ring img { width: 100%; height: 100%; object-fit: contain; transition: transform 0.5s ease; }
                .about__avatar:hover img { transform: scale(1.1); }
                .about__tags {
                    position: relative;
                    z-index: 20;
                    width: 100%;
                    margin-top: 0.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .about__tag {
                    padding: 10px 20px;
                    border-radius: 9999px;
                    background: rgba(37, 99, 235, 0.5);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    color: white;
                    font-size: 10px;
                    font-weight: 600;
                    font-style: italic;
                }
                .about__text { width: 100%; margin-top: 2rem; display: flex; flex-direction: column; align-items: center; gap: 1rem; color: white; }
                .about__text h1 { font-size: 1.875rem; font-weight: 900; letter-spacing: -0.025em; line-height: 1; margin: 0; }
                .about__sub { max-width: 280px; padding: 0.5rem 1rem; font-size: 0.875rem; font-weight: 500; line-height: 1.6; }
                .about__descriptor {
                    width: 100%;
                    margin-top: 1rem;
                    padding: 0.75rem 1.25rem;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.15);
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    font-size: 0.875rem;
                    font-style: italic;
                }
                .about__section { width: 100%; padding: 0 1rem; margin: 3.5rem 0 0; }
                .about__section--offer { display: flex; flex-direction: column; align-items: center; }
                .about__cta-copy {
                    max-width: 32rem;
                    margin: 3rem 0 2rem;
                    padding: 0 1rem;
                    font-family: serif;
                    font-style: italic;
                    font-size: 1.875rem;
                    color: white;
                    text-align: center;
                    opacity: 0.9;
                }
                @media (max-width: 640px) {
                    .about__hero { height: 260px; }
                    .about__card { padding: 2rem 1.5rem; border-radius: 34px; }
                    .about__avatar { width: 7rem; height: 7rem; }
                }
                "#}
            </style>
        </div>
    }
}
