use yew::prelude::*;

use crate::config::CONFIG;

/// Logos of past and current teams, each linking out in a new tab.
#[function_component(BrandScroller)]
pub fn brand_scroller() -> Html {
    let brands = &CONFIG.profile.brands;

    html! {
        <div class="brands">
            <h3 class="brands__title">{ brands.title }</h3>
            <div class="brands__grid">
                {
                    for brands.logos.iter().enumerate().map(|(index, brand)| html! {
                        <a
                            key={brand.name}
                            class={classes!("brands__logo", "float", brand.dark_bg.then(|| "brands__logo--dark"))}
                            href={brand.url}
                            target="_blank"
                            rel="noopener noreferrer"
                            style={format!("animation-delay: {:.1}s;", index as f64 * 0.2)}
                        >
                            <img src={brand.src} alt={brand.name} />
                        </a>
                    })
                }
            </div>
            <style>
                {r#"
                .brands {
                    position: relative;
                    overflow: hidden;
                    width: 100%;
                    max-width: 480px;
                    margin: 0 auto;
                    padding: 2rem;
                    border-radius: 40px;
                    background: linear-gradient(to bottom, rgba(36, 102, 199, 0.1), rgba(30, 75, 138, 0.15), rgba(11, 36, 80, 0.4));
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    box-shadow: 0 24px 60px rgba(0, 0, 0, 0.25);
                }
                .brands__title {
                    margin-bottom: 1.5rem;
                    text-align: center;
                    text-transform: uppercase;
                    letter-spacing: 0.025em;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: rgba(255, 255, 255, 0.8);
                }
                .brands__grid { display: flex; flex-wrap: wrap; justify-content: center; align-items: center; gap: 2rem; }
                .brands__logo {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 7rem;
                    height: 3.5rem;
                    opacity: 0.8;
                    transition: all 0.3s ease;
                }
                .brands__logo:hover { opacity: 1; transform: scale(1.05); }
                .brands__logo img { width: 100%; height: 100%; object-fit: contain; filter: brightness(0) invert(1); opacity: 0.7; }
                .brands__logo--dark img { opacity: 0.85; }
                .brands__logo:hover img { opacity: 1; }
                "#}
            </style>
        </div>
    }
}
