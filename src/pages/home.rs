use yew::prelude::*;

use crate::components::folder::LiquidFolder;
use crate::Page;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Page>,
    pub open_notebook: bool,
    pub on_notebook_opened: Callback<()>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="home">
            <div class="home__backdrop"></div>
            <div class="home__card">
                <LiquidFolder
                    on_navigate={props.on_navigate.clone()}
                    open_notebook={props.open_notebook}
                    on_notebook_opened={props.on_notebook_opened.clone()}
                />
            </div>
            <style>
                {r#"
                .home {
                    position: relative;
                    min-height: 100vh;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 7rem 1rem 3rem;
                    overflow-x: hidden;
                }
                .home__backdrop {
                    position: fixed;
                    inset: 0;
                    z-index: 0;
                    background: url('https://wallpapercave.com/wp/wp12254035.jpg') center / cover no-repeat;
                }
                .home__card {
                    position: relative;
                    z-index: 10;
                    width: 90vw;
                    max-width: 420px;
                }
                "#}
            </style>
        </div>
    }
}
