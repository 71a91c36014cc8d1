use yew::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;

mod config;
mod components {
    pub mod brands;
    pub mod contribution;
    pub mod folder;
    pub mod icons;
    pub mod notebook;
    pub mod orbit;
    pub mod stickers;
}
mod pages {
    pub mod about;
    pub mod home;
}

use pages::{about::About, home::Home};

/// The two views. Plain state, there is no router or history behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { current, on_navigate } = props;

    let tab = |page: Page| {
        let on_navigate = on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(page);
        });
        html! {
            <button class={classes!("nav-tab", (*current == page).then(|| "nav-tab--active"))} onclick={onclick}>
                {page.label()}
            </button>
        }
    };

    html! {
        <nav class="top-nav">
            <div class="nav-pill">
                {tab(Page::Home)}
                {tab(Page::About)}
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let page = use_state(|| Page::Home);
    // Set by the About page, cleared once the folder has opened the notebook
    let notebook_requested = use_state(|| false);

    let navigate = {
        let page = page.clone();
        Callback::from(move |next: Page| {
            info!("Rendering {} page", next.label());
            page.set(next);
        })
    };

    let open_notebook = {
        let page = page.clone();
        let notebook_requested = notebook_requested.clone();
        Callback::from(move |_: ()| {
            info!("Opening notebook from the About page");
            page.set(Page::Home);
            notebook_requested.set(true);
        })
    };

    let notebook_opened = {
        let notebook_requested = notebook_requested.clone();
        Callback::from(move |_: ()| notebook_requested.set(false))
    };

    let back_home = {
        let navigate = navigate.clone();
        Callback::from(move |_: ()| navigate.emit(Page::Home))
    };

    html! {
        <>
            <Nav current={*page} on_navigate={navigate.clone()} />
            {
                match *page {
                    Page::Home => html! {
                        <Home
                            on_navigate={navigate}
                            open_notebook={*notebook_requested}
                            on_notebook_opened={notebook_opened}
                        />
                    },
                    Page::About => html! {
                        <About on_back={back_home} on_open_notebook={open_notebook} />
                    },
                }
            }
            <style>
                {r#"
                * { box-sizing: border-box; }
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    background: #0b2450;
                }
                button { font-family: inherit; }
                .serif-italic { font-family: serif; font-style: italic; font-weight: 400; }
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 100;
                    display: flex;
                    justify-content: center;
                    padding: 1.5rem 1rem;
                }
                .nav-pill {
                    display: flex;
                    gap: 0.5rem;
                    padding: 0.5rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .nav-tab {
                    padding: 0.5rem 1.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    color: white;
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .nav-tab:hover { background: rgba(255, 255, 255, 0.1); }
                .nav-tab--active { background: white; color: #111827; }
                .nav-tab--active:hover { background: white; }
                @keyframes float {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(-6px); }
                }
                @keyframes spin {
                    from { transform: rotate(0deg); }
                    to { transform: rotate(360deg); }
                }
                @keyframes wavy {
                    0%, 100% { transform: rotate(-1deg); }
                    50% { transform: rotate(1deg); }
                }
                @keyframes fadeIn {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                .float { animation: float 4s ease-in-out infinite; }
                .fill { width: 100%; height: 100%; }
                .spin { animation: spin 1s linear infinite; }
                .spin-slow { animation: spin 40s linear infinite; }
                .spin-slow-reverse { animation: spin 40s linear infinite reverse; }
                .wavy { animation: wavy 6s ease-in-out infinite; }
                "#}
            </style>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(config::CONFIG.title);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
