use std::rc::Rc;

use log::info;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::DeviceOrientationEvent;
use yew::prelude::*;

use crate::components::icons::{ExpandIcon, NotebookIcon, OpenNotebookIcon, RefreshIcon};
use crate::components::notebook::NotebookModal;
use crate::components::stickers::{
    sticker_file, Placement, StickerImage, StickerTooltip, DECORATIVE_STICKERS, FRONT_STICKERS,
    STICKER_CSS,
};
use crate::config::CONFIG;
use crate::Page;

/// Manual clicks win over the tilt sensor for this long.
pub const TILT_COOLDOWN_MS: i64 = 2_000;
pub const TILT_OPEN_ABOVE: f64 = 45.0;
pub const TILT_CLOSE_BELOW: f64 = 25.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    Instagram,
    Linkedin,
    Smiley,
    Wordpress,
    Notebook,
}

/// Fan order, left to right.
pub const MAIN_ITEMS: [ItemKind; 5] = [
    ItemKind::Instagram,
    ItemKind::Linkedin,
    ItemKind::Smiley,
    ItemKind::Wordpress,
    ItemKind::Notebook,
];

impl ItemKind {
    pub fn index(self) -> usize {
        match self {
            ItemKind::Instagram => 0,
            ItemKind::Linkedin => 1,
            ItemKind::Smiley => 2,
            ItemKind::Wordpress => 3,
            ItemKind::Notebook => 4,
        }
    }

    pub fn label(self) -> &'static str {
        let labels = &CONFIG.main_icon_labels;
        match self {
            ItemKind::Instagram => labels.instagram,
            ItemKind::Linkedin => labels.linkedin,
            ItemKind::Smiley => labels.smiley,
            ItemKind::Wordpress => labels.wordpress,
            ItemKind::Notebook => labels.notebook,
        }
    }

    pub fn alt(self) -> &'static str {
        match self {
            ItemKind::Instagram => "Instagram",
            ItemKind::Linkedin => "LinkedIn",
            ItemKind::Smiley => "Smiley",
            ItemKind::Wordpress => "Wordpress",
            ItemKind::Notebook => "Notebook",
        }
    }

    /// Image for the icon, `None` for the notebook which is drawn inline.
    pub fn image(self) -> Option<String> {
        match self {
            ItemKind::Instagram => Some("https://img.icons8.com/3d-fluency/375/instagram-new.png".to_string()),
            ItemKind::Linkedin => Some("https://img.icons8.com/3d-fluency/375/linkedin.png".to_string()),
            ItemKind::Smiley => Some(CONFIG.image_url("11.png")),
            ItemKind::Wordpress => Some("https://img.icons8.com/3d-fluency/375/wordpress.png".to_string()),
            ItemKind::Notebook => None,
        }
    }

    fn link(self) -> Option<&'static str> {
        let urls = &CONFIG.social_urls;
        let url = match self {
            ItemKind::Instagram => urls.instagram,
            ItemKind::Linkedin => urls.linkedin,
            ItemKind::Wordpress => urls.wordpress,
            ItemKind::Smiley | ItemKind::Notebook => return None,
        };
        (!url.is_empty()).then_some(url)
    }
}

/// What clicking a main item should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemIntent {
    OpenFolder,
    OpenNotebook,
    Navigate(Page),
    OpenUrl(&'static str),
    Focus,
}

pub fn intent_for(folder_open: bool, kind: ItemKind) -> ItemIntent {
    if !folder_open {
        return ItemIntent::OpenFolder;
    }
    match kind {
        ItemKind::Notebook => ItemIntent::OpenNotebook,
        ItemKind::Smiley => ItemIntent::Navigate(Page::About),
        other => other.link().map_or(ItemIntent::Focus, ItemIntent::OpenUrl),
    }
}

// (x px, y px, rotation deg, z-index) per fan slot, hand tuned
pub const MAIN_FAN: [(i32, i32, i32, i32); 5] = [
    (-125, -70, -25, 20),
    (-65, -100, -12, 25),
    (0, -120, 0, 30),
    (65, -100, 12, 25),
    (125, -70, 25, 20),
];

// (x px, y px, rotation deg, scale) per decorative slot
pub const DECOR_ARC: [(i32, i32, i32, f64); 5] = [
    (-120, -170, -12, 1.0),
    (-60, -200, -6, 1.1),
    (0, -225, 0, 1.1),
    (60, -210, 6, 1.1),
    (120, -190, 12, 1.0),
];

#[derive(Clone, Debug, PartialEq)]
pub struct ItemStyle {
    pub transform: String,
    pub z_index: i32,
    pub opacity: f64,
    pub blur_px: u8,
}

impl ItemStyle {
    pub fn css(&self) -> String {
        let filter = if self.blur_px > 0 {
            format!("blur({}px)", self.blur_px)
        } else {
            "none".to_string()
        };
        format!(
            "transform: {}; z-index: {}; opacity: {}; filter: {};",
            self.transform, self.z_index, self.opacity, filter
        )
    }
}

pub fn main_item_style(kind: ItemKind, folder_open: bool, focused: Option<ItemKind>) -> ItemStyle {
    let index = kind.index();
    let (base_x, base_y, base_rot, base_z) = MAIN_FAN[index];
    let is_smiley = kind == ItemKind::Smiley;

    if !folder_open {
        let rotation = (index as i32 - 2) * 10;
        return ItemStyle {
            transform: format!("translateY(0px) rotate({}deg) scale(0.8)", rotation),
            z_index: base_z,
            opacity: 0.9,
            // Inner items sit behind the glass
            blur_px: if (1..=3).contains(&index) { 2 } else { 0 },
        };
    }

    let mut offset_x = 0;
    let mut offset_y = 0;
    let mut scale = if is_smiley { 1.25 } else { 1.0 };
    let mut z_index = base_z;

    match focused {
        Some(target) if target == kind => {
            scale = if is_smiley { 1.4 } else { 1.15 };
            z_index = 50;
            offset_y = -15;
        }
        Some(target) => {
            offset_x = if index > target.index() { 15 } else { -15 };
            scale = if is_smiley { 1.15 } else { 0.95 };
        }
        None => {}
    }

    ItemStyle {
        transform: format!(
            "translate({}px, {}px) rotate({}deg) scale({})",
            base_x + offset_x,
            base_y + offset_y,
            base_rot,
            scale
        ),
        z_index,
        opacity: 1.0,
        blur_px: 0,
    }
}

pub fn decor_style(index: usize, folder_open: bool) -> String {
    if !folder_open {
        return "transform: translateY(0px); opacity: 0;".to_string();
    }
    let (x, y, rotation, scale) = DECOR_ARC[index];
    format!(
        "transform: translate({}px, {}px) rotate({}deg) scale({}); opacity: 1;",
        x, y, rotation, scale
    )
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FolderState {
    pub expanded: bool,
    pub hovered: bool,
    pub hovered_item: Option<ItemKind>,
    pub clicked_item: Option<ItemKind>,
    pub active_sticker: Option<u8>,
    pub show_notebook: bool,
    pub touch: bool,
    pub last_manual_action: Option<i64>,
}

pub enum FolderAction {
    PointerEnter,
    PointerLeave,
    TouchStart,
    MouseMove,
    Toggle { now: i64 },
    BackgroundClick,
    StickerClick(u8),
    ItemEnter(ItemKind),
    ItemLeave(ItemKind),
    Activate { kind: ItemKind, now: i64 },
    Tilt { beta: Option<f64>, now: i64 },
    OpenNotebook,
    CloseNotebook,
}

impl FolderState {
    pub fn is_open(&self) -> bool {
        self.expanded || self.hovered
    }

    /// Hover beats click.
    pub fn focused(&self) -> Option<ItemKind> {
        self.hovered_item.or(self.clicked_item)
    }

    fn toggle(&mut self, now: i64) {
        self.last_manual_action = Some(now);
        self.expanded = !self.expanded;
        self.active_sticker = None;
    }

    fn tilt_suppressed(&self, now: i64) -> bool {
        self.last_manual_action
            .map_or(false, |last| now - last < TILT_COOLDOWN_MS)
    }

    pub fn apply(mut self, action: FolderAction) -> Self {
        match action {
            FolderAction::PointerEnter => {
                // Touch devices fire a synthetic mouseenter right after the tap
                if !self.touch {
                    self.hovered = true;
                }
            }
            FolderAction::PointerLeave => {
                self.hovered = false;
                self.hovered_item = None;
            }
            FolderAction::TouchStart => self.touch = true,
            FolderAction::MouseMove => self.touch = false,
            FolderAction::Toggle { now } => self.toggle(now),
            FolderAction::BackgroundClick => {
                self.active_sticker = None;
                self.expanded = false;
            }
            FolderAction::StickerClick(id) => {
                self.active_sticker = if self.active_sticker == Some(id) { None } else { Some(id) };
            }
            FolderAction::ItemEnter(kind) => self.hovered_item = Some(kind),
            FolderAction::ItemLeave(kind) => {
                if self.hovered_item == Some(kind) {
                    self.hovered_item = None;
                }
            }
            FolderAction::Activate { kind, now } => match intent_for(self.is_open(), kind) {
                ItemIntent::OpenFolder => self.toggle(now),
                ItemIntent::OpenNotebook => {
                    self.active_sticker = None;
                    self.show_notebook = true;
                }
                ItemIntent::Focus => {
                    self.active_sticker = None;
                    self.clicked_item = if self.clicked_item == Some(kind) { None } else { Some(kind) };
                }
                ItemIntent::Navigate(_) | ItemIntent::OpenUrl(_) => self.active_sticker = None,
            },
            FolderAction::Tilt { beta, now } => {
                if self.tilt_suppressed(now) {
                    return self;
                }
                match beta {
                    Some(beta) if beta > TILT_OPEN_ABOVE => self.expanded = true,
                    Some(beta) if beta < TILT_CLOSE_BELOW => self.expanded = false,
                    _ => {}
                }
            }
            FolderAction::OpenNotebook => {
                self.show_notebook = true;
                self.expanded = true;
            }
            FolderAction::CloseNotebook => self.show_notebook = false,
        }
        self
    }
}

impl Reducible for FolderState {
    type Action = FolderAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = (*self).clone().apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

#[derive(Properties, PartialEq)]
pub struct LiquidFolderProps {
    pub on_navigate: Callback<Page>,
    #[prop_or_default]
    pub open_notebook: bool,
    #[prop_or_default]
    pub on_notebook_opened: Callback<()>,
}

#[function_component(LiquidFolder)]
pub fn liquid_folder(props: &LiquidFolderProps) -> Html {
    let state = use_reducer(FolderState::default);

    // Another page asked for the notebook
    {
        let dispatcher = state.dispatcher();
        let on_notebook_opened = props.on_notebook_opened.clone();
        use_effect_with_deps(
            move |requested| {
                if *requested {
                    dispatcher.dispatch(FolderAction::OpenNotebook);
                    on_notebook_opened.emit(());
                }
                || ()
            },
            props.open_notebook,
        );
    }

    // Tilting the phone upright opens the folder, laying it flat closes it
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let listener = window.as_ref().and_then(|window| {
                    window.get("DeviceOrientationEvent")?;
                    let callback = Closure::wrap(Box::new(move |event: DeviceOrientationEvent| {
                        dispatcher.dispatch(FolderAction::Tilt {
                            beta: event.beta(),
                            now: now_ms(),
                        });
                    }) as Box<dyn FnMut(DeviceOrientationEvent)>);
                    window
                        .add_event_listener_with_callback(
                            "deviceorientation",
                            callback.as_ref().unchecked_ref(),
                        )
                        .ok()?;
                    Some(callback)
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "deviceorientation",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let is_open = state.is_open();
    let focused = state.focused();

    let on_background = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(FolderAction::BackgroundClick))
    };

    let on_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            dispatcher.dispatch(FolderAction::Toggle { now: now_ms() });
        })
    };

    let on_sticker = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: u8| dispatcher.dispatch(FolderAction::StickerClick(id)))
    };

    let on_area_enter = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(FolderAction::PointerEnter))
    };
    let on_area_leave = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(FolderAction::PointerLeave))
    };
    let on_area_touch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: TouchEvent| dispatcher.dispatch(FolderAction::TouchStart))
    };
    // Hybrid devices: a real mouse move re-enables hover
    let on_area_move = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(FolderAction::MouseMove))
    };

    let render_item = |kind: ItemKind| {
        let style = main_item_style(kind, is_open, focused);
        let item_focused = focused == Some(kind);

        let onmouseenter = {
            let dispatcher = state.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(FolderAction::ItemEnter(kind)))
        };
        let onmouseleave = {
            let dispatcher = state.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(FolderAction::ItemLeave(kind)))
        };
        let onclick = {
            let dispatcher = state.dispatcher();
            let on_navigate = props.on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                let intent = intent_for(is_open, kind);
                dispatcher.dispatch(FolderAction::Activate { kind, now: now_ms() });
                match intent {
                    ItemIntent::Navigate(page) => {
                        info!("Folder item {:?} navigating to {:?}", kind, page);
                        on_navigate.emit(page);
                    }
                    ItemIntent::OpenUrl(url) => open_in_new_tab(url),
                    _ => {}
                }
            })
        };

        let label_class = classes!(
            "fan-item__label",
            (state.hovered_item == Some(kind)).then(|| "fan-item__label--visible"),
        );

        html! {
            <div class="fan-item" style={style.css()} onmouseenter={onmouseenter} onmouseleave={onmouseleave} onclick={onclick}>
                <div class={label_class}>{ kind.label() }</div>
                {
                    match kind.image() {
                        Some(src) => html! {
                            <img class="fan-item__img" src={src} alt={kind.alt()} draggable="false" />
                        },
                        None if item_focused => html! { <OpenNotebookIcon class="fan-item__img fan-item__img--grown" /> },
                        None => html! { <NotebookIcon class="fan-item__img" /> },
                    }
                }
            </div>
        }
    };

    let close_notebook = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(FolderAction::CloseNotebook))
    };

    html! {
        <div class="folder-card" onclick={on_background}>
            <div
                class="folder-area"
                onmouseenter={on_area_enter}
                onmouseleave={on_area_leave}
                ontouchstart={on_area_touch}
                onmousemove={on_area_move}
                onclick={on_toggle.clone()}
            >
                <div class={classes!("folder-back", is_open.then(|| "folder-back--open"))}></div>

                <div class="folder-stack">
                    {
                        for DECORATIVE_STICKERS.iter().enumerate().map(|(index, sticker)| html! {
                            <div
                                key={sticker.id}
                                class="decor-item"
                                style={format!("width: {0}px; height: {0}px; {1}", sticker.size_px, decor_style(index, is_open))}
                            >
                                <div class="float fill" style={format!("animation-delay: {};", sticker.delay)}>
                                    <StickerTooltip
                                        id={sticker.id}
                                        is_open={state.active_sticker == Some(sticker.id)}
                                        on_toggle={on_sticker.clone()}
                                        placement={Placement::Top}
                                    >
                                        <StickerImage file={sticker_file(sticker.id)} alt="Decorative Sticker" />
                                    </StickerTooltip>
                                </div>
                            </div>
                        })
                    }
                </div>

                <div class="folder-stack">
                    { for MAIN_ITEMS.iter().copied().map(render_item) }
                </div>

                <div class="folder-front-wrap">
                    <div class={classes!("folder-front", is_open.then(|| "folder-front--open"))}>
                        <div class="folder-front__shine"></div>
                        {
                            for FRONT_STICKERS.iter().map(|sticker| html! {
                                <div
                                    key={sticker.id}
                                    class={classes!("front-sticker", sticker.class, is_open.then(|| "front-sticker--lifted"))}
                                >
                                    <div class="float fill" style={format!("animation-delay: {};", sticker.delay)}>
                                        <StickerTooltip
                                            id={sticker.id}
                                            is_open={state.active_sticker == Some(sticker.id)}
                                            on_toggle={on_sticker.clone()}
                                            placement={sticker.placement}
                                        >
                                            <StickerImage file={sticker_file(sticker.id)} alt={sticker.alt} />
                                        </StickerTooltip>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </div>

            <div class="folder-footer">
                <h2>{"Welcome, It's "}<span class="serif-italic">{"Maddy"}</span></h2>
                <p class="folder-footer__description">{ CONFIG.description }</p>
                <div class="folder-footer__controls">
                    <div class="folder-footer__count">{ format!("{} items", MAIN_ITEMS.len()) }</div>
                    <div class="folder-footer__buttons">
                        <button class="icon-button" onclick={on_toggle}>
                            <ExpandIcon class={classes!("expand-icon", is_open.then(|| "expand-icon--open"))} />
                        </button>
                        <button class="icon-button" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                            <RefreshIcon />
                        </button>
                    </div>
                </div>
            </div>

            <NotebookModal is_open={state.show_notebook} on_close={close_notebook} />

            <style>{ STICKER_CSS }</style>
            <style>
                {r#"
                .folder-card {
                    position: relative;
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    background: rgba(0, 0, 0, 0.05);
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 50px;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    overflow: visible;
                    transform-origin: top;
                }
                .folder-area {
                    position: relative;
                    width: 100%;
                    height: 380px;
                    margin-top: 2rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    perspective: 1000px;
                }
                .folder-back {
                    position: absolute;
                    top: 6rem;
                    width: 16rem;
                    height: 12rem;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 1.5rem;
                    transition: all 0.5s ease;
                    transform-origin: bottom;
                    z-index: 0;
                }
                .folder-back--open { transform: translateY(1rem) scale(0.95); }
                .folder-stack {
                    position: absolute;
                    inset: 0;
                    top: 4rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    pointer-events: none;
                }
                .decor-item {
                    position: absolute;
                    z-index: 15;
                    transition: all 0.7s cubic-bezier(0.34, 1.56, 0.64, 1);
                }
                .fan-item {
                    position: absolute;
                    width: 7rem;
                    height: 7rem;
                    pointer-events: auto;
                    cursor: pointer;
                    transition: all 0.5s cubic-bezier(0.25, 0.8, 0.25, 1);
                }
                .fan-item__img {
                    width: 100%;
                    height: 100%;
                    object-fit: contain;
                    filter: drop-shadow(0 25px 25px rgba(0, 0, 0, 0.15));
                }
                .fan-item__img--grown { transform: scale(1.1); }
                .fan-item__label {
                    position: absolute;
                    top: -3rem;
                    left: 50%;
                    transform: translate(-50%, 0.5rem);
                    padding: 6px 12px;
                    background: rgba(255, 255, 255, 0.6);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    border-radius: 9999px;
                    color: #111827;
                    font-size: 11px;
                    font-weight: 600;
                    white-space: nowrap;
                    z-index: 50;
                    opacity: 0;
                    pointer-events: none;
                    transition: all 0.3s ease 75ms;
                }
                .fan-item__label--visible { opacity: 1; transform: translate(-50%, 0); }
                .folder-front-wrap {
                    position: relative;
                    z-index: 40;
                    width: 16rem;
                    height: 12rem;
                    margin-top: 6rem;
                    pointer-events: none;
                }
                .folder-front {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    border-radius: 1.5rem;
                    background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.3), rgba(255, 255, 255, 0.1), transparent);
                    backdrop-filter: blur(2px);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    box-shadow: 0 20px 50px -12px rgba(0, 0, 0, 0.15);
                    transition: all 0.5s ease-out;
                    transform-origin: bottom;
                }
                .folder-front--open { transform: rotateX(12deg) translateY(1.5rem); }
                .folder-front__shine {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 50%;
                    background: linear-gradient(to bottom, rgba(255, 255, 255, 0.2), transparent);
                    border-radius: 1.5rem 1.5rem 0 0;
                }
                .front-sticker { position: absolute; transition: transform 0.3s ease; }
                .front-sticker--flower { top: -2.5rem; right: -2rem; width: 8rem; height: 8rem; transform: rotate(12deg); }
                .front-sticker--headphone { top: -1rem; left: -0.5rem; width: 4rem; height: 4rem; transform: rotate(-12deg); }
                .front-sticker--camera { bottom: -1rem; left: -1rem; width: 6rem; height: 6rem; transform: rotate(6deg); }
                .front-sticker--bitcoin { bottom: 1rem; right: -1rem; width: 5rem; height: 5rem; transform: rotate(12deg); }
                .front-sticker--lifted { scale: 1.05; }
                .folder-footer {
                    position: relative;
                    z-index: 50;
                    margin-top: 2rem;
                    padding-bottom: 0.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    color: white;
                }
                .folder-footer h2 { font-size: 1.875rem; font-weight: 600; letter-spacing: -0.025em; }
                .folder-footer__description {
                    max-width: 24rem;
                    margin: 0.5rem 1rem 1.5rem;
                    padding: 0.75rem 1.5rem;
                    background: rgba(255, 255, 255, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 1rem;
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                .folder-footer__controls {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0 1rem;
                }
                .folder-footer__count {
                    padding: 6px 16px;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    font-size: 0.875rem;
                }
                .folder-footer__buttons { display: flex; gap: 1rem; }
                .icon-button {
                    padding: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: transparent;
                    color: rgba(255, 255, 255, 0.8);
                    cursor: pointer;
                }
                .icon-button:hover { background: rgba(255, 255, 255, 0.2); color: white; }
                .expand-icon { width: 1.25rem; height: 1.25rem; transition: transform 0.3s ease; }
                .expand-icon--open { transform: rotate(180deg); }
                @media (max-width: 640px) {
                    .folder-card { padding: 1.5rem; transform: scale(0.9); }
                    .folder-area { height: 340px; margin-top: 1rem; }
                    .folder-back, .folder-front-wrap { width: 14rem; height: 10rem; }
                    .fan-item { width: 6rem; height: 6rem; }
                    .folder-footer h2 { font-size: 1.5rem; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> FolderState {
        FolderState::default().apply(FolderAction::Toggle { now: 0 })
    }

    #[test]
    fn double_toggle_restores_state() {
        let start = FolderState::default();
        let twice = start
            .clone()
            .apply(FolderAction::Toggle { now: 10 })
            .apply(FolderAction::Toggle { now: 20 });
        assert_eq!(twice.expanded, start.expanded);
        assert!(!twice.is_open());

        let from_open = open();
        let back = from_open
            .clone()
            .apply(FolderAction::Toggle { now: 30 })
            .apply(FolderAction::Toggle { now: 40 });
        assert_eq!(back.expanded, from_open.expanded);
    }

    #[test]
    fn hover_opens_without_expanding() {
        let state = FolderState::default().apply(FolderAction::PointerEnter);
        assert!(state.is_open());
        assert!(!state.expanded);

        let state = state.apply(FolderAction::PointerLeave);
        assert!(!state.is_open());
    }

    #[test]
    fn touch_suppresses_phantom_hover() {
        let state = FolderState::default()
            .apply(FolderAction::TouchStart)
            .apply(FolderAction::PointerEnter);
        assert!(!state.hovered);

        let state = state.apply(FolderAction::MouseMove).apply(FolderAction::PointerEnter);
        assert!(state.hovered);
    }

    #[test]
    fn background_click_closes_tooltip_before_anything_else() {
        let state = open().apply(FolderAction::StickerClick(6));
        assert_eq!(state.active_sticker, Some(6));

        let state = state.apply(FolderAction::BackgroundClick);
        assert_eq!(state.active_sticker, None);
        assert!(!state.expanded);
        assert!(!state.show_notebook);
    }

    #[test]
    fn background_click_keeps_hover_and_focus() {
        let state = FolderState::default()
            .apply(FolderAction::PointerEnter)
            .apply(FolderAction::ItemEnter(ItemKind::Linkedin))
            .apply(FolderAction::StickerClick(2))
            .apply(FolderAction::BackgroundClick);
        assert!(state.hovered);
        assert_eq!(state.focused(), Some(ItemKind::Linkedin));
        assert_eq!(state.active_sticker, None);
    }

    #[test]
    fn sticker_click_toggles_and_switches() {
        let state = open().apply(FolderAction::StickerClick(1));
        assert_eq!(state.active_sticker, Some(1));
        let state = state.apply(FolderAction::StickerClick(3));
        assert_eq!(state.active_sticker, Some(3));
        let state = state.apply(FolderAction::StickerClick(3));
        assert_eq!(state.active_sticker, None);
    }

    #[test]
    fn toggle_dismisses_tooltip() {
        let state = open()
            .apply(FolderAction::StickerClick(4))
            .apply(FolderAction::Toggle { now: 5 });
        assert_eq!(state.active_sticker, None);
    }

    #[test]
    fn closed_folder_items_only_open_it() {
        for kind in MAIN_ITEMS {
            assert_eq!(intent_for(false, kind), ItemIntent::OpenFolder);
            let state = FolderState::default().apply(FolderAction::Activate { kind, now: 100 });
            assert!(state.expanded);
            assert!(!state.show_notebook);
            assert_eq!(state.last_manual_action, Some(100));
        }
    }

    #[test]
    fn open_folder_item_intents() {
        assert_eq!(intent_for(true, ItemKind::Notebook), ItemIntent::OpenNotebook);
        assert_eq!(intent_for(true, ItemKind::Smiley), ItemIntent::Navigate(Page::About));
        assert_eq!(
            intent_for(true, ItemKind::Instagram),
            ItemIntent::OpenUrl(CONFIG.social_urls.instagram)
        );
        assert_eq!(
            intent_for(true, ItemKind::Linkedin),
            ItemIntent::OpenUrl(CONFIG.social_urls.linkedin)
        );
        assert_eq!(
            intent_for(true, ItemKind::Wordpress),
            ItemIntent::OpenUrl(CONFIG.social_urls.wordpress)
        );
    }

    #[test]
    fn notebook_item_shows_modal_and_clears_tooltip() {
        let state = open()
            .apply(FolderAction::StickerClick(8))
            .apply(FolderAction::Activate { kind: ItemKind::Notebook, now: 1 });
        assert!(state.show_notebook);
        assert_eq!(state.active_sticker, None);
        assert!(state.expanded);

        let state = state.apply(FolderAction::CloseNotebook);
        assert!(!state.show_notebook);
    }

    #[test]
    fn external_notebook_request_opens_folder_too() {
        let state = FolderState::default().apply(FolderAction::OpenNotebook);
        assert!(state.show_notebook);
        assert!(state.expanded);
    }

    #[test]
    fn hover_beats_click_focus() {
        let state = FolderState {
            clicked_item: Some(ItemKind::Smiley),
            ..open()
        };
        assert_eq!(state.focused(), Some(ItemKind::Smiley));
        let state = state.apply(FolderAction::ItemEnter(ItemKind::Wordpress));
        assert_eq!(state.focused(), Some(ItemKind::Wordpress));
        // Leaving a different item does not clear the hover
        let state = state.apply(FolderAction::ItemLeave(ItemKind::Instagram));
        assert_eq!(state.hovered_item, Some(ItemKind::Wordpress));
        let state = state.apply(FolderAction::ItemLeave(ItemKind::Wordpress));
        assert_eq!(state.focused(), Some(ItemKind::Smiley));
    }

    #[test]
    fn tilt_opens_and_closes_with_hysteresis() {
        let state = FolderState::default();
        let state = state.apply(FolderAction::Tilt { beta: Some(60.0), now: 10_000 });
        assert!(state.expanded);
        // Between the thresholds nothing changes
        let state = state.apply(FolderAction::Tilt { beta: Some(30.0), now: 10_100 });
        assert!(state.expanded);
        let state = state.apply(FolderAction::Tilt { beta: Some(10.0), now: 10_200 });
        assert!(!state.expanded);
        let state = state.apply(FolderAction::Tilt { beta: Some(35.0), now: 10_300 });
        assert!(!state.expanded);
    }

    #[test]
    fn tilt_ignored_after_manual_toggle() {
        let state = FolderState::default().apply(FolderAction::Toggle { now: 50_000 });
        assert!(state.expanded);

        let state = state.apply(FolderAction::Tilt { beta: Some(5.0), now: 51_999 });
        assert!(state.expanded);

        let state = state.apply(FolderAction::Tilt { beta: Some(5.0), now: 52_000 });
        assert!(!state.expanded);
    }

    #[test]
    fn tilt_without_reading_is_ignored() {
        let state = open().apply(FolderAction::Tilt { beta: None, now: 99_999 });
        assert!(state.expanded);
    }

    #[test]
    fn closed_items_stack_in_folder() {
        let style = main_item_style(ItemKind::Instagram, false, None);
        assert_eq!(style.transform, "translateY(0px) rotate(-20deg) scale(0.8)");
        assert_eq!(style.blur_px, 0);
        assert_eq!(style.opacity, 0.9);

        let style = main_item_style(ItemKind::Smiley, false, Some(ItemKind::Smiley));
        assert_eq!(style.transform, "translateY(0px) rotate(0deg) scale(0.8)");
        assert_eq!(style.blur_px, 2);

        let style = main_item_style(ItemKind::Notebook, false, None);
        assert_eq!(style.transform, "translateY(0px) rotate(20deg) scale(0.8)");
        assert_eq!(style.blur_px, 0);
    }

    #[test]
    fn open_items_fan_out_from_table() {
        let style = main_item_style(ItemKind::Instagram, true, None);
        assert_eq!(style.transform, "translate(-125px, -70px) rotate(-25deg) scale(1)");
        assert_eq!(style.z_index, 20);
        assert_eq!(style.opacity, 1.0);

        let style = main_item_style(ItemKind::Smiley, true, None);
        assert_eq!(style.transform, "translate(0px, -120px) rotate(0deg) scale(1.25)");
        assert_eq!(style.z_index, 30);
    }

    #[test]
    fn focused_item_pops_and_neighbours_part() {
        let focus = Some(ItemKind::Linkedin);

        let style = main_item_style(ItemKind::Linkedin, true, focus);
        assert_eq!(style.transform, "translate(-65px, -115px) rotate(-12deg) scale(1.15)");
        assert_eq!(style.z_index, 50);

        let left = main_item_style(ItemKind::Instagram, true, focus);
        assert_eq!(left.transform, "translate(-140px, -70px) rotate(-25deg) scale(0.95)");
        assert_eq!(left.z_index, 20);

        let right = main_item_style(ItemKind::Smiley, true, focus);
        assert_eq!(right.transform, "translate(15px, -120px) rotate(0deg) scale(1.15)");
        assert_eq!(right.z_index, 30);

        let smiley = main_item_style(ItemKind::Smiley, true, Some(ItemKind::Smiley));
        assert_eq!(smiley.transform, "translate(0px, -135px) rotate(0deg) scale(1.4)");
    }

    #[test]
    fn decorative_arc_follows_table() {
        assert_eq!(decor_style(0, false), "transform: translateY(0px); opacity: 0;");
        assert_eq!(
            decor_style(2, true),
            "transform: translate(0px, -225px) rotate(0deg) scale(1.1); opacity: 1;"
        );
        assert_eq!(
            decor_style(4, true),
            "transform: translate(120px, -190px) rotate(12deg) scale(1); opacity: 1;"
        );
    }

    #[test]
    fn item_css_includes_blur_only_when_set() {
        let css = main_item_style(ItemKind::Wordpress, false, None).css();
        assert!(css.contains("filter: blur(2px);"));
        let css = main_item_style(ItemKind::Wordpress, true, None).css();
        assert!(css.contains("filter: none;"));
    }

    #[test]
    fn unchanged_state_is_not_reallocated() {
        let state = Rc::new(FolderState::default());
        let next = state.clone().reduce(FolderAction::MouseMove);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
