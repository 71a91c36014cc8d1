use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::CONFIG;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Placement {
    Top,
    Bottom,
}

#[derive(Properties, PartialEq)]
pub struct StickerTooltipProps {
    pub id: u8,
    pub is_open: bool,
    pub on_toggle: Callback<u8>,
    #[prop_or(Placement::Top)]
    pub placement: Placement,
    #[prop_or_default]
    pub children: Children,
}

/// Click-to-reveal tooltip around a sticker. Which tooltip is open is owned
/// by the folder, so only one shows at a time.
#[function_component(StickerTooltip)]
pub fn sticker_tooltip(props: &StickerTooltipProps) -> Html {
    let onclick = {
        let id = props.id;
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            // Keep the folder background from closing it straight away
            e.stop_propagation();
            on_toggle.emit(id);
        })
    };

    let tip_class = classes!(
        "sticker-tip",
        match props.placement {
            Placement::Top => "sticker-tip--top",
            Placement::Bottom => "sticker-tip--bottom",
        },
        props.is_open.then(|| "sticker-tip--open"),
    );

    html! {
        <div
            class="sticker"
            style={if props.is_open { "z-index: 100;" } else { "z-index: auto;" }}
            onclick={onclick}
        >
            <div class="sticker__body">
                { for props.children.iter() }
            </div>
            <div class={tip_class}>{ CONFIG.sticker_tooltip(props.id) }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StickerImageProps {
    pub file: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Sticker art from the image host; a broken image just disappears.
#[function_component(StickerImage)]
pub fn sticker_image(props: &StickerImageProps) -> Html {
    let onerror = Callback::from(|e: Event| {
        let img: HtmlElement = e.target_unchecked_into();
        let _ = img.style().set_property("display", "none");
    });

    html! {
        <img
            class={classes!("sticker__img", props.class.clone())}
            src={CONFIG.image_url(&props.file)}
            alt={props.alt.clone()}
            draggable="false"
            onerror={onerror}
        />
    }
}

pub struct FrontSticker {
    pub id: u8,
    pub alt: &'static str,
    pub class: &'static str,
    pub delay: &'static str,
    pub placement: Placement,
}

/// Stickers glued to the front of the folder, ids 1..=4.
pub const FRONT_STICKERS: [FrontSticker; 4] = [
    FrontSticker { id: 1, alt: "Flower Sticker", class: "front-sticker--flower", delay: "0s", placement: Placement::Top },
    FrontSticker { id: 3, alt: "Headphone Sticker", class: "front-sticker--headphone", delay: "1.2s", placement: Placement::Bottom },
    FrontSticker { id: 4, alt: "Camera Sticker", class: "front-sticker--camera", delay: "0.5s", placement: Placement::Top },
    FrontSticker { id: 2, alt: "Bitcoin Sticker", class: "front-sticker--bitcoin", delay: "2s", placement: Placement::Top },
];

pub struct DecorativeSticker {
    pub id: u8,
    pub size_px: u32,
    pub delay: &'static str,
}

/// Stickers that float up out of the folder when it opens, ids 5..=9.
pub const DECORATIVE_STICKERS: [DecorativeSticker; 5] = [
    DecorativeSticker { id: 5, size_px: 64, delay: "0s" },
    DecorativeSticker { id: 6, size_px: 96, delay: "1s" },
    DecorativeSticker { id: 7, size_px: 64, delay: "2.5s" },
    DecorativeSticker { id: 8, size_px: 112, delay: "1.5s" },
    DecorativeSticker { id: 9, size_px: 80, delay: "0.5s" },
];

pub fn sticker_file(id: u8) -> String {
    format!("{}.png", id)
}

pub const STICKER_CSS: &str = r#"
.sticker {
    position: relative;
    width: 100%;
    height: 100%;
    pointer-events: auto;
    cursor: pointer;
    touch-action: manipulation;
    transition: all 0.3s ease;
}
.sticker__body { width: 100%; height: 100%; transition: transform 0.3s ease-out; }
.sticker:hover .sticker__body { transform: scale(1.1); }
.sticker:active .sticker__body { transform: scale(0.95); }
.sticker__img {
    width: 100%;
    height: 100%;
    object-fit: contain;
    filter: drop-shadow(0 4px 6px rgba(0, 0, 0, 0.15));
}
.sticker-tip {
    position: absolute;
    left: 50%;
    width: max-content;
    max-width: 100px;
    padding: 6px 8px;
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(12px);
    border: 1px solid rgba(255, 255, 255, 0.5);
    border-radius: 0.5rem;
    color: #1f2937;
    font-size: 7px;
    font-weight: 500;
    line-height: 1.1;
    text-align: center;
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
    pointer-events: none;
    opacity: 0;
    transition: all 0.3s cubic-bezier(0.175, 0.885, 0.32, 1.275);
}
.sticker-tip--top { bottom: 100%; margin-bottom: 2px; transform: translate(-50%, 4px) scale(0.9); transform-origin: bottom; }
.sticker-tip--bottom { top: 100%; margin-top: 2px; transform: translate(-50%, -4px) scale(0.9); transform-origin: top; }
.sticker-tip--open { opacity: 1; transform: translate(-50%, 0) scale(1); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticker_ids_cover_the_tooltips() {
        let mut ids: Vec<u8> = FRONT_STICKERS
            .iter()
            .map(|s| s.id)
            .chain(DECORATIVE_STICKERS.iter().map(|s| s.id))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (1..=9).collect::<Vec<u8>>());
        for id in ids {
            assert!(!CONFIG.sticker_tooltip(id).is_empty());
        }
    }

    #[test]
    fn sticker_files_follow_ids() {
        assert_eq!(sticker_file(7), "7.png");
    }
}
