use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ExpandIcon)]
pub fn expand_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width="24" height="24" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M15 3h6v6" />
            <path d="M9 21H3v-6" />
            <path d="M21 3l-7 7" />
            <path d="M3 21l7-7" />
        </svg>
    }
}

#[function_component(RefreshIcon)]
pub fn refresh_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width="24" height="24" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8" />
            <path d="M3 3v5h5" />
        </svg>
    }
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width="20" height="20" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round">
            <path d="M18 6L6 18M6 6l12 12" />
        </svg>
    }
}

#[function_component(BackIcon)]
pub fn back_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width="20" height="20" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d="M19 12H5M12 19l-7-7 7-7" />
        </svg>
    }
}

#[function_component(SendIcon)]
pub fn send_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width="16" height="16" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <line x1="22" y1="2" x2="11" y2="13" />
            <polygon points="22 2 15 22 11 13 2 9 22 2" />
        </svg>
    }
}

#[function_component(CheckIcon)]
pub fn check_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width="32" height="32" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="3" stroke-linecap="round" stroke-linejoin="round">
            <polyline points="20 6 9 17 4 12" />
        </svg>
    }
}

#[function_component(SpinnerIcon)]
pub fn spinner_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} width="16" height="16" viewBox="0 0 24 24" fill="none">
            <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4" opacity="0.25" />
            <path fill="currentColor" opacity="0.75"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z" />
        </svg>
    }
}

/// Closed marble composition book.
#[function_component(NotebookIcon)]
pub fn notebook_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.clone()} viewBox="0 0 200 260"
            style="filter: drop-shadow(5px 10px 15px rgba(0,0,0,0.25));">
            <defs>
                <pattern id="marblePattern" x="0" y="0" width="40" height="40" patternUnits="userSpaceOnUse">
                    <rect width="40" height="40" fill="#121212" />
                    <path d="M5 5q5 -5 10 0t5 10q-5 5 -10 0t-5 -10" fill="none" stroke="#e0e0e0" stroke-width="1" opacity="0.5" />
                    <path d="M25 25q5 -5 10 0t5 10q-5 5 -10 0t-5 -10" fill="none" stroke="#e0e0e0" stroke-width="1" opacity="0.5" />
                    <circle cx="10" cy="30" r="1" fill="#e0e0e0" opacity="0.6" />
                    <circle cx="30" cy="10" r="1.5" fill="#e0e0e0" opacity="0.4" />
                </pattern>
            </defs>
            <rect x="10" y="5" width="180" height="250" rx="4" fill="url(#marblePattern)" />
            <rect x="10" y="5" width="28" height="250" rx="2" fill="#0a0a0a" />
            <line x1="38" y1="5" x2="38" y2="255" stroke="#222" stroke-width="1" />
            <g transform="translate(45, 60)">
                <rect x="0" y="0" width="120" height="80" rx="2" fill="#fdf5e6" stroke="#dcdcdc" stroke-width="1" />
                <rect x="6" y="6" width="108" height="68" fill="none" stroke="#000" stroke-width="1.5" />
                <text x="60" y="38" text-anchor="middle" font-family="serif" font-weight="900" font-size="15" fill="black">
                    {"COMPOSITIONS"}
                </text>
                <line x1="15" y1="50" x2="105" y2="50" stroke="#000" stroke-width="0.5" />
                <line x1="15" y1="62" x2="105" y2="62" stroke="#000" stroke-width="0.5" />
                <text x="15" y="48" font-size="6" font-family="sans-serif" font-weight="bold">{"NAME"}</text>
            </g>
        </svg>
    }
}

/// Composition book lying open, ruled on both pages.
#[function_component(OpenNotebookIcon)]
pub fn open_notebook_icon(props: &IconProps) -> Html {
    let ruled = |x1: u32, x2: u32| {
        (0..8u32)
            .map(|i| {
                let y = (40 + i * 18).to_string();
                html! { <line x1={x1.to_string()} y1={y.clone()} x2={x2.to_string()} y2={y} /> }
            })
            .collect::<Html>()
    };

    html! {
        <svg class={props.class.clone()} viewBox="0 0 280 200"
            style="filter: drop-shadow(10px 15px 20px rgba(0,0,0,0.2));">
            <defs>
                <linearGradient id="spineShadow" x1="0%" y1="0%" x2="100%" y2="0%">
                    <stop offset="0%" stop-color="rgba(0,0,0,0)" />
                    <stop offset="50%" stop-color="rgba(0,0,0,0.1)" />
                    <stop offset="100%" stop-color="rgba(0,0,0,0)" />
                </linearGradient>
            </defs>
            <rect x="0" y="10" width="280" height="180" rx="2" fill="#121212" />
            <rect x="10" y="15" width="125" height="170" fill="#fdf5e6" />
            <g stroke="#a0a0a0" stroke-width="0.5">{ ruled(20, 125) }</g>
            <rect x="135" y="15" width="125" height="170" fill="#fdf5e6" />
            <g stroke="#a0a0a0" stroke-width="0.5">{ ruled(145, 250) }</g>
            <rect x="125" y="15" width="20" height="170" fill="url(#spineShadow)" />
            <line x1="30" y1="15" x2="30" y2="185" stroke="#ffcccc" stroke-width="1" />
            <line x1="155" y1="15" x2="155" y2="185" stroke="#ffcccc" stroke-width="1" />
        </svg>
    }
}
