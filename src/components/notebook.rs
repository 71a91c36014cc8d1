use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{
    CheckIcon, CloseIcon, NotebookIcon, OpenNotebookIcon, SendIcon, SpinnerIcon,
};
use crate::config;

/// How long the modal keeps its contents after closing, so the fade-out
/// doesn't show an empty form.
pub const RESET_DELAY_MS: u32 = 300;
pub const SIMULATED_SEND_MS: u32 = 1_500;
pub const SEND_FAILED_ALERT: &str = "Oops, the notebook couldn't be sent. Please try again.";
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Form,
    Writing,
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NotebookState {
    pub stage: Stage,
    pub name: String,
    pub topic: String,
    pub message: String,
    pub contact: String,
    pub sending: bool,
    /// Bumped on every reset. A send only lands in the session it started in.
    pub generation: u32,
}

impl Default for NotebookState {
    fn default() -> Self {
        Self {
            stage: Stage::Form,
            name: String::new(),
            topic: String::new(),
            message: String::new(),
            contact: String::new(),
            sending: false,
            generation: 0,
        }
    }
}

pub enum NotebookAction {
    SetName(String),
    SetTopic(String),
    SetMessage(String),
    SetContact(String),
    StartWriting,
    SendStarted(u32),
    SendSucceeded(u32),
    SendFailed(u32),
    Reset,
}

impl NotebookAction {
    pub fn from_outcome(outcome: &Result<(), SubmitError>, generation: u32) -> Self {
        match outcome {
            Ok(()) => NotebookAction::SendSucceeded(generation),
            Err(_) => NotebookAction::SendFailed(generation),
        }
    }
}

/// Action to dispatch for a finished send, plus the alert to show. Sends from
/// an earlier session still dispatch (the reducer drops them) but never alert.
pub fn settle(
    outcome: &Result<(), SubmitError>,
    sent_in: u32,
    current: u32,
) -> (NotebookAction, Option<&'static str>) {
    let alert = match outcome {
        Err(_) if sent_in == current => Some(SEND_FAILED_ALERT),
        _ => None,
    };
    (NotebookAction::from_outcome(outcome, sent_in), alert)
}

/// The reset timer only starts when an open notebook closes.
pub fn schedules_reset(was_open: bool, is_open: bool) -> bool {
    was_open && !is_open
}

impl NotebookState {
    pub fn can_start_writing(&self) -> bool {
        !self.name.trim().is_empty() && !self.topic.trim().is_empty()
    }

    pub fn apply(mut self, action: NotebookAction) -> Self {
        match action {
            NotebookAction::SetName(name) => self.name = name,
            NotebookAction::SetTopic(topic) => self.topic = topic,
            NotebookAction::SetMessage(message) => self.message = message,
            NotebookAction::SetContact(contact) => self.contact = contact,
            NotebookAction::StartWriting => {
                if self.stage == Stage::Form && self.can_start_writing() {
                    self.stage = Stage::Writing;
                }
            }
            NotebookAction::SendStarted(generation) => {
                if generation == self.generation && self.stage == Stage::Writing {
                    self.sending = true;
                }
            }
            NotebookAction::SendSucceeded(generation) => {
                if generation == self.generation && self.stage == Stage::Writing && self.sending {
                    self.sending = false;
                    self.stage = Stage::Success;
                }
            }
            NotebookAction::SendFailed(generation) => {
                if generation == self.generation {
                    self.sending = false;
                }
            }
            NotebookAction::Reset => {
                return Self {
                    generation: self.generation.wrapping_add(1),
                    ..Self::default()
                }
            }
        }
        self
    }
}

impl Reducible for NotebookState {
    type Action = NotebookAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NotebookEntry {
    pub timestamp: String,
    pub name: String,
    pub contact: String,
    pub topic: String,
    pub message: String,
}

impl NotebookEntry {
    pub fn from_state(state: &NotebookState, timestamp: String) -> Self {
        Self {
            timestamp,
            name: state.name.clone(),
            contact: state.contact.clone(),
            topic: state.topic.clone(),
            message: state.message.clone(),
        }
    }

    /// `application/x-www-form-urlencoded` body for the webhook.
    pub fn form_body(&self) -> String {
        [
            ("timestamp", &self.timestamp),
            ("name", &self.name),
            ("topic", &self.topic),
            ("message", &self.message),
            ("contact", &self.contact),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("webhook answered with status {0}")]
    Status(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Simulated,
    Webhook(&'static str),
}

impl Destination {
    pub fn from_url(url: Option<&'static str>) -> Self {
        url.map_or(Destination::Simulated, Destination::Webhook)
    }

    pub fn configured() -> Self {
        Self::from_url(config::webhook_url())
    }

    pub fn plan(self, entry: &NotebookEntry) -> SendPlan {
        match self {
            Destination::Simulated => SendPlan::Simulate { delay_ms: SIMULATED_SEND_MS },
            Destination::Webhook(url) => SendPlan::Post {
                url,
                content_type: FORM_CONTENT_TYPE,
                body: entry.form_body(),
            },
        }
    }
}

/// What a send will do, decided before anything touches the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendPlan {
    Simulate { delay_ms: u32 },
    Post { url: &'static str, content_type: &'static str, body: String },
}

pub async fn submit(entry: &NotebookEntry, destination: Destination) -> Result<(), SubmitError> {
    match destination.plan(entry) {
        SendPlan::Simulate { delay_ms } => {
            info!(
                "No webhook configured, simulating save: {}",
                serde_json::to_string(entry).unwrap_or_default()
            );
            if let Ok(value) = serde_wasm_bindgen::to_value(entry) {
                web_sys::console::table_1(&value);
            }
            gloo_timers::future::TimeoutFuture::new(delay_ms).await;
            Ok(())
        }
        SendPlan::Post { url, content_type, body } => {
            let response = Request::post(url)
                .header("Content-Type", content_type)
                .body(body)
                .send()
                .await
                .map_err(|e| SubmitError::Network(e.to_string()))?;
            if response.ok() {
                Ok(())
            } else {
                Err(SubmitError::Status(response.status()))
            }
        }
    }
}

fn timestamp_now() -> String {
    chrono::Local::now().format("%d/%m/%Y, %H:%M:%S").to_string()
}

#[derive(Properties, PartialEq)]
pub struct NotebookModalProps {
    pub is_open: bool,
    pub on_close: Callback<()>,
}

#[function_component(NotebookModal)]
pub fn notebook_modal(props: &NotebookModalProps) -> Html {
    let state = use_reducer(NotebookState::default);
    let was_open = use_mut_ref(|| false);
    // Read by in-flight sends once they finish
    let live_generation = use_mut_ref(|| 0u32);
    *live_generation.borrow_mut() = state.generation;

    // Clear the notebook a moment after it closes; reopening first cancels the reset
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |is_open| {
                let previously_open = was_open.replace(*is_open);
                let pending = schedules_reset(previously_open, *is_open).then(|| {
                    Timeout::new(RESET_DELAY_MS, move || dispatcher.dispatch(NotebookAction::Reset))
                });
                move || drop(pending)
            },
            props.is_open,
        );
    }

    if !props.is_open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_name = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(NotebookAction::SetName(input.value()));
        })
    };
    let on_topic = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(NotebookAction::SetTopic(input.value()));
        })
    };
    let on_message = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(NotebookAction::SetMessage(input.value()));
        })
    };
    let on_contact = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(NotebookAction::SetContact(input.value()));
        })
    };

    let start_writing = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NotebookAction::StartWriting))
    };

    let send = {
        let state = state.clone();
        let live_generation = live_generation.clone();
        Callback::from(move |_: MouseEvent| {
            if state.sending || state.stage != Stage::Writing {
                return;
            }
            let entry = NotebookEntry::from_state(&state, timestamp_now());
            let generation = state.generation;
            let dispatcher = state.dispatcher();
            let live_generation = live_generation.clone();
            dispatcher.dispatch(NotebookAction::SendStarted(generation));
            spawn_local(async move {
                let outcome = submit(&entry, Destination::configured()).await;
                match &outcome {
                    Ok(()) => info!("Notebook entry from {} saved", entry.name),
                    Err(e) => error!("Failed to send notebook entry: {}", e),
                }
                let (action, alert) = settle(&outcome, generation, *live_generation.borrow());
                if let (Some(message), Some(window)) = (alert, web_sys::window()) {
                    let _ = window.alert_with_message(message);
                }
                dispatcher.dispatch(action);
            });
        })
    };

    let frame_class = match state.stage {
        Stage::Form => "notebook__frame notebook__frame--closed",
        _ => "notebook__frame notebook__frame--open",
    };

    html! {
        <div class="notebook" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
            <div class={frame_class}>
                <button class="notebook__close" onclick={close.clone()}>
                    <CloseIcon />
                </button>

                <div class="notebook__cover">
                    if state.stage == Stage::Form {
                        <NotebookIcon class="notebook__art" />
                    } else {
                        <OpenNotebookIcon class="notebook__art" />
                    }
                </div>

                {
                    match state.stage {
                        Stage::Form => html! {
                            <div class="notebook__form">
                                <h3>{"thanks for jumping in!"}</h3>
                                <p>{"your name is?"}</p>
                                <input
                                    type="text"
                                    value={state.name.clone()}
                                    oninput={on_name}
                                    placeholder="Enter your name..."
                                />
                                <p>{"what you want to talk about :) ?"}</p>
                                <textarea
                                    value={state.topic.clone()}
                                    oninput={on_topic}
                                    placeholder="share me your topic"
                                />
                                <button
                                    class="notebook__start"
                                    onclick={start_writing}
                                    disabled={!state.can_start_writing()}
                                >
                                    {"Start Writing"}
                                </button>
                            </div>
                        },
                        Stage::Writing => html! {
                            <div class="notebook__pages">
                                <div class="notebook__left">
                                    <div class="notebook__header">
                                        <div><span class="notebook__key">{"From:"}</span><span class="notebook__from">{state.name.clone()}</span></div>
                                        <div><span class="notebook__key">{"To:"}</span><span>{"Maddy"}</span></div>
                                        <div><span class="notebook__key">{"Topic:"}</span><span class="notebook__topic">{state.topic.clone()}</span></div>
                                    </div>
                                    <textarea
                                        class="notebook__message"
                                        value={state.message.clone()}
                                        oninput={on_message}
                                        placeholder="Click here to start writing..."
                                    />
                                </div>
                                <div class="notebook__right">
                                    <label>{"Leave your contact (optional)"}</label>
                                    <input
                                        type="text"
                                        class="notebook__contact"
                                        value={state.contact.clone()}
                                        oninput={on_contact}
                                        placeholder="Email or Phone..."
                                    />
                                    <button class="notebook__send" onclick={send} disabled={state.sending}>
                                        if state.sending {
                                            <SpinnerIcon class="spin" />
                                            <span>{"Saving..."}</span>
                                        } else {
                                            <span>{"Send to Maddy"}</span>
                                            <SendIcon />
                                        }
                                    </button>
                                </div>
                            </div>
                        },
                        Stage::Success => html! {
                            <div class="notebook__success">
                                <div class="notebook__card">
                                    <div class="notebook__check"><CheckIcon /></div>
                                    <h3>{"thanks !"}</h3>
                                    <p>{"I'll soon read it and get back to you!"}</p>
                                    <p class="notebook__muted">{"hope you have a nice day"}</p>
                                    <button class="notebook__done" onclick={close}>{"Close"}</button>
                                </div>
                            </div>
                        },
                    }
                }
            </div>
            <style>
                {r#"
                .notebook {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    pointer-events: none;
                    animation: fadeIn 0.3s ease;
                }
                .notebook__frame {
                    position: relative;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    pointer-events: auto;
                    padding: 1.25rem;
                    background: rgba(255, 255, 255, 0.3);
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    border-radius: 32px;
                    box-shadow: 0 20px 50px rgba(0, 0, 0, 0.35);
                    transition: all 0.5s ease-in-out;
                }
                .notebook__frame--closed { max-width: 24rem; aspect-ratio: 3 / 4; }
                .notebook__frame--open { max-width: 48rem; aspect-ratio: 1.4 / 1; }
                .notebook__close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 60;
                    padding: 0.5rem;
                    border: none;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.4);
                    color: rgba(31, 41, 55, 0.7);
                    cursor: pointer;
                }
                .notebook__close:hover { color: #dc2626; background: rgba(255, 255, 255, 0.8); }
                .notebook__cover {
                    position: absolute;
                    inset: 1.25rem;
                    pointer-events: none;
                }
                .notebook__art { width: 100%; height: 100%; }
                .notebook__form {
                    position: relative;
                    z-index: 10;
                    width: 85%;
                    padding: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                    background: rgba(255, 255, 255, 0.2);
                    backdrop-filter: blur(24px);
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    border-radius: 1rem;
                    color: white;
                }
                .notebook__form input,
                .notebook__form textarea {
                    width: 100%;
                    margin-bottom: 0.75rem;
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: rgba(255, 255, 255, 0.8);
                    text-align: center;
                    resize: none;
                }
                .notebook__start {
                    width: 100%;
                    padding: 0.75rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    background: rgba(0, 0, 0, 0.4);
                    color: white;
                    font-weight: 600;
                    cursor: pointer;
                }
                .notebook__start:disabled { opacity: 0.5; cursor: not-allowed; }
                .notebook__pages { position: absolute; inset: 1.25rem; display: flex; }
                .notebook__left {
                    position: absolute;
                    top: 10%;
                    bottom: 10%;
                    left: 4%;
                    right: 52%;
                    padding: 0.5rem 1rem;
                    display: flex;
                    flex-direction: column;
                }
                .notebook__header {
                    margin-bottom: 0.5rem;
                    padding-bottom: 0.5rem;
                    border-bottom: 1px solid rgba(209, 213, 219, 0.6);
                    font-family: serif;
                    font-size: 0.75rem;
                    color: #374151;
                }
                .notebook__key { display: inline-block; width: 2.5rem; font-weight: 700; opacity: 0.7; }
                .notebook__from { font-style: italic; }
                .notebook__topic { color: #1e40af; }
                .notebook__message {
                    flex: 1;
                    border: none;
                    outline: none;
                    resize: none;
                    background: transparent;
                    font-family: serif;
                    font-size: 14px;
                    line-height: 24px;
                    color: #1f2937;
                }
                .notebook__right {
                    position: absolute;
                    top: 10%;
                    bottom: 10%;
                    left: 52%;
                    right: 4%;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    gap: 1.5rem;
                    text-align: center;
                }
                .notebook__right label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #6b7280;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }
                .notebook__contact {
                    width: 80%;
                    border: none;
                    border-bottom: 1px solid #9ca3af;
                    background: transparent;
                    text-align: center;
                    font-family: serif;
                    outline: none;
                }
                .notebook__send {
                    width: 80%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border: none;
                    border-radius: 0.25rem;
                    background: black;
                    color: white;
                    cursor: pointer;
                }
                .notebook__send:disabled { opacity: 0.7; cursor: wait; }
                .notebook__success {
                    position: absolute;
                    inset: 0;
                    z-index: 20;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1.5rem;
                }
                .notebook__card {
                    max-width: 28rem;
                    padding: 2rem;
                    text-align: center;
                    background: rgba(255, 255, 255, 0.9);
                    border-radius: 1rem;
                    transform: rotate(1deg);
                }
                .notebook__check {
                    width: 4rem;
                    height: 4rem;
                    margin: 0 auto 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: #dcfce7;
                    color: #16a34a;
                }
                .notebook__muted { color: #6b7280; font-size: 0.875rem; font-style: italic; }
                .notebook__done {
                    margin-top: 1.5rem;
                    padding: 0.5rem 2rem;
                    border: none;
                    border-radius: 9999px;
                    background: black;
                    color: white;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> NotebookState {
        NotebookState::default()
            .apply(NotebookAction::SetName("Linh".to_string()))
            .apply(NotebookAction::SetTopic("podcast collab".to_string()))
    }

    #[test]
    fn blank_name_or_topic_keeps_form() {
        let cases = [("", "topic"), ("name", ""), ("   ", "topic"), ("name", " \n\t"), ("", "")];
        for (name, topic) in cases {
            let state = NotebookState::default()
                .apply(NotebookAction::SetName(name.to_string()))
                .apply(NotebookAction::SetTopic(topic.to_string()))
                .apply(NotebookAction::StartWriting);
            assert_eq!(state.stage, Stage::Form, "name={name:?} topic={topic:?}");
        }
    }

    #[test]
    fn filled_form_moves_to_writing() {
        let state = filled().apply(NotebookAction::StartWriting);
        assert_eq!(state.stage, Stage::Writing);
    }

    #[test]
    fn success_only_after_send_from_writing() {
        // Straight from the form, a stray success does nothing
        let state = filled().apply(NotebookAction::SendSucceeded(0));
        assert_eq!(state.stage, Stage::Form);

        let state = filled()
            .apply(NotebookAction::StartWriting)
            .apply(NotebookAction::SendStarted(0));
        assert!(state.sending);

        let state = state.apply(NotebookAction::from_outcome(&Ok(()), 0));
        assert_eq!(state.stage, Stage::Success);
        assert!(!state.sending);
    }

    #[test]
    fn failed_send_stays_on_writing_with_fields_intact() {
        let state = filled()
            .apply(NotebookAction::StartWriting)
            .apply(NotebookAction::SetMessage("hello!".to_string()))
            .apply(NotebookAction::SetContact("linh@example.com".to_string()))
            .apply(NotebookAction::SendStarted(0))
            .apply(NotebookAction::from_outcome(&Err(SubmitError::Status(500)), 0));

        assert_eq!(state.stage, Stage::Writing);
        assert!(!state.sending);
        assert_eq!(state.message, "hello!");
        assert_eq!(state.contact, "linh@example.com");

        let state = state.apply(NotebookAction::from_outcome(
            &Err(SubmitError::Network("offline".to_string())),
            0,
        ));
        assert_eq!(state.stage, Stage::Writing);
    }

    #[test]
    fn reset_clears_everything() {
        let state = filled()
            .apply(NotebookAction::StartWriting)
            .apply(NotebookAction::SetMessage("hi".to_string()))
            .apply(NotebookAction::SetContact("@linh".to_string()))
            .apply(NotebookAction::SendStarted(0))
            .apply(NotebookAction::Reset);
        assert_eq!(state, NotebookState { generation: 1, ..NotebookState::default() });
        assert_eq!(state.stage, Stage::Form);
        assert!(!state.sending);
        assert!(state.name.is_empty() && state.topic.is_empty());
        assert!(state.message.is_empty() && state.contact.is_empty());
    }

    #[test]
    fn late_success_after_reset_is_ignored() {
        let state = filled()
            .apply(NotebookAction::StartWriting)
            .apply(NotebookAction::SendStarted(0))
            .apply(NotebookAction::Reset)
            .apply(NotebookAction::SendSucceeded(0));
        assert_eq!(state, NotebookState { generation: 1, ..NotebookState::default() });
    }

    /// First session sends then closes; the second session starts its own send.
    fn second_session_sending() -> NotebookState {
        let first = filled()
            .apply(NotebookAction::StartWriting)
            .apply(NotebookAction::SendStarted(0))
            .apply(NotebookAction::Reset);
        let generation = first.generation;
        first
            .apply(NotebookAction::SetName("Minh".to_string()))
            .apply(NotebookAction::SetTopic("workshop".to_string()))
            .apply(NotebookAction::StartWriting)
            .apply(NotebookAction::SendStarted(generation))
    }

    #[test]
    fn stale_failure_keeps_the_newer_send_in_flight() {
        let state = second_session_sending();
        assert!(state.sending);

        let state = state.apply(NotebookAction::SendFailed(0));
        assert!(state.sending);
        assert_eq!(state.stage, Stage::Writing);
        assert_eq!(state.name, "Minh");
    }

    #[test]
    fn stale_success_does_not_finish_the_newer_entry() {
        let state = second_session_sending().apply(NotebookAction::SendSucceeded(0));
        assert_eq!(state.stage, Stage::Writing);
        assert!(state.sending);

        let generation = state.generation;
        let state = state.apply(NotebookAction::SendSucceeded(generation));
        assert_eq!(state.stage, Stage::Success);
    }

    #[test]
    fn failed_send_alerts_and_stays_on_writing() {
        let writing = filled()
            .apply(NotebookAction::StartWriting)
            .apply(NotebookAction::SendStarted(0));

        let (action, alert) = settle(&Err(SubmitError::Status(500)), 0, 0);
        assert_eq!(alert, Some(SEND_FAILED_ALERT));
        let state = writing.apply(action);
        assert_eq!(state.stage, Stage::Writing);
        assert!(!state.sending);
    }

    #[test]
    fn stale_failure_does_not_alert() {
        let (action, alert) = settle(&Err(SubmitError::Network("offline".to_string())), 0, 1);
        assert_eq!(alert, None);
        let state = second_session_sending().apply(action);
        assert!(state.sending);
    }

    #[test]
    fn success_settles_without_alert() {
        let (action, alert) = settle(&Ok(()), 0, 0);
        assert_eq!(alert, None);
        let state = filled()
            .apply(NotebookAction::StartWriting)
            .apply(NotebookAction::SendStarted(0))
            .apply(action);
        assert_eq!(state.stage, Stage::Success);
    }

    #[test]
    fn simulated_send_only_waits() {
        let entry = NotebookEntry::from_state(&filled(), "19/10/2026, 10:00:00".to_string());
        assert_eq!(
            Destination::Simulated.plan(&entry),
            SendPlan::Simulate { delay_ms: SIMULATED_SEND_MS }
        );
    }

    #[test]
    fn webhook_send_posts_the_form_body() {
        let entry = NotebookEntry::from_state(&filled(), "19/10/2026, 10:00:00".to_string());
        assert_eq!(
            Destination::Webhook("https://hooks.example.com/notebook").plan(&entry),
            SendPlan::Post {
                url: "https://hooks.example.com/notebook",
                content_type: "application/x-www-form-urlencoded",
                body: entry.form_body(),
            }
        );
    }

    #[test]
    fn reset_waits_for_a_real_close() {
        assert!(!schedules_reset(false, false));
        assert!(!schedules_reset(false, true));
        assert!(!schedules_reset(true, true));
        assert!(schedules_reset(true, false));
    }

    #[test]
    fn missing_webhook_means_simulation() {
        assert_eq!(Destination::from_url(None), Destination::Simulated);
        assert_eq!(
            Destination::from_url(Some("https://hooks.example.com/notebook")),
            Destination::Webhook("https://hooks.example.com/notebook")
        );
    }

    #[test]
    fn entry_copies_the_form() {
        let state = filled()
            .apply(NotebookAction::SetMessage("hey".to_string()))
            .apply(NotebookAction::SetContact("0905".to_string()));
        let entry = NotebookEntry::from_state(&state, "19/10/2026, 10:00:00".to_string());
        assert_eq!(entry.name, "Linh");
        assert_eq!(entry.topic, "podcast collab");
        assert_eq!(entry.message, "hey");
        assert_eq!(entry.contact, "0905");
    }

    #[test]
    fn form_body_is_urlencoded_in_field_order() {
        let entry = NotebookEntry {
            timestamp: "19/10/2026, 10:00:00".to_string(),
            name: "Linh Tran".to_string(),
            contact: "linh@example.com".to_string(),
            topic: "brand & content".to_string(),
            message: "hi=hello".to_string(),
        };
        assert_eq!(
            entry.form_body(),
            "timestamp=19%2F10%2F2026%2C%2010%3A00%3A00\
             &name=Linh%20Tran\
             &topic=brand%20%26%20content\
             &message=hi%3Dhello\
             &contact=linh%40example.com"
        );
    }

    #[test]
    fn submit_errors_read_well() {
        assert_eq!(
            SubmitError::Status(502).to_string(),
            "webhook answered with status 502"
        );
        assert_eq!(
            SubmitError::Network("offline".to_string()).to_string(),
            "request failed: offline"
        );
    }
}
