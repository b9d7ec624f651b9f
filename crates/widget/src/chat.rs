use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::use_widget_config;
use crate::transcript::{normalize_question, Sender, TranscriptEntry};

/// Fixed reply shown when the question-answering API cannot be reached or
/// answers with something unusable.
pub const FALLBACK_ANSWER: &str = "Lo siento, hubo un error al obtener la respuesta.";

const SEND_LABEL: &str = "Enviar";
const SENDING_LABEL: &str = "Pensando...";

#[component]
pub fn ChatPanel() -> impl IntoView {
    let config = use_widget_config();
    let api_url = StoredValue::new(config.api_url);

    let (entries, set_entries) = signal(Vec::<TranscriptEntry>::new());
    let (input, set_input) = signal(String::new());
    let (in_flight, set_in_flight) = signal(false);

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view after every append.
    Effect::new(move |_| {
        entries.track();
        if let Some(div) = messages_ref.get() {
            div.set_scroll_top(div.scroll_height());
        }
    });

    let submit = move || {
        // Synchronous gate: the disabled attribute alone can lose a race
        // against a second trigger in the same tick.
        if in_flight.get_untracked() {
            return;
        }
        let Some(question) = normalize_question(&input.get_untracked()) else {
            return;
        };

        set_entries.update(|list| list.push(TranscriptEntry::new(Sender::User, question.clone())));
        set_input.set(String::new());
        set_in_flight.set(true);

        spawn_local(async move {
            let url = api_url.get_value();
            let entry = match api::ask(&url, question).await {
                Ok(response) => TranscriptEntry::new(Sender::Bot, response.answer),
                Err(e) => {
                    log::error!("ask request failed: {e}");
                    TranscriptEntry::new(Sender::Bot, FALLBACK_ANSWER)
                }
            };
            set_entries.update(|list| list.push(entry));
            set_in_flight.set(false);
        });
    };

    view! {
        <div class="chatbot-chat">
            <div class="chatbot-messages" node_ref=messages_ref>
                <For
                    each=move || entries.get()
                    key=|entry| entry.id
                    children=move |entry: TranscriptEntry| {
                        view! {
                            <p class=entry.sender.css_class()>
                                <strong>{entry.sender.label()}{": "}</strong>
                                {entry.text}
                            </p>
                        }
                    }
                />
            </div>
            <div class="chatbot-input-row">
                <input
                    type="text"
                    class="chatbot-input"
                    placeholder="Escribe tu pregunta..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            submit();
                        }
                    }
                />
                <button
                    class="chatbot-send"
                    disabled=move || in_flight.get()
                    on:click=move |_| submit()
                >
                    {move || if in_flight.get() { SENDING_LABEL } else { SEND_LABEL }}
                </button>
            </div>
        </div>
    }
}
