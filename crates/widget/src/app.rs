use contracts::chatbot::WidgetConfig;
use leptos::prelude::*;

use crate::chat::ChatPanel;
use crate::upload::UploadPanel;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let can_upload = config.can_upload;

    // Provide the configuration to the whole widget via context.
    provide_context(config);

    view! {
        <div class="chatbot-container">
            <ChatPanel />
            <Show when=move || can_upload>
                <hr class="chatbot-divider" />
                <UploadPanel />
            </Show>
        </div>
    }
}
