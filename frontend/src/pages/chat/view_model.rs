use crate::api::{ApiError, ChatHistoryResponse, ChatReply, ChatRequest};
use crate::pages::chat::{repository::ChatRepository, transcript::Transcript};
use crate::state::{app::AppContext, session::SessionStore};
use leptos::*;

#[derive(Clone, Copy)]
pub struct ChatViewModel {
    pub transcript: RwSignal<Transcript>,
    pub loading_history: RwSignal<bool>,
    pub session_id: RwSignal<Option<String>>,
    pub send_action: Action<ChatRequest, Result<ChatReply, ApiError>>,
    pub history_action: Action<String, Result<ChatHistoryResponse, ApiError>>,
}

/// Appends the optimistic user message and builds the request to send.
/// Overlap is prevented by the disabled input, not here.
fn prepare_send(
    text: &str,
    transcript: RwSignal<Transcript>,
    session_id: RwSignal<Option<String>>,
) -> Option<ChatRequest> {
    let mut message = None;
    transcript.update(|t| message = t.begin_send(text));
    message.map(|message| ChatRequest {
        message,
        session_id: session_id.get_untracked(),
    })
}

fn apply_optional_send_result(
    result: Option<Result<ChatReply, ApiError>>,
    transcript: RwSignal<Transcript>,
    session_id: RwSignal<Option<String>>,
    session: &SessionStore,
) {
    if let Some(result) = result {
        let mut assigned = None;
        transcript.update(|t| assigned = t.finish_send(result));
        if let Some(id) = assigned {
            adopt_session_id(id, session_id, session);
        }
    }
}

/// Switches to the server-assigned session. The value is persisted only when
/// it differs from the current one.
fn adopt_session_id(id: String, session_id: RwSignal<Option<String>>, session: &SessionStore) {
    if session_id.with_untracked(|current| current.as_deref() == Some(id.as_str())) {
        return;
    }
    if let Err(err) = session.set_chat_session_id(&id) {
        log::warn!("could not persist chat session: {}", err);
    }
    session_id.set(Some(id));
}

fn apply_optional_history_result(
    result: Option<Result<ChatHistoryResponse, ApiError>>,
    transcript: RwSignal<Transcript>,
    loading_history: RwSignal<bool>,
) {
    if let Some(result) = result {
        match result {
            Ok(history) => transcript.update(|t| t.replace_with_history(history.messages)),
            Err(err) => log::error!("error loading chat history: {}", err),
        }
        loading_history.set(false);
    }
}

impl ChatViewModel {
    pub fn new(ctx: &AppContext) -> Self {
        let repository = store_value(ChatRepository::new(ctx.api.clone()));
        let session = store_value(ctx.session.clone());

        let transcript = create_rw_signal(Transcript::default());
        let loading_history = create_rw_signal(false);
        let session_id = create_rw_signal(ctx.session.chat_session_id());

        let send_action = create_action(move |request: &ChatRequest| {
            let repo = repository.get_value();
            let request = request.clone();
            async move { repo.send(request).await }
        });

        let history_action = create_action(move |session_id: &String| {
            let repo = repository.get_value();
            let session_id = session_id.clone();
            async move { repo.history(&session_id).await }
        });

        create_effect(move |_| {
            if let Some(id) = session_id.get() {
                loading_history.set(true);
                history_action.dispatch(id);
            }
        });

        create_effect(move |_| {
            let result = send_action.value().get();
            session.with_value(|store| {
                apply_optional_send_result(result, transcript, session_id, store)
            });
        });

        create_effect(move |_| {
            apply_optional_history_result(
                history_action.value().get(),
                transcript,
                loading_history,
            );
        });

        Self {
            transcript,
            loading_history,
            session_id,
            send_action,
            history_action,
        }
    }

    /// Sends `text` unless it is blank.
    pub fn send(&self, text: &str) {
        if let Some(request) = prepare_send(text, self.transcript, self.session_id) {
            self.send_action.dispatch(request);
        }
    }

    pub fn busy(&self) -> Signal<bool> {
        let transcript = self.transcript;
        Signal::derive(move || transcript.with(|t| t.busy))
    }
}
