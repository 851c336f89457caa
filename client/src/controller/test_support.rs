//! Fakes for driving the controller in native tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

use futures::channel::oneshot;

use super::{ChatController, Delay};
use crate::net::api::ChatBackend;
use crate::net::types::{ApiError, ChatReply, ChatRequest, ConversationTurn, SessionSummary};
use crate::state::prefs::Preferences;
use crate::state::ui::{UiState, UiStore};
use crate::util::storage::MemoryStore;

// =============================================================
// Backend
// =============================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    CreateSession(String),
    ListSessions,
    Conversation(String),
    Chat(ChatRequest),
}

pub struct FakeState {
    pub created: VecDeque<Result<String, ApiError>>,
    pub sessions: Result<Vec<SessionSummary>, ApiError>,
    pub conversations: HashMap<String, Result<Vec<ConversationTurn>, ApiError>>,
    pub chat: Result<ChatReply, ApiError>,
    pub gates: HashMap<String, oneshot::Receiver<()>>,
    pub calls: Vec<Call>,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            created: VecDeque::new(),
            sessions: Ok(Vec::new()),
            conversations: HashMap::new(),
            chat: Err(ApiError::Network("no reply scripted".to_owned())),
            gates: HashMap::new(),
            calls: Vec::new(),
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeBackend {
    pub state: Rc<RefCell<FakeState>>,
}

impl FakeBackend {
    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    pub fn network_calls(&self) -> usize {
        self.state.borrow().calls.len()
    }

    pub fn script_create(&self, result: Result<String, ApiError>) {
        self.state.borrow_mut().created.push_back(result);
    }

    pub fn set_sessions(&self, result: Result<Vec<SessionSummary>, ApiError>) {
        self.state.borrow_mut().sessions = result;
    }

    pub fn set_conversation(&self, session_id: &str, result: Result<Vec<ConversationTurn>, ApiError>) {
        self.state.borrow_mut().conversations.insert(session_id.to_owned(), result);
    }

    pub fn set_chat(&self, result: Result<ChatReply, ApiError>) {
        self.state.borrow_mut().chat = result;
    }

    /// Hold the next conversation fetch for `session_id` until the returned
    /// sender fires.
    pub fn gate_conversation(&self, session_id: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.state.borrow_mut().gates.insert(session_id.to_owned(), rx);
        tx
    }
}

impl ChatBackend for FakeBackend {
    async fn create_session(&self, system_prompt: &str) -> Result<String, ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::CreateSession(system_prompt.to_owned()));
        state
            .created
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no session scripted".to_owned())))
    }

    async fn list_sessions(&self) -> Result<Vec<SessionSummary>, ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::ListSessions);
        state.sessions.clone()
    }

    async fn conversation(&self, session_id: &str) -> Result<Vec<ConversationTurn>, ApiError> {
        let gate = {
            let mut state = self.state.borrow_mut();
            state.calls.push(Call::Conversation(session_id.to_owned()));
            state.gates.remove(session_id)
        };
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.state
            .borrow()
            .conversations
            .get(session_id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply, ApiError> {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Chat(request.clone()));
        state.chat.clone()
    }
}

// =============================================================
// UI store
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub typing: bool,
    pub input_enabled: bool,
}

/// `UiState` cell that records typing/input flags after every update.
#[derive(Clone)]
pub struct RecordingUi {
    pub state: Rc<RefCell<UiState>>,
    pub log: Rc<RefCell<Vec<Snapshot>>>,
}

impl RecordingUi {
    pub fn new(state: UiState) -> Self {
        Self { state: Rc::new(RefCell::new(state)), log: Rc::default() }
    }

    pub fn snapshot(&self) -> UiState {
        self.state.borrow().clone()
    }

    /// Number of `from → !from` flips of a flag across the recorded updates.
    pub fn flips(&self, flag: impl Fn(&Snapshot) -> bool, from: bool) -> usize {
        self.log
            .borrow()
            .windows(2)
            .filter(|pair| flag(&pair[0]) == from && flag(&pair[1]) != from)
            .count()
    }
}

impl UiStore for RecordingUi {
    fn read_state<R>(&self, f: impl FnOnce(&UiState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn update_state(&self, f: impl FnOnce(&mut UiState)) {
        let mut state = self.state.borrow_mut();
        f(&mut state);
        self.log
            .borrow_mut()
            .push(Snapshot { typing: state.typing, input_enabled: state.input_enabled });
    }
}

// =============================================================
// Delay
// =============================================================

/// Resolves immediately; records durations and runs an optional hook, which
/// stands in for whatever the user does while the timer is pending.
#[derive(Clone, Default)]
pub struct NoDelay {
    pub slept: Rc<RefCell<Vec<u32>>>,
    pub on_sleep: Rc<RefCell<Option<Box<dyn FnMut()>>>>,
}

impl NoDelay {
    pub fn set_hook(&self, hook: impl FnMut() + 'static) {
        *self.on_sleep.borrow_mut() = Some(Box::new(hook));
    }
}

impl Delay for NoDelay {
    async fn sleep(&self, ms: u32) {
        self.slept.borrow_mut().push(ms);
        if let Some(hook) = self.on_sleep.borrow_mut().as_mut() {
            hook();
        }
    }
}

// =============================================================
// Harness
// =============================================================

pub type TestController = ChatController<FakeBackend, MemoryStore, RecordingUi, NoDelay>;

pub struct Harness {
    pub ctl: TestController,
    pub backend: FakeBackend,
    pub ui: RecordingUi,
    pub store: MemoryStore,
    pub delay: NoDelay,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::default())
    }

    pub fn with_store(store: MemoryStore) -> Self {
        let backend = FakeBackend::default();
        let ui = RecordingUi::new(UiState::new(false));
        let delay = NoDelay::default();
        let ctl = ChatController::new(backend.clone(), Preferences::new(store.clone()), ui.clone(), delay.clone());
        Self { ctl, backend, ui, store, delay }
    }

    /// Put the controller on `session_id` without touching the backend.
    pub fn with_current(self, session_id: &str) -> Self {
        self.ui.state.borrow_mut().current_session_id = Some(session_id.to_owned());
        self
    }
}

pub fn summary(id: &str, prompt: &str) -> SessionSummary {
    SessionSummary {
        session_id: id.to_owned(),
        system_prompt: prompt.to_owned(),
        created_at: "2024-03-01 10:00:00".to_owned(),
    }
}

pub fn turn(role: &str, content: &str) -> ConversationTurn {
    ConversationTurn {
        role: role.to_owned(),
        content: content.to_owned(),
        timestamp: "2024-03-01 14:05:09".to_owned(),
    }
}
