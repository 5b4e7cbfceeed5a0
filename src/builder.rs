//! Client-side state machine for the component builder page.
//!
//! [`ComponentBuilder`] owns the draft prompt, the framework/styling selection, the latest
//! generated component and the notification area. Generation is `idle -> generating ->
//! idle`; only one generation is in flight at a time. Each generation carries a sequence
//! number so a reply that arrives after [`ComponentBuilder::abandon_generation`] is
//! dropped instead of overwriting newer state.

use async_trait::async_trait;
use chrono::{DateTime, Local, Utc};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::{
    client::ChatTransport,
    export::{build_download, Download},
    models::{Framework, GeneratedComponent, GenerationRequest, Styling},
    notify::{Notification, NotificationKind, Notifier},
    prompt::{build_instruction, strip_code_fences, MAX_PROMPT_CHARS, SUGGESTED_PROMPTS},
};

#[derive(Debug, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

#[derive(Debug, Error)]
#[error("save failed: {0}")]
pub struct SaveError(pub String);

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Hands a [`Download`] to whatever performs the actual save.
pub trait FileSaver: Send + Sync {
    fn save(&self, download: &Download) -> Result<(), SaveError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    /// Ctrl+Enter, or Cmd+Enter on macOS.
    pub fn is_generate_chord(&self) -> bool {
        (self.ctrl || self.meta) && self.key == "Enter"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Empty draft or a generation already running.
    Skipped,
    Generated,
    Failed,
    /// The reply belonged to an abandoned generation.
    Discarded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Generating { seq: u64 },
}

#[derive(Debug)]
struct BuilderState {
    draft: String,
    framework: Framework,
    styling: Styling,
    latest: Option<GeneratedComponent>,
    phase: Phase,
    next_seq: u64,
    menu_open: bool,
    notifier: Notifier,
}

impl Default for BuilderState {
    fn default() -> Self {
        Self {
            draft: String::new(),
            framework: Framework::default(),
            styling: Styling::default(),
            latest: None,
            phase: Phase::Idle,
            next_seq: 0,
            menu_open: false,
            notifier: Notifier::default(),
        }
    }
}

struct Pending {
    seq: u64,
    request: GenerationRequest,
    instruction: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultCard {
    pub description: String,
    pub meta: String,
    pub code: String,
}

/// Everything the page needs to draw itself.
#[derive(Debug, Clone, Serialize)]
pub struct View {
    pub draft: String,
    pub char_counter: String,
    pub options_label: String,
    pub framework: Framework,
    pub styling: Styling,
    pub menu_open: bool,
    pub generating: bool,
    pub can_generate: bool,
    pub suggestions: Vec<&'static str>,
    pub notification: Option<Notification>,
    pub result: Option<ResultCard>,
}

#[derive(Clone)]
pub struct ComponentBuilder {
    state: Arc<Mutex<BuilderState>>,
    transport: Arc<dyn ChatTransport>,
    clipboard: Arc<dyn Clipboard>,
    saver: Arc<dyn FileSaver>,
}

impl ComponentBuilder {
    pub fn new(transport: Arc<dyn ChatTransport>, clipboard: Arc<dyn Clipboard>, saver: Arc<dyn FileSaver>) -> Self {
        Self { state: Arc::default(), transport, clipboard, saver }
    }

    // --- draft input ---

    /// Replaces the draft. Rejected while generating or past the character cap.
    pub fn set_draft(&self, value: &str) -> bool {
        let mut s = self.state.lock();
        if s.phase != Phase::Idle || value.chars().count() > MAX_PROMPT_CHARS {
            return false;
        }
        s.draft = value.to_string();
        true
    }

    pub fn apply_suggestion(&self, index: usize) -> bool {
        let Some(prompt) = SUGGESTED_PROMPTS.get(index) else { return false };
        self.state.lock().draft = prompt.to_string();
        true
    }

    pub fn draft(&self) -> String { self.state.lock().draft.clone() }

    pub fn char_count(&self) -> usize { self.state.lock().draft.chars().count() }

    // --- options menu ---

    pub fn open_options_menu(&self) { self.state.lock().menu_open = true; }

    pub fn close_options_menu(&self) { self.state.lock().menu_open = false; }

    pub fn select_framework(&self, framework: Framework) {
        let mut s = self.state.lock();
        s.framework = framework;
        s.menu_open = false;
    }

    pub fn select_styling(&self, styling: Styling) {
        let mut s = self.state.lock();
        s.styling = styling;
        s.menu_open = false;
    }

    // --- generation ---

    pub fn is_generating(&self) -> bool { self.state.lock().phase != Phase::Idle }

    pub fn can_generate(&self) -> bool {
        let s = self.state.lock();
        s.phase == Phase::Idle && !s.draft.trim().is_empty()
    }

    fn begin(&self) -> Option<Pending> {
        let mut s = self.state.lock();
        if s.phase != Phase::Idle || s.draft.trim().is_empty() {
            return None;
        }
        let description = s.draft.trim().to_string();
        s.draft.clear();
        s.next_seq += 1;
        let seq = s.next_seq;
        s.phase = Phase::Generating { seq };

        let request = GenerationRequest { description, framework: s.framework, styling: s.styling };
        let instruction = build_instruction(&request);
        Some(Pending { seq, request, instruction })
    }

    /// Runs one generation: captures and clears the draft, asks the proxy, stores the result.
    pub async fn generate(&self) -> GenerateOutcome {
        let Some(pending) = self.begin() else { return GenerateOutcome::Skipped };
        info!(seq = pending.seq, framework = %pending.request.framework, "🚀 Generating component");

        let reply = self.transport.send(&pending.instruction).await;

        let mut s = self.state.lock();
        if s.phase != (Phase::Generating { seq: pending.seq }) {
            warn!(seq = pending.seq, "Discarding reply from abandoned generation");
            return GenerateOutcome::Discarded;
        }
        s.phase = Phase::Idle;

        match reply {
            Ok(text) => {
                let now = Utc::now();
                let Pending { request, .. } = pending;
                s.latest = Some(GeneratedComponent {
                    id: now.timestamp_millis(),
                    description: request.description,
                    framework: request.framework,
                    styling: request.styling,
                    code: strip_code_fences(&text),
                    timestamp: human_timestamp(now.with_timezone(&Local)),
                });
                s.notifier.show(NotificationKind::Success, "Component generated successfully!");
                GenerateOutcome::Generated
            }
            Err(e) => {
                error!("Generation failed: {}", e);
                s.notifier.show(NotificationKind::Error, "Failed to generate component");
                GenerateOutcome::Failed
            }
        }
    }

    /// Keyboard shortcut entry point. Returns `None` when the key is not the generate chord.
    pub async fn on_key(&self, press: &KeyPress) -> Option<GenerateOutcome> {
        if !press.is_generate_chord() {
            return None;
        }
        Some(self.generate().await)
    }

    /// Returns to idle without waiting for the in-flight reply, which is dropped on arrival.
    pub fn abandon_generation(&self) -> bool {
        let mut s = self.state.lock();
        if s.phase == Phase::Idle {
            return false;
        }
        s.phase = Phase::Idle;
        true
    }

    // --- result ---

    pub fn latest(&self) -> Option<GeneratedComponent> { self.state.lock().latest.clone() }

    pub fn has_result(&self) -> bool { self.state.lock().latest.is_some() }

    pub fn clear_result(&self) { self.state.lock().latest = None; }

    pub async fn copy_result(&self) -> bool {
        let Some(code) = self.state.lock().latest.as_ref().map(|c| c.code.clone()) else { return false };
        let copied = self.clipboard.write_text(&code).await;

        let mut s = self.state.lock();
        match copied {
            Ok(()) => {
                s.notifier.show(NotificationKind::Success, "Copied to clipboard!");
                true
            }
            Err(e) => {
                error!("{}", e);
                s.notifier.show(NotificationKind::Error, "Failed to copy");
                false
            }
        }
    }

    pub fn download_result(&self) -> Option<Download> {
        let mut s = self.state.lock();
        let download = build_download(s.latest.as_ref()?);
        match self.saver.save(&download) {
            Ok(()) => {
                s.notifier.show(NotificationKind::Info, "Download started");
                Some(download)
            }
            Err(e) => {
                error!("{}", e);
                s.notifier.show(NotificationKind::Error, "Failed to download");
                None
            }
        }
    }

    // --- notifications ---

    pub fn notification(&self) -> Option<Notification> { self.state.lock().notifier.visible().cloned() }

    pub fn dismiss_notification(&self) { self.state.lock().notifier.dismiss(); }

    pub fn dismiss_expired_notification(&self, now: DateTime<Utc>) -> bool {
        self.state.lock().notifier.dismiss_expired(now)
    }

    pub fn view(&self) -> View {
        let s = self.state.lock();
        let generating = s.phase != Phase::Idle;
        View {
            draft: s.draft.clone(),
            char_counter: format!("{}/{}", s.draft.chars().count(), MAX_PROMPT_CHARS),
            options_label: format!("{} / {}", s.framework, s.styling),
            framework: s.framework,
            styling: s.styling,
            menu_open: s.menu_open,
            generating,
            can_generate: !generating && !s.draft.trim().is_empty(),
            suggestions: SUGGESTED_PROMPTS.to_vec(),
            notification: s.notifier.visible().cloned(),
            result: s.latest.as_ref().map(|c| ResultCard {
                description: c.description.clone(),
                meta: format!("{} • {} • {}", c.framework, c.styling, c.timestamp),
                code: c.code.clone(),
            }),
        }
    }
}

/// `10/19/2026, 3:04:05 PM` style local time.
fn human_timestamp(t: DateTime<Local>) -> String {
    t.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
