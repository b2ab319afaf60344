//! Message form state machine.
//!
//! ```text
//! Editing --send (valid)--> Sending --ok--> Editing   (Notice::Sent)
//!    |                         \----err--> Editing   (Notice::Failed)
//!    \--send (blank field)--> Editing                (Notice::Incomplete)
//! ```
//!
//! Side effects are ordered: the remote submission happens first, and only a
//! confirmed success updates the submitted message and the durable cache.
//! The draft is never cleared, so a failed send can be retried as is.
//!
//! Hosts that cannot hold `&mut Composer` across an await (reactive UI
//! state) drive the two halves themselves with [`Composer::begin_send`] and
//! [`Composer::finish_send`]; everything else can call [`Composer::send`].

#[cfg(test)]
#[path = "compose_test.rs"]
mod compose_test;

use crate::message::{Field, MessagePayload, ValidationError};
use crate::remote::{SubmitError, Submitter};
use crate::store::{KeyValueStore, MessageCache};

const DRAFT_MESSAGE_PLACEHOLDER: &str = "Pesan buat juna ganteng ada disini...";
const DRAFT_HOPE_PLACEHOLDER: &str = "(belum diisi)";

/// Where the form is in its send cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    /// A submission of the contained payload is in flight.
    Sending(MessagePayload),
}

/// Outcome of a send action, shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Validation failed; nothing was sent.
    Incomplete(ValidationError),
    /// A previous send is still in flight; nothing was sent.
    Busy,
    /// The remote side accepted the message.
    Sent,
    /// The remote side did not accept the message.
    Failed(SubmitError),
}

impl Notice {
    /// User-facing text.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Incomplete(_) => "Isi semua dulu yaa 😤".to_owned(),
            Self::Busy => "Sabar yaa, pesannya lagi dikirim...".to_owned(),
            Self::Sent => "Pesan berhasil dikirim ✅".to_owned(),
            Self::Failed(e) => format!("Gagal kirim pesan: {e}"),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Sent)
    }
}

/// What the side panel of the message slide shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub greeting: String,
    pub message: String,
    pub hope: String,
    /// `true` when showing the submitted message rather than the draft.
    pub sent: bool,
}

fn greeting(name: &str) -> String {
    if name.is_empty() { "Hai! ".to_owned() } else { format!("Hai, {name} ") }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() { placeholder.to_owned() } else { value.to_owned() }
}

/// Owns the draft, the last submitted message, and the send phase.
#[derive(Debug)]
pub struct Composer<S> {
    draft: MessagePayload,
    submitted: Option<MessagePayload>,
    phase: Phase,
    cache: MessageCache<S>,
}

impl<S: KeyValueStore> Composer<S> {
    /// An empty form over `store`. Nothing is read until [`Composer::restore`].
    pub fn new(store: S) -> Self {
        Self { draft: MessagePayload::default(), submitted: None, phase: Phase::Editing, cache: MessageCache::new(store) }
    }

    /// Build the form and restore the last submitted message from `store`.
    pub fn open(store: S) -> Self {
        let mut composer = Self::new(store);
        composer.restore();
        composer
    }

    /// Reload the submitted message from the cache.
    pub fn restore(&mut self) {
        self.submitted = self.cache.load();
    }

    pub fn draft(&self) -> &MessagePayload {
        &self.draft
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    pub fn submitted(&self) -> Option<&MessagePayload> {
        self.submitted.as_ref()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_sending(&self) -> bool {
        matches!(self.phase, Phase::Sending(_))
    }

    pub fn cache(&self) -> &MessageCache<S> {
        &self.cache
    }

    /// `Editing -> Sending`. Returns the payload to submit.
    ///
    /// # Errors
    ///
    /// Returns [`Notice::Busy`] while a send is in flight and
    /// [`Notice::Incomplete`] when a field is blank. The phase is unchanged
    /// in both cases.
    pub fn begin_send(&mut self) -> Result<MessagePayload, Notice> {
        if self.is_sending() {
            return Err(Notice::Busy);
        }
        self.draft.validate().map_err(Notice::Incomplete)?;
        let payload = self.draft.clone();
        self.phase = Phase::Sending(payload.clone());
        Ok(payload)
    }

    /// `Sending -> Editing` with the submission result.
    ///
    /// On success the in-flight payload becomes the submitted message and is
    /// written to the cache. A cache write failure is logged and otherwise
    /// ignored.
    pub fn finish_send(&mut self, result: Result<(), SubmitError>) -> Notice {
        let in_flight = match std::mem::take(&mut self.phase) {
            Phase::Sending(payload) => Some(payload),
            Phase::Editing => {
                log::warn!("send finished while no send was in flight");
                None
            }
        };
        match result {
            Ok(()) => {
                if let Some(payload) = in_flight {
                    if let Err(e) = self.cache.save(&payload) {
                        log::warn!("submitted message not cached: {e}");
                    }
                    self.submitted = Some(payload);
                }
                Notice::Sent
            }
            Err(e) => {
                log::warn!("message submission failed: {e}");
                Notice::Failed(e)
            }
        }
    }

    /// Validate, submit through `remote`, and record the result.
    pub async fn send<R: Submitter + ?Sized>(&mut self, remote: &R) -> Notice {
        let payload = match self.begin_send() {
            Ok(payload) => payload,
            Err(notice) => return notice,
        };
        let result = remote.submit(&payload).await;
        self.finish_send(result)
    }

    /// Forget the submitted message, in memory and in the cache.
    pub fn reset(&mut self) {
        self.submitted = None;
        if let Err(e) = self.cache.clear() {
            log::warn!("cached message not cleared: {e}");
        }
    }

    /// Submitted message if there is one, otherwise a live draft preview.
    pub fn preview(&self) -> Preview {
        match &self.submitted {
            Some(sent) => Preview {
                greeting: greeting(&sent.name),
                message: sent.message.clone(),
                hope: sent.hope2026.clone(),
                sent: true,
            },
            None => Preview {
                greeting: greeting(&self.draft.name),
                message: or_placeholder(&self.draft.message, DRAFT_MESSAGE_PLACEHOLDER),
                hope: or_placeholder(&self.draft.hope2026, DRAFT_HOPE_PLACEHOLDER),
                sent: false,
            },
        }
    }
}
