//! Delayed, cancellable content generation.
//!
//! The studio screens show a loading state for a moment before generated
//! content appears. [`GenerationSession`] models that as a spawned tokio task
//! per request. Every submission, regeneration or cancellation bumps an epoch
//! counter; a task whose epoch is no longer current never publishes.

use menugram_core::{ContentRequest, Flow, GeneratedContent, validate_request};
use menugram_error::{SessionError, SessionErrorKind, ValidationError};
use menugram_templates::{ContentAssembler, Sampler};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

use crate::{GenerationConfig, StudioConfig};

/// What a studio screen currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Nothing generated yet
    #[default]
    Idle,
    /// Waiting for the simulated latency to elapse
    Generating,
    /// Content is available
    Ready(GeneratedContent),
}

impl SessionState {
    /// The ready content, if any.
    pub fn content(&self) -> Option<&GeneratedContent> {
        match self {
            Self::Ready(content) => Some(content),
            _ => None,
        }
    }

    /// Whether a generation is pending.
    pub fn is_generating(&self) -> bool {
        matches!(self, Self::Generating)
    }
}

type SharedSampler = Arc<Mutex<Box<dyn Sampler + Send>>>;

#[derive(Default)]
struct Tracker {
    epoch: u64,
    pending: Option<JoinHandle<()>>,
    request: Option<ContentRequest>,
    last_ready: Option<GeneratedContent>,
}

impl Tracker {
    /// Start a new epoch, aborting whatever was pending.
    fn supersede(&mut self) -> u64 {
        self.epoch += 1;
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.epoch
    }
}

struct Shared {
    tracker: Mutex<Tracker>,
    state: watch::Sender<SessionState>,
}

impl Shared {
    /// Publish content produced under `epoch`, unless it has been superseded.
    fn publish(&self, epoch: u64, content: GeneratedContent) -> bool {
        let mut tracker = self.tracker.lock();
        if tracker.epoch != epoch {
            debug!(epoch, current = tracker.epoch, "Discarding stale generation");
            return false;
        }
        tracker.pending = None;
        tracker.last_ready = Some(content.clone());
        self.state.send_replace(SessionState::Ready(content));
        true
    }
}

/// Runs the template engine behind a simulated delay.
///
/// Must be used from within a tokio runtime.
///
/// # Examples
///
/// ```
/// use menugram_core::{ContentRequest, Flow, PostType};
/// use menugram_studio::{GenerationSession, StudioConfig};
/// use menugram_templates::RandomSampler;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut config = StudioConfig::default();
/// config.generation.delay_ms = 10;
///
/// let session = GenerationSession::from_config(Flow::Post, &config, RandomSampler::seeded(1));
/// session.submit(ContentRequest::new("Bella Vista", "@bellavista_nyc", PostType::UserImage))?;
///
/// let content = session.wait_ready().await?;
/// assert_eq!(content.hashtags()[0], "#bellavista_nyc");
/// # Ok(())
/// # }
/// ```
pub struct GenerationSession {
    assembler: ContentAssembler,
    sampler: SharedSampler,
    timing: GenerationConfig,
    shared: Arc<Shared>,
}

impl std::fmt::Debug for GenerationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationSession")
            .field("assembler", &self.assembler)
            .field("timing", &self.timing)
            .field("state", &*self.shared.state.borrow())
            .finish_non_exhaustive()
    }
}

impl GenerationSession {
    /// Session around an assembler with explicit delays.
    pub fn new(
        assembler: ContentAssembler,
        sampler: impl Sampler + Send + 'static,
        timing: GenerationConfig,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::Idle);
        Self {
            assembler,
            sampler: Arc::new(Mutex::new(Box::new(sampler))),
            timing,
            shared: Arc::new(Shared {
                tracker: Mutex::new(Tracker::default()),
                state,
            }),
        }
    }

    /// Session for a flow using the configured hashtag cap and delays.
    pub fn from_config(
        flow: Flow,
        config: &StudioConfig,
        sampler: impl Sampler + Send + 'static,
    ) -> Self {
        let assembler = ContentAssembler::new(flow).with_hashtag_cap(config.hashtag_cap(flow));
        Self::new(assembler, sampler, config.generation.clone())
    }

    /// The flow this session generates for.
    pub fn flow(&self) -> Flow {
        self.assembler.flow()
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.shared.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.shared.state.subscribe()
    }

    /// Validate a request and schedule its generation.
    ///
    /// Any pending generation is cancelled and its result will never be
    /// shown.
    ///
    /// # Errors
    ///
    /// Returns the validation failure without touching the current state.
    #[instrument(skip(self, request), fields(flow = %self.flow(), restaurant = %request.restaurant_name()))]
    pub fn submit(&self, request: ContentRequest) -> Result<(), ValidationError> {
        validate_request(&request, self.flow())?;

        let mut tracker = self.shared.tracker.lock();
        let epoch = tracker.supersede();
        tracker.request = Some(request.clone());
        self.shared.state.send_replace(SessionState::Generating);

        let shared = Arc::clone(&self.shared);
        let sampler = Arc::clone(&self.sampler);
        let assembler = self.assembler;
        let delay = self.timing.delay();
        tracker.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let content = assembler.assemble(&request, sampler.lock().as_mut());
            if shared.publish(epoch, content) {
                info!(epoch, "Content ready");
            }
        }));
        debug!(epoch, delay_ms = self.timing.delay_ms, "Generation scheduled");
        Ok(())
    }

    /// Schedule a new caption for the content currently shown.
    ///
    /// Everything except the caption is carried over unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SessionErrorKind::NothingToRegenerate`] unless the session is
    /// showing ready content.
    #[instrument(skip(self), fields(flow = %self.flow()))]
    pub fn regenerate_caption(&self) -> Result<(), SessionError> {
        let mut tracker = self.shared.tracker.lock();
        let previous = self.shared.state.borrow().content().cloned();
        let (Some(previous), Some(request)) = (previous, tracker.request.clone()) else {
            return Err(SessionError::new(SessionErrorKind::NothingToRegenerate));
        };

        let epoch = tracker.supersede();
        self.shared.state.send_replace(SessionState::Generating);

        let shared = Arc::clone(&self.shared);
        let sampler = Arc::clone(&self.sampler);
        let assembler = self.assembler;
        let delay = self.timing.regenerate_delay();
        tracker.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let content =
                assembler.regenerate_caption(&request, &previous, sampler.lock().as_mut());
            if shared.publish(epoch, content) {
                info!(epoch, "Caption regenerated");
            }
        }));
        debug!(epoch, delay_ms = self.timing.regenerate_delay_ms, "Regeneration scheduled");
        Ok(())
    }

    /// Abandon any pending generation.
    ///
    /// The state returns to the last ready content, or idle if there was none.
    #[instrument(skip(self))]
    pub fn cancel(&self) {
        let mut tracker = self.shared.tracker.lock();
        let epoch = tracker.supersede();
        let state = match &tracker.last_ready {
            Some(content) => SessionState::Ready(content.clone()),
            None => SessionState::Idle,
        };
        self.shared.state.send_replace(state);
        debug!(epoch, "Generation cancelled");
    }

    /// Wait for the pending generation to finish and return its content.
    ///
    /// Returns immediately when content is already ready.
    ///
    /// # Errors
    ///
    /// [`SessionErrorKind::Cancelled`] if the session went back to idle, and
    /// [`SessionErrorKind::Closed`] if the state channel closed.
    pub async fn wait_ready(&self) -> Result<GeneratedContent, SessionError> {
        let mut receiver = self.subscribe();
        let state = receiver
            .wait_for(|state| !state.is_generating())
            .await
            .map_err(|_| SessionError::new(SessionErrorKind::Closed))?
            .clone();
        match state {
            SessionState::Ready(content) => Ok(content),
            _ => Err(SessionError::new(SessionErrorKind::Cancelled)),
        }
    }
}

impl Drop for GenerationSession {
    fn drop(&mut self) {
        if let Some(handle) = self.shared.tracker.lock().pending.take() {
            handle.abort();
        }
    }
}
