//! Composes the generators into one record.

use menugram_core::{ContentRequest, Flow, GeneratedContent};
use tracing::{debug, instrument};

use crate::caption::{CaptionGenerator, CaptionShape};
use crate::hashtag::{HashtagGenerator, HashtagProfile};
use crate::registry::StyleRegistry;
use crate::sampler::Sampler;
use crate::tagline::TaglineGenerator;

/// Runs the style registry and the three generators for one flow.
///
/// The assembler holds no state between calls. Each call returns a fresh
/// [`GeneratedContent`].
///
/// # Examples
///
/// ```
/// use menugram_core::{ContentRequest, Flow, MenuItem, PostType};
/// use menugram_templates::{ContentAssembler, RandomSampler};
///
/// let request = ContentRequest::new("Svang", "", PostType::Single)
///     .with_menu_items(vec![MenuItem::new("Truffle Arancini", "Aged parmesan")]);
/// let assembler = ContentAssembler::new(Flow::Item);
/// let mut sampler = RandomSampler::seeded(1);
///
/// let first = assembler.assemble(&request, &mut sampler);
/// let second = assembler.regenerate_caption(&request, &first, &mut sampler);
/// assert_eq!(first.hashtags(), second.hashtags());
/// assert_eq!(first.tagline(), second.tagline());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ContentAssembler {
    flow: Flow,
    profile: HashtagProfile,
    registry: StyleRegistry,
    taglines: TaglineGenerator,
    captions: CaptionGenerator,
    hashtags: HashtagGenerator,
}

impl ContentAssembler {
    /// Assembler for a flow with that flow's default hashtag cap.
    pub fn new(flow: Flow) -> Self {
        Self {
            flow,
            profile: HashtagProfile::for_flow(flow),
            registry: StyleRegistry::new(),
            taglines: TaglineGenerator::new(),
            captions: CaptionGenerator::new(),
            hashtags: HashtagGenerator::new(),
        }
    }

    /// Same assembler with a different hashtag cap.
    pub fn with_hashtag_cap(mut self, cap: usize) -> Self {
        self.profile = self.profile.with_cap(cap);
        self
    }

    /// The flow this assembler packages content for.
    pub fn flow(&self) -> Flow {
        self.flow
    }

    /// The hashtag profile in use.
    pub fn profile(&self) -> &HashtagProfile {
        &self.profile
    }

    /// Produce tagline, caption, hashtags and style for a request.
    #[instrument(
        skip(self, request, sampler),
        fields(flow = %self.flow, post_type = %request.post_type(), style = %request.style())
    )]
    pub fn assemble<S: Sampler + ?Sized>(
        &self,
        request: &ContentRequest,
        sampler: &mut S,
    ) -> GeneratedContent {
        let style = *self.registry.resolve(request.style()).key();
        let tagline = self.taglines.generate(
            request.subject_name(),
            request.style(),
            *request.post_type(),
            sampler,
        );
        let caption = self.caption(request, sampler);
        let hashtags = self.hashtags.generate(request, &self.profile);
        debug!(hashtag_count = hashtags.len(), %style, "Assembled content");

        let content = GeneratedContent::new(
            tagline,
            caption,
            hashtags,
            style,
            request.brand_colors().clone(),
        );
        if self.flow == Flow::Batch {
            content.with_story_caption(Some(self.captions.story_caption(request, sampler)))
        } else {
            content
        }
    }

    /// Copy of `previous` with only the caption replaced.
    #[instrument(skip(self, request, previous, sampler), fields(flow = %self.flow))]
    pub fn regenerate_caption<S: Sampler + ?Sized>(
        &self,
        request: &ContentRequest,
        previous: &GeneratedContent,
        sampler: &mut S,
    ) -> GeneratedContent {
        let caption = self.caption(request, sampler);
        debug!("Regenerated caption");
        previous.clone().with_caption(caption)
    }

    /// A completely new record; equivalent to calling [`Self::assemble`] again.
    pub fn regenerate<S: Sampler + ?Sized>(
        &self,
        request: &ContentRequest,
        sampler: &mut S,
    ) -> GeneratedContent {
        self.assemble(request, sampler)
    }

    fn caption<S: Sampler + ?Sized>(&self, request: &ContentRequest, sampler: &mut S) -> String {
        self.captions
            .generate_shaped(request, CaptionShape::from(self.flow), sampler)
    }
}
