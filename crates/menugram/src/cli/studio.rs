//! Shared state for command handlers.

use menugram::{
    ContentAssembler, ContentRequest, Flow, GeneratedContent, GenerationSession, MenugramResult,
    RandomSampler, StudioConfig, validate_request,
};
use tracing::{debug, info, instrument};

use super::commands::{Cli, StyleArgs};

/// Configuration and global flags resolved once per run.
#[derive(Debug, Clone)]
pub struct Studio {
    /// Loaded configuration
    pub config: StudioConfig,
    /// Seed for template selection
    pub seed: Option<u64>,
    /// Print JSON instead of previews
    pub json: bool,
    /// Route generation through a delayed session
    pub simulate_latency: bool,
}

impl Studio {
    /// Load configuration and capture the global flags.
    pub fn from_cli(cli: &Cli) -> MenugramResult<Self> {
        let config = match &cli.config {
            Some(path) => StudioConfig::from_file(path)?,
            None => StudioConfig::load()?,
        };
        Ok(Self {
            config,
            seed: cli.seed,
            json: cli.json,
            simulate_latency: cli.simulate_latency,
        })
    }

    fn sampler(&self) -> RandomSampler {
        match self.seed {
            Some(seed) => RandomSampler::seeded(seed),
            None => RandomSampler::from_entropy(),
        }
    }

    /// Style key and brand colors, falling back to configured defaults.
    pub fn style(&self, args: &StyleArgs) -> (String, Vec<String>) {
        (
            self.config.style_or_default(args.style.as_deref()),
            self.config.colors_or_default(args.colors.as_deref()),
        )
    }

    /// Validate and generate content for a flow, optionally replacing the
    /// caption once afterwards.
    #[instrument(skip(self, request), fields(simulate_latency = self.simulate_latency))]
    pub async fn generate(
        &self,
        flow: Flow,
        request: &ContentRequest,
        regenerate_caption: bool,
    ) -> MenugramResult<GeneratedContent> {
        if self.simulate_latency {
            return self.generate_delayed(flow, request, regenerate_caption).await;
        }

        validate_request(request, flow)?;
        let assembler = ContentAssembler::new(flow).with_hashtag_cap(self.config.hashtag_cap(flow));
        let mut sampler = self.sampler();
        let content = assembler.assemble(request, &mut sampler);
        if !regenerate_caption {
            return Ok(content);
        }
        debug!(previous = %content.caption(), "Replacing caption");
        Ok(assembler.regenerate_caption(request, &content, &mut sampler))
    }

    async fn generate_delayed(
        &self,
        flow: Flow,
        request: &ContentRequest,
        regenerate_caption: bool,
    ) -> MenugramResult<GeneratedContent> {
        let session = GenerationSession::from_config(flow, &self.config, self.sampler());
        info!(delay_ms = self.config.generation.delay_ms, "Generating");
        session.submit(request.clone())?;
        let content = session.wait_ready().await?;
        if !regenerate_caption {
            return Ok(content);
        }
        info!(
            delay_ms = self.config.generation.regenerate_delay_ms,
            "Regenerating caption"
        );
        session.regenerate_caption()?;
        Ok(session.wait_ready().await?)
    }
}
