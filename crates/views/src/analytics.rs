//! Analytics dashboard.

use larder_client::ConnectivityState;
use larder_client::api::analytics;
use larder_core::{AnalyticsSummary, CategoryShare, Timeframe, TopItem, UsagePoint, fallback};

use crate::context::ViewContext;
use crate::scope::MountScope;
use crate::state::ViewState;

/// Summary, usage series, category breakdown and top items.
///
/// Probes the backend once per mount; if the probe fails, every panel goes
/// straight to its fallback set. Panels fall back independently otherwise.
pub struct AnalyticsDashboard {
    ctx: ViewContext,
    scope: MountScope,
    probed: bool,
    timeframe: Timeframe,
    summary: ViewState<AnalyticsSummary>,
    usage: ViewState<Vec<UsagePoint>>,
    categories: ViewState<Vec<CategoryShare>>,
    top_items: ViewState<Vec<TopItem>>,
}

impl AnalyticsDashboard {
    pub fn new(ctx: ViewContext) -> Self {
        Self {
            ctx,
            scope: MountScope::new(),
            probed: false,
            timeframe: Timeframe::default(),
            summary: ViewState::new(fallback::analytics_summary()),
            usage: ViewState::default(),
            categories: ViewState::default(),
            top_items: ViewState::default(),
        }
    }

    /// Start on `timeframe` instead of the default month, without fetching.
    pub fn with_timeframe(mut self, timeframe: Timeframe) -> Self {
        self.timeframe = timeframe;
        self
    }

    pub fn scope(&self) -> &MountScope {
        &self.scope
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn connectivity(&self) -> ConnectivityState {
        self.ctx.connectivity()
    }

    pub fn summary(&self) -> &ViewState<AnalyticsSummary> {
        &self.summary
    }

    pub fn usage(&self) -> &ViewState<Vec<UsagePoint>> {
        &self.usage
    }

    pub fn categories(&self) -> &ViewState<Vec<CategoryShare>> {
        &self.categories
    }

    pub fn top_items(&self) -> &ViewState<Vec<TopItem>> {
        &self.top_items
    }

    /// Load every panel.
    pub async fn refresh(&mut self) {
        if !self.ensure_probed().await {
            return;
        }

        let checkpoints = (
            self.summary.begin(),
            self.usage.begin(),
            self.categories.begin(),
            self.top_items.begin(),
        );
        let timeframe = self.timeframe;
        let client = self.ctx.client();
        let connectivity = self.ctx.connectivity();
        let fetch = async {
            tokio::join!(
                analytics::summary(client, connectivity, timeframe),
                analytics::usage(client, connectivity, timeframe),
                analytics::categories(client, connectivity),
                analytics::top_items(client, connectivity),
            )
        };

        match self.scope.guard(fetch).await {
            Some((summary, usage, categories, top_items)) => {
                self.summary.apply(summary);
                self.usage.apply(usage);
                self.categories.apply(categories);
                self.top_items.apply(top_items);
            }
            None => {
                self.summary.restore(checkpoints.0);
                self.usage.restore(checkpoints.1);
                self.categories.restore(checkpoints.2);
                self.top_items.restore(checkpoints.3);
            }
        }
    }

    /// Switch timeframe and reload the two timeframe-scoped panels.
    pub async fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
        if !self.ensure_probed().await {
            return;
        }

        let checkpoints = (self.summary.begin(), self.usage.begin());
        let client = self.ctx.client();
        let connectivity = self.ctx.connectivity();
        let fetch = async {
            tokio::join!(
                analytics::summary(client, connectivity, timeframe),
                analytics::usage(client, connectivity, timeframe),
            )
        };

        match self.scope.guard(fetch).await {
            Some((summary, usage)) => {
                self.summary.apply(summary);
                self.usage.apply(usage);
            }
            None => {
                self.summary.restore(checkpoints.0);
                self.usage.restore(checkpoints.1);
            }
        }
    }

    /// Returns false if the scope was unmounted while probing.
    async fn ensure_probed(&mut self) -> bool {
        if self.probed {
            return true;
        }
        let mut ctx = self.ctx.clone();
        let probe = async move {
            ctx.probe().await;
            ctx
        };
        let Some(ctx) = self.scope.guard(probe).await else {
            return false;
        };
        tracing::info!(connectivity = ctx.connectivity().as_str(), "analytics availability probe");
        self.ctx = ctx;
        self.probed = true;
        true
    }
}
