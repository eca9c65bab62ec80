// src/controller.rs
//! Top-level controller
//!
//! Owns the application state and the simulated-latency tasks. Every user
//! action goes through here; mint and analyze schedule a deferred
//! completion that locks the state, applies its result and exits.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use crate::carousel::FrameSample;
use crate::config::CredzConfig;
use crate::error::{CredzError, Result};
use crate::insight::InsightResult;
use crate::selection::Toggled;
use crate::state::{AppState, MintOutcome, StateSnapshot};
use crate::tasks::{PendingTasks, spawn_delayed};
use crate::wallet::{Provider, WalletState};

pub struct Controller {
    state: Arc<Mutex<AppState>>,
    config: CredzConfig,
    rng: Mutex<StdRng>,
    pending: PendingTasks,
}

impl Controller {
    pub fn new(config: CredzConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic address generation, for tests and `--seed`
    pub fn with_seed(config: CredzConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: CredzConfig, rng: StdRng) -> Self {
        let state = AppState::new(config.carousel_tuning());
        Self {
            state: Arc::new(Mutex::new(state)),
            config,
            rng: Mutex::new(rng),
            pending: PendingTasks::new(),
        }
    }

    pub fn config(&self) -> &CredzConfig {
        &self.config
    }

    /// Direct access to the state; do not hold across an await
    pub async fn state(&self) -> MutexGuard<'_, AppState> {
        self.state.lock().await
    }

    pub async fn snapshot(&self) -> StateSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn toggle(&self, id: &str) -> Result<Toggled> {
        let mut state = self.state.lock().await;
        let card = state
            .find(id)
            .ok_or_else(|| CredzError::UnknownCredential(id.to_string()))?;
        Ok(state.toggle(card))
    }

    pub async fn connect(&self, provider: Provider) -> WalletState {
        let mut rng = self.rng.lock().await;
        let mut state = self.state.lock().await;
        state.connect(provider, &mut *rng).clone()
    }

    /// Press "Simulate Mint". On `Started` the entry lands after the mint delay.
    pub async fn simulate_mint(&self) -> MintOutcome {
        let outcome = self.state.lock().await.begin_mint();
        if let MintOutcome::Started(id) = outcome {
            let state = self.state.clone();
            let handle = spawn_delayed("mint", self.config.mint_delay(), async move {
                state.lock().await.finish_mint(id);
            });
            self.pending.track(handle).await;
        }
        outcome
    }

    /// Press "Analyze". Each call schedules its own completion; the last one to land wins.
    pub async fn analyze(&self) {
        self.state.lock().await.begin_analyze();
        let state = self.state.clone();
        let handle = spawn_delayed("analyze", self.config.analyze_delay(), async move {
            state.lock().await.finish_analyze();
        });
        self.pending.track(handle).await;
    }

    pub async fn insight(&self) -> Option<InsightResult> {
        self.state.lock().await.insight().cloned()
    }

    // ========================================================================
    // Carousel input
    // ========================================================================

    pub async fn frame(&self, delta_ms: f64) -> FrameSample {
        self.state.lock().await.carousel.frame(delta_ms)
    }

    /// Run `frames` frames at the configured frame interval
    pub async fn spin(&self, frames: u32) -> Option<FrameSample> {
        let mut state = self.state.lock().await;
        let mut last = None;
        for _ in 0..frames {
            last = Some(state.carousel.frame(self.config.frame_interval_ms));
        }
        last
    }

    /// One pointer move; starts a drag if none is active
    pub async fn drag(&self, delta_x: f64, pointer_speed: f64) {
        self.state.lock().await.carousel.drag_move(delta_x, pointer_speed);
    }

    pub async fn fling(&self, release_speed: f64) {
        self.state.lock().await.carousel.release(release_speed);
    }

    /// Wait until every scheduled mint/analyze has landed
    pub async fn wait_idle(&self) {
        let n = self.pending.len().await;
        if n > 0 {
            info!("Waiting for {} pending task(s)", n);
        }
        self.pending.join_all().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_config() -> CredzConfig {
        CredzConfig {
            mint_delay_ms: 5,
            analyze_delay_ms: 5,
            ..CredzConfig::default()
        }
    }

    #[tokio::test]
    async fn test_toggle_unknown_id() {
        let controller = Controller::with_seed(fast_config(), 1);
        let err = controller.toggle("nope").await.unwrap_err();
        assert!(matches!(err, CredzError::UnknownCredential(_)));
    }

    #[tokio::test]
    async fn test_mint_lands_after_delay() {
        let controller = Controller::with_seed(fast_config(), 1);
        controller.connect(Provider::Here).await;
        assert_eq!(controller.simulate_mint().await, MintOutcome::Started("pioneer-1"));
        assert!(controller.snapshot().await.minting);
        controller.wait_idle().await;

        let snapshot = controller.snapshot().await;
        assert!(!snapshot.minting);
        assert_eq!(snapshot.active, vec!["pioneer-1"]);
    }

    #[tokio::test]
    async fn test_analyze_lands_after_delay() {
        let controller = Controller::with_seed(fast_config(), 1);
        controller.toggle("web3-2").await.unwrap();
        controller.analyze().await;
        assert!(controller.insight().await.is_none());
        controller.wait_idle().await;
        assert_eq!(controller.insight().await.unwrap().web3_fluency, 25);
    }

    #[tokio::test]
    async fn test_seeded_connect_is_repeatable() {
        let a = Controller::with_seed(fast_config(), 9).connect(Provider::MetaMask).await;
        let b = Controller::with_seed(fast_config(), 9).connect(Provider::MetaMask).await;
        assert_eq!(a.address, b.address);
    }
}
