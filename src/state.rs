// src/state.rs
// Application state for the showcase: everything the page would hold

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::carousel::{CardPlacement, CarouselTuning, RotationModel, ring_layout};
use crate::catalog::{self, CredentialDescriptor};
use crate::insight::{self, InsightResult};
use crate::progress::{self, ProgressReadout, TimelineEntry};
use crate::selection::{SelectionSet, Toggled};
use crate::wallet::{self, Provider, WalletState};

pub const MINT_EXHAUSTED_NOTICE: &str = "All credentials minted!";

/// Result of pressing "Simulate Mint"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "id", rename_all = "snake_case")]
pub enum MintOutcome {
    /// No wallet yet; the connect prompt was opened
    WalletRequired,
    /// A mint is already in flight
    Busy,
    /// Every catalog entry is already active
    Exhausted,
    /// This entry will be activated when the mint completes
    Started(&'static str),
}

/// Single owner of all session state. Resets on restart.
#[derive(Debug, Clone)]
pub struct AppState {
    pub wallet: WalletState,
    pub wallet_prompt_open: bool,
    selection: SelectionSet,
    insight: Option<InsightResult>,
    pub minting: bool,
    pub analyzing: bool,
    pub last_notice: Option<String>,
    pub carousel: RotationModel,
    catalog: &'static [CredentialDescriptor],
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(CarouselTuning::default())
    }
}

impl AppState {
    pub fn new(tuning: CarouselTuning) -> Self {
        Self::with_catalog(catalog::CATALOG, tuning)
    }

    pub fn with_catalog(catalog: &'static [CredentialDescriptor], tuning: CarouselTuning) -> Self {
        Self {
            wallet: WalletState::default(),
            wallet_prompt_open: false,
            selection: SelectionSet::new(),
            insight: None,
            minting: false,
            analyzing: false,
            last_notice: None,
            carousel: RotationModel::new(tuning),
            catalog,
        }
    }

    pub fn catalog(&self) -> &'static [CredentialDescriptor] {
        self.catalog
    }

    pub fn find(&self, id: &str) -> Option<&'static CredentialDescriptor> {
        self.catalog.iter().find(|c| c.id == id)
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn insight(&self) -> Option<&InsightResult> {
        self.insight.as_ref()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Toggle a credential and refresh derived state
    pub fn toggle(&mut self, card: &CredentialDescriptor) -> Toggled {
        let toggled = self.selection.toggle(card);
        debug!("[SELECTION] {:?} {} ({} active)", toggled, card.id, self.selection.len());
        self.recompute();
        toggled
    }

    /// Insert if absent and refresh derived state
    fn activate(&mut self, card: &CredentialDescriptor) -> bool {
        let added = self.selection.activate(card);
        if added {
            self.recompute();
        }
        added
    }

    /// Silent insight refresh; only once an analysis has been shown
    fn recompute(&mut self) {
        if self.insight.is_some() {
            self.insight = Some(insight::analyze(self.selection.as_slice()));
        }
    }

    // ========================================================================
    // Wallet
    // ========================================================================

    pub fn open_wallet_prompt(&mut self) {
        self.wallet_prompt_open = true;
    }

    pub fn close_wallet_prompt(&mut self) {
        self.wallet_prompt_open = false;
    }

    pub fn connect<R: Rng + ?Sized>(&mut self, provider: Provider, rng: &mut R) -> &WalletState {
        self.wallet = wallet::connect(provider, rng);
        self.wallet_prompt_open = false;
        &self.wallet
    }

    // ========================================================================
    // Mint
    // ========================================================================

    /// Start a simulated mint. Only `Started` changes the selection, later.
    pub fn begin_mint(&mut self) -> MintOutcome {
        if !self.wallet.is_connected {
            info!("[MINT] Wallet not connected, opening prompt");
            self.open_wallet_prompt();
            return MintOutcome::WalletRequired;
        }
        if self.minting {
            debug!("[MINT] Already minting");
            return MintOutcome::Busy;
        }
        match self.selection.first_inactive(self.catalog) {
            Some(card) => {
                info!("[MINT] Minting {}", card.id);
                self.minting = true;
                MintOutcome::Started(card.id)
            }
            None => {
                warn!("[MINT] {}", MINT_EXHAUSTED_NOTICE);
                self.last_notice = Some(MINT_EXHAUSTED_NOTICE.to_string());
                MintOutcome::Exhausted
            }
        }
    }

    /// Land a mint started by `begin_mint`. Returns whether the entry was newly activated.
    pub fn finish_mint(&mut self, id: &str) -> bool {
        self.minting = false;
        match self.find(id) {
            Some(card) => {
                let added = self.activate(card);
                info!("[MINT] Minted {} (newly active: {})", id, added);
                added
            }
            None => {
                warn!("[MINT] Unknown credential {} on completion", id);
                false
            }
        }
    }

    // ========================================================================
    // Coach
    // ========================================================================

    pub fn begin_analyze(&mut self) {
        info!("[COACH] Reading on-chain metadata...");
        self.analyzing = true;
    }

    /// Store a fresh analysis of the current selection
    pub fn finish_analyze(&mut self) -> &InsightResult {
        self.analyzing = false;
        let result = insight::analyze(self.selection.as_slice());
        info!(
            "[COACH] Status {} (literacy {}, automation {}, web3 {})",
            result.status, result.literacy_score, result.automation_readiness, result.web3_fluency
        );
        self.insight.insert(result)
    }

    // ========================================================================
    // Derived views
    // ========================================================================

    pub fn progress(&self) -> ProgressReadout {
        let max: u32 = self.catalog.iter().map(|c| c.score).sum();
        ProgressReadout::new(self.selection.total_score(), max)
    }

    pub fn timeline(&self) -> Vec<TimelineEntry> {
        progress::timeline(&self.selection)
    }

    pub fn layout(&self) -> Vec<CardPlacement> {
        ring_layout(self.selection.as_slice())
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            wallet: self.wallet.clone(),
            wallet_prompt_open: self.wallet_prompt_open,
            active: self.selection.ids(),
            minting: self.minting,
            analyzing: self.analyzing,
            insight: self.insight.clone(),
            progress: self.progress(),
            rotation_deg: self.carousel.rotation(),
            tilt_deg: self.carousel.tilt(),
            last_notice: self.last_notice.clone(),
        }
    }
}

/// Serializable view of the whole state
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub wallet: WalletState,
    pub wallet_prompt_open: bool,
    pub active: Vec<&'static str>,
    pub minting: bool,
    pub analyzing: bool,
    pub insight: Option<InsightResult>,
    pub progress: ProgressReadout,
    pub rotation_deg: f64,
    pub tilt_deg: f64,
    pub last_notice: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight::Status;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn connected() -> AppState {
        let mut state = AppState::default();
        state.connect(Provider::MetaMask, &mut StdRng::seed_from_u64(1));
        state
    }

    #[test]
    fn test_mint_requires_wallet() {
        let mut state = AppState::default();
        assert_eq!(state.begin_mint(), MintOutcome::WalletRequired);
        assert!(state.wallet_prompt_open);
        assert!(!state.minting);

        state.connect(Provider::Phantom, &mut StdRng::seed_from_u64(1));
        assert!(!state.wallet_prompt_open);
    }

    #[test]
    fn test_mint_busy_then_finish() {
        let mut state = connected();
        assert_eq!(state.begin_mint(), MintOutcome::Started("pioneer-1"));
        assert_eq!(state.begin_mint(), MintOutcome::Busy);
        assert!(state.finish_mint("pioneer-1"));
        assert!(!state.minting);
        assert_eq!(state.selection().ids(), vec!["pioneer-1"]);
        assert_eq!(state.begin_mint(), MintOutcome::Started("pioneer-2"));
    }

    #[test]
    fn test_late_mint_does_not_duplicate() {
        let mut state = connected();
        let card = state.find("pioneer-1").unwrap();
        assert_eq!(state.begin_mint(), MintOutcome::Started("pioneer-1"));
        state.toggle(card);
        assert!(!state.finish_mint("pioneer-1"));
        assert_eq!(state.selection().len(), 1);
    }

    #[test]
    fn test_mint_exhausted_leaves_state() {
        let mut state = connected();
        for card in state.catalog() {
            state.toggle(card);
        }
        let before = state.selection().clone();
        assert_eq!(state.begin_mint(), MintOutcome::Exhausted);
        assert_eq!(state.selection(), &before);
        assert!(!state.minting);
        assert_eq!(state.last_notice.as_deref(), Some(MINT_EXHAUSTED_NOTICE));
    }

    #[test]
    fn test_insight_recomputed_only_after_first_analysis() {
        let mut state = AppState::default();
        let v1 = state.find("vanguard-1").unwrap();
        state.toggle(v1);
        assert!(state.insight().is_none());

        state.begin_analyze();
        assert!(state.analyzing);
        assert_eq!(state.finish_analyze().automation_readiness, 20);
        assert!(!state.analyzing);

        for id in ["vanguard-2", "vanguard-3", "vanguard-4"] {
            let card = state.find(id).unwrap();
            state.toggle(card);
        }
        let insight = state.insight().unwrap();
        assert_eq!(insight.automation_readiness, 65);
        assert_eq!(insight.status, Status::WorkforceReady);
    }

    #[test]
    fn test_progress_tracks_selection() {
        let mut state = AppState::default();
        state.toggle(state.find("spec-3").unwrap());
        let readout = state.progress();
        assert_eq!(readout.current_score, 40);
        assert_eq!(readout.max_score, 290);
        assert_eq!(readout.trajectory, "Workforce-Ready");
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut state = connected();
        state.toggle(state.find("web3-1").unwrap());
        let json = serde_json::to_value(state.snapshot()).unwrap();
        assert_eq!(json["active"][0], "web3-1");
        assert_eq!(json["wallet"]["network"], "Ethereum");
        assert_eq!(json["progress"]["current_score"], 15);
    }
}
