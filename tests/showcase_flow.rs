// tests/showcase_flow.rs
//
// End-to-end flows through the controller: wallet gating, simulated mint
// and analysis latency, exhaustion, and the carousel readouts.

use std::time::Duration;

use zen_credz::carousel::{CarouselMode, ring_layout, ring_radius};
use zen_credz::state::MINT_EXHAUSTED_NOTICE;
use zen_credz::{CATALOG, Controller, CredzConfig, MintOutcome, Network, Provider, Status, Toggled};

fn fast_config() -> CredzConfig {
    CredzConfig {
        mint_delay_ms: 10,
        analyze_delay_ms: 10,
        ..CredzConfig::default()
    }
}

fn controller() -> Controller {
    Controller::with_seed(fast_config(), 42)
}

#[tokio::test]
async fn test_mint_walks_catalog_in_table_order() {
    let controller = controller();
    assert_eq!(controller.simulate_mint().await, MintOutcome::WalletRequired);
    assert!(controller.snapshot().await.wallet_prompt_open);

    let wallet = controller.connect(Provider::Phantom).await;
    assert_eq!(wallet.network, Some(Network::Solana));
    assert!(wallet.address.as_deref().unwrap().starts_with("8xP..."));

    for expected in ["pioneer-1", "pioneer-2", "vanguard-1"] {
        assert_eq!(controller.simulate_mint().await, MintOutcome::Started(expected));
        assert_eq!(controller.simulate_mint().await, MintOutcome::Busy);
        controller.wait_idle().await;
    }
    assert_eq!(
        controller.snapshot().await.active,
        vec!["pioneer-1", "pioneer-2", "vanguard-1"]
    );
}

#[tokio::test]
async fn test_mint_exhausted_changes_nothing() {
    let controller = controller();
    controller.connect(Provider::MetaMask).await;
    for card in CATALOG {
        assert_eq!(controller.toggle(card.id).await.unwrap(), Toggled::Added);
    }
    let before = controller.snapshot().await;

    assert_eq!(controller.simulate_mint().await, MintOutcome::Exhausted);
    controller.wait_idle().await;

    let after = controller.snapshot().await;
    assert_eq!(after.active, before.active);
    assert!(!after.minting);
    assert_eq!(after.progress.current_score, 290);
    assert_eq!(after.last_notice.as_deref(), Some(MINT_EXHAUSTED_NOTICE));
}

#[tokio::test]
async fn test_toggle_during_mint_does_not_duplicate() {
    let controller = controller();
    controller.connect(Provider::Here).await;
    assert_eq!(controller.simulate_mint().await, MintOutcome::Started("pioneer-1"));
    controller.toggle("pioneer-1").await.unwrap();
    controller.wait_idle().await;
    assert_eq!(controller.snapshot().await.active, vec!["pioneer-1"]);
}

#[tokio::test]
async fn test_analysis_is_silently_refreshed_after_first_run() {
    let controller = controller();
    controller.toggle("vanguard-1").await.unwrap();
    controller.analyze().await;
    assert!(controller.snapshot().await.analyzing);
    controller.wait_idle().await;

    let first = controller.insight().await.unwrap();
    assert_eq!(first.status, Status::EducationReady);

    for id in ["vanguard-2", "vanguard-3", "vanguard-4"] {
        controller.toggle(id).await.unwrap();
    }
    let refreshed = controller.insight().await.unwrap();
    assert_eq!(refreshed.automation_readiness, 65);
    assert_eq!(refreshed.status, Status::WorkforceReady);
}

#[tokio::test]
async fn test_analysis_reads_selection_at_completion() {
    let config = CredzConfig {
        analyze_delay_ms: 50,
        ..fast_config()
    };
    let controller = Controller::with_seed(config, 1);
    controller.analyze().await;
    controller.toggle("web3-1").await.unwrap();
    controller.toggle("web3-2").await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    controller.wait_idle().await;

    assert_eq!(controller.insight().await.unwrap().web3_fluency, 50);
}

#[tokio::test]
async fn test_ring_radius_grows_with_selection() {
    assert_eq!(ring_radius(1), 0.0);
    assert_eq!(ring_radius(2), 350.0);
    assert_eq!(ring_radius(5), 405.0);

    let controller = controller();
    for id in ["spec-1", "spec-2", "spec-3", "spec-4", "web3-1"] {
        controller.toggle(id).await.unwrap();
    }
    let state = controller.state().await;
    let layout = state.layout();
    assert_eq!(layout.len(), 5);
    assert!(layout.iter().all(|p| p.radius == 405.0));
    assert_eq!(layout, ring_layout(state.selection().as_slice()));
}

#[tokio::test]
async fn test_fling_decays_back_to_idle_spin() {
    let controller = controller();
    controller.drag(-30.0, 900.0).await;
    assert_eq!(controller.state().await.carousel.mode(), CarouselMode::Dragging);

    controller.fling(2000.0).await;
    let first = controller.frame(16.66).await;
    assert_eq!(first.mode, CarouselMode::IdleSpin);
    assert!(first.velocity > 10.0);

    let settled = controller.spin(600).await.unwrap();
    assert_eq!(settled.velocity, 0.2);
    assert!(settled.stage.rotate_z.abs() < 1.0);
}
