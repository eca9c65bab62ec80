//! Text rendering of the showcase panels

use std::fmt::Write;

use super::colors::{self, ansi::*};
use crate::carousel::{CardVariation, front_index, ring_radius};
use crate::catalog::{self, Category, SkillLevel};
use crate::insight::InsightResult;
use crate::state::AppState;
use crate::wallet::{Provider, WalletState};

/// Sidebar: credentials grouped by category, active ones starred
pub fn catalog_panel(state: &AppState) -> String {
    let mut out = String::new();
    for category in Category::all() {
        let _ = writeln!(out, "{}", colors::heading(category.display_name()));
        for card in catalog::by_category(*category) {
            let active = state.selection().contains(card.id);
            let mark = if active { colors::success("*") } else { " ".to_string() };
            let _ = writeln!(
                out,
                "  {} {:<12} {:<36} {} {}",
                mark,
                card.id,
                card.short_title(),
                card.level.code(),
                colors::status(&format!("+{}", card.score))
            );
        }
    }
    out
}

pub fn wallet_line(wallet: &WalletState) -> String {
    match (&wallet.address, wallet.network) {
        (Some(address), Some(network)) if wallet.is_connected => {
            format!("{} {} on {}", colors::success("●"), address, network)
        }
        _ => colors::warning("Wallet not connected"),
    }
}

pub fn wallet_prompt() -> String {
    let mut out = colors::heading("Connect Wallet");
    out.push('\n');
    for provider in Provider::all() {
        let _ = writeln!(out, "  connect {:<14} {}", provider.as_str().to_lowercase(), provider.display_name());
    }
    out.push_str(&colors::status(
        "By connecting, you agree to the Simulated Terms of Service. This is a demo; no real assets are moved.",
    ));
    out
}

pub fn status_panel(state: &AppState) -> String {
    let progress = state.progress();
    let mut out = String::new();
    let _ = writeln!(out, "Wallet      {}", wallet_line(&state.wallet));
    let _ = writeln!(
        out,
        "Progress    {} {}",
        colors::tier(&format!("{}%", progress.percent()), progress.tier),
        colors::meter(progress.percent(), 20)
    );
    let _ = writeln!(
        out,
        "Trajectory  {} ({} / {} ZEN Points)",
        progress.trajectory, progress.current_score, progress.max_score
    );
    let _ = writeln!(
        out,
        "Carousel    {:?} rot {:.1}° vel {:.2} tilt {:.2}°",
        state.carousel.mode(),
        state.carousel.rotation(),
        state.carousel.velocity(),
        state.carousel.tilt()
    );
    if state.minting {
        let _ = writeln!(out, "{}", colors::status("Minting..."));
    }
    if state.analyzing {
        let _ = writeln!(out, "{}", colors::status("READING ON-CHAIN METADATA..."));
    }
    if state.selection().is_empty() {
        let _ = writeln!(
            out,
            "{}",
            colors::warning("System Empty: Connect Wallet & Select Programs")
        );
    }
    out
}

pub fn insight_panel(insight: &InsightResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Current Status  {}", colors::heading(insight.status.as_str()));
    let _ = writeln!(out, "{}Recommendation:{} {}", BOLD, RESET, insight.recommendation);
    for (label, value) in [
        ("Literacy", insight.literacy_score),
        ("AutoOps", insight.automation_readiness),
        ("Web3", insight.web3_fluency),
    ] {
        let _ = writeln!(out, "  {:<9}{:>4}% {}", label, value, colors::meter(value, 20));
    }
    let _ = writeln!(out, "Portfolio Narrative");
    let _ = writeln!(out, "  {}", colors::quote(&insight.narrative));
    out
}

pub fn ring_panel(state: &AppState) -> String {
    let layout = state.layout();
    if layout.is_empty() {
        return colors::status("No active cards on the ring");
    }
    let front = front_index(state.carousel.rotation(), layout.len());
    let mut out = format!(
        "{} card(s), radius {}px, stage {}\n",
        layout.len(),
        ring_radius(layout.len()),
        state.carousel.stage().css()
    );
    for (placement, card) in layout.iter().zip(state.selection().iter()) {
        let variation = CardVariation::for_card(card);
        let marker = if Some(placement.index) == front { "▶" } else { " " };
        let _ = writeln!(
            out,
            "{} {:<12} {:<10} {} {:>6.1}° x {:>7.1} z {:>7.1}  offset {:>+5.2}°  {:?}",
            marker,
            placement.id,
            card.category.badge(),
            level_bar(card.level),
            placement.angle_deg,
            placement.x,
            placement.z,
            variation.tilt_offset_deg,
            variation.motif
        );
    }
    out
}

fn level_bar(level: SkillLevel) -> String {
    level.bar().iter().map(|lit| if *lit { '▮' } else { '▯' }).collect()
}

pub fn timeline_panel(state: &AppState) -> String {
    let stops = state.timeline();
    if stops.is_empty() {
        return colors::status("Timeline Initializing...");
    }
    stops
        .iter()
        .map(|s| format!("{} {}", s.date, s.id))
        .collect::<Vec<_>>()
        .join(" ── ")
}
