// src/progress.rs
// ZEN score readout and the date-ordered timeline

use serde::Serialize;

use crate::selection::SelectionSet;

/// Color band of the progress ring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressTier {
    /// below 40%
    Low,
    /// below 80%
    Mid,
    High,
}

/// Score-threshold trajectory label. Independent of the coach's status.
pub fn trajectory(current_score: u32) -> &'static str {
    let mut status = "Education-Ready";
    if current_score > 30 {
        status = "Workforce-Ready";
    }
    if current_score > 80 {
        status = "Trainer-Level";
    }
    if current_score > 120 {
        status = "Universal Operator";
    }
    status
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressReadout {
    pub current_score: u32,
    pub max_score: u32,
    /// Percentage in [0, 100]
    pub progress: f64,
    pub trajectory: &'static str,
    pub tier: ProgressTier,
}

impl ProgressReadout {
    pub fn new(current_score: u32, max_score: u32) -> Self {
        let progress = if max_score == 0 {
            0.0
        } else {
            (current_score as f64 / max_score as f64 * 100.0).min(100.0)
        };
        let tier = if progress < 40.0 {
            ProgressTier::Low
        } else if progress < 80.0 {
            ProgressTier::Mid
        } else {
            ProgressTier::High
        };
        Self {
            current_score,
            max_score,
            progress,
            trajectory: trajectory(current_score),
            tier,
        }
    }

    pub fn percent(&self) -> u32 {
        self.progress.round() as u32
    }
}

/// One stop on the footer timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub id: &'static str,
    pub date: &'static str,
    pub accent: &'static str,
}

pub fn timeline(selection: &SelectionSet) -> Vec<TimelineEntry> {
    selection
        .iter()
        .map(|c| TimelineEntry {
            id: c.id,
            date: c.date,
            accent: c.colors.accent,
        })
        .collect()
}
