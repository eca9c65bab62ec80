// src/insight/narrative.rs
// Portfolio narrative template

use super::Status;

/// Fill the fixed narrative template.
///
/// The automation clause switches above 50; the Web3 clause only appears
/// above 20.
pub fn narrative(count: usize, automation: u32, web3: u32, status: Status) -> String {
    let mut text = format!(
        "The learner has established a verified portfolio of {} credentials. ",
        count
    );

    if automation > 50 {
        text.push_str("They demonstrate strong capability in automated workflows and agentic systems. ");
    } else {
        text.push_str("They are building foundational literacy. ");
    }

    if web3 > 20 {
        text.push_str(
            "Notably, they possess on-chain identity verification skills, positioning them for the Web3 economy. ",
        );
    }

    text.push_str(&format!(
        "Current trajectory suggests a strong fit for {} roles within the ZEN ecosystem.",
        status.as_str().to_lowercase()
    ));
    text
}
