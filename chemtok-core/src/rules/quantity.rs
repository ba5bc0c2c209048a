//! Numbers fused to their units

use super::RuleEngine;
use crate::normalize::is_orbital;

/// Separate value and unit in `10mg`, `5%`, `pH7` and `25°C`
pub fn quantity(engine: &RuleEngine, token: &str, _next: Option<&str>) -> Option<Vec<String>> {
    let patterns = engine.patterns();

    if let Some(caps) = patterns.quantity.captures(token) {
        let number = caps[1].trim_start_matches(['∼', '~', '≈', '-']);
        if !is_orbital(number, &caps[2]) {
            return Some(vec![caps[1].to_string(), caps[2].to_string()]);
        }
    }

    if let Some(caps) = patterns.percentage.captures(token) {
        return Some(vec![caps[1].to_string(), caps[2].to_string()]);
    }

    if let Some(caps) = patterns.ph.captures(token) {
        return Some(vec![caps[1].to_string(), caps[2].to_string()]);
    }

    let caps = patterns.temperature.captures(token)?;
    Some(
        caps.iter()
            .skip(1)
            .flatten()
            .map(|m| m.as_str().to_string())
            .filter(|piece| !piece.is_empty())
            .collect(),
    )
}
