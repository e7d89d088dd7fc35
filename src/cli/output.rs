use anyhow::Result;
use serde_json::json;
use wayfinder_tui::BrowseOutcome;

/// Print a plain-text representation of the browse outcome.
pub(crate) fn print_plain(outcome: &BrowseOutcome) {
    if outcome.visits.is_empty() {
        println!("No pages visited");
        return;
    }

    for href in &outcome.visits {
        println!("{href}");
    }
}

/// Format the browse outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &BrowseOutcome) -> Result<String> {
    let payload = json!({
        "visits": outcome.visits,
        "last": outcome.last(),
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the browse outcome.
pub(crate) fn print_json(outcome: &BrowseOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;

    #[test]
    fn json_format_lists_visits_and_the_final_location() {
        let outcome = BrowseOutcome {
            visits: vec!["/services/sonic-ops".into(), "/pricing".into()],
        };

        let json = format_outcome_json(&outcome).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["visits"][0], "/services/sonic-ops");
        assert_eq!(value["last"], "/pricing");
    }

    #[test]
    fn json_last_is_null_without_visits() {
        let json = format_outcome_json(&BrowseOutcome::default()).expect("json");
        let value: Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value["last"], Value::Null);
    }
}
