//! Chart request classification.
//!
//! Operates on folded text (see [`fold`](super::normalize::fold)). Trigger
//! words are substring-matched and tolerate common typos.

use super::numbers::extract_floats;

const CHART_TRIGGERS: &[&str] = &["grafico"];
const SERIES_WORD: &str = "serie";
const DEMAND_WORDS: &[&str] = &["demanda", "dema", "demna", "demada"];
const SUPPLY_WORDS: &[&str] = &["oferta", "ofrta", "ofe"];
const COST_WORDS: &[&str] = &["costo", "costos", "coste", "costes"];

/// Which chart the user asked for, with the numeric arguments found.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartIntent {
    /// `grafico serie 10,12,11,15`
    Series(Vec<f64>),
    /// Both demand and supply words present: `[a_d b_d a_s b_s]`.
    SupplyDemand(Vec<f64>),
    /// `[a_d b_d]`
    Demand(Vec<f64>),
    /// `[a_s b_s]`
    Supply(Vec<f64>),
    Cost,
    /// Chart trigger present but no known chart type.
    Unrecognized,
}

fn contains_any(text: &str, words: &[&str]) -> bool {
    words.iter().any(|w| text.contains(w))
}

/// Returns `Some` when the folded message asks for a chart.
///
/// Sub-type precedence: series > supply+demand > demand > supply > cost.
pub fn classify_chart(folded: &str) -> Option<ChartIntent> {
    if !contains_any(folded, CHART_TRIGGERS) {
        return None;
    }

    let wants_demand = contains_any(folded, DEMAND_WORDS);
    let wants_supply = contains_any(folded, SUPPLY_WORDS);
    let values = extract_floats(folded);

    let intent = if let Some((_, after)) = folded.split_once(SERIES_WORD) {
        let scoped = extract_floats(after);
        if scoped.len() >= 2 {
            ChartIntent::Series(scoped)
        } else {
            ChartIntent::Series(values)
        }
    } else if wants_demand && wants_supply {
        ChartIntent::SupplyDemand(values)
    } else if wants_demand {
        ChartIntent::Demand(values)
    } else if wants_supply {
        ChartIntent::Supply(values)
    } else if contains_any(folded, COST_WORDS) {
        ChartIntent::Cost
    } else {
        ChartIntent::Unrecognized
    };

    Some(intent)
}
