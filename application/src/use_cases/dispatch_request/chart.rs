//! Chart route: turn a [`ChartIntent`] into a reply.
//!
//! Curve charts fall back to built-in parameters when too few numbers were
//! given; series charts answer with a usage hint instead.

use crate::ports::chart_renderer::{ChartRenderer, RenderError};
use ecobot_domain::{ChartIntent, ChartSpec, CostCurves, LinearCurve, PromptTemplate};
use std::sync::Arc;
use tracing::{debug, warn};

/// What the chart route decided before any rendering happens.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ChartPlan {
    Render(ChartSpec),
    Reply(&'static str),
}

fn curve_or(values: &[f64], default: LinearCurve) -> LinearCurve {
    match values {
        [intercept, slope, ..] => LinearCurve::new(*intercept, *slope),
        _ => default,
    }
}

pub(crate) fn plan(intent: ChartIntent) -> ChartPlan {
    match intent {
        ChartIntent::Series(values) if values.len() < 2 => {
            ChartPlan::Reply(PromptTemplate::series_usage())
        }
        ChartIntent::Series(values) => ChartPlan::Render(ChartSpec::Series(values)),
        ChartIntent::SupplyDemand(values) => {
            let (demand, supply) = match values.as_slice() {
                [a_d, b_d, a_s, b_s, ..] => (
                    LinearCurve::new(*a_d, *b_d),
                    LinearCurve::new(*a_s, *b_s),
                ),
                _ => (LinearCurve::DEFAULT_DEMAND, LinearCurve::DEFAULT_SUPPLY),
            };
            ChartPlan::Render(ChartSpec::SupplyDemand { demand, supply })
        }
        ChartIntent::Demand(values) => {
            ChartPlan::Render(ChartSpec::Demand(curve_or(&values, LinearCurve::DEFAULT_DEMAND)))
        }
        ChartIntent::Supply(values) => {
            ChartPlan::Render(ChartSpec::Supply(curve_or(&values, LinearCurve::DEFAULT_SUPPLY)))
        }
        ChartIntent::Cost => ChartPlan::Render(ChartSpec::Cost(CostCurves::default())),
        ChartIntent::Unrecognized => ChartPlan::Reply(PromptTemplate::chart_help()),
    }
}

/// Render off the async executor and convert every outcome to reply text.
pub(crate) async fn resolve(renderer: &Arc<dyn ChartRenderer>, intent: ChartIntent) -> String {
    let spec = match plan(intent) {
        ChartPlan::Reply(text) => return text.to_string(),
        ChartPlan::Render(spec) => spec,
    };

    if let Err(e) = spec.validate() {
        debug!("Chart parameters rejected: {}", e);
        return PromptTemplate::chart_failed(&e.to_string());
    }

    let kind = spec.kind();
    let renderer = Arc::clone(renderer);
    let result = tokio::task::spawn_blocking(move || renderer.render(&spec))
        .await
        .unwrap_or_else(|e| Err(RenderError::Worker(e.to_string())));

    match result {
        Ok(path) => {
            debug!(kind = %kind, path = %path.display(), "Chart written");
            PromptTemplate::chart_saved(kind, &path.display().to_string())
        }
        Err(e) => {
            warn!(kind = %kind, "Chart rendering failed: {}", e);
            PromptTemplate::chart_failed(&e.to_string())
        }
    }
}
