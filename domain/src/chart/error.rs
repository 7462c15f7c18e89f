//! Chart validation errors

use thiserror::Error;

/// Why a chart specification cannot be rendered.
///
/// Messages are user-facing and shown verbatim in the warning reply.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Para DEMANDA usá pendiente negativa: b_d < 0 (recibí {0}).")]
    DemandSlope(f64),

    #[error("Para OFERTA usá pendiente positiva: b_s > 0 (recibí {0}).")]
    SupplySlope(f64),

    #[error("Necesito al menos 2 puntos para graficar la serie (recibí {got}).")]
    TooFewPoints { got: usize },

    #[error("Los parámetros del gráfico deben ser números finitos.")]
    NonFinite,
}
