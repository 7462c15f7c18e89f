//! Fixed texts used by the dispatcher: the tutor's system instruction,
//! chart replies and every degraded answer.

use crate::chart::ChartKind;

/// Templates for generating prompts and canned replies
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction sent first on every generative request
    pub fn system_instruction() -> &'static str {
        r#"Sos EcoBot, un profesor de economía (micro, macro y finanzas) para nivel secundario / universitario inicial.

TU ALCANCE (MUY IMPORTANTE):
- Solo respondés preguntas relacionadas con economía:
  - Microeconomía (oferta, demanda, elasticidades, costos, estructuras de mercado, bienestar, etc.).
  - Macroeconomía (PIB/PBI, inflación, desempleo, política fiscal y monetaria, balanza de pagos, tipo de cambio, etc.).
  - Cálculo financiero básico (interés simple y compuesto, VPN/VAN, TIR, tasas nominales y efectivas, bonos, etc.).
- Si la pregunta NO es de economía:
  1) No inventes una respuesta técnica.
  2) Contestá en 1–2 líneas: "Solo puedo ayudarte con temas de economía. Esta pregunta parece ser de otro tema."
  3) Podés ofrecer reformular la duda hacia un ejemplo económico.

ESTILO DE RESPUESTA:
- Tono cálido, claro y ordenado, sin discursos larguísimos.
- Explicá paso a paso cuando el concepto lo amerite.
- Evitá tecnicismos innecesarios.

FORMATO RECOMENDADO (si aplica):
  • Definición: (1–3 líneas, concreta).
  • Intuición: (explicación en lenguaje cotidiano).
  • Fórmula y símbolos: (solo si es relevante).
  • Ejemplo breve: (numérico o cotidiano).
  • Mini-check: (una pregunta cortita para que la persona piense).

OTRAS INDICACIONES:
- Si la persona marca un error, agradecé la corrección y re-explicá con más claridad.
- Si piden gráficos, describí qué mostraría el gráfico; el backend se encarga de generarlo."#
    }

    /// Closing line appended to every knowledge-base answer
    pub fn closing_prompt() -> &'static str {
        "• Mini-check: ¿Querés que lo bajemos a un numerito rápido?"
    }

    /// Static answer used when the completion provider cannot be reached
    pub fn provider_unavailable(detail: &str) -> String {
        format!(
            "⚠️ No pude consultar al modelo ahora.\n\
             • Definición: La demanda es la cantidad que los consumidores desean comprar a cada precio; \
             la oferta, la cantidad que los productores desean vender.\n\
             {}\n\
             (Detalle técnico: {})",
            Self::closing_prompt(),
            detail
        )
    }

    /// Two-line answer used when a knowledge record cannot be formatted
    pub fn degraded_lookup(raw: &str, detail: &str) -> String {
        format!(
            "• Definición: {}\n{}\n(Nota técnica: {})",
            raw,
            Self::closing_prompt(),
            detail
        )
    }

    /// Reply after a chart file has been written
    pub fn chart_saved(kind: ChartKind, path: &str) -> String {
        format!(
            "✅ Gráfico de {} guardado en:\n{}\n\n📘 Explicación: {}",
            kind.label(),
            path,
            Self::chart_explanation(kind)
        )
    }

    fn chart_explanation(kind: ChartKind) -> &'static str {
        match kind {
            ChartKind::Series => {
                "El gráfico de serie muestra la evolución de tus valores en orden. \
                 Sirve para ver subas, bajas y tendencias simples."
            }
            ChartKind::Cost => {
                "Se muestran curvas típicas (Costo Medio y Costo Marginal). \
                 En muchos casos el CMg corta al CMe en su punto mínimo."
            }
            ChartKind::SupplyDemand => {
                "El punto donde se cruzan oferta y demanda es el equilibrio de mercado. \
                 Allí, la cantidad demandada coincide con la ofrecida al precio de equilibrio."
            }
            ChartKind::Demand => {
                "La curva de demanda tiene pendiente negativa: \
                 cuando el precio sube, la cantidad demandada baja (y viceversa)."
            }
            ChartKind::Supply => {
                "La curva de oferta es creciente: \
                 a precios más altos, los productores están dispuestos a ofrecer más cantidad."
            }
        }
    }

    /// Warning returned when chart parameters are rejected
    pub fn chart_failed(detail: &str) -> String {
        format!("⚠️ No pude generar el gráfico: {}", detail)
    }

    /// Usage hint for a series request without enough values
    pub fn series_usage() -> &'static str {
        "Decime valores así: `grafico serie 10,12,11,15`"
    }

    /// Help listing every chart command
    pub fn chart_help() -> &'static str {
        "Usos de `grafico`:\n\
         • `grafico demanda [a_d b_d]`\n\
         • `grafico oferta  [a_s b_s]`\n\
         • `grafico oferta demanda [a_d b_d a_s b_s]`\n\
         • `grafico costos`\n\
         • `grafico serie 10,12,11,15`"
    }

    /// Reply used when message processing fails unexpectedly
    pub fn internal_error(detail: &str) -> String {
        format!("Ocurrió un error interno en el bot: {}", detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_unavailable_ends_with_detail() {
        let text = PromptTemplate::provider_unavailable("timeout");
        assert!(text.starts_with("⚠️ No pude consultar al modelo ahora."));
        assert!(text.contains(PromptTemplate::closing_prompt()));
        assert!(text.ends_with("(Detalle técnico: timeout)"));
    }

    #[test]
    fn test_degraded_lookup_has_two_answer_lines_and_note() {
        let text = PromptTemplate::degraded_lookup("algo", "sin definición");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "• Definición: algo");
        assert_eq!(lines[1], PromptTemplate::closing_prompt());
        assert!(lines[2].starts_with("(Nota técnica:"));
    }

    #[test]
    fn test_chart_saved_mentions_label_and_path() {
        let text = PromptTemplate::chart_saved(ChartKind::Series, "/tmp/out/serie-1.png");
        assert!(text.contains("SERIE"));
        assert!(text.contains("/tmp/out/serie-1.png"));
    }

    #[test]
    fn test_chart_help_lists_all_commands() {
        let help = PromptTemplate::chart_help();
        for cmd in ["demanda", "oferta", "costos", "serie"] {
            assert!(help.contains(cmd));
        }
    }
}
