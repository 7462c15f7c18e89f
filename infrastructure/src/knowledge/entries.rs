//! Economics knowledge table: microeconomics, macroeconomics and financial
//! maths. Order matters; the first matching entry wins.

use super::static_base::KbEntry;

const fn e(keywords: &'static [&'static str], definition: &'static str) -> KbEntry {
    KbEntry::new(keywords, definition)
}

pub(super) const ENTRIES: &[KbEntry] = &[
    // ========== Microeconomía ==========
    e(
        &["demanda", "curva de demanda"],
        "La demanda es la cantidad de un bien o servicio que los consumidores están dispuestos a comprar a cada precio.",
    )
    .intuition("A mayor precio, menor cantidad demandada (relación inversa).")
    .mini_check("Si el precio aumenta, ¿qué pasa con la cantidad demandada ceteris paribus?"),
    e(
        &["oferta", "curva de oferta"],
        "La oferta es la cantidad de un bien o servicio que los productores están dispuestos a vender a cada precio.",
    )
    .intuition("A mayor precio, mayor cantidad ofrecida (relación directa).")
    .mini_check("Si el precio esperado sube, ¿cómo se desplaza la oferta actual?"),
    e(
        &["equilibrio de mercado", "equilibrio", "precio de equilibrio", "cantidad de equilibrio"],
        "Es el punto donde la cantidad demandada es igual a la cantidad ofrecida; determina el precio y la cantidad de equilibrio.",
    )
    .intuition("En equilibrio, no hay presiones para cambiar el precio si no cambian las condiciones.")
    .mini_check("Si la demanda aumenta, ¿qué pasa con el precio y la cantidad de equilibrio?"),
    e(
        &["excedente del consumidor"],
        "Es la diferencia entre lo que el consumidor está dispuesto a pagar y lo que efectivamente paga por una unidad.",
    )
    .intuition("Mide el 'beneficio' por pagar menos que la máxima disposición a pagar."),
    e(
        &["excedente del productor"],
        "Es la diferencia entre el precio que recibe el productor y su costo marginal de producir una unidad.",
    )
    .intuition("Mide el 'beneficio' de vender por encima del costo marginal."),
    e(
        &["elasticidad precio de la demanda", "elasticidad de la demanda", "elasticidad precio"],
        "Mide la variación porcentual de la cantidad demandada ante un cambio porcentual en el precio.",
    )
    .intuition("Indica cuán sensible es el consumidor a cambios de precio.")
    .mini_check("Si el precio sube 10% y la cantidad baja 25%, ¿la demanda es elástica o inelástica?")
    .formula("Epd = (%ΔQd) / (%ΔP)"),
    e(
        &["elasticidad ingreso", "elasticidad renta"],
        "Mide la variación porcentual de la cantidad demandada ante un cambio porcentual en el ingreso.",
    )
    .intuition("Sirve para clasificar bienes en normales (Ei>0) e inferiores (Ei<0).")
    .formula("Ei = (%ΔQ) / (%ΔY)"),
    e(
        &["elasticidad cruzada", "elasticidad precio cruzada"],
        "Mide la variación porcentual de la cantidad demandada de un bien ante un cambio porcentual en el precio de otro bien.",
    )
    .intuition("Si Ec>0 son sustitutos; si Ec<0 son complementarios.")
    .formula("Ec = (%ΔQx) / (%ΔPy)"),
    e(
        &["impuesto especifico", "impuesto específico", "impuesto por unidad"],
        "Un impuesto específico cobra una cantidad fija por unidad vendida, desplazando la oferta hacia arriba por el monto del impuesto.",
    )
    .intuition("Genera pérdida irrecuperable de eficiencia (deadweight loss) cuando distorsiona el equilibrio."),
    e(
        &["precio maximo", "precio máximo", "techo de precios"],
        "Un precio máximo es una regulación que impide que el precio supere cierto nivel, usualmente por debajo del equilibrio.",
    )
    .intuition("Suele generar escasez (exceso de demanda)."),
    e(
        &["precio minimo", "precio mínimo", "piso de precios"],
        "Un precio mínimo impide que el precio baje de cierto nivel, usualmente por encima del equilibrio.",
    )
    .intuition("Suele generar excedente (exceso de oferta)."),
    e(
        &["costo fijo", "costos fijos"],
        "Costo que no cambia con el nivel de producción en el corto plazo.",
    ),
    e(
        &["costo variable", "costos variables"],
        "Costo que varía con el nivel de producción.",
    ),
    e(
        &["costo total"],
        "Suma de costos fijos y variables para cada nivel de producción.",
    )
    .formula("CT(Q) = CF + CV(Q)"),
    e(
        &["costo medio", "costo promedio", "cme"],
        "Costo total dividido por la cantidad producida.",
    )
    .formula("CMe(Q) = CT(Q) / Q"),
    e(
        &["costo marginal", "cmg", "mc"],
        "Incremento del costo total al producir una unidad adicional.",
    )
    .intuition("Es el costo de la 'siguiente' unidad.")
    .mini_check("Si CMg < CMe, ¿el CMe sube o baja al producir una unidad más?")
    .formula("CMg(Q) = dCT/dQ"),
    e(
        &["producto marginal", "pmg"],
        "Incremento del producto total al emplear una unidad adicional de insumo, manteniendo los demás constantes.",
    ),
    e(
        &["producto medio", "pme"],
        "Producto total dividido por la cantidad del insumo.",
    ),
    e(
        &["competencia perfecta"],
        "Estructura con muchos compradores y vendedores, bienes homogéneos y libre entrada/salida; las empresas son tomadoras de precios.",
    ),
    e(
        &["monopolio"],
        "Un único vendedor controla el mercado; enfrenta toda la curva de demanda y fija precio maximizando beneficios.",
    )
    .intuition("Produce menos y vende a precio más alto que en competencia perfecta."),
    e(
        &["oligopolio"],
        "Pocos vendedores con interdependencia estratégica; las decisiones de una firma afectan a las demás.",
    ),
    e(
        &["competencia monopolistica", "competencia monopolística"],
        "Muchas empresas venden productos diferenciados; poder de mercado limitado y libre entrada a largo plazo.",
    ),
    e(
        &["curva de indiferencia", "preferencias"],
        "Conjunto de combinaciones de bienes que proporcionan el mismo nivel de utilidad al consumidor.",
    )
    .intuition("Son decrecientes y no se cruzan si las preferencias son bien comportadas."),
    e(
        &["restriccion presupuestaria", "restricción presupuestaria", "budget line"],
        "Conjunto de combinaciones de bienes que el consumidor puede comprar dado su ingreso y precios.",
    )
    .formula("Px·X + Py·Y = I"),
    // ========== Macroeconomía ==========
    e(
        &["pib", "pbi", "producto interno bruto"],
        "Valor de mercado de todos los bienes y servicios finales producidos en un país durante un período.",
    ),
    e(
        &["pib real", "pbi real"],
        "PIB ajustado por precios constantes; elimina el efecto de la inflación.",
    ),
    e(
        &["pib nominal", "pbi nominal"],
        "PIB medido a precios corrientes del período.",
    ),
    e(
        &["deflactor del pib", "deflactor del pbi"],
        "Índice de precios que relaciona PIB nominal y PIB real.",
    )
    .formula("Deflactor = (PIB Nominal / PIB Real) × 100"),
    e(
        &["pib per capita", "pib per cápita", "pbi per capita", "pbi per cápita"],
        "PIB dividido por la población del país.",
    )
    .intuition("Aproxima el ingreso promedio por persona."),
    e(
        &["inflacion", "inflación", "ipc", "indice de precios"],
        "Aumento sostenido y generalizado del nivel de precios en una economía.",
    )
    .intuition("Reduce el poder adquisitivo del dinero."),
    e(
        &["desempleo", "tasa de desempleo"],
        "Proporción de la fuerza laboral que busca empleo y no lo consigue.",
    )
    .intuition("Puede ser friccional, estructural o cíclico."),
    e(
        &["oferta agregada"],
        "Relación entre el nivel de precios y la cantidad total ofrecida de bienes y servicios.",
    ),
    e(
        &["demanda agregada"],
        "Relación entre el nivel de precios y la cantidad total demandada de bienes y servicios.",
    ),
    e(
        &["politica fiscal", "política fiscal"],
        "Uso del gasto público y los impuestos para influir en la economía.",
    )
    .intuition("Expansiva: más gasto o menos impuestos; contractiva: lo contrario."),
    e(
        &["politica monetaria", "política monetaria", "tasa de interes", "tasa de interés"],
        "Acciones del banco central para influir en la oferta monetaria y las tasas de interés.",
    )
    .intuition("Bajar tasas suele estimular consumo e inversión; subirlas enfría la economía."),
    e(
        &["balanza de pagos", "cuenta corriente", "cuenta capital"],
        "Registro contable de todas las transacciones económicas de un país con el exterior.",
    ),
    e(
        &["tipo de cambio", "tipo de cambio nominal"],
        "Precio de una moneda en términos de otra.",
    )
    .intuition("Si sube el tipo de cambio nominal (depreciación), los bienes locales se abaratan en el exterior."),
    e(
        &["tipo de cambio real"],
        "Tipo de cambio nominal ajustado por niveles de precios relativos.",
    )
    .formula("TCR = TCN × (P_dom / P_ext)"),
    e(
        &["curva de phillips"],
        "Relación (de corto plazo) entre inflación y desempleo.",
    )
    .intuition("Menos desempleo suele asociarse a más inflación en el corto plazo, con expectativas dadas."),
    e(
        &["is-lm", "modelo is lm", "is lm"],
        "Marco que combina equilibrio en el mercado de bienes (IS) y en el monetario (LM).",
    )
    .intuition("IS baja con la tasa de interés; LM depende de la oferta de dinero y la demanda de dinero."),
    // ========== Cálculo financiero ==========
    e(
        &["interes simple", "interés simple"],
        "El interés se calcula solo sobre el capital inicial durante todo el período.",
    )
    .formula("I = C · i · n ;  M = C · (1 + i · n)"),
    e(
        &["interes compuesto", "interés compuesto"],
        "El interés se capitaliza: cada período el capital crece con los intereses acumulados.",
    )
    .formula("M = C · (1 + i)^n"),
    e(
        &["tasa nominal", "tna", "tnv"],
        "Tasa anual que no considera capitalización dentro del año; requiere conversión a efectiva.",
    ),
    e(
        &["tasa efectiva anual", "tea"],
        "Tasa anual que incorpora la capitalización.",
    )
    .formula("TEA = (1 + i_m)^m − 1  (m: períodos de capitalización al año)"),
    e(
        &["vpn", "van", "valor presente neto"],
        "Suma de los flujos descontados menos la inversión inicial; si VPN>0, el proyecto crea valor.",
    )
    .intuition("Trae los flujos al presente para compararlos a la misma 'base temporal'.")
    .formula("VPN = -I0 + Σ[ Ft / (1 + r)^t ]"),
    e(
        &["tir", "tasa interna de retorno", "irr"],
        "Tasa que hace que el VPN sea cero; si TIR>k exigido, el proyecto es aceptable.",
    ),
    e(
        &["annuity", "renta", "anualidad", "pmt"],
        "Serie de pagos iguales en intervalos regulares.",
    )
    .formula("PV = PMT · [1 - (1 + r)^(-n)] / r ;  FV = PMT · [(1 + r)^n - 1] / r"),
    e(
        &["amortizacion francesa", "amortización francesa", "sistema frances"],
        "Cuota constante; al inicio predominan intereses, luego amortización de capital.",
    ),
    e(
        &["bono", "bond", "precio de bono"],
        "Título de deuda que paga cupones y/o principal; su precio es el valor presente de esos flujos.",
    )
    .intuition("Si sube la tasa de descuento, baja el precio del bono (relación inversa)."),
    e(
        &["tasa de descuento", "costo de capital", "wacc"],
        "Tasa usada para descontar flujos futuros; refleja el costo de oportunidad del capital.",
    ),
];
