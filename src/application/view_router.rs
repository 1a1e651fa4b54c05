// View router - Maps a tab identifier to its pre-built fragment
use crate::application::content_builder::StaticContent;
use crate::domain::fragment::Fragment;
use crate::domain::tab::{TabId, UnknownTabError};
use std::sync::Arc;

#[derive(Clone)]
pub struct ViewRouter {
    content: Arc<StaticContent>,
}

impl ViewRouter {
    pub fn new(content: Arc<StaticContent>) -> Self {
        for tab in TabId::ALL {
            let fragment = content.fragment(tab);
            debug_assert!(!fragment.is_empty(), "tab {} has no content", tab);
            tracing::debug!(
                tab = %tab,
                charts = fragment.charts().len(),
                kpis = fragment.kpi_cards().len(),
                "Tab layout ready"
            );
        }

        Self { content }
    }

    /// Resolve a textual tab identifier.
    ///
    /// Unknown identifiers fail with [`UnknownTabError`] instead of
    /// producing an empty fragment.
    pub fn select_tab(&self, tab_id: &str) -> Result<&Fragment, UnknownTabError> {
        match tab_id.parse::<TabId>() {
            Ok(tab) => Ok(self.select(tab)),
            Err(e) => {
                tracing::warn!("Rejected tab selection: {}", e);
                Err(e)
            }
        }
    }

    pub fn select(&self, tab: TabId) -> &Fragment {
        tracing::debug!("Selecting tab {}", tab);
        self.content.fragment(tab)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartBody, ChartKind};

    fn router() -> ViewRouter {
        ViewRouter::new(Arc::new(StaticContent::build()))
    }

    fn kpis(fragment: &Fragment) -> Vec<(&str, &str)> {
        fragment
            .kpi_cards()
            .iter()
            .map(|c| (c.title.as_str(), c.value.as_str()))
            .collect()
    }

    #[test]
    fn test_every_tab_has_content() {
        let router = router();
        for tab in TabId::ALL {
            let fragment = router.select_tab(tab.value()).unwrap();
            assert_eq!(fragment.tab, tab);
            assert!(!fragment.is_empty());
            assert!(!fragment.charts().is_empty());
            assert!(!fragment.kpi_cards().is_empty());
        }
    }

    #[test]
    fn test_select_logistics() {
        let router = router();
        let fragment = router.select_tab("tab-logistica").unwrap();

        let charts = fragment.charts();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title, "Performance de Entregas");
        assert_eq!(charts[0].kind(), ChartKind::Bar);

        assert_eq!(
            kpis(fragment),
            [
                ("Total de Entregas", "448"),
                ("Taxa de Atraso Média", "6.2%"),
                ("Custo Médio por Entrega", "R$12,45"),
            ]
        );
    }

    #[test]
    fn test_select_compliance() {
        let router = router();
        let fragment = router.select_tab("tab-compliance").unwrap();

        let charts = fragment.charts();
        assert_eq!(charts.len(), 1);
        assert_eq!(charts[0].title, "Licenças de Frota Ativas (%)");
        assert_eq!(charts[0].kind(), ChartKind::Gauge);
        match &charts[0].body {
            ChartBody::Gauge(gauge) => assert_eq!(gauge.value, 85.0),
            other => panic!("expected gauge, got {:?}", other),
        }

        assert_eq!(
            kpis(fragment),
            [
                ("Total de Licenças", "120"),
                ("Licenças a Vencer (30 dias)", "18"),
                ("Licenças Vencidas", "5"),
            ]
        );
    }

    #[test]
    fn test_select_billing_titles() {
        let router = router();
        let fragment = router.select_tab("tab-cobranca").unwrap();

        let titles: Vec<&str> = fragment.kpi_cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Valor Total de títulos com Vencimento até ontem",
                "Valor Total de títulos pago no mês até ontem",
                "Qtd. com vencimento até ontem",
                "Qtd. pagos no mês, vencimentos até ontem",
                "Faturas vencidas nos últimos 20 dias",
                "Faturas a Receber nos próximos 20 dias",
                "Total de Títulos com Vencimentos no Mês",
                "Vencimentos do Mês",
            ]
        );
        assert_eq!(fragment.charts().len(), 3);
    }

    #[test]
    fn test_unknown_tab_fails_fast() {
        let router = router();
        let err = router.select_tab("tab-rh").unwrap_err();
        assert_eq!(err, UnknownTabError("tab-rh".to_string()));
    }

    #[test]
    fn test_selection_is_idempotent() {
        let router = router();
        let first = router.select_tab("tab-cobranca").unwrap();
        let second = router.select_tab("tab-cobranca").unwrap();

        assert!(std::ptr::eq(first, second));
        assert_eq!(first, second);
    }
}
