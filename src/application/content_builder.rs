// Static content builder - Datasets, charts and tab layouts built once at startup
use crate::domain::chart::{
    BarMode, BarSpec, CategoryOrder, ChartBody, ChartSpec, GaugeSpec, GaugeStep, Orientation, SeriesSpec,
};
use crate::domain::dataset::Dataset;
use crate::domain::fragment::{Column, Fragment, Row, Widget};
use crate::domain::kpi::KpiCard;
use crate::domain::palette::Color;
use crate::domain::tab::TabId;
use std::sync::Arc;

const OVERDUE_INVOICES: [(&str, f64); 7] = [
    ("02/10", 9100.10),
    ("03/10", 17698.26),
    ("04/10", 14871.20),
    ("05/10", 24195.21),
    ("06/10", 1200.00),
    ("07/10", 1345.80),
    ("08/10", 4337.45),
];

// (week, received, pending)
const RECEIVED_VS_PENDING: [(&str, f64, f64); 8] = [
    ("27/10/2025", 23094.49, 15090.40),
    ("13/10/2025", 44152.84, 12000.10),
    ("18/10/2025", 41936.08, 5009.10),
    ("24/10/2025", 22104.33, 18001.90),
    ("31/10/2025", 58706.12, 14000.10),
    ("07/11/2025", 41120.10, 23000.10),
    ("14/11/2025", 42128.82, 17000.56),
    ("Outros (6)", 40177.57, 34193.84),
];

// (month, on time, late)
const DELIVERIES: [(&str, f64, f64); 4] = [
    ("Jan", 120.0, 10.0),
    ("Fev", 140.0, 8.0),
    ("Mar", 130.0, 15.0),
    ("Abr", 150.0, 5.0),
];

/// Everything the dashboard shows, immutable after [`StaticContent::build`].
#[derive(Debug)]
pub struct StaticContent {
    datasets: Vec<Arc<Dataset>>,
    charts: Vec<Arc<ChartSpec>>,
    billing: Fragment,
    logistics: Fragment,
    compliance: Fragment,
}

impl StaticContent {
    pub fn build() -> Self {
        let overdue = Arc::new(Dataset::from_pairs("Valor", OVERDUE_INVOICES));
        let received = Arc::new(Dataset::from_pairs(
            "Recebido",
            RECEIVED_VS_PENDING.iter().map(|(week, received, _)| (*week, *received)),
        ));
        let pending = Arc::new(Dataset::from_pairs(
            "A-Receber",
            RECEIVED_VS_PENDING.iter().map(|(week, _, pending)| (*week, *pending)),
        ));
        let on_time = Arc::new(Dataset::from_pairs(
            "Entregas no Prazo",
            DELIVERIES.iter().map(|(month, on_time, _)| (*month, *on_time)),
        ));
        let late = Arc::new(Dataset::from_pairs(
            "Entregas Atrasadas",
            DELIVERIES.iter().map(|(month, _, late)| (*month, *late)),
        ));

        let billing_gauge = Arc::new(billing_gauge());
        let overdue_bar = Arc::new(ChartSpec::new(
            "bar-vencidas",
            "Faturas vencidas nos últimos 20 dias",
            ChartBody::Bars(
                BarSpec::new(
                    Orientation::Vertical,
                    BarMode::Group,
                    vec![SeriesSpec::new(Some(Color::PrimaryBlue), overdue.clone()).unnamed()],
                )
                .with_axis_titles("Data", "Valor"),
            ),
        ));
        let pending_bar = Arc::new(ChartSpec::new(
            "bar-pendentes",
            "Recebidos x Pendentes - Por Semana",
            ChartBody::Bars(BarSpec {
                category_order: Some(CategoryOrder::TotalAscending),
                ..BarSpec::new(
                    Orientation::Horizontal,
                    BarMode::Stack,
                    vec![
                        SeriesSpec::new(Some(Color::PrimaryGreen), received.clone()),
                        SeriesSpec::new(Some(Color::Red), pending.clone()),
                    ],
                )
            }),
        ));
        let deliveries_bar = Arc::new(ChartSpec::new(
            "logistica-graph",
            "Performance de Entregas",
            ChartBody::Bars(
                BarSpec::new(
                    Orientation::Vertical,
                    BarMode::Group,
                    vec![
                        SeriesSpec::new(None, on_time.clone()),
                        SeriesSpec::new(None, late.clone()),
                    ],
                )
                .with_axis_titles("Mes", "value"),
            ),
        ));
        let compliance_gauge = Arc::new(compliance_gauge());

        let billing = billing_layout(&billing_gauge, &overdue_bar, &pending_bar);
        let logistics = logistics_layout(&deliveries_bar);
        let compliance = compliance_layout(&compliance_gauge);

        Self {
            datasets: vec![overdue, received, pending, on_time, late],
            charts: vec![billing_gauge, overdue_bar, pending_bar, deliveries_bar, compliance_gauge],
            billing,
            logistics,
            compliance,
        }
    }

    pub fn datasets(&self) -> &[Arc<Dataset>] {
        &self.datasets
    }

    pub fn charts(&self) -> &[Arc<ChartSpec>] {
        &self.charts
    }

    pub fn fragment(&self, tab: TabId) -> &Fragment {
        match tab {
            TabId::Billing => &self.billing,
            TabId::Logistics => &self.logistics,
            TabId::Compliance => &self.compliance,
        }
    }
}

fn billing_gauge() -> ChartSpec {
    let gauge = GaugeSpec {
        suffix: Some("%".to_string()),
        number_font_size: Some(50),
        title_font_size: Some(20),
        tick_width: Some(1),
        tick_color: Some("darkblue".to_string()),
        bar_thickness: Some(0.3),
        transparent_background: true,
        border_width: Some(2),
        border_color: Some(Color::Panel),
        steps: vec![
            GaugeStep::new(0.0, 30.0, Color::Red),
            GaugeStep::new(30.0, 70.0, Color::Yellow),
            GaugeStep::new(70.0, 100.0, Color::PrimaryGreen),
        ],
        ..GaugeSpec::new(73.72, 100.0, Color::PrimaryBlue)
    };

    ChartSpec::new("gauge-cobranca", "Índice de Recebimento dos Títulos", ChartBody::Gauge(gauge))
        .with_height(350)
}

fn compliance_gauge() -> ChartSpec {
    let gauge = GaugeSpec {
        steps: vec![
            GaugeStep::new(0.0, 50.0, Color::Red),
            GaugeStep::new(50.0, 80.0, Color::Yellow),
        ],
        ..GaugeSpec::new(85.0, 100.0, Color::PrimaryBlue)
    };

    ChartSpec::new("compliance-graph", "Licenças de Frota Ativas (%)", ChartBody::Gauge(gauge))
}

fn chart(spec: &Arc<ChartSpec>) -> Widget {
    Widget::Chart(spec.clone())
}

fn kpi(card: KpiCard) -> Widget {
    Widget::Kpi(card)
}

fn billing_layout(gauge: &Arc<ChartSpec>, overdue: &Arc<ChartSpec>, pending: &Arc<ChartSpec>) -> Fragment {
    let headline = Row::new(vec![
        Column::new(4, vec![chart(gauge)]),
        Column::new(
            8,
            vec![
                kpi(KpiCard::new(
                    "kpi-total",
                    "Valor Total de títulos com Vencimento até ontem",
                    "R$1.269.773,23",
                )
                .with_color(Color::PrimaryBlue)),
                kpi(KpiCard::new(
                    "kpi-total-pago",
                    "Valor Total de títulos pago no mês até ontem",
                    "R$2.269.773,23",
                )
                .with_color(Color::PrimaryBlue)),
                Widget::Row(Row::new(vec![
                    Column::new(6, vec![kpi(KpiCard::new("kpi-qtd", "Qtd. com vencimento até ontem", "936"))]),
                    Column::new(
                        6,
                        vec![kpi(KpiCard::new(
                            "kpi-pagos",
                            "Qtd. pagos no mês, vencimentos até ontem",
                            "690",
                        ))],
                    ),
                ])),
            ],
        ),
    ]);

    let charts = Row::new(vec![
        Column::new(6, vec![chart(overdue)]),
        Column::new(6, vec![chart(pending)]),
    ]);

    let footer = Row::new(vec![
        Column::new(
            3,
            vec![kpi(KpiCard::new(
                "kpi-vencidas",
                "Faturas vencidas nos últimos 20 dias",
                "R$259.002,18",
            )
            .with_color(Color::Red))],
        ),
        Column::new(
            3,
            vec![kpi(KpiCard::new(
                "kpi-receber",
                "Faturas a Receber nos próximos 20 dias",
                "R$804.862,72",
            )
            .with_color(Color::PrimaryGreen))],
        ),
        Column::new(
            3,
            vec![kpi(KpiCard::new("kpi-total-mes", "Total de Títulos com Vencimentos no Mês", "936"))],
        ),
        Column::new(
            3,
            vec![kpi(KpiCard::new("kpi-venc-mes", "Vencimentos do Mês", "R$1.269.773,23"))],
        ),
    ]);

    Fragment::new(TabId::Billing, vec![headline, charts, footer])
}

fn logistics_layout(deliveries: &Arc<ChartSpec>) -> Fragment {
    Fragment::new(
        TabId::Logistics,
        vec![
            Row::new(vec![Column::new(12, vec![chart(deliveries)])]),
            Row::new(vec![
                Column::new(4, vec![kpi(KpiCard::new("kpi-log-1", "Total de Entregas", "448"))]),
                Column::new(
                    4,
                    vec![kpi(KpiCard::new("kpi-log-2", "Taxa de Atraso Média", "6.2%").with_color(Color::Red))],
                ),
                Column::new(4, vec![kpi(KpiCard::new("kpi-log-3", "Custo Médio por Entrega", "R$12,45"))]),
            ]),
        ],
    )
}

fn compliance_layout(gauge: &Arc<ChartSpec>) -> Fragment {
    Fragment::new(
        TabId::Compliance,
        vec![Row::new(vec![
            Column::new(6, vec![chart(gauge)]),
            Column::new(
                6,
                vec![
                    kpi(KpiCard::new("kpi-comp-1", "Total de Licenças", "120")),
                    kpi(KpiCard::new("kpi-comp-2", "Licenças a Vencer (30 dias)", "18").with_color(Color::Yellow)),
                    kpi(KpiCard::new("kpi-comp-3", "Licenças Vencidas", "5").with_color(Color::Red)),
                ],
            ),
        ])],
    )
}
