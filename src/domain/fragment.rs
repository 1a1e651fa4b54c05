// Layout tree for a single tab
use super::chart::ChartSpec;
use super::kpi::KpiCard;
use super::tab::TabId;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Chart(Arc<ChartSpec>),
    Kpi(KpiCard),
    Row(Row),
}

/// A grid column; `width` is in twelfths of the row.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub width: u8,
    pub widgets: Vec<Widget>,
}

impl Column {
    pub fn new(width: u8, widgets: Vec<Widget>) -> Self {
        debug_assert!((1..=12).contains(&width));
        Self { width, widgets }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub columns: Vec<Column>,
}

impl Row {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub tab: TabId,
    pub rows: Vec<Row>,
}

impl Fragment {
    pub fn new(tab: TabId, rows: Vec<Row>) -> Self {
        Self { tab, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.columns.iter().all(|c| c.widgets.is_empty()))
    }

    /// Charts in document order (depth first)
    pub fn charts(&self) -> Vec<&ChartSpec> {
        let mut charts = Vec::new();
        for widget in self.widgets() {
            if let Widget::Chart(chart) = widget {
                charts.push(chart.as_ref());
            }
        }
        charts
    }

    /// KPI cards in document order (depth first)
    pub fn kpi_cards(&self) -> Vec<&KpiCard> {
        let mut cards = Vec::new();
        for widget in self.widgets() {
            if let Widget::Kpi(card) = widget {
                cards.push(card);
            }
        }
        cards
    }

    fn widgets(&self) -> Vec<&Widget> {
        let mut out = Vec::new();
        for row in &self.rows {
            collect_widgets(row, &mut out);
        }
        out
    }
}

fn collect_widgets<'a>(row: &'a Row, out: &mut Vec<&'a Widget>) {
    for column in &row.columns {
        for widget in &column.widgets {
            out.push(widget);
            if let Widget::Row(nested) = widget {
                collect_widgets(nested, out);
            }
        }
    }
}
