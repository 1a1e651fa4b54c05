// Chart specification domain models
use super::dataset::Dataset;
use super::palette::Color;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Gauge,
    Bar,
    StackedBar,
}

impl ChartKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Gauge => "gauge",
            ChartKind::Bar => "bar",
            ChartKind::StackedBar => "stackedBar",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarMode {
    Group,
    Stack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryOrder {
    TotalAscending,
}

/// A coloured band on the gauge axis, covering `from..to`.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeStep {
    pub from: f64,
    pub to: f64,
    pub color: Color,
}

impl GaugeStep {
    pub fn new(from: f64, to: f64, color: Color) -> Self {
        Self { from, to, color }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GaugeSpec {
    pub value: f64,
    pub suffix: Option<String>,
    pub number_font_size: Option<u32>,
    pub title_font_size: Option<u32>,
    pub axis_max: f64,
    pub tick_width: Option<u32>,
    pub tick_color: Option<String>,
    pub bar_color: Color,
    pub bar_thickness: Option<f64>,
    pub transparent_background: bool,
    pub border_width: Option<u32>,
    pub border_color: Option<Color>,
    pub steps: Vec<GaugeStep>,
}

impl GaugeSpec {
    pub fn new(value: f64, axis_max: f64, bar_color: Color) -> Self {
        Self {
            value,
            suffix: None,
            number_font_size: None,
            title_font_size: None,
            axis_max,
            tick_width: None,
            tick_color: None,
            bar_color,
            bar_thickness: None,
            transparent_background: false,
            border_width: None,
            border_color: None,
            steps: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub color: Option<Color>,
    pub dataset: Arc<Dataset>,
    /// Lone series of a bar chart carry no trace name
    pub unnamed: bool,
}

impl SeriesSpec {
    pub fn new(color: Option<Color>, dataset: Arc<Dataset>) -> Self {
        Self {
            color,
            dataset,
            unnamed: false,
        }
    }

    pub fn unnamed(mut self) -> Self {
        self.unnamed = true;
        self
    }

    /// Name shown in the legend; empty for unnamed series
    pub fn name(&self) -> &str {
        if self.unnamed { "" } else { self.dataset.name() }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSpec {
    pub orientation: Orientation,
    pub mode: BarMode,
    pub series: Vec<SeriesSpec>,
    pub x_title: Option<String>,
    pub y_title: Option<String>,
    pub category_order: Option<CategoryOrder>,
}

impl BarSpec {
    pub fn new(orientation: Orientation, mode: BarMode, series: Vec<SeriesSpec>) -> Self {
        Self {
            orientation,
            mode,
            series,
            x_title: None,
            y_title: None,
            category_order: None,
        }
    }

    pub fn with_axis_titles(mut self, x_title: &str, y_title: &str) -> Self {
        self.x_title = Some(x_title.to_string());
        self.y_title = Some(y_title.to_string());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    Gauge(GaugeSpec),
    Bars(BarSpec),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub id: String,
    pub title: String,
    pub height: Option<u32>,
    pub body: ChartBody,
}

impl ChartSpec {
    pub fn new(id: &str, title: &str, body: ChartBody) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            height: None,
            body,
        }
    }

    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn kind(&self) -> ChartKind {
        match &self.body {
            ChartBody::Gauge(_) => ChartKind::Gauge,
            ChartBody::Bars(bars) if bars.mode == BarMode::Stack => ChartKind::StackedBar,
            ChartBody::Bars(_) => ChartKind::Bar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(name: &str) -> SeriesSpec {
        let dataset = Dataset::from_pairs(name, [("Jan", 1.0), ("Fev", 2.0)]);
        SeriesSpec::new(None, Arc::new(dataset))
    }

    #[test]
    fn test_kind_follows_body() {
        let gauge = ChartSpec::new("g", "Gauge", ChartBody::Gauge(GaugeSpec::new(85.0, 100.0, Color::PrimaryBlue)));
        assert_eq!(gauge.kind(), ChartKind::Gauge);

        let grouped = ChartSpec::new(
            "b",
            "Grouped",
            ChartBody::Bars(BarSpec::new(Orientation::Vertical, BarMode::Group, vec![series("a"), series("b")])),
        );
        assert_eq!(grouped.kind(), ChartKind::Bar);
        if let ChartBody::Bars(bars) = &grouped.body {
            let names: Vec<&str> = bars.series.iter().map(SeriesSpec::name).collect();
            assert_eq!(names, ["a", "b"]);
        }

        let lone = series("Valor").unnamed();
        assert_eq!(lone.name(), "");
        assert_eq!(lone.dataset.name(), "Valor");

        let stacked = ChartSpec::new(
            "s",
            "Stacked",
            ChartBody::Bars(BarSpec::new(Orientation::Horizontal, BarMode::Stack, vec![series("a")])),
        );
        assert_eq!(stacked.kind(), ChartKind::StackedBar);
        assert_eq!(stacked.kind().as_str(), "stackedBar");
    }
}
