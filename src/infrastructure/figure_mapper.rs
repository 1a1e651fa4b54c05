// Mapper to convert domain models to plotly figures and JSON fragment documents
use crate::domain::chart::{BarMode, BarSpec, CategoryOrder, ChartBody, ChartSpec, GaugeSpec, Orientation, SeriesSpec};
use crate::domain::fragment::{Column, Fragment, Row, Widget};
use crate::domain::kpi::KpiCard;
use crate::domain::palette::Color;
use serde_json::{json, Map, Value};

pub fn chart_to_figure(chart: &ChartSpec) -> Value {
    let (data, mut layout) = match &chart.body {
        ChartBody::Gauge(gauge) => (vec![gauge_trace(&chart.title, gauge)], Map::new()),
        ChartBody::Bars(bars) => (
            bars.series.iter().map(|s| bar_trace(s, bars.orientation)).collect(),
            bar_layout(&chart.title, bars),
        ),
    };

    // Dark theme shared by every figure
    layout.insert("paper_bgcolor".into(), json!(Color::Panel.hex()));
    layout.insert("plot_bgcolor".into(), json!(Color::Panel.hex()));
    layout.insert("font".into(), json!({ "color": Color::Text.hex() }));
    if let Some(height) = chart.height {
        layout.insert("height".into(), json!(height));
    }

    json!({ "data": data, "layout": layout })
}

pub fn fragment_to_json(fragment: &Fragment) -> Value {
    json!({
        "tab": fragment.tab.value(),
        "rows": fragment.rows.iter().map(row_to_json).collect::<Vec<_>>(),
    })
}

fn gauge_trace(title: &str, gauge: &GaugeSpec) -> Value {
    let mut number = Map::new();
    if let Some(suffix) = &gauge.suffix {
        number.insert("suffix".into(), json!(suffix));
    }
    if let Some(size) = gauge.number_font_size {
        number.insert("font".into(), json!({ "size": size }));
    }

    let mut title_json = json!({ "text": title });
    if let Some(size) = gauge.title_font_size {
        title_json["font"] = json!({ "size": size, "color": Color::Text.hex() });
    }

    let mut axis = json!({ "range": [Value::Null, gauge.axis_max] });
    if let Some(width) = gauge.tick_width {
        axis["tickwidth"] = json!(width);
    }
    if let Some(color) = &gauge.tick_color {
        axis["tickcolor"] = json!(color);
    }

    let mut bar = json!({ "color": gauge.bar_color.hex() });
    if let Some(thickness) = gauge.bar_thickness {
        bar["thickness"] = json!(thickness);
    }

    let steps: Vec<Value> = gauge
        .steps
        .iter()
        .map(|step| json!({ "range": [step.from, step.to], "color": step.color.hex() }))
        .collect();

    let mut gauge_json = json!({ "axis": axis, "bar": bar, "steps": steps });
    if gauge.transparent_background {
        gauge_json["bgcolor"] = json!("rgba(0,0,0,0)");
    }
    if let Some(width) = gauge.border_width {
        gauge_json["borderwidth"] = json!(width);
    }
    if let Some(color) = gauge.border_color {
        gauge_json["bordercolor"] = json!(color.hex());
    }

    json!({
        "type": "indicator",
        "mode": "gauge+number",
        "value": gauge.value,
        "number": number,
        "domain": { "x": [0, 1], "y": [0, 1] },
        "title": title_json,
        "gauge": gauge_json,
    })
}

fn bar_trace(series: &SeriesSpec, orientation: Orientation) -> Value {
    let labels = series.dataset.labels();
    let values = series.dataset.values();

    let mut trace = match orientation {
        Orientation::Vertical => json!({ "x": labels, "y": values, "orientation": "v" }),
        Orientation::Horizontal => json!({ "x": values, "y": labels, "orientation": "h" }),
    };
    trace["type"] = json!("bar");
    trace["name"] = json!(series.name());
    if let Some(color) = series.color {
        trace["marker"] = json!({ "color": color.hex() });
    }
    trace
}

fn bar_layout(title: &str, bars: &BarSpec) -> Map<String, Value> {
    let mut layout = Map::new();
    layout.insert("title".into(), json!({ "text": title }));

    let barmode = match bars.mode {
        BarMode::Group => "group",
        BarMode::Stack => "stack",
    };
    layout.insert("barmode".into(), json!(barmode));

    let mut xaxis = Map::new();
    let mut yaxis = Map::new();
    if let Some(x_title) = &bars.x_title {
        xaxis.insert("title".into(), json!({ "text": x_title }));
    }
    if let Some(y_title) = &bars.y_title {
        yaxis.insert("title".into(), json!({ "text": y_title }));
    }
    if let Some(CategoryOrder::TotalAscending) = bars.category_order {
        // Categories live on the value-less axis
        let axis = match bars.orientation {
            Orientation::Vertical => &mut xaxis,
            Orientation::Horizontal => &mut yaxis,
        };
        axis.insert("categoryorder".into(), json!("total ascending"));
    }
    if !xaxis.is_empty() {
        layout.insert("xaxis".into(), Value::Object(xaxis));
    }
    if !yaxis.is_empty() {
        layout.insert("yaxis".into(), Value::Object(yaxis));
    }

    layout
}

fn row_to_json(row: &Row) -> Value {
    json!({ "columns": row.columns.iter().map(column_to_json).collect::<Vec<_>>() })
}

fn column_to_json(column: &Column) -> Value {
    json!({
        "width": column.width,
        "widgets": column.widgets.iter().map(widget_to_json).collect::<Vec<_>>(),
    })
}

fn widget_to_json(widget: &Widget) -> Value {
    match widget {
        Widget::Chart(chart) => json!({
            "kind": "chart",
            "id": chart.id,
            "title": chart.title,
            "chartType": chart.kind().as_str(),
            "figure": chart_to_figure(chart),
        }),
        Widget::Kpi(card) => kpi_to_json(card),
        Widget::Row(row) => {
            let mut value = row_to_json(row);
            value["kind"] = json!("row");
            value
        }
    }
}

fn kpi_to_json(card: &KpiCard) -> Value {
    json!({
        "kind": "kpi",
        "id": card.id,
        "title": card.title,
        "value": card.value,
        "color": card.color.hex(),
    })
}
