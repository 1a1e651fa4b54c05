// HTML rendering for fragments and the page shell (Bootstrap grid + plotly.js)
use crate::domain::fragment::{Column, Fragment, Row, Widget};
use crate::domain::kpi::KpiCard;
use crate::domain::palette::Color;
use crate::domain::tab::TabId;
use crate::infrastructure::figure_mapper::chart_to_figure;

const PAGE_TITLE: &str = "Principais KPI`s e Dashboards Corporativos";
const BOOTSTRAP_DARKLY_CSS: &str = "https://cdn.jsdelivr.net/npm/bootswatch@5.3.3/dist/darkly/bootstrap.min.css";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub fn render_fragment(fragment: &Fragment) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<div class="container-fluid" data-tab="{}">"#,
        fragment.tab.value()
    ));
    for row in &fragment.rows {
        render_row(row, &mut out);
    }
    out.push_str("</div>");
    out
}

/// Full document with the tab strip; `initial` fills the content area.
pub fn render_page(initial: &Fragment) -> String {
    let mut tabs = String::new();
    for tab in TabId::ALL {
        let class = if tab == initial.tab { "dash-tab selected" } else { "dash-tab" };
        tabs.push_str(&format!(
            r#"<button type="button" class="{}" data-tab="{}">{}</button>"#,
            class,
            tab.value(),
            escape(tab.label()),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="{css}">
<script src="{plotly}"></script>
<style>
body{{background-color:{background};min-height:100vh}}
h1.dash-title{{text-align:center;color:{text};padding:20px}}
.dash-tabs{{display:flex}}
.dash-tab{{flex:1;border:1px solid {background};padding:10px;background-color:{panel};color:{text}}}
.dash-tab.selected{{background-color:{blue};color:{panel};font-weight:bold}}
#tabs-content-output{{padding-top:20px}}
</style>
</head>
<body>
<div class="container-fluid">
<h1 class="dash-title">{title}</h1>
<div class="dash-tabs" id="tabs-dashboards">{tabs}</div>
<div id="tabs-content-output">{content}</div>
</div>
<script>
function drawFigures(root) {{
  root.querySelectorAll('[data-figure]').forEach(function (el) {{
    var fig = JSON.parse(el.dataset.figure);
    Plotly.newPlot(el, fig.data, fig.layout, {{responsive: true}});
  }});
}}
var output = document.getElementById('tabs-content-output');
document.querySelectorAll('.dash-tab').forEach(function (btn) {{
  btn.addEventListener('click', function () {{
    fetch('/tabs/' + btn.dataset.tab).then(function (res) {{
      if (!res.ok) {{ console.error('tab switch failed', res.status); return; }}
      return res.text().then(function (html) {{
        output.innerHTML = html;
        document.querySelectorAll('.dash-tab').forEach(function (b) {{ b.classList.toggle('selected', b === btn); }});
        drawFigures(output);
      }});
    }});
  }});
}});
drawFigures(output);
</script>
</body>
</html>
"#,
        title = escape(PAGE_TITLE),
        css = BOOTSTRAP_DARKLY_CSS,
        plotly = PLOTLY_JS,
        background = Color::Background.hex(),
        panel = Color::Panel.hex(),
        text = Color::Text.hex(),
        blue = Color::PrimaryBlue.hex(),
        tabs = tabs,
        content = render_fragment(initial),
    )
}

fn render_row(row: &Row, out: &mut String) {
    out.push_str(r#"<div class="row">"#);
    for column in &row.columns {
        render_column(column, out);
    }
    out.push_str("</div>");
}

fn render_column(column: &Column, out: &mut String) {
    out.push_str(&format!(r#"<div class="col-md-{}">"#, column.width));
    for widget in &column.widgets {
        match widget {
            Widget::Chart(chart) => {
                let figure = chart_to_figure(chart);
                out.push_str(&format!(
                    r#"<div class="dash-graph" id="{}" data-figure="{}"></div>"#,
                    escape(&chart.id),
                    escape(&figure.to_string()),
                ));
            }
            Widget::Kpi(card) => render_kpi_card(card, out),
            Widget::Row(row) => render_row(row, out),
        }
    }
    out.push_str("</div>");
}

fn render_kpi_card(card: &KpiCard, out: &mut String) {
    out.push_str(&format!(
        concat!(
            r#"<div class="card mb-3" id="{id}" style="background-color:{panel}">"#,
            r#"<div class="card-body">"#,
            r#"<h6 class="card-title" style="color:{text}">{title}</h6>"#,
            r#"<h4 class="card-text" style="color:{color};font-size:2rem;font-weight:bold">{value}</h4>"#,
            "</div></div>",
        ),
        id = escape(&card.id),
        panel = Color::Panel.hex(),
        text = Color::Text.hex(),
        title = escape(&card.title),
        color = card.color.hex(),
        value = escape(&card.value),
    ));
}

/// Escape text for element content and double/single quoted attributes
fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
