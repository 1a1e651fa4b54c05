// KPI card domain model
use super::palette::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub id: String,
    pub title: String,
    pub value: String,
    pub color: Color,
}

impl KpiCard {
    pub fn new(id: &str, title: &str, value: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            value: value.to_string(),
            color: Color::Text,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}
