// Dataset domain model

/// A named, ordered sequence of labelled values.
///
/// Labels and values are only ever built together from pairs, so both
/// sequences always have the same length and line up by position.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    name: String,
    labels: Vec<String>,
    values: Vec<f64>,
}

impl Dataset {
    pub fn from_pairs<'a, I>(name: &str, pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        let (labels, values): (Vec<String>, Vec<f64>) = pairs
            .into_iter()
            .map(|(label, value)| (label.to_string(), value))
            .unzip();

        Self {
            name: name.to_string(),
            labels,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
