// src/domain/frequency.rs

use std::collections::HashMap;

/// Raw label counts. No smoothing, no binning.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn tally<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();
        for label in labels {
            *table.counts.entry(label.as_ref().to_string()).or_insert(0) += 1;
            table.total += 1;
        }
        table
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Entries by count descending, ties broken alphabetically.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> =
            self.counts.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn from_table(title: impl Into<String>, table: &FrequencyTable) -> Self {
        let total = table.total();
        let slices = table
            .sorted()
            .into_iter()
            .map(|(label, count)| PieSlice {
                label: label.to_string(),
                count,
                percentage: if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                },
            })
            .collect();

        Self {
            title: title.into(),
            slices,
        }
    }

    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}
