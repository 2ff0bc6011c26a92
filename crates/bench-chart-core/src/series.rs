// File: crates/bench-chart-core/src/series.rs
// Summary: Series model and grouping of table rows into named series.
// Notes:
// - Grouping keeps first-occurrence order. A repeated name keeps its slot but takes
//   the values of its last occurrence.

use tracing::warn;

use crate::table::BenchmarkTable;

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), data_xy: Vec::new() }
    }

    pub fn with_data(name: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data_xy: data }
    }

    /// Pair a shared x-axis with one row of y-values.
    pub fn from_columns(name: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self::with_data(name, data)
    }

    pub fn x_values(&self) -> Vec<f64> { self.data_xy.iter().map(|p| p.0).collect() }

    pub fn y_values(&self) -> Vec<f64> { self.data_xy.iter().map(|p| p.1).collect() }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }
}

/// Ordered name -> series mapping.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesGroup {
    series: Vec<Series>,
}

impl SeriesGroup {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace by name. Returns the replaced series, if any.
    pub fn insert(&mut self, series: Series) -> Option<Series> {
        match self.series.iter_mut().find(|s| s.name == series.name) {
            Some(slot) => Some(std::mem::replace(slot, series)),
            None => {
                self.series.push(series);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.name == name)
    }

    pub fn first(&self) -> Option<&Series> { self.series.first() }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> { self.series.iter() }

    pub fn len(&self) -> usize { self.series.len() }

    pub fn is_empty(&self) -> bool { self.series.is_empty() }

    pub fn into_vec(self) -> Vec<Series> { self.series }
}

impl<'a> IntoIterator for &'a SeriesGroup {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter { self.series.iter() }
}

/// One entry per distinct row name, in file order.
pub fn group_by_series(table: &BenchmarkTable) -> SeriesGroup {
    let xs: Vec<f64> = table.x_axis.iter().map(|&x| x as f64).collect();
    let mut group = SeriesGroup::new();
    for row in &table.rows {
        if group.insert(Series::from_columns(&row.name, &xs, &row.values)).is_some() {
            warn!(series = %row.name, "duplicate series name; keeping last occurrence");
        }
    }
    group
}
