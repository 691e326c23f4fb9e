use crate::color::ColorScale;
use crate::data::filter::{self, SliderBounds, Threshold};
use crate::data::model::{ManagerRecord, ManagerTable, NumericColumn};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One threshold slider: its column, the data-derived range, and the value
/// the user has dragged it to.
pub struct SliderState {
    pub column: NumericColumn,
    pub bounds: SliderBounds,
    pub value: f64,
}

/// Which column the results are sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    RegistryId,
    Name,
    Numeric(NumericColumn),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub key: SortKey,
    pub ascending: bool,
}

/// The full UI state, independent of rendering.
///
/// `table` is loaded once at startup and never mutated; `results` is the
/// fresh view produced by the latest filter run.
pub struct AppState {
    pub table: ManagerTable,

    /// Last-modified stamp of the source file, for display only.
    pub updated_on: String,

    /// One slider per numeric column, in display order.
    pub sliders: Vec<SliderState>,

    /// Free-text ID/name search; non-empty text overrides the sliders.
    pub query: String,

    /// Rows currently shown in the table.
    pub results: Vec<ManagerRecord>,

    /// User-facing warning from a rejected query.
    pub warning: Option<String>,

    /// Header-click sort order; `None` keeps filter output order.
    pub sort: Option<SortState>,

    /// Tint for the return columns.
    pub return_scale: ColorScale,
}

impl AppState {
    pub fn new(table: ManagerTable, updated_on: String) -> Self {
        let sliders = NumericColumn::ALL
            .iter()
            .map(|&column| {
                let bounds = filter::slider_bounds(&table, column);
                SliderState {
                    column,
                    bounds,
                    value: bounds.default,
                }
            })
            .collect();
        let return_scale = ColorScale::for_returns(&table);
        let results = table.records.clone();

        AppState {
            table,
            updated_on,
            sliders,
            query: String::new(),
            results,
            warning: None,
            sort: None,
            return_scale,
        }
    }

    /// Run the filter with the current slider and query values. A rejected
    /// query sets the warning and leaves the previous results on screen.
    pub fn run_filter(&mut self) {
        let thresholds: Vec<Threshold> = self
            .sliders
            .iter()
            .map(|s| Threshold {
                column: s.column,
                min: s.value,
            })
            .collect();

        match filter::filter(&self.table, &thresholds, &self.query) {
            Ok(rows) => {
                log::info!("filter kept {} of {} rows", rows.len(), self.table.len());
                self.results = rows;
                self.warning = None;
                self.apply_sort();
            }
            Err(warning) => {
                log::info!("query rejected: {warning}");
                self.warning = Some(warning.to_string());
            }
        }
    }

    /// Restore slider defaults, clear the query, and show the full table.
    pub fn reset(&mut self) {
        for slider in &mut self.sliders {
            slider.value = slider.bounds.default;
        }
        self.query.clear();
        self.sort = None;
        self.warning = None;
        self.results = self.table.records.clone();
    }

    /// Header click: first click sorts ascending, a second click on the same
    /// column flips the direction.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some(s) if s.key == key => Some(SortState {
                key,
                ascending: !s.ascending,
            }),
            _ => Some(SortState {
                key,
                ascending: true,
            }),
        };
        self.apply_sort();
    }

    fn apply_sort(&mut self) {
        let Some(SortState { key, ascending }) = self.sort else {
            return;
        };
        self.results.sort_by(|a, b| {
            let ord = match key {
                SortKey::RegistryId => a.registry_id.cmp(&b.registry_id),
                SortKey::Name => a.name.cmp(&b.name),
                SortKey::Numeric(col) => col.value(a).total_cmp(&col.value(b)),
            };
            if ascending { ord } else { ord.reverse() }
        });
    }
}
