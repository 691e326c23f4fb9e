use std::fmt;

// ---------------------------------------------------------------------------
// ManagerRecord – one row of the table
// ---------------------------------------------------------------------------

/// Manager profile pages live under this URL, one page per registry ID.
pub const MANAGER_PROFILE_BASE_URL: &str = "https://fund.eastmoney.com/manager";

/// A single fund manager (one row of the source table).
///
/// The first nine fields come straight from the file; the last three are
/// derived once at load time and never recomputed. All floats are rounded to
/// 4 decimal places. AUM figures are in units of 100M.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerRecord {
    /// Registry ID, unique per manager.
    pub registry_id: String,
    /// Display name, not guaranteed unique.
    pub name: String,
    pub total_aum: f64,
    pub career_years: f64,
    pub avg_tenure_years: f64,
    /// Fraction of tenure spent actively managing, in [0, 1].
    pub attendance: f64,
    pub avg_return: f64,
    pub weighted_avg_return: f64,
    /// Worst historical return, may be negative.
    pub worst_return: f64,

    pub avg_aum: f64,
    pub absolute_profit: f64,
    pub profit_pct: f64,
}

/// Round to 4 decimal places, the precision every column is normalized to.
pub fn round4(v: f64) -> f64 {
    (v * 1e4).round() / 1e4
}

impl ManagerRecord {
    /// Build a record from raw file fields: round the inputs, then derive
    /// average AUM, absolute profit and profit percentage from the rounded
    /// values. A zero `career_years * attendance` (or zero `total_aum`)
    /// makes the affected derived fields NaN rather than panicking.
    #[allow(clippy::too_many_arguments)]
    pub fn from_raw(
        registry_id: String,
        name: String,
        total_aum: f64,
        career_years: f64,
        avg_tenure_years: f64,
        attendance: f64,
        avg_return: f64,
        weighted_avg_return: f64,
        worst_return: f64,
    ) -> Self {
        let total_aum = round4(total_aum);
        let career_years = round4(career_years);
        let avg_tenure_years = round4(avg_tenure_years);
        let attendance = round4(attendance);
        let avg_return = round4(avg_return);
        let weighted_avg_return = round4(weighted_avg_return);
        let worst_return = round4(worst_return);

        let active_years = career_years * attendance;
        let avg_aum = if active_years == 0.0 {
            f64::NAN
        } else {
            round4(total_aum / active_years)
        };
        let absolute_profit = round4(weighted_avg_return * avg_aum);
        let profit_pct = if total_aum == 0.0 {
            f64::NAN
        } else {
            round4(absolute_profit / total_aum)
        };

        ManagerRecord {
            registry_id,
            name,
            total_aum,
            career_years,
            avg_tenure_years,
            attendance,
            avg_return,
            weighted_avg_return,
            worst_return,
            avg_aum,
            absolute_profit,
            profit_pct,
        }
    }

    /// Profile page URL for the ID cell; the raw `registry_id` stays
    /// available for substring search.
    pub fn profile_url(&self) -> String {
        format!("{MANAGER_PROFILE_BASE_URL}/{}", self.registry_id)
    }
}

// ---------------------------------------------------------------------------
// NumericColumn – the filterable columns, in display order
// ---------------------------------------------------------------------------

/// The ten numeric columns of the table, ordered as displayed (registry ID
/// and name come first and are not threshold-filterable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    AvgAum,
    ProfitPct,
    AbsoluteProfit,
    TotalAum,
    Attendance,
    CareerYears,
    AvgTenure,
    AvgReturn,
    WeightedAvgReturn,
    WorstReturn,
}

impl NumericColumn {
    /// Display order, matching the table layout.
    pub const ALL: [NumericColumn; 10] = [
        NumericColumn::AvgAum,
        NumericColumn::ProfitPct,
        NumericColumn::AbsoluteProfit,
        NumericColumn::TotalAum,
        NumericColumn::Attendance,
        NumericColumn::CareerYears,
        NumericColumn::AvgTenure,
        NumericColumn::AvgReturn,
        NumericColumn::WeightedAvgReturn,
        NumericColumn::WorstReturn,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NumericColumn::AvgAum => "Avg AUM (100M)",
            NumericColumn::ProfitPct => "Profit %",
            NumericColumn::AbsoluteProfit => "Abs profit (100M)",
            NumericColumn::TotalAum => "Total AUM (100M)",
            NumericColumn::Attendance => "Attendance",
            NumericColumn::CareerYears => "Career (yrs)",
            NumericColumn::AvgTenure => "Avg tenure (yrs)",
            NumericColumn::AvgReturn => "Avg annualized",
            NumericColumn::WeightedAvgReturn => "Weighted annualized",
            NumericColumn::WorstReturn => "Worst return",
        }
    }

    /// Read this column's value from a record.
    pub fn value(self, rec: &ManagerRecord) -> f64 {
        match self {
            NumericColumn::AvgAum => rec.avg_aum,
            NumericColumn::ProfitPct => rec.profit_pct,
            NumericColumn::AbsoluteProfit => rec.absolute_profit,
            NumericColumn::TotalAum => rec.total_aum,
            NumericColumn::Attendance => rec.attendance,
            NumericColumn::CareerYears => rec.career_years,
            NumericColumn::AvgTenure => rec.avg_tenure_years,
            NumericColumn::AvgReturn => rec.avg_return,
            NumericColumn::WeightedAvgReturn => rec.weighted_avg_return,
            NumericColumn::WorstReturn => rec.worst_return,
        }
    }

    /// Whether the column holds an annualized-return figure (tinted in the UI).
    pub fn is_return(self) -> bool {
        matches!(
            self,
            NumericColumn::AvgReturn
                | NumericColumn::WeightedAvgReturn
                | NumericColumn::WorstReturn
        )
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// ManagerTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed table, constructed once at startup and read-only after.
/// Filter operations return fresh `Vec<ManagerRecord>` views, never slices
/// into this table.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerTable {
    pub records: Vec<ManagerRecord>,
}

impl ManagerTable {
    pub fn new(records: Vec<ManagerRecord>) -> Self {
        ManagerTable { records }
    }

    /// Number of managers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
