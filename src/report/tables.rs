//! Fixed-width text tables built from grid rows
//!
//! Cells are found by exact key match against the literal grid values. A missing
//! cell renders as a `-` placeholder; a NaN cutoff renders as `nan`.

use crate::grid::{ConsumptionGridConfig, ConsumptionRow, CutoffGridConfig, CutoffRow};

/// Marker for a cell whose key has no result
pub const PLACEHOLDER: &str = "-";

/// Growth rates at or above this are labelled as a singularity
const SINGULARITY_GROWTH: f64 = 100.0;

const CUTOFF_PREFIX_WIDTH: usize = 6;
const TABLE_2_CELL_WIDTH: usize = 13;
const TABLE_3_CELL_WIDTH: usize = 10;

/// Find the Table 1 row for (δ, γ)
pub fn find_consumption_row(
    rows: &[ConsumptionRow],
    delta: f64,
    gamma: f64,
) -> Option<&ConsumptionRow> {
    rows.iter().find(|r| r.delta == delta && r.gamma == gamma)
}

/// Find the cutoff row for (g_AI, m_AI, γ)
pub fn find_cutoff_row(
    rows: &[CutoffRow],
    g_ai: f64,
    m_ai: f64,
    gamma: f64,
) -> Option<&CutoffRow> {
    rows.iter().find(|r| r.g_ai == g_ai && r.m_ai == m_ai && r.gamma == gamma)
}

/// γ as written in the tables: `1`, `2`, `1.00001`
pub fn format_gamma(gamma: f64) -> String {
    if gamma.is_finite() && gamma.fract() == 0.0 {
        format!("{:.0}", gamma)
    } else {
        format!("{}", gamma)
    }
}

/// Rate as a percentage label without float noise: 0.03 -> `3`, 0.0005 -> `0.05`
pub fn format_percent(rate: f64) -> String {
    let pct = (rate * 100.0 * 1e6).round() / 1e6;
    format!("{}", pct)
}

/// Right-aligned fixed-precision number; NaN renders as `nan`
fn fixed(value: f64, width: usize, precision: usize) -> String {
    if value.is_nan() {
        format!("{:>width$}", "nan", width = width)
    } else {
        format!("{:>width$.precision$}", value, width = width, precision = precision)
    }
}

fn title(out: &mut String, text: &str) {
    out.push_str(text);
    out.push_str("\n\n\n");
}

/// Header line with one centred label per column group
fn group_header(prefix_width: usize, group_width: usize, labels: &[String]) -> String {
    let mut line = " ".repeat(prefix_width);
    for label in labels {
        line.push_str(&format!("{:^width$}", label, width = group_width));
    }
    line.trim_end().to_string()
}

/// Table 1: optimal consumption, stopping time and existential risk by γ and δ
pub fn format_consumption_table(rows: &[ConsumptionRow], grid: &ConsumptionGridConfig) -> String {
    let deltas = &grid.table_deltas;
    let mut out = String::new();
    title(&mut out, "Table 1: Consumption and Existential Risk: Simple Model");

    let mut header = "      ".to_string();
    for (i, &delta) in deltas.iter().enumerate() {
        let label = format!("δ = {}%", format_percent(delta));
        let width = if i + 1 == deltas.len() { 10 } else { 19 };
        header.push_str(&format!("{:<width$}", label, width = width));
    }
    out.push_str(&header);
    out.push('\n');

    out.push('γ');
    for _ in deltas {
        out.push_str("    c*    T*  Exist.Risk");
    }
    out.push('\n');
    out.push_str(&"-".repeat(7 + 24 * deltas.len()));
    out.push('\n');

    for &gamma in &grid.gammas {
        let mut row = format!("{}   ", format_gamma(gamma));
        for &delta in deltas {
            match find_consumption_row(rows, delta, gamma) {
                Some(r) => row.push_str(&format!(
                    "{} {}   {}     ",
                    fixed(r.c_star, 5, 2),
                    fixed(r.t_star, 5, 1),
                    fixed(r.risk, 0, 2)
                )),
                None => row.push_str(&format!(
                    "{:>3}{:>6}{:>7}     ",
                    PLACEHOLDER, PLACEHOLDER, PLACEHOLDER
                )),
            }
        }
        out.push_str(&row);
        out.push('\n');
    }

    out
}

/// Table 2: existential-risk cutoffs for fast growth and a singularity
pub fn format_cutoff_table(rows: &[CutoffRow], grid: &CutoffGridConfig) -> String {
    let mut out = String::new();
    title(
        &mut out,
        "Table 2: Existential Risk Cutoffs: Mortality Improvements and Singularities",
    );

    let group_width = TABLE_2_CELL_WIDTH * grid.m_ai_values.len();
    let growth_labels: Vec<String> = grid
        .g_ai_values
        .iter()
        .map(|&g| {
            if g >= SINGULARITY_GROWTH {
                "Singularity: gai = ∞".to_string()
            } else {
                format!("Fast growth: gai = {}%", format_percent(g))
            }
        })
        .collect();
    out.push_str(&group_header(CUTOFF_PREFIX_WIDTH, group_width, &growth_labels));
    out.push('\n');

    let mai_labels = vec!["— mai —".to_string(); grid.g_ai_values.len()];
    out.push_str(&group_header(CUTOFF_PREFIX_WIDTH, group_width, &mai_labels));
    out.push('\n');

    out.push_str(&column_header(
        TABLE_2_CELL_WIDTH,
        grid.g_ai_values.len(),
        &grid.m_ai_values,
    ));
    out.push_str(&"—".repeat(65));
    out.push('\n');

    for &gamma in &grid.gammas {
        let mut row = format!("{:<width$}", format_gamma(gamma), width = CUTOFF_PREFIX_WIDTH);
        for &g_ai in &grid.g_ai_values {
            for &m_ai in &grid.m_ai_values {
                match find_cutoff_row(rows, g_ai, m_ai, gamma) {
                    Some(r) if r.delta_star.is_nan() => row.push_str("      nan     "),
                    Some(r) => row.push_str(&fixed(r.delta_star, TABLE_2_CELL_WIDTH, 3)),
                    None => row.push_str(&format!(
                        "{:>width$}",
                        PLACEHOLDER,
                        width = TABLE_2_CELL_WIDTH
                    )),
                }
            }
        }
        out.push_str(&row);
        out.push('\n');
    }

    out
}

/// Table 3: cutoffs at the standard and near-zero social discount rates
pub fn format_social_discount_table(
    baseline: &[CutoffRow],
    near_zero: &[CutoffRow],
    grid: &CutoffGridConfig,
) -> String {
    let mut out = String::new();
    title(
        &mut out,
        "Table 3: Existential Risk Cutoffs with Near Zero Social Discounting",
    );

    let group_width = TABLE_3_CELL_WIDTH * grid.m_ai_values.len();
    let header_lines = [
        ["Baseline".to_string(), "Near zero social".to_string()],
        [
            format!("ρs = {}%", format_percent(grid.social_discount_rate)),
            "discounting".to_string(),
        ],
        [
            String::new(),
            format!("ρs = {}%", format_percent(grid.near_zero_social_discount_rate)),
        ],
        ["— mai —".to_string(), "— mai —".to_string()],
    ];
    for labels in &header_lines {
        out.push_str(&group_header(CUTOFF_PREFIX_WIDTH, group_width, labels));
        out.push('\n');
    }

    out.push_str(&column_header(TABLE_3_CELL_WIDTH, 2, &grid.m_ai_values));
    out.push_str(&"—".repeat(65));
    out.push('\n');

    for &gamma in &grid.gammas {
        let mut row = format!("{:<width$}", format_gamma(gamma), width = CUTOFF_PREFIX_WIDTH);
        for results in [baseline, near_zero] {
            for &m_ai in &grid.m_ai_values {
                match find_cutoff_row(results, grid.table_3_g_ai, m_ai, gamma) {
                    Some(r) => row.push_str(&fixed(r.delta_star, TABLE_3_CELL_WIDTH, 3)),
                    None => row.push_str(&format!(
                        "{:>width$}",
                        PLACEHOLDER,
                        width = TABLE_3_CELL_WIDTH
                    )),
                }
            }
        }
        out.push_str(&row);
        out.push('\n');
    }

    out
}

/// `  γ` followed by the m_AI labels, right-aligned over their data columns
fn column_header(cell_width: usize, groups: usize, m_ai_values: &[f64]) -> String {
    let mut line = format!("{:<width$}", "  γ", width = CUTOFF_PREFIX_WIDTH);
    for _ in 0..groups {
        for &m_ai in m_ai_values {
            let label = format!("{}%", format_percent(m_ai));
            line.push_str(&format!("{:>width$}", label, width = cell_width));
        }
    }
    line.push('\n');
    line
}
