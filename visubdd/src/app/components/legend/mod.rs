mod ui;

/// Window listing every series label in the color of its rank.
#[derive(Debug)]
pub struct Legend {
    pub open: bool,
}

impl Legend {
    pub fn new() -> Self {
        Self { open: true }
    }
}

/// One line of the legend.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LegendRow {
    pub label: String,
    pub color: shape_layout::Color,
    pub peak: f64,
}

/// Legend rows in rank order.
pub(crate) fn legend_rows(
    series: &width_parser::SeriesSet,
    ranking: &shape_layout::Ranking,
) -> Vec<LegendRow> {
    ranking
        .iter()
        .filter_map(|(rank, idx)| {
            let label = series.label(idx)?;
            let peak = ranking.peak_at_rank(rank)?;
            Some(LegendRow {
                label: label.to_string(),
                color: shape_layout::color_for_rank(rank),
                peak,
            })
        })
        .collect()
}
