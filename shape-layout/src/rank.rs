use width_parser::SeriesSet;

/// Peak values of all series plus the permutation `rank -> series index`,
/// sorted by peak in descending order.
///
/// The sort is stable, series with equal peaks keep their input order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Ranking {
    order: Vec<usize>,
    peaks: Vec<f64>,
}

impl Ranking {
    pub fn new(set: &SeriesSet) -> Self {
        let peaks: Vec<f64> = set.iter().map(|(_, series)| series.peak()).collect();
        Self::from_peaks(peaks)
    }

    pub fn from_peaks(peaks: Vec<f64>) -> Self {
        let mut order: Vec<usize> = (0..peaks.len()).collect();
        order.sort_by(|&a, &b| peaks[b].total_cmp(&peaks[a]));
        log::trace!("ranking order {:?} for peaks {:?}", order, peaks);
        Self { order, peaks }
    }

    /// Series indices, largest peak first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn peak_at_rank(&self, rank: usize) -> Option<f64> {
        self.order.get(rank).map(|&idx| self.peaks[idx])
    }

    /// Iterate `(rank, series index)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.order.iter().copied().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sections_keep_order() {
        let set = SeriesSet::from_string("f", "5\n10\n#\n3\n7\n2");
        let ranking = Ranking::new(&set);
        assert_eq!(ranking.peak_at_rank(0), Some(10.0));
        assert_eq!(ranking.peak_at_rank(1), Some(7.0));
        assert_eq!(ranking.order(), &[0, 1]);
    }

    #[test]
    fn test_descending_by_peak() {
        let ranking = Ranking::from_peaks(vec![3.0, 9.0, 1.0, 7.0]);
        assert_eq!(ranking.order(), &[1, 3, 0, 2]);
        let peaks: Vec<f64> = (0..ranking.order().len())
            .filter_map(|rank| ranking.peak_at_rank(rank))
            .collect();
        assert!(peaks.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(ranking.peak_at_rank(0), Some(9.0));
    }

    #[test]
    fn test_equal_peaks_are_stable() {
        let ranking = Ranking::from_peaks(vec![4.0, 8.0, 4.0, 8.0, 4.0]);
        assert_eq!(ranking.order(), &[1, 3, 0, 2, 4]);
    }

    #[test]
    fn test_rank_zero_is_global_peak() {
        let set = SeriesSet::from_string("f", "1\n2\n#\n#\n12\n4\n#\n0.5");
        let ranking = Ranking::new(&set);
        assert_eq!(ranking.peak_at_rank(0), Some(set.global_peak()));
        // The empty section ranks behind everything positive.
        assert_eq!(ranking.order().last(), Some(&1));
    }

    #[test]
    fn test_ranking_does_not_touch_series() {
        let set = SeriesSet::from_string("f", "1\n#\n3");
        let before = set.clone();
        let first = Ranking::new(&set);
        let second = Ranking::new(&set);
        assert_eq!(first, second);
        assert_eq!(set, before);
    }

    #[test]
    fn test_empty_set() {
        let ranking = Ranking::new(&SeriesSet::new());
        assert!(ranking.order().is_empty());
        assert_eq!(ranking.peak_at_rank(0), None);
    }
}
