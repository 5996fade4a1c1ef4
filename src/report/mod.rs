// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Text rendering of an exploration.
//!
//! One row per discovered state: the predecessor's channels as fractions,
//! an arrow marker, then the state's own channels. Columns are
//! right-aligned to their widest cell. The table is followed by an
//! `Exceptional:` section listing every state whose recorded metric is
//! worse than its intrinsic one, with both values shown.
//!
//! ```text
//! 0/1 0/1 0/1 1/1 --> 0/1 0/1 0/1 1/1
//! 0/1 0/1 0/1 1/1 --> 0/1 0/1 1/2 1/2
//! Exceptional:
//! ```

use crate::engine::Exploration;
use crate::errors::{InternalError, ReportError};
use crate::state::State;
use std::io::Write;

/// Separator between predecessor and result columns.
pub const ARROW: &str = "-->";

/// Renders an [`Exploration`] as text.
#[derive(Debug)]
pub struct Reporter<'a> {
    exploration: &'a Exploration,
}

impl<'a> Reporter<'a> {
    pub fn new(exploration: &'a Exploration) -> Self {
        Self { exploration }
    }

    /// Cells of every row, in report order.
    pub fn rows(&self) -> Result<Vec<Vec<String>>, InternalError> {
        let mut rows = Vec::with_capacity(self.exploration.memo.len());
        for (state, record) in self.exploration.memo.in_report_order() {
            let mut row = self.cells(&record.predecessor)?;
            row.push(ARROW.to_string());
            row.extend(self.cells(state)?);
            debug_assert_eq!(row.len(), 2 * state.len() + 1);
            rows.push(row);
        }
        Ok(rows)
    }

    /// Write the aligned table.
    pub fn write_table<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        let rows = self.rows()?;
        let columns = rows.first().map_or(0, Vec::len);
        let mut widths = vec![0; columns];
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.len());
            }
        }

        for row in &rows {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
                .collect();
            writeln!(out, "{}", cells.join(" "))?;
        }
        Ok(())
    }

    /// Write the exceptional-state listing.
    pub fn write_exceptional<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        writeln!(out, "Exceptional:")?;
        for exceptional in self.exploration.exceptional()? {
            let cells = self.cells(&exceptional.state)?;
            writeln!(
                out,
                "({}) recorded {} > intrinsic {}",
                cells.join(" "),
                exceptional.recorded,
                exceptional.intrinsic
            )?;
        }
        Ok(())
    }

    /// Channel values of `state` rendered as "n/d".
    fn cells(&self, state: &State) -> Result<Vec<String>, InternalError> {
        Ok(state
            .fractions(&self.exploration.config)?
            .iter()
            .map(|f| f.to_string())
            .collect())
    }

    /// Write the table followed by the exceptional listing.
    pub fn write<W: Write>(&self, out: &mut W) -> Result<(), ReportError> {
        self.write_table(out)?;
        self.write_exceptional(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MixConfig;
    use crate::engine::{explore, DiscoveryMetric, ExplorePolicy};
    use crate::memo::ResultMemo;
    use crate::state::statistics::Statistics;

    fn exploration(zeros: usize, ones: usize, depth: usize, policy: ExplorePolicy) -> Exploration {
        let config = MixConfig::from_depth(depth).unwrap();
        explore(config, policy, State::from_counts(zeros, ones, &config)).unwrap()
    }

    fn render(exploration: &Exploration) -> String {
        let mut out = Vec::new();
        Reporter::new(exploration).write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_rows() {
        let e = exploration(3, 1, 1, ExplorePolicy::default());
        let rows = Reporter::new(&e).rows().unwrap();
        assert_eq!(
            rows,
            vec![
                vec!["0/1", "0/1", "0/1", "1/1", "-->", "0/1", "0/1", "0/1", "1/1"],
                vec!["0/1", "0/1", "0/1", "1/1", "-->", "0/1", "0/1", "1/2", "1/2"],
            ]
        );
    }

    #[test]
    fn test_table_alignment() {
        let e = exploration(1, 1, 2, ExplorePolicy::default());
        let text = render(&e);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "0/1 1/1 --> 0/1 1/1",
                "0/1 1/1 --> 1/2 1/2",
                "Exceptional:",
            ]
        );
    }

    #[test]
    fn test_right_aligned_columns() {
        let e = exploration(2, 1, 2, ExplorePolicy::default());
        let text = render(&e);
        let table: Vec<&str> = text.lines().take_while(|l| *l != "Exceptional:").collect();
        let width = table[0].len();
        assert!(table.iter().all(|line| line.len() == width));
        assert!(table.iter().all(|line| line.contains(ARROW)));
    }

    #[test]
    fn test_exceptional_listing() {
        let config = MixConfig::from_depth(2).unwrap();
        let initial = State::from_counts(1, 1, &config);
        let mut memo = ResultMemo::seeded(initial.clone());
        memo.offer(State::canonical(vec![2, 2]), &initial, 4, 1);
        let e = Exploration {
            config,
            initial,
            memo,
            statistics: Statistics::new(),
        };

        let text = render(&e);
        let listing: Vec<&str> = text.lines().skip_while(|l| *l != "Exceptional:").collect();
        assert_eq!(
            listing,
            vec!["Exceptional:", "(1/2 1/2) recorded 4 > intrinsic 2"]
        );
    }

    #[test]
    fn test_listing_matches_exceptional() {
        let policy = ExplorePolicy {
            metric: DiscoveryMetric::Path,
            ..ExplorePolicy::default()
        };
        let e = exploration(2, 2, 3, policy);
        let expected = e.exceptional().unwrap().len();
        let text = render(&e);
        let listed = text.lines().skip_while(|l| *l != "Exceptional:").count() - 1;
        assert_eq!(listed, expected);
    }
}
