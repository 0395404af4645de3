//! Column means and Pearson correlation over the cleaned table.

use crate::error::AnalysisError;
use crate::table::{numeric, Game};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnMean {
    pub mean: f64,
    pub count: usize,
}

/// Mean over the column's non-blank, parseable cells. The divisor is the
/// count of such cells, independent of any other column's blanks.
pub fn column_mean<'a, F>(games: &'a [Game], column: F) -> Option<ColumnMean>
where
    F: Fn(&'a Game) -> &'a str,
{
    let mut sum = 0.0;
    let mut count = 0usize;
    for game in games {
        if let Some(value) = numeric(column(game)) {
            sum += value;
            count += 1;
        }
    }
    if count == 0 {
        None
    } else {
        Some(ColumnMean {
            mean: sum / count as f64,
            count,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RequiredMeans {
    pub year: ColumnMean,
    pub rating: ColumnMean,
    pub complexity: ColumnMean,
}

/// All-or-nothing: if any of the three required columns has no usable
/// values, no means are produced and the whole analysis aborts.
pub fn required_means(games: &[Game]) -> Result<RequiredMeans, AnalysisError> {
    let year = column_mean(games, |g| &g.year_published)
        .ok_or(AnalysisError::MissingRequiredData {
            column: "year published",
        })?;
    let rating = column_mean(games, |g| &g.rating_average)
        .ok_or(AnalysisError::MissingRequiredData {
            column: "rating average",
        })?;
    let complexity =
        column_mean(games, |g| &g.complexity_average).ok_or(AnalysisError::MissingRequiredData {
            column: "complexity average",
        })?;
    Ok(RequiredMeans {
        year,
        rating,
        complexity,
    })
}

/// Pearson correlation over rows where both columns hold numeric values.
///
/// The supplied means are the full-column means, not means recomputed
/// over the jointly-present rows.
pub fn pearson<'a, Fx, Fy>(
    games: &'a [Game],
    x: Fx,
    y: Fy,
    mean_x: f64,
    mean_y: f64,
    pair: &'static str,
) -> Result<f64, AnalysisError>
where
    Fx: Fn(&'a Game) -> &'a str,
    Fy: Fn(&'a Game) -> &'a str,
{
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for game in games {
        let (Some(xv), Some(yv)) = (numeric(x(game)), numeric(y(game))) else {
            continue;
        };
        let dx = xv - mean_x;
        let dy = yv - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    if sxx <= 0.0 || syy <= 0.0 {
        return Err(AnalysisError::InsufficientData { pair });
    }
    Ok(sxy / (sxx * syy).sqrt())
}
