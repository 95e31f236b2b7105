//! Daily article lookup.
//!
//! A monthly edition is one PDF: `leading_pages` of front matter, then one
//! article per calendar day, each `pages_per_article` long. Day `d` of the
//! month therefore starts at page `leading_pages + (d - 1) * pages_per_article + 1`.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use rhapsody_types::DailyArticleLayout;
use serde::Serialize;
use thiserror::Error;

/// Inclusive, 1-based page span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PageRange {
    start: u32,
    end: u32,
}

impl PageRange {
    #[must_use]
    pub const fn start(&self) -> u32 {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> u32 {
        self.end
    }

    #[must_use]
    pub const fn pages(&self) -> u32 {
        self.end - self.start + 1
    }

    #[must_use]
    pub const fn contains(&self, page: u32) -> bool {
        page >= self.start && page <= self.end
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DailyArticleError {
    #[error("pages {range} for {date} exceed the edition's {page_count} pages")]
    PastEndOfEdition {
        date: NaiveDate,
        range: PageRange,
        page_count: u32,
    },
}

#[must_use]
pub fn page_range(layout: &DailyArticleLayout, date: NaiveDate) -> PageRange {
    let per_article = layout.pages_per_article();
    let start = (date.day() - 1)
        .saturating_mul(per_article)
        .saturating_add(layout.leading_pages())
        .saturating_add(1);
    PageRange {
        start,
        end: start.saturating_add(per_article - 1),
    }
}

/// Like [`page_range`], but refuses ranges that run past the last page of the PDF.
pub fn checked_page_range(
    layout: &DailyArticleLayout,
    date: NaiveDate,
    page_count: u32,
) -> Result<PageRange, DailyArticleError> {
    let range = page_range(layout, date);
    if range.end > page_count {
        tracing::debug!(%date, %range, page_count, "Daily article past end of edition");
        return Err(DailyArticleError::PastEndOfEdition {
            date,
            range,
            page_count,
        });
    }
    Ok(range)
}

/// Pages for today's article, by the local calendar.
#[must_use]
pub fn todays_page_range(layout: &DailyArticleLayout) -> PageRange {
    page_range(layout, Local::now().date_naive())
}
