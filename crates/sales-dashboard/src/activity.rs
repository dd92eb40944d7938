//! Recent activity list
//!
//! Requests submitted through the dialogs during this session, newest first.

use sales_core::{OrderRequest, ReportRequest};
use std::collections::VecDeque;

/// A request accepted from one of the dialogs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Report(ReportRequest),
    Order(OrderRequest),
}

impl Submission {
    /// One-line description for the activity list
    pub fn summary(&self) -> String {
        match self {
            Submission::Report(report) => format!(
                "{} report ({}), {} to {}",
                report.report_type, report.format, report.start_date, report.end_date
            ),
            Submission::Order(order) => format!(
                "Order for {}: {} × {} @ {} = {} ({} priority, due {}, rep {})",
                order.customer,
                order.quantity,
                order.product,
                order.unit_price,
                order.total(),
                order.priority,
                order.due_date,
                order.sales_rep
            ),
        }
    }
}

/// Bounded list of recent submissions
#[derive(Debug, Clone)]
pub struct RecentActivity {
    entries: VecDeque<Submission>,
    limit: usize,
}

impl RecentActivity {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// Add a submission at the front, dropping the oldest beyond the limit
    pub fn record(&mut self, submission: Submission) {
        self.entries.push_front(submission);
        self.entries.truncate(self.limit);
    }

    /// Submissions, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Submission> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
