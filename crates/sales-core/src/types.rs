//! Request types collected by the dashboard dialogs
//!
//! Each dialog works on a *draft* (raw field values as typed) and produces
//! a *request* (typed, constraint-checked values) on a successful submit.
//! Drafts double as the caller-supplied defaults a dialog is seeded with.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::validation::{
    required_date, required_number, required_text, Field, FieldError, ValidationErrors,
};

// ─────────────────────────────────────────────────────────────────────────────
// Choice fields
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of sales report to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportType {
    #[default]
    #[serde(rename = "Sales Summary")]
    SalesSummary,
    #[serde(rename = "Revenue Breakdown")]
    RevenueBreakdown,
    #[serde(rename = "Customer Performance")]
    CustomerPerformance,
    #[serde(rename = "Order Status")]
    OrderStatus,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::SalesSummary,
        ReportType::RevenueBreakdown,
        ReportType::CustomerPerformance,
        ReportType::OrderStatus,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ReportType::SalesSummary => "Sales Summary",
            ReportType::RevenueBreakdown => "Revenue Breakdown",
            ReportType::CustomerPerformance => "Customer Performance",
            ReportType::OrderStatus => "Order Status",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// File format of a generated report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExportFormat {
    #[default]
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "CSV")]
    Csv,
    #[serde(rename = "XLSX")]
    Xlsx,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Pdf, ExportFormat::Csv, ExportFormat::Xlsx];

    pub fn display_name(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "PDF",
            ExportFormat::Csv => "CSV",
            ExportFormat::Xlsx => "XLSX",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Order handling priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn display_name(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Report
// ─────────────────────────────────────────────────────────────────────────────

/// A validated report generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    pub report_type: ReportType,
    pub start_date: NaiveDate,
    /// Not checked against `start_date`
    pub end_date: NaiveDate,
    pub format: ExportFormat,
}

/// Raw report form values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportDraft {
    pub report_type: ReportType,
    /// `YYYY-MM-DD`, empty when unset
    pub start_date: String,
    /// `YYYY-MM-DD`, empty when unset
    pub end_date: String,
    pub format: ExportFormat,
}

impl ReportDraft {
    /// Check every field and build the request
    pub fn validate(&self) -> Result<ReportRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let start_date = errors.take(Field::StartDate, required_date(&self.start_date));
        let end_date = errors.take(Field::EndDate, required_date(&self.end_date));

        match (start_date, end_date) {
            (Some(start_date), Some(end_date)) => Ok(ReportRequest {
                report_type: self.report_type,
                start_date,
                end_date,
                format: self.format,
            }),
            _ => Err(errors),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Order
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum accepted quantity
pub const QUANTITY_MIN: Decimal = Decimal::ZERO;
/// Quantity granularity (whole units)
pub const QUANTITY_STEP: Decimal = Decimal::ONE;
/// Minimum accepted unit price
pub const UNIT_PRICE_MIN: Decimal = Decimal::ZERO;
/// Unit price granularity (cents)
pub const UNIT_PRICE_STEP: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// A validated sales order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer: String,
    pub product: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub due_date: NaiveDate,
    pub sales_rep: String,
    pub priority: Priority,
}

impl OrderRequest {
    /// Quantity times unit price
    pub fn total(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }
}

/// Raw order form values
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderDraft {
    pub customer: String,
    pub product: String,
    pub quantity: String,
    pub unit_price: String,
    /// `YYYY-MM-DD`, empty when unset
    pub due_date: String,
    pub sales_rep: String,
    pub priority: Priority,
}

impl OrderDraft {
    /// Check every field and build the order
    pub fn validate(&self) -> Result<OrderRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let customer = errors.take(Field::Customer, required_text(&self.customer));
        let product = errors.take(Field::Product, required_text(&self.product));
        let quantity = errors.take(
            Field::Quantity,
            required_number(&self.quantity, QUANTITY_MIN, QUANTITY_STEP)
                .and_then(|q| q.to_u32().ok_or(FieldError::OutOfRange)),
        );
        let unit_price = errors.take(
            Field::UnitPrice,
            required_number(&self.unit_price, UNIT_PRICE_MIN, UNIT_PRICE_STEP),
        );
        let due_date = errors.take(Field::DueDate, required_date(&self.due_date));
        let sales_rep = errors.take(Field::SalesRep, required_text(&self.sales_rep));

        match (customer, product, quantity, unit_price, due_date, sales_rep) {
            (
                Some(customer),
                Some(product),
                Some(quantity),
                Some(unit_price),
                Some(due_date),
                Some(sales_rep),
            ) => Ok(OrderRequest {
                customer,
                product,
                quantity,
                unit_price,
                due_date,
                sales_rep,
                priority: self.priority,
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_order() -> OrderDraft {
        OrderDraft {
            customer: "Northwind Traders".to_string(),
            product: "Espresso Machine".to_string(),
            quantity: "3".to_string(),
            unit_price: "249.99".to_string(),
            due_date: "2026-11-02".to_string(),
            sales_rep: "J. Okafor".to_string(),
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_builtin_defaults() {
        let report = ReportDraft::default();
        assert_eq!(report.report_type, ReportType::SalesSummary);
        assert_eq!(report.start_date, "");
        assert_eq!(report.end_date, "");
        assert_eq!(report.format, ExportFormat::Pdf);

        let order = OrderDraft::default();
        assert_eq!(order.priority, Priority::High);
        assert!(order.customer.is_empty());
        assert!(order.product.is_empty());
        assert!(order.quantity.is_empty());
        assert!(order.unit_price.is_empty());
        assert!(order.due_date.is_empty());
        assert!(order.sales_rep.is_empty());
    }

    #[test]
    fn test_display_names() {
        let names: Vec<String> = ReportType::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(
            names,
            ["Sales Summary", "Revenue Breakdown", "Customer Performance", "Order Status"]
        );
        assert_eq!(ExportFormat::Xlsx.to_string(), "XLSX");
        assert_eq!(Priority::Low.to_string(), "Low");
    }

    #[test]
    fn test_report_validate() {
        let draft = ReportDraft {
            start_date: "2026-01-01".to_string(),
            end_date: "2026-03-31".to_string(),
            format: ExportFormat::Csv,
            ..Default::default()
        };
        let request = draft.validate().unwrap();
        assert_eq!(request.report_type, ReportType::SalesSummary);
        assert_eq!(request.format, ExportFormat::Csv);
        assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2026, 3, 31).unwrap());
    }

    #[test]
    fn test_report_missing_dates() {
        let errors = ReportDraft::default().validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.first(), Some((Field::StartDate, &FieldError::Missing)));
        assert_eq!(errors.get(Field::EndDate), Some(&FieldError::Missing));
    }

    #[test]
    fn test_report_dates_not_cross_checked() {
        let draft = ReportDraft {
            start_date: "2026-06-30".to_string(),
            end_date: "2026-01-01".to_string(),
            ..Default::default()
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_order_validate() {
        let order = filled_order().validate().unwrap();
        assert_eq!(order.customer, "Northwind Traders");
        assert_eq!(order.quantity, 3);
        assert_eq!(order.unit_price, Decimal::new(24999, 2));
        assert_eq!(order.priority, Priority::Medium);
        assert_eq!(order.total(), Decimal::new(74997, 2));
    }

    #[test]
    fn test_order_quantity_bounds() {
        let mut draft = filled_order();
        draft.quantity = "-1".to_string();
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get(Field::Quantity),
            Some(&FieldError::BelowMinimum { min: Decimal::ZERO })
        );

        draft.quantity = "0".to_string();
        assert_eq!(draft.validate().unwrap().quantity, 0);

        draft.quantity = "99999999999".to_string();
        assert_eq!(
            draft.validate().unwrap_err().get(Field::Quantity),
            Some(&FieldError::OutOfRange)
        );
    }

    #[test]
    fn test_order_price_granularity() {
        let mut draft = filled_order();
        draft.unit_price = "10.005".to_string();
        assert!(matches!(
            draft.validate().unwrap_err().get(Field::UnitPrice),
            Some(FieldError::StepMismatch { .. })
        ));

        draft.unit_price = "10".to_string();
        assert_eq!(draft.validate().unwrap().unit_price, Decimal::TEN);
    }

    #[test]
    fn test_order_all_missing_in_form_order() {
        let errors = OrderDraft::default().validate().unwrap_err();
        let fields: Vec<Field> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            [
                Field::Customer,
                Field::Product,
                Field::Quantity,
                Field::UnitPrice,
                Field::DueDate,
                Field::SalesRep,
            ]
        );
    }

    #[test]
    fn test_draft_yaml_uses_display_names() {
        let yaml = "report_type: Order Status\nformat: XLSX\n";
        let draft: ReportDraft = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(draft.report_type, ReportType::OrderStatus);
        assert_eq!(draft.format, ExportFormat::Xlsx);
        assert!(draft.start_date.is_empty());

        let order: OrderDraft = serde_yaml::from_str("priority: Low\n").unwrap();
        assert_eq!(order.priority, Priority::Low);
    }
}
