use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnsupportedKind;

pub mod analytics;
pub mod customer;
pub mod desk;
pub mod financial;
pub mod inventory;
pub mod sales;

pub use desk::ReportDesk;

/// Kind of business report that can be generated
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    Sales,
    Inventory,
    Financial,
    Customer,
    Analytics,
}

impl ReportType {
    pub const ALL: [ReportType; 5] = [
        ReportType::Sales,
        ReportType::Inventory,
        ReportType::Financial,
        ReportType::Customer,
        ReportType::Analytics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Sales => "sales",
            ReportType::Inventory => "inventory",
            ReportType::Financial => "financial",
            ReportType::Customer => "customer",
            ReportType::Analytics => "analytics",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportType {
    type Err = UnsupportedKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnsupportedKind::ReportType(s.to_string()))
    }
}

/// Export format a report is rendered for
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Excel,
    Csv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Pdf,
        ExportFormat::Excel,
        ExportFormat::Csv,
        ExportFormat::Json,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Excel => "excel",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = UnsupportedKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| UnsupportedKind::ExportFormat(s.to_string()))
    }
}

/// A generated report, created fresh on every generation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportResult {
    pub title: String,
    pub content: String,
    pub footer: String,
    pub generated_at: DateTime<Utc>,
}

/// Report strategy trait, one implementation per report type
pub trait ReportStrategy: Send + Sync {
    /// Report type this strategy produces
    fn report_type(&self) -> ReportType;

    /// Fixed title of the report
    fn title(&self) -> &'static str;

    /// Body text for the given export format
    fn content(&self, format: ExportFormat) -> &'static str;

    /// Footer text for the given export format
    fn footer(&self, format: ExportFormat) -> &'static str;

    /// Assemble a report for `format`, stamped with the current time
    fn generate(&self, format: ExportFormat) -> ReportResult {
        tracing::debug!(report_type = %self.report_type(), %format, "generating report");
        ReportResult {
            title: self.title().to_string(),
            content: self.content(format).to_string(),
            footer: self.footer(format).to_string(),
            generated_at: Utc::now(),
        }
    }
}

/// Factory for creating report strategies
pub struct ReportFactory;

impl ReportFactory {
    /// Create the strategy for a report type
    pub fn create(report_type: ReportType) -> Box<dyn ReportStrategy> {
        match report_type {
            ReportType::Sales => Box::new(sales::SalesReport),
            ReportType::Inventory => Box::new(inventory::InventoryReport),
            ReportType::Financial => Box::new(financial::FinancialReport),
            ReportType::Customer => Box::new(customer::CustomerReport),
            ReportType::Analytics => Box::new(analytics::AnalyticsReport),
        }
    }

    /// Get all available report types
    pub fn available_report_types() -> Vec<&'static str> {
        ReportType::ALL.iter().map(ReportType::as_str).collect()
    }
}

/// Look up the strategy for a report type discriminant
pub fn create_report_strategy(report_type: &str) -> Result<Box<dyn ReportStrategy>, UnsupportedKind> {
    let report_type = report_type.parse::<ReportType>()?;
    Ok(ReportFactory::create(report_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_report_factory_creation() {
        for report_type in ReportType::ALL {
            let strategy = ReportFactory::create(report_type);
            assert_eq!(strategy.report_type(), report_type);
        }
    }

    #[test]
    fn test_unknown_report_type_is_rejected() {
        let result = create_report_strategy("weekly");
        assert!(matches!(result, Err(UnsupportedKind::ReportType(kind)) if kind == "weekly"));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = "docx".parse::<ExportFormat>();
        assert_eq!(result, Err(UnsupportedKind::ExportFormat("docx".to_string())));
    }

    #[test]
    fn test_discriminants_parse() {
        assert_eq!("analytics".parse::<ReportType>(), Ok(ReportType::Analytics));
        assert_eq!("excel".parse::<ExportFormat>(), Ok(ExportFormat::Excel));
        assert!("Sales".parse::<ReportType>().is_err());
    }

    #[test]
    fn test_every_combination_is_distinct_and_non_empty() {
        let mut contents = HashSet::new();
        let mut footers = HashSet::new();
        let mut titles = HashSet::new();

        for report_type in ReportType::ALL {
            let strategy = ReportFactory::create(report_type);
            for format in ExportFormat::ALL {
                let report = strategy.generate(format);
                assert!(!report.title.is_empty());
                assert!(!report.content.is_empty());
                assert!(!report.footer.is_empty());
                contents.insert(report.content);
                footers.insert(report.footer);
            }
            titles.insert(strategy.title());
        }

        assert_eq!(titles.len(), 5);
        assert_eq!(contents.len(), 20);
        assert_eq!(footers.len(), 20);
    }

    #[test]
    fn test_generation_is_deterministic_apart_from_timestamp() {
        for report_type in ReportType::ALL {
            for format in ExportFormat::ALL {
                let first = create_report_strategy(report_type.as_str())
                    .map(|s| s.generate(format))
                    .unwrap();
                let second = ReportFactory::create(report_type).generate(format);
                assert_eq!(first.title, second.title);
                assert_eq!(first.content, second.content);
                assert_eq!(first.footer, second.footer);
                assert!(second.generated_at >= first.generated_at);
            }
        }
    }

    #[test]
    fn test_report_result_serializes() {
        let report = ReportFactory::create(ReportType::Sales).generate(ExportFormat::Csv);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["footer"], "Fichier CSV - Encodage UTF-8");
        assert!(json.get("generated_at").is_some());
    }

    #[test]
    fn test_available_report_types() {
        let types = ReportFactory::available_report_types();
        assert_eq!(types, vec!["sales", "inventory", "financial", "customer", "analytics"]);
    }
}
