use super::{ExportFormat, ReportFactory, ReportResult, ReportType};

/// Report generator session: current selection plus the last generated report
#[derive(Debug, Clone)]
pub struct ReportDesk {
    /// Report type picked by the user
    pub selected_report_type: ReportType,
    /// Export format picked by the user
    pub selected_format: ExportFormat,
    generated_report: Option<ReportResult>,
}

impl ReportDesk {
    /// Create a desk with the default selection (sales, pdf)
    pub fn new() -> Self {
        Self::with_selection(ReportType::Sales, ExportFormat::Pdf)
    }

    pub fn with_selection(report_type: ReportType, format: ExportFormat) -> Self {
        Self {
            selected_report_type: report_type,
            selected_format: format,
            generated_report: None,
        }
    }

    /// Generate a report for the current selection, replacing the previous one
    pub fn generate_report(&mut self) -> &ReportResult {
        let strategy = ReportFactory::create(self.selected_report_type);
        let report = strategy.generate(self.selected_format);
        tracing::info!(
            report_type = %self.selected_report_type,
            format = %self.selected_format,
            title = %report.title,
            "report generated"
        );
        self.generated_report.insert(report)
    }

    /// Last generated report, if any
    pub fn generated_report(&self) -> Option<&ReportResult> {
        self.generated_report.as_ref()
    }
}

impl Default for ReportDesk {
    fn default() -> Self {
        Self::new()
    }
}
