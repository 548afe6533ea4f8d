//! Factory Control: three small strategy registries and their sessions.
//!
//! - [`reports`]: report type and export format to canned report text
//! - [`notifications`]: channel to simulated delivery
//! - [`forms`]: field type to default field and validator

pub mod cli;
pub mod configuration;
pub mod error;
pub mod forms;
pub mod notifications;
pub mod reports;

pub use error::{FormError, Rejection, UnsupportedKind};
pub use forms::{create_field_strategy, FieldStrategy, FieldType, FormField, FormSession};
pub use notifications::{
    create_notification_strategy, create_notification_strategy_with, DeliveryOutcome, NotificationCenter, NotificationChannel,
    NotificationRecord, NotificationStrategy,
};
pub use reports::{create_report_strategy, ExportFormat, ReportDesk, ReportResult, ReportStrategy, ReportType};
