use super::{ExportFormat, ReportStrategy, ReportType};

/// Active customer base report
pub struct CustomerReport;

impl ReportStrategy for CustomerReport {
    fn report_type(&self) -> ReportType {
        ReportType::Customer
    }

    fn title(&self) -> &'static str {
        "Rapport Clients - Base Active"
    }

    fn content(&self, format: ExportFormat) -> &'static str {
        match format {
            ExportFormat::Pdf => PDF_CONTENT,
            ExportFormat::Excel => EXCEL_CONTENT,
            ExportFormat::Csv => CSV_CONTENT,
            ExportFormat::Json => JSON_CONTENT,
        }
    }

    fn footer(&self, format: ExportFormat) -> &'static str {
        match format {
            ExportFormat::Pdf => "Rapport CRM - Données agrégées",
            ExportFormat::Excel => "Excel CRM - Données personnelles RGPD",
            ExportFormat::Csv => "Export CSV - Conforme RGPD",
            ExportFormat::Json => "API Clients JSON",
        }
    }
}

const PDF_CONTENT: &str = "\
Clients actifs: 1,250
Nouveaux clients (12 mois): 320
Taux de rétention: 87%
Panier moyen: 280€

Segmentation:
- Premium: 180 clients (42% CA)
- Standard: 650 clients (38% CA)
- Occasionnel: 420 clients (20% CA)

NPS Score: 68 (Excellent)";

const EXCEL_CONTENT: &str = "\
Base clients Excel:
Colonnes: ID, Nom, Email, Segment, CA, Dernière commande
Filtres avancés et segments
Graphiques: Répartition géographique, Évolution
Macro VBA: Export mailings";

const CSV_CONTENT: &str = "\
customer_id;name;email;segment;total_spent;last_order
C001;Jean Dupont;j.dupont@example.com;Premium;15200;2026-01-10
C002;Marie Martin;m.martin@example.com;Standard;3400;2026-01-12
... (1,248 autres clients)";

const JSON_CONTENT: &str = r#"{
  "total_customers": 1250,
  "active_customers": 1180,
  "new_customers_12m": 320,
  "retention_rate": 87,
  "segments": {...},
  "nps_score": 68
}"#;
