use super::{ExportFormat, ReportStrategy, ReportType};

/// Web traffic analytics over the last 30 days
pub struct AnalyticsReport;

impl ReportStrategy for AnalyticsReport {
    fn report_type(&self) -> ReportType {
        ReportType::Analytics
    }

    fn title(&self) -> &'static str {
        "Rapport Analytics - Performance Web"
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
            ExportFormat::Pdf => "Google Analytics - Période 30j",
            ExportFormat::Excel => "Excel Analytics - Données web",
            ExportFormat::Csv => "Raw data CSV - Analytics",
            ExportFormat::Json => "JSON Analytics API",
        }
    }
}

const PDF_CONTENT: &str = "\
Visiteurs uniques: 45,200
Pages vues: 128,500
Taux de rebond: 42%
Durée moyenne session: 3m 25s

Sources de trafic:
- Organique: 55%
- Direct: 25%
- Réseaux sociaux: 12%
- Publicité: 8%

Pages populaires:
1. Accueil - 28,400 vues
2. Produits - 18,200 vues
3. Blog - 12,800 vues";

const EXCEL_CONTENT: &str = "\
Dashboard Excel Analytics:
Feuilles: Vue d'ensemble, Sources, Conversions, Comportement
KPIs: 15 métriques principales
Graphiques: Tendances temporelles
Segments: Mobile vs Desktop, Nouveaux vs Récurrents";

const CSV_CONTENT: &str = "\
date;page;views;unique_visitors;avg_time;bounce_rate
2026-01-01;/home;850;720;00:03:15;38
2026-01-01;/products;420;380;00:04:20;35
... (930 autres lignes)";

const JSON_CONTENT: &str = r#"{
  "period": "30d",
  "unique_visitors": 45200,
  "pageviews": 128500,
  "bounce_rate": 42,
  "avg_session": "3m25s",
  "traffic_sources": {...},
  "top_pages": [...]
}"#;
