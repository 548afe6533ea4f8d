use super::{ExportFormat, ReportStrategy, ReportType};

/// Annual financial statement
pub struct FinancialReport;

impl ReportStrategy for FinancialReport {
    fn report_type(&self) -> ReportType {
        ReportType::Financial
    }

    fn title(&self) -> &'static str {
        "Rapport Financier Annuel 2025"
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
            ExportFormat::Pdf => "Document certifié - Expert comptable",
            ExportFormat::Excel => "Excel Financier - Formules auditées",
            ExportFormat::Csv => "Grand livre - Format CSV",
            ExportFormat::Json => "API Financière JSON",
        }
    }
}

const PDF_CONTENT: &str = "\
Chiffre d'affaires: 1,250,000€
Charges: 890,000€
Résultat net: 360,000€
Marge: 28.8%

Bilan:
- Actif: 2,150,000€
- Passif: 1,320,000€
- Capitaux propres: 830,000€

Ratios:
- ROE: 43.4%
- ROI: 32.1%";

const EXCEL_CONTENT: &str = "\
Fichier Excel financier:
Feuilles: Compte de résultat, Bilan, Flux de trésorerie
Tableaux de bord: 8 indicateurs clés
Graphiques: Évolution mensuelle, Répartition charges
Consolidation: Multi-entités si applicable";

const CSV_CONTENT: &str = "\
compte;libelle;debit;credit;solde
601;Achats;450000;0;-450000
701;Ventes;0;1250000;1250000
... (125 lignes de comptes)";

const JSON_CONTENT: &str = r#"{
  "fiscal_year": 2025,
  "revenue": 1250000,
  "expenses": 890000,
  "net_income": 360000,
  "margin": 28.8,
  "balance_sheet": {...},
  "ratios": {...}
}"#;
