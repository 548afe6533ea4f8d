use super::{ExportFormat, ReportStrategy, ReportType};

/// Quarterly sales report
pub struct SalesReport;

impl ReportStrategy for SalesReport {
    fn report_type(&self) -> ReportType {
        ReportType::Sales
    }

    fn title(&self) -> &'static str {
        "Rapport de Ventes - Trimestre 4"
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
            ExportFormat::Pdf => "Document confidentiel - Format PDF",
            ExportFormat::Excel => "Fichier Excel avec macros - Format XLSX",
            ExportFormat::Csv => "Fichier CSV - Encodage UTF-8",
            ExportFormat::Json => "Format JSON - API compatible",
        }
    }
}

const PDF_CONTENT: &str = "\
Ventes totales: 125,000€
Nombre de transactions: 450
Produit le plus vendu: Produit A (35%)
Croissance: +15% par rapport au trimestre précédent

Détails par région:
- Nord: 45,000€
- Sud: 32,000€
- Est: 28,000€
- Ouest: 20,000€";

const EXCEL_CONTENT: &str = "\
Données exportables vers Excel:
Colonnes: Date, Produit, Quantité, Montant, Région
Nombre de lignes: 450
Feuilles: Ventes, Statistiques, Graphiques
Formules: SOMME, MOYENNE, MAX, MIN intégrées";

const CSV_CONTENT: &str = "\
Format CSV simple:
date;produit;quantite;montant;region
2024-01-15;Produit A;25;1250;Nord
2024-01-16;Produit B;18;900;Sud
... (447 autres lignes)";

const JSON_CONTENT: &str = r#"{
  "period": "Q4-2024",
  "total_sales": 125000,
  "transactions": 450,
  "top_product": "Produit A",
  "growth": 15,
  "regions": {
    "north": 45000,
    "south": 32000,
    "east": 28000,
    "west": 20000
  }
}"#;
