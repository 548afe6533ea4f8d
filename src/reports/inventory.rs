use super::{ExportFormat, ReportStrategy, ReportType};

/// Stock snapshot report
pub struct InventoryReport;

impl ReportStrategy for InventoryReport {
    fn report_type(&self) -> ReportType {
        ReportType::Inventory
    }

    fn title(&self) -> &'static str {
        "Rapport d'Inventaire - Janvier 2026"
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
            ExportFormat::Pdf => "Rapport d'inventaire PDF - Confidentiel",
            ExportFormat::Excel => "Excel avec tableaux croisés dynamiques",
            ExportFormat::Csv => "CSV Export - Inventaire complet",
            ExportFormat::Json => "JSON API - Inventaire",
        }
    }
}

const PDF_CONTENT: &str = "\
Stock total: 15,420 unités
Valeur totale: 285,000€
Articles en rupture: 12
Articles en surstock: 8

Top 5 articles:
1. Produit Alpha - 2,500 unités
2. Produit Beta - 1,800 unités
3. Produit Gamma - 1,200 unités
4. Produit Delta - 950 unités
5. Produit Epsilon - 820 unités";

const EXCEL_CONTENT: &str = "\
Feuilles Excel:
- Vue d'ensemble: Stock par catégorie
- Détails: Liste complète des articles
- Alertes: Ruptures et surstock
- Valorisation: Prix et valeurs
Graphiques: 5 graphiques automatiques inclus";

const CSV_CONTENT: &str = "\
sku;nom;quantite;prix_unitaire;categorie;emplacement
SKU001;Produit Alpha;2500;25.00;Cat A;A-12
SKU002;Produit Beta;1800;35.50;Cat B;B-05
... (320 autres articles)";

// Abbreviated sample, not parseable JSON
const JSON_CONTENT: &str = r#"{
  "snapshot_date": "2026-01-15",
  "total_items": 15420,
  "total_value": 285000,
  "out_of_stock": 12,
  "overstock": 8,
  "items": [...]
}"#;
