//! Report catalog listing for the `reports` command.

use intake_core::{Source, registry};
use intake_model::FieldSpec;

/// One report and its columns in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportListing {
    pub source: Source,
    pub report: &'static str,
    pub columns: Vec<String>,
}

/// `Name [kind]`, with `?` after the kind for optional columns.
pub fn describe_column(spec: &FieldSpec) -> String {
    let optional = if spec.required { "" } else { "?" };
    format!("{} [{}{optional}]", spec.name, spec.kind)
}

/// Reports for one source, or for every source when `source` is `None`.
pub fn list_reports(source: Option<Source>) -> Vec<ReportListing> {
    registry()
        .iter()
        .filter(|handlers| source.is_none_or(|wanted| handlers.source() == wanted))
        .flat_map(|handlers| {
            handlers.iter().map(move |(report, handler)| ReportListing {
                source: handlers.source(),
                report,
                columns: handler
                    .schema()
                    .fields
                    .iter()
                    .map(describe_column)
                    .collect(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sources_listed() {
        let reports: Vec<_> = list_reports(None)
            .into_iter()
            .map(|listing| format!("{}/{}", listing.source, listing.report))
            .collect();
        assert_eq!(
            reports,
            vec![
                "ns/Invoice_line_item_detail-Sales_Tax",
                "ns/SO_line_item_detail",
                "sfdc/Closed_Won_Ops-Products_Report",
                "anrok/Transactions",
            ]
        );
    }

    #[test]
    fn test_anrok_columns() {
        let listing = list_reports(Some(Source::Anrok));
        assert_eq!(listing.len(), 1);
        insta::assert_snapshot!(listing[0].columns.join("\n"), @r"
        Transaction ID [text]
        Customer ID [text]
        Customer name [text]
        Overall VAT ID validation status [text]
        Valid VAT IDs [text?]
        Other VAT IDs [text?]
        Invoice date [date]
        Tax date [date]
        Transaction currency [text]
        Sales amount [numeric]
        Exempt reasons [text?]
        Tax amount [numeric]
        Invoice amount [numeric]
        Void [boolean]
        Customer address line 1 [text]
        Customer address city [text]
        Customer address region [text]
        Customer address postal code [text]
        Customer address country [text]
        Customer country code [text]
        Jurisdictions [text]
        Jurisdictions IDs [text]
        Return IDs [text]
        ");
    }
}
