#![cfg(test)]
use chrono::NaiveDate;
use reportkit_common::{ReportError, Violation};
use reportkit_core::{ReportBuilder, ReportConfig};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn lines(report: &ReportConfig) -> Vec<String> {
    let mut buf: Vec<u8> = Vec::new();
    report.render(&mut buf).unwrap();
    String::from_utf8(buf)
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}

/// A fully configured monthly PDF, written out call by call.
#[test]
fn full_configuration_builds_and_renders() {
    let result = ReportBuilder::new()
        .title("Vendas Mensais")
        .format("PDF")
        .period(date(2024, 1, 1), date(2024, 1, 31))
        .header("Relatório de Vendas")
        .footer("Confidencial")
        .add_column("Produto")
        .add_column("Quantidade")
        .add_column("Valor")
        .chart("Bar")
        .add_filter("Status=Ativo")
        .sort_by("Valor")
        .group_by("Categoria")
        .totals()
        .orientation("Portrait")
        .page_size("A4")
        .page_numbers()
        .watermark("Confidencial")
        .build();

    assert!(result.is_ok(), "Build failed: {:?}", result.as_ref().err());
    let report: ReportConfig = result.unwrap();

    assert_eq!(report.columns(), ["Produto", "Quantidade", "Valor"]);
    assert_eq!(report.sort_by(), "Valor");
    assert!(report.include_page_numbers());

    let output: Vec<String> = lines(&report);
    assert_eq!(
        output,
        [
            "=== Generating report: Vendas Mensais ===",
            "Format: PDF",
            "Period: 01/01/2024 to 31/01/2024",
            "Header: Relatório de Vendas",
            "Chart: Bar",
            "Columns: Produto, Quantidade, Valor",
            "Filters: Status=Ativo",
            "Grouped by: Categoria",
            "Footer: Confidencial",
            "Report generated successfully!",
        ]
    );
}

#[test]
fn missing_title_is_rejected() {
    let result = ReportBuilder::new()
        .format("Excel")
        .period(date(2024, 1, 1), date(2024, 3, 31))
        .add_column("Vendedor")
        .build();

    let err: ReportError = result.unwrap_err();
    assert_eq!(err, ReportError::ConfigurationInvalid(Violation::MissingTitle));
    assert!(
        err.to_string().contains("title is required"),
        "Unexpected message: {err}"
    );
}

#[test]
fn missing_columns_are_rejected() {
    let result = ReportBuilder::new()
        .title("Relatório Trimestral")
        .format("Excel")
        .period(date(2024, 1, 1), date(2024, 3, 31))
        .build();

    let err: ReportError = result.unwrap_err();
    assert_eq!(err.violation(), Some(Violation::NoColumns));
    assert!(err.to_string().contains("at least one column is required"));
}

#[test]
fn call_order_does_not_matter() {
    let forward = ReportBuilder::new()
        .title("Vendas")
        .format("HTML")
        .period(date(2024, 1, 1), date(2024, 12, 31))
        .header("Painel")
        .add_column("Produto")
        .add_filter("Canal=Online")
        .totals()
        .build()
        .unwrap();

    let backward = ReportBuilder::new()
        .totals()
        .add_filter("Canal=Online")
        .add_column("Produto")
        .header("Painel")
        .period(date(2024, 1, 1), date(2024, 12, 31))
        .format("HTML")
        .title("Vendas")
        .build()
        .unwrap();

    assert_eq!(forward, backward);
}

#[test]
fn independent_builders_do_not_share_state() {
    let mut first = ReportBuilder::new();
    let mut second = ReportBuilder::new();

    first.title("First").add_column("A");
    second.title("Second").add_column("B").add_column("C");

    for builder in [&mut first, &mut second] {
        builder.format("PDF").period(date(2024, 1, 1), date(2024, 1, 31));
    }

    assert_eq!(first.build().unwrap().columns(), ["A"]);
    assert_eq!(second.build().unwrap().columns(), ["B", "C"]);
}
