#![cfg(test)]
use reportkit_common::ReportError;
use reportkit_core::{Preset, ReportBuilder, director};

#[test]
fn every_preset_builds() {
    for preset in Preset::ALL {
        let result = preset.apply(&mut ReportBuilder::new());
        assert!(result.is_ok(), "Preset {preset} failed: {:?}", result.err());
    }
}

#[test]
fn monthly_pdf_renders_all_optional_lines() {
    let report = director::monthly_pdf(&mut ReportBuilder::new()).unwrap();
    let output: String = report.to_string();

    for expected in [
        "Header: Relatório de Vendas",
        "Chart: Bar",
        "Columns: Produto, Quantidade, Valor",
        "Filters: Status=Ativo",
        "Grouped by: Categoria",
        "Footer: Confidencial",
        "Report generated successfully!",
    ] {
        assert!(output.contains(expected), "Missing '{expected}' in:\n{output}");
    }
}

#[test]
fn presets_are_repeatable() {
    let first = Preset::YearlyHtml.apply(&mut ReportBuilder::new()).unwrap();
    let second = Preset::YearlyHtml.apply(&mut ReportBuilder::new()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn preset_on_a_spent_builder_fails() {
    let mut builder = ReportBuilder::new();
    director::quarterly_excel(&mut builder).unwrap();

    assert_eq!(
        director::yearly_html(&mut builder),
        Err(ReportError::AlreadyBuilt)
    );
}
