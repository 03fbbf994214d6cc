use crate::glass::CalculationResult;
use std::io;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("io failure: {0}")]
    Io(#[from] io::Error),
    #[error("csv output is not valid UTF-8")]
    Encoding,
}

const HEADER: [&str; 13] = [
    "Panel Name",
    "Glass Type",
    "Quantity",
    "Length (m)",
    "Width (m)",
    "Thickness (mm)",
    "Area (m²)",
    "Weight (kg)",
    "Unit Weight (kg)",
    "Staff Required",
    "Lifting Method",
    "Unit Price",
    "Total Price",
];

fn fixed(value: f64) -> String {
    format!("{:.2}", value)
}

/// Writes one row per panel. Numbers carry two decimals and no currency.
pub fn write_csv<W: io::Write>(result: &CalculationResult, writer: W) -> Result<(), ReportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for panel in &result.panels {
        wtr.write_record([
            panel.name.clone(),
            panel.glass_type.label().to_string(),
            panel.quantity.to_string(),
            fixed(panel.length),
            fixed(panel.width),
            panel.thickness.to_string(),
            fixed(panel.area),
            fixed(panel.weight),
            fixed(panel.unit_weight),
            panel.staff_required.to_string(),
            panel.lifting_method.to_string(),
            fixed(panel.unit_price),
            fixed(panel.total_price),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string(result: &CalculationResult) -> Result<String, ReportError> {
    let mut buffer = Vec::new();
    write_csv(result, &mut buffer)?;
    String::from_utf8(buffer).map_err(|_| ReportError::Encoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::calculate;
    use crate::glass::{GlassPanelSpec, GlassType};

    #[test]
    fn export_has_header_and_one_row_per_panel() {
        let panels = [
            GlassPanelSpec::new("Kitchen", 2.0, 1.5, 4.0, GlassType::DoubleGlazed, 1),
            GlassPanelSpec::new("Bath, rear", 1.0, 1.0, 6.4, GlassType::Laminated, 2),
        ];
        let result = calculate(&panels).unwrap();
        let text = to_csv_string(&result).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Panel Name,Glass Type,Quantity"));
        assert_eq!(
            lines[1],
            "Kitchen,Double glazed,1,2.00,1.50,4,3.00,60.00,60.00,2,Suction/manual lift,45.00,135.00"
        );
        assert!(lines[2].starts_with("\"Bath, rear\",Laminated,2,"));
    }
}
