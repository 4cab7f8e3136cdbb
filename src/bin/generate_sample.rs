use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};

/// Deterministic sample series in the published schema. Amplitude and drift
/// are arbitrary; the point is plausible weekly shapes for offline use.
struct SeriesDef {
    unit: &'static str,
    category: &'static str,
    variable: &'static str,
    subvariable: &'static str,
    base: f64,
    drift_per_week: f64,
    wave: f64,
}

fn main() -> Result<()> {
    let series = [
        SeriesDef {
            unit: "Millones de dólares",
            category: "Reservas",
            variable: "RIN",
            subvariable: "",
            base: 1800.0,
            drift_per_week: -4.5,
            wave: 35.0,
        },
        SeriesDef {
            unit: "Millones de dólares",
            category: "Reservas",
            variable: "RIN",
            subvariable: "Oro",
            base: 1400.0,
            drift_per_week: 1.2,
            wave: 12.0,
        },
        SeriesDef {
            unit: "Millones de bolivianos",
            category: "Depósitos",
            variable: "Depósitos del público",
            subvariable: "Vista",
            base: 24000.0,
            drift_per_week: 30.0,
            wave: 400.0,
        },
        SeriesDef {
            unit: "Porcentaje",
            category: "Tipo de cambio",
            variable: "Venta",
            subvariable: "",
            base: 6.96,
            drift_per_week: 0.0,
            wave: 0.0,
        },
    ];

    let start = NaiveDate::from_ymd_opt(2024, 1, 5).expect("valid start date");
    let weeks: i64 = 52;

    let output_path = "datos_sample.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer
        .write_record([
            "unidad",
            "categoria",
            "variable",
            "subvariable",
            "fecha",
            "valor",
        ])
        .context("writing header")?;

    let mut rows = 0usize;
    for week in 0..weeks {
        let date = (start + Duration::weeks(week)).format("%Y-%m-%d").to_string();

        for def in &series {
            // One gap per year exercises the lenient value coercion.
            let valor = if week == 30 && def.subvariable == "Oro" {
                "n.d.".to_string()
            } else {
                let t = week as f64;
                let value = def.base
                    + def.drift_per_week * t
                    + def.wave * (t * std::f64::consts::TAU / 26.0).sin();
                format!("{value:.2}")
            };

            writer
                .write_record([
                    def.unit,
                    def.category,
                    def.variable,
                    def.subvariable,
                    date.as_str(),
                    valor.as_str(),
                ])
                .context("writing row")?;
            rows += 1;
        }
    }

    writer.flush().context("flushing output")?;
    println!("Wrote {rows} observations ({weeks} weeks) to {output_path}");
    Ok(())
}
