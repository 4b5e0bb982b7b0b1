mod common;

#[cfg(test)]
mod tests {
    use query::error::Result;
    use query::report::dataset_overview;
    use query::report::format_thousands;
    use query::report::format_year_range;
    use query::report::Report;
    use query::summary::country_summary;
    use query::summary::land_cover_totals;
    use query::summary::yearly_summary;
    use query::tables::country_summary_batch;
    use query::tables::pretty_table;
    use query::tables::yearly_summary_batch;

    use crate::common::dataset;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.), "0");
        assert_eq!(format_thousands(-0.4), "0");
        assert_eq!(format_thousands(999.), "999");
        assert_eq!(format_thousands(1000.), "1,000");
        assert_eq!(format_thousands(100000.), "100,000");
        assert_eq!(format_thousands(1234567.6), "1,234,568");
        assert_eq!(format_thousands(-1234.4), "-1,234");
        assert_eq!(format_thousands(0.5), "0");
        assert_eq!(format_thousands(1.5), "2");
        assert_eq!(format_thousands(2.5), "2");
        assert_eq!(format_thousands(1234.5), "1,234");
        assert_eq!(format_thousands(1235.5), "1,236");
    }

    #[test]
    fn test_format_year_range() {
        assert_eq!(format_year_range(Some((2002, 2023))), "2002 - 2023");
        assert_eq!(format_year_range(None), "n/a");
    }

    #[test]
    fn test_dataset_overview() {
        assert_eq!(
            dataset_overview(&dataset()),
            "Dataset loaded successfully!\nShape: (5, 8)\nYears covered: 2002 - 2003\nCountries: 3"
        );
    }

    #[test]
    fn test_report() {
        let ds = dataset();
        let countries = country_summary(&ds);
        let land_cover = land_cover_totals(&ds);
        let files = vec!["top_countries_burned_area.png".to_string()];

        let report = Report {
            country_count: ds.country_count(),
            year_range: ds.year_range(),
            countries: &countries,
            land_cover: &land_cover,
            top_countries: 10,
            files: &files,
        }
        .to_string();

        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "=".repeat(50));
        assert_eq!(lines[1], "FIRE DATA ANALYSIS SUMMARY");
        assert!(lines.contains(&"Total countries analyzed: 3"));
        assert!(lines.contains(&"Years covered: 2002 - 2003"));
        assert!(lines.contains(&"Total global burned area: 15,830 km²"));
        assert!(lines.contains(&" 1. Angola: 10,376 km²"));
        assert!(lines.contains(&" 2. Brazil: 4,432 km²"));
        assert!(lines.contains(&" 3. Chad: 1,021 km²"));
        assert!(lines.contains(&"  savannas: 13,700 km² (86.5%)"));
        assert!(lines.contains(&"  shrublands_grasslands: 1,550 km² (9.8%)"));
        assert!(lines.contains(&"  other: 34 km² (0.2%)"));
        assert!(lines.contains(&"- top_countries_burned_area.png"));
    }

    #[test]
    fn test_report_without_files() {
        let ds = dataset();
        let countries = country_summary(&ds);
        let land_cover = land_cover_totals(&ds);

        let report = Report {
            country_count: ds.country_count(),
            year_range: ds.year_range(),
            countries: &countries,
            land_cover: &land_cover,
            top_countries: 1,
            files: &[],
        }
        .to_string();

        assert!(report.contains(" 1. Angola"));
        assert!(!report.contains(" 2. Brazil"));
        assert!(!report.contains("Files created"));
    }

    #[test]
    fn test_tables() -> Result<()> {
        let ds = dataset();

        let batch = country_summary_batch(&country_summary(&ds))?;
        assert_eq!(batch.num_rows(), 3);
        assert_eq!(batch.num_columns(), 7);
        assert_eq!(batch.schema().field(0).name(), "country");
        assert_eq!(batch.schema().field(6).name(), "total_burned_area");

        let table = pretty_table(&[batch])?;
        assert!(table.contains("Angola"));
        assert!(table.contains("shrublands_grasslands"));

        let batch = yearly_summary_batch(&yearly_summary(&ds))?;
        assert_eq!(batch.num_rows(), 2);
        assert_eq!(batch.schema().field(0).name(), "year");

        Ok(())
    }
}
