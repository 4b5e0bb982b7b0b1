mod common;

#[cfg(test)]
mod tests {
    use std::env::temp_dir;
    use std::fs;

    use ::common::LandCover;
    use query::error::QueryError;
    use query::error::Result;
    use query::summary::country_summary;
    use query::summary::land_cover_totals;
    use query::FireDataset;
    use tracing_test::traced_test;
    use uuid::Uuid;

    use crate::common::assert_close;
    use crate::common::dataset;
    use crate::common::FIRES_CSV;

    #[test]
    fn test_shape_and_overview() {
        let ds = dataset();

        assert_eq!(ds.shape(), (5, 8));
        assert_eq!(ds.year_range(), Some((2002, 2003)));
        assert_eq!(ds.country_count(), 3);
    }

    #[test]
    fn test_missing_cells_count_as_zero() {
        let ds = dataset();

        let brazil_2003 = ds
            .records
            .iter()
            .find(|v| v.country == "Brazil" && v.year == 2003)
            .unwrap();
        assert_close(brazil_2003.burned.get(LandCover::ShrublandsGrasslands), 0.);
        assert_close(brazil_2003.burned.total(), 1972.);

        let csv = "country,year,forest,savannas,shrublands_grasslands,croplands,other\nChad,2010,abc,1,2,3,4\n";
        let ds = FireDataset::try_new_from_csv(csv.as_bytes()).unwrap();
        assert_close(ds.records[0].burned.get(LandCover::Forest), 0.);
        assert_close(ds.records[0].burned.total(), 10.);
    }

    #[test]
    fn test_non_finite_cells_count_as_zero() {
        let csv = "\
country,year,forest,savannas,shrublands_grasslands,croplands,other
Brazil,2002,NaN,10,10,10,10
Chad,2002,50,nan,inf,0,0
";
        let ds = FireDataset::try_new_from_csv(csv.as_bytes()).unwrap();

        let summary = country_summary(&ds);
        assert_eq!(summary[0].country, "Chad");
        assert_close(summary[0].total_burned_area, 50.);
        assert_eq!(summary[1].country, "Brazil");
        assert_close(summary[1].total_burned_area, 40.);
        assert_close(summary[1].burned.get(LandCover::Forest), 0.);
        assert_close(land_cover_totals(&ds).total(), 90.);
    }

    #[test]
    fn test_missing_column() {
        let csv = "country,year,forest,savannas,croplands,other\nChad,2010,1,2,3,4\n";
        let err = FireDataset::try_new_from_csv(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, QueryError::MissingColumn(col) if col == "shrublands_grasslands"));
    }

    #[test]
    fn test_bad_year_is_an_error() {
        let csv = "country,year,forest,savannas,shrublands_grasslands,croplands,other\nChad,soon,1,2,3,4,5\n";

        assert!(matches!(
            FireDataset::try_new_from_csv(csv.as_bytes()),
            Err(QueryError::CSV(_))
        ));
    }

    #[test]
    fn test_empty_dataset() {
        let csv = "country,year,forest,savannas,shrublands_grasslands,croplands,other\n";
        let ds = FireDataset::try_new_from_csv(csv.as_bytes()).unwrap();

        assert!(ds.records.is_empty());
        assert_eq!(ds.shape(), (0, 7));
        assert_eq!(ds.year_range(), None);
        assert_eq!(ds.country_count(), 0);
    }

    #[test]
    fn test_file_not_found() {
        let mut path = temp_dir();
        path.push(format!("{}.csv", Uuid::new_v4()));

        let err = FireDataset::try_new_from_path(&path).unwrap_err();
        assert!(matches!(err, QueryError::FileNotFound(p) if p == path.display().to_string()));
    }

    #[traced_test]
    #[test]
    fn test_load_from_path() -> Result<()> {
        let mut path = temp_dir();
        path.push(format!("{}.csv", Uuid::new_v4()));
        fs::write(&path, FIRES_CSV)?;

        let ds = FireDataset::try_new_from_path(&path)?;
        fs::remove_file(&path)?;

        assert_eq!(ds.shape(), (5, 8));
        assert!(logs_contain("loading"));

        Ok(())
    }
}
