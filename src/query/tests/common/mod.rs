#![allow(dead_code)]

use query::FireDataset;

pub const FIRES_CSV: &str = "\
country,year,forest,savannas,shrublands_grasslands,croplands,other,region
Brazil,2002,100.5,2000,300,50,10,SA
Brazil,2003,120,1800,,40,12,SA
Angola,2002,80,5000,200,30,5,AF
Angola,2003,70,4800,150,35,6,AF
Chad,2002,0,100,900,20,1,AF
";

pub fn dataset() -> FireDataset {
    FireDataset::try_new_from_csv(FIRES_CSV.as_bytes()).unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
