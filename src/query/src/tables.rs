use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::array::Float64Array;
use arrow::array::Int32Array;
use arrow::array::StringArray;
use arrow::datatypes::DataType;
use arrow::datatypes::Field;
use arrow::datatypes::Schema;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use common::types::COLUMN_COUNTRY;
use common::types::COLUMN_TOTAL_BURNED_AREA;
use common::types::COLUMN_YEAR;
use common::LandCover;

use crate::error::Result;
use crate::summary::CountryTotals;
use crate::summary::LandCoverTotals;
use crate::summary::YearTotals;

fn land_cover_fields() -> Vec<Field> {
    LandCover::all()
        .map(|cover| Field::new(cover.column(), DataType::Float64, false))
        .collect()
}

fn land_cover_arrays<'a>(
    rows: impl Iterator<Item = &'a LandCoverTotals> + Clone,
) -> Vec<ArrayRef> {
    LandCover::all()
        .map(|cover| {
            let values = rows.clone().map(|v| v.get(cover)).collect::<Vec<_>>();
            Arc::new(Float64Array::from(values)) as ArrayRef
        })
        .collect()
}

pub fn country_summary_batch(rows: &[CountryTotals]) -> Result<RecordBatch> {
    let mut fields = vec![Field::new(COLUMN_COUNTRY, DataType::Utf8, false)];
    fields.extend(land_cover_fields());
    fields.push(Field::new(COLUMN_TOTAL_BURNED_AREA, DataType::Float64, false));

    let mut cols: Vec<ArrayRef> = vec![Arc::new(StringArray::from(
        rows.iter().map(|v| v.country.clone()).collect::<Vec<_>>(),
    ))];
    cols.extend(land_cover_arrays(rows.iter().map(|v| &v.burned)));
    cols.push(Arc::new(Float64Array::from(
        rows.iter().map(|v| v.total_burned_area).collect::<Vec<_>>(),
    )));

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), cols)?)
}

pub fn yearly_summary_batch(rows: &[YearTotals]) -> Result<RecordBatch> {
    let mut fields = vec![Field::new(COLUMN_YEAR, DataType::Int32, false)];
    fields.extend(land_cover_fields());
    fields.push(Field::new(COLUMN_TOTAL_BURNED_AREA, DataType::Float64, false));

    let mut cols: Vec<ArrayRef> = vec![Arc::new(Int32Array::from(
        rows.iter().map(|v| v.year).collect::<Vec<_>>(),
    ))];
    cols.extend(land_cover_arrays(rows.iter().map(|v| &v.burned)));
    cols.push(Arc::new(Float64Array::from(
        rows.iter().map(|v| v.total_burned_area).collect::<Vec<_>>(),
    )));

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), cols)?)
}

pub fn pretty_table(batches: &[RecordBatch]) -> Result<String> {
    Ok(pretty_format_batches(batches)?.to_string())
}
