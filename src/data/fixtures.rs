//! Shared CSV fixtures for unit tests.

use super::loader::load_from_reader;
use super::model::Table;
use super::schema::{DatasetSchema, COLUMNS};

fn header() -> String {
    COLUMNS.join(",")
}

/// Six data rows, one of them an `RXN Input` row, so five survive loading.
/// Two rows have `Cell == HeLa`; one `LOD` is `NA`.
pub fn sample_csv() -> String {
    let rows = [
        "3,25.1,10,96-well,2,HeLa,1,ProtK,TE,95,10,95,5,AB,2023-01-02,a.csv,Yes,",
        "NA,30.2,10,96-well,1,HEK293,1,ProtK,TE,65,10,95,5,AB,2023-01-02,a.csv,Yes,low signal",
        "0.1,15.0,RXN Input,96-well,2,HeLa,1,ProtK,TE,95,10,95,5,AB,2023-01-02,a.csv,Yes,",
        "1,22.4,5,384-well,2,HeLa,0.5,Lysozyme,PBS,95,20,80,10,CD,2023-01-03,b.csv,No,",
        "2.5,24.0,5,96-well,2,Jurkat,0.5,ProtK,PBS,65,20,80,10,CD,2023-01-03,b.csv,No,",
        "4,28.7,1,384-well,1,HEK293,1,Lysozyme,TE,95,10,95,5,EF,2023-01-04,c.csv,Yes,",
    ];
    let mut text = header();
    for row in rows {
        text.push('\n');
        text.push_str(row);
    }
    text.push('\n');
    text
}

/// CSV with the given `(LOD, CT, TargetLysisConcentration, Cell)` per row
/// and fixed values everywhere else.
pub fn csv_text(rows: &[(&str, &str, &str, &str)]) -> String {
    let mut text = header();
    for (lod, ct, target, cell) in rows {
        text.push_str(&format!(
            "\n{lod},{ct},{target},96-well,2,{cell},1,ProtK,TE,95,10,95,5,AB,2023-01-02,a.csv,Yes,"
        ));
    }
    text.push('\n');
    text
}

pub fn sample_table() -> Table {
    load_from_reader(sample_csv().as_bytes(), &DatasetSchema::default())
        .expect("sample fixture loads")
}
