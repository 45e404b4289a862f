use anyhow::Result;
use sales_cleaner::{load_csv, CleanError, CleaningPipeline};
use std::fs;
use tempfile::tempdir;

const RAW: &str = "\
ProdName , CATEGORY ,price,qty,date_sold
Standing Desk,Office,250,1,2023-01-05
 standing desk , office ,250.0,1,2023/01/05
Pen Set,\"Office furniture\",5,3,01/06/2023
Pen Set,office,5,3,2023-01-06
Wireless Mouse,ELECTRONICS,25.5,2,2023-01-07
USB Cable,Electronic,,4,2023-01-07
Yoga Mat,Fitness,30,-1,2023-01-08
Blender,Kitchen,45,1,
Water Bottle,fitness gear,12,5,\"January 9, 2023\"
Notebook,,3.25,10,2023-01-10
";

const CLEAN: &str = "\
product_name,category,price,qty,date
standing desk,office,250,1,2023-01-05
pen set,office,5,3,2023-01-06
wireless mouse,electronics,25.5,2,2023-01-07
water bottle,fitness,12,5,2023-01-09
notebook,uncategorized,3.25,10,2023-01-10
";

#[test]
fn test_end_to_end_cleaning() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("raw/sales_data_raw.csv");
    let output = dir.path().join("processed/sales_data_clean.csv");
    fs::create_dir_all(input.parent().unwrap())?;
    fs::write(&input, RAW)?;

    let (table, report) = CleaningPipeline::new().run(&input, &output)?;

    assert_eq!(fs::read_to_string(&output)?, CLEAN);
    assert_eq!(table.len(), 5);
    assert_eq!(report.rows_loaded, 10);
    assert_eq!(report.rows_written, 5);
    assert_eq!(report.columns["price"].dropped, 1);
    assert_eq!(report.columns["qty"].dropped, 1);
    assert_eq!(report.columns["category"].filled, 1);
    assert_eq!(report.invalid_dates_dropped, 1);
    assert_eq!(report.duplicates_removed, 2);
    assert_eq!(report.output.as_deref(), Some(output.as_path()));

    Ok(())
}

#[test]
fn test_cleaning_is_idempotent() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("raw.csv");
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");
    fs::write(&input, RAW)?;

    let pipeline = CleaningPipeline::new();
    pipeline.run(&input, &first)?;
    let (_, report) = pipeline.run(&first, &second)?;

    assert_eq!(fs::read_to_string(&first)?, fs::read_to_string(&second)?);
    assert_eq!(report.rows_loaded, report.rows_written);
    assert!(report.renamed_columns.is_empty());

    Ok(())
}

#[test]
fn test_widget_row_canonical_form() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("raw.csv");
    let output = dir.path().join("clean.csv");
    fs::write(
        &input,
        "Product,category,Date,sales\n\" widget A \",ELECTRONICS,2023/01/05,10\n",
    )?;

    CleaningPipeline::new().run(&input, &output)?;

    assert_eq!(
        fs::read_to_string(&output)?,
        "product_name,category,date,sales\nwidget a,electronics,2023-01-05,10\n"
    );

    let reloaded = load_csv(&output)?;
    assert_eq!(reloaded.headers(), &["product_name", "category", "date", "sales"]);

    Ok(())
}

#[test]
fn test_missing_input_is_io_error() {
    let dir = tempdir().unwrap();
    let result = CleaningPipeline::new().run(
        &dir.path().join("nope.csv"),
        &dir.path().join("out.csv"),
    );

    assert!(matches!(result, Err(CleanError::Io { .. })));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_malformed_input_is_format_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("ragged.csv");
    let output = dir.path().join("out.csv");
    fs::write(&input, "a,b,c\n1,2,3\n4,5\n").unwrap();

    let result = CleaningPipeline::new().run(&input, &output);

    assert!(matches!(result, Err(CleanError::Format { .. })));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_is_io_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    fs::write(&input, RAW).unwrap();

    // A regular file where the output directory should be
    let blocker = dir.path().join("blocked");
    fs::write(&blocker, "").unwrap();

    let result = CleaningPipeline::new().run(&input, &blocker.join("clean.csv"));

    assert!(matches!(result, Err(CleanError::Io { .. })));
}
