//! End-to-end tests for importing CSV files into class files.

use std::fs;

use clsgen_import::{Error, ImportConfig, Importer};
use tempfile::TempDir;

const HEADER: &str = "class_name,property_name,property_type,max_length,required\n";

fn importer(out: &TempDir) -> Importer {
    Importer::new(ImportConfig {
        output_dir: out.path().join("csv"),
        ..ImportConfig::default()
    })
}

fn write_csv(dir: &TempDir, rows: &str) -> std::path::PathBuf {
    let path = dir.path().join("input.csv");
    fs::write(&path, format!("{}{}", HEADER, rows)).unwrap();
    path
}

#[test]
fn test_writes_one_file_per_class() {
    let temp = TempDir::new().unwrap();
    let csv = write_csv(
        &temp,
        "Person,Name,text,50,true\nPerson,Age,integer,,TRUE\nOrder,Total,decimal,,false\n",
    );

    let report = importer(&temp).run(&csv).unwrap();

    assert_eq!(report.rows, 3);
    assert_eq!(
        report.written,
        [
            temp.path().join("csv/Person.cls"),
            temp.path().join("csv/Order.cls")
        ]
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("csv/Person.cls")).unwrap(),
        "Class Demo.CSV.Person Extends %Persistent\n{\n\n\
         Property Name As %String(MAXLEN = 50) [ Required ];\n\n\
         Property Age As %Integer [ Required ];\n\n}\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("csv/Order.cls")).unwrap(),
        "Class Demo.CSV.Order Extends %Persistent\n{\n\nProperty Total As %Numeric;\n\n}\n"
    );
}

#[test]
fn test_unknown_type_aborts_and_keeps_earlier_files() {
    let temp = TempDir::new().unwrap();
    let importer = importer(&temp);

    let first = write_csv(&temp, "Person,Name,text,,\n");
    importer.run(&first).unwrap();
    let person = temp.path().join("csv/Person.cls");
    let before = fs::read_to_string(&person).unwrap();

    let second = write_csv(&temp, "Pet,Name,text,,\nPet,Photo,blob,,\n");
    let err = importer.run(&second).unwrap_err();

    assert!(matches!(*err, Error::UnknownType { .. }));
    assert!(!temp.path().join("csv/Pet.cls").exists());
    assert_eq!(fs::read_to_string(&person).unwrap(), before);
}

#[test]
fn test_progress_precedes_each_write() {
    let temp = TempDir::new().unwrap();
    let csv = write_csv(&temp, "Person,Name,text,,\nOrder,Total,decimal,,\n");
    // A directory where Order.cls should go makes the second write fail
    fs::create_dir_all(temp.path().join("csv/Order.cls")).unwrap();

    let mut announced = Vec::new();
    let err = importer(&temp)
        .run_with(&csv, |path| announced.push(path.to_path_buf()))
        .unwrap_err();

    assert!(matches!(*err, Error::Write { ref class, .. } if class == "Demo.CSV.Order"));
    assert_eq!(
        announced,
        [
            temp.path().join("csv/Person.cls"),
            temp.path().join("csv/Order.cls")
        ]
    );
    assert!(temp.path().join("csv/Person.cls").is_file());
}

#[test]
fn test_missing_input() {
    let temp = TempDir::new().unwrap();
    let err = importer(&temp)
        .run(&temp.path().join("missing.csv"))
        .unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp = TempDir::new().unwrap();
    let csv = write_csv(&temp, "Person,Name,text,20,true\n");
    let importer = importer(&temp);

    importer.run(&csv).unwrap();
    let first = fs::read(temp.path().join("csv/Person.cls")).unwrap();
    importer.run(&csv).unwrap();
    let second = fs::read(temp.path().join("csv/Person.cls")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_config_file() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("clsgen.toml");
    fs::write(
        &config_path,
        format!(
            "output_dir = {:?}\npackage = \"Shop\"\nextension = \"txt\"\n",
            temp.path().join("out").display().to_string()
        ),
    )
    .unwrap();

    let config = ImportConfig::open(&config_path).unwrap();
    let csv = write_csv(&temp, "Order,Total,decimal,,\n");
    let report = Importer::new(config).run(&csv).unwrap();

    assert_eq!(report.written, [temp.path().join("out/Order.txt")]);
    assert!(
        fs::read_to_string(&report.written[0])
            .unwrap()
            .starts_with("Class Shop.Order Extends %Persistent\n")
    );
}
