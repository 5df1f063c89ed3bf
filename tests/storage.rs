use std::fs;

use matix::{
    config::{Config, DEFAULT_DIRECTORY},
    error::{ConfigError, RuntimeError},
    interpreter::value::core::Matrix,
    storage::{DirectoryStore, MatrixStore},
};

#[test]
fn saved_matrices_load_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirectoryStore::new(dir.path());

    let matrices = [Matrix::from_rows(vec![vec![1.0, -2.5, 3.0], vec![4.0, 5.0, 6.25]]).unwrap(),
                    Matrix::from_rows(vec![vec![0.1, 0.0], vec![0.0, 1e-12]]).unwrap(),
                    Matrix::identity(3),
                    Matrix::zeros(2, 4).unwrap(),
                    Matrix::Number(-7.0)];

    for (i, m) in matrices.iter().enumerate() {
        let name = format!("m{i}");
        store.save(&name, m).unwrap();
        let loaded = Matrix::from_rows(store.load(&name).unwrap()).unwrap();
        assert_eq!(&loaded, m);
        assert_eq!(loaded.label(), m.label());
    }
}

#[test]
fn files_are_rows_of_space_separated_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirectoryStore::new(dir.path());

    store.save("d", &Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 0.5]]).unwrap())
         .unwrap();
    assert_eq!(fs::read_to_string(dir.path().join("d.matix")).unwrap(), "2 0 \n0 0.5 \n");
}

#[test]
fn rows_stop_at_the_first_non_number() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("m.matix"), "1 2 junk 9\n3\t4\n").unwrap();

    let store = DirectoryStore::new(dir.path());
    assert_eq!(store.load("m").unwrap(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
}

#[test]
fn empty_file_is_the_empty_matrix() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("e.matix"), "").unwrap();

    let store = DirectoryStore::new(dir.path());
    let rows = store.load("e").unwrap();
    assert!(rows.is_empty());
    assert_eq!(Matrix::from_rows(rows).unwrap().label(), "Empty Matrix");
}

#[test]
fn missing_and_unwritable_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = DirectoryStore::new(dir.path().join("no-such-directory"));

    let err = store.load("m").unwrap_err();
    assert!(matches!(&err, RuntimeError::FileNotFound { path } if path == "m.matix"));

    let err = store.save("m", &Matrix::Number(1.0)).unwrap_err();
    assert!(matches!(&err, RuntimeError::FileNotWritable { path } if path == "m.matix"));
    assert_eq!(err.to_string(), "Cannot write to file 'm.matix'");
}

#[test]
fn config_reads_the_first_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.txt");

    fs::write(&path, "matrices\n").unwrap();
    let config = Config::load(&path).unwrap();
    assert_eq!(config.working_directory, std::path::Path::new("matrices"));
    assert_eq!(config.prompt(), "matrices> ");

    fs::write(&path, "\n\nlater").unwrap();
    assert!(matches!(Config::load(&path), Err(ConfigError::Empty { .. })));

    let err = Config::load(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, ConfigError::Unreadable { .. }));
    assert_eq!(err.to_string(), "Error reading config file");

    assert_eq!(Config::default().working_directory, std::path::Path::new(DEFAULT_DIRECTORY));
}
