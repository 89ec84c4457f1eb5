use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{HEADER, Sandbox};

#[test]
fn test_save_new_date_appends_one_row() {
    let sb = Sandbox::new();
    sb.save("2024-01-01", "fixed bug", "18:00", "20:00");

    let rows = sb.rows();
    assert_eq!(rows.len(), 1);

    let r = &rows[0];
    assert_eq!(r[0], "2024-01-01");
    assert_eq!(r[1], "fixed bug");
    assert_eq!(r[2], "18:00");
    assert_eq!(r[3], "20:00");
    assert_eq!(r[4], r[5], "Created At and Updated At must match on insert");
    assert_eq!(r[4].len(), "YYYY-MM-DD HH:MM".len());
    assert_eq!(&r[6..], &["", "", ""]);

    assert!(sb.read_data().starts_with(HEADER));
}

#[test]
fn test_save_existing_date_only_touches_updated_fields() {
    let sb = Sandbox::new();
    sb.save("2024-01-01", "fixed bug", "18:00", "20:00");
    let before = sb.rows();

    sb.otl()
        .args([
            "--data",
            &sb.data(),
            "save",
            "2024-01-01",
            "-m",
            "fixed bug v2",
            "--start",
            "19:00",
            "--end",
            "22:30",
        ])
        .assert()
        .success()
        .stdout(contains("Work log updated for 2024-01-01"));

    let after = sb.rows();
    assert_eq!(after.len(), 1, "update must not append a row");

    // Date / Work Log / Start / End / Created At frozen
    assert_eq!(&after[0][..5], &before[0][..5]);
    assert_eq!(after[0][6], "fixed bug v2");
    assert_eq!(after[0][7], "19:00");
    assert_eq!(after[0][8], "22:30");
}

#[test]
fn test_save_empty_work_log_warns_and_changes_nothing() {
    let sb = Sandbox::new();

    sb.otl()
        .args(["--data", &sb.data(), "save", "2024-01-01", "-m", ""])
        .assert()
        .success()
        .stdout(contains("Please enter a working description"));

    assert!(!sb.path("ot.csv").exists(), "no file must be written");

    sb.save("2024-01-02", "real work", "18:00", "20:00");
    let before = sb.read_data();

    sb.otl()
        .args(["--data", &sb.data(), "save", "2024-01-02", "-m", ""])
        .assert()
        .success();

    assert_eq!(sb.read_data(), before);
}

#[test]
fn test_save_reads_description_from_stdin() {
    let sb = Sandbox::new();

    sb.otl()
        .args(["--data", &sb.data(), "save", "2024-03-04"])
        .write_stdin("deploy hotfix\nand verify\n")
        .assert()
        .success();

    let rows = sb.rows();
    assert_eq!(rows[0][1], "deploy hotfix\nand verify");
}

#[test]
fn test_save_uses_default_times() {
    let sb = Sandbox::new();

    sb.otl()
        .args(["--data", &sb.data(), "save", "2024-03-05", "-m", "defaults"])
        .assert()
        .success();

    let rows = sb.rows();
    assert_eq!(rows[0][2], "18:00");
    assert_eq!(rows[0][3], "20:00");
}

#[test]
fn test_save_rejects_time_outside_slots() {
    let sb = Sandbox::new();

    sb.otl()
        .args([
            "--data",
            &sb.data(),
            "save",
            "2024-01-01",
            "-m",
            "x",
            "--start",
            "18:15",
        ])
        .assert()
        .failure()
        .stderr(contains("18:15"));

    sb.otl()
        .args([
            "--data",
            &sb.data(),
            "save",
            "2024-01-01",
            "-m",
            "x",
            "--end",
            "05:30",
        ])
        .assert()
        .failure();

    assert!(!sb.path("ot.csv").exists());
}

#[test]
fn test_save_rejects_invalid_date() {
    let sb = Sandbox::new();

    sb.otl()
        .args(["--data", &sb.data(), "save", "2024-13-40", "-m", "x"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_delete_present_date_removes_row() {
    let sb = Sandbox::new();
    sb.save("2024-01-01", "one", "18:00", "20:00");
    sb.save("2024-01-02", "two", "18:00", "20:00");

    sb.otl()
        .args(["--data", &sb.data(), "del", "2024-01-01", "--force"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let rows = sb.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "2024-01-02");
}

#[test]
fn test_delete_last_row_reports_nothing_to_delete() {
    // the signal follows the resulting table, not whether a row matched
    let sb = Sandbox::new();
    sb.save("2024-01-01", "only", "18:00", "20:00");

    sb.otl()
        .args(["--data", &sb.data(), "del", "2024-01-01", "-f"])
        .assert()
        .success()
        .stdout(contains("No work log to delete"));

    assert!(sb.rows().is_empty());
    assert_eq!(sb.read_data().trim_end(), HEADER);
}

#[test]
fn test_delete_absent_date_leaves_table_unchanged() {
    let sb = Sandbox::new();
    sb.save("2024-01-01", "one", "18:00", "20:00");
    let before = sb.read_data();

    sb.otl()
        .args(["--data", &sb.data(), "del", "2030-01-01", "-f"])
        .assert()
        .success();

    assert_eq!(sb.read_data(), before);
}

#[test]
fn test_delete_without_confirmation_is_cancelled() {
    let sb = Sandbox::new();
    sb.save("2024-01-01", "keep me", "18:00", "20:00");

    sb.otl()
        .args(["--data", &sb.data(), "del", "2024-01-01"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    assert_eq!(sb.rows().len(), 1);
}

#[test]
fn test_example_sequence() {
    let sb = Sandbox::new();

    sb.save("2024-01-01", "fixed bug", "18:00", "20:00");
    assert_eq!(sb.rows()[0][6], "");

    sb.save("2024-01-01", "fixed bug v2", "18:00", "20:00");
    let rows = sb.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], "2024-01-01");
    assert_eq!(rows[0][1], "fixed bug");
    assert_eq!(rows[0][6], "fixed bug v2");

    sb.otl()
        .args(["--data", &sb.data(), "del", "2024-01-01", "-f"])
        .assert()
        .success();
    assert!(sb.rows().is_empty());
}

#[test]
fn test_list_empty_and_filtered() {
    let sb = Sandbox::new();

    sb.otl()
        .args(["--data", &sb.data(), "list"])
        .assert()
        .success()
        .stdout(contains("No saved work logs"));

    sb.save("2024-01-15", "january work", "18:00", "20:00");
    sb.save("2024-02-10", "february work", "18:00", "21:00");

    sb.otl()
        .args(["--data", &sb.data(), "list"])
        .assert()
        .success()
        .stdout(contains("january work").and(contains("february work")));

    sb.otl()
        .args(["--data", &sb.data(), "list", "--period", "2024-02"])
        .assert()
        .success()
        .stdout(contains("february work").and(contains("january work").not()));

    sb.otl()
        .args(["--data", &sb.data(), "list", "--period", "2024-2"])
        .assert()
        .failure();
}

#[test]
fn test_init_creates_header_only_data_file() {
    let sb = Sandbox::new();

    sb.otl()
        .args(["--data", &sb.data(), "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert_eq!(sb.read_data().trim_end(), HEADER);
    assert!(
        !sb.path(".otlog/otlog.conf").exists(),
        "test mode must not write the config file"
    );
}

#[test]
fn test_init_writes_config_and_default_data_file() {
    let sb = Sandbox::new();

    sb.otl().arg("init").assert().success();

    assert!(sb.path(".otlog/otlog.conf").exists());
    assert!(sb.path(".otlog/work_log.csv").exists());

    // without --data the configured file is used
    sb.otl()
        .args(["save", "2024-05-05", "-m", "configured"])
        .assert()
        .success();

    let content = fs::read_to_string(sb.path(".otlog/work_log.csv")).expect("read data");
    assert!(content.contains("configured"));
}

#[test]
fn test_config_check_and_migrate() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.path(".otlog")).expect("mkdir");
    fs::write(sb.path(".otlog/otlog.conf"), "default_start: \"19:00\"\n").expect("write conf");

    sb.otl()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields").and(contains("data_file")));

    sb.otl()
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Added fields"));

    let conf = fs::read_to_string(sb.path(".otlog/otlog.conf")).expect("read conf");
    assert!(conf.contains("19:00"), "existing values must be kept");
    assert!(conf.contains("default_end"));

    sb.otl()
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("complete"));
}

#[test]
fn test_configured_default_start_is_used() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.path(".otlog")).expect("mkdir");
    fs::write(
        sb.path(".otlog/otlog.conf"),
        "default_start: \"19:30\"\ndefault_end: \"23:00\"\n",
    )
    .expect("write conf");

    sb.otl()
        .args(["--data", &sb.data(), "save", "2024-06-01", "-m", "late"])
        .assert()
        .success();

    let rows = sb.rows();
    assert_eq!(rows[0][2], "19:30");
    assert_eq!(rows[0][3], "23:00");
}

#[test]
fn test_log_print_lists_operations() {
    let sb = Sandbox::new();
    sb.save("2024-01-01", "a", "18:00", "20:00");
    sb.save("2024-01-01", "b", "18:00", "20:00");

    sb.otl()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("save").and(contains("update")).and(contains("2024-01-01")));
}

#[test]
fn test_backup_plain_and_compressed() {
    let sb = Sandbox::new();
    sb.save("2024-01-01", "backup me", "18:00", "20:00");

    let plain = sb.path("backup/ot_copy.csv");
    sb.otl()
        .args([
            "--data",
            &sb.data(),
            "backup",
            "--file",
            &plain.to_string_lossy(),
        ])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&plain).expect("read backup"),
        sb.read_data()
    );

    let zipped = sb.path("backup/ot_zip.csv");
    sb.otl()
        .args([
            "--data",
            &sb.data(),
            "backup",
            "--file",
            &zipped.to_string_lossy(),
            "--compress",
        ])
        .assert()
        .success();
    assert!(sb.path("backup/ot_zip.zip").exists());
    assert!(!zipped.exists(), "uncompressed copy must be removed");
}

#[test]
fn test_backup_missing_data_file_fails() {
    let sb = Sandbox::new();

    sb.otl()
        .args([
            "--data",
            &sb.data(),
            "backup",
            "--file",
            &sb.path("b.csv").to_string_lossy(),
        ])
        .assert()
        .failure()
        .stderr(contains("Backup error"));
}

#[test]
fn test_backup_compress_respects_existing_files() {
    let sb = Sandbox::new();
    sb.save("2024-01-01", "zip me", "18:00", "20:00");

    let dest = sb.path("bk.csv");
    let archive = sb.path("bk.zip");
    fs::write(&archive, b"PRECIOUS").expect("seed zip");
    fs::write(&dest, b"user file").expect("seed csv");

    // existing archive: declined → untouched
    sb.otl()
        .args([
            "--data",
            &sb.data(),
            "backup",
            "--file",
            &dest.to_string_lossy(),
            "--compress",
        ])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Backup cancelled"));
    assert_eq!(fs::read(&archive).expect("read zip"), b"PRECIOUS");

    // forced: archive replaced, the file at the uncompressed name is never touched
    sb.otl()
        .args([
            "--data",
            &sb.data(),
            "backup",
            "--file",
            &dest.to_string_lossy(),
            "--compress",
            "--force",
        ])
        .assert()
        .success();

    let bytes = fs::read(&archive).expect("read zip");
    assert_eq!(&bytes[..2], b"PK");
    assert_eq!(fs::read(&dest).expect("read csv"), b"user file");
}

#[test]
fn test_save_empty_work_log_warns_even_with_malformed_file() {
    let sb = Sandbox::new();
    fs::write(sb.data(), format!("{HEADER}\nbroken,row\n")).expect("seed malformed file");

    sb.otl()
        .args(["--data", &sb.data(), "save", "2024-01-01", "-m", ""])
        .assert()
        .success()
        .stdout(contains("Please enter a working description"));

    // a real save still surfaces the malformed file
    sb.otl()
        .args(["--data", &sb.data(), "save", "2024-01-01", "-m", "x"])
        .assert()
        .failure()
        .stderr(contains("CSV error"));
}

#[test]
fn test_list_counts_edited_rows() {
    let sb = Sandbox::new();
    sb.save("2024-01-01", "first", "18:00", "20:00");
    sb.save("2024-01-01", "first, edited", "18:00", "21:00");
    sb.save("2024-01-02", "second", "18:00", "20:00");

    sb.otl()
        .args(["--data", &sb.data(), "list"])
        .assert()
        .success()
        .stdout(contains("2 entries (1 edited)"));
}

#[test]
fn test_invalid_slot_error_lists_options() {
    let sb = Sandbox::new();

    sb.otl()
        .args(["--data", &sb.data(), "save", "2024-01-01", "-m", "x", "--start", "18:15"])
        .assert()
        .failure()
        .stderr(contains("06:00, 06:30").and(contains("23:30")));
}
