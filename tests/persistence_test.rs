use assert_cmd::cargo_bin;
use std::io::Write;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_config_file_key_recovery() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("settings.json");
    std::fs::write(&config_path, r#"{"chave_pix": "oficina@example.com"}"#).unwrap();

    // 1. First run: charge without a key uses the configured one
    let mut csv1 = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv1, "key, amount, name").unwrap();
    writeln!(csv1, ", 150.00, Oficina Mecanica do Joao").unwrap();

    let mut cmd1 = Command::new(cargo_bin!("brcode"));
    cmd1.arg(csv1.path()).arg("--config-path").arg(&config_path);

    let output1 = cmd1.output().expect("Failed to execute command");
    assert!(output1.status.success());
    let stdout1 = String::from_utf8_lossy(&output1.stdout);
    assert!(stdout1.contains(
        "00020126410014br.gov.bcb.pix0119oficina@example.com520400005303986\
         5406150.005802BR5924OFICINA MECANICA DO JOAO6009SAO PAULO62070503***6304B841"
    ));

    // 2. Second run: the same settings file keeps providing the key
    let mut csv2 = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv2, "key, amount, name").unwrap();
    writeln!(csv2, ", 10.00, ").unwrap();

    let mut cmd2 = Command::new(cargo_bin!("brcode"));
    cmd2.arg(csv2.path()).arg("--config-path").arg(&config_path);

    let output2 = cmd2.output().expect("Failed to execute command");
    assert!(output2.status.success());
    let stdout2 = String::from_utf8_lossy(&output2.stdout);
    assert!(stdout2.contains("0119oficina@example.com"));
    assert!(stdout2.contains("540410.00"));
}
