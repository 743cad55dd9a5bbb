//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

// ============================================================================
// Test Utilities
// ============================================================================

/// Create a CLI command pinned to the built-in config
///
/// Points `--config` at a file holding `{}` so a store.json in the
/// developer's config dir cannot leak into the tests.
fn cli_cmd(config: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("gamestore").expect("Failed to find gamestore binary");
    cmd.arg("--config").arg(config.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn default_config() -> NamedTempFile {
    config_file("{}")
}

// ============================================================================
// Info / Listing Tests
// ============================================================================

#[test]
fn test_info_command() {
    let config = default_config();

    cli_cmd(&config)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("GameStore"))
        .stdout(predicate::str::contains("Items: 6"))
        .stdout(predicate::str::contains("Promo codes: 3"));
}

#[test]
fn test_catalog_all() {
    let config = default_config();

    cli_cmd(&config)
        .arg("catalog")
        .assert()
        .success()
        .stdout(predicate::str::contains("VIP Status"))
        .stdout(predicate::str::contains("Starter Pack"))
        .stdout(predicate::str::contains("399₽ (was 499₽, -20%)"));
}

#[test]
fn test_catalog_by_category() {
    let config = default_config();

    cli_cmd(&config)
        .args(["catalog", "--category", "vip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Premium VIP"))
        .stdout(predicate::str::contains("Crystals").not())
        .stdout(predicate::str::contains("Legendary Sword").not());
}

#[test]
fn test_catalog_unknown_category_fails() {
    let config = default_config();

    cli_cmd(&config)
        .args(["catalog", "--category", "pets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category: pets"));
}

#[test]
fn test_promos_command() {
    let config = default_config();

    cli_cmd(&config)
        .arg("promos")
        .assert()
        .success()
        .stdout(predicate::str::contains("GAME2024"))
        .stdout(predicate::str::contains("25% off for newcomers"))
        .stdout(predicate::str::contains("50% off VIP"));
}

#[test]
fn test_faq_command() {
    let config = default_config();

    cli_cmd(&config)
        .arg("faq")
        .assert()
        .success()
        .stdout(predicate::str::contains("Q: How do I activate a promo code?"))
        .stdout(predicate::str::contains("Q: Which payment methods are available?"));
}

// ============================================================================
// Quote Command Tests
// ============================================================================

#[test]
fn test_quote_empty_cart() {
    let config = default_config();

    cli_cmd(&config)
        .arg("quote")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cart is empty"));
}

#[test]
fn test_quote_total() {
    let config = default_config();

    cli_cmd(&config)
        .args(["quote", "--add", "1", "--add", "3", "--add", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Added to cart!: VIP Status added"))
        .stdout(predicate::str::contains("1000 Crystals x2"))
        .stdout(predicate::str::contains("Cart (2 lines):"))
        .stdout(predicate::str::contains("Total: 597₽"));
}

#[test]
fn test_quote_with_promo() {
    let config = default_config();

    cli_cmd(&config)
        .args(["quote", "-a", "1", "-a", "3", "-a", "3", "--promo", "vip50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Promo code activated!: 50% discount applied"))
        .stdout(predicate::str::contains("Discount 50% active! (VIP50)"))
        .stdout(predicate::str::contains("Total: 299₽"));
}

#[test]
fn test_quote_with_bad_promo() {
    let config = default_config();

    cli_cmd(&config)
        .args(["quote", "--add", "2", "--promo", "FAKE123"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[!] Invalid promo code: Try another code"))
        .stdout(predicate::str::contains("Total: 999₽"));
}

#[test]
fn test_quote_reports_rejected_promo_after_many_adds() {
    let config = default_config();

    let mut args = vec!["quote"];
    for _ in 0..70 {
        args.extend(["--add", "3"]);
    }
    args.extend(["--promo", "FAKE123"]);

    cli_cmd(&config)
        .args(&args)
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] Added to cart!: 1000 Crystals added"))
        .stdout(predicate::str::contains("[!] Invalid promo code: Try another code"))
        .stdout(predicate::str::contains("x70"))
        .stdout(predicate::str::contains("Total: 6930₽"));
}

#[test]
fn test_quote_remove() {
    let config = default_config();

    cli_cmd(&config)
        .args(["quote", "--add", "5", "--add", "6", "--remove", "5", "--remove", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[-] Legendary Sword removed"))
        .stdout(predicate::str::contains("Cart (1 lines):"))
        .stdout(predicate::str::contains("Total: 139₽"));
}

#[test]
fn test_quote_unknown_item_fails() {
    let config = default_config();

    cli_cmd(&config)
        .args(["quote", "--add", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Item not found: #42"));
}

// ============================================================================
// Shell Tests
// ============================================================================

#[test]
fn test_shell_session() {
    let config = default_config();

    cli_cmd(&config)
        .arg("shell")
        .write_stdin("add 1\nadd 3\nadd 3\npromo game2024\ncart\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("GameStore shell"))
        .stdout(predicate::str::contains("[+] Promo code activated!: 15% discount applied"))
        .stdout(predicate::str::contains("Total: 508₽"));
}

#[test]
fn test_shell_recovers_from_bad_input() {
    let config = default_config();

    cli_cmd(&config)
        .arg("shell")
        .write_stdin("add abc\nadd 99\nremove 1\nfly\npromo nope\nadd 2\ncart\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: expected an item id"))
        .stdout(predicate::str::contains("error: Item not found: #99"))
        .stdout(predicate::str::contains("#1 is not in the cart"))
        .stdout(predicate::str::contains("unknown command 'fly'"))
        .stdout(predicate::str::contains("[!] Invalid promo code"))
        .stdout(predicate::str::contains("Total: 999₽"));
}

#[test]
fn test_shell_clear() {
    let config = default_config();

    cli_cmd(&config)
        .arg("shell")
        .write_stdin("add 4\nclear\ncart\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cart is empty"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_custom_config() {
    let config = config_file(
        r#"{
            "store_name": "Pixel Shop",
            "currency_symbol": "$",
            "catalog": [
                { "id": 1, "name": "Hat", "description": "", "price": 10,
                  "category": "items", "image": "🎩" }
            ],
            "promo_codes": { "HALF": 50 }
        }"#,
    );

    cli_cmd(&config)
        .args(["quote", "--add", "1", "--add", "1", "--promo", "half"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hat x2"))
        .stdout(predicate::str::contains("Total: 10$"));
}

#[test]
fn test_missing_config_fails() {
    Command::cargo_bin("gamestore")
        .unwrap()
        .args(["--config", "/definitely/not/here.json", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
