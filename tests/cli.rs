use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn bin() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("secureflow"))
}

#[test]
fn aes_encrypt_decrypt_roundtrip() {
    let output = bin()
        .env("SECUREFLOW_PASSPHRASE", "pw")
        .args(["aes", "encrypt", "attack at dawn"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let blob = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert!(!blob.is_empty());

    bin()
        .env("SECUREFLOW_PASSPHRASE", "pw")
        .args(["aes", "decrypt", &blob])
        .assert()
        .success()
        .stdout(predicate::str::contains("attack at dawn"));
}

#[test]
fn aes_decrypt_wrong_passphrase_fails_generically() {
    let output = bin()
        .env("SECUREFLOW_PASSPHRASE", "correct")
        .args(["aes", "encrypt", "secret"])
        .output()
        .unwrap();
    let blob = String::from_utf8(output.stdout).unwrap().trim().to_string();

    bin()
        .env("SECUREFLOW_PASSPHRASE", "wrong")
        .args(["aes", "decrypt", &blob])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"))
        .stderr(predicate::str::contains("wrong").not());
}

#[test]
fn aes_decrypt_garbage_is_malformed() {
    bin()
        .env("SECUREFLOW_PASSPHRASE", "pw")
        .args(["aes", "decrypt", "AAAA"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed input"));
}

#[test]
fn hash_sha256_empty_string_vector() {
    bin()
        .args(["hash", "sha256", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        ));
}

#[test]
fn hash_sha512_output_length() {
    let output = bin()
        .args(["hash", "sha512", "hello"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let digest = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert_eq!(digest.len(), 128);
}

#[test]
fn rsa_keygen_encrypt_decrypt_through_key_files() {
    let dir = tempdir().unwrap();
    let public = dir.path().join("public.b64");
    let private = dir.path().join("private.b64");

    bin()
        .args(["rsa", "keygen"])
        .arg("--public-out")
        .arg(&public)
        .arg("--private-out")
        .arg(&private)
        .assert()
        .success()
        .stdout(predicate::str::contains("Public key written"));

    assert!(public.exists());
    assert!(private.exists());

    let output = bin()
        .args(["rsa", "encrypt", "rsa secret"])
        .arg("--key-file")
        .arg(&public)
        .output()
        .unwrap();
    assert!(output.status.success());
    let ciphertext = String::from_utf8(output.stdout).unwrap().trim().to_string();

    bin()
        .args(["rsa", "decrypt", &ciphertext])
        .arg("--key-file")
        .arg(&private)
        .assert()
        .success()
        .stdout(predicate::str::contains("rsa secret"));
}

#[test]
fn rsa_encrypt_without_key_fails() {
    bin()
        .args(["rsa", "encrypt", "text"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--key"));
}

#[test]
fn rsa_oversized_plaintext_fails() {
    let dir = tempdir().unwrap();
    let public = dir.path().join("public.b64");
    let private = dir.path().join("private.b64");

    bin()
        .args(["rsa", "keygen"])
        .arg("--public-out")
        .arg(&public)
        .arg("--private-out")
        .arg(&private)
        .assert()
        .success();

    let too_big = "y".repeat(300);
    bin()
        .args(["rsa", "encrypt", &too_big])
        .arg("--key-file")
        .arg(&public)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plaintext too large"));
}
