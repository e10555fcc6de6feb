use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::predicate;

const INSTANCE: &str = r#"# Toni's tutorial example
language: a, b, c, q, p, r, s, t
assumptions: a, b, c
rules: (p, q, a), (q), (r, b, c), (t, p, c), (s, t)
contraries: (a, r), (b, s), (c, t)
preferences: (b, a)
"#;

fn run_on_instance(
    instance: &str,
    args: &[&str],
) -> Result<assert_cmd::assert::Assert, Box<dyn std::error::Error>> {
    let file = NamedTempFile::new("instance.aba")?;
    file.write_str(instance)?;
    let mut cmd = Command::cargo_bin("abagen")?;
    cmd.args(args).arg("-f").arg(file.path());
    let assert = cmd.assert();
    file.close()?;
    Ok(assert)
}

#[test]
fn test_check() -> Result<(), Box<dyn std::error::Error>> {
    run_on_instance(INSTANCE, &["check"])?
        .success()
        .stdout(predicate::str::contains("the framework is atomic: false"))
        .stdout(predicate::str::contains("the framework is circular: false"));
    Ok(())
}

#[test]
fn test_check_invalid_instance() -> Result<(), Box<dyn std::error::Error>> {
    let instance = "language: a\nassumptions: a, b\nrules: (a)\ncontraries: \n";
    run_on_instance(instance, &["check"])?.failure();
    Ok(())
}

#[test]
fn test_generate_arguments() -> Result<(), Box<dyn std::error::Error>> {
    run_on_instance(INSTANCE, &["generate", "-p", "arguments"])?
        .success()
        .stdout(predicate::str::contains("A0: {a} |- p"))
        .stdout(predicate::str::contains("A1: {} |- q"))
        .stdout(predicate::str::contains("A2: {b, c} |- r"))
        .stdout(predicate::str::contains("A5: {a} |- a"));
    Ok(())
}

#[test]
fn test_generate_attacks() -> Result<(), Box<dyn std::error::Error>> {
    run_on_instance(INSTANCE, &["generate", "-p", "attacks"])?
        .success()
        .stdout(predicate::str::contains("A2 attacks A0"))
        .stdout(predicate::str::contains("A3 attacks A3"))
        .stdout(predicate::str::contains("A4 attacks A6"));
    Ok(())
}

#[test]
fn test_generate_preference_attacks() -> Result<(), Box<dyn std::error::Error>> {
    run_on_instance(INSTANCE, &["generate", "-p", "preference-attacks"])?
        .success()
        .stdout(predicate::str::contains("Normal attacks:"))
        .stdout(predicate::str::contains("{a, c} -> {b}"))
        .stdout(predicate::str::contains("Reverse attacks:"))
        .stdout(predicate::str::contains("{a} -> {b, c}"));
    Ok(())
}

#[test]
fn test_generate_preference_attacks_without_preferences() -> Result<(), Box<dyn std::error::Error>>
{
    let instance = r#"language: a, b, c, q, p, r, s, t
assumptions: a, b, c
rules: (p, q, a), (q), (r, b, c), (t, p, c), (s, t)
contraries: (a, r), (b, s), (c, t)
"#;
    run_on_instance(instance, &["generate", "-p", "preference-attacks"])?
        .failure()
        .stdout(predicate::str::contains("no preferences specified"));
    Ok(())
}

#[test]
fn test_generate_arguments_on_atomized_framework() -> Result<(), Box<dyn std::error::Error>> {
    run_on_instance(INSTANCE, &["generate", "-p", "arguments", "-t", "atomic"])?
        .success()
        .stdout(predicate::str::contains("{q_d, a} |- p"))
        .stdout(predicate::str::contains("{t_d} |- s"));
    Ok(())
}

#[test]
fn test_convert_to_atomic() -> Result<(), Box<dyn std::error::Error>> {
    run_on_instance(INSTANCE, &["convert", "-t", "atomic"])?
        .success()
        .stdout(predicate::str::contains("R0: p <- (q_d, a)"))
        .stdout(predicate::str::contains("contrary of q_nd is q"));
    Ok(())
}

#[test]
fn test_convert_to_non_circular_falls_back() -> Result<(), Box<dyn std::error::Error>> {
    run_on_instance(INSTANCE, &["convert", "-t", "non-circular"])?
        .success()
        .stdout(predicate::str::contains("no conversion needed"))
        .stdout(predicate::str::contains("R0: p <- (q, a)"));
    Ok(())
}
