//! Tests for reading, transforming and writing files

mod common;

use std::fs;

use common::{create_test_file, generate_lines, read_lines, HELLO_INPUT, HELLO_OUTPUT};
use linecraft::pipeline::{count_words, transform, Access, ProcessError};
use tempfile::TempDir;

#[test]
fn test_end_to_end_hello_world() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "hello.txt", HELLO_INPUT);
    let output = temp_dir.path().join("hello_modified.txt");

    let outcome = transform(&input, &output).unwrap();

    assert_eq!(outcome.lines, 2);
    assert_eq!(outcome.words, 5);
    assert_eq!(fs::read_to_string(&output).unwrap(), HELLO_OUTPUT);
}

#[test]
fn test_output_line_count_matches_input() {
    let temp_dir = TempDir::new().unwrap();
    let lines = generate_lines(57);
    let input = create_test_file(&temp_dir, "many.txt", &lines.join("\n"));
    let output = temp_dir.path().join("many_out.txt");

    let outcome = transform(&input, &output).unwrap();
    let written = read_lines(&output);

    assert_eq!(outcome.lines, lines.len());
    assert_eq!(written.len(), lines.len());
    for (i, (original, transformed)) in lines.iter().zip(&written).enumerate() {
        let expected = format!(
            "Line {}: {} [Words: {}]",
            i + 1,
            original.trim_end().to_uppercase(),
            count_words(original)
        );
        assert_eq!(transformed, &expected, "line {} differs", i + 1);
    }
}

#[test]
fn test_trailing_whitespace_is_stripped() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "spaces.txt", "  a  b   c \t\r\n");
    let output = temp_dir.path().join("spaces_out.txt");

    transform(&input, &output).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Line 1:   A  B   C [Words: 3]\n"
    );
}

#[test]
fn test_blank_lines_are_kept() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "blank.txt", "one\n\nthree\n");
    let output = temp_dir.path().join("blank_out.txt");

    transform(&input, &output).unwrap();

    assert_eq!(
        read_lines(&output),
        vec![
            "Line 1: ONE [Words: 1]",
            "Line 2:  [Words: 0]",
            "Line 3: THREE [Words: 1]",
        ]
    );
}

#[test]
fn test_empty_input_is_rejected_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "empty.txt", "");
    let output = temp_dir.path().join("empty_out.txt");

    let err = transform(&input, &output).unwrap_err();

    assert!(matches!(err, ProcessError::EmptyInput { .. }));
    assert!(!output.exists(), "no output should be written for empty input");
}

#[test]
fn test_empty_input_leaves_existing_output_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "empty.txt", "");
    let output = create_test_file(&temp_dir, "keep.txt", "previous content\n");

    assert!(transform(&input, &output).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous content\n");
}

#[test]
fn test_missing_input_is_file_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("does_not_exist.txt");
    let output = temp_dir.path().join("out.txt");

    let err = transform(&input, &output).unwrap_err();

    assert!(matches!(err, ProcessError::FileNotFound { .. }));
    assert_eq!(err.path(), input.as_path());
    assert!(!output.exists());
}

#[test]
fn test_invalid_utf8_is_io_failure() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("binary.bin");
    fs::write(&input, [0xff, 0xfe, 0x00, 0x41, b'\n']).unwrap();
    let output = temp_dir.path().join("out.txt");

    let err = transform(&input, &output).unwrap_err();

    assert!(matches!(err, ProcessError::IoFailure { .. }));
    assert!(!output.exists());
}

#[cfg(unix)]
#[test]
fn test_directory_as_input_is_io_failure() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.txt");

    let err = transform(temp_dir.path(), &output).unwrap_err();

    assert!(matches!(err, ProcessError::IoFailure { .. }));
}

#[test]
fn test_unwritable_destination_keeps_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "in.txt", HELLO_INPUT);
    let output = temp_dir.path().join("missing_dir").join("out.txt");

    let err = transform(&input, &output).unwrap_err();

    assert!(matches!(err, ProcessError::IoFailure { .. }));
    assert_eq!(fs::read_to_string(&input).unwrap(), HELLO_INPUT);
}

#[test]
fn test_existing_output_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "in.txt", HELLO_INPUT);
    let output = create_test_file(
        &temp_dir,
        "out.txt",
        "stale 1\nstale 2\nstale 3\nstale 4\nstale 5\n",
    );

    transform(&input, &output).unwrap();

    assert_eq!(fs::read_to_string(&output).unwrap(), HELLO_OUTPUT);
}

#[test]
fn test_transform_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let path = create_test_file(&temp_dir, "same.txt", HELLO_INPUT);

    transform(&path, &path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), HELLO_OUTPUT);
}

#[test]
fn test_carriage_return_only_file_keeps_line_count() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "mac.txt", "Hello World\rPython is amazing\r");
    let output = temp_dir.path().join("mac_out.txt");

    let outcome = transform(&input, &output).unwrap();

    assert_eq!(outcome.lines, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), HELLO_OUTPUT);
}

#[cfg(unix)]
#[test]
fn test_symlinked_output_is_written_through() {
    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "in.txt", HELLO_INPUT);
    let real = create_test_file(&temp_dir, "real.txt", "old\n");
    let link = temp_dir.path().join("link.txt");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    transform(&input, &link).unwrap();

    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(fs::read_to_string(&real).unwrap(), HELLO_OUTPUT);
}

#[cfg(unix)]
#[test]
fn test_read_only_output_is_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "in.txt", HELLO_INPUT);
    let output = create_test_file(&temp_dir, "locked.txt", "keep me\n");
    fs::set_permissions(&output, fs::Permissions::from_mode(0o444)).unwrap();

    // Privileged users bypass file modes
    if fs::OpenOptions::new().write(true).open(&output).is_ok() {
        return;
    }

    let err = transform(&input, &output).unwrap_err();

    assert!(matches!(
        err,
        ProcessError::PermissionDenied {
            access: Access::Write,
            ..
        }
    ));
    assert_eq!(fs::read_to_string(&output).unwrap(), "keep me\n");
}

#[cfg(unix)]
#[test]
fn test_unreadable_input_is_permission_denied() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let input = create_test_file(&temp_dir, "secret.txt", HELLO_INPUT);
    fs::set_permissions(&input, fs::Permissions::from_mode(0o000)).unwrap();
    let output = temp_dir.path().join("out.txt");

    // Privileged users bypass file modes
    if fs::read(&input).is_ok() {
        return;
    }

    let err = transform(&input, &output).unwrap_err();

    assert!(matches!(
        err,
        ProcessError::PermissionDenied {
            access: Access::Read,
            ..
        }
    ));
    assert!(!output.exists());
}
