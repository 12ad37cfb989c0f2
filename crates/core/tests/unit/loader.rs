//! # Workload Loader Tests
//!
//! Header parsing, instruction parsing, and every rejection path.

use pretty_assertions::assert_eq;
use rstest::rstest;

use pagesched_core::{Instruction, SimError, Simulator, Workload};
use pagesched_core::config::Config;

const SAMPLE: &str = "\
2
1
3
10 2
2
Run 5
Write 13
1
Sleep 4
";

#[test]
fn parses_reference_layout() {
    let w = Workload::parse(SAMPLE, None).unwrap();
    assert_eq!(w.resources, vec![3]);
    assert_eq!(w.page_size, 10);
    assert_eq!(w.frame_count, 2);
    assert_eq!(w.processes.len(), 2);
    assert_eq!(w.instruction_count(), 3);

    let p0: Vec<_> = w.processes[0].instructions().copied().collect();
    assert_eq!(p0, vec![Instruction::run(5), Instruction::write(13)]);
    assert_eq!(w.processes[1].pid(), 1);
    assert_eq!(w.processes[1].instructions().next(), Some(&Instruction::sleep(4)));
}

#[rstest]
#[case::omitted("1\n0\n10 1\n1\nRUN 1\n")]
#[case::blank("1\n0\n\n10 1\n1\nRUN 1\n")]
#[case::padded("  1\n0  \n\n\n10   1\n1\n  RUN   1  \n\n")]
fn instance_line_optional_without_resources(#[case] text: &str) {
    let w = Workload::parse(text, None).unwrap();
    assert!(w.resources.is_empty());
    assert_eq!(w.processes[0].instructions().next(), Some(&Instruction::run(1)));
}

#[test]
fn mnemonics_are_case_insensitive() {
    let w = Workload::parse("1\n0\n10 1\n3\nrun 1\nREAD 4\nwRiTe 9\n", None).unwrap();
    assert_eq!(w.instruction_count(), 3);
}

#[test]
fn resource_instructions_are_kept() {
    let w = Workload::parse("1\n2\n1 4\n10 1\n2\nALLOCATE 2 1\nFREE 2 1\n", None).unwrap();
    assert_eq!(w.resources, vec![1, 4]);
    let p0: Vec<_> = w.processes[0].instructions().copied().collect();
    assert_eq!(p0, vec![Instruction::allocate(2, 1), Instruction::free(2, 1)]);
}

#[test]
fn unknown_mnemonic_is_reported_with_line() {
    let err = Workload::parse("1\n0\n10 1\n1\nJUMP 3\n", None).unwrap_err();
    match err {
        SimError::InvalidInstructionMnemonic { line, mnemonic } => {
            assert_eq!(line, 5);
            assert_eq!(mnemonic, "JUMP");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn address_beyond_limit_is_rejected() {
    let text = "1\n0\n10 1\n2\nREAD 99\nWRITE 100\n";
    assert!(Workload::parse(text, None).is_ok());
    let err = Workload::parse(text, Some(100)).unwrap_err();
    assert!(matches!(
        err,
        SimError::AddressOutOfRange {
            line: 6,
            address: 100,
            limit: 100
        }
    ));
}

#[rstest]
#[case::zero_processes("0\n0\n10 1\n", 1)]
#[case::missing_operand("1\n0\n10 1\n1\nRUN\n", 5)]
#[case::extra_operand("1\n0\n10 1\n1\nSLEEP 1 2\n", 5)]
#[case::bad_number("1\n0\n10 1\n1\nRUN x\n", 5)]
#[case::negative("1\n0\n10 1\n1\nRUN -1\n", 5)]
#[case::geometry("1\n0\n10 1 1\n1\nRUN 1\n", 3)]
#[case::instance_count("1\n2\n3\n10 1\n1\nRUN 1\n", 3)]
#[case::resource_id("1\n1\n2\n10 1\n1\nALLOCATE 1 1\n", 6)]
#[case::truncated("2\n0\n10 1\n1\nRUN 1\n", 6)]
#[case::trailing("1\n0\n10 1\n1\nRUN 1\nRUN 2\n", 6)]
#[case::two_counts("1 2\n0\n10 1\n", 1)]
#[case::huge_process_count("4000000000\n0\n10 1\n1\nRUN 1\n", 6)]
#[case::huge_instruction_count("1\n0\n10 1\n4000000000\nRUN 1\n", 6)]
fn malformed_text_is_a_parse_error(#[case] text: &str, #[case] expected_line: usize) {
    match Workload::parse(text, None) {
        Err(SimError::Parse { line, .. }) => assert_eq!(line, expected_line),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn zero_geometry_fails_at_configuration() {
    let w = Workload::parse("1\n0\n0 1\n1\nRUN 1\n", None).unwrap();
    let err = Simulator::for_workload(Config::default(), &w).unwrap_err();
    assert!(matches!(err, SimError::Configuration(_)));
}

#[test]
fn reads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workload.txt");
    std::fs::write(&path, SAMPLE).unwrap();
    let w = Workload::from_file(&path, None).unwrap();
    assert_eq!(w.processes.len(), 2);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Workload::from_file(dir.path().join("absent.txt"), None).unwrap_err();
    assert!(matches!(err, SimError::Io(_)));
}
