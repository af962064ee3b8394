use std::fs::{self};

use ks::{
    error::{LexError, RuntimeError},
    get_result,
    interpreter::{
        executor::core::Interpreter,
        host::{BufferHost, Host},
        value::core::Value,
    },
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_ks_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut host = BufferHost::with_inputs(["하늘"]);
            if let Err(e) = get_result(&code, &mut host) {
                panic!("KS example {} in {:?} failed:\n{}\nError: {:?}\nOutput:\n{}",
                       i + 1,
                       path,
                       code,
                       e,
                       host.output());
            }
        }
    }

    assert!(count > 0, "No KS examples found in book/src");
}

fn extract_ks_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```ks") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Runs `src` and returns everything it printed.
fn output_of(src: &str) -> String {
    output_with_inputs(src, &[])
}

fn output_with_inputs(src: &str, inputs: &[&str]) -> String {
    let mut interpreter = Interpreter::new(BufferHost::with_inputs(inputs.iter().copied()));
    if let Err(e) = interpreter.run(src) {
        panic!("Script failed: {e}\nOutput:\n{}", interpreter.host().output());
    }
    interpreter.host().output().to_string()
}

/// Runs `src`, expecting it to fail, and returns the error and the
/// interpreter for inspection.
fn failure_of(src: &str) -> (RuntimeError, Interpreter<BufferHost>) {
    let mut interpreter = Interpreter::new(BufferHost::new());
    match interpreter.run(src) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => (e, interpreter),
    }
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, &mut BufferHost::new()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, &mut BufferHost::new()).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn variable(interpreter: &Interpreter<BufferHost>, name: &str) -> Value {
    interpreter.variables()
               .get(name)
               .cloned()
               .unwrap_or_else(|| panic!("variable '{name}' is not set"))
}

#[test]
fn operator_precedence_and_grouping() {
    assert_eq!(output_of("출력(2 + 3 * 4)"), "14\n");
    assert_eq!(output_of("출력((2 + 3) * 4)"), "20\n");
    assert_eq!(output_of("출력(10 - 4 - 3)"), "3\n");
    assert_eq!(output_of("출력(100 / 10 / 2)"), "5\n");
    assert_eq!(output_of("출력(2 * (3 + (4 - 1)) * 2)"), "24\n");
    assert_eq!(output_of("출력(7 / 2)"), "3.5\n");
}

#[test]
fn division_follows_ieee_754() {
    assert_eq!(output_of("출력(1 / 0)"), "Infinity\n");
    assert_eq!(output_of("출력((0 - 1) / 0)"), "-Infinity\n");
    assert_eq!(output_of("출력(0 / 0)"), "NaN\n");
}

#[test]
fn assignment_round_trips() {
    assert_eq!(output_of("x = 5\n출력(x + 1)"), "6\n");
    assert_eq!(output_of("x = 5\nx = \"다섯\"\n출력(x)"), "다섯\n");
    assert_eq!(output_of("값 = 1\n값 = 값 + 값\n출력(값)"), "2\n");
}

#[test]
fn text_concatenation() {
    assert_eq!(output_of("출력(\"a\" + \"b\")"), "ab\n");
    assert_eq!(output_of("출력(\"n=\" + 3)"), "n=3\n");
    assert_eq!(output_of("출력(1 + 2 + \"개\")"), "3개\n");
    assert_eq!(output_of("출력(\"합: \" + 1 + 2)"), "합: 12\n");
}

#[test]
fn comments_and_blank_lines_are_skipped() {
    assert_eq!(output_of("# 시작\n\n   \nx = 1 # 초기값\n출력(x)  # 출력"), "1\n");
}

#[test]
fn undefined_variable_fails() {
    let (error, _) = failure_of("출력(x + 1)");
    assert_eq!(error,
               RuntimeError::UndefinedVariable { name: "x".to_string(),
                                                 line: 1, });
}

#[test]
fn unbalanced_parens_halt_before_next_line() {
    let (error, interpreter) = failure_of("출력((1 + 2)\nx = 1");
    assert_eq!(error, RuntimeError::UnbalancedParens { line: 1 });
    assert!(!interpreter.variables().contains("x"));

    assert_failure("x = (1 + 2");
    assert_failure("x = 1 + 2)");
    assert_failure("x = ) 1 (");
}

#[test]
fn type_mismatch_for_non_numeric_operands() {
    for src in ["x = \"a\" * 2", "x = 2 / \"a\"", "x = \"a\" - \"b\"", "x = 5 - \"1\""] {
        let (error, _) = failure_of(src);
        assert!(matches!(error, RuntimeError::TypeMismatch { line: 1, .. }), "{src}: {error:?}");
    }
}

#[test]
fn malformed_expressions_fail() {
    for src in ["x = 1 +", "x = * 2", "x = 1 2", "x = ()", "출력()"] {
        let (error, _) = failure_of(src);
        assert!(matches!(error, RuntimeError::MalformedExpression { .. }), "{src}: {error:?}");
    }
}

#[test]
fn lex_errors() {
    let (error, _) = failure_of("x = \"열린");
    assert_eq!(error, RuntimeError::Lex(LexError::UnterminatedText { line: 1 }));

    let (error, _) = failure_of("만약 \"열린 > 1 {\n}");
    assert_eq!(error, RuntimeError::Lex(LexError::UnterminatedText { line: 1 }));

    let (error, _) = failure_of("x = 1\n만약 x == 2 또는 \"열린 > 1 {\n}");
    assert_eq!(error, RuntimeError::Lex(LexError::UnterminatedText { line: 2 }));

    let (error, _) = failure_of("\nx = 1 % 2");
    assert_eq!(error,
               RuntimeError::Lex(LexError::UnexpectedCharacter { character: "%".to_string(),
                                                                 line:      2, }));
}

#[test]
fn comparator_priority() {
    assert_eq!(output_of("만약 5 >= 5 {\n  출력(\"참\")\n}"), "참\n");
    assert_eq!(output_of("만약 4 <= 5 {\n  출력(\"참\")\n}"), "참\n");
    assert_eq!(output_of("만약 5 != 4 {\n  출력(\"참\")\n}"), "참\n");
    assert_eq!(output_of("만약 5 == 5 {\n  출력(\"참\")\n}"), "참\n");
    assert_eq!(output_of("만약 5 > 5 {\n  출력(\"참\")\n}"), "");
}

#[test]
fn text_comparisons() {
    assert_eq!(output_of("a = \"사과\"\n만약 a == \"사과\" {\n  출력(\"같다\")\n}"), "같다\n");
    assert_eq!(output_of("만약 \">=\" == \">=\" {\n  출력(\"같다\")\n}"), "같다\n");
    assert_eq!(output_of("만약 1 == \"1\" {\n  출력(\"같다\")\n}\n아니면 {\n  출력(\"다르다\")\n}"),
               "다르다\n");
    assert_failure("만약 1 < \"2\" {\n}");
}

#[test]
fn and_short_circuits() {
    let out = output_of("만약 1 > 2 그리고 없는변수 > 0 {\n  출력(\"실행됨\")\n}\n출력(\"끝\")");
    assert_eq!(out, "끝\n");

    let out = output_of("만약 1 < 2 또는 없는변수 > 0 {\n  출력(\"실행됨\")\n}");
    assert_eq!(out, "실행됨\n");

    // The second operand is evaluated when the first does not decide.
    assert_failure("만약 1 < 2 그리고 없는변수 > 0 {\n}");
}

#[test]
fn grouped_conditions() {
    let src = "x = 3\n만약 (x == 1 또는 x == 3) 그리고 (x > 2) {\n  출력(\"맞음\")\n}";
    assert_eq!(output_of(src), "맞음\n");

    let src = "x = 3\n만약 ((x == 1 그리고 x == 3) 또는 x == 5) {\n  출력(\"맞음\")\n}";
    assert_eq!(output_of(src), "");
}

#[test]
fn missing_comparator_fails() {
    let (error, _) = failure_of("x = 1\n만약 x + 1 {\n  출력(x)\n}");
    assert_eq!(error, RuntimeError::MissingComparator { line: 2 });
}

#[test]
fn loop_runs_count_times() {
    let mut interpreter = Interpreter::new(BufferHost::new());
    interpreter.run("x = 0\n반복 3 {\n  x = x + 1\n}").unwrap();
    assert_eq!(variable(&interpreter, "x"), Value::Number(3.0));
    assert_eq!(interpreter.depth(), 0);

    assert_eq!(output_of("반복 0 {\n  출력(\"안 보임\")\n}\n출력(\"끝\")"), "끝\n");
}

#[test]
fn nested_loops_share_the_store() {
    let src = "n = 0\n반복 3 {\n  반복 4 {\n    n = n + 1\n  }\n}\n출력(n)";
    assert_eq!(output_of(src), "12\n");
}

#[test]
fn invalid_loop_counts_fail() {
    for (src, count) in [("반복 세 {\n}", "세"), ("반복 -1 {\n}", "-1"), ("반복 2.5 {\n}", "2.5")] {
        let (error, _) = failure_of(src);
        assert_eq!(error,
                   RuntimeError::InvalidCount { count: count.to_string(),
                                                line:  1, });
    }
}

#[test]
fn if_else_selects_one_branch() {
    let src = "x = 1\n만약 x == 1 {\n  출력(\"그렇다\")\n}\n아니면 {\n  출력(\"아니다\")\n}";
    assert_eq!(output_of(src), "그렇다\n");

    let src = "x = 2\n만약 x == 1 {\n  출력(\"그렇다\")\n}\n아니면 {\n  출력(\"아니다\")\n}";
    assert_eq!(output_of(src), "아니다\n");

    let src = "x = 2\n만약 x == 1 {\n  x = 100\n}\n출력(x)";
    assert_eq!(output_of(src), "2\n");
}

#[test]
fn indented_else_inside_loop() {
    let src = "i = 0\n반복 4 {\n  i = i + 1\n  만약 i > 2 {\n    출력(\"큼 \" + i)\n  }\n  아니면 {\n    출력(\"작음 \" + i)\n  }\n}";
    assert_eq!(output_of(src), "작음 1\n작음 2\n큼 3\n큼 4\n");
}

#[test]
fn false_condition_without_else_leaves_store_unchanged() {
    let mut interpreter = Interpreter::new(BufferHost::new());
    interpreter.run("a = 1\n만약 a > 1 {\n  a = 2\n  b = 3\n}").unwrap();
    assert_eq!(variable(&interpreter, "a"), Value::Number(1.0));
    assert!(!interpreter.variables().contains("b"));
    assert_eq!(interpreter.variables().len(), 1);
}

#[test]
fn input_is_coerced() {
    let src = "나이 = 입력(\"몇 살이에요?\")\n이름 = 입력()\n빈칸 = 입력\n출력(나이 + 1)\n출력(이름 + 1)";
    let mut interpreter = Interpreter::new(BufferHost::with_inputs(["20", "철수"]));
    interpreter.run(src).unwrap();

    assert_eq!(interpreter.host().output(), "21\n철수1\n");
    assert_eq!(interpreter.host().prompts(), ["몇 살이에요?", "", ""]);
    assert_eq!(variable(&interpreter, "빈칸"), Value::Text(String::new()));

    assert_eq!(output_with_inputs("x = 입력(\"\")\n출력(x * 2)", &[" 1.5 "]), "3\n");
}

#[test]
fn unrecognized_statements_fail() {
    for src in ["출력", "그냥 글자", "}", "아니면 {", "2x = 3"] {
        let (error, _) = failure_of(src);
        assert!(matches!(error, RuntimeError::UnrecognizedStatement { line: 1, .. }),
                "{src}: {error:?}");
    }
}

#[test]
fn error_inside_nested_block_reports_source_line_and_aborts() {
    let src = "x = 0\n반복 5 {\n  x = x + 1\n  만약 x == 3 {\n    y = 없음\n  }\n}\n출력(\"끝\")";
    let (error, interpreter) = failure_of(src);

    assert_eq!(error,
               RuntimeError::UndefinedVariable { name: "없음".to_string(),
                                                 line: 5, });
    assert_eq!(variable(&interpreter, "x"), Value::Number(3.0));
    assert_eq!(interpreter.depth(), 0);
    assert_eq!(interpreter.host().error_line(), Some(4));
    assert_eq!(interpreter.host().lines(),
               ["❌ 5번째 줄에서 오류가 있어요", "   '없음' 이라는 변수는 아직 없어요"]);
}

#[test]
fn output_before_error_is_kept() {
    let mut interpreter = Interpreter::new(BufferHost::new());
    let diagnostic = interpreter.run_with_diagnostic("출력(1)\n출력(\"a\" - 1)\n출력(2)")
                                .unwrap_err();

    assert_eq!(diagnostic.line, 2);
    assert_eq!(interpreter.host().lines().len(), 3);
    assert_eq!(interpreter.host().lines()[0], "1");
}

#[test]
fn unterminated_block_runs_to_end() {
    assert_eq!(output_of("만약 1 == 1 {\n  출력(\"열림\")"), "열림\n");
}

#[test]
fn each_run_starts_with_an_empty_store() {
    let mut interpreter = Interpreter::new(BufferHost::new());
    interpreter.run("x = 1").unwrap();
    assert!(!interpreter.variables().is_empty());
    assert!(interpreter.run("출력(x)").is_err());
    assert!(interpreter.variables().is_empty());
}

#[test]
fn numbers_print_in_exponent_form_at_extreme_magnitudes() {
    assert_eq!(output_of("출력(1000000000 * 1000000000 * 1000)"), "1e+21\n");
    assert_eq!(output_of("출력(1000000000 * 1000000000 * 100)"), "100000000000000000000\n");
    assert_eq!(output_of("출력(1 / 10000000)"), "1e-7\n");
    assert_eq!(output_of("출력(1 / 1000000)"), "0.000001\n");
}

#[test]
fn host_is_handed_back_after_a_run() {
    let mut interpreter = Interpreter::new(BufferHost::new());
    interpreter.run("출력(\"안녕\")").unwrap();
    interpreter.host_mut().append("끝\n");

    let host = interpreter.into_host();
    assert_eq!(host.lines(), ["안녕", "끝"]);
    assert_eq!(host.error_line(), None);
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.ks").unwrap();
    let output = output_of(&contents);
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "3 x 1 = 3");
    assert_eq!(lines[8], "3 x 9 = 27");
    assert_eq!(lines[9], "합계는 55");
    assert_eq!(lines[10], "짝수: 2");
    assert_success(&contents);
}
