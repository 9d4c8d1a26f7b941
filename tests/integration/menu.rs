use super::common::{normalized, run_with_closed_stdin, run_with_input};

#[test]
fn menu_lists_every_entry_and_the_prompt() {
    let out = run_with_input("0\n");
    let stdout = normalized(&out.stdout);

    assert!(stdout.contains("快速测试"));
    assert!(stdout.contains("完整测试"));
    assert!(stdout.contains("查看已保存的数据"));
    assert!(stdout.contains("启动定时监控"));
    assert!(stdout.contains("退出"));
    assert!(stdout.contains("请输入选项 (0-4)"));
}

#[test]
fn quit_prints_the_exit_message_and_succeeds() {
    let out = run_with_input("0\n");
    let stdout = normalized(&out.stdout);

    assert_eq!(out.status.code(), Some(0));
    assert!(stdout.contains("再见!"));
    assert!(!stdout.contains("按回车键退出"));
}

#[test]
fn out_of_range_digit_fails_without_a_pause() {
    let out = run_with_input("5\n");

    assert_eq!(out.status.code(), Some(1));
    assert!(normalized(&out.stderr).contains("无效选项"));
    assert!(!normalized(&out.stdout).contains("按回车键退出"));
}

#[test]
fn non_numeric_input_fails() {
    let out = run_with_input("abc\n");

    assert_eq!(out.status.code(), Some(1));
    assert!(normalized(&out.stderr).contains("无效选项"));
}

#[test]
fn empty_line_fails() {
    let out = run_with_input("\n");

    assert_eq!(out.status.code(), Some(1));
    assert!(normalized(&out.stderr).contains("无效选项"));
}

#[test]
fn invalid_error_names_the_valid_tokens() {
    let out = run_with_input("9\n");
    let stderr = normalized(&out.stderr);

    assert!(stderr.contains("'9'"));
    assert!(stderr.contains("1, 2, 3, 4, 0"));
}

#[test]
fn eof_before_any_selection_exits_cleanly() {
    let out = run_with_closed_stdin();

    assert_eq!(out.status.code(), Some(0));
    assert!(normalized(&out.stderr).is_empty());
}
