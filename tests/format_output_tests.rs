//! Output tests for the formatter, including its textual quirks.

use insta::assert_snapshot;
use opspace::format_source;

fn fmt(text: &str) -> String {
    format_source(text).expect("format")
}

#[test]
fn snapshot_operator_spacing() {
    assert_snapshot!(fmt("x=y"), @"x = y");
    assert_snapshot!(fmt("x==y"), @"x == y");
    assert_snapshot!(fmt("ok=a!=b"), @"ok = a != b");
    assert_snapshot!(fmt("r=a*b/c-d"), @"r = a * b / c - d");
}

#[test]
fn snapshot_two_pass_quirks() {
    assert_snapshot!(fmt("a=-b"), @"a =  - b");
    assert_snapshot!(fmt("x ==y"), @"x == y");
    assert_snapshot!(fmt("a===b"), @"a === b");
    assert_snapshot!(fmt("i+=1"), @"i +  = 1");
}

#[test]
fn snapshot_syntax_unaware_rewrites() {
    assert_snapshot!(fmt(r#"url="http://a/b""#), @r#"url = "http: /  / a / b""#);
    assert_snapshot!(fmt("n=1e-5"), @"n = 1e - 5");
}

#[test]
fn multi_line_document() {
    let input = "fn main(){\nlet a=1,   b=2;\nlet c=[a,  \nb];\nassert!(a!=b);\n}\n";
    let expected = "fn main(){\nlet a = 1, b = 2;\nlet c = [a,\nb];\nassert!(a != b);\n}\n";
    similar_asserts::assert_eq!(fmt(input), expected);
}

#[test]
fn second_run_is_a_no_op() {
    let input = "total=price*qty,  tax=total/10\nflag=a==b,   \nnext=c!=d\n";
    let once = fmt(input);
    similar_asserts::assert_eq!(fmt(&once), once);
}
