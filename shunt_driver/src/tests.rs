use super::{convert, token_offset, Argument, Parser};

/// Removes the ANSI escape sequences from the rendered text.
fn strip(text: &str) -> String {
    let mut stripped = String::new();
    let mut chars = text.chars();

    while let Some(char) = chars.next() {
        if char == '\x1B' {
            for char in chars.by_ref() {
                if char == 'm' {
                    break;
                }
            }
        } else {
            stripped.push(char);
        }
    }

    stripped
}

fn argument(expression: &str) -> Argument {
    Argument {
        expression: expression.to_string(),
        arena_capacity: 0,
        arena_count: 1,
        stack_capacity: 0,
        dump_stack: false,
    }
}

#[test]
fn parse_flags() {
    let argument = Argument::try_parse_from([
        "shunt",
        "--arena-capacity",
        "4",
        "--arena-count",
        "2",
        "--dump-stack",
        "1+2",
    ])
    .unwrap();

    assert_eq!(argument.expression, "1+2");
    assert_eq!(argument.arena_capacity, 4);
    assert_eq!(argument.arena_count, 2);
    assert_eq!(argument.stack_capacity, 0);
    assert!(argument.dump_stack);

    let config = argument.config().resolved();
    assert_eq!(config.arena_capacity(), 4);
    assert_eq!(config.stack_capacity(), 16);
}

#[test]
fn prints_one_node_per_line() {
    assert_eq!(
        convert(&argument("2+3*4")).unwrap(),
        "Literal: 2.000\nLiteral: 3.000\nLiteral: 4.000\nOperator: Multiply\nOperator: Add\n"
    );
}

#[test]
fn dumps_output_stack() {
    let argument = Argument {
        dump_stack: true,
        stack_capacity: 2,
        ..argument("(1+2)^3")
    };

    assert_eq!(
        convert(&argument).unwrap(),
        "Stack Capacity: 8\nStack Size: 5\nStack Contents: ...\n\n\t4\tOperator: Power\n\t3\tLiteral: \
         3.000\n\t2\tOperator: Add\n\t1\tLiteral: 2.000\n\t0\tLiteral: 1.000\n"
    );
}

#[test]
fn reports_bad_symbol() {
    let report = strip(&convert(&argument("2+?1")).unwrap_err());

    assert!(report.starts_with("[error]: Unexpected symbol '?' starting at \"?1\"\n"));
    assert!(report.contains("1 ┃ 2+?1\n  ┃   ^ help: no token starts here"));
}

#[test]
fn reports_exhausted_arenas() {
    let argument = Argument {
        arena_capacity: 1,
        arena_count: 2,
        ..argument("1+2")
    };
    let report = strip(&convert(&argument).unwrap_err());

    assert!(report.starts_with("[error]: Insufficient nodes\n"));
    assert!(report.contains("  --> expression:1:3"));
}

#[test]
fn reports_mismatched_paren() {
    let unclosed = strip(&convert(&argument("1*(2+3")).unwrap_err());
    assert!(unclosed.contains("Mismatched parenthesis"));
    assert!(unclosed.contains("  ┃   ^ help: this parenthesis is never closed"));

    let unopened = strip(&convert(&argument("12)")).unwrap_err());
    assert!(unopened.contains("  ┃   ^ help: this parenthesis closes nothing"));
}

#[test]
fn token_offsets() {
    assert_eq!(token_offset("(12.5+3)", 0), 0);
    assert_eq!(token_offset("(12.5+3)", 2), 5);
    assert_eq!(token_offset("(12.5+3)", 5), 8);
}
