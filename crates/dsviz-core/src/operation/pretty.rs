use super::models::{LinkedListOperation, NodeId};

fn fmt_next(next: &Option<NodeId>) -> String {
    match next {
        Some(id) => id.to_string(),
        None => "null".to_string(),
    }
}

/// Render an operation the way the log viewer displays it, e.g. `init(A, null)`
pub fn pretty_print(op: &LinkedListOperation) -> String {
    let args = match op {
        LinkedListOperation::Init { value, next, .. } => format!("{}, {}", value, fmt_next(next)),
        LinkedListOperation::SetValue { value, .. } => value.to_string(),
        LinkedListOperation::SetNext { next, .. } => fmt_next(next),
        LinkedListOperation::GetValue { .. } | LinkedListOperation::GetNext { .. } => {
            String::new()
        }
    };
    format!("{}({})", op.kind(), args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_print_every_kind() {
        let cases = [
            (
                LinkedListOperation::Init { id: 0, value: "A".into(), next: None },
                "init(A, null)",
            ),
            (
                LinkedListOperation::Init { id: 1, value: "B".into(), next: Some(0) },
                "init(B, 0)",
            ),
            (
                LinkedListOperation::SetValue { id: 1, value: 13i64.into() },
                "set_value(13)",
            ),
            (LinkedListOperation::GetValue { id: 1 }, "get_value()"),
            (LinkedListOperation::SetNext { id: 1, next: Some(4) }, "set_next(4)"),
            (LinkedListOperation::SetNext { id: 1, next: None }, "set_next(null)"),
            (LinkedListOperation::GetNext { id: 1 }, "get_next()"),
        ];

        for (op, expected) in cases {
            assert_eq!(pretty_print(&op), expected);
        }
    }
}
