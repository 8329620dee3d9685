// ============================================================================
// Calculator Session Example
// ============================================================================

use calc_engine::prelude::*;
use std::sync::Arc;

fn op(kind: OperationKind) -> Key {
    Key::Action(kind)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Calculator Session Example ===\n");

    let mut calc: Calculator =
        match Calculator::from_config(EngineConfig::classic(), Arc::new(LoggingEventHandler)) {
            Ok(calc) => calc,
            Err(reason) => {
                eprintln!("invalid configuration: {}", reason);
                return;
            },
        };

    let session: Vec<(&str, Key)> = vec![
        ("2", Key::Digit(2)),
        ("+", op(OperationKind::Binary(BinaryOp::Add))),
        ("3", Key::Digit(3)),
        ("=", op(OperationKind::Enter)),
        ("=", op(OperationKind::Enter)),
        ("sqr", op(OperationKind::Extra(ExtraOp::Square))),
        ("MS", op(OperationKind::Memory(MemoryOp::Store))),
        ("÷", op(OperationKind::Binary(BinaryOp::Divide))),
        ("0", Key::Digit(0)),
        ("=", op(OperationKind::Enter)),
        ("C", op(OperationKind::Clear)),
        ("MR", op(OperationKind::Memory(MemoryOp::Recall))),
        ("+", op(OperationKind::Binary(BinaryOp::Add))),
        ("1", Key::Digit(1)),
        ("0", Key::Digit(0)),
        ("%", op(OperationKind::Percent)),
        ("=", op(OperationKind::Enter)),
    ];

    for (label, key) in session {
        let screen = calc.press(key);
        println!("{:>4}  | {:<24} | {}", label, screen.history, screen.display);
    }

    println!("\nMemory: {}", calc.memory_display().unwrap_or_else(|| "empty".to_string()));
}
